mod chain;
pub mod config;
mod decimal;
mod errors;
mod format;
mod inbound;
mod transport;
mod types;

pub use chain::*;
pub use decimal::*;
pub use errors::*;
pub use format::*;
pub use inbound::*;
pub use transport::*;
pub use types::*;
