pub mod config;
pub mod errors;
pub mod event;
pub mod handler;
pub mod telemetry;

pub use config::{RuntimeConfig, RuntimeMode};
pub use errors::{HandlerError, Result};
pub use event::{InboundRequest, OutboundResponse, ResponseBody};
pub use handler::{extract_authorization, handle};
