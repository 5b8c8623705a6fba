mod serial_service;
mod status_client;

pub use serial_service::*;
pub use status_client::*;
