use std::io;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("Serial communication error: {0}")]
    Io(#[from] io::Error),

    #[error("No serial port found")]
    NoPortFound,

    #[error("Serial port not connected")]
    Disconnected,
}
