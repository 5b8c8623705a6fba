use std::io::Write;

use serialport::{SerialPort, available_ports};

use crate::configs::Serial;
use crate::error::BridgeError;
use crate::pattern::Pattern;

/// Destination of the load pattern, normally the microcontroller.
pub trait PatternSink: Send {
    fn write_pattern(&mut self, pattern: &Pattern) -> Result<(), BridgeError>;
}

/// Opens a fresh sink. The bridge calls it again after the sink fails.
pub trait Connector: Send {
    /// Human readable name of the target, for logs.
    fn target(&self) -> String;

    fn open(&self) -> Result<Box<dyn PatternSink>, BridgeError>;
}

pub struct SerialSink {
    port: Box<dyn SerialPort>,
}

impl PatternSink for SerialSink {
    fn write_pattern(&mut self, pattern: &Pattern) -> Result<(), BridgeError> {
        self.port.write_all(&pattern.as_bytes())?;
        self.port.flush()?;

        Ok(())
    }
}

pub struct SerialService {
    serial: Serial,
}

impl SerialService {
    pub fn new(serial: Serial) -> Self {
        Self { serial }
    }

    fn port_path(&self) -> Result<String, BridgeError> {
        match &self.serial.port_path {
            Some(port_path) => Ok(port_path.clone()),
            None => available_ports()?
                .first()
                .map(|port| port.port_name.clone())
                .ok_or(BridgeError::NoPortFound),
        }
    }
}

impl Connector for SerialService {
    fn target(&self) -> String {
        self.serial
            .port_path
            .clone()
            .unwrap_or_else(|| "first available serial port".to_string())
    }

    fn open(&self) -> Result<Box<dyn PatternSink>, BridgeError> {
        let port_path = self.port_path()?;

        tracing::debug!("connect to port: {} at {} baud", port_path, self.serial.baud_rate);

        let port = serialport::new(&port_path, self.serial.baud_rate)
            .timeout(self.serial.read_timeout())
            .open()?;

        Ok(Box::new(SerialSink { port }))
    }
}
