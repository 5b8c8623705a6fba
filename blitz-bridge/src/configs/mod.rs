mod settings;

pub use settings::{Bridge, Logger, Serial, Settings};
