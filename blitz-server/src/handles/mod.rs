mod health_handle;
mod history_handle;
mod status_handle;

pub use health_handle::*;
pub use history_handle::*;
pub use status_handle::*;
