pub mod log_capture;
pub mod mock_device;
