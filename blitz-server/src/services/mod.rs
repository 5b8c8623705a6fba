mod clock_service;
mod mock_service;
mod model_service;
mod tariff_service;

pub use clock_service::*;
pub use mock_service::*;
pub use model_service::*;
pub use tariff_service::*;
