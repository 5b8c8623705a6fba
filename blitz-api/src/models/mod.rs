mod history;
mod load;
mod status;

pub use history::*;
pub use load::*;
pub use status::*;
