pub mod constants;
pub mod controller;
pub mod dial;
pub mod error;
pub mod position;

pub use constants::*;
pub use controller::*;
pub use dial::*;
pub use error::*;
pub use position::*;
