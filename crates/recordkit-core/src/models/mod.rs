//! Domain models for recordkit.

mod academic;
mod respiratory;
pub mod timestamp;
mod validation;

pub use academic::*;
pub use respiratory::*;
pub use validation::*;
