pub mod flags;
pub mod size;

pub use flags::*;
pub use size::*;
