pub mod food;
pub mod input;
pub mod movement;

pub use food::*;
pub use input::*;
pub use movement::*;
