pub mod draw;
pub mod verify;

pub use draw::*;
pub use verify::*;
