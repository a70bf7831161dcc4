pub mod pointer;
pub mod viewport;

pub use pointer::{PointerButton, PointerState};
pub use viewport::Viewport;
