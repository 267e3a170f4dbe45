pub mod body;
mod diagnostics;
pub mod system;

pub use body::{Body, BodyID};
pub use system::{NBodySystem, PAIRS};
