pub mod gravity;
pub mod vector;

pub use vector::Vec3;
