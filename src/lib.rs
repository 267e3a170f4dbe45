pub mod consts;
pub mod driver;
pub mod math;
pub mod model;
