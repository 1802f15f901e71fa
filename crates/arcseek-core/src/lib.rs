pub mod color;
pub mod gradient;
pub mod math;
