pub mod math;
pub mod sweep;
pub mod world;
