pub mod point;
pub mod rng;
pub mod time;
