pub mod color_ramp;
pub mod triangulate;
pub mod viewport;
