pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;

#[cfg(test)]
mod testing;

// Re-export key types at crate root for convenience
pub use api::config::{SparkleConfig, RenderMode};
pub use api::sparkle::Sparkle;
pub use api::types::{FrameHandle, Size, ElementRect, Rgb};
pub use core::point::Point;
pub use core::rng::Rng;
pub use core::time::Debounce;
pub use renderer::traits::{Surface, Container, FrameScheduler};
pub use systems::color_ramp::{ColorRamp, alpha_hex, DEFAULT_GRADIENT};
pub use systems::triangulate::{Triangle, for_each_triangle, triangle_intensity};
pub use systems::viewport::is_within_viewport;
