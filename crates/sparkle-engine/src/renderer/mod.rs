pub mod traits;

pub use traits::{Container, FrameScheduler, Surface};
