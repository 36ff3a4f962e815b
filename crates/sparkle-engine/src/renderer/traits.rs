//! Host seams for the constellation engine.
//!
//! The engine never touches the DOM. A host (the `sparkle-web` crate in the
//! browser, test doubles natively) supplies a drawing surface, the container
//! the surface is sized from, and a "next paint" scheduler.
//!
//! # Example Implementation
//!
//! ```ignore
//! struct Canvas2dSurface {
//!     canvas: HtmlCanvasElement,
//!     ctx: Option<CanvasRenderingContext2d>,
//! }
//!
//! impl Surface for Canvas2dSurface {
//!     fn backend(&self) -> &'static str { "canvas2d" }
//!     fn has_context(&self) -> bool { self.ctx.is_some() }
//!     fn resize(&mut self, width: u32, height: u32) { /* set width/height attributes */ }
//!     // ...
//! }
//! ```

use glam::DVec2;

use crate::api::config::RenderMode;
use crate::api::types::{ElementRect, FrameHandle, Size};

/// A 2-D drawing target (a canvas element plus its rendering context).
pub trait Surface {
    /// Backend identifier (e.g., "canvas2d", "recording").
    fn backend(&self) -> &'static str;

    /// False when no 2-D context could be obtained. Paints are skipped.
    fn has_context(&self) -> bool {
        true
    }

    /// Set the surface's pixel dimensions (canvas `width`/`height` attributes).
    fn resize(&mut self, width: u32, height: u32);

    /// Current position of the surface relative to the viewport, if it is attached.
    fn bounding_rect(&self) -> Option<ElementRect>;

    /// Fill `[0, 0, width, height]` with `color`, wiping the previous frame.
    fn fill_background(&mut self, color: &str, width: f64, height: f64);

    /// Trace A→B→C and paint it according to `mode` with `color`.
    fn draw_triangle(&mut self, corners: [DVec2; 3], color: &str, mode: RenderMode);
}

/// The element whose size the surface follows.
pub trait Container {
    /// Rendered size in CSS pixels, or `None` when detached.
    fn size(&self) -> Option<Size>;
}

/// The host's "next paint" primitive (`requestAnimationFrame`).
///
/// When a requested frame fires, the host must call
/// [`Sparkle::on_frame`](crate::Sparkle::on_frame).
pub trait FrameScheduler {
    /// Schedule one frame callback. `None` if the host cannot schedule.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a previously requested frame. Synchronous.
    fn cancel_frame(&mut self, handle: FrameHandle);
}
