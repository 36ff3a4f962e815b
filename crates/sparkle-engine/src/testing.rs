//! Test doubles for the host seams.

use glam::DVec2;

use crate::api::config::RenderMode;
use crate::api::types::{ElementRect, FrameHandle, Size};
use crate::renderer::traits::{Container, FrameScheduler, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub corners: [DVec2; 3],
    pub color: String,
    pub mode: RenderMode,
}

/// Records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub pixel_size: (u32, u32),
    pub rect: Option<ElementRect>,
    pub no_context: bool,
    pub backgrounds: Vec<(String, f64, f64)>,
    pub draws: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn on_screen() -> Self {
        Self {
            rect: Some(ElementRect::new(0.0, 300.0)),
            ..Self::default()
        }
    }

    pub fn clear_log(&mut self) {
        self.backgrounds.clear();
        self.draws.clear();
    }
}

impl Surface for RecordingSurface {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn has_context(&self) -> bool {
        !self.no_context
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.pixel_size = (width, height);
    }

    fn bounding_rect(&self) -> Option<ElementRect> {
        self.rect
    }

    fn fill_background(&mut self, color: &str, width: f64, height: f64) {
        self.backgrounds.push((color.to_string(), width, height));
    }

    fn draw_triangle(&mut self, corners: [DVec2; 3], color: &str, mode: RenderMode) {
        self.draws.push(DrawCall {
            corners,
            color: color.to_string(),
            mode,
        });
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedContainer(pub Option<Size>);

impl Container for FixedContainer {
    fn size(&self) -> Option<Size> {
        self.0
    }
}

/// Hands out increasing handles and remembers what happened to them.
#[derive(Debug, Default)]
pub struct CountingScheduler {
    next: i32,
    pub requested: usize,
    pub cancelled: Vec<FrameHandle>,
    pub refuse: bool,
}

impl CountingScheduler {
    /// A host that never grants a frame.
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        self.requested += 1;
        Some(FrameHandle(self.next))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}
