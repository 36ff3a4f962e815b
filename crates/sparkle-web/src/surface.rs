//! DOM-backed implementations of the engine's `Surface` and `Container`.

use glam::DVec2;
use sparkle_engine::{Container, ElementRect, RenderMode, Size, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

/// Viewport-relative top and rendered height of an element.
pub fn element_rect(element: &HtmlElement) -> ElementRect {
    ElementRect::new(
        element.get_bounding_client_rect().top(),
        element.offset_height() as f64,
    )
}

/// A `<canvas>` and its 2-D context. The context is looked up once; if the
/// browser refuses one, every paint is skipped.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<CanvasRenderingContext2d>().ok(),
            Ok(None) => None,
            Err(err) => {
                log::error!("sparkle-web: getContext('2d') threw: {:?}", err);
                None
            }
        };
        Self { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn has_context(&self) -> bool {
        self.ctx.is_some()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn bounding_rect(&self) -> Option<ElementRect> {
        if !self.canvas.is_connected() {
            return None;
        }
        Some(element_rect(&self.canvas))
    }

    fn fill_background(&mut self, color: &str, width: f64, height: f64) {
        let Some(ctx) = &self.ctx else { return };
        ctx.set_fill_style_str(color);
        ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn draw_triangle(&mut self, corners: [DVec2; 3], color: &str, mode: RenderMode) {
        let Some(ctx) = &self.ctx else { return };
        let [a, b, c] = corners;
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.line_to(c.x, c.y);
        if mode.strokes() {
            ctx.set_stroke_style_str(color);
            ctx.stroke();
        }
        ctx.close_path();
        if mode.fills() {
            ctx.set_fill_style_str(color);
            ctx.fill();
        }
    }
}

/// The element the canvas is stretched over.
pub struct DomContainer {
    element: HtmlElement,
}

impl DomContainer {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl Container for DomContainer {
    fn size(&self) -> Option<Size> {
        if !self.element.is_connected() {
            return None;
        }
        Some(Size::new(
            self.element.offset_width() as f64,
            self.element.offset_height() as f64,
        ))
    }
}
