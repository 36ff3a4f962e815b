//! WASM bridge for the Sparkle backdrop.
//!
//! ```js
//! import init, { sparkle_init, SparkleBackdrop } from "sparkle_web";
//!
//! await init();
//! sparkle_init();
//! const backdrop = new SparkleBackdrop(canvas, container, JSON.stringify({
//!     background_color: "#111111",
//!     mode: "lines_and_polygons",
//! }));
//! // on unmount
//! backdrop.destroy();
//! backdrop.free();
//! ```

pub mod agent;
pub mod host;
pub mod scheduler;
pub mod surface;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub use host::SparkleBackdrop;
pub use scheduler::AnimationFrameScheduler;
pub use surface::{CanvasSurface, DomContainer};

/// Install the panic hook and route `log` to the browser console.
/// Safe to call more than once.
#[wasm_bindgen]
pub fn sparkle_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("sparkle-web: initialized");
}

/// Whether `element` is roughly on screen (one element-height of slack
/// above and below). `null` is never on screen.
#[wasm_bindgen(js_name = isWithinViewport)]
pub fn is_within_viewport(element: Option<HtmlElement>) -> bool {
    sparkle_engine::is_within_viewport(element.as_ref().map(surface::element_rect))
}
