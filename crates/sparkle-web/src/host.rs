use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use sparkle_engine::{Debounce, Sparkle, SparkleConfig};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::agent::{needs_scroll_pause, user_agent};
use crate::scheduler::{AnimationFrameScheduler, FrameCallback};
use crate::surface::{CanvasSurface, DomContainer};

type Engine = Sparkle<CanvasSurface, DomContainer, AnimationFrameScheduler>;

/// A window listener the backdrop registered and must remove on teardown.
struct Listener {
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

/// Mounts the constellation engine on a canvas/container pair.
///
/// One backdrop per mounted element. Window `resize` (debounced), `scroll`
/// and `scrollend` are forwarded to the engine until [`destroy`] is called
/// or the backdrop is freed.
///
/// [`destroy`]: SparkleBackdrop::destroy
#[wasm_bindgen]
pub struct SparkleBackdrop {
    engine: Rc<RefCell<Engine>>,
    frame_callback: FrameCallback,
    resize_timer: FrameCallback,
    pending_timeout: Rc<Cell<Option<i32>>>,
    debounce: Rc<RefCell<Debounce>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl SparkleBackdrop {
    /// `options` is a JSON object with any subset of the config fields.
    /// Bad JSON falls back to the defaults; a missing element leaves the
    /// backdrop inert. Never throws.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: Option<HtmlCanvasElement>,
        container: Option<HtmlElement>,
        options: Option<String>,
    ) -> SparkleBackdrop {
        let mut config = match options.as_deref() {
            Some(json) => SparkleConfig::from_json(json).unwrap_or_else(|err| {
                log::error!("sparkle-web: invalid options ({}), using defaults", err);
                SparkleConfig::default()
            }),
            None => SparkleConfig::default(),
        };
        if config.seed.is_none() {
            config.seed = Some(random_seed());
        }
        if user_agent().is_some_and(|agent| needs_scroll_pause(&agent)) {
            config.pause_during_scroll = true;
        }

        let bound = canvas.is_some() && container.is_some();
        if !bound {
            log::warn!("sparkle-web: canvas or container not mounted, backdrop is inert");
        }

        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        let engine = Rc::new_cyclic(|weak: &Weak<RefCell<Engine>>| {
            let weak = weak.clone();
            *frame_callback.borrow_mut() = Some(Closure::new(move || {
                with_engine(&weak, |engine| engine.on_frame());
            }));
            RefCell::new(Sparkle::new(
                config,
                canvas.map(CanvasSurface::new),
                container.map(DomContainer::new),
                AnimationFrameScheduler::new(frame_callback.clone()),
            ))
        });

        let mut backdrop = SparkleBackdrop {
            engine,
            frame_callback,
            resize_timer: Rc::new(RefCell::new(None)),
            pending_timeout: Rc::new(Cell::new(None)),
            debounce: Rc::new(RefCell::new(Debounce::default())),
            listeners: Vec::new(),
        };
        if bound {
            backdrop.bind_events();
        }
        backdrop
    }

    pub fn start(&self) {
        with_engine(&Rc::downgrade(&self.engine), |engine| engine.start());
    }

    pub fn stop(&self) {
        with_engine(&Rc::downgrade(&self.engine), |engine| engine.stop());
    }

    /// Paint one frame immediately. Returns the number of triangles drawn.
    pub fn paint(&self) -> u32 {
        let mut drawn = 0;
        with_engine(&Rc::downgrade(&self.engine), |engine| drawn = engine.paint() as u32);
        drawn
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.engine.try_borrow().map(|e| e.is_running()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = pointCount)]
    pub fn point_count(&self) -> u32 {
        self.engine.try_borrow().map(|e| e.points().len() as u32).unwrap_or(0)
    }

    /// Stop animating and detach every window listener. Idempotent.
    pub fn destroy(&mut self) {
        self.teardown();
    }
}

impl SparkleBackdrop {
    fn bind_events(&mut self) {
        let timer_weak = Rc::downgrade(&self.resize_timer);
        let engine_weak = Rc::downgrade(&self.engine);
        let (debounce, pending) = (self.debounce.clone(), self.pending_timeout.clone());
        *self.resize_timer.borrow_mut() = Some(Closure::new(move || {
            pending.set(None);
            let now = js_sys::Date::now();
            let fire = debounce.borrow_mut().poll(now);
            if fire {
                with_engine(&engine_weak, |engine| engine.on_resize());
                return;
            }
            // a later resize moved the deadline
            let remaining = debounce.borrow().remaining_ms(now);
            if let (Some(remaining), Some(timer)) = (remaining, timer_weak.upgrade()) {
                arm_timeout(&timer, &pending, remaining);
            }
        }));

        let (timer, pending, debounce) = (
            self.resize_timer.clone(),
            self.pending_timeout.clone(),
            self.debounce.clone(),
        );
        self.listen("resize", move || {
            let delay = {
                let mut d = debounce.borrow_mut();
                d.trigger(js_sys::Date::now());
                d.delay_ms()
            };
            arm_timeout(&timer, &pending, delay);
        });

        let engine = Rc::downgrade(&self.engine);
        self.listen("scroll", move || with_engine(&engine, |e| e.on_scroll()));

        let engine = Rc::downgrade(&self.engine);
        self.listen("scrollend", move || with_engine(&engine, |e| e.on_scroll_end()));
    }

    fn listen(&mut self, event: &'static str, handler: impl FnMut() + 'static) {
        let Some(window) = web_sys::window() else {
            log::error!("sparkle-web: no window, cannot listen for {}", event);
            return;
        };
        let closure = Closure::<dyn FnMut()>::new(handler);
        if let Err(err) = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::error!("sparkle-web: addEventListener({}) failed: {:?}", event, err);
            return;
        }
        self.listeners.push(Listener { event, closure });
    }

    fn teardown(&mut self) {
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.stop();
        }
        if let Some(window) = web_sys::window() {
            for listener in &self.listeners {
                let _ = window.remove_event_listener_with_callback(
                    listener.event,
                    listener.closure.as_ref().unchecked_ref(),
                );
            }
            if let Some(id) = self.pending_timeout.take() {
                window.clear_timeout_with_handle(id);
            }
        }
        self.listeners.clear();
        self.frame_callback.borrow_mut().take();
        self.resize_timer.borrow_mut().take();
    }
}

impl Drop for SparkleBackdrop {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn with_engine(engine: &Weak<RefCell<Engine>>, f: impl FnOnce(&mut Engine)) {
    let Some(engine) = engine.upgrade() else { return };
    match engine.try_borrow_mut() {
        Ok(mut engine) => f(&mut engine),
        Err(_) => log::warn!("sparkle-web: engine busy, dropping event"),
    };
}

/// (Re)arm the resize timer, replacing any pending timeout.
fn arm_timeout(timer: &FrameCallback, pending: &Cell<Option<i32>>, delay_ms: f64) {
    let Some(window) = web_sys::window() else { return };
    if let Some(id) = pending.take() {
        window.clear_timeout_with_handle(id);
    }
    let slot = timer.borrow();
    let Some(cb) = slot.as_ref() else { return };
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay_ms.ceil() as i32,
    ) {
        Ok(id) => pending.set(Some(id)),
        Err(err) => log::error!("sparkle-web: setTimeout failed: {:?}", err),
    }
}

fn random_seed() -> u64 {
    let half = || (js_sys::Math::random() * u32::MAX as f64) as u64;
    (half() << 32) | half()
}
