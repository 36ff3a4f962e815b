use glam::DVec2;

use crate::api::config::SparkleConfig;
use crate::api::types::{FrameHandle, Size};
use crate::core::point::Point;
use crate::core::rng::Rng;
use crate::renderer::traits::{Container, FrameScheduler, Surface};
use crate::systems::color_ramp::ColorRamp;
use crate::systems::triangulate::for_each_triangle;
use crate::systems::viewport::is_within_viewport;

/// The particle-constellation backdrop.
///
/// Owns the point set and drives it one frame at a time: refill the
/// background, paint every triple of points that sit within the distance
/// threshold of each other, then advance the points. The host delivers
/// frames, resizes and scrolls; the engine decides when to keep running.
///
/// Missing bindings never panic. Without a surface (or a 2-D context) paints
/// are no-ops; without a container the point set stays empty.
pub struct Sparkle<S: Surface, C: Container, F: FrameScheduler> {
    config: SparkleConfig,
    surface: Option<S>,
    container: Option<C>,
    scheduler: F,
    ramp: ColorRamp,
    rng: Rng,
    points: Vec<Point>,
    number_of_points: usize,
    /// Simulation extent: container size / resolution.
    extent: DVec2,
    /// Canvas width/height attributes.
    pixel_size: (u32, u32),
    /// Pending frame. `Some` means running.
    frame: Option<FrameHandle>,
}

impl<S: Surface, C: Container, F: FrameScheduler> Sparkle<S, C, F> {
    /// Lower bound on the point count, however small the container.
    pub const MIN_POINTS: usize = 75;
    /// Canvas pixels per point.
    pub const PIXELS_PER_POINT: f64 = 2500.0;
    /// Seed used when neither the config nor the host provides one.
    pub const DEFAULT_SEED: u64 = 0x5EED_C0DE;

    /// Bind to the host, size from the container, seed points and start.
    pub fn new(config: SparkleConfig, surface: Option<S>, container: Option<C>, scheduler: F) -> Self {
        let config = config.normalized();
        match &surface {
            None => log::error!("sparkle: cannot find canvas, running without output"),
            Some(s) if !s.has_context() => {
                log::error!("sparkle: {} surface has no 2d context", s.backend())
            }
            Some(_) => {}
        }

        let rng = Rng::new(config.seed.unwrap_or(Self::DEFAULT_SEED));
        let mut sparkle = Self {
            config,
            surface,
            container,
            scheduler,
            ramp: ColorRamp::default(),
            rng,
            points: Vec::new(),
            number_of_points: 0,
            extent: DVec2::ZERO,
            pixel_size: (0, 0),
            frame: None,
        };
        sparkle.set_size();
        sparkle.start();
        sparkle
    }

    /// Point count for a canvas of the given pixel size.
    pub fn point_count(width: u32, height: u32) -> usize {
        let by_area = (width as f64 * height as f64 / Self::PIXELS_PER_POINT).ceil() as usize;
        by_area.max(Self::MIN_POINTS)
    }

    /// Resize the canvas to container / resolution and reseed the points.
    pub fn set_size(&mut self) {
        let Some(size) = self.container.as_ref().and_then(|c| c.size()) else {
            log::warn!("sparkle: container is not mounted, skipping resize");
            self.points.clear();
            self.number_of_points = 0;
            return;
        };

        let resolution = self.config.resolution;
        self.extent = DVec2::new(size.width / resolution, size.height / resolution).max(DVec2::ZERO);
        self.pixel_size = (self.extent.x as u32, self.extent.y as u32);
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(self.pixel_size.0, self.pixel_size.1);
        }

        self.number_of_points = Self::point_count(self.pixel_size.0, self.pixel_size.1);
        self.reset_points();
        log::debug!(
            "sparkle: canvas {}x{}, {} points",
            self.pixel_size.0,
            self.pixel_size.1,
            self.number_of_points
        );
    }

    fn reset_points(&mut self) {
        let speed = self.config.speed_range;
        let extent = self.extent;
        let rng = &mut self.rng;
        self.points.clear();
        self.points.extend((0..self.number_of_points).map(|_| {
            let x = rng.next_f64() * extent.x;
            let y = rng.next_f64() * extent.y;
            let x_speed = rng.next_f64() * speed * rng.next_sign();
            let y_speed = rng.next_f64() * speed * rng.next_sign();
            Point::new(x, y, x_speed, y_speed)
        }));
    }

    /// True when a paint would reach the screen.
    fn can_paint(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.has_context()) && !self.points.is_empty()
    }

    /// One frame: background, triangles, then advance every point.
    /// Returns the number of triangles drawn.
    pub fn paint(&mut self) -> usize {
        let Some(surface) = self.surface.as_mut() else {
            return 0;
        };
        if !surface.has_context() || self.points.is_empty() {
            return 0;
        }

        surface.fill_background(
            &self.config.background_color,
            self.pixel_size.0 as f64,
            self.pixel_size.1 as f64,
        );

        let ramp = &self.ramp;
        let mode = self.config.mode;
        let drawn = for_each_triangle(&self.points, self.config.distance_threshold, |t| {
            surface.draw_triangle(t.corners, &ramp.color_at(t.intensity), mode);
        });

        for point in &mut self.points {
            point.advance(self.extent.x, self.extent.y);
        }

        log::trace!("sparkle: {} triangles", drawn);
        drawn
    }

    /// Begin animating. Without autoplay, paint a single static frame instead.
    pub fn start(&mut self) {
        if !self.config.autoplay {
            self.paint();
            return;
        }
        if self.frame.is_some() {
            return;
        }
        if !self.can_paint() {
            log::warn!("sparkle: nothing to draw, not starting the frame loop");
            return;
        }
        self.frame = self.scheduler.request_frame();
        if self.frame.is_none() {
            log::warn!("sparkle: host refused to schedule a frame");
        }
    }

    /// Cancel the pending frame, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// The scheduled frame fired: paint and schedule the next one.
    pub fn on_frame(&mut self) {
        if self.frame.take().is_none() {
            // cancelled after the host had already dispatched it
            return;
        }
        self.paint();
        if !self.can_paint() {
            log::warn!("sparkle: bindings lost, frame loop stopped");
            return;
        }
        self.frame = self.scheduler.request_frame();
    }

    /// Pause when scrolled away, resume when scrolled back.
    pub fn on_scroll(&mut self) {
        if self.config.pause_during_scroll {
            self.stop();
            return;
        }

        if !self.is_visible() {
            if self.is_running() {
                self.stop();
            }
        } else if self.config.autoplay && !self.is_running() {
            self.start();
        }
    }

    /// Counterpart of the scroll pause enabled by `pause_during_scroll`.
    pub fn on_scroll_end(&mut self) {
        if self.config.pause_during_scroll && self.config.autoplay && self.is_visible() {
            self.start();
        }
    }

    /// Debounced window resize. A stopped engine repaints once so the frozen
    /// frame matches the new size.
    pub fn on_resize(&mut self) {
        self.set_size();
        if !self.is_running() {
            self.paint();
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    pub fn is_visible(&self) -> bool {
        is_within_viewport(self.surface.as_ref().and_then(|s| s.bounding_rect()))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn number_of_points(&self) -> usize {
        self.number_of_points
    }

    /// Canvas width/height attributes after the last resize.
    pub fn pixel_size(&self) -> (u32, u32) {
        self.pixel_size
    }

    /// Simulation extent in canvas pixels.
    pub fn extent(&self) -> Size {
        Size::new(self.extent.x, self.extent.y)
    }

    pub fn config(&self) -> &SparkleConfig {
        &self.config
    }

    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    #[cfg(test)]
    pub(crate) fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    #[cfg(test)]
    pub(crate) fn container_mut(&mut self) -> Option<&mut C> {
        self.container.as_mut()
    }

    #[cfg(test)]
    pub(crate) fn points_mut(&mut self) -> &mut Vec<Point> {
        &mut self.points
    }
}
