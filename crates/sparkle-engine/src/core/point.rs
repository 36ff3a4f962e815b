use glam::DVec2;

/// A single simulated particle in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: DVec2,
    /// Per-frame displacement.
    pub velocity: DVec2,
}

impl Point {
    pub fn new(x: f64, y: f64, x_speed: f64, y_speed: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            velocity: DVec2::new(x_speed, y_speed),
        }
    }

    /// Move one step and wrap inside `[-max/10, max * 1.1)` on each axis.
    pub fn advance(&mut self, max_width: f64, max_height: f64) {
        self.position.x = wrap_axis(self.position.x + self.velocity.x, max_width);
        self.position.y = wrap_axis(self.position.y + self.velocity.y, max_height);
    }
}

/// Remainder against the expanded extent, then snap anything still past the
/// negative margin back to `max`. `%` keeps the dividend's sign, so a point
/// drifting left yields a negative remainder that the snap catches.
fn wrap_axis(value: f64, max: f64) -> f64 {
    let extent = max + max * 0.1;
    if extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value % extent;
    if wrapped < max / -10.0 {
        max
    } else {
        wrapped
    }
}
