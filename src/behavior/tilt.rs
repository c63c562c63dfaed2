pub const MAX_TILT_DEG: f64 = 6.0;
pub const PERSPECTIVE_PX: u32 = 900;

/// Bounding rectangle of the tilted surface, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation applied to a surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const LEVEL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn from_pointer(bounds: Bounds, x: f64, y: f64) -> Self {
        Self::from_pointer_with_max(bounds, x, y, MAX_TILT_DEG)
    }

    /// Pointer below the center tips the top edge away (negative `rotate_x`),
    /// pointer right of the center turns the surface right (positive `rotate_y`).
    pub fn from_pointer_with_max(bounds: Bounds, x: f64, y: f64, max_deg: f64) -> Self {
        let (dx, dy) = match (
            normalize(x - bounds.left, bounds.width),
            normalize(y - bounds.top, bounds.height),
        ) {
            (Some(dx), Some(dy)) => (dx, dy),
            _ => return Self::LEVEL,
        };
        Self {
            rotate_x: positive_zero(-dy * max_deg),
            rotate_y: positive_zero(dx * max_deg),
        }
    }

    pub fn is_level(&self) -> bool {
        *self == Self::LEVEL
    }

    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            PERSPECTIVE_PX, self.rotate_x, self.rotate_y
        )
    }
}

/// Current tilt of a hovered surface.
///
/// Every pointer move recomputes the tilt from scratch; leaving the surface
/// always levels it, whatever the last move produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltTracker {
    current: Tilt,
}

impl TiltTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Tilt {
        self.current
    }

    pub fn on_move(&mut self, bounds: Bounds, x: f64, y: f64) -> Tilt {
        self.current = Tilt::from_pointer(bounds, x, y);
        self.current
    }

    pub fn on_leave(&mut self) -> Tilt {
        self.current = Tilt::LEVEL;
        self.current
    }
}

// offset from the leading edge -> [-1, 1] relative to the center
fn normalize(offset: f64, extent: f64) -> Option<f64> {
    if !extent.is_finite() || extent <= 0.0 || !offset.is_finite() {
        return None;
    }
    let half = extent / 2.0;
    Some(((offset - half) / half).clamp(-1.0, 1.0))
}

fn positive_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    };

    #[test]
    fn test_center_is_level() {
        let tilt = Tilt::from_pointer(CARD, 300.0, 150.0);
        assert!(tilt.is_level());
        assert_eq!(
            tilt.to_css(),
            "perspective(900px) rotateX(0.00deg) rotateY(0.00deg)"
        );
    }

    #[test]
    fn test_corners_reach_max() {
        // bottom right
        let tilt = Tilt::from_pointer(CARD, 500.0, 250.0);
        assert_eq!(tilt.rotate_x, -MAX_TILT_DEG);
        assert_eq!(tilt.rotate_y, MAX_TILT_DEG);

        // top left
        let tilt = Tilt::from_pointer(CARD, 100.0, 50.0);
        assert_eq!(tilt.rotate_x, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_y, -MAX_TILT_DEG);

        // top right
        let tilt = Tilt::from_pointer(CARD, 500.0, 50.0);
        assert_eq!(tilt.rotate_x, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_y, MAX_TILT_DEG);
    }

    #[test]
    fn test_linear_between_center_and_edge() {
        // halfway between center and right edge, a quarter down from center
        let tilt = Tilt::from_pointer(CARD, 400.0, 200.0);
        assert_eq!(tilt.rotate_y, 3.0);
        assert_eq!(tilt.rotate_x, -3.0);
        assert_eq!(
            tilt.to_css(),
            "perspective(900px) rotateX(-3.00deg) rotateY(3.00deg)"
        );
    }

    #[test]
    fn test_outside_is_clamped() {
        let tilt = Tilt::from_pointer(CARD, 10_000.0, -10_000.0);
        assert_eq!(tilt.rotate_x, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_y, MAX_TILT_DEG);
    }

    #[test]
    fn test_degenerate_bounds_are_level() {
        let empty = Bounds {
            width: 0.0,
            ..CARD
        };
        assert!(Tilt::from_pointer(empty, 120.0, 60.0).is_level());
        assert!(Tilt::from_pointer(CARD, f64::NAN, 60.0).is_level());

        let unbounded = Bounds {
            width: f64::INFINITY,
            ..CARD
        };
        assert!(Tilt::from_pointer(unbounded, 110.0, 60.0).is_level());
        let unbounded = Bounds {
            height: f64::INFINITY,
            ..CARD
        };
        assert!(Tilt::from_pointer(unbounded, 110.0, 60.0).is_level());
    }

    #[test]
    fn test_leave_levels_after_move() {
        let mut tracker = TiltTracker::new();
        assert!(tracker.current().is_level());

        let moved = tracker.on_move(CARD, 500.0, 250.0);
        assert!(!moved.is_level());
        assert_eq!(tracker.current(), moved);

        assert!(tracker.on_leave().is_level());
        assert!(tracker.current().is_level());
    }

    #[test]
    fn test_leave_without_move_is_level() {
        let mut tracker = TiltTracker::new();
        assert!(tracker.on_leave().is_level());

        // later moves start from the pointer again, not from the reset
        let tilt = tracker.on_move(CARD, 100.0, 150.0);
        assert_eq!(tilt.rotate_y, -MAX_TILT_DEG);
        assert_eq!(tilt.rotate_x, 0.0);
    }

    #[test]
    fn test_custom_max() {
        let tilt = Tilt::from_pointer_with_max(CARD, 500.0, 150.0, 12.0);
        assert_eq!(tilt.rotate_y, 12.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert!(!tilt.rotate_x.is_sign_negative());
    }
}
