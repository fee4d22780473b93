//! World geometry: drag zones and the reflecting boundary

use glam::DVec2;

/// Axis-aligned rectangular region with a fluid density, e.g. a liquid
/// volume at the bottom of the pond. Agents strictly inside feel drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Fluid density fed into the drag force for contained agents
    pub density: f64,
}

impl Zone {
    pub fn new(x: f64, y: f64, w: f64, h: f64, density: f64) -> Self {
        Self { x, y, w, h, density }
    }

    /// Strict containment: points on the rectangle's boundary are outside.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x > self.x
            && point.x < self.x + self.w
            && point.y > self.y
            && point.y < self.y + self.h
    }
}

/// Fixed world extent; agents reflect off `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
}

impl WorldBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_strict() {
        let zone = Zone::new(0.0, 675.0, 900.0, 225.0, 10.0);
        assert!(zone.contains(DVec2::new(450.0, 700.0)));
        // boundary points are outside
        assert!(!zone.contains(DVec2::new(0.0, 700.0)));
        assert!(!zone.contains(DVec2::new(450.0, 675.0)));
        assert!(!zone.contains(DVec2::new(900.0, 700.0)));
        assert!(!zone.contains(DVec2::new(450.0, 900.0)));
        // clearly outside
        assert!(!zone.contains(DVec2::new(450.0, 100.0)));
    }
}
