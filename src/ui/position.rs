//! User position indicator state
//!
//! Location fixes drive two visuals: an inaccuracy circle (only when the fix
//! is worse than a few meters) and the position glyph itself, which is a
//! plain dot while standing and a rotated arrow while moving with a known
//! heading. The state lives here; the host redraws from it after every
//! update.

use crate::core::geo::LatLng;

/// Inaccuracy circles below this radius are noise rather than information.
const MIN_INACCURACY_M: f64 = 5.0;

/// Below this speed the heading is unreliable and the dot is shown.
const MIN_MOVING_SPEED_MPS: f64 = 0.5;

/// One geolocation fix as delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub position: LatLng,
    pub accuracy_m: f64,
    pub speed_mps: Option<f64>,
    pub heading_deg: Option<f64>,
}

/// Which glyph represents the user right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionGlyph {
    Standing,
    Moving { heading_deg: f64 },
}

/// Current state of the user position display.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PositionIndicator {
    glyph: Option<(PositionGlyph, LatLng)>,
    inaccuracy: Option<(LatLng, f64)>,
}

impl PositionIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a fix into the display state.
    pub fn update(&mut self, fix: &LocationFix) {
        self.inaccuracy = if fix.accuracy_m > MIN_INACCURACY_M {
            Some((fix.position, fix.accuracy_m))
        } else {
            None
        };

        let heading = match (fix.speed_mps, fix.heading_deg) {
            (Some(speed), Some(heading)) if speed >= MIN_MOVING_SPEED_MPS => Some(heading),
            _ => None,
        };
        let glyph = match heading {
            Some(heading_deg) => PositionGlyph::Moving { heading_deg },
            None => PositionGlyph::Standing,
        };
        self.glyph = Some((glyph, fix.position));
    }

    /// Glyph and its position, `None` before the first fix.
    pub fn glyph(&self) -> Option<(PositionGlyph, LatLng)> {
        self.glyph
    }

    /// Center and radius of the inaccuracy circle, `None` when hidden.
    pub fn inaccuracy_circle(&self) -> Option<(LatLng, f64)> {
        self.inaccuracy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(accuracy_m: f64, speed_mps: Option<f64>, heading_deg: Option<f64>) -> LocationFix {
        LocationFix {
            position: LatLng::new(51.05, 13.74),
            accuracy_m,
            speed_mps,
            heading_deg,
        }
    }

    #[test]
    fn test_no_state_before_first_fix() {
        let indicator = PositionIndicator::new();
        assert!(indicator.glyph().is_none());
        assert!(indicator.inaccuracy_circle().is_none());
    }

    #[test]
    fn test_accurate_standing_fix() {
        let mut indicator = PositionIndicator::new();
        indicator.update(&fix(3.0, Some(0.0), None));

        assert_eq!(
            indicator.glyph(),
            Some((PositionGlyph::Standing, LatLng::new(51.05, 13.74)))
        );
        assert!(indicator.inaccuracy_circle().is_none());
    }

    #[test]
    fn test_inaccurate_fix_shows_circle() {
        let mut indicator = PositionIndicator::new();
        indicator.update(&fix(25.0, Some(0.0), None));

        let (_center, radius) = indicator.inaccuracy_circle().unwrap();
        assert_eq!(radius, 25.0);
    }

    #[test]
    fn test_moving_fix_shows_heading_arrow() {
        let mut indicator = PositionIndicator::new();
        indicator.update(&fix(3.0, Some(4.2), Some(135.0)));

        assert_eq!(
            indicator.glyph().unwrap().0,
            PositionGlyph::Moving { heading_deg: 135.0 }
        );
    }

    #[test]
    fn test_slow_or_headingless_fix_falls_back_to_dot() {
        let mut indicator = PositionIndicator::new();

        indicator.update(&fix(3.0, Some(0.2), Some(135.0)));
        assert_eq!(indicator.glyph().unwrap().0, PositionGlyph::Standing);

        indicator.update(&fix(3.0, Some(4.2), None));
        assert_eq!(indicator.glyph().unwrap().0, PositionGlyph::Standing);
    }

    #[test]
    fn test_circle_disappears_when_fix_improves() {
        let mut indicator = PositionIndicator::new();
        indicator.update(&fix(25.0, Some(0.0), None));
        assert!(indicator.inaccuracy_circle().is_some());

        indicator.update(&fix(3.0, Some(0.0), None));
        assert!(indicator.inaccuracy_circle().is_none());
    }
}
