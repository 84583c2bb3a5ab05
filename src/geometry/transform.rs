//! Angular-pattern instancing for off-axis assemblies.
//!
//! A ring pattern places `count` copies of an assembly on a circle of radius
//! `radius` around the main (x) axis. Instance `i` sits at angle
//!
//! ```text
//! angle_i = phase + i * separation
//! ```
//!
//! measured in the y-z plane from the +y axis towards +z, so its offset from
//! the pattern center is
//!
//! ```text
//! (0, radius * cos(angle_i), radius * sin(angle_i))
//! ```
//!
//! The axial component of the offset is always zero. Angles are in radians
//! and are not normalized; values beyond 2π are fine.

use std::f64::consts::TAU;

use super::types::Coordinate;

/// The parameters of an evenly-stepped ring of instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPattern {
    /// Number of instances
    pub count: usize,
    /// Angular step between successive instances, in radians
    pub separation: f64,
    /// Angle of instance 0, in radians
    pub phase: f64,
    /// Distance of the instance circle from the main axis
    pub radius: f64,
}

impl RingPattern {
    /// Create a ring that spreads `count` instances evenly over a full turn.
    pub fn evenly_spaced(count: usize, radius: f64) -> Self {
        Self {
            count,
            separation: full_circle_separation(count),
            phase: 0.0,
            radius,
        }
    }

    /// Angle of instance `index`
    pub fn angle(&self, index: usize) -> f64 {
        self.phase + index as f64 * self.separation
    }

    /// Offset of instance `index` from the pattern center
    pub fn offset(&self, index: usize) -> Coordinate {
        let angle = self.angle(index);
        Coordinate::new(0.0, self.radius * angle.cos(), self.radius * angle.sin())
    }

    /// Place every instance around `center`, then translate by `base`.
    ///
    /// The result has exactly `count` entries in instance order.
    pub fn fan_out(&self, center: Coordinate, base: Coordinate) -> Vec<Coordinate> {
        (0..self.count)
            .map(|index| center + self.offset(index) + base)
            .collect()
    }
}

/// Angular separation that spreads `count` instances evenly over a full turn
pub fn full_circle_separation(count: usize) -> f64 {
    TAU / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_full_circle_separation() {
        assert!(approx_eq(full_circle_separation(1), TAU));
        assert!(approx_eq(full_circle_separation(2), PI));
        assert!(approx_eq(full_circle_separation(4), FRAC_PI_2));
    }

    #[test]
    fn test_offset_has_no_axial_component() {
        let ring = RingPattern::evenly_spaced(5, 1.5);
        for i in 0..5 {
            assert_eq!(ring.offset(i).x, 0.0);
            assert!(approx_eq(ring.offset(i).radial_distance(), 1.5));
        }
    }

    #[test]
    fn test_quarter_turn_instances() {
        let ring = RingPattern::evenly_spaced(4, 2.0);
        let expected = [(2.0, 0.0), (0.0, 2.0), (-2.0, 0.0), (0.0, -2.0)];
        for (i, (y, z)) in expected.iter().enumerate() {
            let offset = ring.offset(i);
            assert!(approx_eq(offset.y, *y), "instance {} y: {}", i, offset.y);
            assert!(approx_eq(offset.z, *z), "instance {} z: {}", i, offset.z);
        }
    }

    #[test]
    fn test_phase_rotates_instance_zero() {
        let ring = RingPattern {
            phase: FRAC_PI_2,
            ..RingPattern::evenly_spaced(2, 1.0)
        };
        let first = ring.offset(0);
        assert!(approx_eq(first.y, 0.0));
        assert!(approx_eq(first.z, 1.0));
    }

    #[test]
    fn test_angles_beyond_full_turn() {
        let ring = RingPattern {
            count: 3,
            separation: 3.0 * TAU,
            phase: 0.0,
            radius: 1.0,
        };
        for i in 0..3 {
            assert!(approx_eq(ring.offset(i).y, 1.0));
            assert!(approx_eq(ring.offset(i).z, 0.0));
        }
    }

    #[test]
    fn test_fan_out_translates_every_instance() {
        let ring = RingPattern::evenly_spaced(3, 0.5);
        let center = Coordinate::axial(2.0);
        let base = Coordinate::new(1.0, 0.1, -0.1);
        let placed = ring.fan_out(center, base);

        assert_eq!(placed.len(), 3);
        for (i, p) in placed.iter().enumerate() {
            let expected = center + ring.offset(i) + base;
            assert!(approx_eq(p.x, 3.0));
            assert!(approx_eq(p.y, expected.y));
            assert!(approx_eq(p.z, expected.z));
        }
    }

    #[test]
    fn test_zero_radius_collapses_onto_center() {
        let ring = RingPattern::evenly_spaced(6, 0.0);
        let placed = ring.fan_out(Coordinate::axial(1.0), Coordinate::ZERO);
        assert!(placed.iter().all(|p| *p == Coordinate::axial(1.0)));
    }
}
