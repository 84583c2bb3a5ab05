//! Rough size estimates for components and whole vehicles.
//!
//! Bounds are cheap over-approximations meant for overall-size display, not
//! for interference or clearance checks. A component reports a handful of
//! [`BoundPoint`]s (axial station, outer radius); the vehicle extent is the
//! axis-aligned box around the corners of all of them.

use crate::component::{Component, OffsetFromCenterline};
use crate::geometry::{BoundPoint, Extent};

use super::{ComponentId, GeometryError, Vehicle};

impl Vehicle {
    /// Approximate bounds of a single component.
    ///
    /// For a booster set this is two points, `(x_min, r_max)` and
    /// `(x_max, r_max)`: the axial extremes over all instances at the outer
    /// radius. The near-axis extent is deliberately omitted.
    pub fn estimate_bounds(&self, id: ComponentId) -> Result<Vec<BoundPoint>, GeometryError> {
        let component = self.component(id)?;
        match component {
            Component::Root { .. } => Ok(Vec::new()),
            Component::Boosters(set) => {
                let length = component.length();
                let mut x_min = f64::INFINITY;
                let mut x_max = f64::NEG_INFINITY;
                let mut r_max: f64 = 0.0;

                for location in self.resolve_absolute_locations(id)? {
                    x_min = x_min.min(location.x);
                    x_max = x_max.max(location.x + length);
                    r_max = r_max.max(set.radial_offset());
                }
                Ok(vec![BoundPoint::new(x_min, r_max), BoundPoint::new(x_max, r_max)])
            }
            Component::Stage(_) => {
                let length = component.length();
                Ok(self
                    .resolve_absolute_locations(id)?
                    .into_iter()
                    .flat_map(|c| [BoundPoint::new(c.x, 0.0), BoundPoint::new(c.x + length, 0.0)])
                    .collect())
            }
            Component::Body(body) => {
                let length = component.length();
                Ok(self
                    .resolve_absolute_locations(id)?
                    .into_iter()
                    .flat_map(|c| {
                        let r = c.radial_distance() + body.outer_radius();
                        [BoundPoint::new(c.x, r), BoundPoint::new(c.x + length, r)]
                    })
                    .collect())
            }
        }
    }

    /// Axis-aligned box around every component attached to the root.
    ///
    /// Returns `None` for a vehicle with no components below the root.
    pub fn estimate_extent(&self) -> Result<Option<Extent>, GeometryError> {
        let mut corners = Vec::new();
        for id in self.subtree(self.root())? {
            for bound in self.estimate_bounds(id)? {
                corners.extend(bound.corners());
            }
        }
        Ok(Extent::from_points(corners))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{AxialStage, BodyTube, BoosterSet};
    use crate::geometry::Coordinate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_booster_bounds() {
        let mut v = Vehicle::new("Rocket");
        let core = v
            .add_child(v.root(), AxialStage::new("Core").with_length(7.0))
            .unwrap();
        let set = v
            .add_child(
                core,
                BoosterSet::with_count(1)
                    .unwrap()
                    .with_length(2.0)
                    .with_radial_offset(0.3),
            )
            .unwrap();

        assert_eq!(
            v.estimate_bounds(set).unwrap(),
            vec![BoundPoint::new(5.0, 0.3), BoundPoint::new(7.0, 0.3)]
        );
    }

    #[test]
    fn test_booster_bounds_negative_station() {
        let mut v = Vehicle::new("Rocket");
        let core = v
            .add_child(v.root(), AxialStage::new("Core").with_length(1.0))
            .unwrap();
        let set = v
            .add_child(
                core,
                BoosterSet::new()
                    .with_length(2.0)
                    .with_radial_offset(0.5)
                    .with_axial_offset(-4.0),
            )
            .unwrap();

        // Bottom: 1 - 2 - 4 = -5, so both extremes are negative
        assert_eq!(
            v.estimate_bounds(set).unwrap(),
            vec![BoundPoint::new(-5.0, 0.5), BoundPoint::new(-3.0, 0.5)]
        );
    }

    #[test]
    fn test_booster_bounds_detached() {
        let mut v = Vehicle::new("Rocket");
        let set = v.add(BoosterSet::new());
        assert!(matches!(
            v.estimate_bounds(set).unwrap_err(),
            GeometryError::StructuralInvariantViolation { .. }
        ));
    }

    #[test]
    fn test_body_bounds_include_offset_from_axis() {
        let mut v = Vehicle::new("Rocket");
        let core = v
            .add_child(v.root(), AxialStage::new("Core").with_length(3.0))
            .unwrap();
        let set = v
            .add_child(
                core,
                BoosterSet::with_count(1)
                    .unwrap()
                    .with_length(3.0)
                    .with_radial_offset(0.5),
            )
            .unwrap();
        let tube = v.add_child(set, BodyTube::new("Tube", 3.0, 0.125)).unwrap();

        let bounds = v.estimate_bounds(tube).unwrap();
        assert_eq!(
            bounds,
            vec![BoundPoint::new(0.0, 0.625), BoundPoint::new(3.0, 0.625)]
        );
    }

    #[test]
    fn test_vehicle_extent() {
        let mut v = Vehicle::new("Rocket");
        let core = v
            .add_child(v.root(), AxialStage::new("Core").with_length(10.0))
            .unwrap();
        v.add_child(core, BodyTube::new("Core tube", 10.0, 0.5)).unwrap();
        v.add_child(
            core,
            BoosterSet::new().with_length(6.0).with_radial_offset(1.5),
        )
        .unwrap();

        let extent = v.estimate_extent().unwrap().unwrap();
        assert_eq!(extent.min, Coordinate::new(0.0, -1.5, -1.5));
        assert_eq!(extent.max, Coordinate::new(10.0, 1.5, 1.5));
    }

    #[test]
    fn test_empty_vehicle_has_no_extent() {
        let v = Vehicle::new("Rocket");
        assert_eq!(v.estimate_extent().unwrap(), None);
    }
}
