//! Resolution of absolute component locations.
//!
//! Locations are computed on demand from the current tree and pattern state
//! and are never cached. A component resolves to one location per instance:
//!
//! - the root sits at the origin;
//! - a centerline stage or a body translates each parent location by its own
//!   reference position;
//! - a booster set fans its parent's single location out into one location
//!   per booster (see [`RingPattern`](crate::geometry::RingPattern)).

use crate::component::Component;
use crate::geometry::Coordinate;

use super::{ComponentId, GeometryError, Vehicle};

impl Vehicle {
    /// Absolute location of every instance of `id`, in instance order
    pub fn resolve_absolute_locations(
        &self,
        id: ComponentId,
    ) -> Result<Vec<Coordinate>, GeometryError> {
        let node = self.node(id)?;
        let component = &node.component;

        let Some(parent) = node.parent else {
            return match component {
                Component::Root { .. } => Ok(vec![Coordinate::ZERO]),
                _ => Err(GeometryError::structural(
                    component.name(),
                    format!(
                        "attempted to resolve the location of a {} without a parent",
                        component.kind_name()
                    ),
                )),
            };
        };

        let parent_locations = self.resolve_absolute_locations(parent)?;
        let locations = match component {
            Component::Boosters(_) => {
                if parent_locations.len() != 1 {
                    return Err(GeometryError::unsupported(
                        component.name(),
                        format!(
                            "booster sets attached to multi-instance parents are not supported \
                             ('{}' resolves to {} locations)",
                            self.name(parent)?,
                            parent_locations.len()
                        ),
                    ));
                }
                self.shift_instances(id, &parent_locations)?
            }
            _ => {
                let position = component
                    .positionable()
                    .map_or(Coordinate::ZERO, |p| p.position());
                let placed: Vec<Coordinate> =
                    parent_locations.into_iter().map(|c| c + position).collect();
                match component.multi_instance() {
                    Some(_) => self.shift_instances(id, &placed)?,
                    None => placed,
                }
            }
        };

        tracing::debug!(
            component = %id,
            name = component.name(),
            instances = locations.len(),
            "resolved absolute locations"
        );
        for (index, location) in locations.iter().enumerate() {
            tracing::trace!(component = %id, index, %location, "instance location");
        }
        Ok(locations)
    }

    /// Apply the instance-shift operator of `id` to `base`.
    ///
    /// Centerline components return `base` unchanged. Off-axis components
    /// require exactly one base coordinate and return one coordinate per
    /// instance.
    pub fn shift_instances(
        &self,
        id: ComponentId,
        base: &[Coordinate],
    ) -> Result<Vec<Coordinate>, GeometryError> {
        self.check_ready(id)?;
        let component = self.component(id)?;
        let multi = component.multi_instance().ok_or_else(|| {
            GeometryError::precondition(
                component.name(),
                format!("a {} has no instances to shift", component.kind_name()),
            )
        })?;
        multi.shift_instances(base)
    }

    /// Instance offsets relative to the parent, from a zero base coordinate
    pub fn relative_locations(&self, id: ComponentId) -> Result<Vec<Coordinate>, GeometryError> {
        self.shift_instances(id, &[Coordinate::ZERO])
    }
}
