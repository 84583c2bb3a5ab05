//! Mutating operations on components in the tree.
//!
//! Setters store the new value and fire a change notification; they never
//! compute or store resolved locations. Reference positions of siblings and
//! descendants are re-derived after any edit that can move them.

use crate::component::{
    ChangeKind, Component, OffsetFromCenterline, PlacementContext, Position,
};

use super::{not_a_booster_set, ComponentId, GeometryError, Vehicle};

impl Vehicle {
    /// Set the distance of a booster set's instance circle from the axis.
    ///
    /// Negative values are accepted and mirror the pattern through the axis.
    pub fn set_radial_offset(&mut self, id: ComponentId, radius: f64) -> Result<(), GeometryError> {
        self.update(id, |component, sink| match component {
            Component::Boosters(set) => {
                set.set_radial_offset(radius, sink);
                Ok(())
            }
            other => Err(not_a_booster_set(other)),
        })
    }

    /// Set the angular phase of a booster set's first instance, in radians
    pub fn set_angular_offset(&mut self, id: ComponentId, angle: f64) -> Result<(), GeometryError> {
        self.update(id, |component, sink| match component {
            Component::Boosters(set) => {
                set.set_angular_offset(angle, sink);
                Ok(())
            }
            other => Err(not_a_booster_set(other)),
        })
    }

    /// Set the angular step between a booster set's instances, in radians
    pub fn set_angular_separation(
        &mut self,
        id: ComponentId,
        separation: f64,
    ) -> Result<(), GeometryError> {
        self.update(id, |component, sink| match component {
            Component::Boosters(set) => {
                set.set_angular_separation(separation, sink);
                Ok(())
            }
            other => Err(not_a_booster_set(other)),
        })
    }

    /// Reconfigure a booster set's instance count, respacing it evenly
    pub fn set_instance_count(&mut self, id: ComponentId, count: usize) -> Result<(), GeometryError> {
        self.update(id, |component, sink| match component {
            Component::Boosters(set) => set.set_instance_count(count, sink),
            other => Err(not_a_booster_set(other)),
        })
    }

    pub fn set_length(&mut self, id: ComponentId, length: f64) -> Result<(), GeometryError> {
        self.update(id, |component, sink| match component {
            Component::Stage(stage) => {
                stage.set_length(length, sink);
                Ok(())
            }
            Component::Boosters(set) => {
                set.stage_mut().set_length(length, sink);
                Ok(())
            }
            Component::Body(body) => {
                body.set_length(length, sink);
                Ok(())
            }
            Component::Root { name } => Err(GeometryError::precondition(
                name.as_str(),
                "the vehicle length is derived from its stages",
            )),
        })?;
        self.reposition_around(id)
    }

    /// Set the outer radius of a body tube.
    ///
    /// Axial positions do not depend on the radius, so nothing is moved.
    pub fn set_outer_radius(&mut self, id: ComponentId, radius: f64) -> Result<(), GeometryError> {
        self.update(id, |component, sink| match component {
            Component::Body(body) => {
                body.set_outer_radius(radius, sink);
                Ok(())
            }
            other => Err(GeometryError::precondition(
                other.name(),
                format!("expected a body tube, found a {}", other.kind_name()),
            )),
        })
    }

    /// Choose how a component's reference position is derived from its parent
    pub fn set_relative_position(
        &mut self,
        id: ComponentId,
        method: Position,
    ) -> Result<(), GeometryError> {
        let parent = self.parent(id)?.ok_or_else(|| {
            GeometryError::structural(
                self.name(id).unwrap_or_default(),
                "a component requires a parent before it can be positioned",
            )
        })?;

        self.update(id, |component, sink| {
            let name = component.name().to_string();
            let placeable = component
                .positionable_mut()
                .ok_or_else(|| GeometryError::precondition(name, "component cannot be positioned"))?;
            placeable.placement_mut().method = method;
            sink.fire(ChangeKind::Aerodynamic);
            Ok(())
        })?;
        self.reposition_children(parent)
    }

    /// Set the axial offset applied on top of the positioning method
    pub fn set_axial_offset(&mut self, id: ComponentId, offset: f64) -> Result<(), GeometryError> {
        self.update(id, |component, sink| {
            let name = component.name().to_string();
            let placeable = component
                .positionable_mut()
                .ok_or_else(|| GeometryError::precondition(name, "component cannot be positioned"))?;
            placeable.placement_mut().axial_offset = offset;
            sink.fire(ChangeKind::Aerodynamic);
            Ok(())
        })?;
        self.reposition_around(id)
    }

    /// The axial offset of a positioned component
    pub fn position_value(&self, id: ComponentId) -> Result<f64, GeometryError> {
        let component = self.component(id)?;
        component
            .positionable()
            .map(|p| p.axial_offset())
            .ok_or_else(|| {
                GeometryError::precondition(component.name(), "component cannot be positioned")
            })
    }

    /// Absolute axial station of a component's reference point
    pub(crate) fn station(&self, id: ComponentId) -> Result<f64, GeometryError> {
        let mut station = self.axial_position(id)?;
        for ancestor in self.ancestors(id) {
            station += self.axial_position(ancestor)?;
        }
        Ok(station)
    }

    /// Axial position relative to the parent; zero for the root
    fn axial_position(&self, id: ComponentId) -> Result<f64, GeometryError> {
        Ok(self
            .component(id)?
            .positionable()
            .map_or(0.0, |p| p.position().x))
    }

    fn reposition_around(&mut self, id: ComponentId) -> Result<(), GeometryError> {
        match self.parent(id)? {
            Some(parent) => self.reposition_children(parent),
            None => self.reposition_children(id),
        }
    }

    /// Re-derive the reference positions of every descendant of `parent`
    pub(crate) fn reposition_children(&mut self, parent: ComponentId) -> Result<(), GeometryError> {
        let parent_length = self.length(parent)?;
        let children = self.children(parent)?.to_vec();
        let parent_station = self.station(parent)?;

        let mut previous_end = None;
        for child in children {
            let ctx = PlacementContext {
                parent_length,
                parent_station,
                previous_end,
            };
            if let Some(placeable) = self.node_mut(child)?.component.positionable_mut() {
                let length = placeable.length();
                previous_end = Some(placeable.placement_mut().update(length, &ctx));
            }
            self.reposition_children(child)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{AxialStage, BodyTube, BoosterSet, MultiInstance, Positionable};
    use crate::geometry::Coordinate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn core_with_boosters() -> (Vehicle, ComponentId, ComponentId) {
        let mut v = Vehicle::new("Rocket");
        let core = v
            .add_child(v.root(), AxialStage::new("Core").with_length(10.0))
            .unwrap();
        let set = v
            .add_child(core, BoosterSet::new().with_length(4.0))
            .unwrap();
        (v, core, set)
    }

    fn kinds(vehicle: &mut Vehicle) -> Rc<RefCell<Vec<ChangeKind>>> {
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&kinds);
        vehicle.subscribe(move |e| sink.borrow_mut().push(e.kind));
        kinds
    }

    #[test]
    fn test_pattern_setters_notify_both() {
        let (mut v, _, set) = core_with_boosters();
        let fired = kinds(&mut v);

        v.set_radial_offset(set, 0.5).unwrap();
        v.set_angular_offset(set, 0.1).unwrap();
        v.set_angular_separation(set, 0.7).unwrap();
        v.set_instance_count(set, 3).unwrap();

        assert_eq!(*fired.borrow(), vec![ChangeKind::Both; 4]);
        let booster = v.booster(set).unwrap();
        assert_eq!(booster.radial_offset(), 0.5);
        assert_eq!(booster.angular_offset(), 0.1);
        assert_eq!(booster.instance_count(), 3);
    }

    #[test]
    fn test_pattern_setter_on_stage_rejected() {
        let (mut v, core, _) = core_with_boosters();
        let err = v.set_radial_offset(core, 0.5).unwrap_err();
        assert!(matches!(err, GeometryError::PreconditionViolation { .. }));
    }

    #[test]
    fn test_bottom_positioning_follows_parent_length() {
        let (mut v, core, set) = core_with_boosters();
        assert_eq!(v.booster(set).unwrap().position(), Coordinate::axial(6.0));

        v.set_length(core, 12.0).unwrap();
        assert_eq!(v.booster(set).unwrap().position(), Coordinate::axial(8.0));

        v.set_length(set, 5.0).unwrap();
        assert_eq!(v.booster(set).unwrap().position(), Coordinate::axial(7.0));
    }

    #[test]
    fn test_relative_position_change_notifies_aerodynamic() {
        let (mut v, _, set) = core_with_boosters();
        let fired = kinds(&mut v);

        v.set_relative_position(set, Position::Top).unwrap();
        v.set_axial_offset(set, 0.5).unwrap();

        assert_eq!(
            *fired.borrow(),
            vec![ChangeKind::Aerodynamic, ChangeKind::Aerodynamic]
        );
        let booster = v.booster(set).unwrap();
        assert_eq!(booster.relative_position(), Position::Top);
        assert_eq!(booster.position(), Coordinate::axial(0.5));
        assert_eq!(v.position_value(set).unwrap(), 0.5);
    }

    #[test]
    fn test_relative_position_requires_parent() {
        let mut v = Vehicle::new("Rocket");
        let set = v.add(BoosterSet::new());
        let err = v.set_relative_position(set, Position::Top).unwrap_err();
        assert!(matches!(err, GeometryError::StructuralInvariantViolation { .. }));
    }

    #[test]
    fn test_after_positioning_stacks_stages() {
        let mut v = Vehicle::new("Rocket");
        let upper = v
            .add_child(v.root(), AxialStage::new("Upper").with_length(2.0))
            .unwrap();
        let lower = v
            .add_child(v.root(), AxialStage::new("Lower").with_length(3.0))
            .unwrap();
        let x = |v: &Vehicle, id: ComponentId| v.component(id).unwrap().positionable().unwrap().position().x;
        assert_eq!(x(&v, upper), 0.0);
        assert_eq!(x(&v, lower), 2.0);

        v.set_length(upper, 2.5).unwrap();
        assert_eq!(x(&v, lower), 2.5);
    }

    #[test]
    fn test_absolute_positioning_uses_parent_station() {
        let mut v = Vehicle::new("Rocket");
        v.add_child(v.root(), AxialStage::new("Upper").with_length(2.0))
            .unwrap();
        let lower = v
            .add_child(v.root(), AxialStage::new("Lower").with_length(3.0))
            .unwrap();
        let tube = v
            .add_child(
                lower,
                BodyTube::new("Tube", 1.0, 0.1)
                    .with_position(Position::Absolute)
                    .with_axial_offset(3.0),
            )
            .unwrap();
        let placed = v.component(tube).unwrap().positionable().unwrap().position();
        assert_eq!(placed, Coordinate::axial(1.0));
    }

    #[test]
    fn test_root_length_cannot_be_set() {
        let mut v = Vehicle::new("Rocket");
        let root = v.root();
        assert!(v.set_length(root, 1.0).is_err());
    }

    #[test]
    fn test_outer_radius_widens_body_bounds() {
        let (mut v, _, set) = core_with_boosters();
        v.set_radial_offset(set, 1.0).unwrap();
        let tube = v
            .add_child(set, BodyTube::new("Booster tube", 4.0, 0.2))
            .unwrap();
        let fired = kinds(&mut v);

        v.set_outer_radius(tube, 0.5).unwrap();
        assert_eq!(*fired.borrow(), vec![ChangeKind::Both]);
        let bounds = v.estimate_bounds(tube).unwrap();
        assert_eq!(bounds.len(), 4);
        assert!(bounds.iter().all(|b| (b.r - 1.5).abs() < 1e-9));

        let err = v.set_outer_radius(set, 0.5).unwrap_err();
        assert!(matches!(err, GeometryError::PreconditionViolation { .. }));
    }

    #[test]
    fn test_station_sums_ancestor_positions() {
        let (v, core, set) = core_with_boosters();
        assert_eq!(v.station(core).unwrap(), 0.0);
        assert_eq!(v.station(set).unwrap(), 6.0);
    }

    #[test]
    fn test_reposition_of_removed_component_fails() {
        let (mut v, _, set) = core_with_boosters();
        v.remove(set).unwrap();
        assert!(matches!(
            v.station(set).unwrap_err(),
            GeometryError::ReadinessViolation { .. }
        ));
        assert!(matches!(
            v.reposition_children(set).unwrap_err(),
            GeometryError::ReadinessViolation { .. }
        ));
    }

    #[test]
    fn test_position_value_not_ready_after_removal() {
        let (mut v, _, set) = core_with_boosters();
        v.remove(set).unwrap();
        let err = v.position_value(set).unwrap_err();
        assert!(matches!(err, GeometryError::ReadinessViolation { .. }));
    }
}
