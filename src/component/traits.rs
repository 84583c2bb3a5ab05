//! Capability traits implemented by vehicle components

use crate::geometry::Coordinate;
use crate::vehicle::GeometryError;

use super::event::ChangeSink;
use super::position::{Placement, Position};

/// A component placed along its parent's main axis
pub trait Positionable {
    fn placement(&self) -> &Placement;

    fn placement_mut(&mut self) -> &mut Placement;

    /// Length along the main axis, in meters
    fn length(&self) -> f64;

    fn axial_offset(&self) -> f64 {
        self.placement().axial_offset
    }

    fn relative_position(&self) -> Position {
        self.placement().method
    }

    /// Reference position relative to the parent
    fn position(&self) -> Coordinate {
        self.placement().position
    }
}

/// A component that may stand for several copies of itself
pub trait MultiInstance {
    fn instance_count(&self) -> usize;

    /// Display label for the instancing pattern, not an identity
    fn pattern_name(&self) -> String;

    /// Whether the component sits on its parent's main axis
    fn is_centerline(&self) -> bool;

    /// Expand a base location into one location per instance.
    ///
    /// Centerline implementors return `base` unchanged.
    fn shift_instances(&self, base: &[Coordinate]) -> Result<Vec<Coordinate>, GeometryError>;
}

/// A component displaced radially from its parent's main axis
pub trait OffsetFromCenterline {
    /// Distance from the parent's main axis, in meters
    fn radial_offset(&self) -> f64;

    /// Angular phase of the first instance, in radians
    fn angular_offset(&self) -> f64;

    fn set_radial_offset(&mut self, radius: f64, sink: &mut dyn ChangeSink);

    fn set_angular_offset(&mut self, angle: f64, sink: &mut dyn ChangeSink);

    /// Whether the component lies outside the parent body
    fn is_outside(&self) -> bool;
}
