//! Cylindrical body components

use super::event::{ChangeKind, ChangeSink};
use super::position::{Placement, Position};
use super::traits::Positionable;

#[derive(Debug, Clone, PartialEq)]
pub struct BodyTube {
    name: String,
    length: f64,
    outer_radius: f64,
    placement: Placement,
}

impl BodyTube {
    pub fn new(name: impl Into<String>, length: f64, outer_radius: f64) -> Self {
        Self {
            name: name.into(),
            length,
            outer_radius,
            placement: Placement::new(Position::After),
        }
    }

    pub fn with_position(mut self, method: Position) -> Self {
        self.placement.method = method;
        self
    }

    pub fn with_axial_offset(mut self, offset: f64) -> Self {
        self.placement.axial_offset = offset;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn set_length(&mut self, length: f64, sink: &mut dyn ChangeSink) {
        self.length = length;
        sink.fire(ChangeKind::Both);
    }

    pub fn set_outer_radius(&mut self, radius: f64, sink: &mut dyn ChangeSink) {
        self.outer_radius = radius;
        sink.fire(ChangeKind::Both);
    }
}

impl Positionable for BodyTube {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn length(&self) -> f64 {
        self.length
    }
}
