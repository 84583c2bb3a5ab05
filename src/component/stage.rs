//! In-line axial stages

use crate::geometry::Coordinate;
use crate::vehicle::GeometryError;

use super::event::{ChangeKind, ChangeSink};
use super::position::{Placement, Position};
use super::traits::{MultiInstance, Positionable};

/// A stage on the vehicle centerline.
///
/// Also serves as the owned helper that carries name, length and
/// positioning for stage-like components such as
/// [`BoosterSet`](super::BoosterSet).
#[derive(Debug, Clone, PartialEq)]
pub struct AxialStage {
    name: String,
    length: f64,
    placement: Placement,
}

impl AxialStage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length: 0.0,
            placement: Placement::new(Position::After),
        }
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
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

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_length(&mut self, length: f64, sink: &mut dyn ChangeSink) {
        self.length = length;
        sink.fire(ChangeKind::Both);
    }
}

impl Positionable for AxialStage {
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

impl MultiInstance for AxialStage {
    fn instance_count(&self) -> usize {
        1
    }

    fn pattern_name(&self) -> String {
        "centerline".to_string()
    }

    fn is_centerline(&self) -> bool {
        true
    }

    fn shift_instances(&self, base: &[Coordinate]) -> Result<Vec<Coordinate>, GeometryError> {
        Ok(base.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let stage = AxialStage::new("Sustainer")
            .with_length(3.5)
            .with_position(Position::Top)
            .with_axial_offset(0.25);
        assert_eq!(stage.name(), "Sustainer");
        assert_eq!(stage.length(), 3.5);
        assert_eq!(stage.relative_position(), Position::Top);
        assert_eq!(stage.axial_offset(), 0.25);
    }

    #[test]
    fn test_centerline_shift_is_identity() {
        let stage = AxialStage::new("Core");
        let base = vec![Coordinate::axial(1.0), Coordinate::axial(2.0)];
        assert!(stage.is_centerline());
        assert_eq!(stage.shift_instances(&base).unwrap(), base);
    }

    #[test]
    fn test_set_length_fires_both() {
        let mut sink: Vec<ChangeKind> = Vec::new();
        let mut stage = AxialStage::new("Core");
        stage.set_length(4.0, &mut sink);
        assert_eq!(stage.length(), 4.0);
        assert_eq!(sink, vec![ChangeKind::Both]);
    }
}
