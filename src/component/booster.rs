//! Booster sets: stages repeated in a ring around the parent's main axis.
//!
//! A booster set never sits on the centerline. Its instances are spread by a
//! [`RingPattern`] built from the set's instance count, angular separation,
//! angular offset and radial offset, then translated by the set's own
//! reference position and the single location of its parent.

use std::f64::consts::PI;

use crate::geometry::{full_circle_separation, Coordinate, RingPattern};
use crate::vehicle::GeometryError;

use super::event::{ChangeKind, ChangeSink};
use super::position::{Placement, Position};
use super::stage::AxialStage;
use super::traits::{MultiInstance, OffsetFromCenterline, Positionable};

const DEFAULT_NAME: &str = "Booster set";

#[derive(Debug, Clone, PartialEq)]
pub struct BoosterSet {
    stage: AxialStage,
    count: usize,
    angular_separation: f64,
    angular_offset: f64,
    radial_offset: f64,
}

impl BoosterSet {
    /// Two boosters half a turn apart, positioned at the bottom of the parent
    pub fn new() -> Self {
        Self {
            stage: AxialStage::new(DEFAULT_NAME).with_position(Position::Bottom),
            count: 2,
            angular_separation: PI,
            angular_offset: 0.0,
            radial_offset: 0.0,
        }
    }

    /// `count` boosters spread evenly over a full turn
    pub fn with_count(count: usize) -> Result<Self, GeometryError> {
        check_count(DEFAULT_NAME, count)?;
        Ok(Self {
            count,
            angular_separation: full_circle_separation(count),
            ..Self::new()
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.stage.set_name(name);
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.stage = self.stage.with_length(length);
        self
    }

    pub fn with_position(mut self, method: Position) -> Self {
        self.stage = self.stage.with_position(method);
        self
    }

    pub fn with_axial_offset(mut self, offset: f64) -> Self {
        self.stage = self.stage.with_axial_offset(offset);
        self
    }

    pub fn with_radial_offset(mut self, radius: f64) -> Self {
        warn_if_mirrored(self.name(), radius);
        self.radial_offset = radius;
        self
    }

    pub fn with_angular_offset(mut self, angle: f64) -> Self {
        self.angular_offset = angle;
        self
    }

    pub fn with_angular_separation(mut self, separation: f64) -> Self {
        self.angular_separation = separation;
        self
    }

    pub fn stage_mut(&mut self) -> &mut AxialStage {
        &mut self.stage
    }

    pub fn name(&self) -> &str {
        self.stage.name()
    }

    /// Angular step between successive boosters, in radians
    pub fn angular_separation(&self) -> f64 {
        self.angular_separation
    }

    pub fn set_angular_separation(&mut self, separation: f64, sink: &mut dyn ChangeSink) {
        self.angular_separation = separation;
        sink.fire(ChangeKind::Both);
    }

    /// Change the number of boosters, respacing them evenly over a full turn
    pub fn set_instance_count(
        &mut self,
        count: usize,
        sink: &mut dyn ChangeSink,
    ) -> Result<(), GeometryError> {
        check_count(self.name(), count)?;
        self.count = count;
        self.angular_separation = full_circle_separation(count);
        sink.fire(ChangeKind::Both);
        Ok(())
    }

    /// The ring this set's instances are spread over
    pub fn ring(&self) -> RingPattern {
        RingPattern {
            count: self.count,
            separation: self.angular_separation,
            phase: self.angular_offset,
            radius: self.radial_offset,
        }
    }
}

impl Default for BoosterSet {
    fn default() -> Self {
        Self::new()
    }
}

fn check_count(component: &str, count: usize) -> Result<(), GeometryError> {
    if count == 0 {
        return Err(GeometryError::precondition(
            component,
            "instance count must be at least 1",
        ));
    }
    Ok(())
}

/// Negative radial offsets are accepted but mirror the ring through the axis
fn warn_if_mirrored(component: &str, radius: f64) {
    if radius < 0.0 {
        tracing::warn!(
            component,
            radius,
            "negative radial offset; boosters will be mirrored through the axis"
        );
    }
}

impl Positionable for BoosterSet {
    fn placement(&self) -> &Placement {
        self.stage.placement()
    }

    fn placement_mut(&mut self) -> &mut Placement {
        self.stage.placement_mut()
    }

    fn length(&self) -> f64 {
        self.stage.length()
    }
}

impl MultiInstance for BoosterSet {
    fn instance_count(&self) -> usize {
        self.count
    }

    fn pattern_name(&self) -> String {
        format!("{}-ring", self.count)
    }

    /// Boosters are, by definition, never on the centerline.
    fn is_centerline(&self) -> bool {
        false
    }

    fn shift_instances(&self, base: &[Coordinate]) -> Result<Vec<Coordinate>, GeometryError> {
        if self.is_centerline() {
            return Ok(base.to_vec());
        }

        let origin = match base {
            [single] => *single,
            _ => {
                return Err(GeometryError::precondition(
                    self.name(),
                    format!(
                        "instance shift expects exactly one base coordinate, got {}",
                        base.len()
                    ),
                ))
            }
        };

        Ok(self.ring().fan_out(self.position(), origin))
    }
}

impl OffsetFromCenterline for BoosterSet {
    fn radial_offset(&self) -> f64 {
        self.radial_offset
    }

    fn angular_offset(&self) -> f64 {
        self.angular_offset
    }

    fn set_radial_offset(&mut self, radius: f64, sink: &mut dyn ChangeSink) {
        warn_if_mirrored(self.name(), radius);
        self.radial_offset = radius;
        sink.fire(ChangeKind::Both);
    }

    fn set_angular_offset(&mut self, angle: f64, sink: &mut dyn ChangeSink) {
        self.angular_offset = angle;
        sink.fire(ChangeKind::Both);
    }

    fn is_outside(&self) -> bool {
        !self.is_centerline()
    }
}
