//! Relative positioning of a component along its parent's main axis

use std::fmt;

use serde::Deserialize;

use crate::geometry::Coordinate;

/// How a component's axial reference point is derived from its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Front of the component at the front of the parent, plus offset
    Top,
    /// Component centered within the parent, plus offset
    Middle,
    /// Aft end of the component at the aft end of the parent, plus offset
    Bottom,
    /// Directly behind the previous sibling, plus offset
    #[default]
    After,
    /// Offset measured from the vehicle origin
    Absolute,
}

/// Everything [`Position::axial_position`] needs to know about the
/// surroundings of the component being placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementContext {
    /// Length of the parent component
    pub parent_length: f64,
    /// Absolute axial station of the parent's reference point
    pub parent_station: f64,
    /// Aft end of the previous sibling, relative to the parent
    pub previous_end: Option<f64>,
}

impl Position {
    /// Axial position of a component of `length` placed with `offset`,
    /// relative to its parent's reference point.
    pub fn axial_position(&self, length: f64, offset: f64, ctx: &PlacementContext) -> f64 {
        match self {
            Position::Top => offset,
            Position::Middle => (ctx.parent_length - length) / 2.0 + offset,
            Position::Bottom => ctx.parent_length - length + offset,
            Position::After => ctx.previous_end.unwrap_or(0.0) + offset,
            Position::Absolute => offset - ctx.parent_station,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Position::Top => "TOP",
            Position::Middle => "MIDDLE",
            Position::Bottom => "BOTTOM",
            Position::After => "AFTER",
            Position::Absolute => "ABSOLUTE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positioning state shared by every placeable component: the method, the
/// user-supplied offset, and the reference position derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub method: Position,
    pub axial_offset: f64,
    /// Reference position relative to the parent, kept current by the tree
    pub position: Coordinate,
}

impl Placement {
    pub fn new(method: Position) -> Self {
        Self {
            method,
            axial_offset: 0.0,
            position: Coordinate::ZERO,
        }
    }

    /// Recompute the reference position, returning the aft end relative to
    /// the parent for the next sibling.
    pub fn update(&mut self, length: f64, ctx: &PlacementContext) -> f64 {
        let x = self.method.axial_position(length, self.axial_offset, ctx);
        self.position = Coordinate::axial(x);
        x + length
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(Position::default())
    }
}
