//! Core value types shared by the geometry and vehicle modules

use std::fmt;
use std::ops::Add;

/// A point or offset in the vehicle coordinate system.
///
/// `x` runs along the main (centerline) axis, `y` and `z` span the plane
/// perpendicular to it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    /// The origin
    pub const ZERO: Coordinate = Coordinate {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A coordinate on the main axis
    pub const fn axial(x: f64) -> Self {
        Self::new(x, 0.0, 0.0)
    }

    /// Distance from the main axis
    pub fn radial_distance(&self) -> f64 {
        self.y.hypot(self.z)
    }

    /// Format with a fixed number of decimals.
    ///
    /// Values that round to zero print without a sign, so `-1e-17` shows as
    /// `0.000` rather than `-0.000`.
    pub fn format(&self, precision: usize) -> String {
        format!(
            "({}, {}, {})",
            format_component(self.x, precision),
            format_component(self.y, precision),
            format_component(self.z, precision)
        )
    }
}

fn format_component(value: f64, precision: usize) -> String {
    let text = format!("{:.p$}", value, p = precision);
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => {
            unsigned.to_string()
        }
        _ => text,
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Precision selects decimals here, so `Formatter::pad` (which would
        // truncate) cannot be used.
        let text = self.format(f.precision().unwrap_or(3));
        match (f.width(), f.align()) {
            (Some(width), Some(fmt::Alignment::Right)) => write!(f, "{:>width$}", text),
            (Some(width), Some(fmt::Alignment::Center)) => write!(f, "{:^width$}", text),
            (Some(width), _) => write!(f, "{:<width$}", text),
            (None, _) => f.write_str(&text),
        }
    }
}

/// One extreme of an approximate bounding volume: an axial station and the
/// outer radius reached there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundPoint {
    pub x: f64,
    pub r: f64,
}

impl BoundPoint {
    pub fn new(x: f64, r: f64) -> Self {
        Self { x, r }
    }

    /// The four corners of the square of half-width `r` at station `x`
    pub fn corners(&self) -> [Coordinate; 4] {
        let (x, r) = (self.x, self.r);
        [
            Coordinate::new(x, -r, -r),
            Coordinate::new(x, r, -r),
            Coordinate::new(x, r, r),
            Coordinate::new(x, -r, r),
        ]
    }
}

/// An axis-aligned box in vehicle coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Extent {
    /// A zero-sized extent at a single point
    pub fn at(point: Coordinate) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Overall length along the main axis
    pub fn length(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Check if this extent contains a point
    pub fn contains(&self, point: Coordinate) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Expand this extent to include a point
    pub fn expand_to_include(&self, point: Coordinate) -> Extent {
        Extent {
            min: Coordinate::new(
                self.min.x.min(point.x),
                self.min.y.min(point.y),
                self.min.z.min(point.z),
            ),
            max: Coordinate::new(
                self.max.x.max(point.x),
                self.max.y.max(point.y),
                self.max.z.max(point.z),
            ),
        }
    }

    /// Smallest extent containing every point, or `None` for no points
    pub fn from_points<I>(points: I) -> Option<Extent>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Extent::at(first), |acc, p| acc.expand_to_include(p)))
    }
}
