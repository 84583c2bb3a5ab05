//! Booster Layout - geometry of radially repeated booster sets
//!
//! This library models a vehicle as a tree of components and resolves the
//! absolute position of every booster in a ring of boosters attached off the
//! centerline, along with rough bounds for display and size estimation.
//!
//! # Example
//!
//! ```rust
//! use booster_layout::describe;
//!
//! let tree = describe(
//!     r#"
//! name = "Demo"
//!
//! [[stages]]
//! name = "Core"
//! length = 4.0
//!
//! [[stages.boosters]]
//! count = 3
//! length = 2.0
//! radial_offset = 0.3
//! "#,
//! )
//! .unwrap();
//! assert!(tree.contains("[instance  2 of  3]"));
//! ```

pub mod component;
pub mod description;
pub mod error;
pub mod geometry;
pub mod vehicle;

pub use component::{
    AxialStage, BodyTube, BoosterSet, ChangeEvent, ChangeKind, ChangeSink, Component,
    MultiInstance, OffsetFromCenterline, Position, Positionable,
};
pub use description::VehicleDescription;
pub use error::DescriptionError;
pub use geometry::{BoundPoint, Coordinate, Extent, RingPattern};
pub use vehicle::{ComponentId, DebugConfig, GeometryError, Vehicle};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=booster_layout=debug` or `RUST_LOG=booster_layout=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Build a vehicle from a TOML description
pub fn load(source: &str) -> Result<Vehicle, DescriptionError> {
    VehicleDescription::from_str(source)?.build()
}

/// Build a vehicle from a TOML description and dump its component tree
pub fn describe(source: &str) -> Result<String, DescriptionError> {
    describe_with(source, &DebugConfig::default())
}

pub fn describe_with(source: &str, config: &DebugConfig) -> Result<String, DescriptionError> {
    let vehicle = load(source)?;
    Ok(vehicle.debug_tree_with(config)?)
}
