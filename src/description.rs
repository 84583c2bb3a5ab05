//! TOML vehicle descriptions.
//!
//! A description lists stages from front to back; each stage may carry body
//! tubes and booster sets, and those may nest further:
//!
//! ```toml
//! name = "Heavy"
//!
//! [[stages]]
//! name = "Core"
//! length = 12.0
//!
//! [[stages.bodies]]
//! name = "Core tube"
//! length = 12.0
//! radius = 0.6
//!
//! [[stages.boosters]]
//! name = "Side boosters"
//! count = 2
//! length = 8.0
//! radial_offset = 1.3
//! angular_offset = 0.0      # radians
//!
//! [[stages.boosters.bodies]]
//! name = "Booster tube"
//! length = 8.0
//! radius = 0.5
//! ```

use serde::Deserialize;

use crate::component::{AxialStage, BodyTube, BoosterSet, Position};
use crate::error::DescriptionError;
use crate::vehicle::{ComponentId, Vehicle};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleDescription {
    pub name: String,
    #[serde(default)]
    pub stages: Vec<StageDescription>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageDescription {
    pub name: String,
    #[serde(default)]
    pub length: f64,
    pub position: Option<Position>,
    #[serde(default)]
    pub axial_offset: f64,
    #[serde(default)]
    pub bodies: Vec<BodyDescription>,
    #[serde(default)]
    pub boosters: Vec<BoosterDescription>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoosterDescription {
    pub name: Option<String>,
    /// Number of boosters; two when omitted
    pub count: Option<usize>,
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub radial_offset: f64,
    /// Radians
    #[serde(default)]
    pub angular_offset: f64,
    /// Radians; an even full-turn spacing when omitted
    pub angular_separation: Option<f64>,
    pub position: Option<Position>,
    #[serde(default)]
    pub axial_offset: f64,
    #[serde(default)]
    pub bodies: Vec<BodyDescription>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyDescription {
    pub name: String,
    pub length: f64,
    #[serde(default)]
    pub radius: f64,
    pub position: Option<Position>,
    #[serde(default)]
    pub axial_offset: f64,
    /// Pods mounted on this body
    #[serde(default)]
    pub boosters: Vec<BoosterDescription>,
}

impl VehicleDescription {
    /// Load a description from a TOML string
    pub fn from_str(content: &str) -> Result<Self, DescriptionError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the component tree this description lists
    pub fn build(&self) -> Result<Vehicle, DescriptionError> {
        let mut vehicle = Vehicle::new(self.name.as_str());
        let root = vehicle.root();
        for stage in &self.stages {
            let mut component = AxialStage::new(stage.name.as_str())
                .with_length(stage.length)
                .with_axial_offset(stage.axial_offset);
            if let Some(method) = stage.position {
                component = component.with_position(method);
            }
            let id = vehicle.add_child(root, component)?;
            for body in &stage.bodies {
                add_body(&mut vehicle, id, body)?;
            }
            for set in &stage.boosters {
                add_boosters(&mut vehicle, id, set)?;
            }
        }
        tracing::debug!(
            name = self.name.as_str(),
            stages = self.stages.len(),
            "built vehicle from description"
        );
        Ok(vehicle)
    }
}

fn add_body(
    vehicle: &mut Vehicle,
    parent: ComponentId,
    desc: &BodyDescription,
) -> Result<ComponentId, DescriptionError> {
    let mut body = BodyTube::new(desc.name.as_str(), desc.length, desc.radius)
        .with_axial_offset(desc.axial_offset);
    if let Some(method) = desc.position {
        body = body.with_position(method);
    }
    let id = vehicle.add_child(parent, body)?;
    for set in &desc.boosters {
        add_boosters(vehicle, id, set)?;
    }
    Ok(id)
}

fn add_boosters(
    vehicle: &mut Vehicle,
    parent: ComponentId,
    desc: &BoosterDescription,
) -> Result<ComponentId, DescriptionError> {
    let mut set = match desc.count {
        Some(count) => BoosterSet::with_count(count)?,
        None => BoosterSet::new(),
    };
    // Named first so warnings raised by the builders carry the name
    if let Some(name) = &desc.name {
        set = set.with_name(name.as_str());
    }
    set = set
        .with_length(desc.length)
        .with_radial_offset(desc.radial_offset)
        .with_angular_offset(desc.angular_offset)
        .with_axial_offset(desc.axial_offset);

    if let Some(separation) = desc.angular_separation {
        set = set.with_angular_separation(separation);
    }
    if let Some(method) = desc.position {
        set = set.with_position(method);
    }

    let id = vehicle.add_child(parent, set)?;
    for body in &desc.bodies {
        add_body(vehicle, id, body)?;
    }
    Ok(id)
}
