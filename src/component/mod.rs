//! Vehicle components and the capabilities they share
//!
//! Components are plain values; the [`Vehicle`](crate::vehicle::Vehicle)
//! arena owns them and wires up parents, children and notifications.

pub mod body;
pub mod booster;
pub mod event;
pub mod position;
pub mod stage;
pub mod traits;

pub use body::BodyTube;
pub use booster::BoosterSet;
pub use event::{ChangeEvent, ChangeKind, ChangeSink};
pub use position::{Placement, PlacementContext, Position};
pub use stage::AxialStage;
pub use traits::{MultiInstance, OffsetFromCenterline, Positionable};

/// Any component that can live in a vehicle tree
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// The tree root; located at the origin
    Root { name: String },
    Stage(AxialStage),
    Boosters(BoosterSet),
    Body(BodyTube),
}

impl Component {
    pub fn name(&self) -> &str {
        match self {
            Component::Root { name } => name.as_str(),
            Component::Stage(stage) => stage.name(),
            Component::Boosters(set) => set.name(),
            Component::Body(body) => body.name(),
        }
    }

    /// Short description of the component kind, for messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Component::Root { .. } => "vehicle",
            Component::Stage(_) => "stage",
            Component::Boosters(_) => "booster set",
            Component::Body(_) => "body tube",
        }
    }

    /// Positioning capability, absent for the root
    pub fn positionable(&self) -> Option<&dyn Positionable> {
        match self {
            Component::Root { .. } => None,
            Component::Stage(stage) => Some(stage),
            Component::Boosters(set) => Some(set),
            Component::Body(body) => Some(body),
        }
    }

    pub fn positionable_mut(&mut self) -> Option<&mut dyn Positionable> {
        match self {
            Component::Root { .. } => None,
            Component::Stage(stage) => Some(stage),
            Component::Boosters(set) => Some(set),
            Component::Body(body) => Some(body),
        }
    }

    /// Instancing capability, present for stage-like components
    pub fn multi_instance(&self) -> Option<&dyn MultiInstance> {
        match self {
            Component::Stage(stage) => Some(stage),
            Component::Boosters(set) => Some(set),
            Component::Root { .. } | Component::Body(_) => None,
        }
    }

    /// Stages and booster sets are numbered in tree order
    pub fn is_stage_like(&self) -> bool {
        matches!(self, Component::Stage(_) | Component::Boosters(_))
    }

    /// Own length; the root's length is derived by the tree
    pub fn length(&self) -> f64 {
        self.positionable().map_or(0.0, |p| p.length())
    }

    /// Whether `child` may be attached directly below this component
    pub fn accepts(&self, child: &Component) -> bool {
        match (self, child) {
            (Component::Root { .. }, Component::Stage(_)) => true,
            (Component::Stage(_), Component::Body(_) | Component::Boosters(_)) => true,
            (Component::Boosters(_), Component::Body(_)) => true,
            (Component::Body(_), Component::Boosters(_)) => true,
            _ => false,
        }
    }
}

impl From<AxialStage> for Component {
    fn from(stage: AxialStage) -> Self {
        Component::Stage(stage)
    }
}

impl From<BoosterSet> for Component {
    fn from(set: BoosterSet) -> Self {
        Component::Boosters(set)
    }
}

impl From<BodyTube> for Component {
    fn from(body: BodyTube) -> Self {
        Component::Body(body)
    }
}
