//! Change notification between components and the tree that owns them

use std::fmt;

use crate::vehicle::ComponentId;

/// What kind of property a mutation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Shape or position, anything affecting airflow
    Aerodynamic,
    /// Both aerodynamic and mass properties
    Both,
    /// Children were added or removed
    Tree,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Aerodynamic => write!(f, "aerodynamic"),
            ChangeKind::Both => write!(f, "aerodynamic+mass"),
            ChangeKind::Tree => write!(f, "tree"),
        }
    }
}

/// Receiver for change notifications fired by component setters.
///
/// Setters treat the sink as fire-and-forget.
pub trait ChangeSink {
    fn fire(&mut self, kind: ChangeKind);
}

/// Collects fired kinds in order
impl ChangeSink for Vec<ChangeKind> {
    fn fire(&mut self, kind: ChangeKind) {
        self.push(kind);
    }
}

/// A change notification as delivered to vehicle observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub component: ComponentId,
    pub kind: ChangeKind,
}
