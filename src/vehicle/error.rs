//! Error types for vehicle geometry

use thiserror::Error;

/// Broken invariants detected while editing or resolving a vehicle tree.
///
/// Every variant is a caller contract breach: operations fail fast and
/// return no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Geometry requested for a component that is not attached to a parent
    #[error("structural invariant violated on '{component}': {reason}")]
    StructuralInvariantViolation { component: String, reason: String },

    /// A tree shape the geometry cannot resolve, such as nested off-axis patterns
    #[error("unsupported configuration at '{component}': {reason}")]
    UnsupportedConfiguration { component: String, reason: String },

    /// An operation was called with arguments outside its contract
    #[error("precondition violated on '{component}': {reason}")]
    PreconditionViolation { component: String, reason: String },

    /// The component handle does not refer to a live component
    #[error("component {component} is not ready: {reason}")]
    ReadinessViolation { component: String, reason: String },

    /// The parent kind does not accept the child kind
    #[error("a {parent} cannot contain a {child}")]
    IncompatibleChild { parent: String, child: String },
}

impl GeometryError {
    pub fn structural(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StructuralInvariantViolation {
            component: component.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedConfiguration {
            component: component.into(),
            reason: reason.into(),
        }
    }

    pub fn precondition(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            component: component.into(),
            reason: reason.into(),
        }
    }

    pub fn not_ready(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ReadinessViolation {
            component: component.into(),
            reason: reason.into(),
        }
    }

    pub fn incompatible(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::IncompatibleChild {
            parent: parent.into(),
            child: child.into(),
        }
    }

    /// Name of the component the error was raised on, if any
    pub fn component(&self) -> Option<&str> {
        match self {
            Self::StructuralInvariantViolation { component, .. }
            | Self::UnsupportedConfiguration { component, .. }
            | Self::PreconditionViolation { component, .. }
            | Self::ReadinessViolation { component, .. } => Some(component.as_str()),
            Self::IncompatibleChild { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_display() {
        let err = GeometryError::structural("Boosters", "no parent");
        assert_eq!(
            err.to_string(),
            "structural invariant violated on 'Boosters': no parent"
        );
        assert_eq!(err.component(), Some("Boosters"));
    }

    #[test]
    fn test_incompatible_display() {
        let err = GeometryError::incompatible("booster set", "stage");
        assert_eq!(err.to_string(), "a booster set cannot contain a stage");
        assert_eq!(err.component(), None);
    }
}
