//! Configuration for the debug tree output

/// Formatting options for [`Vehicle::debug_tree_with`](super::Vehicle::debug_tree_with)
#[derive(Debug, Clone, PartialEq)]
pub struct DebugConfig {
    /// Prefix added for each nesting level
    pub indent: String,

    /// Decimal places for coordinates
    pub precision: usize,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            precision: 3,
        }
    }
}

impl DebugConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-level indentation
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the coordinate precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DebugConfig::default();
        assert_eq!(config.indent, "  ");
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DebugConfig::new().with_indent("| ").with_precision(1);
        assert_eq!(config.indent, "| ");
        assert_eq!(config.precision, 1);
    }
}
