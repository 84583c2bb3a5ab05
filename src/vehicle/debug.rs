//! Human-readable dump of the component tree with resolved positions

use crate::component::{Component, MultiInstance};
use crate::geometry::Coordinate;

use super::{ComponentId, DebugConfig, GeometryError, Vehicle};

impl Vehicle {
    /// Index of a stage or booster set among all stage-like components, in
    /// tree order. `None` for other components.
    pub fn stage_number(&self, id: ComponentId) -> Result<Option<usize>, GeometryError> {
        if !self.component(id)?.is_stage_like() {
            return Ok(None);
        }
        let mut number = 0;
        for current in self.subtree(self.root())? {
            if current == id {
                return Ok(Some(number));
            }
            if self.component(current)?.is_stage_like() {
                number += 1;
            }
        }
        // Detached stage-like components are numbered after the attached ones
        Ok(Some(number))
    }

    /// Dump the whole tree with default formatting
    pub fn debug_tree(&self) -> Result<String, GeometryError> {
        self.debug_tree_with(&DebugConfig::default())
    }

    pub fn debug_tree_with(&self, config: &DebugConfig) -> Result<String, GeometryError> {
        let mut buffer = String::new();
        self.debug_subtree(self.root(), &mut buffer, "", config)?;
        Ok(buffer)
    }

    fn debug_subtree(
        &self,
        id: ComponentId,
        buffer: &mut String,
        prefix: &str,
        config: &DebugConfig,
    ) -> Result<(), GeometryError> {
        self.debug_tree_node(id, buffer, prefix, config)?;
        let child_prefix = format!("{}{}", prefix, config.indent);
        for child in self.children(id)? {
            self.debug_subtree(*child, buffer, &child_prefix, config)?;
        }
        Ok(())
    }

    /// Append the description of a single component to `buffer`.
    ///
    /// Off-axis components list one line per instance with the instance's
    /// position relative to the parent and its absolute location.
    pub fn debug_tree_node(
        &self,
        id: ComponentId,
        buffer: &mut String,
        prefix: &str,
        config: &DebugConfig,
    ) -> Result<(), GeometryError> {
        let component = self.component(id)?;
        let p = config.precision;

        let Some(placeable) = component.positionable() else {
            buffer.push_str(&format!(
                "{}{}  {:.p$}\n",
                prefix,
                component.name(),
                self.length(id)?
            ));
            return Ok(());
        };

        let label = match self.stage_number(id)? {
            Some(number) => format!("{} ({})", component.name(), number),
            None => component.name().to_string(),
        };
        buffer.push_str(&format!(
            "{}    {:<24}  {:5.p$}",
            prefix,
            label,
            placeable.length()
        ));

        match component {
            Component::Boosters(set) if !set.is_centerline() => {
                buffer.push_str(&format!(
                    "    (offset: {:4.1}  via: {} )\n",
                    placeable.axial_offset(),
                    placeable.relative_position()
                ));
                let relative = self.relative_locations(id)?;
                let absolute = self.resolve_absolute_locations(id)?;
                let count = set.instance_count();
                for (index, (rel, abs)) in relative.iter().zip(&absolute).enumerate() {
                    buffer.push_str(&format!(
                        "{}                 [instance {:2} of {:2}]  {:>32.p$}  {:>32.p$}\n",
                        prefix, index, count, rel, abs
                    ));
                }
            }
            _ => {
                let locations = self.resolve_absolute_locations(id)?;
                let position = placeable.position();
                match locations.as_slice() {
                    [single] => push_centerline(buffer, position, *single, p),
                    _ => {
                        buffer.push_str(&format!("  {:>24.p$}\n", position));
                        let count = locations.len();
                        for (index, abs) in locations.iter().enumerate() {
                            buffer.push_str(&format!(
                                "{}                 [instance {:2} of {:2}]  {:>32.p$}\n",
                                prefix, index, count, abs
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn push_centerline(buffer: &mut String, position: Coordinate, location: Coordinate, p: usize) {
    buffer.push_str(&format!("  {:>24.p$}  {:>24.p$}\n", position, location));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{AxialStage, BodyTube, BoosterSet};

    fn vehicle_with_boosters(count: usize) -> (Vehicle, ComponentId) {
        let mut v = Vehicle::new("Rocket");
        let core = v
            .add_child(v.root(), AxialStage::new("Core").with_length(2.0))
            .unwrap();
        let set = v
            .add_child(
                core,
                BoosterSet::with_count(count)
                    .unwrap()
                    .with_name("Side boosters")
                    .with_length(2.0)
                    .with_radial_offset(0.5),
            )
            .unwrap();
        (v, set)
    }

    #[test]
    fn test_stage_numbers() {
        let mut v = Vehicle::new("Rocket");
        let upper = v.add_child(v.root(), AxialStage::new("Upper")).unwrap();
        let core = v.add_child(v.root(), AxialStage::new("Core")).unwrap();
        let set = v.add_child(core, BoosterSet::new()).unwrap();
        let tube = v.add_child(set, BodyTube::new("Tube", 1.0, 0.1)).unwrap();

        assert_eq!(v.stage_number(upper).unwrap(), Some(0));
        assert_eq!(v.stage_number(core).unwrap(), Some(1));
        assert_eq!(v.stage_number(set).unwrap(), Some(2));
        assert_eq!(v.stage_number(tube).unwrap(), None);
    }

    #[test]
    fn test_node_enumerates_every_instance() {
        for count in 1..=6 {
            let (v, set) = vehicle_with_boosters(count);
            let mut buffer = String::new();
            v.debug_tree_node(set, &mut buffer, "", &DebugConfig::default())
                .unwrap();
            let instance_lines = buffer.lines().filter(|l| l.contains("[instance")).count();
            assert_eq!(instance_lines, count);
            assert_eq!(buffer.lines().count(), count + 1);
        }
    }

    #[test]
    fn test_node_does_not_mutate() {
        let (v, set) = vehicle_with_boosters(3);
        let before = v.resolve_absolute_locations(set).unwrap();
        let mut buffer = String::new();
        v.debug_tree_node(set, &mut buffer, "> ", &DebugConfig::default())
            .unwrap();
        assert!(buffer.starts_with(">     Side boosters (1)"));
        assert_eq!(v.resolve_absolute_locations(set).unwrap(), before);
    }

    #[test]
    fn test_debug_tree_snapshot() {
        let (v, _) = vehicle_with_boosters(2);
        let output = v.debug_tree().unwrap();
        insta::assert_snapshot!(output.trim_end(), @r"
Rocket  2.000
      Core (0)                  2.000     (0.000, 0.000, 0.000)     (0.000, 0.000, 0.000)
        Side boosters (1)         2.000    (offset:  0.0  via: BOTTOM )
                     [instance  0 of  2]             (0.000, 0.500, 0.000)             (0.000, 0.500, 0.000)
                     [instance  1 of  2]            (0.000, -0.500, 0.000)            (0.000, -0.500, 0.000)
");
    }

    #[test]
    fn test_debug_tree_precision_applies_to_root() {
        let (v, _) = vehicle_with_boosters(2);
        let config = DebugConfig::new().with_precision(1);
        let output = v.debug_tree_with(&config).unwrap();
        assert_eq!(output.lines().next(), Some("Rocket  2.0"));
        assert!(output.contains("(0.0, 0.5, 0.0)"));
        assert!(!output.contains("2.000"));
    }

    #[test]
    fn test_debug_tree_detached_booster_fails() {
        let mut v = Vehicle::new("Rocket");
        let set = v.add(BoosterSet::new());
        let mut buffer = String::new();
        let err = v
            .debug_tree_node(set, &mut buffer, "", &DebugConfig::default())
            .unwrap_err();
        assert!(matches!(err, GeometryError::StructuralInvariantViolation { .. }));
    }
}
