//! The vehicle component tree.
//!
//! Components live in an arena owned by [`Vehicle`] and are addressed by
//! [`ComponentId`] handles. A parent owns its children through the handle
//! list; a child's parent handle is a lookup-only back-reference used while
//! resolving geometry.
//!
//! ## Readiness
//!
//! Removing a component retires its handle (and those of its subtree)
//! rather than reusing the slot. Any geometry query through a retired handle
//! fails with [`GeometryError::ReadinessViolation`].
//!
//! ## Change notification
//!
//! Component setters fire [`ChangeKind`]s into a [`ChangeSink`]. The vehicle
//! collects them and forwards each one, tagged with the component handle,
//! to every observer registered with [`Vehicle::subscribe`].

mod bounds;
mod config;
mod debug;
mod edit;
mod error;
mod locate;

pub use config::DebugConfig;
pub use error::GeometryError;

use std::fmt;

use crate::component::{BoosterSet, ChangeEvent, ChangeKind, ChangeSink, Component};

/// Stable handle of a component within a [`Vehicle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(usize);

impl ComponentId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Node {
    component: Component,
    parent: Option<ComponentId>,
    children: Vec<ComponentId>,
    live: bool,
}

impl Node {
    fn new(component: Component) -> Self {
        Self {
            component,
            parent: None,
            children: Vec::new(),
            live: true,
        }
    }
}

type Observer = Box<dyn FnMut(&ChangeEvent)>;

/// A vehicle: the root of a component tree and the arena holding it
pub struct Vehicle {
    nodes: Vec<Node>,
    observers: Vec<Observer>,
}

impl fmt::Debug for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vehicle")
            .field("nodes", &self.nodes)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Vehicle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(Component::Root { name: name.into() })],
            observers: Vec::new(),
        }
    }

    /// Handle of the root component
    pub fn root(&self) -> ComponentId {
        ComponentId(0)
    }

    /// Register an observer for every change fired in this tree
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Add a component to the arena without attaching it to a parent
    pub fn add(&mut self, component: impl Into<Component>) -> ComponentId {
        let id = ComponentId(self.nodes.len());
        self.nodes.push(Node::new(component.into()));
        id
    }

    /// Add a component and attach it as the last child of `parent`
    pub fn add_child(
        &mut self,
        parent: ComponentId,
        component: impl Into<Component>,
    ) -> Result<ComponentId, GeometryError> {
        let component = component.into();
        let parent_component = self.component(parent)?;
        if !parent_component.accepts(&component) {
            return Err(GeometryError::incompatible(
                parent_component.kind_name(),
                component.kind_name(),
            ));
        }
        let id = self.add(component);
        self.attach(parent, id)?;
        Ok(id)
    }

    /// Attach a detached component as the last child of `parent`
    pub fn attach(&mut self, parent: ComponentId, child: ComponentId) -> Result<(), GeometryError> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;
        let child_name = child_node.component.name();

        if matches!(child_node.component, Component::Root { .. }) {
            return Err(GeometryError::structural(
                child_name,
                "the vehicle root cannot be attached to another component",
            ));
        }
        if let Some(existing) = child_node.parent {
            return Err(GeometryError::structural(
                child_name,
                format!("already attached to '{}'", self.name(existing)?),
            ));
        }
        if !parent_node.component.accepts(&child_node.component) {
            return Err(GeometryError::incompatible(
                parent_node.component.kind_name(),
                child_node.component.kind_name(),
            ));
        }
        if parent == child || self.ancestors(parent).any(|a| a == child) {
            return Err(GeometryError::structural(
                child_name,
                "attaching would make the component its own ancestor",
            ));
        }

        tracing::debug!(parent = %parent, child = %child, "attaching component");
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        self.reposition_children(parent)?;
        self.notify(parent, ChangeKind::Tree);
        Ok(())
    }

    /// Detach a component from its parent and retire its subtree's handles
    pub fn remove(&mut self, id: ComponentId) -> Result<(), GeometryError> {
        let node = self.node(id)?;
        if matches!(node.component, Component::Root { .. }) {
            return Err(GeometryError::structural(
                node.component.name(),
                "the vehicle root cannot be removed",
            ));
        }
        let parent = node.parent;
        let retired = self.subtree(id)?;

        if let Some(parent) = parent {
            self.node_mut(parent)?.children.retain(|c| *c != id);
        }
        for handle in &retired {
            if let Some(node) = self.nodes.get_mut(handle.0) {
                node.live = false;
            }
        }
        self.node_slot_mut(id).parent = None;
        tracing::debug!(component = %id, retired = retired.len(), "removed component");

        if let Some(parent) = parent {
            self.reposition_children(parent)?;
            self.notify(parent, ChangeKind::Tree);
        }
        Ok(())
    }

    /// Readiness predicate consulted before any geometry is computed
    pub fn check_ready(&self, id: ComponentId) -> Result<(), GeometryError> {
        self.node(id).map(|_| ())
    }

    pub fn is_ready(&self, id: ComponentId) -> bool {
        self.check_ready(id).is_ok()
    }

    pub fn component(&self, id: ComponentId) -> Result<&Component, GeometryError> {
        self.node(id).map(|n| &n.component)
    }

    /// The booster set behind `id`
    pub fn booster(&self, id: ComponentId) -> Result<&BoosterSet, GeometryError> {
        match self.component(id)? {
            Component::Boosters(set) => Ok(set),
            other => Err(not_a_booster_set(other)),
        }
    }

    pub fn parent(&self, id: ComponentId) -> Result<Option<ComponentId>, GeometryError> {
        self.node(id).map(|n| n.parent)
    }

    pub fn children(&self, id: ComponentId) -> Result<&[ComponentId], GeometryError> {
        self.node(id).map(|n| n.children.as_slice())
    }

    pub fn name(&self, id: ComponentId) -> Result<&str, GeometryError> {
        self.node(id).map(|n| n.component.name())
    }

    /// Length along the main axis; the root spans the sum of its stages
    pub fn length(&self, id: ComponentId) -> Result<f64, GeometryError> {
        let node = self.node(id)?;
        match node.component {
            Component::Root { .. } => node
                .children
                .iter()
                .map(|child| self.length(*child))
                .sum(),
            _ => Ok(node.component.length()),
        }
    }

    /// `id` and all its descendants, in pre-order
    pub fn subtree(&self, id: ComponentId) -> Result<Vec<ComponentId>, GeometryError> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.node(current)?;
            out.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(out)
    }

    fn ancestors(&self, id: ComponentId) -> impl Iterator<Item = ComponentId> + '_ {
        std::iter::successors(self.nodes.get(id.0).and_then(|n| n.parent), |p| {
            self.nodes.get(p.0).and_then(|n| n.parent)
        })
    }

    fn node(&self, id: ComponentId) -> Result<&Node, GeometryError> {
        match self.nodes.get(id.0) {
            Some(node) if node.live => Ok(node),
            Some(node) => Err(GeometryError::not_ready(
                node.component.name(),
                "component was removed from the vehicle",
            )),
            None => Err(GeometryError::not_ready(
                id.to_string(),
                "no such component in this vehicle",
            )),
        }
    }

    fn node_mut(&mut self, id: ComponentId) -> Result<&mut Node, GeometryError> {
        self.node(id)?;
        Ok(self.node_slot_mut(id))
    }

    /// Slot access regardless of liveness; `id` must come from this arena
    fn node_slot_mut(&mut self, id: ComponentId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn notify(&mut self, id: ComponentId, kind: ChangeKind) {
        let event = ChangeEvent {
            component: id,
            kind,
        };
        tracing::debug!(component = %id, kind = %kind, "component changed");
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Run a component setter, then forward whatever it fired to observers
    fn update<R>(
        &mut self,
        id: ComponentId,
        f: impl FnOnce(&mut Component, &mut dyn ChangeSink) -> Result<R, GeometryError>,
    ) -> Result<R, GeometryError> {
        let mut fired: Vec<ChangeKind> = Vec::new();
        let result = f(&mut self.node_mut(id)?.component, &mut fired);
        for kind in fired {
            self.notify(id, kind);
        }
        result
    }
}

fn not_a_booster_set(component: &Component) -> GeometryError {
    GeometryError::precondition(
        component.name(),
        format!("expected a booster set, found a {}", component.kind_name()),
    )
}
