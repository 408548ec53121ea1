// core/hierarchy.rs
//
// Parent/child relationships between entities, keyed by EntityId.
// Owned by Scene; kept acyclic by refusing re-parenting under a descendant.

use std::collections::HashMap;

use crate::api::types::EntityId;
use crate::error::SceneError;

#[derive(Debug, Clone, Default)]
struct HierarchyNode {
    parent: Option<EntityId>,
    children: Vec<EntityId>,
}

/// Forest of entities. Children keep insertion order.
#[derive(Debug, Default)]
pub struct Hierarchy {
    nodes: HashMap<EntityId, HierarchyNode>,
    /// Entities with no parent (top-level), in registration order.
    roots: Vec<EntityId>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity as a root. No-op if already registered.
    pub fn register(&mut self, id: EntityId) {
        if self.nodes.contains_key(&id) {
            return;
        }
        self.nodes.insert(id, HierarchyNode::default());
        self.roots.push(id);
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Set the parent of an entity. Pass `None` to make it a root.
    /// Both entities are registered on demand.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) -> Result<(), SceneError> {
        if let Some(p) = parent {
            if p == child || self.is_ancestor_of(child, p) {
                return Err(SceneError::HierarchyCycle { child, parent: p });
            }
            self.register(p);
        }
        self.register(child);

        // Detach from the old parent, or from the roots.
        match self.nodes.get(&child).and_then(|n| n.parent) {
            Some(old_parent) => {
                if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                    old_node.children.retain(|&c| c != child);
                }
            }
            None => self.roots.retain(|&r| r != child),
        }

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        match parent {
            Some(p) => {
                if let Some(parent_node) = self.nodes.get_mut(&p) {
                    parent_node.children.push(child);
                }
            }
            None => self.roots.push(child),
        }
        Ok(())
    }

    pub fn parent(&self, id: EntityId) -> Option<EntityId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: EntityId) -> &[EntityId] {
        self.nodes.get(&id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn roots(&self) -> &[EntityId] {
        &self.roots
    }

    /// Whether `ancestor` appears on the parent chain of `id`.
    pub fn is_ancestor_of(&self, ancestor: EntityId, id: EntityId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// Parent, grandparent, ... up to the root. Excludes `id` itself.
    pub fn ancestors(&self, id: EntityId) -> impl Iterator<Item = EntityId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// `id` followed by its whole subtree, depth-first pre-order.
    pub fn subtree(&self, id: EntityId) -> Vec<EntityId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            // Reverse so the first child is visited first.
            stack.extend(self.children(current).iter().rev().copied());
        }
        order
    }

    /// Remove an entity from the hierarchy.
    /// Children become roots (orphaned).
    pub fn remove(&mut self, id: EntityId) {
        let Some(node) = self.nodes.remove(&id) else { return };

        match node.parent {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(&parent) {
                    parent_node.children.retain(|&c| c != id);
                }
            }
            None => self.roots.retain(|&r| r != id),
        }

        for child in node.children {
            if let Some(child_node) = self.nodes.get_mut(&child) {
                child_node.parent = None;
            }
            self.roots.push(child);
        }
    }

    /// Number of entities in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }
}
