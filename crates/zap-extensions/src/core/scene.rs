use crate::api::types::EntityId;
use crate::components::component::{downcast_ref, Component, ComponentKind};
use crate::components::entity::Entity;
use crate::components::layer::Layer;
use crate::core::hierarchy::Hierarchy;
use crate::error::SceneError;

/// Entity storage using a flat Vec, plus the parent/child hierarchy.
/// Designed for small-to-medium entity counts (hundreds, not millions).
#[derive(Debug)]
pub struct Scene {
    entities: Vec<Entity>,
    hierarchy: Hierarchy,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a scene with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            hierarchy: Hierarchy::new(),
        }
    }

    /// Add an entity to the scene as a root.
    /// Fails if an entity with the same id is already present.
    pub fn spawn(&mut self, entity: Entity) -> Result<EntityId, SceneError> {
        let id = entity.id();
        if self.get(id).is_some() {
            return Err(SceneError::DuplicateEntity(id));
        }
        self.hierarchy.register(id);
        self.entities.push(entity);
        Ok(id)
    }

    /// Add an entity under an existing parent.
    pub fn spawn_child(&mut self, parent: EntityId, entity: Entity) -> Result<EntityId, SceneError> {
        if self.get(parent).is_none() {
            return Err(SceneError::EntityNotFound(parent));
        }
        let id = self.spawn(entity)?;
        self.hierarchy.set_parent(id, Some(parent))?;
        Ok(id)
    }

    /// Remove an entity by ID. Its children become roots.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id() == id)?;
        self.hierarchy.remove(id);
        Some(self.entities.swap_remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Entity> {
        self.entities.iter().filter(|e| e.tag == tag).collect()
    }

    // -- Hierarchy --

    /// Re-parent `child`, or make it a root with `None`.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) -> Result<(), SceneError> {
        for id in std::iter::once(child).chain(parent) {
            if self.get(id).is_none() {
                return Err(SceneError::EntityNotFound(id));
            }
        }
        self.hierarchy.set_parent(child, parent)
    }

    pub fn parent(&self, id: EntityId) -> Option<EntityId> {
        self.hierarchy.parent(id)
    }

    pub fn children(&self, id: EntityId) -> &[EntityId] {
        self.hierarchy.children(id)
    }

    /// Top-level entities in spawn order.
    pub fn roots(&self) -> &[EntityId] {
        self.hierarchy.roots()
    }

    /// Every entity below `id`, depth-first pre-order. Excludes `id`.
    pub fn descendants(&self, id: EntityId) -> Vec<EntityId> {
        let mut subtree = self.hierarchy.subtree(id);
        subtree.remove(0);
        subtree
    }

    /// Parent first, root last.
    pub fn ancestors(&self, id: EntityId) -> Vec<EntityId> {
        self.hierarchy.ancestors(id).collect()
    }

    /// Whether the entity and all of its ancestors are active.
    /// False for entities not in the scene.
    pub fn is_active_in_hierarchy(&self, id: EntityId) -> bool {
        std::iter::once(id)
            .chain(self.hierarchy.ancestors(id))
            .all(|node| self.get(node).is_some_and(|e| e.active))
    }

    // -- Component search --

    /// First `T` on the entity or anywhere below it, depth-first pre-order.
    pub fn try_get_component_in_children<T: Component>(
        &self,
        id: EntityId,
        include_inactive: bool,
    ) -> Option<&T> {
        self.search(self.hierarchy.subtree(id), include_inactive, |e| e.get_component::<T>())
    }

    /// First `T` on the entity or on one of its ancestors, nearest first.
    pub fn try_get_component_in_parent<T: Component>(
        &self,
        id: EntityId,
        include_inactive: bool,
    ) -> Option<&T> {
        self.search(self.self_and_ancestors(id), include_inactive, |e| e.get_component::<T>())
    }

    pub fn try_get_component_in_children_kind(
        &self,
        id: EntityId,
        kind: &ComponentKind,
        include_inactive: bool,
    ) -> Option<&dyn Component> {
        self.search(self.hierarchy.subtree(id), include_inactive, |e| e.get_component_kind(kind))
    }

    pub fn try_get_component_in_parent_kind(
        &self,
        id: EntityId,
        kind: &ComponentKind,
        include_inactive: bool,
    ) -> Option<&dyn Component> {
        self.search(self.self_and_ancestors(id), include_inactive, |e| e.get_component_kind(kind))
    }

    fn self_and_ancestors(&self, id: EntityId) -> Vec<EntityId> {
        std::iter::once(id).chain(self.hierarchy.ancestors(id)).collect()
    }

    fn search<'a, C: ?Sized + 'a>(
        &'a self,
        order: Vec<EntityId>,
        include_inactive: bool,
        find: impl Fn(&'a Entity) -> Option<&'a C>,
    ) -> Option<&'a C> {
        order
            .into_iter()
            .filter(|&node| include_inactive || self.is_active_in_hierarchy(node))
            .filter_map(|node| self.get(node))
            .find_map(find)
    }

    /// Put the entity and its whole subtree on `layer`.
    /// Returns the number of entities updated.
    pub fn set_layer_recursive(&mut self, id: EntityId, layer: Layer) -> usize {
        let mut updated = 0;
        for node in self.hierarchy.subtree(id) {
            if let Some(entity) = self.get_mut(node) {
                entity.layer = layer;
                updated += 1;
            }
        }
        log::debug!("{id}: layer {} set on {updated} entities", layer.as_u8());
        updated
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.hierarchy.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed view of a component found by kind.
pub fn component_as<T: Component>(component: Option<&dyn Component>) -> Option<&T> {
    component.and_then(downcast_ref::<T>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Health(u32);

    impl Component for Health {}

    #[derive(Debug, Default)]
    struct Marker;

    impl Component for Marker {}

    /// root(1) -> a(2) -> a1(3)
    ///         -> b(4)
    fn tree() -> Scene {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("root")).unwrap();
        scene.spawn_child(EntityId(1), Entity::new(EntityId(2)).with_tag("a")).unwrap();
        scene.spawn_child(EntityId(2), Entity::new(EntityId(3)).with_tag("a1")).unwrap();
        scene.spawn_child(EntityId(1), Entity::new(EntityId(4)).with_tag("b")).unwrap();
        scene
    }

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = scene.spawn(Entity::new(EntityId(1)).with_layer(Layer::UI)).unwrap();
        assert_eq!(scene.get(id).unwrap().layer, Layer::UI);
        assert_eq!(scene.roots(), [id].as_slice());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("first")).unwrap();

        let err = scene.spawn(Entity::new(EntityId(1)).with_tag("second")).unwrap_err();
        assert_eq!(err, SceneError::DuplicateEntity(EntityId(1)));
        let err = scene
            .spawn_child(EntityId(1), Entity::new(EntityId(1)))
            .unwrap_err();
        assert_eq!(err, SceneError::DuplicateEntity(EntityId(1)));

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.find_all_by_tag("second").len(), 0);
        assert!(scene.children(EntityId(1)).is_empty());

        scene.spawn_child(EntityId(1), Entity::new(EntityId(2))).unwrap();
        assert_eq!(scene.set_layer_recursive(EntityId(1), Layer::UI), 2);
        assert!(scene.iter().all(|e| e.layer == Layer::UI));
    }

    #[test]
    fn despawn_orphans_children() {
        let mut scene = tree();
        assert_eq!(scene.len(), 4);
        let removed = scene.despawn(EntityId(2)).unwrap();
        assert_eq!(removed.tag, "a");
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.parent(EntityId(3)), None);
        assert_eq!(scene.children(EntityId(1)), [EntityId(4)].as_slice());
        assert!(scene.despawn(EntityId(2)).is_none());
    }

    #[test]
    fn find_by_tag() {
        let scene = tree();
        assert_eq!(scene.find_by_tag("a1").unwrap().id(), EntityId(3));
        assert!(scene.find_by_tag("missing").is_none());
        assert_eq!(scene.find_all_by_tag("b").len(), 1);
    }

    #[test]
    fn hierarchy_queries() {
        let scene = tree();
        assert_eq!(
            scene.descendants(EntityId(1)),
            vec![EntityId(2), EntityId(3), EntityId(4)]
        );
        assert_eq!(scene.ancestors(EntityId(3)), vec![EntityId(2), EntityId(1)]);
        assert!(scene.descendants(EntityId(4)).is_empty());
    }

    #[test]
    fn set_parent_validates() {
        let mut scene = tree();
        assert_eq!(
            scene.set_parent(EntityId(1), Some(EntityId(3))),
            Err(SceneError::HierarchyCycle { child: EntityId(1), parent: EntityId(3) })
        );
        assert_eq!(
            scene.set_parent(EntityId(3), Some(EntityId(99))),
            Err(SceneError::EntityNotFound(EntityId(99)))
        );
        assert_eq!(
            scene.spawn_child(EntityId(99), Entity::new(EntityId(5))),
            Err(SceneError::EntityNotFound(EntityId(99)))
        );

        scene.set_parent(EntityId(3), Some(EntityId(4))).unwrap();
        assert_eq!(scene.parent(EntityId(3)), Some(EntityId(4)));
    }

    #[test]
    fn active_in_hierarchy_follows_ancestors() {
        let mut scene = tree();
        assert!(scene.is_active_in_hierarchy(EntityId(3)));
        scene.get_mut(EntityId(2)).unwrap().active = false;
        assert!(!scene.is_active_in_hierarchy(EntityId(2)));
        assert!(!scene.is_active_in_hierarchy(EntityId(3)));
        assert!(scene.is_active_in_hierarchy(EntityId(4)));
        assert!(!scene.is_active_in_hierarchy(EntityId(42)));
    }

    #[test]
    fn component_in_children_is_depth_first() {
        let mut scene = tree();
        scene.get_mut(EntityId(3)).unwrap().add_component(Health(3));
        scene.get_mut(EntityId(4)).unwrap().add_component(Health(4));

        // a1 is visited before b.
        let found = scene.try_get_component_in_children::<Health>(EntityId(1), false);
        assert_eq!(found, Some(&Health(3)));

        // Self is checked first.
        scene.get_mut(EntityId(1)).unwrap().add_component(Health(1));
        let found = scene.try_get_component_in_children::<Health>(EntityId(1), false);
        assert_eq!(found, Some(&Health(1)));

        assert!(scene.try_get_component_in_children::<Marker>(EntityId(1), true).is_none());
    }

    #[test]
    fn component_in_children_skips_inactive() {
        let mut scene = tree();
        scene.get_mut(EntityId(3)).unwrap().add_component(Health(3));
        scene.get_mut(EntityId(4)).unwrap().add_component(Health(4));
        scene.get_mut(EntityId(2)).unwrap().active = false;

        let active_only = scene.try_get_component_in_children::<Health>(EntityId(1), false);
        assert_eq!(active_only, Some(&Health(4)));

        let any = scene.try_get_component_in_children::<Health>(EntityId(1), true);
        assert_eq!(any, Some(&Health(3)));
    }

    #[test]
    fn component_in_parent_walks_up() {
        let mut scene = tree();
        scene.get_mut(EntityId(1)).unwrap().add_component(Health(1));
        scene.get_mut(EntityId(2)).unwrap().add_component(Health(2));

        let nearest = scene.try_get_component_in_parent::<Health>(EntityId(3), false);
        assert_eq!(nearest, Some(&Health(2)));

        scene.get_mut(EntityId(2)).unwrap().active = false;
        // a1 and a are now inactive in the hierarchy; the root still is.
        assert_eq!(
            scene.try_get_component_in_parent::<Health>(EntityId(3), false),
            Some(&Health(1))
        );
        let any = scene.try_get_component_in_parent::<Health>(EntityId(3), true);
        assert_eq!(any, Some(&Health(2)));

        assert_eq!(
            scene.try_get_component_in_parent::<Health>(EntityId(4), false),
            Some(&Health(1))
        );
    }

    #[test]
    fn component_search_by_kind() {
        let mut scene = tree();
        scene.get_mut(EntityId(4)).unwrap().add_component(Health(4));
        let kind = ComponentKind::of::<Health>();

        let down = scene.try_get_component_in_children_kind(EntityId(1), &kind, false);
        assert_eq!(component_as::<Health>(down), Some(&Health(4)));

        let up = scene.try_get_component_in_parent_kind(EntityId(4), &kind, false);
        assert!(up.is_some_and(|c| kind.matches(c)));

        let none = scene.try_get_component_in_parent_kind(EntityId(3), &kind, true);
        assert!(none.is_none());
    }

    #[test]
    fn layer_reaches_every_node() {
        let mut scene = tree();
        let updated = scene.set_layer_recursive(EntityId(1), Layer::UI);
        assert_eq!(updated, 4);
        assert!(scene.iter().all(|e| e.layer == Layer::UI));

        let updated = scene.set_layer_recursive(EntityId(2), Layer::WATER);
        assert_eq!(updated, 2);
        assert_eq!(scene.get(EntityId(3)).unwrap().layer, Layer::WATER);
        assert_eq!(scene.get(EntityId(4)).unwrap().layer, Layer::UI);
    }

    #[test]
    fn layer_on_single_entity() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(7))).unwrap();
        assert_eq!(scene.set_layer_recursive(EntityId(7), Layer::IGNORE_RAYCAST), 1);
        assert_eq!(scene.set_layer_recursive(EntityId(8), Layer::IGNORE_RAYCAST), 0);
    }
}
