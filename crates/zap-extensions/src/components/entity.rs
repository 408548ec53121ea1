use crate::api::types::EntityId;
use crate::components::component::{
    downcast_mut, downcast_ref, Behaviour, Component, ComponentKind,
};
use crate::components::layer::Layer;
use crate::error::SceneError;

/// A named node that owns an ordered list of components.
/// Parent/child links live in the Scene's hierarchy, not here.
#[derive(Debug)]
pub struct Entity {
    /// Unique identifier. Fixed at construction so the scene's
    /// hierarchy stays keyed correctly.
    id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Local active flag. An entity is active in the hierarchy only if it and
    /// all its ancestors are active.
    pub active: bool,
    pub layer: Layer,
    components: Vec<Box<dyn Component>>,
}

impl Entity {
    /// Create an active entity on the default layer with no components.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            layer: Layer::DEFAULT,
            components: Vec::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_component<T: Component>(mut self, component: T) -> Self {
        self.components.push(Box::new(component));
        self
    }

    // -- Components --

    /// Attach a component unconditionally and return it.
    pub fn add_component<T: Component>(&mut self, component: T) -> &mut T {
        let index = self.components.len();
        self.components.push(Box::new(component));
        self.component_at_mut::<T>(index)
    }

    /// Attach a boxed component of any type and return it.
    pub fn add_boxed_component(&mut self, component: Box<dyn Component>) -> &mut dyn Component {
        self.components.push(component);
        let last = self.components.len() - 1;
        &mut *self.components[last]
    }

    /// First component of type `T`.
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components.iter().find_map(|c| downcast_ref::<T>(&**c))
    }

    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|c| downcast_mut::<T>(&mut **c))
    }

    /// First component of the given kind.
    pub fn get_component_kind(&self, kind: &ComponentKind) -> Option<&dyn Component> {
        self.components
            .iter()
            .map(|c| &**c)
            .find(|c| kind.matches(*c))
    }

    pub fn get_component_kind_mut(&mut self, kind: &ComponentKind) -> Option<&mut dyn Component> {
        let index = self.index_of_kind(kind)?;
        Some(&mut *self.components[index])
    }

    pub fn has_component<T: Component>(&self) -> bool {
        self.get_component::<T>().is_some()
    }

    pub fn has_component_kind(&self, kind: &ComponentKind) -> bool {
        self.index_of_kind(kind).is_some()
    }

    /// Existing component of type `T`, or a freshly attached `T::default()`.
    pub fn get_or_add_component<T: Component + Default>(&mut self) -> &mut T {
        let index = match self.index_of_kind(&ComponentKind::of::<T>()) {
            Some(index) => index,
            None => {
                log::debug!("{}: attaching {}", self.id, std::any::type_name::<T>());
                self.components.push(Box::new(T::default()));
                self.components.len() - 1
            }
        };
        self.component_at_mut::<T>(index)
    }

    /// Existing component of the given kind, or a freshly attached default one.
    pub fn get_or_add_component_kind(&mut self, kind: &ComponentKind) -> &mut dyn Component {
        let index = match self.index_of_kind(kind) {
            Some(index) => index,
            None => {
                log::debug!("{}: attaching {}", self.id, kind.name());
                self.components.push(kind.create());
                self.components.len() - 1
            }
        };
        &mut *self.components[index]
    }

    /// Set the enabled flag of the first `T`, if there is one.
    /// Returns whether the component existed.
    pub fn enable_component_if_exists<T: Behaviour>(&mut self, enable: bool) -> bool {
        match self.get_component_mut::<T>() {
            Some(component) => {
                component.set_enabled(enable);
                true
            }
            None => false,
        }
    }

    /// Non-generic `enable_component_if_exists`. Fails if the component is
    /// present but has no enabled flag.
    pub fn enable_component_kind_if_exists(
        &mut self,
        kind: &ComponentKind,
        enable: bool,
    ) -> Result<bool, SceneError> {
        let Some(component) = self.get_component_kind_mut(kind) else {
            return Ok(false);
        };
        let type_name = component.type_name();
        let behaviour = component
            .as_behaviour_mut()
            .ok_or(SceneError::NotBehaviour { type_name })?;
        behaviour.set_enabled(enable);
        Ok(true)
    }

    /// All components in attach order.
    pub fn components(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.iter().map(|c| &**c)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    fn index_of_kind(&self, kind: &ComponentKind) -> Option<usize> {
        self.components.iter().position(|c| kind.matches(&**c))
    }

    fn component_at_mut<T: Component>(&mut self, index: usize) -> &mut T {
        downcast_mut::<T>(&mut *self.components[index])
            .expect("component slot holds the type it was located by")
    }
}
