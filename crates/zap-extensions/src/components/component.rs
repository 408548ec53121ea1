// components/component.rs
//
// Component model: anything attachable to an Entity.
//
// Components are stored as `Box<dyn Component>` and found again by concrete
// type (generic helpers) or by a runtime `ComponentKind` (non-generic helpers).

use std::any::{type_name, Any, TypeId};
use std::fmt;

/// Upcast helper so boxed components can be downcast to their concrete type.
/// Implemented for every `'static` type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Data or behaviour attached to an entity.
///
/// Override the `as_behaviour*` pair for components that can be switched on
/// and off (see [`Behaviour`]).
pub trait Component: AsAny + fmt::Debug {
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    fn as_behaviour(&self) -> Option<&dyn Behaviour> {
        None
    }

    fn as_behaviour_mut(&mut self) -> Option<&mut dyn Behaviour> {
        None
    }
}

/// A component with an enabled flag.
pub trait Behaviour: Component {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
}

/// Concrete type id of a stored component (not of the box or reference).
pub fn component_type_id(component: &dyn Component) -> TypeId {
    component.as_any().type_id()
}

pub fn downcast_ref<T: Component>(component: &dyn Component) -> Option<&T> {
    component.as_any().downcast_ref::<T>()
}

pub fn downcast_mut<T: Component>(component: &mut dyn Component) -> Option<&mut T> {
    component.as_any_mut().downcast_mut::<T>()
}

fn create_default<T: Component + Default>() -> Box<dyn Component> {
    Box::new(T::default())
}

/// Runtime description of a component type, for APIs that select the type
/// with a value instead of a generic parameter.
#[derive(Clone, Copy)]
pub struct ComponentKind {
    type_id: TypeId,
    name: &'static str,
    create: fn() -> Box<dyn Component>,
}

impl ComponentKind {
    /// Describe `T`. New instances are built with `T::default()`.
    pub fn of<T: Component + Default>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: type_name::<T>(),
            create: create_default::<T>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `component` is an instance of this kind.
    pub fn matches(&self, component: &dyn Component) -> bool {
        component_type_id(component) == self.type_id
    }

    pub(crate) fn create(&self) -> Box<dyn Component> {
        (self.create)()
    }
}

impl fmt::Debug for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentKind").field("name", &self.name).finish()
    }
}

impl PartialEq for ComponentKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ComponentKind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Health(u32);

    impl Component for Health {}

    #[derive(Debug, Default)]
    struct Spinner {
        enabled: bool,
    }

    impl Component for Spinner {
        fn as_behaviour(&self) -> Option<&dyn Behaviour> {
            Some(self)
        }

        fn as_behaviour_mut(&mut self) -> Option<&mut dyn Behaviour> {
            Some(self)
        }
    }

    impl Behaviour for Spinner {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
    }

    #[test]
    fn type_id_sees_through_the_box() {
        let boxed: Box<dyn Component> = Box::new(Health(3));
        assert_eq!(component_type_id(boxed.as_ref()), TypeId::of::<Health>());
        assert_eq!(downcast_ref::<Health>(boxed.as_ref()).map(|h| h.0), Some(3));
        assert!(downcast_ref::<Spinner>(boxed.as_ref()).is_none());
    }

    #[test]
    fn kind_matches_and_creates() {
        let kind = ComponentKind::of::<Health>();
        let made = kind.create();
        assert!(kind.matches(made.as_ref()));
        assert!(!ComponentKind::of::<Spinner>().matches(made.as_ref()));
        assert!(kind.name().ends_with("Health"));
        assert_eq!(made.type_name(), kind.name());
    }

    #[test]
    fn behaviour_capability() {
        let mut spinner: Box<dyn Component> = Box::new(Spinner::default());
        assert!(Health(0).as_behaviour().is_none());
        let behaviour = spinner.as_behaviour_mut().unwrap();
        behaviour.set_enabled(true);
        assert!(spinner.as_behaviour().unwrap().is_enabled());
    }
}
