use geowars_core::components::{Component, ComponentBundle};
use geowars_core::types::EntityId;

/// Identity plus one component bundle.
///
/// Only the registry creates entities; everything else refers to them by
/// [`EntityId`]. `destroy` only flags the entity, the registry removes it at
/// its next flush.
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    tag: String,
    alive: bool,
    components: ComponentBundle,
}

impl Entity {
    pub(crate) fn new(id: EntityId, tag: String) -> Self {
        Self {
            id,
            tag,
            alive: true,
            components: ComponentBundle::default(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn destroy(&mut self) {
        self.alive = false;
    }

    pub fn add<T: Component>(&mut self, component: T) -> &mut T {
        self.components.add(component)
    }

    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components.get()
    }

    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components.get_mut()
    }

    pub fn has<T: Component>(&self) -> bool {
        self.components.has::<T>()
    }

    pub fn components(&self) -> &ComponentBundle {
        &self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geowars_core::components::{Collision, Score};

    #[test]
    fn new_entity_is_alive_and_empty() {
        let e = Entity::new(EntityId(3), "bullet".into());
        assert_eq!(e.id(), EntityId(3));
        assert_eq!(e.tag(), "bullet");
        assert!(e.is_alive());
        assert_eq!(e.components(), &ComponentBundle::default());
    }

    #[test]
    fn destroy_only_flags() {
        let mut e = Entity::new(EntityId(0), "enemy".into());
        e.add(Collision { radius: 8.0 });
        e.destroy();
        assert!(!e.is_alive());
        assert!(e.has::<Collision>());
    }

    #[test]
    fn add_returns_stored_component_and_replaces() {
        let mut e = Entity::new(EntityId(0), "player".into());
        e.add(Score::default()).score += 25;
        assert_eq!(e.get::<Score>().unwrap().score, 25);
        e.add(Score::default());
        assert_eq!(e.get::<Score>().unwrap().score, 0);
        assert!(e.has::<Score>());
    }
}
