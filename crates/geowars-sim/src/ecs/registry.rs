use std::collections::BTreeMap;

use geowars_core::types::EntityId;

use super::entity::Entity;

/// Owns every entity.
///
/// New entities are staged in a pending list and only become visible to
/// queries at the next [`flush`](Self::flush); destroyed entities stay visible
/// until that same flush. Every system in a frame therefore iterates the same
/// set of entities.
///
/// Ids are handed out in increasing order and flush appends in arrival order,
/// so both the live list and the pending list are always sorted by id.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    pending: Vec<Entity>,
    tag_index: BTreeMap<String, Vec<EntityId>>,
    next_id: u64,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity with an empty bundle and stage it for the next flush.
    /// The returned entity can be given components right away; keep its
    /// `id()` as the handle.
    pub fn add_entity(&mut self, tag: impl Into<String>) -> &mut Entity {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.pending.push(Entity::new(id, tag.into()));
        let idx = self.pending.len() - 1;
        &mut self.pending[idx]
    }

    /// Admit pending entities, then reap dead ones from the live list and
    /// every tag bucket. Runs once per frame before any system.
    pub fn flush(&mut self) {
        for entity in self.pending.drain(..) {
            self.tag_index
                .entry(entity.tag().to_string())
                .or_default()
                .push(entity.id());
            self.entities.push(entity);
        }

        let before = self.entities.len();
        self.entities.retain(Entity::is_alive);
        if self.entities.len() == before {
            return;
        }

        let live = &self.entities;
        for ids in self.tag_index.values_mut() {
            ids.retain(|id| live.binary_search_by_key(id, Entity::id).is_ok());
        }
    }

    /// All live entities, oldest first.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutable access to live entities' components and alive flags.
    /// The set itself cannot change through this slice.
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Live ids with this tag in insertion order. Unknown tag → empty.
    pub fn tagged_ids(&self, tag: &str) -> &[EntityId] {
        self.tag_index.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Live entities with this tag in insertion order.
    pub fn tagged<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.tagged_ids(tag)
            .iter()
            .filter_map(move |&id| self.live(id))
    }

    /// The most recently admitted entity with this tag.
    pub fn last_tagged(&self, tag: &str) -> Option<EntityId> {
        self.tagged_ids(tag).last().copied()
    }

    /// Tag buckets in tag order.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &[EntityId])> {
        self.tag_index
            .iter()
            .map(|(tag, ids)| (tag.as_str(), ids.as_slice()))
    }

    /// Look up a live or pending entity.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.live(id).or_else(|| {
            self.pending
                .binary_search_by_key(&id, Entity::id)
                .ok()
                .map(|idx| &self.pending[idx])
        })
    }

    /// Look up a live or pending entity for mutation.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        if let Ok(idx) = self.entities.binary_search_by_key(&id, Entity::id) {
            return Some(&mut self.entities[idx]);
        }
        match self.pending.binary_search_by_key(&id, Entity::id) {
            Ok(idx) => Some(&mut self.pending[idx]),
            Err(_) => None,
        }
    }

    /// Flag an entity dead. Returns false if no such entity exists.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        match self.get_mut(id) {
            Some(entity) => {
                entity.destroy();
                true
            }
            None => false,
        }
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(Entity::is_alive)
    }

    /// Number of live (query-visible) entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities waiting for the next flush.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn live(&self, id: EntityId) -> Option<&Entity> {
        self.entities
            .binary_search_by_key(&id, Entity::id)
            .ok()
            .map(|idx| &self.entities[idx])
    }
}
