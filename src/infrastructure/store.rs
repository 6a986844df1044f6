use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::entities::skill::{Skill, SkillId, SkillPayload};

/// In-memory skill store backing the development server.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug, Default)]
pub struct InMemorySkillStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    skills: BTreeMap<SkillId, Skill>,
    last_id: i64,
}

impl InMemorySkillStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in id order.
    pub fn list(&self) -> Vec<Skill> {
        self.inner.read().skills.values().cloned().collect()
    }

    pub fn get(&self, id: SkillId) -> Option<Skill> {
        self.inner.read().skills.get(&id).cloned()
    }

    pub fn insert(&self, payload: SkillPayload) -> Skill {
        let mut inner = self.inner.write();
        inner.last_id += 1;
        let skill = payload.into_skill(SkillId(inner.last_id));
        inner.skills.insert(skill.id, skill.clone());
        skill
    }

    /// Replaces every field of an existing record. `None` when the id is unknown.
    pub fn replace(&self, id: SkillId, payload: SkillPayload) -> Option<Skill> {
        let mut inner = self.inner.write();
        let slot = inner.skills.get_mut(&id)?;
        *slot = payload.into_skill(id);
        Some(slot.clone())
    }

    pub fn remove(&self, id: SkillId) -> bool {
        self.inner.write().skills.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.read().skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_not_reused() {
        let store = InMemorySkillStore::new();

        let first = store.insert(SkillPayload::new("Machine Learning", 1, 3));
        assert!(store.remove(first.id));
        let second = store.insert(SkillPayload::new("Negotiation", 2, 3));

        assert_eq!(first.id, SkillId(1));
        assert_eq!(second.id, SkillId(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_clears_omitted_optional_fields() {
        let store = InMemorySkillStore::new();
        let created = store.insert(SkillPayload::new("Cloud", 1, 3).with_notes("AWS"));

        let replaced = store
            .replace(created.id, SkillPayload::new("Cloud", 2, 3))
            .unwrap();

        assert_eq!(replaced.notes, None);
        assert_eq!(store.get(created.id), Some(replaced));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let store = InMemorySkillStore::new();

        assert!(store.replace(SkillId(1), SkillPayload::new("x", 1, 1)).is_none());
        assert!(!store.remove(SkillId(1)));
        assert!(store.is_empty());
    }
}
