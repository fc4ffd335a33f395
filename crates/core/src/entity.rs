//! Entity trait: identity + continuity across state changes.

use std::collections::HashMap;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Index a slice of entities by identifier.
///
/// When the same identifier appears more than once, the last occurrence wins.
pub fn index_by_id<E: Entity>(entities: &[E]) -> HashMap<E::Id, &E> {
    entities.iter().map(|e| (e.id().clone(), e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Thing {
        id: u32,
        label: &'static str,
    }

    impl Entity for Thing {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    #[test]
    fn index_by_id_keeps_last_duplicate() {
        let things = vec![
            Thing { id: 1, label: "first" },
            Thing { id: 2, label: "other" },
            Thing { id: 1, label: "second" },
        ];

        let index = index_by_id(&things);
        assert_eq!(index.len(), 2);
        assert_eq!(index[&1].label, "second");
        assert_eq!(index[&2].label, "other");
    }
}
