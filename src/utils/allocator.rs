use serde::{Deserialize, Serialize};

/// Stable handle into a [`ParticleStore`].
///
/// Particles are never removed during a session, so a plain index is a
/// stable reference for the store's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ParticleId(u32);

impl ParticleId {
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Append-only arena that hands out stable [`ParticleId`] handles.
///
/// Constraints keep non-owning ids into this store; because the store only
/// grows, an id handed out by [`ParticleStore::push`] never dangles.
#[derive(Debug, Default, Clone)]
pub struct ParticleStore<T> {
    items: Vec<T>,
}

impl<T> ParticleStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) -> ParticleId {
        let id = ParticleId::from_index(self.items.len());
        self.items.push(item);
        id
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        id.index() < self.items.len()
    }

    pub fn get(&self, id: ParticleId) -> Option<&T> {
        self.items.get(id.index())
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut T> {
        self.items.get_mut(id.index())
    }

    /// Mutable access to two distinct slots at once.
    ///
    /// Returns `None` when the ids coincide or either is out of range.
    pub fn get2_mut(&mut self, id_a: ParticleId, id_b: ParticleId) -> Option<(&mut T, &mut T)> {
        if id_a == id_b {
            return None;
        }
        if !self.contains(id_a) || !self.contains(id_b) {
            return None;
        }

        let (first, second, flipped) = if id_a.index() < id_b.index() {
            (id_a, id_b, false)
        } else {
            (id_b, id_a, true)
        };

        let (left, right) = self.items.split_at_mut(second.index());
        let first_slot = &mut left[first.index()];
        let second_slot = &mut right[0];

        if flipped {
            Some((second_slot, first_slot))
        } else {
            Some((first_slot, second_slot))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticleId> + '_ {
        (0..self.items.len()).map(ParticleId::from_index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
