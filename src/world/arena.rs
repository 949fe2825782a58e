use crate::objects::body::Body;

/// Stable reference to a body registered in a [`World`](crate::world::World).
///
/// A handle stays valid until its body is removed; after that it resolves to
/// nothing, even if the slot gets reused by a newer body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    index: usize,
    generation: u32,
}

impl BodyHandle {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    body: Option<Body>, // None = tombstone
}

/// Slot storage with tombstones and a free list. Iteration follows slot order.
#[derive(Debug, Clone, Default)]
pub struct BodyArena {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
}

impl BodyArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, body: Body) -> BodyHandle {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.body = Some(body);
            return BodyHandle::new(index, slot.generation);
        }
        self.slots.push(Slot { generation: 0, body: Some(body) });
        BodyHandle::new(self.slots.len() - 1, 0)
    }

    /// Takes the body out and bumps the slot generation so stale handles miss.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let slot = self.slots.get_mut(handle.index)?;
        if slot.generation != handle.generation {
            return None;
        }
        let body = slot.body.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.live -= 1;
        Some(body)
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_ref())
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_mut())
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Mutable access to two distinct live bodies at once.
    pub fn pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Option<(&mut Body, &mut Body)> {
        if a.index == b.index || !self.contains(a) || !self.contains(b) {
            return None;
        }
        let swapped = a.index > b.index;
        let (low, high) = if swapped { (b.index, a.index) } else { (a.index, b.index) };

        // Split so both slots can be borrowed mutably
        let (head, tail) = self.slots.split_at_mut(high);
        let low_body = head[low].body.as_mut()?;
        let high_body = tail[0].body.as_mut()?;
        if swapped {
            Some((high_body, low_body))
        } else {
            Some((low_body, high_body))
        }
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Handles of all live bodies, in slot order.
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.iter().map(|(handle, _)| handle).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.body
                .as_ref()
                .map(|body| (BodyHandle::new(index, slot.generation), body))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut Body)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.body
                .as_mut()
                .map(|body| (BodyHandle::new(index, generation), body))
        })
    }
}
