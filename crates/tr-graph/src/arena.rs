//! Generational slot storage backing nodes and edges.

use std::marker::PhantomData;
use std::num::NonZeroU32;

use tr_core::Handle;

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: NonZeroU32,
    value: Option<T>,
}

/// Slot vector addressed by generation-checked handles.
///
/// A removed slot bumps its generation before it is reused, so a handle
/// issued for the old occupant never resolves again.
#[derive(Debug, Clone)]
pub(crate) struct Arena<H, T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
    _handle: PhantomData<H>,
}

impl<H, T> Default for Arena<H, T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            _handle: PhantomData,
        }
    }
}

impl<H: Handle, T> Arena<H, T> {
    pub(crate) fn insert(&mut self, value: T) -> H {
        self.insert_with(|_| value)
    }

    /// Insert a value built from the handle it will be stored under.
    ///
    /// Freed slots are reused first, so the slot count only grows with the
    /// number of simultaneously live values.
    ///
    /// # Panics
    ///
    /// If more than `u32::MAX` values are live at once; handles cannot address
    /// further slots.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(H) -> T) -> H {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            let handle = H::from_parts(index, slot.generation);
            slot.value = Some(build(handle));
            return handle;
        }
        let index = u32::try_from(self.slots.len()).expect("more than u32::MAX live values");
        let handle = H::from_parts(index, NonZeroU32::MIN);
        self.slots.push(Slot {
            generation: NonZeroU32::MIN,
            value: Some(build(handle)),
        });
        handle
    }

    pub(crate) fn remove(&mut self, handle: H) -> Option<T> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = next_generation(slot.generation);
        self.free.push(handle.index());
        self.len -= 1;
        Some(value)
    }

    pub(crate) fn get(&self, handle: H) -> Option<&T> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.value.as_ref()
    }

    pub(crate) fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.value.as_mut()
    }

    pub(crate) fn contains(&self, handle: H) -> bool {
        self.get(handle).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Drop every occupant at once, invalidating all outstanding handles.
    pub(crate) fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = next_generation(slot.generation);
                self.free.push(index as u32);
            }
        }
        self.len = 0;
    }

    /// Iterate over live occupants in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (H, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value
                .as_ref()
                .map(|value| (H::from_parts(index as u32, slot.generation), value))
        })
    }
}

fn next_generation(generation: NonZeroU32) -> NonZeroU32 {
    generation.checked_add(1).unwrap_or(NonZeroU32::MIN)
}
