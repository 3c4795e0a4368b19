//! Append-only arena of native objects addressed by typed handles.

use std::fmt;
use std::marker::PhantomData;

use crate::error::BridgeError;

/// Handle to an object stored in a [`Registry<T>`].
///
/// Handles are plain indices: the first insert gets 0, the next 1, and so
/// on. Slots are never freed, so a handle stays valid for the life of the
/// registry that issued it. The type parameter keeps handles from one
/// registry from being used against another.
pub struct Handle<T> {
    index: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    fn new(index: u32) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    pub fn index(self) -> usize {
        self.index as usize
    }

    /// The handle as the host stores it: a double carrying an integer.
    pub fn to_host(self) -> f64 {
        f64::from(self.index)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Handle<T> {}

impl<T> std::hash::Hash for Handle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.index)
    }
}

/// Session-scoped store of native objects.
///
/// Objects are only ever appended. There is no update or removal, so the
/// valid handles are exactly `0..len()` and numbering has no gaps.
pub struct Registry<T> {
    slots: Vec<T>,
}

impl<T> Registry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Append an object and return its handle (the size before insertion).
    ///
    /// # Panics
    ///
    /// Panics if the registry already holds `u32::MAX` objects.
    pub fn insert(&mut self, value: T) -> Handle<T> {
        let index = u32::try_from(self.slots.len()).expect("registry handle space exhausted");
        self.slots.push(value);
        Handle::new(index)
    }

    /// Look up an object by typed handle.
    pub fn get(&self, handle: Handle<T>) -> Result<&T, BridgeError> {
        self.slots
            .get(handle.index())
            .ok_or(BridgeError::OutOfRange {
                handle: i64::from(handle.index),
                len: self.slots.len(),
            })
    }

    /// Validate a raw host index and turn it into a handle.
    ///
    /// Negative indices and indices at or past `len()` are rejected.
    pub fn resolve(&self, index: i64) -> Result<Handle<T>, BridgeError> {
        let out_of_range = || BridgeError::OutOfRange {
            handle: index,
            len: self.slots.len(),
        };
        let slot = usize::try_from(index).map_err(|_| out_of_range())?;
        if slot >= self.slots.len() {
            return Err(out_of_range());
        }
        // slot < len <= u32::MAX, guaranteed by insert
        Ok(Handle::new(slot as u32))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate objects in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, value)| (Handle::new(i as u32), value))
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.slots.len())
            .finish()
    }
}
