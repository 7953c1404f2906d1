//! Stable identity for text controls.
//!
//! The value is a plain `u64` so this crate stays independent of any DOM or
//! framework id type. Integration layers convert at their boundary.

use std::fmt;

/// Opaque identifier for one text control instance.
///
/// Two handles to the same control must report the same `InputId`; caches
/// keyed by control (such as measured style snapshots) rely on it. The value
/// itself has no meaning beyond equality and hashing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(u64);

impl InputId {
    /// Create an `InputId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<InputId> for u64 {
    #[inline]
    fn from(id: InputId) -> Self {
        id.as_raw()
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input#{}", self.0)
    }
}

/// Hands out fresh, never reused ids for a document's lifetime.
#[derive(Clone, Debug, Default)]
pub struct InputIdAllocator {
    next: u64,
}

impl InputIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> InputId {
        let id = InputId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
