use input_core::InputId;

/// Controls that asked to be recomputed when the viewport changes size,
/// in registration order.
#[derive(Clone, Debug, Default)]
pub struct ResizeListeners {
    ids: Vec<InputId>,
}

impl ResizeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if `id` was already registered.
    pub fn add(&mut self, id: InputId) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: InputId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&other| other != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: InputId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Snapshot of the registered ids, so listeners can be notified while
    /// the set itself is being modified.
    pub fn snapshot(&self) -> Vec<InputId> {
        self.ids.clone()
    }
}
