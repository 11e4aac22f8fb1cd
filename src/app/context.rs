use crate::ports::ManifestStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ManifestStore> {
    store: S,
}

impl<S: ManifestStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the manifest store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
