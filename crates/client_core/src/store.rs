/// Token handed out by [`CollectionStore::begin_load`]; only the newest one
/// may write to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Current items and loading flag for one collection.
#[derive(Debug, Clone)]
pub struct CollectionStore<T> {
    items: Vec<T>,
    loading: bool,
    generation: Generation,
    loading_visible: bool,
}

impl<T> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionStore<T> {
    /// A store that loads silently: `is_loading` is always false.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            generation: Generation(0),
            loading_visible: false,
        }
    }

    /// A store whose in-flight state is observable through `is_loading`.
    pub fn with_visible_loading() -> Self {
        Self {
            loading_visible: true,
            ..Self::new()
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn begin_load(&mut self) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        if self.loading_visible {
            self.loading = true;
        }
        self.generation
    }

    /// Replaces the items wholesale. Returns false and leaves the store
    /// untouched when `generation` has been superseded.
    pub fn commit(&mut self, generation: Generation, items: Vec<T>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    /// Clears the loading flag and keeps the last committed items.
    pub fn fail(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        true
    }
}
