// Copyright 2025 LiveKit, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::{Arc, Weak};

use dashmap::{mapref::entry::Entry, DashMap};
use tandem_rtc::ObjectId;

/// Side table mapping a client object to the single facade wrapping it.
///
/// Entries are weak, the registry never keeps a facade alive. A facade purges
/// its own entry when dropped, and looking up a dead entry behaves as if it
/// was never inserted.
pub(crate) struct IdentityRegistry<V> {
    category: &'static str,
    entries: DashMap<ObjectId, Weak<V>>,
}

impl<V> IdentityRegistry<V> {
    pub fn new(category: &'static str) -> Self {
        Self { category, entries: DashMap::new() }
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn get(&self, id: ObjectId) -> Option<Arc<V>> {
        self.entries.get(&id).and_then(|entry| entry.upgrade())
    }

    /// Returns the live facade of `id`, or stores the one built by `init`.
    ///
    /// The entry stays locked while `init` runs, so concurrent callers for the
    /// same id wait and then observe the stored facade. `init` must not touch
    /// this registry. Nothing is stored when `init` fails.
    pub fn get_or_try_insert_with<E>(
        &self,
        id: ObjectId,
        init: impl FnOnce() -> Result<Arc<V>, E>,
    ) -> Result<Arc<V>, E> {
        match self.entries.entry(id) {
            Entry::Occupied(mut entry) => {
                if let Some(existing) = entry.get().upgrade() {
                    return Ok(existing);
                }

                match init() {
                    Ok(value) => {
                        entry.insert(Arc::downgrade(&value));
                        Ok(value)
                    }
                    Err(err) => {
                        entry.remove();
                        Err(err)
                    }
                }
            }
            Entry::Vacant(entry) => {
                let value = init()?;
                entry.insert(Arc::downgrade(&value));
                Ok(value)
            }
        }
    }

    /// Drops the entry of `id` if its facade is gone.
    pub fn purge(&self, id: ObjectId) {
        self.entries.remove_if(&id, |_, entry| entry.strong_count() == 0);
    }

    /// Number of live facades.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.strong_count() > 0).count()
    }

    /// Empties the registry, returning the facades that were still alive.
    pub fn drain(&self) -> Vec<Arc<V>> {
        let live = self.entries.iter().filter_map(|entry| entry.upgrade()).collect();
        self.entries.clear();
        live
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn init_runs_once_per_live_entry() {
        let registry = IdentityRegistry::<u32>::new("numbers");
        let id = ObjectId::next();
        let calls = AtomicUsize::new(0);
        let init = || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ()>(Arc::new(7))
        };

        let first = registry.get_or_try_insert_with(id, init).unwrap();
        let second = registry.get_or_try_insert_with(id, init).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn failed_init_stores_nothing() {
        let registry = IdentityRegistry::<u32>::new("numbers");
        let id = ObjectId::next();

        let result = registry.get_or_try_insert_with(id, || Err::<Arc<u32>, _>("boom"));
        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(registry.len(), 0);
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn dead_entries_are_replaced_and_purged() {
        let registry = IdentityRegistry::<u32>::new("numbers");
        let id = ObjectId::next();

        let first = registry.get_or_try_insert_with(id, || Ok::<_, ()>(Arc::new(1))).unwrap();
        drop(first);
        assert_eq!(registry.len(), 0);

        let second = registry.get_or_try_insert_with(id, || Ok::<_, ()>(Arc::new(2))).unwrap();
        assert_eq!(*second, 2);

        registry.purge(id);
        assert!(registry.get(id).is_some());

        drop(second);
        registry.purge(id);
        assert!(registry.entries.is_empty());
    }

    #[test]
    fn drain_returns_live_values() {
        let registry = IdentityRegistry::<u32>::new("numbers");
        let kept = registry.get_or_try_insert_with(ObjectId::next(), || Ok::<_, ()>(Arc::new(1)));
        let _ = registry.get_or_try_insert_with(ObjectId::next(), || Ok::<_, ()>(Arc::new(2)));

        let live = registry.drain();
        assert_eq!(live.len(), 1);
        assert!(Arc::ptr_eq(&live[0], &kept.unwrap()));
        assert_eq!(registry.len(), 0);
    }
}
