//! Named handler tables.

use rustc_hash::FxHashMap;

use crate::core::RegistryError;

/// Handlers for one topic, keyed by name.
///
/// Iteration follows installation order. Installing under an existing key
/// replaces the handler in place and keeps its slot.
pub struct HandlerTable<F: ?Sized> {
    topic: &'static str,
    entries: Vec<(String, Box<F>)>,
    index: FxHashMap<String, usize>,
}

impl<F: ?Sized> HandlerTable<F> {
    /// Create an empty table for a topic.
    #[must_use]
    pub fn new(topic: &'static str) -> Self {
        Self {
            topic,
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// The topic this table serves.
    #[must_use]
    pub fn topic(&self) -> &'static str {
        self.topic
    }

    /// Install a handler, returning the one it replaced.
    pub fn set(&mut self, key: impl Into<String>, handler: Box<F>) -> Option<Box<F>> {
        let key = key.into();
        if let Some(&slot) = self.index.get(&key) {
            tracing::warn!(topic = self.topic, key = %key, "handler key collision, overwriting");
            return Some(std::mem::replace(&mut self.entries[slot].1, handler));
        }

        tracing::debug!(topic = self.topic, key = %key, "handler installed");
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, handler));
        None
    }

    /// Remove a handler.
    pub fn unregister(&mut self, key: &str) -> Result<Box<F>, RegistryError> {
        let Some(slot) = self.index.remove(key) else {
            return Err(RegistryError::UnknownHandler {
                topic: self.topic,
                key: key.to_string(),
            });
        };

        let (_, handler) = self.entries.remove(slot);
        for (_, later) in self.index.iter_mut() {
            if *later > slot {
                *later -= 1;
            }
        }
        tracing::debug!(topic = self.topic, key, "handler removed");
        Ok(handler)
    }

    /// Check if a key is installed.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of installed handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Installed keys in dispatch order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Keep only the handlers whose key passes `keep`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        let before = self.entries.len();
        self.entries.retain(|(key, _)| keep(key));
        if self.entries.len() == before {
            return;
        }

        self.index.clear();
        for (slot, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), slot);
        }
        tracing::debug!(topic = self.topic, removed = before - self.entries.len(), "handlers removed");
    }

    /// Remove every handler.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Box<F>)> {
        self.entries.iter_mut().map(|(key, handler)| (key.as_str(), handler))
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, Box<F>)> {
        self.entries.into_iter()
    }
}

impl<F: ?Sized> std::fmt::Debug for HandlerTable<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerTable")
            .field("topic", &self.topic)
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
