//! Collision chain for keys sharing a full 32-bit digest.

/// A `(key, value)` pair parked on a tree node.
pub struct Link<V> {
    /// The key.
    pub key: Box<str>,
    /// The value.
    pub value: V,
}

/// Ordered side list hanging off a tree node.
///
/// Every link shares the owning node's digest but not its key. Keys are
/// unique within the chain and never equal the node's own key.
pub struct Chain<V> {
    links: Vec<Link<V>>,
}

impl<V> Chain<V> {
    /// Creates an empty chain. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Returns the number of links.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if no key has collided with the owning node.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&V> {
        self.links
            .iter()
            .find(|link| &*link.key == key)
            .map(|link| &link.value)
    }

    /// Overwrites the value under `key`, or appends a new link.
    ///
    /// Returns `true` if a link was appended.
    pub fn upsert(&mut self, key: &str, value: V) -> bool {
        if let Some(link) = self.links.iter_mut().find(|link| &*link.key == key) {
            link.value = value;
            false
        } else {
            self.links.push(Link {
                key: key.into(),
                value,
            });
            true
        }
    }

    /// Iterates links in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Link<V>> {
        self.links.iter()
    }
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}
