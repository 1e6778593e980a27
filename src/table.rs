//! A named table: 256 independent bucket trees.

use std::fmt;
use std::ops;

use crate::digest::{BUCKETS, Crc32, Digest, bucket_of};
use crate::iter::Iter;
use crate::node::{Entry, Hit, Node};
use crate::ops::get::get_in;
use crate::ops::insert::{Put, insert_recursive};

/// A named namespace of string keys.
///
/// The bucket is picked by the key digest's low byte; inside a bucket the
/// same digest steers descent through a binary tree.
pub struct Table<V, D = Crc32> {
    name: Box<str>,
    hash: u32,
    digest: D,
    pub(crate) buckets: Box<[Option<Box<Node<V>>>]>,
    size: usize,
}

// ---------------------------------------------------------------------------
// Construction — default digest
// ---------------------------------------------------------------------------

impl<V> Table<V> {
    /// Creates an empty table digesting with CRC-32.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_digest(name, Crc32)
    }
}

// ---------------------------------------------------------------------------
// Accessors — no trait bounds
// ---------------------------------------------------------------------------

impl<V, D> Table<V, D> {
    /// Returns the table's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the digest of the table's name.
    #[must_use]
    pub const fn hash(&self) -> u32 {
        self.hash
    }

    /// Returns the number of keys, chained ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the table holds no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the deepest occupied tree level across all buckets.
    ///
    /// Bucket roots are level 0; an empty table also reports 0. Never
    /// exceeds 32.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.buckets
            .iter()
            .flatten()
            .map(|root| depth_of(root))
            .max()
            .unwrap_or(0)
    }

    /// Returns an iterator over `(key, value)` pairs, in no particular order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.buckets)
    }
}

fn depth_of<V>(node: &Node<V>) -> u32 {
    let left = node.left.as_deref().map_or(0, |n| depth_of(n) + 1);
    let right = node.right.as_deref().map_or(0, |n| depth_of(n) + 1);
    left.max(right)
}

// ---------------------------------------------------------------------------
// Operations — D: Digest
// ---------------------------------------------------------------------------

impl<V, D: Digest> Table<V, D> {
    /// Creates an empty table using `digest` for its name and keys.
    #[must_use]
    pub fn with_digest(name: &str, digest: D) -> Self {
        let hash = digest.digest(name.as_bytes());
        Self {
            name: name.into(),
            hash,
            digest,
            buckets: (0..BUCKETS).map(|_| None).collect(),
            size: 0,
        }
    }

    /// Binds `key` to `value`, overwriting any previous value.
    ///
    /// # Panics
    ///
    /// Panics if the bucket tree's placement invariant is found broken.
    pub fn insert(&mut self, key: &str, value: V) -> Put {
        let digest = self.digest.digest(key.as_bytes());
        let slot = &mut self.buckets[bucket_of(digest)];
        let put = if let Some(root) = slot.as_mut() {
            insert_recursive(root, key, digest, value, 0)
        } else {
            *slot = Some(Box::new(Node::leaf(Entry {
                key: key.into(),
                digest,
                value,
            })));
            Put::Inserted
        };
        if put == Put::Inserted {
            self.size += 1;
        }
        put
    }

    /// Looks up `key`, reporting whether it resolved through a collision
    /// chain.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Hit<'_, V>> {
        let digest = self.digest.digest(key.as_bytes());
        let root = self.buckets[bucket_of(digest)].as_deref()?;
        get_in(root, key, digest)
    }

    /// Returns a reference to the value bound to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.lookup(key).map(|hit| hit.value())
    }

    /// Returns `true` if `key` is bound.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

impl<V: Default, D: Digest> Table<V, D> {
    /// Binds `key` to `V::default()` unless it is already bound.
    ///
    /// Returns `true` if the key was new.
    pub fn declare(&mut self, key: &str) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.insert(key, V::default());
        true
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<V, D> fmt::Debug for Table<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("hash", &format_args!("{:#010x}", self.hash))
            .field("len", &self.size)
            .finish_non_exhaustive()
    }
}

impl<K: AsRef<str>, V, D: Digest> Extend<(K, V)> for Table<V, D> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k.as_ref(), v);
        }
    }
}

impl<V, D: Digest> ops::Index<&str> for Table<V, D> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<'a, V, D> IntoIterator for &'a Table<V, D> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}
