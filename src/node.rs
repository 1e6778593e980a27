//! Bucket tree node types and descent helpers.

use std::fmt;

use crate::chain::Chain;

/// Maximum descent depth: one level per digest bit.
pub const MAX_DEPTH: u32 = u32::BITS;

/// Digest bits spent on bucket selection.
pub const BUCKET_BITS: u32 = 8;

/// A key, its cached digest, and its value.
pub struct Entry<V> {
    /// The key.
    pub key: Box<str>,
    /// Digest of `key`, computed once at insertion.
    pub digest: u32,
    /// The value. Never interpreted by the tree.
    pub value: V,
}

/// Bucket tree node.
///
/// Invariant: the node sits at depth `d` only if the first `d` bits of
/// [`path_bits`] of its digest spell the branch sequence from the bucket
/// root. Every node in the same bucket shares the low byte of its digest.
pub struct Node<V> {
    /// Resident entry stored at this position.
    pub entry: Entry<V>,
    /// Subtree for keys whose next path bit is 1.
    pub left: Option<Box<Self>>,
    /// Subtree for keys whose next path bit is 0.
    pub right: Option<Box<Self>>,
    /// Keys whose digest equals `entry.digest` but whose key differs.
    pub chain: Chain<V>,
}

impl<V> Node<V> {
    /// Creates a leaf holding `entry`.
    #[must_use]
    pub const fn leaf(entry: Entry<V>) -> Self {
        Self {
            entry,
            left: None,
            right: None,
            chain: Chain::new(),
        }
    }

    /// Returns the child taken when the path bit at `depth` is set (`left`)
    /// or clear (`right`).
    #[inline]
    #[must_use]
    pub fn child(&self, path: u32, depth: u32) -> Option<&Self> {
        if goes_left(path, depth) {
            self.left.as_deref()
        } else {
            self.right.as_deref()
        }
    }

    /// Mutable counterpart of [`child`](Self::child), returning the slot.
    #[inline]
    pub const fn child_slot(&mut self, path: u32, depth: u32) -> &mut Option<Box<Self>> {
        if goes_left(path, depth) {
            &mut self.left
        } else {
            &mut self.right
        }
    }
}

/// Reorders digest bits for descent.
///
/// The low byte already picked the bucket and is identical for every node
/// in it, so the remaining 24 bits are consumed first, low bit first, and
/// the bucket byte last.
#[inline]
#[must_use]
pub const fn path_bits(digest: u32) -> u32 {
    digest.rotate_right(BUCKET_BITS)
}

/// Returns `true` if descent at `depth` branches left.
#[inline]
#[must_use]
pub const fn goes_left(path: u32, depth: u32) -> bool {
    (path >> depth) & 1 == 1
}

/// Guards descent: a node at `depth` may only branch while digest bits remain.
///
/// # Panics
///
/// Panics once all [`MAX_DEPTH`] bits are consumed without a digest match.
/// Two digests agreeing on every path bit are equal, so reaching this means
/// the tree's placement invariant is broken.
#[inline]
#[track_caller]
pub fn check_depth(key: &str, depth: u32) {
    assert!(
        depth < MAX_DEPTH,
        "structural invariant violated: no slot for {key:?} after {MAX_DEPTH} digest bits"
    );
}

/// Where a lookup result lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    /// Matched a tree node; permanent for the table's lifetime.
    Resident,
    /// Resolved from a collision chain for this read only.
    Ephemeral,
}

/// Result of a successful lookup.
///
/// Borrows the stored value in both cases: an ephemeral hit is not linked
/// into the tree and leaves the chain untouched, so repeating the lookup
/// yields the same hit.
pub struct Hit<'a, V> {
    value: &'a V,
    liveness: Liveness,
}

impl<'a, V> Hit<'a, V> {
    pub(crate) const fn resident(value: &'a V) -> Self {
        Self {
            value,
            liveness: Liveness::Resident,
        }
    }

    pub(crate) const fn ephemeral(value: &'a V) -> Self {
        Self {
            value,
            liveness: Liveness::Ephemeral,
        }
    }

    /// Returns the value.
    #[must_use]
    pub const fn value(&self) -> &'a V {
        self.value
    }

    /// Returns where the value was found.
    #[must_use]
    pub const fn liveness(&self) -> Liveness {
        self.liveness
    }

    /// Returns `true` if the value came from a collision chain.
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(self.liveness, Liveness::Ephemeral)
    }
}

impl<V: Clone> Hit<'_, V> {
    /// Copies the value out, releasing the borrow.
    #[must_use]
    pub fn cloned(&self) -> V {
        self.value.clone()
    }
}

// ---------------------------------------------------------------------------
// Manual trait impls — Hit holds only a reference, so no `V: Clone` bound.
// ---------------------------------------------------------------------------

impl<V> Clone for Hit<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Hit<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for Hit<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hit")
            .field("value", self.value)
            .field("liveness", &self.liveness)
            .finish()
    }
}

impl<V> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.entry.key)
            .field("digest", &format_args!("{:#010x}", self.entry.digest))
            .field("chain_len", &self.chain.len())
            .finish_non_exhaustive()
    }
}
