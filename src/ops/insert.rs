//! Insertion operation — in-place bit descent with collision chaining.

use tracing::debug;

use crate::node::{self, Entry, Node};

/// Outcome of an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Put {
    /// The key was new, in the tree or in a collision chain.
    Inserted,
    /// The key existed and its value was overwritten.
    Updated,
}

/// Inserts `key` into the subtree rooted at `current`, which sits at
/// `depth` below the bucket root.
///
/// The key is only copied into an owned allocation when it is placed.
///
/// # Panics
///
/// Panics if descent passes the last digest bit without resolving, which
/// means the placement invariant of the tree is broken.
pub fn insert_recursive<V>(
    current: &mut Node<V>,
    key: &str,
    digest: u32,
    value: V,
    depth: u32,
) -> Put {
    if current.entry.digest == digest {
        if &*current.entry.key == key {
            current.entry.value = value;
            return Put::Updated;
        }
        debug!(
            key,
            resident = %current.entry.key,
            digest,
            "digest collision, chaining"
        );
        return if current.chain.upsert(key, value) {
            Put::Inserted
        } else {
            Put::Updated
        };
    }

    node::check_depth(key, depth);
    let slot = current.child_slot(node::path_bits(digest), depth);
    if let Some(child) = slot.as_mut() {
        return insert_recursive(child, key, digest, value, depth + 1);
    }
    *slot = Some(Box::new(Node::leaf(Entry {
        key: key.into(),
        digest,
        value,
    })));
    Put::Inserted
}
