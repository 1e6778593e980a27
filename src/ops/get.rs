//! Lookup operation — walks digest bits from a bucket root.

use crate::node::{self, Hit, Node};

/// Searches for `key` in the bucket tree rooted at `root`.
///
/// A node is only passed over when its digest differs from `digest`. On a
/// digest match the key decides between the resident entry and the
/// node's collision chain; descent never continues past that node.
pub fn get_in<'a, V>(root: &'a Node<V>, key: &str, digest: u32) -> Option<Hit<'a, V>> {
    let path = node::path_bits(digest);
    let mut current = root;
    let mut depth = 0;

    loop {
        if current.entry.digest == digest {
            if &*current.entry.key == key {
                return Some(Hit::resident(&current.entry.value));
            }
            return current.chain.find(key).map(Hit::ephemeral);
        }
        node::check_depth(key, depth);
        current = current.child(path, depth)?;
        depth += 1;
    }
}
