//! Iterator over the keys of a [`Table`](crate::Table).

use crate::node::Node;

/// Iterator over `(&str, &V)` pairs, resident entries and chained ones alike.
pub struct Iter<'a, V> {
    entries: Vec<(&'a str, &'a V)>,
    pos: usize,
}

impl<'a, V> Iter<'a, V> {
    /// Creates an iterator by collecting every bucket tree via DFS.
    pub(crate) fn new(buckets: &'a [Option<Box<Node<V>>>]) -> Self {
        let mut entries = Vec::new();
        for root in buckets.iter().flatten() {
            collect(root, &mut entries);
        }
        Self { entries, pos: 0 }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.entries.get(self.pos).copied()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// DFS collect all `(&str, &V)` from the subtree rooted at `node`.
fn collect<'a, V>(node: &'a Node<V>, out: &mut Vec<(&'a str, &'a V)>) {
    out.push((&*node.entry.key, &node.entry.value));
    for link in node.chain.iter() {
        out.push((&*link.key, &link.value));
    }
    if let Some(left) = node.left.as_deref() {
        collect(left, out);
    }
    if let Some(right) = node.right.as_deref() {
        collect(right, out);
    }
}
