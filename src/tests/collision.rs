use crate::{Liveness, Put, Table};

/// Forces `alpha`, `beta`, `gamma` and `delta` onto one digest.
fn forced(bytes: &[u8]) -> u32 {
    match bytes {
        b"alpha" | b"beta" | b"gamma" | b"delta" => 0xDEAD_BEEF,
        _ => crc32fast::hash(bytes),
    }
}

/// Two keys with the same 32-bit digest: the second goes to the chain.
#[test]
fn two_colliding_keys() {
    let mut table = Table::with_digest("t", forced);
    assert_eq!(table.insert("alpha", "first"), Put::Inserted);
    assert_eq!(table.insert("beta", "second"), Put::Inserted);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("alpha"), Some(&"first"));
    assert_eq!(table.get("beta"), Some(&"second"));
}

/// The tree node stays resident; the chained key resolves ephemerally.
#[test]
fn chained_hit_is_ephemeral() {
    let mut table = Table::with_digest("t", forced);
    table.insert("alpha", 1);
    table.insert("beta", 2);

    let resident = table.lookup("alpha").expect("bound");
    assert_eq!(resident.liveness(), Liveness::Resident);

    let ephemeral = table.lookup("beta").expect("bound");
    assert_eq!(ephemeral.liveness(), Liveness::Ephemeral);
    assert_eq!(*ephemeral.value(), 2);
}

/// Reading through the chain does not consume it.
#[test]
fn repeated_chain_lookup_is_stable() {
    let mut table = Table::with_digest("t", forced);
    table.insert("alpha", 10);
    table.insert("beta", 20);

    for _ in 0..3 {
        let hit = table.lookup("beta").expect("bound");
        assert!(hit.is_ephemeral());
        assert_eq!(hit.cloned(), 20);
    }
    assert_eq!(table.len(), 2);
}

/// Four keys with the same digest.
#[test]
fn four_colliding_keys() {
    let keys = ["alpha", "beta", "gamma", "delta"];

    let mut table = Table::with_digest("t", forced);
    for (i, k) in keys.iter().enumerate() {
        table.insert(k, i);
    }

    assert_eq!(table.len(), 4);
    for (i, k) in keys.iter().enumerate() {
        assert_eq!(table.get(k), Some(&i));
    }
}

/// Overwrite a chained key in place.
#[test]
fn overwrite_in_chain() {
    let mut table = Table::with_digest("t", forced);
    table.insert("alpha", "a");
    table.insert("beta", "old");
    assert_eq!(table.insert("beta", "new"), Put::Updated);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("beta"), Some(&"new"));
    assert_eq!(table.get("alpha"), Some(&"a"));
}

/// Overwrite the resident key of a node that has a chain.
#[test]
fn overwrite_resident_with_chain() {
    let mut table = Table::with_digest("t", forced);
    table.insert("alpha", 1);
    table.insert("beta", 2);
    assert_eq!(table.insert("alpha", 3), Put::Updated);

    assert_eq!(table.get("alpha"), Some(&3));
    assert_eq!(table.get("beta"), Some(&2));
    assert_eq!(table.len(), 2);
}

/// Same digest, key in neither node nor chain.
#[test]
fn chain_miss() {
    let mut table = Table::with_digest("t", forced);
    table.insert("alpha", 1);
    table.insert("beta", 2);
    assert_eq!(table.get("gamma"), None);
}

/// Mixed: some keys collide, some don't.
#[test]
fn mixed_collisions_and_normal() {
    let mut table = Table::with_digest("t", forced);
    table.insert("alpha", "a");
    table.insert("beta", "b");
    table.insert("omega", "c");

    assert_eq!(table.len(), 3);
    assert_eq!(table.get("alpha"), Some(&"a"));
    assert_eq!(table.get("beta"), Some(&"b"));
    assert_eq!(table.get("omega"), Some(&"c"));
    assert!(!table.lookup("omega").expect("bound").is_ephemeral());
}

/// Every key collides: the whole table is one node and its chain.
#[test]
fn degenerate_digest() {
    let mut table = Table::with_digest("t", |_: &[u8]| 7_u32);
    for i in 0..100 {
        table.insert(&format!("k{i}"), i);
    }
    assert_eq!(table.len(), 100);
    assert_eq!(table.max_depth(), 0);
    for i in 0..100 {
        assert_eq!(table.get(&format!("k{i}")), Some(&i));
    }
    assert!(!table.lookup("k0").expect("bound").is_ephemeral());
    assert!(table.lookup("k99").expect("bound").is_ephemeral());
}

/// Iteration covers chained keys too.
#[test]
fn iter_includes_chain() {
    let mut table = Table::with_digest("t", forced);
    table.insert("alpha", 1);
    table.insert("beta", 2);
    table.insert("omega", 3);

    let mut seen: Vec<(&str, i32)> = table.iter().map(|(k, v)| (k, *v)).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![("alpha", 1), ("beta", 2), ("omega", 3)]);
}
