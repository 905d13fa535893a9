//! Black-box tests of the tree over its public API.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use radix_map::{Error, RadixTree, VectorKey};

#[test]
fn round_trip() {
    let mut tree = RadixTree::new();
    assert!(tree.insert("hello", 42).is_none());
    assert_eq!(tree.get("hello"), Some(&42));
}

#[test]
fn overwrite_keeps_latest_value() {
    let mut tree = RadixTree::new();
    assert_eq!(tree.insert("key1", 100), None);
    assert_eq!(tree.insert("key1", 200), Some(100));
    assert_eq!(tree.get("key1"), Some(&200));
    assert_eq!(tree.len(), 1);
}

#[test]
fn prefix_of_stored_keys_is_absent() {
    let mut tree = RadixTree::new();
    tree.insert("romane", 1);
    tree.insert("romanus", 2);

    assert_eq!(tree.get("roman"), None);
    assert_eq!(tree.get("romane"), Some(&1));
    assert_eq!(tree.get("romanus"), Some(&2));
}

#[test]
fn remove_leaves_siblings_untouched() {
    let mut tree = RadixTree::new();
    tree.insert("ruber", 5);
    tree.insert("rubicon", 6);

    assert_eq!(tree.remove("ruber"), Some(5));
    assert_eq!(tree.get("ruber"), None);
    assert_eq!(tree.get("rubicon"), Some(&6));
}

#[test]
fn remove_absent_key_is_idempotent() {
    let mut tree = RadixTree::new();
    tree.insert("romane", 1);

    assert_eq!(tree.remove("romanus"), None);
    assert_eq!(tree.remove("romanus"), None);
    assert_eq!(tree.remove("romane"), Some(1));
    assert_eq!(tree.remove("romane"), None);
    assert!(tree.is_empty());
}

#[test]
fn update_absent_fails_without_inserting() {
    let mut tree = RadixTree::new();
    tree.insert("rubens", 4);

    assert_eq!(tree.update("ruber", 9), Err(Error::KeyNotFound));
    assert_eq!(tree.get("ruber"), None);
    assert_eq!(tree.len(), 1);
}

#[test]
fn update_present_changes_only_the_value() {
    let mut tree = RadixTree::new();
    tree.insert("rubicundus", 7);
    tree.insert("rubicon", 6);

    assert_eq!(tree.update("rubicundus", 10), Ok(()));
    assert_eq!(tree.get("rubicundus"), Some(&10));
    assert_eq!(tree.get("rubicon"), Some(&6));
    assert_eq!(tree.len(), 2);
}

#[test]
fn get_mut_edits_in_place() {
    let mut tree = RadixTree::new();
    tree.insert("counter", 0);
    *tree.get_mut("counter").unwrap() += 1;
    *tree.get_mut("counter").unwrap() += 1;
    assert_eq!(tree.get("counter"), Some(&2));
    assert_eq!(tree.get_mut("missing"), None);
}

// The scenario the original smoke driver runs: seven Latin words with
// heavy prefix sharing, then an update and a delete.
#[test]
fn roman_words_scenario() {
    let mut tree = RadixTree::new();
    tree.insert("romane", 1.0);
    tree.insert("romanus", 2.0);
    tree.insert("romulus", 3.0);
    tree.insert("rubens", 4.0);
    tree.insert("ruber", 5.0);
    tree.insert("rubicon", 6.0);
    tree.insert("rubicundus", 7.0);
    assert_eq!(tree.len(), 7);

    assert_eq!(tree.get("romane"), Some(&1.0));

    assert!(tree.update("rubicundus", 10.0).is_ok());
    assert_eq!(tree.get("rubicundus"), Some(&10.0));

    assert_eq!(tree.remove("ruber"), Some(5.0));
    assert_eq!(tree.get("ruber"), None);
    assert_eq!(tree.get("rubicon"), Some(&6.0));

    for (key, expected) in [
        ("romane", 1.0),
        ("romanus", 2.0),
        ("romulus", 3.0),
        ("rubens", 4.0),
        ("rubicon", 6.0),
        ("rubicundus", 10.0),
    ] {
        assert_eq!(tree.get(key), Some(&expected));
    }
}

#[test]
fn values_need_no_default_or_clone() {
    // V is opaque to the tree; a type with neither Default nor Clone works.
    struct Opaque(#[allow(dead_code)] String);

    let mut tree = RadixTree::new();
    tree.insert("a", Opaque("one".into()));
    tree.insert("ab", Opaque("two".into()));
    assert!(tree.get("a").is_some());
    assert!(tree.remove("ab").is_some());
}

#[test]
fn integer_and_byte_keys() {
    let mut tree = RadixTree::new();
    tree.insert(500u64, "a");
    tree.insert(501u64, "b");
    tree.insert(b"\x01\xf4".as_slice(), "c");

    assert_eq!(tree.get(500u64), Some(&"a"));
    assert_eq!(tree.get(501u64), Some(&"b"));
    // 500u64 big-endian is not the two-byte key 0x01f4.
    assert_eq!(tree.get(b"\x01\xf4".as_slice()), Some(&"c"));

    let k: VectorKey = 500u64.into();
    assert_eq!(tree.remove_k(&k), Some("a"));
    assert_eq!(tree.get(501u64), Some(&"b"));
}

#[test]
fn random_churn_matches_btree() {
    let mut tree = RadixTree::new();
    let mut btree = BTreeMap::new();
    let mut rng = thread_rng();
    let chars = [b'a', b'b', b'c', b'd'];

    let mut keys = Vec::new();
    for _ in 0..3_000 {
        let len = rng.gen_range(1..=10);
        let key: Vec<u8> = (0..len).map(|_| chars[rng.gen_range(0..4)]).collect();
        keys.push(String::from_utf8(key).unwrap());
    }

    for (i, key) in keys.iter().enumerate() {
        assert_eq!(tree.insert(key.as_str(), i), btree.insert(key.clone(), i));
        assert_eq!(tree.len(), btree.len());
    }

    for key in keys.iter() {
        assert_eq!(tree.get(key.as_str()), btree.get(key));
    }

    keys.shuffle(&mut rng);
    let (gone, kept) = keys.split_at(keys.len() / 2);
    for key in gone {
        assert_eq!(tree.remove(key.as_str()), btree.remove(key));
    }
    for key in kept.iter().chain(gone.iter()) {
        assert_eq!(tree.get(key.as_str()), btree.get(key));
    }
    assert_eq!(tree.len(), btree.len());
}
