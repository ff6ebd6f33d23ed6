/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Hashing helpers for shapes with map-valued members.
//!
//! `HashMap` does not implement `Hash` because its iteration order is unspecified. Generated
//! shapes that contain maps hash them with [`hash_map`], which combines per-entry hashes with a
//! commutative operation so that two equal maps always produce the same hash.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Feed an order-independent digest of `map` into `state`
pub fn hash_map<K, V, H>(map: &HashMap<K, V>, state: &mut H)
where
    K: Hash,
    V: Hash,
    H: Hasher,
{
    // DefaultHasher::new() is keyed identically on every call, so entry digests are stable.
    let combined = map.iter().fold(0u64, |acc, (k, v)| {
        let mut entry = DefaultHasher::new();
        k.hash(&mut entry);
        v.hash(&mut entry);
        acc.wrapping_add(entry.finish())
    });
    state.write_usize(map.len());
    state.write_u64(combined);
}

/// Hash an optional member with `f`, writing the same discriminant `Option::hash` would
pub fn hash_option<T, H, F>(value: Option<&T>, state: &mut H, f: F)
where
    T: ?Sized,
    H: Hasher,
    F: FnOnce(&T, &mut H),
{
    match value {
        Some(value) => {
            1u8.hash(state);
            f(value, state);
        }
        None => 0u8.hash(state),
    }
}
