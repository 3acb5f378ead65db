//! Uniqueness-checked identifier indexes.
//!
//! Every per-table index must be unique; building one is where duplicate
//! primary keys in a dataset are caught. The merged user index additionally
//! guarantees that students and professionals occupy disjoint id spaces.

use std::collections::hash_map::Entry;
use std::fmt::Display;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::IntegrityError;
use crate::graph::types::UserRef;

/// Build an id → arena-position index over one entity collection.
pub fn build_index<T, K, F>(
    table: &'static str,
    items: &[T],
    key: F,
) -> Result<FxHashMap<K, u32>, IntegrityError>
where
    K: Eq + Hash + Display,
    F: Fn(&T) -> K,
{
    let mut index = FxHashMap::default();
    index.reserve(items.len());
    for (position, item) in items.iter().enumerate() {
        match index.entry(key(item)) {
            Entry::Occupied(entry) => {
                return Err(IntegrityError::DuplicateKey {
                    table,
                    key: entry.key().to_string(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(position as u32);
            }
        }
    }
    Ok(index)
}

/// Merge the student and professional indexes into the combined user index.
///
/// The two namespaces must be disjoint: users belong to exactly one of the
/// two categories, and a shared id aborts construction.
pub fn merge_disjoint(
    students: &FxHashMap<String, u32>,
    professionals: &FxHashMap<String, u32>,
) -> Result<FxHashMap<String, UserRef>, IntegrityError> {
    let mut merged = FxHashMap::default();
    merged.reserve(students.len() + professionals.len());
    for (id, &position) in students {
        merged.insert(id.clone(), UserRef::Student(position));
    }
    for (id, &position) in professionals {
        if merged
            .insert(id.clone(), UserRef::Professional(position))
            .is_some()
        {
            return Err(IntegrityError::UserIdOverlap { key: id.clone() });
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_index(ids: &[&str]) -> Result<FxHashMap<String, u32>, IntegrityError> {
        build_index("users", ids, |id| id.to_string())
    }

    #[test]
    fn index_maps_keys_to_positions() {
        let index = string_index(&["a", "b", "c"]).unwrap();
        assert_eq!(index["a"], 0);
        assert_eq!(index["c"], 2);
    }

    #[test]
    fn duplicate_key_is_fatal() {
        let err = string_index(&["a", "b", "a"]).unwrap_err();
        assert_eq!(
            err,
            IntegrityError::DuplicateKey {
                table: "users",
                key: "a".to_string(),
            }
        );
    }

    #[test]
    fn disjoint_indexes_merge() {
        let students = string_index(&["s1", "s2"]).unwrap();
        let professionals = string_index(&["p1"]).unwrap();
        let merged = merge_disjoint(&students, &professionals).unwrap();

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["s2"], UserRef::Student(1));
        assert_eq!(merged["p1"], UserRef::Professional(0));
    }

    #[test]
    fn overlapping_user_id_is_fatal() {
        let students = string_index(&["s1", "shared"]).unwrap();
        let professionals = string_index(&["shared"]).unwrap();
        let err = merge_disjoint(&students, &professionals).unwrap_err();
        assert_eq!(
            err,
            IntegrityError::UserIdOverlap {
                key: "shared".to_string(),
            }
        );
    }
}
