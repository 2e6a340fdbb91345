//! Hash collections using AHash.
//!
//! Registries keyed by element or column ids use these instead of the std
//! SipHash-based maps.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_replaces_by_key() {
        let mut map: HashMap<u64, &str> = HashMap::new();
        assert_eq!(map.insert(0xcbf2_9ce4, "athlete"), None);
        assert_eq!(map.insert(0xcbf2_9ce4, "age"), Some("athlete"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_set_membership() {
        let set: HashSet<u64> = [1, 2, 3].into_iter().collect();
        assert!(set.contains(&2));
        assert!(!set.contains(&4));
    }
}
