use super::*;

/// A store whose every operation fails, like `localStorage` in a
/// sandboxed iframe.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Read { key: key.into(), reason: "SecurityError".into() })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write { key: key.into(), reason: "QuotaExceededError".into() })
    }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn missing_key_reads_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme").unwrap(), None);
    assert!(store.is_empty());
}

#[test]
fn last_write_wins() {
    let store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(store.len(), 1);
}

#[test]
fn empty_value_is_stored() {
    let store = MemoryStore::new();
    store.set("leetcode_rating", "").unwrap();
    assert_eq!(store.get("leetcode_rating").unwrap().as_deref(), Some(""));
}

#[test]
fn clear_removes_everything() {
    let store = MemoryStore::new();
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.get("a").unwrap(), None);
}

// =============================================================
// Warn helpers
// =============================================================

#[test]
fn read_or_warn_swallows_errors() {
    assert_eq!(read_or_warn(&BrokenStore, "theme"), None);
}

#[test]
fn write_or_warn_swallows_errors() {
    write_or_warn(&BrokenStore, "theme", "dark");
}

#[test]
fn read_or_warn_passes_values_through() {
    let store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    assert_eq!(read_or_warn(&store, "theme").as_deref(), Some("dark"));
}

#[test]
fn store_error_messages_name_the_key() {
    let err = BrokenStore.set("codechef_rating", "5").unwrap_err();
    assert_eq!(err.to_string(), "failed to write codechef_rating: QuotaExceededError");
}
