// Store Tests - Testing the key-value backends

use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_memory_store_get_missing() {
    let store = MemoryStore::new();
    assert!(store.get("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_memory_store_overwrite() {
    let store = MemoryStore::new();

    store.set("key", b"first").await.unwrap();
    store.set("key", b"second").await.unwrap();

    assert_eq!(store.get("key").await.unwrap(), Some(b"second".to_vec()));
}

#[tokio::test]
async fn test_memory_store_keys_are_independent() {
    let store = MemoryStore::new();

    store.set("a", b"1").await.unwrap();
    store.set("b", b"2").await.unwrap();

    assert_eq!(store.get("a").await.unwrap(), Some(b"1".to_vec()));
    assert_eq!(store.get("b").await.unwrap(), Some(b"2".to_vec()));
}

#[tokio::test]
async fn test_sqlite_store_in_memory() {
    let store = SqliteStore::new_in_memory().expect("Failed to create store");

    assert!(store.get("students:list:v2").await.unwrap().is_none());
    store.set("students:list:v2", b"[]").await.unwrap();
    assert_eq!(store.get("students:list:v2").await.unwrap(), Some(b"[]".to_vec()));

    store.set("students:list:v2", b"[1]").await.unwrap();
    assert_eq!(store.get("students:list:v2").await.unwrap(), Some(b"[1]".to_vec()));
}

#[test]
fn test_sqlite_store_persists_across_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("roster.db");

    {
        let store = SqliteStore::new(&db_path).expect("Failed to open store");
        store.set_blocking("key", b"value").expect("Failed to write");
    }

    let reopened = SqliteStore::new(&db_path).expect("Failed to reopen store");
    assert_eq!(reopened.get_blocking("key").unwrap(), Some(b"value".to_vec()));
    assert!(reopened.get_blocking("other").unwrap().is_none());
}

#[test]
fn test_sqlite_store_binary_values() {
    let store = SqliteStore::new_in_memory().expect("Failed to create store");
    let value: Vec<u8> = (0..=255).collect();

    store.set_blocking("bytes", &value).unwrap();
    assert_eq!(store.get_blocking("bytes").unwrap(), Some(value));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_sqlite_store_clones_share_connection() {
    let store = SqliteStore::new_in_memory().expect("Failed to create store");
    let shared: Arc<dyn KeyValueStore> = Arc::new(store.clone());

    let writer = shared.clone();
    tokio::spawn(async move { writer.set("students:list:v2", b"[2]").await })
        .await
        .expect("Write task panicked")
        .expect("Failed to write");

    assert_eq!(store.get_blocking("students:list:v2").unwrap(), Some(b"[2]".to_vec()));
    assert_eq!(shared.get("students:list:v2").await.unwrap(), Some(b"[2]".to_vec()));
}
