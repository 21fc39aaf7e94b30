//! Generic JSON-array record store.
//!
//! One [`RecordStore`] per resource, constructed once at startup and shared
//! by handle. The backing file holds a single JSON array of records; every
//! operation loads the whole array and every mutation writes it back whole.
//! A per-store mutex is held across each load-mutate-persist cycle so that
//! concurrent writers on the same resource cannot lose each other's update.

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::id;

/// A persisted entity: serializable and identified by a unique string id.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The record's unique identifier within its resource.
    fn id(&self) -> &str;
}

/// A client-supplied payload that becomes a [`Record`] once the store stamps
/// the server-side fields (id and submission timestamp).
pub trait Draft: Send {
    /// The record type this draft produces.
    type Output: Record;

    /// Attach the generated id and submission timestamp.
    fn into_record(self, id: String, date: DateTime<Utc>) -> Self::Output;
}

/// Load/append/delete access to one named resource backed by one JSON file.
pub struct RecordStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> RecordStore<T> {
    /// Create a store for `resource`, backed by `<data_dir>/<resource>.json`.
    ///
    /// The file is not touched here; it is created on first write.
    #[must_use]
    pub fn new(data_dir: &Path, resource: &str) -> Self {
        Self {
            path: data_dir.join(format!("{resource}.json")),
            write_lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records in insertion order.
    ///
    /// A resource that has never been written is an empty array, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` on genuine I/O failure and
    /// `StoreError::Serialization` if the file is not a valid record array.
    pub async fn load(&self) -> Result<Vec<T>> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Find the first record with the given id.
    ///
    /// # Errors
    ///
    /// Fails only if the resource cannot be loaded.
    pub async fn find(&self, id: &str) -> Result<Option<T>> {
        let records = self.load().await?;
        Ok(records.into_iter().find(|r| r.id() == id))
    }

    /// Append a new record built from `draft`.
    ///
    /// Assigns a fresh id, stamps the submission timestamp, and persists the
    /// full array. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Fails if the resource cannot be loaded or written.
    pub async fn append<D>(&self, draft: D) -> Result<T>
    where
        D: Draft<Output = T>,
    {
        let record = draft.into_record(id::next_id(), Utc::now());

        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        records.push(record.clone());
        self.persist(&records).await?;

        Ok(record)
    }

    /// Delete all records with the given id (0 or 1 expected).
    ///
    /// Deleting an id that is not present is a no-op success.
    ///
    /// # Errors
    ///
    /// Fails if the resource cannot be loaded or written.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.delete_guarded(id, |_| Ok(())).await
    }

    /// Delete with a caller-supplied check against the freshly loaded array.
    ///
    /// The guard runs under the same lock as the write, so the array it sees
    /// is the array the delete applies to. If the guard fails nothing is
    /// written.
    ///
    /// # Errors
    ///
    /// Propagates the guard's error, or any load/write failure.
    pub async fn delete_guarded<F>(&self, id: &str, guard: F) -> Result<()>
    where
        F: FnOnce(&[T]) -> Result<()> + Send,
    {
        let _guard = self.write_lock.lock().await;
        let records = self.load().await?;
        guard(&records)?;

        let remaining: Vec<T> = records.into_iter().filter(|r| r.id() != id).collect();
        self.persist(&remaining).await
    }

    /// Write the full array back, replacing the previous file content.
    async fn persist(&self, records: &[T]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Message, NewMessage};
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> RecordStore<Message> {
        RecordStore::new(dir.path(), "messages")
    }

    fn draft(name: &str) -> NewMessage {
        NewMessage {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            message: "hello".to_string(),
        }
    }

    #[tokio::test]
    async fn load_of_absent_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_grows_by_one_with_fresh_id() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let first = store.append(draft("ada")).await.unwrap();
        let second = store.append(draft("grace")).await.unwrap();

        let records = store.load().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_ne!(first.id, second.id);
        assert_eq!(records[0].name, "ada");
        assert_eq!(records[1].name, "grace");
    }

    #[tokio::test]
    async fn append_stamps_id_and_date() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let before = Utc::now();
        let stored = store.append(draft("ada")).await.unwrap();

        assert!(!stored.id.is_empty());
        assert!(stored.date >= before);
        assert!(stored.date <= Utc::now());
    }

    #[tokio::test]
    async fn find_returns_first_match() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let stored = store.append(draft("ada")).await.unwrap();
        let found = store.find(&stored.id).await.unwrap();
        assert_eq!(found.unwrap().name, "ada");

        assert!(store.find("no-such-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let keep = store.append(draft("ada")).await.unwrap();
        let gone = store.append(draft("grace")).await.unwrap();

        store.delete(&gone.id).await.unwrap();

        let records = store.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, keep.id);
        assert_eq!(records[0].name, "ada");
        assert_eq!(records[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn delete_of_absent_id_is_noop_success() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.append(draft("ada")).await.unwrap();
        store.delete("no-such-id").await.unwrap();

        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_guard_prevents_the_write() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let stored = store.append(draft("ada")).await.unwrap();
        let result = store
            .delete_guarded(&stored.id, |_| {
                Err(StoreError::FeaturedProduct(stored.id.clone()))
            })
            .await;

        assert!(matches!(result, Err(StoreError::FeaturedProduct(_))));
        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_file_is_a_fatal_read_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        std::fs::write(store.path(), b"{ not an array ]").unwrap();

        assert!(matches!(
            store.load().await,
            Err(StoreError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(store(&dir));

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append(draft(&format!("user{i}"))).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(store.load().await.unwrap().len(), 8);
    }
}
