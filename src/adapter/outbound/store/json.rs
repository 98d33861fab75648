//! JSON file snapshot store.
//!
//! The snapshot lives in a single JSON file. Writes go to a sibling temp
//! file which is fsynced and then renamed over the target, so a reader (or a
//! restart after a crash) sees either the old record or the new one.
//!
//! The cache is tied to the file's modification time and length. A write
//! from another process (`snapshot reset` during `run`) invalidates it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::Snapshot;
use crate::error::Result;
use crate::port::SnapshotStore;

/// File-backed [`SnapshotStore`] with an in-memory cache.
pub struct JsonFileStore {
    path: PathBuf,
    /// Last loaded or saved snapshot; `None` until first access.
    cache: Mutex<Option<Cached>>,
}

/// Modification time and length of the file a cached snapshot came from.
type Stamp = Option<(SystemTime, u64)>;

struct Cached {
    snapshot: Snapshot,
    stamp: Stamp,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn stamp(&self) -> Stamp {
        let meta = fs::metadata(&self.path).ok()?;
        Some((meta.modified().ok()?, meta.len()))
    }

    /// Cached snapshot if the file is unchanged since it was cached.
    fn current(&self, cache: &mut Option<Cached>) -> Snapshot {
        let stamp = self.stamp();
        if let Some(cached) = cache
            .as_ref()
            .filter(|cached| cached.stamp.is_some() && cached.stamp == stamp)
        {
            return cached.snapshot.clone();
        }
        let snapshot = self.read_from_disk();
        *cache = Some(Cached {
            snapshot: snapshot.clone(),
            stamp,
        });
        snapshot
    }

    fn store(&self, cache: &mut Option<Cached>, snapshot: Snapshot) {
        *cache = Some(Cached {
            snapshot,
            stamp: self.stamp(),
        });
    }

    fn read_from_disk(&self) -> Snapshot {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot yet, starting empty");
                return Snapshot::default();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Snapshot unreadable, starting empty");
                return Snapshot::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Snapshot corrupt, starting empty");
                Snapshot::default()
            }
        }
    }

    fn write_to_disk(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path)?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            e
        };

        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;
        Ok(())
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Snapshot {
        let mut cache = self.cache.lock();
        self.current(&mut cache)
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let mut cache = self.cache.lock();
        self.write_to_disk(snapshot)?;
        self.store(&mut cache, snapshot.clone());
        Ok(())
    }

    fn update(&self, apply: &mut dyn FnMut(&mut Snapshot)) -> Result<Snapshot> {
        let mut cache = self.cache.lock();
        let mut next = self.current(&mut cache);
        apply(&mut next);
        self.write_to_disk(&next)?;
        self.store(&mut cache, next.clone());
        Ok(next)
    }
}
