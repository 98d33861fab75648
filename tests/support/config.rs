//! Config file fixtures.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const VALID_CONFIG: &str = r#"
[logging]
level = "warn"
format = "pretty"

[poll]
interval_secs = 7

[catalog]
base_url = "https://shop.example"
listing_url = "https://shop.example/api/category/83?currentPage={page}&pageSize={page_size}"
page_size = 40

[availability]
check_url = "https://shop.example/api/edd?productCode={item}&postalCode={destination}"
destination = "813210"
"#;

/// A temporary directory holding `config.toml` with the store inside it.
pub struct ConfigDir {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl ConfigDir {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = dir.path().join("stockwave.json");
        let contents = format!(
            "{contents}\n[store]\npath = {:?}\n",
            store.display().to_string()
        );
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).expect("write temp config");
        Self { dir, path }
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("stockwave.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
