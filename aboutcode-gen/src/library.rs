//! License text sources injected into generation

use indexmap::IndexMap;
use std::path::PathBuf;

/// Looks up license texts by license key.
pub trait LicenseLibrary {
    /// Short code and full text for `key`, `None` when unknown.
    fn lookup(&self, key: &str) -> Option<(String, String)>;
}

/// A library held in memory, keyed by license key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLicenseLibrary {
    licenses: IndexMap<String, (String, String)>,
}

impl InMemoryLicenseLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        short_code: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.licenses
            .insert(key.into(), (short_code.into(), text.into()));
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}

impl LicenseLibrary for InMemoryLicenseLibrary {
    fn lookup(&self, key: &str) -> Option<(String, String)> {
        self.licenses.get(key).cloned()
    }
}

/// A directory of `<key>.LICENSE` files.
#[derive(Debug, Clone)]
pub struct DirectoryLicenseLibrary {
    root: PathBuf,
}

impl DirectoryLicenseLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl LicenseLibrary for DirectoryLicenseLibrary {
    fn lookup(&self, key: &str) -> Option<(String, String)> {
        let key = key.trim();
        if key.is_empty() || key.contains(['/', '\\']) {
            return None;
        }
        let candidates = [key.to_string(), key.to_lowercase()];
        candidates.iter().find_map(|candidate| {
            let location = self.root.join(format!("{}.LICENSE", candidate));
            match std::fs::read_to_string(&location) {
                Ok(text) => Some((candidate.clone(), text)),
                Err(e) => {
                    tracing::trace!(path = %location.display(), error = %e, "no license text");
                    None
                }
            }
        })
    }
}
