//! Static file fallback.
//!
//! Paths are joined onto the serving root as given. There is no decoding,
//! normalization or traversal check; `..` segments reach outside the root.

use std::path::PathBuf;

use crate::error::NotFound;
use crate::http::response::Response;

#[derive(Debug, Clone)]
pub struct StaticFileResolver {
    root: PathBuf,
}

impl StaticFileResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Leading slashes are dropped so the path stays relative to the root.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    /// Whole file contents. Any I/O failure, directories included, is [`NotFound`].
    pub fn read(&self, path: &str) -> Result<Vec<u8>, NotFound> {
        let full = self.resolve(path);
        std::fs::read(&full).map_err(|e| {
            tracing::debug!(path = %full.display(), error = %e, "Static file unreadable");
            NotFound { path: full }
        })
    }
}

pub fn file_response(files: &StaticFileResolver, path: &str) -> Response {
    match files.read(path) {
        Ok(bytes) => Response::ok(bytes),
        Err(_) => Response::not_found(format!("File Not Found: {}", path)),
    }
}
