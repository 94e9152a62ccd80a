//! Session file.
//!
//! The token and role of the last successful login are written to
//! `<config_dir>/session.json` so later invocations stay logged in.
//!
//! ## Corrupt files
//!
//! A file that cannot be read back as a session is reported with a warning and
//! treated as "not logged in"; the next login overwrites it.

use crate::{ClientError, ClientResult, SessionStore};

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use vote_core::Session;

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory of the session file exists.
    fn ensure_parent_dir(&self) -> ClientResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| ClientError::Storage {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Write `content`, creating the file readable by the owner only.
    fn write_private(&self, content: &[u8]) -> std::io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        file.write_all(content)?;
        file.flush()
    }

    /// The token is a credential; keep the file private to the user.
    #[cfg(unix)]
    fn restrict_permissions(&self) -> ClientResult<()> {
        use std::os::unix::fs::PermissionsExt;

        std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).map_err(
            |e| ClientError::Storage {
                path: self.path.clone(),
                source: e,
            },
        )
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self) -> ClientResult<()> {
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ClientResult<Option<Session>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ClientError::Storage {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => {
                debug!("Restored {} session from {}", session.role, self.path.display());
                Ok(Some(session))
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(session)?;
        self.write_private(content.as_bytes())
            .map_err(|e| ClientError::Storage {
                path: self.path.clone(),
                source: e,
            })?;
        // A file left over from an older run keeps its mode on open
        self.restrict_permissions()?;

        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Storage {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
