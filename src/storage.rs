//! Durable storage for the session blob.
//!
//! The blob lives under a single fixed key and is wrapped in a versioned
//! envelope: `{"state": {...}, "version": 0}`.

use crate::session::Session;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Fixed storage identifier of the persisted session
pub const STORAGE_KEY: &str = "flatmate-storage";

const STORAGE_VERSION: u32 = 0;

/// Save/load port used by the session store
pub trait SessionStorage {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for Box<S> {
    fn load(&self) -> Result<Option<Session>> {
        (**self).load()
    }

    fn save(&self, session: &Session) -> Result<()> {
        (**self).save(session)
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a Session,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope {
    state: Session,
    #[serde(default)]
    version: u32,
}

fn encode(session: &Session) -> Result<String> {
    let envelope = EnvelopeRef {
        state: session,
        version: STORAGE_VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

fn decode(blob: &str) -> Result<Session> {
    let envelope: Envelope = serde_json::from_str(blob)?;
    if envelope.version > STORAGE_VERSION {
        return Err(anyhow!(
            "stored session version {} is newer than supported version {}",
            envelope.version,
            STORAGE_VERSION
        ));
    }
    Ok(envelope.state.normalized())
}

/// Session blob stored as `<dir>/flatmate-storage.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let session = decode(&content)
            .with_context(|| format!("Invalid session blob in {}", self.path.display()))?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let content = encode(session)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

/// In-process storage. Clones share the same slot, so a clone handed to a
/// second store sees what the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Rc<RefCell<Option<String>>>,
    failing: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail, as a full or disabled storage would.
    #[cfg(test)]
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    #[cfg(test)]
    pub fn raw(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Session>> {
        match self.blob.borrow().as_deref() {
            Some(blob) => decode(blob).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        if self.failing.get() {
            return Err(anyhow!("storage quota exceeded"));
        }
        *self.blob.borrow_mut() = Some(encode(session)?);
        Ok(())
    }
}
