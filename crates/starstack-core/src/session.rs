//! Persistence of star picks between the selection and compositing phases.
//!
//! A session is the ordered list of per-frame pick records. Skipped frames
//! keep their slot with no stars, so frame order survives a round trip.
//!
//! On disk (TOML):
//!
//! ```toml
//! version = 1
//!
//! [[frames]]
//! index = 0
//! path = "lights/light_000.tif"
//!
//! [frames.stars.first]
//! x = 812.43
//! y = 377.9
//!
//! [frames.stars.second]
//! x = 1520.07
//! y = 1044.12
//!
//! [[frames]]
//! index = 1
//! path = "lights/light_001.tif"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::SESSION_FORMAT_VERSION;
use crate::error::{Result, StarstackError};
use crate::frame::StarPair;

/// The star picks recorded for one frame. `stars == None` marks the frame skipped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FramePickSet {
    pub index: usize,
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<StarPair>,
}

impl FramePickSet {
    pub fn picked(index: usize, path: PathBuf, stars: StarPair) -> Self {
        Self {
            index,
            path,
            stars: Some(stars),
        }
    }

    pub fn skipped(index: usize, path: PathBuf) -> Self {
        Self {
            index,
            path,
            stars: None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.stars.is_none()
    }
}

/// Stores the pick list of one run.
///
/// `load` hands the list back exactly once per `save`; a second `load`
/// fails with [`StarstackError::SessionConsumed`].
pub trait SessionStore {
    fn save(&mut self, picks: &[FramePickSet]) -> Result<()>;
    fn load(&mut self) -> Result<Vec<FramePickSet>>;
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionDocument {
    version: u32,
    #[serde(default)]
    frames: Vec<FramePickSet>,
}

/// TOML file-backed session store.
#[derive(Debug)]
pub struct TomlSessionStore {
    path: PathBuf,
    loaded: bool,
}

impl TomlSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for TomlSessionStore {
    fn save(&mut self, picks: &[FramePickSet]) -> Result<()> {
        let doc = SessionDocument {
            version: SESSION_FORMAT_VERSION,
            frames: picks.to_vec(),
        };
        let text = toml::to_string_pretty(&doc)?;
        std::fs::write(&self.path, text)?;
        self.loaded = false;
        info!(
            frames = picks.len(),
            path = %self.path.display(),
            "Saved pick session"
        );
        Ok(())
    }

    fn load(&mut self) -> Result<Vec<FramePickSet>> {
        if self.loaded {
            return Err(StarstackError::SessionConsumed);
        }
        let text = std::fs::read_to_string(&self.path)?;
        let doc: SessionDocument = toml::from_str(&text)?;
        if doc.version != SESSION_FORMAT_VERSION {
            return Err(StarstackError::UnsupportedSessionVersion(doc.version));
        }
        self.loaded = true;
        debug!(frames = doc.frames.len(), path = %self.path.display(), "Loaded pick session");
        Ok(doc.frames)
    }
}

/// In-memory session store with the same load-once contract.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    picks: Option<Vec<FramePickSet>>,
    loaded: bool,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&mut self, picks: &[FramePickSet]) -> Result<()> {
        self.picks = Some(picks.to_vec());
        self.loaded = false;
        Ok(())
    }

    fn load(&mut self) -> Result<Vec<FramePickSet>> {
        if self.loaded {
            return Err(StarstackError::SessionConsumed);
        }
        let picks = self.picks.clone().ok_or(StarstackError::SessionMissing)?;
        self.loaded = true;
        Ok(picks)
    }
}
