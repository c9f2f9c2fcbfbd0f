//! Roster persistence.
//!
//! A store can load every persisted creature or replace all of them at once.
//! Loads are all-or-nothing: one malformed row fails the whole load.

use crate::errors::{StoreError, StoreResult};
use crate::pokemon::Pokemon;
use ron::ser::PrettyConfig;
use schema::RosterDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub trait RosterStore {
    /// Fetch every persisted creature, in stored order.
    fn load_all(&self) -> StoreResult<Vec<Pokemon>>;

    /// Discard all persisted creatures and write `pokemon` in their place,
    /// numbered from zero.
    fn replace_all(&mut self, pokemon: &[Pokemon]) -> StoreResult<()>;
}

/// Store backed by a single RON document on disk.
#[derive(Debug, Clone)]
pub struct RonFileStore {
    path: PathBuf,
}

impl RonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "roster.ron".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
        move |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl RosterStore for RonFileStore {
    fn load_all(&self) -> StoreResult<Vec<Pokemon>> {
        if !self.path.exists() {
            info!("No roster found at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(Self::io_error(&self.path))?;
        let document: RosterDocument = ron::from_str(&content)?;
        if document.version != RosterDocument::CURRENT_VERSION {
            return Err(StoreError::UnsupportedVersion(document.version));
        }

        let pokemon = document
            .records
            .iter()
            .map(|record| {
                Pokemon::from_record(record).map_err(|source| StoreError::MalformedRecord {
                    id: record.id,
                    source,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        info!("Loaded {} Pokemon from {:?}", pokemon.len(), self.path);
        Ok(pokemon)
    }

    fn replace_all(&mut self, pokemon: &[Pokemon]) -> StoreResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(Self::io_error(dir))?;
            }
        }

        let records = pokemon
            .iter()
            .enumerate()
            .map(|(id, p)| p.to_record(id))
            .collect();
        let content =
            ron::ser::to_string_pretty(&RosterDocument::new(records), PrettyConfig::default())?;

        // Write beside the target, then rename over it, so a failed write
        // never leaves a truncated roster behind.
        let temp_path = self.temp_path();
        fs::write(&temp_path, content).map_err(Self::io_error(&temp_path))?;
        fs::rename(&temp_path, &self.path).map_err(Self::io_error(&self.path))?;

        info!("Saved {} Pokemon to {:?}", pokemon.len(), self.path);
        Ok(())
    }
}

/// Store that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pokemon: Vec<Pokemon>,
}

impl RosterStore for MemoryStore {
    fn load_all(&self) -> StoreResult<Vec<Pokemon>> {
        Ok(self.pokemon.clone())
    }

    fn replace_all(&mut self, pokemon: &[Pokemon]) -> StoreResult<()> {
        debug!("Replacing {} stored Pokemon with {}", self.pokemon.len(), pokemon.len());
        self.pokemon = pokemon.to_vec();
        Ok(())
    }
}
