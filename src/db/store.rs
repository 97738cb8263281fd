// src/db/store.rs

use crate::domain::Listing;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("listing store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("listing store is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Flat-file listing store: one JSON array, read in full and rewritten in full
/// on every mutation. There is no locking, so concurrent admin writes can lose
/// updates.
#[derive(Clone, Debug)]
pub struct ListingStore {
    path: PathBuf,
}

impl ListingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All listings in file order. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Listing>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let listings: Vec<Listing> = serde_json::from_reader(BufReader::new(file))?;
        debug!(count = listings.len(), path = %self.path.display(), "loaded listings");
        Ok(listings)
    }

    pub fn save(&self, listings: &[Listing]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, listings)?;
        writer.flush()?;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<Listing>, StoreError> {
        Ok(self.load()?.into_iter().find(|l| l.id == id))
    }

    pub fn append(&self, listing: Listing) -> Result<(), StoreError> {
        let mut listings = self.load()?;
        listings.push(listing);
        self.save(&listings)
    }

    /// Returns whether a listing was removed. The file is only rewritten when
    /// something changed.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut listings = self.load()?;
        let before = listings.len();
        listings.retain(|l| l.id != id);

        if listings.len() == before {
            return Ok(false);
        }
        self.save(&listings)?;
        Ok(true)
    }

    /// Newest `n` listings by creation time.
    pub fn recent(&self, n: usize) -> Result<Vec<Listing>, StoreError> {
        let mut listings = self.load()?;
        // stable: equal timestamps keep file order
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        listings.truncate(n);
        Ok(listings)
    }
}
