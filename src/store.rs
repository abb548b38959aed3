//! Store Module
//!
//! Ties a collection to the data file it is loaded from and saved to.
//!
//! ## Responsibilities
//! - Load the data file on open (a missing file means an empty collection)
//! - Route commands to the collection
//! - Track unsaved changes and write them back on save/close

use std::path::Path;

use crate::codec::{self, LoadReport};
use crate::collection::Collection;
use crate::command::{Command, Outcome};
use crate::config::Config;
use crate::error::{Result, RosterError};

/// A collection plus the file that backs it
///
/// Not synchronized: every mutating method takes `&mut self`. Share it
/// across threads only behind an external lock.
pub struct Store {
    /// Store configuration
    config: Config,

    /// The records; single source of truth while the store is open
    collection: Collection,

    /// What the most recent load found
    load_report: LoadReport,

    /// Set by any applied command, cleared by save
    dirty: bool,
}

impl Store {
    /// Open a store with the given config
    ///
    /// On open:
    /// 1. Validate the config
    /// 2. Load the data file if it exists, stopping at the first corrupt line
    /// 3. Start empty if it does not
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let (collection, load_report) = Self::load_collection(&config)?;

        Ok(Self {
            config,
            collection,
            load_report,
            dirty: false,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Result<Self> {
        let mut config = Config::default();
        config.data_file = path.to_path_buf();
        Self::open(config)
    }

    /// Execute a command
    ///
    /// Routes commands to the collection. Remove and edit of an unknown id
    /// are not errors; they come back as `Outcome::NotFound`.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        tracing::trace!("Executing {:?}", command.command_type());

        let outcome = match command {
            Command::Append(record) => {
                self.collection.append(record)?;
                Outcome::Applied
            }
            Command::Remove { id } => found(self.collection.remove_by_id(id)),
            Command::Edit { id, fields } => found(self.collection.edit_by_id(id, fields)),
            Command::Sort(key) => {
                self.collection.sort(key);
                Outcome::Applied
            }
        };

        if outcome.changed() {
            self.dirty = true;
        }
        Ok(outcome)
    }

    /// Write the collection to the data file
    pub fn save(&mut self) -> Result<()> {
        codec::save(&self.collection, &self.config.data_file)?;
        self.dirty = false;
        Ok(())
    }

    /// Replace the in-memory collection with the data file's contents
    ///
    /// Unsaved changes are discarded. On error the current collection is
    /// kept as it was.
    pub fn reload(&mut self) -> Result<&LoadReport> {
        let (collection, load_report) = Self::load_collection(&self.config)?;
        self.collection = collection;
        self.load_report = load_report;
        self.dirty = false;
        Ok(&self.load_report)
    }

    /// Close the store, saving first if there are unsaved changes
    pub fn close(mut self) -> Result<()> {
        if self.dirty {
            self.save()?;
        }
        Ok(())
    }

    fn load_collection(config: &Config) -> Result<(Collection, LoadReport)> {
        let mut collection = match config.capacity_limit {
            Some(limit) => Collection::with_capacity_limit(limit),
            None => Collection::new(),
        };

        match codec::load_into(&config.data_file, &mut collection) {
            Ok(report) => Ok((collection, report)),
            Err(RosterError::Open { ref source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::info!(
                    "Data file {} not found, starting with an empty collection",
                    config.data_file.display()
                );
                Ok((collection, LoadReport::default()))
            }
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Read access to the records, for rendering
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// What the most recent open/reload found in the data file
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// Whether there are changes not yet written to the data file
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Path of the data file
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn found(hit: bool) -> Outcome {
    if hit {
        Outcome::Applied
    } else {
        Outcome::NotFound
    }
}
