//! Registry configuration file support.
//!
//! This module provides utilities for reading the registry's structural
//! limits from TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::error::{RegistryError, RegistryResult};

/// Structural limits for the registration core.
///
/// All three limits are fixed for the lifetime of an engine; the index
/// structures do not resize or rebalance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Number of slots in the open-addressing student table.
    #[serde(default = "default_student_slots")]
    pub student_slots: usize,
    /// Maximum number of queued students per course waitlist.
    #[serde(default = "default_waitlist_capacity")]
    pub waitlist_capacity: usize,
    /// Upper bound on any course roster, independent of course capacity.
    #[serde(default = "default_roster_capacity")]
    pub roster_capacity: usize,
}

fn default_student_slots() -> usize {
    100
}

fn default_waitlist_capacity() -> usize {
    20
}

fn default_roster_capacity() -> usize {
    20
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            student_slots: default_student_slots(),
            waitlist_capacity: default_waitlist_capacity(),
            roster_capacity: default_roster_capacity(),
        }
    }
}

impl RegistryConfig {
    /// Load registry configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RegistryConfig)` if successful
    /// * `Err(RegistryError::Config)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RegistryError::config(format!("Failed to read config file: {}", e))
        })?;

        let config: RegistryConfig = toml::from_str(&content).map_err(|e| {
            RegistryError::config(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load registry configuration from the default location.
    ///
    /// Searches for `registry.toml` in the current directory, a `config/`
    /// subdirectory, and the parent directory, in that order.
    pub fn from_default_location() -> RegistryResult<Self> {
        let search_paths = vec![
            PathBuf::from("registry.toml"),
            PathBuf::from("config/registry.toml"),
            PathBuf::from("../registry.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RegistryError::config(
            "No registry.toml found in standard locations".to_string(),
        ))
    }

    /// Check the limits for internal consistency.
    ///
    /// The student table must have at least one slot (the probe sequence is
    /// bounded by the slot count), and the roster bound must admit at least
    /// one seat.
    pub fn validate(&self) -> RegistryResult<()> {
        if self.student_slots == 0 {
            return Err(RegistryError::config(
                "student_slots must be at least 1".to_string(),
            ));
        }
        if self.roster_capacity == 0 {
            return Err(RegistryError::config(
                "roster_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
