//! User profile persistence with file locking.
//!
//! The profile lives in a single JSON document under the data directory.
//! Loading returns built-in defaults when the file is missing or corrupt;
//! saving replaces the document wholesale via an atomic rename.

use crate::{Error, Result, UserProfile};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

impl UserProfile {
    /// Load the profile from a file with shared locking
    ///
    /// Returns the default profile if the file doesn't exist.
    /// If the file is corrupted, logs a warning and returns defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No profile file found, using defaults");
            return Ok(Self::default());
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(
                    "Unable to open profile file {:?}: {}. Using defaults.",
                    path,
                    e
                );
                return Ok(Self::default());
            }
        };

        // Acquire shared lock for reading
        if let Err(e) = file.lock_shared() {
            tracing::warn!(
                "Unable to lock profile file {:?}: {}. Using defaults.",
                path,
                e
            );
            return Ok(Self::default());
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!(
                "Failed to read profile file {:?}: {}. Using defaults.",
                path,
                e
            );
            return Ok(Self::default());
        }

        file.unlock()?;

        match serde_json::from_str::<UserProfile>(&contents) {
            Ok(profile) => {
                tracing::debug!("Loaded profile from {:?}", path);
                Ok(profile)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse profile file {:?}: {}. Using defaults.",
                    path,
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Save the profile to a file with exclusive locking
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Create unique temp file in the same directory for atomic rename
        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "profile path missing parent")
        })?)?;

        // Exclusive lock on the temp file serializes concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        // Atomically replace the old profile file
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved profile to {:?}", path);
        Ok(())
    }

    /// Load the profile, modify it, and save it back atomically
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut UserProfile) -> Result<()>,
    {
        let mut profile = Self::load(path)?;
        f(&mut profile)?;
        profile.save(path)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sex;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let profile_path = temp_dir.path().join("profile.json");

        let profile = UserProfile {
            age_years: 42,
            weight_kg: 82.5,
            height_cm: 180.0,
            sex: Sex::Female,
            timezone: Some("Asia/Riyadh".into()),
            setup_complete: true,
        };

        profile.save(&profile_path).unwrap();
        let loaded = UserProfile::load(&profile_path).unwrap();

        assert_eq!(loaded.age_years, 42);
        assert_eq!(loaded.weight_kg, 82.5);
        assert_eq!(loaded.sex, Sex::Female);
        assert_eq!(loaded.timezone, Some("Asia/Riyadh".into()));
        assert!(loaded.setup_complete);
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let profile_path = temp_dir.path().join("nonexistent.json");

        let profile = UserProfile::load(&profile_path).unwrap();
        assert_eq!(profile.age_years, 30);
        assert_eq!(profile.weight_kg, 70.0);
        assert_eq!(profile.height_cm, 170.0);
        assert_eq!(profile.sex, Sex::Male);
        assert!(profile.timezone.is_none());
        assert!(!profile.setup_complete);
    }

    #[test]
    fn test_corrupted_profile_returns_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let profile_path = temp_dir.path().join("corrupted.json");

        std::fs::write(&profile_path, "{ invalid json }").unwrap();

        let profile = UserProfile::load(&profile_path).unwrap();
        assert_eq!(profile.age_years, 30);
        assert!(!profile.setup_complete);
    }

    #[test]
    fn test_update_pattern() {
        let temp_dir = tempfile::tempdir().unwrap();
        let profile_path = temp_dir.path().join("profile.json");

        UserProfile::default().save(&profile_path).unwrap();

        UserProfile::update(&profile_path, |profile| {
            profile.age_years = 55;
            profile.setup_complete = true;
            Ok(())
        })
        .unwrap();

        let loaded = UserProfile::load(&profile_path).unwrap();
        assert_eq!(loaded.age_years, 55);
        assert!(loaded.setup_complete);
    }

    #[test]
    fn test_atomic_save() {
        let temp_dir = tempfile::tempdir().unwrap();
        let profile_path = temp_dir.path().join("profile.json");

        UserProfile::default().save(&profile_path).unwrap();

        // Verify the profile exists and no stray temp files remain
        assert!(profile_path.exists());
        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "profile.json")
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only profile.json, found extras: {:?}",
            extras
        );
    }
}
