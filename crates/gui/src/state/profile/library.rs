//! Named reference profiles and their validation rules

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ReferenceProfileSnapshot;

/// Second invocation of a destructive action must land within this window
pub const CONFIRM_WINDOW: Duration = Duration::from_secs(8);

/// A named, persisted look
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceProfile {
    pub name: String,
    pub snapshot: ReferenceProfileSnapshot,
}

/// Identity key of a profile name: trimmed, case-insensitive
pub fn normalize_profile_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validation failures, shown to the user as a status message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Profile name cannot be empty")]
    EmptyName,
    #[error("A profile named '{0}' already exists")]
    DuplicateName(String),
    #[error("Profile '{0}' not found")]
    NotFound(String),
}

/// Actions that require a second confirming invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    Overwrite,
    Delete,
}

impl DestructiveAction {
    pub fn verb(&self) -> &'static str {
        match self {
            DestructiveAction::Overwrite => "overwrite",
            DestructiveAction::Delete => "delete",
        }
    }
}

/// Successful outcome of a library operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    Saved(String),
    Overwritten(String),
    Renamed { from: String, to: String },
    Duplicated { from: String, to: String },
    Deleted(String),
    /// Nothing changed; the same call must be repeated within the window
    ConfirmationRequired {
        action: DestructiveAction,
        name: String,
    },
}

impl ProfileAction {
    /// True if the library content changed and should be persisted
    pub fn is_mutation(&self) -> bool {
        !matches!(self, ProfileAction::ConfirmationRequired { .. })
    }
}

impl fmt::Display for ProfileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileAction::Saved(name) => write!(f, "Saved profile '{name}'"),
            ProfileAction::Overwritten(name) => write!(f, "Overwrote profile '{name}'"),
            ProfileAction::Renamed { from, to } => write!(f, "Renamed '{from}' to '{to}'"),
            ProfileAction::Duplicated { from, to } => write!(f, "Duplicated '{from}' as '{to}'"),
            ProfileAction::Deleted(name) => write!(f, "Deleted profile '{name}'"),
            ProfileAction::ConfirmationRequired { action, name } => write!(
                f,
                "Press again within {} seconds to {} '{name}'",
                CONFIRM_WINDOW.as_secs(),
                action.verb()
            ),
        }
    }
}

#[derive(Debug, Clone)]
struct PendingConfirmation {
    action: DestructiveAction,
    key: String,
    requested_at: Instant,
}

/// In-memory list of named profiles. Every operation validates fully
/// before mutating.
#[derive(Debug, Default)]
pub struct ProfileLibrary {
    profiles: Vec<ReferenceProfile>,
    pending: Option<PendingConfirmation>,
}

impl ProfileLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded profiles. Later duplicates of a name are dropped.
    pub fn from_profiles(profiles: Vec<ReferenceProfile>) -> Self {
        let mut library = Self::new();
        for profile in profiles {
            if library.position(&profile.name).is_some() || profile.name.trim().is_empty() {
                tracing::warn!("Skipping invalid or duplicate profile '{}'", profile.name);
                continue;
            }
            library.profiles.push(profile);
        }
        library
    }

    pub fn profiles(&self) -> &[ReferenceProfile] {
        &self.profiles
    }

    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&ReferenceProfile> {
        self.position(name).map(|i| &self.profiles[i])
    }

    /// Destructive action waiting for its second invocation, if any
    pub fn pending_confirmation(&self) -> Option<(DestructiveAction, &str)> {
        self.pending
            .as_ref()
            .map(|p| (p.action, p.key.as_str()))
    }

    /// Add a new profile under a name not used yet
    pub fn save_new(
        &mut self,
        name: &str,
        snapshot: ReferenceProfileSnapshot,
    ) -> Result<ProfileAction, ProfileError> {
        let name = validated_name(name)?;
        if let Some(existing) = self.find(&name) {
            return Err(ProfileError::DuplicateName(existing.name.clone()));
        }
        self.profiles.push(ReferenceProfile {
            name: name.clone(),
            snapshot,
        });
        Ok(ProfileAction::Saved(name))
    }

    /// Replace the snapshot of an existing profile (needs confirmation)
    pub fn overwrite(
        &mut self,
        name: &str,
        snapshot: ReferenceProfileSnapshot,
        now: Instant,
    ) -> Result<ProfileAction, ProfileError> {
        let index = self.require(name)?;
        let stored_name = self.profiles[index].name.clone();
        if !self.confirm(DestructiveAction::Overwrite, &stored_name, now) {
            return Ok(ProfileAction::ConfirmationRequired {
                action: DestructiveAction::Overwrite,
                name: stored_name,
            });
        }
        self.profiles[index].snapshot = snapshot;
        Ok(ProfileAction::Overwritten(stored_name))
    }

    /// Rename a profile. Changing only the letter case of its own name is allowed.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<ProfileAction, ProfileError> {
        let index = self.require(from)?;
        let to = validated_name(to)?;
        if let Some(other) = self.position(&to) {
            if other != index {
                return Err(ProfileError::DuplicateName(self.profiles[other].name.clone()));
            }
        }
        let old = std::mem::replace(&mut self.profiles[index].name, to.clone());
        self.pending = None;
        Ok(ProfileAction::Renamed { from: old, to })
    }

    /// Copy a profile under a new unique name
    pub fn duplicate(&mut self, from: &str, to: &str) -> Result<ProfileAction, ProfileError> {
        let index = self.require(from)?;
        let to = validated_name(to)?;
        if let Some(existing) = self.find(&to) {
            return Err(ProfileError::DuplicateName(existing.name.clone()));
        }
        let source = &self.profiles[index];
        let copy = ReferenceProfile {
            name: to.clone(),
            snapshot: source.snapshot.clone(),
        };
        let from = source.name.clone();
        self.profiles.push(copy);
        Ok(ProfileAction::Duplicated { from, to })
    }

    /// Remove a profile (needs confirmation)
    pub fn delete(&mut self, name: &str, now: Instant) -> Result<ProfileAction, ProfileError> {
        let index = self.require(name)?;
        let stored_name = self.profiles[index].name.clone();
        if !self.confirm(DestructiveAction::Delete, &stored_name, now) {
            return Ok(ProfileAction::ConfirmationRequired {
                action: DestructiveAction::Delete,
                name: stored_name,
            });
        }
        self.profiles.remove(index);
        Ok(ProfileAction::Deleted(stored_name))
    }

    /// Timed double-confirm token. The first call (or a call after the
    /// window has lapsed, or for another action/profile) arms the token and
    /// returns false; a matching call within the window consumes it.
    fn confirm(&mut self, action: DestructiveAction, name: &str, now: Instant) -> bool {
        let key = normalize_profile_name(name);
        if let Some(pending) = &self.pending {
            let within_window = now.saturating_duration_since(pending.requested_at) <= CONFIRM_WINDOW;
            if pending.action == action && pending.key == key && within_window {
                self.pending = None;
                return true;
            }
        }
        self.pending = Some(PendingConfirmation {
            action,
            key,
            requested_at: now,
        });
        false
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = normalize_profile_name(name);
        self.profiles
            .iter()
            .position(|p| normalize_profile_name(&p.name) == key)
    }

    fn require(&self, name: &str) -> Result<usize, ProfileError> {
        self.position(name)
            .ok_or_else(|| ProfileError::NotFound(name.trim().to_string()))
    }
}

fn validated_name(name: &str) -> Result<String, ProfileError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::EmptyName);
    }
    Ok(trimmed.to_string())
}
