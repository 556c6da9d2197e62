//! Named reference profiles

use std::time::Instant;

use super::SessionState;
use crate::state::history::SceneSelectionSnapshot;
use crate::state::profile::{
    apply_reference_profile, capture_reference_profile, ProfileAction, ProfileError,
};
use crate::viewport::host::ViewportHost;

impl SessionState {
    /// Save the current look (with lighting) under a new name
    pub fn save_profile(&mut self, name: &str) -> Result<ProfileAction, ProfileError> {
        let snapshot = capture_reference_profile(&self.project, true);
        let result = self.profiles.save_new(name, snapshot);
        self.finish_profile_op(result)
    }

    /// Replace a stored profile with the current look; asks for confirmation
    pub fn overwrite_profile(
        &mut self,
        name: &str,
        now: Instant,
    ) -> Result<ProfileAction, ProfileError> {
        let snapshot = capture_reference_profile(&self.project, true);
        let result = self.profiles.overwrite(name, snapshot, now);
        self.finish_profile_op(result)
    }

    pub fn rename_profile(&mut self, from: &str, to: &str) -> Result<ProfileAction, ProfileError> {
        let result = self.profiles.rename(from, to);
        self.finish_profile_op(result)
    }

    pub fn duplicate_profile(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<ProfileAction, ProfileError> {
        let result = self.profiles.duplicate(from, to);
        self.finish_profile_op(result)
    }

    /// Delete a stored profile; asks for confirmation
    pub fn delete_profile(&mut self, name: &str, now: Instant) -> Result<ProfileAction, ProfileError> {
        let result = self.profiles.delete(name, now);
        self.finish_profile_op(result)
    }

    /// Apply a stored profile to the project as a single undo step
    pub fn apply_profile(&mut self, name: &str) -> Result<(), ProfileError> {
        let Some(profile) = self.profiles.find(name) else {
            let err = ProfileError::NotFound(name.trim().to_string());
            self.status = Some(err.to_string());
            return Err(err);
        };
        let profile_name = profile.name.clone();
        let snapshot = profile.snapshot.clone();

        // Lights and the collar may be rebuilt, so keep the selection as a key
        let selected = SceneSelectionSnapshot::capture(&self.selection, &self.project);
        apply_reference_profile(&mut self.project, &snapshot);
        // A lighting block carries its own selected light; follow it
        let selected = match selected {
            SceneSelectionSnapshot::Light { .. } if snapshot.lighting.is_some() => {
                SceneSelectionSnapshot::Light {
                    index: self.project.selected_light_index,
                }
            }
            other => other,
        };
        selected.resolve(&self.project, &mut self.selection);

        self.viewport.invalidate_gpu();
        self.notify_project_state_changed();
        tracing::info!("Applied reference profile '{profile_name}'");
        self.status = Some(format!("Applied profile '{profile_name}'"));
        Ok(())
    }

    fn finish_profile_op(
        &mut self,
        result: Result<ProfileAction, ProfileError>,
    ) -> Result<ProfileAction, ProfileError> {
        match &result {
            Ok(action) => {
                self.status = Some(action.to_string());
                if action.is_mutation() {
                    tracing::info!("{action}");
                    self.persist_profiles();
                }
            }
            Err(err) => self.status = Some(err.to_string()),
        }
        result
    }

    fn persist_profiles(&mut self) {
        if let Err(err) = self.profile_store.save_all(self.profiles.profiles()) {
            tracing::warn!("Failed to save reference profiles: {err}");
            self.status = Some(format!("Could not save profiles: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn test_apply_profile_is_one_undo_step() {
        let mut s = SessionState::default();
        s.set_param("material.metallic", &ParamValue::Number(0.2)).unwrap();
        s.save_profile("Matte").unwrap();
        s.set_param("material.metallic", &ParamValue::Number(0.9)).unwrap();
        let before = s.history().undo_len();

        s.apply_profile("matte").unwrap();
        assert_eq!(s.project.scene.material().unwrap().params.metallic, 0.2);
        assert_eq!(s.history().undo_len(), before + 1);

        s.undo();
        assert_eq!(s.project.scene.material().unwrap().params.metallic, 0.9);
    }

    #[test]
    fn test_saving_profile_is_not_an_undo_step() {
        let mut s = SessionState::default();
        s.save_profile("Chrome").unwrap();
        assert!(!s.can_undo());
        assert_eq!(s.status.as_deref(), Some("Saved profile 'Chrome'"));
    }

    #[test]
    fn test_profile_errors_become_status() {
        let mut s = SessionState::default();
        s.save_profile("Chrome").unwrap();
        assert!(s.save_profile("chrome").is_err());
        assert_eq!(
            s.status.as_deref(),
            Some("A profile named 'Chrome' already exists")
        );
        assert!(s.apply_profile("Brass").is_err());
        assert_eq!(s.status.as_deref(), Some("Profile 'Brass' not found"));
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut s = SessionState::default();
        s.save_profile("Chrome").unwrap();
        let t0 = Instant::now();
        let first = s.delete_profile("Chrome", t0).unwrap();
        assert!(!first.is_mutation());
        assert_eq!(s.profiles().len(), 1);
        s.delete_profile("Chrome", t0 + Duration::from_secs(3)).unwrap();
        assert!(s.profiles().is_empty());
    }

    #[test]
    fn test_apply_profile_restores_lighting() {
        let mut s = SessionState::default();
        s.add_light();
        s.save_profile("Two lights").unwrap();
        s.remove_light(1).unwrap();
        s.apply_profile("Two lights").unwrap();
        assert_eq!(s.project.lights.len(), 2);
    }
}
