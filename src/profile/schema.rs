//! Profile Schema Types
//!
//! Serde mirror of the profile TOML plus the runtime `Profile` the pipeline
//! consumes.

use serde::Deserialize;

/// Root profile file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileFile {
    pub machine: MachineSection,
    pub limits: LimitsSection,
    pub vocabulary: VocabularySection,
}

/// Absolute machine travel limits (informational only)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MachineSection {
    pub min_z: f64,
    pub max_z: f64,
}

/// Height window and safety clearance
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LimitsSection {
    pub bottom_z: f64,
    pub top_z: f64,
    pub safe_z_offset: f64,
}

/// Command and parameter vocabularies
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VocabularySection {
    pub motion_commands: Vec<String>,
    pub coordinate_letters: Vec<String>,
    pub feed_rate_letters: Vec<String>,
}

/// Runtime profile (flattened for direct field access)
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Absolute machine floor, never enforced by the pipeline
    pub machine_min_z: f64,
    /// Absolute machine ceiling, never enforced by the pipeline
    pub machine_max_z: f64,
    /// Lower bound of the kept height window
    pub bottom_z: f64,
    /// Upper bound of the kept height window
    pub top_z: f64,
    /// Clearance added above the tallest kept toolpath point
    pub safe_z_offset: f64,
    /// Command codes that denote tool motion (e.g. "G0", "G1")
    pub motion_commands: Vec<String>,
    /// Parameter letters that carry spatial coordinates
    pub coordinate_letters: Vec<String>,
    /// Parameter letters that carry a feed rate
    pub feed_rate_letters: Vec<String>,
}

impl From<ProfileFile> for Profile {
    fn from(file: ProfileFile) -> Self {
        Self {
            machine_min_z: file.machine.min_z,
            machine_max_z: file.machine.max_z,
            bottom_z: file.limits.bottom_z,
            top_z: file.limits.top_z,
            safe_z_offset: file.limits.safe_z_offset,
            motion_commands: file.vocabulary.motion_commands,
            coordinate_letters: file.vocabulary.coordinate_letters,
            feed_rate_letters: file.vocabulary.feed_rate_letters,
        }
    }
}

impl Profile {
    /// Check whether a command token denotes motion
    pub fn is_motion_command(&self, command: &str) -> bool {
        self.motion_commands.iter().any(|cmd| cmd == command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> ProfileFile {
        ProfileFile {
            machine: MachineSection {
                min_z: 0.0,
                max_z: 200.0,
            },
            limits: LimitsSection {
                bottom_z: 0.0,
                top_z: 180.0,
                safe_z_offset: 10.0,
            },
            vocabulary: VocabularySection {
                motion_commands: vec!["G0".to_string(), "G1".to_string()],
                coordinate_letters: vec!["X".to_string(), "Y".to_string(), "Z".to_string()],
                feed_rate_letters: vec!["F".to_string()],
            },
        }
    }

    #[test]
    fn profile_from_file_flattens_sections() {
        let profile = Profile::from(sample_file());
        assert_eq!(profile.top_z, 180.0);
        assert_eq!(profile.safe_z_offset, 10.0);
        assert_eq!(profile.motion_commands, vec!["G0", "G1"]);
    }

    #[test]
    fn motion_command_lookup() {
        let profile = Profile::from(sample_file());
        assert!(profile.is_motion_command("G1"));
        assert!(!profile.is_motion_command("M104"));
    }
}
