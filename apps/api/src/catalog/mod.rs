// Static content tables consumed read-only by the quiz engine and the
// supporting site features. Built in by default; a JSON file can replace them.

pub mod builtin;
pub mod handlers;
pub mod models;
pub mod tags;
pub mod validation;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::models::{Profile, QuizQuestion, RoleEntry};
use crate::catalog::tags::Tag;
use crate::catalog::validation::{validate_catalog, IssueSeverity};
use crate::eligibility::Programme;
use crate::events::Event;
use crate::skills::SkillStatement;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub questions: Vec<QuizQuestion>,
    pub profiles: Vec<Profile>,
    pub roles: Vec<RoleEntry>,
    #[serde(default)]
    pub programmes: Vec<Programme>,
    #[serde(default)]
    pub skill_statements: Vec<SkillStatement>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Catalog {
            questions: builtin::questions(),
            profiles: builtin::profiles(),
            roles: builtin::roles(),
            programmes: builtin::programmes(),
            skill_statements: builtin::skill_statements(),
            events: builtin::events(),
        }
    }

    /// Loads a catalog from a JSON file and checks it. Fatal integrity issues
    /// fail the load; warnings are logged.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file {} is not valid JSON", path.display()))?;
        catalog.checked()
    }

    /// Runs integrity checks, logging warnings and rejecting fatal issues.
    pub fn checked(self) -> Result<Self> {
        let issues = validate_catalog(&self);
        let mut fatal = Vec::new();
        for issue in issues {
            match issue.severity {
                IssueSeverity::Warning => warn!("Catalog: {}", issue.message),
                IssueSeverity::Fatal => fatal.push(issue.message),
            }
        }
        if !fatal.is_empty() {
            anyhow::bail!("Catalog failed integrity checks: {}", fatal.join("; "));
        }
        info!(
            "Catalog loaded: {} questions, {} profiles, {} role entries, {} events",
            self.questions.len(),
            self.profiles.len(),
            self.roles.len(),
            self.events.len()
        );
        Ok(self)
    }

    pub fn profile(&self, tag: Tag) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.tag == tag)
    }

    /// The designated fallback profile. Presence is enforced by `checked`.
    pub fn general_profile(&self) -> Option<&Profile> {
        self.profile(Tag::General)
    }

    /// Questions in quiz order: stage 1 before stage 2, then by id.
    pub fn ordered_questions(&self) -> Vec<&QuizQuestion> {
        let mut ordered: Vec<&QuizQuestion> = self.questions.iter().collect();
        ordered.sort_by_key(|q| (q.stage, q.id));
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_passes_integrity_checks() {
        assert!(Catalog::builtin().checked().is_ok());
    }

    #[test]
    fn test_ordered_questions_groups_by_stage() {
        let mut catalog = Catalog::builtin();
        catalog.questions.reverse();
        let stages: Vec<u8> = catalog.ordered_questions().iter().map(|q| q.stage).collect();
        assert_eq!(stages, vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2]);
        assert_eq!(catalog.ordered_questions()[0].id, 1);
    }

    #[test]
    fn test_json_file_round_trip() {
        let json = serde_json::to_string(&Catalog::builtin()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(loaded.questions, Catalog::builtin().questions);
        assert!(loaded.general_profile().is_some());
    }

    #[test]
    fn test_json_file_without_general_profile_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.profiles.retain(|p| p.tag != Tag::General);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&catalog).unwrap().as_bytes())
            .unwrap();

        let err = Catalog::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("integrity"));
    }

    #[test]
    fn test_json_file_unknown_tag_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"questions":[{"id":1,"stage":1,"text":"Q","options":[{"id":"a","text":"A","tags":["astronaut"]}]}],"profiles":[],"roles":[]}"#,
        )
        .unwrap();
        assert!(Catalog::from_json_file(file.path()).is_err());
    }
}
