use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::tags::{Tag, TagKind};
use crate::catalog::Catalog;

pub const MAX_TAGS_PER_OPTION: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    /// The quiz cannot run correctly with this catalog.
    Fatal,
    /// Content is inconsistent but the engine degrades gracefully.
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogIssue {
    pub severity: IssueSeverity,
    pub message: String,
}

fn fatal(message: String) -> CatalogIssue {
    CatalogIssue {
        severity: IssueSeverity::Fatal,
        message,
    }
}

fn warning(message: String) -> CatalogIssue {
    CatalogIssue {
        severity: IssueSeverity::Warning,
        message,
    }
}

/// Checks the structural and referential integrity of a catalog.
///
/// Fatal:
/// - no `general` profile, duplicate profile keys
/// - stage outside 1–2, an empty stage, duplicate question ids
/// - questions without options, duplicate option ids within a question
///
/// Warning:
/// - options carrying 0 or more than 3 tags, or the `general` tag
/// - option tags that no profile, recommended-sector list or role entry knows
/// - recommended sectors that are not sector tags
/// - duplicate skill statement or event ids
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    // Profiles
    let mut profile_keys = HashSet::new();
    for profile in &catalog.profiles {
        if !profile_keys.insert(profile.tag) {
            issues.push(fatal(format!("duplicate profile '{}'", profile.tag)));
        }
        for sector in &profile.recommended_sectors {
            if sector.kind() != TagKind::Sector {
                issues.push(warning(format!(
                    "profile '{}' recommends '{}', which is not a sector",
                    profile.tag, sector
                )));
            }
        }
    }
    if !profile_keys.contains(&Tag::General) {
        issues.push(fatal("missing the 'general' fallback profile".to_string()));
    }

    // Questions
    let mut question_ids = HashSet::new();
    for stage in [1u8, 2] {
        if !catalog.questions.iter().any(|q| q.stage == stage) {
            issues.push(fatal(format!("stage {stage} has no questions")));
        }
    }

    let known: HashSet<Tag> = catalog
        .profiles
        .iter()
        .flat_map(|p| std::iter::once(p.tag).chain(p.recommended_sectors.iter().copied()))
        .chain(catalog.roles.iter().map(|r| r.tag))
        .collect();
    let mut reported_unknown = HashSet::new();

    for question in &catalog.questions {
        if !question_ids.insert(question.id) {
            issues.push(fatal(format!("duplicate question id {}", question.id)));
        }
        if !(1..=2).contains(&question.stage) {
            issues.push(fatal(format!(
                "question {} has stage {}, expected 1 or 2",
                question.id, question.stage
            )));
        }
        if question.options.is_empty() {
            issues.push(fatal(format!("question {} has no options", question.id)));
        }

        let mut option_ids = HashSet::new();
        for option in &question.options {
            if !option_ids.insert(option.id.as_str()) {
                issues.push(fatal(format!(
                    "question {} has duplicate option '{}'",
                    question.id, option.id
                )));
            }
            if option.tags.is_empty() || option.tags.len() > MAX_TAGS_PER_OPTION {
                issues.push(warning(format!(
                    "question {} option '{}' has {} tags, expected 1 to {MAX_TAGS_PER_OPTION}",
                    question.id,
                    option.id,
                    option.tags.len()
                )));
            }
            for tag in &option.tags {
                if *tag == Tag::General {
                    issues.push(warning(format!(
                        "question {} option '{}' uses the reserved 'general' tag",
                        question.id, option.id
                    )));
                } else if !known.contains(tag) && reported_unknown.insert(*tag) {
                    issues.push(warning(format!(
                        "tag '{tag}' has no profile or role entry and will not affect results"
                    )));
                }
            }
        }
    }

    let mut statement_ids = HashSet::new();
    for statement in &catalog.skill_statements {
        if !statement_ids.insert(statement.id.as_str()) {
            issues.push(warning(format!("duplicate skill statement '{}'", statement.id)));
        }
    }

    let mut event_ids = HashSet::new();
    for event in &catalog.events {
        if !event_ids.insert(event.id.as_str()) {
            issues.push(warning(format!("duplicate event '{}'", event.id)));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::QuizOption;

    fn fatal_count(issues: &[CatalogIssue]) -> usize {
        issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Fatal)
            .count()
    }

    #[test]
    fn test_builtin_has_no_issues() {
        let issues = validate_catalog(&Catalog::builtin());
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_missing_general_is_fatal() {
        let mut catalog = Catalog::builtin();
        catalog.profiles.retain(|p| p.tag != Tag::General);
        let issues = validate_catalog(&catalog);
        assert_eq!(fatal_count(&issues), 1);
        assert!(issues[0].message.contains("general"));
    }

    #[test]
    fn test_empty_stage_is_fatal() {
        let mut catalog = Catalog::builtin();
        catalog.questions.retain(|q| q.stage == 1);
        let issues = validate_catalog(&catalog);
        assert!(issues
            .iter()
            .any(|i| i.severity == IssueSeverity::Fatal && i.message.contains("stage 2")));
    }

    #[test]
    fn test_duplicate_option_is_fatal() {
        let mut catalog = Catalog::builtin();
        let dup = catalog.questions[0].options[0].clone();
        catalog.questions[0].options.push(dup);
        assert_eq!(fatal_count(&validate_catalog(&catalog)), 1);
    }

    #[test]
    fn test_tag_count_and_dangling_tag_are_warnings() {
        let mut catalog = Catalog::builtin();
        catalog.roles.retain(|r| r.tag != Tag::Logistics);
        for profile in &mut catalog.profiles {
            profile.recommended_sectors.retain(|t| *t != Tag::Logistics);
        }
        catalog.questions[0].options.push(QuizOption {
            id: "z".to_string(),
            text: "Too many".to_string(),
            tags: vec![Tag::DigitalTech, Tag::Creative, Tag::Caring, Tag::Practical],
        });

        let issues = validate_catalog(&catalog);
        assert_eq!(fatal_count(&issues), 0);
        assert!(issues.iter().any(|i| i.message.contains("has 4 tags")));
        // reported once even though several options use it
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.message.contains("'logistics'"))
                .count(),
            1
        );
    }
}
