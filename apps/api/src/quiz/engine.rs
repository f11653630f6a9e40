//! Career-matching pipeline: tally → top tags → best profile → roles.
//!
//! Every call recomputes from the answers it is given. Stage 2 results are
//! produced by passing the combined stage 1 + stage 2 answers, never by
//! adjusting a stage 1 result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::models::Profile;
use crate::catalog::tags::Tag;
use crate::catalog::Catalog;
use crate::quiz::matching::{select_best_profile, MatchOutcome, ProfileMatcher, ProfileScore};
use crate::quiz::roles::select_roles;
use crate::quiz::tally::{tally_tags, Tally};

pub const DEFAULT_TOP_TAGS: usize = 3;
pub const MAX_TOP_TAGS: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultStage {
    Intermediate,
    Final,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub stage: ResultStage,
    pub answered: usize,
    pub tally: Tally,
    pub top_tags: Vec<Tag>,
    pub outcome: MatchOutcome,
    pub profile: Profile,
    pub roles: Vec<String>,
    pub ranking: Vec<ProfileScore>,
    pub matcher_backend: String, // "overlap" | "weighted"
}

pub fn evaluate<A: AsRef<[Tag]>>(
    answers: &[A],
    catalog: &Catalog,
    matcher: &dyn ProfileMatcher,
    top_n: usize,
    stage: ResultStage,
) -> QuizResult {
    let tally = tally_tags(answers);
    let top_tags = tally.top_tags(top_n);
    let outcome = select_best_profile(&tally, &catalog.profiles, matcher);
    let ranking = matcher.rank(&tally, &catalog.profiles);

    let profile = catalog
        .profile(outcome.profile_tag())
        .or_else(|| catalog.general_profile())
        .cloned()
        .unwrap_or_else(placeholder_general);

    let roles = select_roles(&top_tags, &catalog.roles);

    debug!(
        "Evaluated {:?} quiz result: {} answers, {} tags ({} distinct), top tags {:?}, outcome {:?}",
        stage,
        answers.len(),
        tally.total(),
        tally.len(),
        top_tags,
        outcome
    );

    QuizResult {
        stage,
        answered: answers.len(),
        tally,
        top_tags,
        outcome,
        profile,
        roles,
        ranking,
        matcher_backend: matcher.backend().to_string(),
    }
}

/// Used only when a catalog somehow lacks its `general` profile; loading
/// rejects such catalogs, so this keeps the engine total rather than fallible.
fn placeholder_general() -> Profile {
    Profile {
        tag: Tag::General,
        title: "The Explorer".to_string(),
        description: "Talk to a careers adviser to explore your options.".to_string(),
        traits: vec![],
        recommended_sectors: vec![],
        careers: vec![],
        skills: vec![],
    }
}
