//! Profile matching: picks the profile whose recommended sectors best cover
//! the tags in a tally.
//!
//! Default: `OverlapMatcher` (count of distinct overlapping tags).
//! Alternative: `WeightedMatcher` (sum of tally counts of overlapping tags).
//!
//! `AppState` holds an `Arc<dyn ProfileMatcher>`, chosen at startup via config.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::models::Profile;
use crate::catalog::tags::Tag;
use crate::quiz::roles::dedup_preserving_order;
use crate::quiz::tally::Tally;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// How well one profile covers a tally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileScore {
    pub tag: Tag,
    /// Distinct tally tags found in the profile's recommended sectors.
    pub overlap: u32,
    /// Sum of the tally counts of those tags.
    pub weighted: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    Matched { profile: Tag, overlap: u32, weighted: u32 },
    /// Nothing in the tally points at any profile. Callers show `general`.
    Inconclusive,
}

impl MatchOutcome {
    pub fn profile_tag(&self) -> Tag {
        match self {
            MatchOutcome::Matched { profile, .. } => *profile,
            MatchOutcome::Inconclusive => Tag::General,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Ranking policy for profiles. Implementations only decide the ordering key;
/// scoring, the final tie-break and the fallback are shared.
///
/// Profiles rank by `rank_key` descending, then by `Tag` priority (declaration
/// order). The `general` profile never competes.
pub trait ProfileMatcher: Send + Sync {
    fn backend(&self) -> &'static str;

    fn rank_key(&self, score: &ProfileScore) -> (u32, u32);

    fn rank(&self, tally: &Tally, profiles: &[Profile]) -> Vec<ProfileScore> {
        let mut scores: Vec<ProfileScore> = profiles
            .iter()
            .filter(|p| p.tag != Tag::General)
            .map(|p| score_profile(tally, p))
            .collect();
        scores.sort_by(|a, b| compare(self, a, b));
        scores
    }

    fn select(&self, tally: &Tally, profiles: &[Profile]) -> MatchOutcome {
        if tally.is_empty() {
            return MatchOutcome::Inconclusive;
        }
        match self.rank(tally, profiles).first() {
            Some(best) if best.overlap > 0 => MatchOutcome::Matched {
                profile: best.tag,
                overlap: best.overlap,
                weighted: best.weighted,
            },
            _ => MatchOutcome::Inconclusive,
        }
    }
}

fn compare<M: ProfileMatcher + ?Sized>(
    matcher: &M,
    a: &ProfileScore,
    b: &ProfileScore,
) -> Ordering {
    matcher
        .rank_key(b)
        .cmp(&matcher.rank_key(a))
        .then_with(|| a.tag.cmp(&b.tag))
}

pub fn score_profile(tally: &Tally, profile: &Profile) -> ProfileScore {
    let (overlap, weighted) = dedup_preserving_order(profile.recommended_sectors.iter().copied())
        .into_iter()
        .map(|sector| tally.count(sector))
        .filter(|&count| count > 0)
        .fold((0, 0), |(o, w), count| (o + 1, w + count));
    ProfileScore {
        tag: profile.tag,
        overlap,
        weighted,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Implementations
// ────────────────────────────────────────────────────────────────────────────

/// Breadth first: how many of the user's tags a profile covers, then how
/// strongly.
pub struct OverlapMatcher;

impl ProfileMatcher for OverlapMatcher {
    fn backend(&self) -> &'static str {
        "overlap"
    }

    fn rank_key(&self, score: &ProfileScore) -> (u32, u32) {
        (score.overlap, score.weighted)
    }
}

/// Strength first: total answer weight behind a profile, then breadth.
pub struct WeightedMatcher;

impl ProfileMatcher for WeightedMatcher {
    fn backend(&self) -> &'static str {
        "weighted"
    }

    fn rank_key(&self, score: &ProfileScore) -> (u32, u32) {
        (score.weighted, score.overlap)
    }
}

/// Selects the best profile under `matcher`'s ranking policy.
pub fn select_best_profile(
    tally: &Tally,
    profiles: &[Profile],
    matcher: &dyn ProfileMatcher,
) -> MatchOutcome {
    matcher.select(tally, profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::quiz::tally::tally_tags;
    use Tag::*;

    fn profile(tag: Tag, sectors: &[Tag]) -> Profile {
        Profile {
            tag,
            title: tag.to_string(),
            description: String::new(),
            traits: vec![],
            recommended_sectors: sectors.to_vec(),
            careers: vec![],
            skills: vec![],
        }
    }

    fn scenario() -> Vec<Vec<Tag>> {
        vec![
            vec![DigitalTech, BusinessFinance],
            vec![DigitalTech],
            vec![CreativeMedia],
            vec![DigitalTech],
            vec![BusinessFinance],
        ]
    }

    #[test]
    fn test_score_counts_membership_not_raw_counts() {
        let tally = tally_tags(&scenario());
        let s = score_profile(&tally, &profile(Analytical, &[DigitalTech, Logistics]));
        assert_eq!(s.overlap, 1);
        assert_eq!(s.weighted, 3);
    }

    #[test]
    fn test_repeated_sector_counts_once() {
        let tally = tally_tags(&scenario());
        let s = score_profile(&tally, &profile(Analytical, &[DigitalTech, DigitalTech]));
        assert_eq!((s.overlap, s.weighted), (1, 3));
    }

    #[test]
    fn test_highest_overlap_wins() {
        let profiles = vec![
            profile(Caring, &[HealthCare]),
            profile(Creative, &[CreativeMedia, DigitalTech, BusinessFinance]),
            profile(Analytical, &[DigitalTech]),
        ];
        let outcome = select_best_profile(&tally_tags(&scenario()), &profiles, &OverlapMatcher);
        assert_eq!(
            outcome,
            MatchOutcome::Matched {
                profile: Creative,
                overlap: 3,
                weighted: 6
            }
        );
    }

    #[test]
    fn test_equal_overlap_broken_by_weight() {
        // Both cover two tags; DigitalTech (3) + BusinessFinance (2) beats
        // BusinessFinance (2) + CreativeMedia (1).
        let profiles = vec![
            profile(Caring, &[BusinessFinance, CreativeMedia]),
            profile(Organised, &[DigitalTech, BusinessFinance]),
        ];
        let outcome = select_best_profile(&tally_tags(&scenario()), &profiles, &OverlapMatcher);
        assert_eq!(outcome.profile_tag(), Organised);
    }

    #[test]
    fn test_full_tie_broken_by_tag_priority_not_table_order() {
        let a = profile(Organised, &[DigitalTech]);
        let b = profile(Analytical, &[DigitalTech]);
        let tally = tally_tags(&scenario());
        assert_eq!(
            select_best_profile(&tally, &[a.clone(), b.clone()], &OverlapMatcher).profile_tag(),
            Analytical
        );
        assert_eq!(select_best_profile(&tally, &[b, a], &OverlapMatcher).profile_tag(), Analytical);
    }

    #[test]
    fn test_empty_tally_is_inconclusive() {
        let empty: Vec<Vec<Tag>> = vec![];
        let profiles = Catalog::builtin().profiles;
        let outcome = select_best_profile(&tally_tags(&empty), &profiles, &OverlapMatcher);
        assert_eq!(outcome, MatchOutcome::Inconclusive);
        assert_eq!(outcome.profile_tag(), General);
    }

    #[test]
    fn test_zero_overlap_is_inconclusive() {
        let profiles = vec![profile(Caring, &[HealthCare])];
        let tally = tally_tags(&[vec![Logistics]]);
        assert_eq!(select_best_profile(&tally, &profiles, &OverlapMatcher), MatchOutcome::Inconclusive);
    }

    #[test]
    fn test_general_never_competes() {
        let profiles = vec![profile(General, &[Logistics]), profile(Practical, &[])];
        let tally = tally_tags(&[vec![Logistics]]);
        assert_eq!(select_best_profile(&tally, &profiles, &OverlapMatcher), MatchOutcome::Inconclusive);
        assert!(OverlapMatcher
            .rank(&tally, &profiles)
            .iter()
            .all(|s| s.tag != General));
    }

    #[test]
    fn test_deterministic_and_order_independent() {
        let profiles = Catalog::builtin().profiles;
        let mut reversed = scenario();
        reversed.reverse();
        let first = select_best_profile(&tally_tags(&scenario()), &profiles, &OverlapMatcher);
        for _ in 0..5 {
            assert_eq!(select_best_profile(&tally_tags(&scenario()), &profiles, &OverlapMatcher), first);
        }
        assert_eq!(select_best_profile(&tally_tags(&reversed), &profiles, &OverlapMatcher), first);
    }

    #[test]
    fn test_builtin_scenario_picks_problem_solver() {
        // Analytical and Organised both cover DigitalTech + BusinessFinance
        // (overlap 2, weight 5); Analytical has priority.
        let profiles = Catalog::builtin().profiles;
        let outcome = select_best_profile(&tally_tags(&scenario()), &profiles, &OverlapMatcher);
        assert_eq!(
            outcome,
            MatchOutcome::Matched {
                profile: Analytical,
                overlap: 2,
                weighted: 5
            }
        );
    }

    #[test]
    fn test_weighted_matcher_prefers_strength_over_breadth() {
        let profiles = vec![
            profile(Creative, &[BusinessFinance, CreativeMedia]), // overlap 2, weight 3
            profile(Analytical, &[DigitalTech]),                  // overlap 1, weight 3
            profile(Practical, &[DigitalTech, CreativeMedia]),    // overlap 2, weight 4
            profile(Caring, &[Logistics]),
        ];
        let tally = tally_tags(&scenario());
        assert_eq!(OverlapMatcher.select(&tally, &profiles).profile_tag(), Practical);

        let heavy = vec![
            profile(Creative, &[BusinessFinance, CreativeMedia]), // overlap 2, weight 2
            profile(Analytical, &[DigitalTech]),                  // overlap 1, weight 4
        ];
        let tally = tally_tags(&[
            vec![DigitalTech],
            vec![DigitalTech],
            vec![DigitalTech],
            vec![DigitalTech],
            vec![BusinessFinance, CreativeMedia],
        ]);
        assert_eq!(OverlapMatcher.select(&tally, &heavy).profile_tag(), Creative);
        assert_eq!(WeightedMatcher.select(&tally, &heavy).profile_tag(), Analytical);
    }

    #[test]
    fn test_rank_is_sorted() {
        let profiles = Catalog::builtin().profiles;
        let ranking = OverlapMatcher.rank(&tally_tags(&scenario()), &profiles);
        assert_eq!(ranking.len(), profiles.len() - 1);
        for pair in ranking.windows(2) {
            assert!(compare(&OverlapMatcher, &pair[0], &pair[1]) != Ordering::Greater);
        }
    }
}
