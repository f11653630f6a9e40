use serde::{Deserialize, Serialize};

use crate::catalog::tags::Tag;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagCount {
    pub tag: Tag,
    pub count: u32,
}

/// Tag frequencies for one quiz run, kept in first-seen order.
///
/// First-seen order is what breaks ties in `ranked` and `top_tags`, so two
/// runs with the same counts may rank equal tags differently. Profile
/// selection only looks at counts and is unaffected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Tally {
    counts: Vec<TagCount>,
}

impl Tally {
    pub fn count(&self, tag: Tag) -> u32 {
        self.counts
            .iter()
            .find(|c| c.tag == tag)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Distinct tags in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &TagCount> {
        self.counts.iter()
    }

    /// Tags by count descending; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<TagCount> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    pub fn top_tags(&self, n: usize) -> Vec<Tag> {
        self.ranked().into_iter().take(n).map(|c| c.tag).collect()
    }

    fn add(&mut self, tag: Tag) {
        match self.counts.iter_mut().find(|c| c.tag == tag) {
            Some(existing) => existing.count += 1,
            None => self.counts.push(TagCount { tag, count: 1 }),
        }
    }
}

/// Flattens every answer's tags into one multiset and counts them.
/// No answers (or answers without tags) yields an empty tally.
pub fn tally_tags<A: AsRef<[Tag]>>(answers: &[A]) -> Tally {
    let mut tally = Tally::default();
    for tag in answers.iter().flat_map(|a| a.as_ref().iter().copied()) {
        tally.add(tag);
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use Tag::*;

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
    fn test_five_answer_scenario() {
        let tally = tally_tags(&scenario());
        assert_eq!(tally.count(DigitalTech), 3);
        assert_eq!(tally.count(BusinessFinance), 2);
        assert_eq!(tally.count(CreativeMedia), 1);
        assert_eq!(tally.len(), 3);
        assert_eq!(
            tally.top_tags(3),
            vec![DigitalTech, BusinessFinance, CreativeMedia]
        );
    }

    #[test]
    fn test_every_seen_tag_counted_and_no_zero_counts() {
        let answers = scenario();
        let tally = tally_tags(&answers);
        for tag in answers.iter().flatten() {
            assert!(tally.count(*tag) > 0);
        }
        assert!(tally.iter().all(|c| c.count > 0));
        assert_eq!(tally.count(Logistics), 0);
        assert_eq!(tally.total(), 6);
    }

    #[test]
    fn test_empty_answers_give_empty_tally() {
        let none: Vec<Vec<Tag>> = vec![];
        assert!(tally_tags(&none).is_empty());

        let blank: Vec<Vec<Tag>> = vec![vec![], vec![]];
        assert!(tally_tags(&blank).is_empty());
        assert!(tally_tags(&blank).top_tags(3).is_empty());
    }

    #[test]
    fn test_counts_independent_of_answer_order() {
        let mut reversed = scenario();
        reversed.reverse();
        let (forward, backward) = (tally_tags(&scenario()), tally_tags(&reversed));
        for tag in Tag::ALL {
            assert_eq!(forward.count(tag), backward.count(tag));
        }
    }

    #[test]
    fn test_equal_counts_keep_first_seen_order() {
        let tally = tally_tags(&[vec![Caring], vec![Analytical], vec![Caring, Analytical]]);
        assert_eq!(tally.top_tags(2), vec![Caring, Analytical]);

        let tally = tally_tags(&[vec![Analytical], vec![Caring], vec![Caring, Analytical]]);
        assert_eq!(tally.top_tags(2), vec![Analytical, Caring]);
    }

    #[test]
    fn test_top_tags_truncates() {
        assert_eq!(tally_tags(&scenario()).top_tags(1), vec![DigitalTech]);
        assert_eq!(tally_tags(&scenario()).top_tags(10).len(), 3);
    }
}
