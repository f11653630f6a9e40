use std::collections::HashSet;
use std::hash::Hash;

use crate::catalog::models::RoleEntry;
use crate::catalog::tags::Tag;

/// Removes repeats, keeping the first occurrence of each item in place.
pub fn dedup_preserving_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Concatenates the role lists of `top_tags` in order and drops repeats.
/// Tags without a role entry contribute nothing.
pub fn select_roles(top_tags: &[Tag], role_table: &[RoleEntry]) -> Vec<String> {
    dedup_preserving_order(top_tags.iter().flat_map(|tag| {
        role_table
            .iter()
            .filter(move |entry| entry.tag == *tag)
            .flat_map(|entry| entry.roles.iter().cloned())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn entry(tag: Tag, roles: &[&str]) -> RoleEntry {
        RoleEntry {
            tag,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        assert_eq!(dedup_preserving_order(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_concatenates_in_tag_order() {
        let table = vec![
            entry(Tag::HealthCare, &["Nurse"]),
            entry(Tag::DigitalTech, &["Developer", "Tester"]),
        ];
        assert_eq!(
            select_roles(&[Tag::DigitalTech, Tag::HealthCare], &table),
            vec!["Developer", "Tester", "Nurse"]
        );
    }

    #[test]
    fn test_shared_roles_appear_once_at_first_position() {
        let table = vec![
            entry(Tag::DigitalTech, &["Developer", "Data Analyst"]),
            entry(Tag::BusinessFinance, &["Data Analyst", "Accountant"]),
        ];
        let roles = select_roles(&[Tag::BusinessFinance, Tag::DigitalTech], &table);
        assert_eq!(roles, vec!["Data Analyst", "Accountant", "Developer"]);
    }

    #[test]
    fn test_missing_tag_contributes_nothing() {
        let table = vec![entry(Tag::DigitalTech, &["Developer"])];
        assert_eq!(
            select_roles(&[Tag::Analytical, Tag::DigitalTech], &table),
            vec!["Developer"]
        );
        assert!(select_roles(&[Tag::Caring], &table).is_empty());
        assert!(select_roles(&[], &table).is_empty());
    }

    #[test]
    fn test_builtin_scenario_roles_have_no_duplicates() {
        let catalog = Catalog::builtin();
        let roles = select_roles(
            &[Tag::DigitalTech, Tag::BusinessFinance, Tag::CreativeMedia],
            &catalog.roles,
        );
        let unique: HashSet<&String> = roles.iter().collect();
        assert_eq!(unique.len(), roles.len());
        assert_eq!(roles[0], "Software Developer");
        // "Data Analyst" is listed under both sectors but only once here
        assert_eq!(roles.iter().filter(|r| *r == "Data Analyst").count(), 1);
        assert_eq!(roles.len(), 11);
    }
}
