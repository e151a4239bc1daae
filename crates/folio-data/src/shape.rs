//! Reshaping raw rows for presentation

use folio_core::prelude::*;
use folio_core::{SkillEntry, SkillGroup};
use serde_json::Value;

/// Display order of skill categories. Categories listed here but absent from
/// the data are dropped; unlisted categories follow in first-seen order.
pub const CATEGORY_PRIORITY: &[&str] = &["frontend", "backend", "tools"];

/// Grouping key column
const CATEGORY_COLUMN: &str = "category";

/// Category for rows without one
const FALLBACK_CATEGORY: &str = "other";

/// Group skill rows by their `category` column.
///
/// Rows keep their relative order inside a group and every column except
/// `category`. Proficiency is derived once here. A row that does not decode
/// is skipped with a warning; the rest of the section still renders.
pub fn group_skills(rows: Vec<Value>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for row in rows {
        let Value::Object(mut fields) = row else {
            warn!("Skipping non-object skill row");
            continue;
        };

        let category = match fields.remove(CATEGORY_COLUMN) {
            Some(Value::String(c)) if !c.trim().is_empty() => c,
            _ => FALLBACK_CATEGORY.to_string(),
        };

        let entry = match serde_json::from_value::<SkillEntry>(Value::Object(fields)) {
            Ok(entry) => entry.with_derived_proficiency(),
            Err(e) => {
                warn!("Skipping malformed skill row in '{}': {}", category, e);
                continue;
            }
        };

        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(entry),
            None => groups.push(SkillGroup {
                category,
                skills: vec![entry],
            }),
        }
    }

    order_by_priority(groups)
}

fn order_by_priority(mut groups: Vec<SkillGroup>) -> Vec<SkillGroup> {
    let mut ordered = Vec::with_capacity(groups.len());
    for key in CATEGORY_PRIORITY {
        if let Some(pos) = groups.iter().position(|g| g.category == *key) {
            ordered.push(groups.remove(pos));
        }
    }
    ordered.extend(groups);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn categories(groups: &[SkillGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.category.as_str()).collect()
    }

    #[test]
    fn test_groups_follow_priority_order() {
        let rows = vec![
            json!({"name": "Docker", "category": "tools", "years": 3, "projects": 5}),
            json!({"name": "Rust", "category": "backend", "years": 5, "projects": 10}),
            json!({"name": "CSS", "category": "frontend", "years": 7, "projects": 30}),
            json!({"name": "Axum", "category": "backend", "years": 2, "projects": 4}),
        ];

        let groups = group_skills(rows);

        assert_eq!(categories(&groups), vec!["frontend", "backend", "tools"]);
        let backend: Vec<_> = groups[1].skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(backend, vec!["Rust", "Axum"]);
    }

    #[test]
    fn test_absent_priority_categories_are_dropped() {
        let rows = vec![json!({"name": "Git", "category": "tools", "years": 6, "projects": 50})];

        let groups = group_skills(rows);

        assert_eq!(categories(&groups), vec!["tools"]);
    }

    #[test]
    fn test_unlisted_categories_follow_in_first_seen_order() {
        let rows = vec![
            json!({"name": "Figma", "category": "design"}),
            json!({"name": "Rust", "category": "backend"}),
            json!({"name": "K8s", "category": "devops"}),
            json!({"name": "Sketch", "category": "design"}),
        ];

        let groups = group_skills(rows);

        assert_eq!(categories(&groups), vec!["backend", "design", "devops"]);
        assert_eq!(groups[1].skills.len(), 2);
    }

    #[test]
    fn test_grouping_key_is_removed_and_other_fields_kept() {
        let rows = vec![json!({
            "id": 11,
            "name": "Rust",
            "category": "backend",
            "years": 5,
            "projects": 10,
            "icon": "🦀",
            "order": 1
        })];

        let groups = group_skills(rows);
        let skill = &groups[0].skills[0];

        assert_eq!(skill.proficiency, 70);
        assert_eq!(skill.icon.as_deref(), Some("🦀"));
        assert_eq!(skill.extra.get("id"), Some(&json!(11)));
        assert_eq!(skill.extra.get("order"), Some(&json!(1)));
        assert!(!skill.extra.contains_key("category"));

        let serialized = serde_json::to_value(skill).unwrap();
        assert!(serialized.get("category").is_none());
    }

    #[test]
    fn test_missing_category_goes_to_other() {
        let rows = vec![json!({"name": "Writing", "category": null})];
        let groups = group_skills(rows);
        assert_eq!(categories(&groups), vec!["other"]);
    }

    #[test]
    fn test_null_numbers_do_not_blank_the_section() {
        let rows = vec![
            json!({"name": "CSS", "category": "frontend", "years": 7}),
            json!({"name": "Rust", "category": "backend", "years": null, "projects": null}),
        ];

        let groups = group_skills(rows);

        assert_eq!(categories(&groups), vec!["frontend", "backend"]);
        let rust = &groups[1].skills[0];
        assert_eq!(rust.years, 0);
        assert_eq!(rust.projects, 0);
    }

    #[test]
    fn test_malformed_row_is_skipped() {
        let rows = vec![
            json!({"category": "backend", "years": 2}),
            json!({"name": "Rust", "category": "backend", "years": 5, "projects": 10}),
            json!({"name": "Vue", "category": "frontend", "years": "many"}),
        ];

        let groups = group_skills(rows);

        assert_eq!(categories(&groups), vec!["backend"]);
        assert_eq!(groups[0].skills.len(), 1);
        assert_eq!(groups[0].skills[0].name, "Rust");
    }

    #[test]
    fn test_empty_input() {
        assert!(group_skills(Vec::new()).is_empty());
    }
}
