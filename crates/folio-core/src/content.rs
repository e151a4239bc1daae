//! Content records fetched from the hosted store
//!
//! All records are read-only once loaded. Unknown columns are either ignored
//! or, where the record must keep its original shape, preserved in `extra`.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::error::Result;

/// Upper bound of the derived skill proficiency score
pub const PROFICIENCY_CAP: u8 = 90;

const YEAR_WEIGHT: u32 = 10;
const PROJECT_WEIGHT: u32 = 2;

/// Derived proficiency score: `min(years * 10 + projects * 2, 90)`
pub fn proficiency(years: u32, projects: u32) -> u8 {
    let score = years
        .saturating_mul(YEAR_WEIGHT)
        .saturating_add(projects.saturating_mul(PROJECT_WEIGHT));
    score.min(u32::from(PROFICIENCY_CAP)) as u8
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

/// A header navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavLink {
    /// Section anchor (`#about`) or external URL
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    /// Id of the in-page section this link targets, if it is an anchor
    pub fn section_id(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Skills
// ─────────────────────────────────────────────────────────────────────────────

/// A single skill inside a [`SkillGroup`].
///
/// The grouping key (`category`) is not part of the entry; every other column
/// of the source row is kept, unknown ones in `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub years: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub projects: u32,
    #[serde(default)]
    pub icon: Option<String>,
    /// Filled in once by [`SkillEntry::with_derived_proficiency`]
    #[serde(default)]
    pub proficiency: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>, years: u32, projects: u32) -> Self {
        Self {
            name: name.into(),
            years,
            projects,
            icon: None,
            proficiency: 0,
            extra: Map::new(),
        }
        .with_derived_proficiency()
    }

    pub fn with_derived_proficiency(mut self) -> Self {
        self.proficiency = proficiency(self.years, self.projects);
        self
    }
}

/// Skills sharing a category, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillEntry>,
}

impl SkillGroup {
    /// Tab label for well-known categories; unknown categories show their key
    pub fn label(&self) -> &str {
        match self.category.as_str() {
            "frontend" => "Frontend",
            "backend" => "Backend",
            "tools" => "Tools & Others",
            other => other,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.category.as_str() {
            "frontend" => "🎨",
            "backend" => "⚙️",
            "tools" => "🛠️",
            _ => "✨",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: BTreeSet<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
}

/// Projects sharing a category, used for the project tab filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCategory {
    pub category: String,
    pub projects: Vec<Project>,
}

/// Group projects by category, categories in first-seen order
pub fn group_projects_by_category(projects: &[Project]) -> Vec<ProjectCategory> {
    let mut groups: Vec<ProjectCategory> = Vec::new();
    for project in projects {
        match groups.iter_mut().find(|g| g.category == project.category) {
            Some(group) => group.projects.push(project.clone()),
            None => groups.push(ProjectCategory {
                category: project.category.clone(),
                projects: vec![project.clone()],
            }),
        }
    }
    groups
}

// ─────────────────────────────────────────────────────────────────────────────
// Pages and the About section
// ─────────────────────────────────────────────────────────────────────────────

/// A single record of the `pages` table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Page {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Page {
    /// Decode an extra JSON column (`stats`, `timeline`, ...) into a typed value.
    ///
    /// A missing or `null` column is `Ok(None)`; a column of the wrong shape
    /// is an error.
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.extra.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalStats {
    pub coding_years: String,
    pub projects_completed: u32,
    pub languages_learned: u32,
    pub certifications: u32,
    pub github_commits: u32,
    pub lines_of_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimelineItem {
    pub year: String,
    pub title: String,
    pub description: String,
    /// `work`, `education`, ... used as a CSS modifier
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub avatar: String,
}

impl Testimonial {
    /// Rating clamped to the five-star scale
    pub fn stars(&self) -> u8 {
        self.rating.min(5)
    }
}

/// Format an integer with `,` thousands separators (`12345` → `12,345`)
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Lenient column decoding
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrText {
    Num(f64),
    Text(String),
}

/// Accept `5`, `5.0`, `"5"` and `"5+"` as 5; `null` counts as 0
fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    let Some(value) = Option::<NumOrText>::deserialize(deserializer)? else {
        return Ok(0);
    };
    match value {
        NumOrText::Num(n) if n.is_finite() && n >= 0.0 => Ok(n as u32),
        NumOrText::Num(n) => Err(D::Error::custom(format!("expected a non-negative number, got {n}"))),
        NumOrText::Text(s) => {
            let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
            digits
                .parse()
                .map_err(|_| D::Error::custom(format!("expected a number, got {s:?}")))
        }
    }
}

/// Accept numeric and textual ids alike
fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    match NumOrText::deserialize(deserializer)? {
        NumOrText::Num(n) if n.fract() == 0.0 => Ok(format!("{}", n as i64)),
        NumOrText::Num(n) => Ok(n.to_string()),
        NumOrText::Text(s) => Ok(s),
    }
}
