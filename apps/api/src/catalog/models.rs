use serde::{Deserialize, Serialize};

use crate::catalog::tags::Tag;

/// One multiple-choice quiz question. Stage 1 questions are asked first;
/// stage 2 refines the stage 1 result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    pub id: u32,
    pub stage: u8,
    pub text: String,
    pub options: Vec<QuizOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub tags: Vec<Tag>, // 1 – 3
}

impl QuizQuestion {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub tag: Tag,
    pub title: String,
    pub description: String,
    pub traits: Vec<String>,
    pub recommended_sectors: Vec<Tag>,
    pub careers: Vec<Career>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Career {
    pub title: String,
    pub description: String,
    pub salary_range: String,
    pub demand: DemandLevel,
    pub progression: Progression,
    pub local_opportunities: LocalOpportunities,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    VeryHigh,
    High,
    Growing,
    Steady,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Progression {
    pub entry: String,
    pub mid: String,
    pub senior: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocalOpportunities {
    pub employers: Vec<String>,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub description: String,
}

/// Roles associated with a single tag. Order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleEntry {
    pub tag: Tag,
    pub roles: Vec<String>,
}
