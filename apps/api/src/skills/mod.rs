//! Skills self-assessment: turns 1–5 ratings against fixed statements into
//! per-category scores, strengths, development areas and suggested sectors.

pub mod handlers;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::tags::Tag;
use crate::quiz::roles::dedup_preserving_order;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Communication,
    Teamwork,
    ProblemSolving,
    Digital,
    SelfManagement,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Communication,
        SkillCategory::Teamwork,
        SkillCategory::ProblemSolving,
        SkillCategory::Digital,
        SkillCategory::SelfManagement,
    ];

    /// Sectors where a strength in this category is most valued, best fit first.
    pub fn sectors(self) -> &'static [Tag] {
        match self {
            SkillCategory::Communication => &[Tag::Hospitality, Tag::Education, Tag::HealthCare],
            SkillCategory::Teamwork => &[Tag::HealthCare, Tag::Construction, Tag::Hospitality],
            SkillCategory::ProblemSolving => {
                &[Tag::Engineering, Tag::DigitalTech, Tag::BusinessFinance]
            }
            SkillCategory::Digital => {
                &[Tag::DigitalTech, Tag::CreativeMedia, Tag::BusinessFinance]
            }
            SkillCategory::SelfManagement => {
                &[Tag::Logistics, Tag::GreenEnergy, Tag::BusinessFinance]
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillStatement {
    pub id: String,
    pub category: SkillCategory,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub statement_id: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub ratings: Vec<Rating>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Strong,
    Developing,
    Emerging,
    NotAssessed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: SkillCategory,
    pub score: Option<u32>, // 0 – 100
    pub rated: usize,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub overall_score: Option<u32>,
    pub categories: Vec<CategoryScore>,
    pub strengths: Vec<SkillCategory>,
    pub development_areas: Vec<SkillCategory>,
    pub suggested_sectors: Vec<Tag>,
}

#[derive(Debug, Error, PartialEq)]
pub enum AssessmentError {
    #[error("no ratings supplied")]
    Empty,

    #[error("unknown statement '{0}'")]
    UnknownStatement(String),

    #[error("statement '{0}' rated more than once")]
    DuplicateRating(String),

    #[error("rating for '{id}' must be between 1 and 5, got {rating}")]
    RatingOutOfRange { id: String, rating: u8 },
}

const STRONG_THRESHOLD: u32 = 80;
const DEVELOPING_THRESHOLD: u32 = 50;

/// Scales a mean 1–5 rating onto 0–100.
fn scale(mean: f64) -> u32 {
    (((mean - 1.0) / 4.0) * 100.0).round().clamp(0.0, 100.0) as u32
}

fn level_for(score: u32) -> SkillLevel {
    match score {
        s if s >= STRONG_THRESHOLD => SkillLevel::Strong,
        s if s >= DEVELOPING_THRESHOLD => SkillLevel::Developing,
        _ => SkillLevel::Emerging,
    }
}

pub fn assess_skills(
    request: &AssessmentRequest,
    statements: &[SkillStatement],
) -> Result<AssessmentReport, AssessmentError> {
    if request.ratings.is_empty() {
        return Err(AssessmentError::Empty);
    }

    let mut seen = HashSet::new();
    let mut rated: Vec<(SkillCategory, u8)> = Vec::with_capacity(request.ratings.len());
    for r in &request.ratings {
        let statement = statements
            .iter()
            .find(|s| s.id == r.statement_id)
            .ok_or_else(|| AssessmentError::UnknownStatement(r.statement_id.clone()))?;
        if !(1..=5).contains(&r.rating) {
            return Err(AssessmentError::RatingOutOfRange {
                id: r.statement_id.clone(),
                rating: r.rating,
            });
        }
        if !seen.insert(r.statement_id.as_str()) {
            return Err(AssessmentError::DuplicateRating(r.statement_id.clone()));
        }
        rated.push((statement.category, r.rating));
    }

    let categories: Vec<CategoryScore> = SkillCategory::ALL
        .iter()
        .map(|&category| {
            let ratings: Vec<u8> = rated
                .iter()
                .filter(|(c, _)| *c == category)
                .map(|(_, r)| *r)
                .collect();
            if ratings.is_empty() {
                return CategoryScore {
                    category,
                    score: None,
                    rated: 0,
                    level: SkillLevel::NotAssessed,
                };
            }
            let mean = ratings.iter().map(|&r| r as f64).sum::<f64>() / ratings.len() as f64;
            let score = scale(mean);
            CategoryScore {
                category,
                score: Some(score),
                rated: ratings.len(),
                level: level_for(score),
            }
        })
        .collect();

    let overall_score = {
        let mean = rated.iter().map(|(_, r)| *r as f64).sum::<f64>() / rated.len() as f64;
        Some(scale(mean))
    };

    // Strongest first; sort is stable so equal scores keep category order.
    let mut strong: Vec<&CategoryScore> = categories
        .iter()
        .filter(|c| c.level == SkillLevel::Strong)
        .collect();
    strong.sort_by(|a, b| b.score.cmp(&a.score));

    let strengths: Vec<SkillCategory> = strong.iter().map(|c| c.category).collect();
    let development_areas: Vec<SkillCategory> = categories
        .iter()
        .filter(|c| c.level == SkillLevel::Emerging)
        .map(|c| c.category)
        .collect();
    let suggested_sectors = dedup_preserving_order(
        strengths
            .iter()
            .flat_map(|c| c.sectors().iter().copied()),
    );

    Ok(AssessmentReport {
        overall_score,
        categories,
        strengths,
        development_areas,
        suggested_sectors,
    })
}
