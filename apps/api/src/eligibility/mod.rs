//! Eligibility checker: tests a person's circumstances against each regional
//! support programme's entry rules.
//!
//! Every failed rule is reported, not just the first, so the caller can show
//! the full picture for programmes the person just misses.

pub mod handlers;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_AGE: u8 = 14;
pub const MAX_AGE: u8 = 100;
pub const MAX_QUALIFICATION_LEVEL: u8 = 8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Unemployed,
    Employed,
    AtRiskOfRedundancy,
    InEducation,
}

impl EmploymentStatus {
    fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Unemployed => "unemployed",
            EmploymentStatus::Employed => "employed",
            EmploymentStatus::AtRiskOfRedundancy => "at risk of redundancy",
            EmploymentStatus::InEducation => "in education",
        }
    }
}

/// Entry rules for one support programme. `None` / empty means "no restriction".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Programme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub min_age: Option<u8>,
    pub max_age: Option<u8>,
    pub requires_residency: bool,
    pub requires_right_to_work: bool,
    #[serde(default)]
    pub statuses: Vec<EmploymentStatus>,
    pub min_months_out_of_work: Option<u32>,
    /// Highest qualification level a participant may already hold.
    pub max_qualification_level: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityRequest {
    pub age: u8,
    pub lives_in_region: bool,
    pub right_to_work: bool,
    pub employment_status: EmploymentStatus,
    #[serde(default)]
    pub months_out_of_work: u32,
    #[serde(default)]
    pub qualification_level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgrammeVerdict {
    pub programme_id: String,
    pub name: String,
    pub eligible: bool,
    pub reasons: Vec<String>, // empty when eligible
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityReport {
    pub eligible: bool,
    pub eligible_programmes: Vec<String>,
    pub programmes: Vec<ProgrammeVerdict>,
}

#[derive(Debug, Error, PartialEq)]
pub enum EligibilityError {
    #[error("age must be between 14 and 100, got {0}")]
    AgeOutOfRange(u8),

    #[error("qualification_level must be between 0 and 8, got {0}")]
    QualificationOutOfRange(u8),
}

pub fn check_eligibility(
    request: &EligibilityRequest,
    programmes: &[Programme],
) -> Result<EligibilityReport, EligibilityError> {
    if !(MIN_AGE..=MAX_AGE).contains(&request.age) {
        return Err(EligibilityError::AgeOutOfRange(request.age));
    }
    if request.qualification_level > MAX_QUALIFICATION_LEVEL {
        return Err(EligibilityError::QualificationOutOfRange(
            request.qualification_level,
        ));
    }

    let verdicts: Vec<ProgrammeVerdict> = programmes
        .iter()
        .map(|p| {
            let reasons = failed_rules(request, p);
            ProgrammeVerdict {
                programme_id: p.id.clone(),
                name: p.name.clone(),
                eligible: reasons.is_empty(),
                reasons,
            }
        })
        .collect();

    let eligible_programmes: Vec<String> = verdicts
        .iter()
        .filter(|v| v.eligible)
        .map(|v| v.programme_id.clone())
        .collect();

    Ok(EligibilityReport {
        eligible: !eligible_programmes.is_empty(),
        eligible_programmes,
        programmes: verdicts,
    })
}

fn failed_rules(request: &EligibilityRequest, programme: &Programme) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(min) = programme.min_age {
        if request.age < min {
            reasons.push(format!("Must be aged {min} or over"));
        }
    }
    if let Some(max) = programme.max_age {
        if request.age > max {
            reasons.push(format!("Must be aged {max} or under"));
        }
    }
    if programme.requires_residency && !request.lives_in_region {
        reasons.push("Must live in the region".to_string());
    }
    if programme.requires_right_to_work && !request.right_to_work {
        reasons.push("Must have the right to work in the UK".to_string());
    }
    if !programme.statuses.is_empty() && !programme.statuses.contains(&request.employment_status)
    {
        let allowed: Vec<&str> = programme.statuses.iter().map(|s| s.label()).collect();
        reasons.push(format!("Open to people who are {}", allowed.join(" or ")));
    }
    if let Some(months) = programme.min_months_out_of_work {
        if request.months_out_of_work < months {
            reasons.push(format!("Must have been out of work for at least {months} months"));
        }
    }
    if let Some(level) = programme.max_qualification_level {
        if request.qualification_level > level {
            reasons.push(format!(
                "For people without a qualification above level {level}"
            ));
        }
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn request(age: u8, status: EmploymentStatus) -> EligibilityRequest {
        EligibilityRequest {
            age,
            lives_in_region: true,
            right_to_work: true,
            employment_status: status,
            months_out_of_work: 0,
            qualification_level: 2,
        }
    }

    fn programme() -> Programme {
        Programme {
            id: "test".to_string(),
            name: "Test Programme".to_string(),
            description: String::new(),
            min_age: Some(18),
            max_age: Some(24),
            requires_residency: true,
            requires_right_to_work: true,
            statuses: vec![EmploymentStatus::Unemployed],
            min_months_out_of_work: Some(6),
            max_qualification_level: Some(3),
        }
    }

    #[test]
    fn test_all_rules_pass() {
        let mut req = request(20, EmploymentStatus::Unemployed);
        req.months_out_of_work = 7;
        let report = check_eligibility(&req, &[programme()]).unwrap();
        assert!(report.eligible);
        assert_eq!(report.eligible_programmes, vec!["test".to_string()]);
        assert!(report.programmes[0].reasons.is_empty());
    }

    #[test]
    fn test_every_failed_rule_is_reported() {
        let req = EligibilityRequest {
            age: 30,
            lives_in_region: false,
            right_to_work: false,
            employment_status: EmploymentStatus::Employed,
            months_out_of_work: 0,
            qualification_level: 6,
        };
        let report = check_eligibility(&req, &[programme()]).unwrap();
        assert!(!report.eligible);
        // max age, residency, right to work, status, months, qualification
        assert_eq!(report.programmes[0].reasons.len(), 6);
    }

    #[test]
    fn test_status_reason_lists_allowed_statuses() {
        let reasons = failed_rules(&request(20, EmploymentStatus::InEducation), &programme());
        assert!(reasons.iter().any(|r| r.contains("unemployed")));
    }

    #[test]
    fn test_empty_statuses_accepts_anyone() {
        let mut p = programme();
        p.statuses.clear();
        p.min_months_out_of_work = None;
        let report = check_eligibility(&request(20, EmploymentStatus::Employed), &[p]).unwrap();
        assert!(report.eligible);
    }

    #[test]
    fn test_age_validation() {
        let err = check_eligibility(&request(12, EmploymentStatus::InEducation), &[]).unwrap_err();
        assert_eq!(err, EligibilityError::AgeOutOfRange(12));
    }

    #[test]
    fn test_qualification_validation() {
        let mut req = request(30, EmploymentStatus::Employed);
        req.qualification_level = 9;
        let err = check_eligibility(&req, &[]).unwrap_err();
        assert_eq!(err, EligibilityError::QualificationOutOfRange(9));
    }

    #[test]
    fn test_builtin_young_unemployed_gets_youth_guarantee() {
        let catalog = Catalog::builtin();
        let report = check_eligibility(
            &request(19, EmploymentStatus::Unemployed),
            &catalog.programmes,
        )
        .unwrap();
        assert!(report
            .eligible_programmes
            .contains(&"youth-guarantee".to_string()));
        assert!(!report
            .eligible_programmes
            .contains(&"career-change".to_string()));
    }

    #[test]
    fn test_builtin_non_resident_is_not_eligible() {
        let catalog = Catalog::builtin();
        let mut req = request(30, EmploymentStatus::Employed);
        req.lives_in_region = false;
        let report = check_eligibility(&req, &catalog.programmes).unwrap();
        assert!(!report.eligible);
    }
}
