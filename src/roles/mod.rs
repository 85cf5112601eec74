//! Role-family normalization and compatibility gating.
//!
//! Free-text titles ("Full Stack Developer", "CAD technician") are folded into
//! canonical [`RoleCode`]s. Two codes are compatible when they are equal or when the
//! candidate code appears in the *job* code's compatibility set.
//!
//! # Directionality
//!
//! The compatibility relation is looked up from the job side only and is not
//! guaranteed to be symmetric: a `software_developer` job accepts
//! `backend_developer` candidates, but a `frontend_developer` job does not. Never
//! derive the inverse relation.


use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_COMPATIBLE_POINTS, ROLE_EXACT_POINTS};

const ROLE_MAPPINGS: &[(&str, &str)] = &[
    ("data analyst", "data_analyst"),
    ("business analyst", "business_analyst"),
    ("financial analyst", "financial_analyst"),
    ("data scientist", "data_scientist"),
    ("data engineer", "data_engineer"),
    ("software developer", "software_developer"),
    ("frontend developer", "frontend_developer"),
    ("backend developer", "backend_developer"),
    ("full stack developer", "software_developer"),
    ("project manager", "project_manager"),
    ("technical project manager", "technical_project_manager"),
    ("sales manager", "sales_manager"),
    ("sales executive", "sales_executive"),
    ("retail store manager", "retail_store_manager"),
    ("customer care representative", "customer_care_representative"),
    ("mechanical engineer", "mechanical_engineer"),
    ("design technician", "design_technician"),
    ("drafting technician", "design_technician"),
    ("cad technician", "design_technician"),
];

const ROLE_COMPATIBILITY: &[(&str, &[&str])] = &[
    ("data_analyst", &["data_analyst", "business_analyst"]),
    ("business_analyst", &["business_analyst", "data_analyst"]),
    ("design_technician", &["design_technician", "mechanical_engineer"]),
    ("mechanical_engineer", &["mechanical_engineer", "design_technician"]),
    ("sales_manager", &["sales_manager", "sales_executive"]),
    ("sales_executive", &["sales_executive", "sales_manager"]),
    (
        "software_developer",
        &["software_developer", "frontend_developer", "backend_developer"],
    ),
    ("frontend_developer", &["frontend_developer", "software_developer"]),
    ("backend_developer", &["backend_developer", "software_developer"]),
    ("project_manager", &["project_manager", "technical_project_manager"]),
    (
        "technical_project_manager",
        &["technical_project_manager", "project_manager"],
    ),
];

/// Canonical role-family code, e.g. `data_analyst`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleCode(String);

impl RoleCode {
    /// The code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Codes this job code accepts (including itself).
    pub fn compatibility_set(&self) -> Option<&'static [&'static str]> {
        ROLE_COMPATIBILITY
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, set)| *set)
    }
}

impl std::fmt::Display for RoleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps free-text role text to a [`RoleCode`].
///
/// Known titles resolve through the mapping table. Anything else is lower-cased
/// with runs of whitespace and hyphens collapsed to a single `_`. Returns `None`
/// only for blank input.
pub fn standardize(role_text: &str) -> Option<RoleCode> {
    let normalized = role_text.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    if let Some((_, code)) = ROLE_MAPPINGS.iter().find(|(text, _)| *text == normalized) {
        return Some(RoleCode((*code).to_string()));
    }

    Some(RoleCode(collapse_separators(&normalized)))
}

fn collapse_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_separator = false;
    for ch in text.chars() {
        if ch.is_whitespace() || ch == '-' {
            if !in_separator {
                out.push('_');
                in_separator = true;
            }
        } else {
            out.push(ch);
            in_separator = false;
        }
    }
    out
}

/// Returns `true` if a candidate with `candidate` code may be matched to a job with `job` code.
pub fn compatible(job: &RoleCode, candidate: &RoleCode) -> bool {
    if job == candidate {
        return true;
    }
    job.compatibility_set()
        .is_some_and(|set| set.contains(&candidate.as_str()))
}

/// Outcome of role gating for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleMatch {
    Exact,
    Compatible,
    Incompatible,
}

impl RoleMatch {
    /// Classifies a candidate code against a job code.
    pub fn resolve(job: &RoleCode, candidate: &RoleCode) -> Self {
        if job == candidate {
            RoleMatch::Exact
        } else if compatible(job, candidate) {
            RoleMatch::Compatible
        } else {
            RoleMatch::Incompatible
        }
    }

    /// Role points contributed to the final score.
    #[inline]
    pub fn points(&self) -> u32 {
        match self {
            RoleMatch::Exact => ROLE_EXACT_POINTS,
            RoleMatch::Compatible => ROLE_COMPATIBLE_POINTS,
            RoleMatch::Incompatible => 0,
        }
    }

    /// `true` for exact and compatible matches.
    #[inline]
    pub fn is_compatible(&self) -> bool {
        !matches!(self, RoleMatch::Incompatible)
    }
}
