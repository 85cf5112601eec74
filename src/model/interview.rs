use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_SCORE;

/// Fixed skill taxonomy. Unknown tags deserialize to [`SkillCategory::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    DesignTools,
    ProgrammingLanguages,
    DataAnalytics,
    MachineLearning,
    SalesTools,
    ProjectManagement,
    DevelopmentTools,
    WebFrameworks,
    CloudPlatforms,
    Databases,
    Concepts,
    #[default]
    #[serde(other)]
    General,
}

impl SkillCategory {
    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::DesignTools => "design_tools",
            SkillCategory::ProgrammingLanguages => "programming_languages",
            SkillCategory::DataAnalytics => "data_analytics",
            SkillCategory::MachineLearning => "machine_learning",
            SkillCategory::SalesTools => "sales_tools",
            SkillCategory::ProjectManagement => "project_management",
            SkillCategory::DevelopmentTools => "development_tools",
            SkillCategory::WebFrameworks => "web_frameworks",
            SkillCategory::CloudPlatforms => "cloud_platforms",
            SkillCategory::Databases => "databases",
            SkillCategory::Concepts => "concepts",
            SkillCategory::General => "general",
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skill with an interview-assessed proficiency score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedSkill {
    /// Canonical token, e.g. `power_bi`.
    pub skill: String,
    pub display_name: String,
    /// Proficiency in `[0, 100]`. Read through [`VerifiedSkill::proficiency`].
    pub score: f64,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub category: SkillCategory,
}

impl VerifiedSkill {
    /// Score clamped to `[0, 100]`; non-finite values read as zero.
    #[inline]
    pub fn proficiency(&self) -> f64 {
        if self.score.is_finite() {
            self.score.clamp(0.0, MAX_SCORE as f64)
        } else {
            0.0
        }
    }

    /// Returns `true` if `token` (already lower-cased) names this skill directly.
    pub fn matches_directly(&self, token: &str) -> bool {
        let skill = self.skill.trim().to_lowercase();
        skill == token
            || skill.replace('_', " ") == token
            || self.display_name.trim().to_lowercase() == token
    }

    /// Returns `true` if any synonym contains `token` or is contained by it.
    pub fn matches_synonym(&self, token: &str) -> bool {
        self.synonyms.iter().any(|synonym| {
            let synonym = synonym.trim().to_lowercase();
            !synonym.is_empty() && (synonym.contains(token) || token.contains(synonym.as_str()))
        })
    }
}

/// Skills verified during an interview.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnhancedSkills {
    #[serde(default)]
    pub verified_skills: Vec<VerifiedSkill>,
    #[serde(default)]
    pub searchable_tags: Vec<String>,
}

impl EnhancedSkills {
    /// Record with `verified_skills` and no searchable tags.
    pub fn new(verified_skills: Vec<VerifiedSkill>) -> Self {
        Self {
            verified_skills,
            searchable_tags: Vec::new(),
        }
    }

    /// `true` when at least one verified skill is present.
    #[inline]
    pub fn has_verified_skills(&self) -> bool {
        !self.verified_skills.is_empty()
    }
}

/// Assessment attached to a candidate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,
    /// Assessed job family, free text.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub enhanced_skills: Option<EnhancedSkills>,
    #[serde(default)]
    pub competency_scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub matching_keywords: Vec<String>,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
    #[serde(default)]
    pub overall_rating: Option<f64>,
}

impl Interview {
    /// Role text, or `None` when missing or blank.
    pub fn role_text(&self) -> Option<&str> {
        self.role.as_deref().map(str::trim).filter(|r| !r.is_empty())
    }

    /// Verified skills in stored order.
    pub fn verified_skills(&self) -> &[VerifiedSkill] {
        self.enhanced_skills
            .as_ref()
            .map(|e| e.verified_skills.as_slice())
            .unwrap_or_default()
    }
}
