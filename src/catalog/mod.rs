//! Static skill tables: categories, synonyms and the legacy competency mapping.
//!
//! Also hosts [`EnhancedSkills::from_legacy`], which upgrades an interview that only
//! carries legacy keyword fields into verified skills. The skill chain never calls
//! the upgrade on its own; callers opt in when they materialize interviews.


use std::collections::HashSet;

use crate::constants::MAX_SCORE;
use crate::model::{EnhancedSkills, Interview, SkillCategory, VerifiedSkill, normalize_token};

/// Competency key that the legacy skill table maps into.
pub const TECHNICAL_SKILLS: &str = "technical_skills";

const SKILL_CATEGORIES: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::DesignTools,
        &["autocad", "solidworks", "revit", "inventor", "catia", "creo", "bim"],
    ),
    (
        SkillCategory::ProgrammingLanguages,
        &["python", "javascript", "java", "sql", "r", "matlab", "c++", "c#"],
    ),
    (
        SkillCategory::DataAnalytics,
        &["tableau", "power bi", "excel", "pandas", "numpy", "matplotlib", "spss"],
    ),
    (
        SkillCategory::MachineLearning,
        &["scikit-learn", "tensorflow", "pytorch", "keras", "xgboost"],
    ),
    (
        SkillCategory::SalesTools,
        &["salesforce", "hubspot", "linkedin sales navigator", "crm"],
    ),
    (
        SkillCategory::ProjectManagement,
        &["jira", "confluence", "asana", "microsoft project", "gantt charts"],
    ),
    (
        SkillCategory::DevelopmentTools,
        &["git", "docker", "kubernetes", "jenkins", "vs code"],
    ),
    (
        SkillCategory::WebFrameworks,
        &["react", "angular", "vue", "nodejs", "express", "django"],
    ),
    (SkillCategory::CloudPlatforms, &["aws", "azure", "gcp", "heroku"]),
    (
        SkillCategory::Databases,
        &["mysql", "postgresql", "mongodb", "redis", "oracle"],
    ),
];

const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "autocad",
        &["cad", "computer aided design", "2d design", "3d modeling", "technical drawing"],
    ),
    (
        "solidworks",
        &["solid works", "3d modeling", "parametric design", "mechanical design"],
    ),
    (
        "revit",
        &["bim", "building information modeling", "architectural design"],
    ),
    (
        "python",
        &["python programming", "py", "python3", "python development"],
    ),
    ("javascript", &["js", "ecmascript", "javascript programming"]),
    (
        "sql",
        &["structured query language", "database querying", "data querying"],
    ),
    (
        "tableau",
        &["data visualization", "business intelligence", "dashboard creation"],
    ),
    (
        "power bi",
        &["powerbi", "microsoft power bi", "business intelligence"],
    ),
    (
        "excel",
        &["microsoft excel", "spreadsheet analysis", "data analysis"],
    ),
    (
        "salesforce",
        &["sfdc", "crm", "customer relationship management"],
    ),
    ("react", &["reactjs", "frontend framework", "javascript framework"]),
    ("git", &["version control", "source control", "github", "gitlab"]),
];

const SKILL_TO_COMPETENCY: &[(&str, &str)] = &[
    ("python", TECHNICAL_SKILLS),
    ("sql", TECHNICAL_SKILLS),
    ("excel", TECHNICAL_SKILLS),
    ("tableau", TECHNICAL_SKILLS),
    ("power bi", TECHNICAL_SKILLS),
    ("autocad", TECHNICAL_SKILLS),
    ("solidworks", TECHNICAL_SKILLS),
    ("revit", TECHNICAL_SKILLS),
    ("salesforce", TECHNICAL_SKILLS),
    ("jira", TECHNICAL_SKILLS),
    ("javascript", TECHNICAL_SKILLS),
    ("react", TECHNICAL_SKILLS),
];

/// Places a skill in the fixed taxonomy.
///
/// Exact table hits win; otherwise the first category with a member that contains
/// (or is contained by) the skill is used. Members shorter than
/// [`MIN_FUZZY_MEMBER_LEN`] (`r`, `c#`) only match exactly. Everything else is
/// `general`.
pub fn categorize(skill: &str) -> SkillCategory {
    let skill = normalize_token(skill);
    if skill.is_empty() {
        return SkillCategory::General;
    }

    if let Some((category, _)) = SKILL_CATEGORIES
        .iter()
        .find(|(_, members)| members.contains(&skill.as_str()))
    {
        return *category;
    }

    SKILL_CATEGORIES
        .iter()
        .find(|(_, members)| {
            members.iter().any(|m| {
                m.len() >= MIN_FUZZY_MEMBER_LEN && (skill.contains(m) || m.contains(skill.as_str()))
            })
        })
        .map(|(category, _)| *category)
        .unwrap_or_default()
}

/// Shortest category member that takes part in substring matching.
pub const MIN_FUZZY_MEMBER_LEN: usize = 3;

/// Static synonym list for a skill (empty if unknown).
pub fn synonyms_for(skill: &str) -> &'static [&'static str] {
    let skill = normalize_token(skill);
    SKILL_SYNONYMS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or_default()
}

/// Competency category the legacy matcher scales for `skill`, if any.
pub fn competency_for(skill: &str) -> Option<&'static str> {
    SKILL_TO_COMPETENCY
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, competency)| *competency)
}

const LEGACY_KEYWORD_BASE: i64 = 75;
const LEGACY_KEYWORD_STEP: i64 = 3;
const LEGACY_KEYWORD_PIVOT: i64 = 5;
const LEGACY_IMPROVEMENT_SCORE: f64 = 50.0;

impl EnhancedSkills {
    /// Builds verified skills from an interview's legacy keyword fields.
    ///
    /// Keywords earlier in the list score higher. When the interview has a positive
    /// `technical_skills` competency, categorized keywords are averaged with it.
    /// Improvement areas that are not also keywords score a flat 50.
    pub fn from_legacy(interview: &Interview) -> Self {
        let technical = interview
            .competency_scores
            .get(TECHNICAL_SKILLS)
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0);

        let mut verified_skills = Vec::new();

        for (index, keyword) in interview.matching_keywords.iter().enumerate() {
            let name = normalize_token(keyword);
            if name.is_empty() {
                continue;
            }
            let category = categorize(&name);

            let position = i64::try_from(index).unwrap_or(i64::MAX / 2);
            let mut estimated =
                (LEGACY_KEYWORD_BASE + (LEGACY_KEYWORD_PIVOT - position) * LEGACY_KEYWORD_STEP)
                    .max(0) as f64;
            if let Some(technical) = technical
                && category != SkillCategory::General
            {
                estimated = ((estimated + technical) / 2.0).round();
            }

            verified_skills.push(VerifiedSkill {
                skill: name.replace(' ', "_"),
                display_name: keyword.trim().to_string(),
                score: estimated.min(MAX_SCORE as f64),
                synonyms: owned(synonyms_for(&name)),
                category,
            });
        }

        for area in &interview.areas_for_improvement {
            if interview.matching_keywords.contains(area) {
                continue;
            }
            let name = normalize_token(area);
            if name.is_empty() {
                continue;
            }
            verified_skills.push(VerifiedSkill {
                skill: name.replace(' ', "_"),
                display_name: area.trim().to_string(),
                score: LEGACY_IMPROVEMENT_SCORE,
                synonyms: owned(synonyms_for(&name)),
                category: categorize(&name),
            });
        }

        let searchable_tags = searchable_tags(&verified_skills);
        Self {
            verified_skills,
            searchable_tags,
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn searchable_tags(skills: &[VerifiedSkill]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    let mut push = |tag: String| {
        if seen.insert(tag.clone()) {
            tags.push(tag);
        }
    };

    for skill in skills {
        push(skill.skill.clone());
        push(skill.display_name.to_lowercase().replace(' ', "_"));
        for synonym in &skill.synonyms {
            push(synonym.replace(' ', "_"));
        }
        push(format!("category_{}", skill.category));
    }

    tags
}
