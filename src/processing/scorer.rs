//! Resume scoring against a role profile

use crate::error::Result;
use crate::processing::matcher::{match_terms, percentage};
use crate::processing::roles::{get_profile, RoleProfile};
use crate::processing::signals::{ContactSignals, SectionSignals};
use log::debug;
use serde::{Deserialize, Serialize};

pub const KEYWORD_WEIGHT: f64 = 0.35;
pub const SKILL_WEIGHT: f64 = 0.25;
pub const EXPERIENCE_WEIGHT: f64 = 0.20;
pub const FORMAT_WEIGHT: f64 = 0.10;
pub const SECTION_WEIGHT: f64 = 0.10;

/// Overall score below which a resume is considered poorly optimized
pub const LOW_SCORE_THRESHOLD: u8 = 60;
/// Overall score from which a resume is considered well optimized
pub const HIGH_SCORE_THRESHOLD: u8 = 80;

/// Keyword coverage (as numerator / denominator) under which extra keyword advice is given
const KEYWORD_ADVICE_RATIO: (usize, usize) = (3, 10);

pub const LOW_SCORE_MESSAGE: &str =
    "Your ATS score is low. Focus on incorporating more relevant keywords and skills.";
pub const MID_SCORE_MESSAGE: &str =
    "Good start! Add more role-specific keywords to improve your score.";
pub const HIGH_SCORE_MESSAGE: &str = "Excellent ATS score! Your resume is well-optimized.";
pub const ADD_SUMMARY_MESSAGE: &str =
    "Add a professional summary highlighting your key qualifications.";
pub const ADD_EXPERIENCE_MESSAGE: &str =
    "Include a clear experience section with quantifiable achievements.";
pub const ADD_SKILLS_MESSAGE: &str =
    "Add a dedicated technical skills section with relevant technologies.";
pub const ADD_PROJECTS_MESSAGE: &str = "Include projects showcasing your practical experience.";
pub const ADD_EMAIL_MESSAGE: &str = "Add your email address for contact purposes.";
pub const ADD_LINKEDIN_MESSAGE: &str = "Include your LinkedIn profile URL.";
pub const ADD_GITHUB_MESSAGE: &str = "Add your GitHub profile to showcase your code.";
pub const MORE_KEYWORDS_MESSAGE: &str =
    "Incorporate more job-specific keywords throughout your resume.";

/// Full result of scoring one resume against one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub role_id: String,
    pub role_name: String,
    pub overall_score: u8,
    pub keyword_score: u8,
    pub skill_score: u8,
    pub experience_score: u8,
    pub format_score: u8,
    pub section_score: u8,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub found_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub sections: SectionSignals,
    pub contact_info: ContactSignals,
    pub recommendations: Vec<String>,
}

/// Score `text` against the profile registered under `role_id`.
///
/// An unknown role is rejected before any matching happens.
pub fn analyze(text: &str, role_id: &str) -> Result<ScoreReport> {
    let profile = get_profile(role_id)?;
    Ok(analyze_with_profile(text, profile))
}

/// Score `text` against `profile`. Never fails; sparse or empty text just scores low.
pub fn analyze_with_profile(text: &str, profile: &RoleProfile) -> ScoreReport {
    let lower_text = text.to_lowercase();

    let keywords = match_terms(&lower_text, profile.keywords);
    let skills = match_terms(&lower_text, profile.skills);
    let experience = match_terms(&lower_text, profile.experience_phrases);

    let contact_info = ContactSignals::detect(text);
    let sections = SectionSignals::detect(text);

    let keyword_score = keywords.percentage();
    let skill_score = skills.percentage();
    let experience_score = experience.percentage();
    let format_score = contact_info.format_score();
    let section_score = percentage(sections.present_count(), SectionSignals::SECTION_COUNT);

    let overall_score = overall_score(
        keyword_score,
        skill_score,
        experience_score,
        format_score,
        section_score,
    );

    debug!(
        "Scored resume for {}: overall={} keyword={} skill={} experience={} format={} section={}",
        profile.id, overall_score, keyword_score, skill_score, experience_score, format_score, section_score
    );

    // The band follows the reported (rounded) overall score
    let recommendations = generate_recommendations(
        overall_score,
        &sections,
        &contact_info,
        keywords.below_ratio(KEYWORD_ADVICE_RATIO.0, KEYWORD_ADVICE_RATIO.1),
    );

    ScoreReport {
        role_id: profile.id.to_string(),
        role_name: profile.display_name.to_string(),
        overall_score,
        keyword_score,
        skill_score,
        experience_score,
        format_score,
        section_score,
        found_keywords: keywords.found,
        missing_keywords: keywords.missing,
        found_skills: skills.found,
        missing_skills: skills.missing,
        sections,
        contact_info,
        recommendations,
    }
}

/// Weighted combination of the five sub-scores, rounded to an integer
pub fn overall_score(keyword: u8, skill: u8, experience: u8, format: u8, section: u8) -> u8 {
    let weighted = f64::from(keyword) * KEYWORD_WEIGHT
        + f64::from(skill) * SKILL_WEIGHT
        + f64::from(experience) * EXPERIENCE_WEIGHT
        + f64::from(format) * FORMAT_WEIGHT
        + f64::from(section) * SECTION_WEIGHT;

    weighted.round().clamp(0.0, 100.0) as u8
}

pub(crate) fn generate_recommendations(
    overall_score: u8,
    sections: &SectionSignals,
    contact: &ContactSignals,
    few_keywords: bool,
) -> Vec<String> {
    let mut recs = Vec::new();

    if overall_score < LOW_SCORE_THRESHOLD {
        recs.push(LOW_SCORE_MESSAGE);
    } else if overall_score < HIGH_SCORE_THRESHOLD {
        recs.push(MID_SCORE_MESSAGE);
    } else {
        recs.push(HIGH_SCORE_MESSAGE);
    }

    // Education is intentionally not suggested
    if !sections.summary {
        recs.push(ADD_SUMMARY_MESSAGE);
    }
    if !sections.experience {
        recs.push(ADD_EXPERIENCE_MESSAGE);
    }
    if !sections.skills {
        recs.push(ADD_SKILLS_MESSAGE);
    }
    if !sections.projects {
        recs.push(ADD_PROJECTS_MESSAGE);
    }

    if !contact.has_email {
        recs.push(ADD_EMAIL_MESSAGE);
    }
    if !contact.has_linkedin {
        recs.push(ADD_LINKEDIN_MESSAGE);
    }
    if !contact.has_github {
        recs.push(ADD_GITHUB_MESSAGE);
    }

    if few_keywords {
        recs.push(MORE_KEYWORDS_MESSAGE);
    }

    recs.into_iter().map(String::from).collect()
}
