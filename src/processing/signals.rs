//! Contact and section detection
//!
//! Each signal is an independent predicate over the raw resume text so it
//! can be exercised on its own.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").unwrap()
});

/// Optional country code, optional parentheses, 3-3-4 digit grouping
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap()
});

static LINKEDIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)linkedin\.com").unwrap()
});

static GITHUB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)github\.com").unwrap()
});

static SUMMARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)summary|objective|profile").unwrap()
});

static EXPERIENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)experience|employment|work history").unwrap()
});

static EDUCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)education|academic|degree").unwrap()
});

static SKILLS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)skills|technical skills|competencies").unwrap()
});

static PROJECTS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)projects|portfolio").unwrap()
});

pub fn has_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    PHONE_PATTERN.is_match(text)
}

pub fn has_linkedin(text: &str) -> bool {
    LINKEDIN_PATTERN.is_match(text)
}

pub fn has_github(text: &str) -> bool {
    GITHUB_PATTERN.is_match(text)
}

pub fn has_summary_section(text: &str) -> bool {
    SUMMARY_PATTERN.is_match(text)
}

pub fn has_experience_section(text: &str) -> bool {
    EXPERIENCE_PATTERN.is_match(text)
}

pub fn has_education_section(text: &str) -> bool {
    EDUCATION_PATTERN.is_match(text)
}

pub fn has_skills_section(text: &str) -> bool {
    SKILLS_PATTERN.is_match(text)
}

pub fn has_projects_section(text: &str) -> bool {
    PROJECTS_PATTERN.is_match(text)
}

/// Contact details found in a resume
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSignals {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
    pub has_github: bool,
}

impl ContactSignals {
    pub fn detect(text: &str) -> Self {
        Self {
            has_email: has_email(text),
            has_phone: has_phone(text),
            has_linkedin: has_linkedin(text),
            has_github: has_github(text),
        }
    }

    pub fn present_count(&self) -> usize {
        [self.has_email, self.has_phone, self.has_linkedin, self.has_github]
            .iter()
            .filter(|present| **present)
            .count()
    }

    /// 25 points per detected contact signal
    pub fn format_score(&self) -> u8 {
        (self.present_count() * 25) as u8
    }
}

/// Standard resume sections found in a resume
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSignals {
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub projects: bool,
}

impl SectionSignals {
    pub const SECTION_COUNT: usize = 5;

    pub fn detect(text: &str) -> Self {
        Self {
            summary: has_summary_section(text),
            experience: has_experience_section(text),
            education: has_education_section(text),
            skills: has_skills_section(text),
            projects: has_projects_section(text),
        }
    }

    /// Section names paired with their presence, in report order
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("summary", self.summary),
            ("experience", self.experience),
            ("education", self.education),
            ("skills", self.skills),
            ("projects", self.projects),
        ]
    }

    pub fn present_count(&self) -> usize {
        self.entries().iter().filter(|(_, present)| *present).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_detection() {
        assert!(has_email("Contact: Jane.Doe+cv@Example.CO.uk"));
        assert!(!has_email("jane at example dot com"));
        assert!(!has_email("jane@localhost"));
        assert!(!has_email("jane@example.c"));
    }

    #[test]
    fn test_phone_detection() {
        assert!(has_phone("(555) 123-4567"));
        assert!(has_phone("+1 555.123.4567"));
        assert!(has_phone("5551234567"));
        assert!(!has_phone("555-1234"));
        assert!(!has_phone("no digits here"));
    }

    #[test]
    fn test_profile_links() {
        assert!(has_linkedin("LinkedIn.com/in/jane"));
        assert!(!has_linkedin("linkedin profile"));
        assert!(has_github("https://GITHUB.COM/jane"));
        assert!(!has_github("github user"));
    }

    #[test]
    fn test_section_predicates() {
        assert!(has_summary_section("Career Objective"));
        assert!(has_summary_section("PROFILE"));
        assert!(has_experience_section("Employment"));
        assert!(has_experience_section("work history"));
        assert!(has_education_section("B.Sc. degree"));
        assert!(has_skills_section("Core Competencies"));
        assert!(has_projects_section("Portfolio"));
        assert!(!has_projects_section("project"));
    }

    #[test]
    fn test_contact_format_score() {
        let none = ContactSignals::detect("");
        assert_eq!(none.format_score(), 0);

        let three = ContactSignals::detect("jane@example.com linkedin.com/in/jane github.com/jane");
        assert_eq!(three.present_count(), 3);
        assert!(!three.has_phone);
        assert_eq!(three.format_score(), 75);
    }

    #[test]
    fn test_section_count() {
        let signals = SectionSignals::detect("Summary\nExperience\nSkills");
        assert!(signals.summary && signals.experience && signals.skills);
        assert!(!signals.education && !signals.projects);
        assert_eq!(signals.present_count(), 3);
    }
}
