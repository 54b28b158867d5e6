//! Output formatters for score reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{capitalize, contact_entries, sub_scores, ScoreBand};
use crate::processing::scorer::ScoreReport;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::High => Color::Green,
        ScoreBand::Medium => Color::Yellow,
        ScoreBand::Low => Color::Red,
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score(&self, score: u8) -> String {
        let text = format!("{}%", score);
        if self.use_colors {
            text.color(band_color(ScoreBand::from_score(score))).bold().to_string()
        } else {
            text
        }
    }

    fn format_check(&self, label: &str, present: bool) -> String {
        if present {
            format!("  {} {}\n", self.colorize("✓", Color::Green), label)
        } else {
            format!("  {} {}\n", self.colorize("✗", Color::Red), label)
        }
    }

    fn format_terms(&self, title: &str, terms: &[String], color: Color) -> String {
        let mut output = format!("{} ({}):\n", title, terms.len());
        if terms.is_empty() {
            output.push_str("  (none)\n");
        } else {
            output.push_str(&format!("  {}\n", self.colorize(&terms.join(", "), color)));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();
        let band = ScoreBand::from_score(report.overall_score);

        output.push_str(&self.format_header(&format!("ATS SCORE: {}", report.role_name), 1));
        output.push_str(&format!(
            "Overall Score: {} out of 100\nStatus: {}\n",
            report.overall_score,
            self.colorize(band.status(), band_color(band))
        ));

        output.push_str(&self.format_header("Score Breakdown", 2));
        for (label, score) in sub_scores(report) {
            output.push_str(&format!("  {:<20} {}\n", label, self.format_score(score)));
        }

        output.push_str(&self.format_header("Keyword Analysis", 2));
        if self.detailed {
            output.push_str(&self.format_terms("Found keywords", &report.found_keywords, Color::Green));
            output.push_str(&self.format_terms("Missing keywords", &report.missing_keywords, Color::Red));
            output.push_str(&self.format_terms("Found skills", &report.found_skills, Color::Green));
            output.push_str(&self.format_terms("Missing skills", &report.missing_skills, Color::Red));
        } else {
            output.push_str(&format!(
                "  Keywords: {} found, {} missing\n  Skills: {} found, {} missing\n",
                report.found_keywords.len(),
                report.missing_keywords.len(),
                report.found_skills.len(),
                report.missing_skills.len()
            ));
        }

        output.push_str(&self.format_header("Resume Sections", 3));
        for (name, present) in report.sections.entries() {
            output.push_str(&self.format_check(&capitalize(name), present));
        }

        output.push_str(&self.format_header("Contact Information", 3));
        for (label, present) in contact_entries(report) {
            output.push_str(&self.format_check(label, present));
        }

        output.push_str(&self.format_header("Recommendations", 2));
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, rec));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    fn checkbox(present: bool) -> &'static str {
        if present {
            "[x]"
        } else {
            "[ ]"
        }
    }

    fn term_list(terms: &[String]) -> String {
        if terms.is_empty() {
            "_none_".to_string()
        } else {
            terms.iter().map(|t| format!("`{}`", t)).collect::<Vec<_>>().join(", ")
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut md = String::new();
        let band = ScoreBand::from_score(report.overall_score);

        md.push_str(&format!("# ATS Score: {}\n\n", report.role_name));
        md.push_str(&format!(
            "**Overall score:** {}/100 ({})\n\n",
            report.overall_score,
            band.status()
        ));

        md.push_str("## Score Breakdown\n\n| Component | Score |\n|---|---|\n");
        for (label, score) in sub_scores(report) {
            md.push_str(&format!("| {} | {}% |\n", label, score));
        }

        md.push_str("\n## Keywords\n\n");
        md.push_str(&format!("- Found ({}): {}\n", report.found_keywords.len(), Self::term_list(&report.found_keywords)));
        md.push_str(&format!("- Missing ({}): {}\n", report.missing_keywords.len(), Self::term_list(&report.missing_keywords)));

        md.push_str("\n## Skills\n\n");
        md.push_str(&format!("- Found: {}\n", Self::term_list(&report.found_skills)));
        md.push_str(&format!("- Missing: {}\n", Self::term_list(&report.missing_skills)));

        md.push_str("\n## Sections\n\n");
        for (name, present) in report.sections.entries() {
            md.push_str(&format!("- {} {}\n", Self::checkbox(present), capitalize(name)));
        }

        md.push_str("\n## Contact Information\n\n");
        for (label, present) in contact_entries(report) {
            md.push_str(&format!("- {} {}\n", Self::checkbox(present), label));
        }

        md.push_str("\n## Recommendations\n\n");
        for (i, rec) in report.recommendations.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, rec));
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn generate_report(&self, report: &ScoreReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Where to write a saved report: `save` itself, or a suggested file name
/// inside it when `save` is an existing directory
pub fn resolve_save_path(save: &Path, format: &OutputFormat, resume: &Path) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, &resume.to_string_lossy(), true))
    } else {
        save.to_path_buf()
    }
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ats{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ats{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_ats{}.md", base_name, timestamp_suffix),
    }
}
