//! Text extraction from various file formats

use crate::error::{AtsError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            AtsError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(markdown_to_text(&String::from_utf8_lossy(&bytes)))
    }
}

/// Collect the text content of a markdown document, one block per line.
///
/// Link targets are kept next to the link text so profile URLs stay visible.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::Start(Tag::Link(_, dest_url, _)) => {
                text.push_str(&dest_url);
                text.push(' ');
            }
            Event::SoftBreak | Event::HardBreak | Event::Rule => text.push('\n'),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_))
            | Event::End(Tag::TableCell) => text.push('\n'),
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace anything outside printable ASCII and newlines with a space,
/// then collapse whitespace runs.
pub fn sanitize_text(raw: &str) -> String {
    let printable: String = raw
        .chars()
        .map(|c| if c == '\n' || (' '..='~').contains(&c) { c } else { ' ' })
        .collect();

    printable.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_binary_and_collapses() {
        let raw = "Jane\u{0}\u{7}Doe\n\n  Data\tScientist \u{2022} Python";
        assert_eq!(sanitize_text(raw), "Jane Doe Data Scientist Python");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_text("\u{1}\u{2}  \n"), "");
    }

    #[test]
    fn test_markdown_to_text() {
        let text = markdown_to_text("## Skills\n\n- **Python** &amp; SQL\n- [GitHub](https://github.com/jane)");
        assert!(text.contains("Skills"));
        assert!(text.contains("Python"));
        assert!(text.contains("GitHub"));
        assert!(text.contains("https://github.com/jane"));
        assert!(text.contains("Python & SQL"));
        assert!(!text.contains("**"));
        assert!(!text.contains("##"));
    }

    #[test]
    fn test_markdown_keeps_angle_brackets_in_text() {
        let text = markdown_to_text("Skills: python < sql and pandas > numpy");
        assert_eq!(text, "Skills: python < sql and pandas > numpy");
    }

    #[test]
    fn test_markdown_keeps_inline_code() {
        let text = markdown_to_text("Used `<tensorflow>` and pytorch");
        assert_eq!(text, "Used <tensorflow> and pytorch");
    }
}
