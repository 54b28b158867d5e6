//! Integration tests for the ATS analyzer

use ats_analyzer::error::AtsError;
use ats_analyzer::input::InputManager;
use ats_analyzer::processing::scorer::MID_SCORE_MESSAGE;
use ats_analyzer::analyze;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Professional Summary"));
    // whitespace is collapsed
    assert!(!text.contains('\n'));
    assert!(!text.contains("  "));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Large Language Models"));
    assert!(text.contains("github.com/janedoe"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_binary_noise_is_stripped() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/binary_noise.txt"))
        .await
        .unwrap();
    assert_eq!(text, "Summary python pandas");
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(AtsError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(AtsError::InvalidInput(_))));
}

#[tokio::test]
async fn test_oversized_file_rejected() {
    let mut manager = InputManager::new().with_cache(false).with_max_file_size(16);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(AtsError::InputTooLarge { limit: 16, .. })));
}

#[tokio::test]
async fn test_unreadable_pdf_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"this is not a pdf").unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_markdown_with_invalid_utf8_is_extracted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.md");
    std::fs::write(&path, b"# Summary\n\xff\xfe python and pandas\n").unwrap();

    let mut manager = InputManager::new();
    let text = manager.extract_text(&path).await.unwrap();
    assert!(text.contains("Summary"));
    assert!(text.contains("python and pandas"));
}

#[tokio::test]
async fn test_end_to_end_txt_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let report = analyze(&text, "data-scientist").unwrap();
    assert_eq!(report.keyword_score, 65);
    assert_eq!(report.skill_score, 57);
    assert_eq!(report.experience_score, 50);
    assert_eq!(report.format_score, 100);
    assert_eq!(report.section_score, 100);
    assert_eq!(report.overall_score, 67);
    assert_eq!(report.recommendations, vec![MID_SCORE_MESSAGE]);
    assert!(report.found_skills.iter().any(|s| s == "Statistical Analysis"));
    assert!(report.missing_skills.iter().any(|s| s == "Communication Skills"));
}

#[tokio::test]
async fn test_end_to_end_markdown_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let report = analyze(&text, "generative-ai").unwrap();
    assert_eq!(report.role_id, "generative-ai-engineer");
    assert!(report.contact_info.has_email);
    assert!(report.contact_info.has_github);
    assert!(!report.contact_info.has_linkedin);
    assert!(report.sections.summary && report.sections.experience && report.sections.skills);
    for kw in ["llm", "langchain", "prompt engineering", "rag", "vector database"] {
        assert!(report.found_keywords.iter().any(|k| k == kw), "missing {}", kw);
    }
}
