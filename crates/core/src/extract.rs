//! Readable-text extraction from article HTML.
//!
//! The target sites wrap their articles in an `entry-title` heading and a
//! `td-post-content` body container. Extraction walks the body's headings,
//! paragraphs, and lists in document order and renders them as plain text,
//! skipping anything nested under a footer. The rendered form is exactly
//! what gets written to disk and later re-read by the analyzer.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::{MetiorError, Result};

/// Selector for the article title heading.
const TITLE_SELECTOR: &str = "h1.entry-title";

/// Selector for the article body container.
const BODY_SELECTOR: &str = "div.td-post-content";

/// Block elements rendered into the article text, in document order.
const BLOCK_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, ul, ol";

/// Title used when the page carries none.
const MISSING_TITLE: &str = "No Title Found";

/// The readable parts of one article page.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedArticle {
    /// Article title, or `"No Title Found"`.
    pub title: String,
    /// Rendered body text; empty when the page has no recognizable body.
    pub body: String,
}

impl ExtractedArticle {
    /// Renders the on-disk article format the analyzer reads back.
    pub fn to_text(&self) -> String {
        format!("Title: {}\n\n{}", self.title, self.body)
    }
}

/// Extracts the readable article from an HTML page.
///
/// A page without a body container yields an empty body and a warning,
/// not an error; the caller still gets a file with the title line.
pub fn extract_article(html: &str) -> Result<ExtractedArticle> {
    let document = Html::parse_document(html);

    let title_sel = selector(TITLE_SELECTOR)?;
    let title = document
        .select(&title_sel)
        .next()
        .map(|el| collect_text(&el))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| MISSING_TITLE.to_string());

    let body_sel = selector(BODY_SELECTOR)?;
    let body = match document.select(&body_sel).next() {
        Some(container) => render_blocks(&container)?,
        None => {
            warn!("no article content found");
            String::new()
        }
    };

    Ok(ExtractedArticle { title, body })
}

/// Walks the body container's block elements and renders them as text.
fn render_blocks(container: &ElementRef<'_>) -> Result<String> {
    let block_sel = selector(BLOCK_SELECTOR)?;
    let item_sel = selector("li")?;

    let mut text = String::new();
    for element in container.select(&block_sel) {
        if inside_footer(&element) {
            continue;
        }

        match element.value().name() {
            "p" => {
                let content = collect_text(&element);
                if !content.is_empty() {
                    text.push_str(&content);
                    text.push('\n');
                }
            }
            "ul" | "ol" => {
                for item in element.select(&item_sel) {
                    let content = collect_text(&item);
                    if !content.is_empty() {
                        text.push_str(&format!("  - {}\n", content));
                    }
                }
            }
            // h1..h6
            _ => {
                let content = collect_text(&element);
                if !content.is_empty() {
                    text.push_str(&format!("\n\n{}\n", content));
                }
            }
        }
    }

    Ok(text)
}

/// Whether an element sits under a footer, which never holds article text.
fn inside_footer(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "footer")
}

fn collect_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| MetiorError::HtmlParseError(format!("Invalid selector: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_HTML: &str = r#"
        <html><body>
            <h1 class="entry-title">Rust in Production</h1>
            <div class="td-post-content">
                <p>First paragraph of the article.</p>
                <h2>Details</h2>
                <p>Second paragraph.</p>
                <ul>
                    <li>point one</li>
                    <li>point two</li>
                </ul>
                <footer><p>share buttons</p></footer>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_extract_article_title_and_body() {
        let article = extract_article(ARTICLE_HTML).unwrap();
        assert_eq!(article.title, "Rust in Production");
        assert!(article.body.contains("First paragraph of the article.\n"));
        assert!(article.body.contains("\n\nDetails\n"));
        assert!(article.body.contains("  - point one\n"));
    }

    #[test]
    fn test_extract_article_skips_footer_content() {
        let article = extract_article(ARTICLE_HTML).unwrap();
        assert!(!article.body.contains("share buttons"));
    }

    #[test]
    fn test_extract_article_missing_title() {
        let html = r#"<div class="td-post-content"><p>Body only.</p></div>"#;
        let article = extract_article(html).unwrap();
        assert_eq!(article.title, "No Title Found");
        assert!(article.body.contains("Body only."));
    }

    #[test]
    fn test_extract_article_missing_body_is_not_an_error() {
        let html = r#"<h1 class="entry-title">Just a title</h1>"#;
        let article = extract_article(html).unwrap();
        assert_eq!(article.title, "Just a title");
        assert!(article.body.is_empty());
    }

    #[test]
    fn test_to_text_format() {
        let article = ExtractedArticle {
            title: "Hello".to_string(),
            body: "World.\n".to_string(),
        };
        assert_eq!(article.to_text(), "Title: Hello\n\nWorld.\n");
    }

    #[test]
    fn test_empty_paragraphs_are_dropped() {
        let html = r#"<div class="td-post-content"><p>  </p><p>kept</p></div>"#;
        let article = extract_article(html).unwrap();
        assert_eq!(article.body, "kept\n");
    }
}
