//! Visible-text extraction from fetched pages
//!
//! Selection policy: if at least one `article` element exists, return the
//! concatenated text of all `article` elements; otherwise return the `body`
//! text; otherwise an empty string. `script`, `style`, and `noscript`
//! subtrees never contribute text.

use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

/// Tags whose subtrees are dropped entirely
const SKIP_TAGS: &[&str] = &["script", "style", "noscript"];

static ARTICLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").expect("static selector"));
static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("static selector"));

/// Check if a response looks like HTML based on content type and body
pub fn is_html(content_type: Option<&str>, body: &str) -> bool {
    if let Some(ct) = content_type {
        let ct_lower = ct.to_lowercase();
        if ct_lower.contains("text/html") || ct_lower.contains("application/xhtml") {
            return true;
        }
    }

    // Tag names are case-insensitive, so sniff case-insensitively too
    let head: String = body.trim_start().chars().take(16).collect();
    let head = head.to_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

/// Extract the visible text of a fetched response body
///
/// Non-HTML bodies (an HTML5 parser would wrap stray text in an implicit
/// `<body>`, echoing JSON or plain text back) degrade to an empty string
/// rather than an error.
pub fn visible_text(content_type: Option<&str>, body: &str) -> String {
    if !is_html(content_type, body) {
        return String::new();
    }
    extract_text(body)
}

/// Extract visible text from an HTML document
pub fn extract_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut out = String::new();

    let mut articles = doc.select(&ARTICLE).peekable();
    if articles.peek().is_some() {
        for article in articles {
            collect_text(&article, &mut out);
        }
    } else if let Some(body) = doc.select(&BODY).next() {
        collect_text(&body, &mut out);
    }

    out
}

/// Recursively collect text nodes, skipping non-content subtrees
fn collect_text(node: &ElementRef<'_>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                if SKIP_TAGS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(&child_ref, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html() {
        assert!(is_html(Some("text/html; charset=utf-8"), ""));
        assert!(is_html(Some("application/xhtml+xml"), ""));
        assert!(is_html(None, "<!DOCTYPE html><html></html>"));
        assert!(is_html(None, "  <html><body></body></html>"));

        assert!(!is_html(Some("application/json"), "{\"a\": 1}"));
        assert!(!is_html(None, "just some text"));
        assert!(!is_html(None, ""));
    }

    #[test]
    fn test_is_html_sniff_is_case_insensitive() {
        assert!(is_html(None, "<!doctype html><html></html>"));
        assert!(is_html(None, "<!DocType HTML><html></html>"));
        assert!(is_html(None, "<HTML><BODY>Hi</BODY></HTML>"));

        let html = "<!doctype html><html><body><p>Hi</p></body></html>";
        assert_eq!(visible_text(None, html), "Hi");
    }

    #[test]
    fn test_body_text_excludes_script() {
        let html = "<html><body><script>x</script><p>Hello</p></body></html>";
        assert_eq!(extract_text(html), "Hello");
    }

    #[test]
    fn test_article_preferred_over_body() {
        let html = "<article><p>World</p></article><body><p>Hello</p></body>";
        assert_eq!(extract_text(html), "World");
    }

    #[test]
    fn test_all_articles_concatenated() {
        let html = "<html><body>\
            <article>First.</article>\
            <p>between</p>\
            <article>Second.</article>\
            </body></html>";
        assert_eq!(extract_text(html), "First.Second.");
    }

    #[test]
    fn test_style_and_noscript_excluded() {
        let html = "<html><body>\
            <style>p { color: red; }</style>\
            <noscript>enable javascript</noscript>\
            <p>Visible</p>\
            </body></html>";
        assert_eq!(extract_text(html), "Visible");
    }

    #[test]
    fn test_skip_tags_inside_article() {
        let html = "<html><body><article><script>track()</script>Content</article></body></html>";
        assert_eq!(extract_text(html), "Content");
    }

    #[test]
    fn test_nested_elements_flattened() {
        let html = "<html><body><div><p>One <b>two</b></p><p>three</p></div></body></html>";
        assert_eq!(extract_text(html), "One twothree");
    }

    #[test]
    fn test_visible_text_non_html_is_empty() {
        assert_eq!(visible_text(Some("application/json"), "{\"a\": 1}"), "");
        assert_eq!(visible_text(None, "plain text, no markup"), "");
    }

    #[test]
    fn test_visible_text_empty_body_is_empty() {
        assert_eq!(visible_text(Some("text/html"), ""), "");
        assert_eq!(visible_text(None, ""), "");
    }

    #[test]
    fn test_visible_text_html_by_content_type() {
        // Fragment does not sniff as HTML, content type decides
        let html = "<article><p>World</p></article>";
        assert_eq!(visible_text(Some("text/html"), html), "World");
        assert_eq!(visible_text(None, html), "");
    }
}
