use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::ExtractedText;

pub trait TextExtractor: Send + Sync {
    fn extract(&self, html: &str) -> ExtractedText;
}

/// Readable-text extractor:
/// - pulls `<title>` text if present
/// - returns the visible text of `<article>` if present
/// - otherwise joins the text of all `<p>` elements with newlines.
///
/// Script, style and template contents never appear in the output.
#[derive(Debug, Default)]
pub struct ArticleTextExtractor;

impl TextExtractor for ArticleTextExtractor {
    fn extract(&self, html: &str) -> ExtractedText {
        let doc = Html::parse_document(html);
        let title_sel = Selector::parse("title").ok();
        let article_sel = Selector::parse("article").ok();
        let paragraph_sel = Selector::parse("p").ok();

        let title = title_sel
            .as_ref()
            .and_then(|sel| doc.select(sel).next())
            .map(|t| t.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        let article = article_sel
            .as_ref()
            .and_then(|sel| doc.select(sel).next())
            .map(visible_text)
            .filter(|text| !text.is_empty());

        let text = article.unwrap_or_else(|| {
            paragraph_sel
                .as_ref()
                .map(|sel| {
                    doc.select(sel)
                        .map(|p| visible_text(p))
                        .filter(|line| !line.is_empty())
                        .collect::<Vec<_>>()
                        .join("\n")
                })
                .unwrap_or_default()
        });

        ExtractedText { title, text }
    }
}

/// Visible text of an element: text nodes outside script/style/template,
/// whitespace-normalized and joined with single spaces.
pub(crate) fn visible_text(element: ElementRef) -> String {
    let mut fragments = Vec::new();
    collect_fragments(*element, &mut fragments);
    fragments.join(" ")
}

fn collect_fragments(node: NodeRef<'_, Node>, fragments: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
                if !normalized.is_empty() {
                    fragments.push(normalized);
                }
            }
            Node::Element(element) => {
                let name = element.name();
                if matches!(name, "script" | "style" | "noscript" | "template") {
                    continue;
                }
                collect_fragments(child, fragments);
            }
            _ => {}
        }
    }
}
