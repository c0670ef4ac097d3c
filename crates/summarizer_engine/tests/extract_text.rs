use pretty_assertions::assert_eq;
use summarizer_engine::{decode_text, ArticleTextExtractor, TextExtractor};

#[test]
fn article_element_is_preferred_over_paragraphs() {
    let html = r#"
    <html><head><title>A Title</title></head>
    <body>
        <p>outside paragraph</p>
        <article><h1>Heading</h1><p>Body text</p></article>
    </body></html>
    "#;
    let extracted = ArticleTextExtractor.extract(html);
    assert_eq!(extracted.title.as_deref(), Some("A Title"));
    assert_eq!(extracted.text, "Heading Body text");
}

#[test]
fn paragraphs_join_with_newlines_when_no_article() {
    let html = r#"
    <html><body>
        <div><p>First paragraph.</p></div>
        <p>Second <b>with bold</b> text.</p>
        <p>   </p>
    </body></html>
    "#;
    let extracted = ArticleTextExtractor.extract(html);
    assert_eq!(extracted.text, "First paragraph.\nSecond with bold text.");
}

#[test]
fn script_and_style_content_is_invisible() {
    let html = r#"
    <html><body>
        <article>
            <p>Visible.</p>
            <script>var hidden = "should not appear";</script>
            <style>.x { color: red }</style>
        </article>
    </body></html>
    "#;
    let extracted = ArticleTextExtractor.extract(html);
    assert_eq!(extracted.text, "Visible.");
}

#[test]
fn missing_title_and_text_yield_empty() {
    let extracted = ArticleTextExtractor.extract("<html><body><div>bare div</div></body></html>");
    assert_eq!(extracted.title, None);
    assert_eq!(extracted.text, "");
}

#[test]
fn decode_then_extract_handles_latin1_pages() {
    let bytes = b"<html><head><title>Caf\xe9</title></head><body><p>d\xe9tail</p></body></html>";
    let decoded = decode_text(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
    let extracted = ArticleTextExtractor.extract(&decoded.text);
    assert_eq!(extracted.title.as_deref(), Some("Café"));
    assert_eq!(extracted.text, "détail");
}
