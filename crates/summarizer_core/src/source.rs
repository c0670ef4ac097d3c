use url::Url;

/// What kind of text extraction a URL calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Regular web page: article body or paragraph text.
    Article,
    /// YouTube watch page: the caption track is the text source.
    VideoCaptions,
}

/// Classifies a URL by its host and path. Anything that is not a YouTube
/// watch page is treated as an article.
pub fn classify_source(url: &str) -> SourceKind {
    let Ok(parsed) = Url::parse(url) else {
        return SourceKind::Article;
    };
    let Some(host) = parsed.host_str() else {
        return SourceKind::Article;
    };
    let is_youtube = host.eq_ignore_ascii_case("youtube.com")
        || host.to_ascii_lowercase().ends_with(".youtube.com");
    if is_youtube && parsed.path() == "/watch" {
        SourceKind::VideoCaptions
    } else {
        SourceKind::Article
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_source, SourceKind};

    #[test]
    fn watch_pages_are_video_sources() {
        assert_eq!(
            classify_source("https://www.youtube.com/watch?v=abc123"),
            SourceKind::VideoCaptions
        );
        assert_eq!(
            classify_source("https://m.youtube.com/watch?v=abc123"),
            SourceKind::VideoCaptions
        );
    }

    #[test]
    fn other_youtube_pages_are_articles() {
        assert_eq!(
            classify_source("https://www.youtube.com/feed/subscriptions"),
            SourceKind::Article
        );
    }

    #[test]
    fn regular_pages_are_articles() {
        assert_eq!(
            classify_source("https://example.com/watch"),
            SourceKind::Article
        );
        assert_eq!(classify_source("not a url"), SourceKind::Article);
    }
}
