use std::borrow::Cow;
use std::fmt;

/// Maximum number of characters of extracted text that is sent to the model.
/// Longer inputs are truncated to stay within the API's context limits.
pub const MAX_PROMPT_INPUT_CHARS: usize = 20_000;

const TRUNCATION_MARKER: &str = "...";

/// One of the fixed prompt-shaping choices offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryStyle {
    #[default]
    Brief,
    Detailed,
    Bullets,
}

impl SummaryStyle {
    /// Stable lowercase name, used on the CLI and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryStyle::Brief => "brief",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::Bullets => "bullets",
        }
    }

    /// Parses the CLI spelling of a style.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "brief" => Some(SummaryStyle::Brief),
            "detailed" => Some(SummaryStyle::Detailed),
            "bullets" => Some(SummaryStyle::Bullets),
            _ => None,
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caps the extracted text at [`MAX_PROMPT_INPUT_CHARS`], appending `...`
/// when anything was cut. The cut lands on a char boundary.
pub fn truncate_for_prompt(text: &str) -> Cow<'_, str> {
    if text.len() <= MAX_PROMPT_INPUT_CHARS {
        return Cow::Borrowed(text);
    }
    let mut end = MAX_PROMPT_INPUT_CHARS;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}{TRUNCATION_MARKER}", &text[..end]))
}

/// Instantiates the per-style prompt template over the (truncated) text.
pub fn build_prompt(style: SummaryStyle, text: &str) -> String {
    let body = truncate_for_prompt(text);
    match style {
        SummaryStyle::Brief => format!(
            "Provide a brief summary of the following article in 2-3 sentences:\n\n{body}"
        ),
        SummaryStyle::Detailed => format!(
            "Provide a detailed summary of the following article, covering all main \
             points and key details:\n\n{body}"
        ),
        SummaryStyle::Bullets => format!(
            "Summarize the following article in 5-7 key points. Format each point as a \
             line starting with \"- \" (dash followed by a space). Do not use asterisks \
             or other bullet symbols, only use the dash. Keep each point concise and \
             focused on a single key insight from the article:\n\n{body}"
        ),
    }
}
