use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes as {encoding}")]
    DecodeFailure { encoding: String },
}

/// Decode fetched bytes into UTF-8: BOM first, then the Content-Type charset,
/// then chardetng detection over the whole document.
pub fn decode_text(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedText, DecodeError> {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn header_charset(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let part = part.trim();
        let (key, value) = part.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        Some(value.trim().trim_matches(['"', '\'']).to_string())
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedText, DecodeError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_text, header_charset};

    #[test]
    fn charset_header_wins_without_bom() {
        let bytes = b"caf\xe9"; // latin-1
        let decoded = decode_text(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
        assert_eq!(decoded.text, "café");
    }

    #[test]
    fn utf8_bom_overrides_header() {
        let bytes = b"\xEF\xBB\xBFhello";
        let decoded = decode_text(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
        assert_eq!(decoded.text, "hello");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }

    #[test]
    fn detection_kicks_in_without_hints() {
        let decoded = decode_text(b"plain ascii", None).unwrap();
        assert_eq!(decoded.text, "plain ascii");
    }

    #[test]
    fn header_charset_handles_quotes_and_case() {
        assert_eq!(
            header_charset("text/html; Charset=\"utf-8\"").as_deref(),
            Some("utf-8")
        );
        assert_eq!(header_charset("text/html"), None);
    }
}
