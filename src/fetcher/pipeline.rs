//! Body decoding. Filmweb serves UTF-8 in practice, but the fetch layer does
//! not assume it: the charset comes from the Content-Type header, a meta tag
//! in the first 4KB, or chardetng's guess, in that order.

use crate::fetcher::errors::FetchError;
use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

pub fn decode_body(body: &[u8], content_type: &str) -> Result<String, FetchError> {
    let encoding = detect_encoding(content_type, body);
    let (decoded, _, had_errors) = encoding.decode(body);
    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode body as {}",
            encoding.name()
        )));
    }
    Ok(decoded.into_owned())
}

fn detect_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = labelled_encoding(content_type, &HEADER_CHARSET) {
        return encoding;
    }

    let head = &body[..body.len().min(4096)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(encoding) = labelled_encoding(&head_str, &META_CHARSET) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, false);
    detector.guess(None, true)
}

fn labelled_encoding(haystack: &str, pattern: &Regex) -> Option<&'static Encoding> {
    let label = pattern.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}
