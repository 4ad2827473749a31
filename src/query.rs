//! Query builder: free-text arguments to a URL-escaped search query

use crate::error::{HowdoiError, Result};
use url::form_urlencoded;

/// Join, trim, drop `?` and percent-encode the question words.
/// Spaces are encoded as `+`.
pub fn sanitize_question<S: AsRef<str>>(words: &[S]) -> Result<String> {
    let joined = words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    let question = joined.trim();

    if question.is_empty() {
        return Err(HowdoiError::InvalidInput);
    }

    let question = question.replace('?', "");
    Ok(form_urlencoded::byte_serialize(question.as_bytes()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let words: [&str; 0] = [];
        assert!(matches!(
            sanitize_question(&words),
            Err(HowdoiError::InvalidInput)
        ));
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(matches!(
            sanitize_question(&["", " "]),
            Err(HowdoiError::InvalidInput)
        ));
    }

    #[test]
    fn test_valid_input() {
        let q = sanitize_question(&["open", "file", "in", "python"]).unwrap();
        assert_eq!(q, "open+file+in+python");
    }

    #[test]
    fn test_strips_question_marks_and_escapes() {
        let q = sanitize_question(&[" how", "to", "use", "c++?  "]).unwrap();
        assert_eq!(q, "how+to+use+c%2B%2B");
    }

    #[test]
    fn test_question_mark_only_is_not_rejected() {
        // emptiness is checked before `?` is stripped
        assert_eq!(sanitize_question(&["?"]).unwrap(), "");
    }
}
