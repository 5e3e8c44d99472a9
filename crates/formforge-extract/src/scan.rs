//! Text scanning over raw model output: reasoning-block stripping and
//! balanced-brace JSON boundary detection.

use crate::error::ExtractError;

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Removes every `<think>…</think>` block from the text.
///
/// An unterminated block is stripped to the end of the input: a model
/// that was cut off mid-reasoning has not produced an answer after it.
pub(crate) fn strip_reasoning(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(THINK_OPEN) {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + THINK_OPEN.len()..];
        match after_open.find(THINK_CLOSE) {
            Some(close) => rest = &after_open[close + THINK_CLOSE.len()..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Locates the first complete JSON object in the text.
///
/// Tries every `{` in order: from each one a depth-tracking scan (with
/// JSON string and escape awareness, so braces inside string values
/// never truncate the span) yields a balanced candidate, which must
/// also parse as JSON — this is what lets braces in surrounding prose
/// be skipped. The first candidate that parses is returned, including
/// both outer braces. If none does, the error from the earliest
/// attempt is reported.
pub(crate) fn json_candidate(text: &str) -> Result<&str, ExtractError> {
    let mut first_error: Option<ExtractError> = None;
    let mut from = 0;

    while let Some(rel) = text[from..].find('{') {
        let start = from + rel;
        match balanced_span(&text[start..]) {
            Ok(len) => {
                let candidate = &text[start..start + len];
                match serde_json::from_str::<serde_json::Value>(candidate) {
                    Ok(_) => return Ok(candidate),
                    // Keep the parse diagnostics in case nothing better turns up.
                    Err(e) if first_error.is_none() => {
                        first_error = Some(ExtractError::Parse {
                            message: e.to_string(),
                        });
                    }
                    Err(_) => {}
                }
            }
            Err(depth) => {
                if first_error.is_none() {
                    first_error = Some(ExtractError::UnbalancedJson { depth });
                }
            }
        }
        from = start + 1;
    }

    Err(first_error.unwrap_or(ExtractError::NoJsonObject))
}

/// Byte length of the balanced `{…}` span at the start of `text`, or
/// the number of braces left open when input ends.
fn balanced_span(text: &str) -> Result<usize, usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(offset + ch.len_utf8());
                }
            }
            _ => {}
        }
    }
    Err(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_block() {
        assert_eq!(strip_reasoning("<think>abc</think>rest"), "rest");
    }

    #[test]
    fn strip_multiple_blocks() {
        assert_eq!(
            strip_reasoning("a<think>x</think>b<think>y</think>c"),
            "abc"
        );
    }

    #[test]
    fn strip_unterminated_block_drops_tail() {
        assert_eq!(strip_reasoning("before<think>never closed"), "before");
    }

    #[test]
    fn strip_without_blocks_is_identity() {
        assert_eq!(strip_reasoning("plain text"), "plain text");
    }

    #[test]
    fn strip_block_spanning_lines() {
        let text = "<think>\nline one\nline two\n</think>\n{\"a\":1}";
        assert_eq!(strip_reasoning(text), "\n{\"a\":1}");
    }

    #[test]
    fn candidate_simple_object() {
        assert_eq!(json_candidate("{\"a\":1}").unwrap(), "{\"a\":1}");
    }

    #[test]
    fn candidate_with_surrounding_prose() {
        assert_eq!(
            json_candidate("here: {\"a\":1} done").unwrap(),
            "{\"a\":1}"
        );
    }

    #[test]
    fn candidate_nested_objects() {
        let text = "x {\"a\":{\"b\":{}}} y";
        assert_eq!(json_candidate(text).unwrap(), "{\"a\":{\"b\":{}}}");
    }

    #[test]
    fn candidate_ignores_braces_in_strings() {
        let text = r#"{"a":"}{","b":"\"}"}"#;
        assert_eq!(json_candidate(text).unwrap(), text);
    }

    #[test]
    fn candidate_handles_escaped_backslash_before_quote() {
        // The string ends at the quote after "\\", so the brace closes.
        let text = r#"{"a":"c:\\"}"#;
        assert_eq!(json_candidate(text).unwrap(), text);
    }

    #[test]
    fn no_brace_is_no_json_object() {
        assert_eq!(json_candidate("nothing"), Err(ExtractError::NoJsonObject));
    }

    #[test]
    fn unbalanced_reports_open_depth() {
        assert_eq!(
            json_candidate("{\"a\":{\"b\":1"),
            Err(ExtractError::UnbalancedJson { depth: 2 })
        );
    }

    #[test]
    fn candidate_stops_at_first_complete_object() {
        // Only the first object is the answer; a second one is prose.
        assert_eq!(json_candidate("{\"a\":1} {\"b\":2}").unwrap(), "{\"a\":1}");
    }

    #[test]
    fn candidate_skips_non_json_prose_braces() {
        let text = "I used {curly} notation. {\"a\":1}";
        assert_eq!(json_candidate(text).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn only_prose_braces_is_a_parse_error() {
        assert!(matches!(
            json_candidate("just {curly} prose"),
            Err(ExtractError::Parse { .. })
        ));
    }
}
