use serde::de::IgnoredAny;

/// Result of looking for a JSON object inside free-form model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedJson<'a> {
    Found(&'a str),
    NotFound,
}

impl<'a> EmbeddedJson<'a> {
    /// The JSON span when one was found, otherwise `fallback`.
    pub fn or(self, fallback: &'a str) -> &'a str {
        match self {
            EmbeddedJson::Found(json) => json,
            EmbeddedJson::NotFound => fallback,
        }
    }
}

/// Finds the longest span that starts at the first `{` and parses as JSON.
///
/// Candidate ends are tried from the last `}` backwards, so trailing prose or
/// a closing markdown fence is dropped before any leading text would be.
/// Worst case is quadratic in the input length; inputs are one quiz worth of
/// model output.
pub fn extract_embedded_json(text: &str) -> EmbeddedJson<'_> {
    let (Some(first), Some(last)) = (text.find('{'), text.rfind('}')) else {
        return EmbeddedJson::NotFound;
    };
    if last < first {
        return EmbeddedJson::NotFound;
    }

    // `}` is a single byte, so `last + 1` is a char boundary.
    let window = &text[first..=last];
    // An object starting at `{` parses only if it ends in `}` (trailing
    // whitespace would not change the parsed value), so other ends are skipped.
    for (offset, _) in window.rmatch_indices('}') {
        let candidate = &window[..=offset];
        if serde_json::from_str::<IgnoredAny>(candidate).is_ok() {
            return EmbeddedJson::Found(candidate);
        }
    }

    EmbeddedJson::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn text_without_braces_is_not_found() {
        for text in ["", "plain review text", "only ] brackets [", "1 + 1 = 2"] {
            assert_eq!(extract_embedded_json(text), EmbeddedJson::NotFound);
            assert_eq!(extract_embedded_json(text).or(text), text);
        }
    }

    #[test]
    fn text_with_only_one_kind_of_brace_is_not_found() {
        assert_eq!(extract_embedded_json("open { only"), EmbeddedJson::NotFound);
        assert_eq!(extract_embedded_json("close } only"), EmbeddedJson::NotFound);
        assert_eq!(extract_embedded_json("} reversed {"), EmbeddedJson::NotFound);
    }

    #[test]
    fn finds_object_wrapped_in_prose_and_fences() {
        let text = "Here is the reviewed quiz:\n```json\n{\"1\": {\"mcq\": \"2+2?\", \"correct\": \"b\"}}\n```\nComplexity: the questions suit beginners.";

        let EmbeddedJson::Found(json) = extract_embedded_json(text) else {
            panic!("expected embedded json to be found");
        };
        let parsed: Value = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, json!({"1": {"mcq": "2+2?", "correct": "b"}}));
    }

    #[test]
    fn prefers_longest_valid_span() {
        // Only the outer object is valid: the inner `{"b": 1}` never starts at the first `{`.
        let text = r#"prefix {"a": {"b": 1}, "c": [1, 2]} suffix with a stray } brace"#;

        assert_eq!(
            extract_embedded_json(text),
            EmbeddedJson::Found(r#"{"a": {"b": 1}, "c": [1, 2]}"#)
        );
    }

    #[test]
    fn trailing_explanation_with_braces_is_dropped() {
        let text = r#"{"1": {"mcq": "q"}} Note: use {curly} braces sparingly."#;

        assert_eq!(
            extract_embedded_json(text),
            EmbeddedJson::Found(r#"{"1": {"mcq": "q"}}"#)
        );
    }

    #[test]
    fn unparseable_braces_are_not_found() {
        let text = "the set {a, b, c} is not json";
        assert_eq!(extract_embedded_json(text), EmbeddedJson::NotFound);
    }

    #[test]
    fn handles_multibyte_text_around_object() {
        let text = "Résumé — quiz: {\"1\": {\"mcq\": \"¿Qué es π?\"}} ✓ fin";

        let EmbeddedJson::Found(json) = extract_embedded_json(text) else {
            panic!("expected embedded json to be found");
        };
        let parsed: Value = serde_json::from_str(json).unwrap();
        assert_eq!(parsed["1"]["mcq"], "¿Qué es π?");
    }
}
