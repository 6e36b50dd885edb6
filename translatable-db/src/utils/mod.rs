use serde_json::Value;

/// Returns true when a stored attribute value counts as empty.
///
/// Missing values, `null`, `false`, numeric zero, empty strings and empty
/// arrays/objects are all treated as empty when deciding whether to walk a
/// fallback chain.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

/// Renders a value as display text: strings without quotes, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Converts a type-style name (`CountryTranslation`) into a column-style name
/// (`country_translation`).
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else if c == '-' || c == ' ' {
            out.push('_');
            prev_lower_or_digit = false;
        } else {
            out.push(c);
            prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

/// Returns true when `name` is a plain SQL identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Renders a value in the text form SQL compares against (`column::text`).
/// `null` has none.
pub fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LikeToken {
    AnyRun,
    AnyOne,
    Literal(char),
}

fn like_tokens(pattern: &str) -> Vec<LikeToken> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => LikeToken::AnyRun,
            '_' => LikeToken::AnyOne,
            '\\' => LikeToken::Literal(chars.next().unwrap_or('\\')),
            other => LikeToken::Literal(other),
        });
    }
    tokens
}

/// SQL `LIKE` matching: `%` matches any run of characters, `_` exactly one,
/// and `\` escapes the next character.
///
/// Backtracks only to the most recent `%`, so matching is O(pattern × text).
pub fn like_match(pattern: &str, text: &str) -> bool {
    let tokens = like_tokens(pattern);
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // position of the last `%` and the text position it currently absorbs up to
    let mut resume: Option<(usize, usize)> = None;

    while t < text.len() {
        match tokens.get(p) {
            Some(LikeToken::AnyRun) => {
                resume = Some((p, t));
                p += 1;
            }
            Some(LikeToken::AnyOne) => {
                p += 1;
                t += 1;
            }
            Some(LikeToken::Literal(c)) if *c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match resume {
                Some((run, absorbed)) => {
                    resume = Some((run, absorbed + 1));
                    p = run + 1;
                    t = absorbed + 1;
                }
                None => return false,
            },
        }
    }

    tokens[p..].iter().all(|token| *token == LikeToken::AnyRun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(null))));
        assert!(is_blank(Some(&json!(""))));
        assert!(is_blank(Some(&json!(0))));
        assert!(is_blank(Some(&json!(false))));
        assert!(is_blank(Some(&json!([]))));
        assert!(!is_blank(Some(&json!("Bonjour"))));
        assert!(!is_blank(Some(&json!(3))));
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("CountryTranslation"), "country_translation");
        assert_eq!(snake_case("Country"), "country");
        assert_eq!(snake_case("already_snake"), "already_snake");
        assert_eq!(snake_case("Product2Name"), "product2_name");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("title"));
        assert!(is_identifier("_hidden_1"));
        assert!(!is_identifier("1title"));
        assert!(!is_identifier("title; DROP TABLE x"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_like_match() {
        assert!(like_match("Bon%", "Bonjour"));
        assert!(like_match("%jour", "Bonjour"));
        assert!(like_match("B_njour", "Bonjour"));
        assert!(like_match("%", ""));
        assert!(like_match("100\\%", "100%"));
        assert!(!like_match("100\\%", "1000"));
        assert!(!like_match("Bon", "Bonjour"));
        assert!(!like_match("_", ""));
        assert!(like_match("%a_c%", "xxabcab"));
        assert!(!like_match("a\\", "a"));
        assert!(like_match("a\\", "a\\"));
    }

    #[test]
    fn test_like_match_many_wildcards_on_long_text() {
        let text = "a".repeat(200);
        assert!(!like_match("%a%a%a%a%a%a%a%b", &text));
        assert!(like_match("%a%a%a%a%a%a%a%", &text));
        assert!(like_match("a%a%a%a%a%a%a%a", &text));
    }

    #[test]
    fn test_text_value() {
        assert_eq!(text_value(&json!("Bonjour")), Some("Bonjour".to_string()));
        assert_eq!(text_value(&json!(2024)), Some("2024".to_string()));
        assert_eq!(text_value(&json!(true)), Some("true".to_string()));
        assert_eq!(text_value(&Value::Null), None);
    }
}
