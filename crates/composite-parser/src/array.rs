//! Array-of-composite literal scanning: `{"e1","e2",...}`.

use crate::error::DecodeError;

/// Split an array literal into its elements.
///
/// Strips the outer braces, splits on the `","` boundaries between quoted
/// elements and unescapes each element (`\"` and `\\` sequences collapse)
/// so the result can be fed back into the composite scanner. Elements are
/// split at commas outside any parentheses, which is what the boundary
/// between quoted composite elements looks like once inner quoting is
/// accounted for.
pub fn parse_array(literal: &str) -> Result<Vec<String>, DecodeError> {
    let trimmed = literal.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| DecodeError::UnexpectedShape {
            expected: "array",
            got: trimmed.to_string(),
        })?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut elements = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                // Collapse the escape; the escaped character is kept as-is.
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                } else {
                    return Err(DecodeError::UnexpectedShape {
                        expected: "array",
                        got: "dangling escape".to_string(),
                    });
                }
            }
            '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => {
                elements.push(unquote(&current));
                current.clear();
            }
            _ => current.push(c),
        }
    }
    elements.push(unquote(&current));

    Ok(elements)
}

/// Strip the quoting around a single array element.
fn unquote(element: &str) -> String {
    let trimmed = element.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::parse_composite;

    #[test]
    fn test_array_of_composites() {
        let elements =
            parse_array(r#"{"(1,"l","01:00:00")","(2,"m³","1 day")"}"#).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0], r#"(1,"l","01:00:00")"#);
        assert_eq!(elements[1], r#"(2,"m³","1 day")"#);
    }

    #[test]
    fn test_backslash_escaped_elements() {
        let elements = parse_array(r#"{"(1,\"l\",\"01:00:00\")"}"#).unwrap();
        assert_eq!(elements, vec![r#"(1,"l","01:00:00")"#.to_string()]);

        // The unescaped element feeds straight into the composite scanner.
        let fields = parse_composite(&elements[0]).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1], Some("l".to_string()));
    }

    #[test]
    fn test_scalar_array() {
        let elements = parse_array(r#"{"a","b c"}"#).unwrap();
        assert_eq!(elements, vec!["a".to_string(), "b c".to_string()]);
    }

    #[test]
    fn test_unquoted_scalar_array() {
        let elements = parse_array("{A,E}").unwrap();
        assert_eq!(elements, vec!["A".to_string(), "E".to_string()]);
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_array("{}").unwrap().is_empty());
    }

    #[test]
    fn test_element_order_preserved() {
        let elements = parse_array(r#"{"(3,"x")","(1,"y")","(2,"z")"}"#).unwrap();
        assert_eq!(elements[0], r#"(3,"x")"#);
        assert_eq!(elements[1], r#"(1,"y")"#);
        assert_eq!(elements[2], r#"(2,"z")"#);
    }

    #[test]
    fn test_missing_braces_rejected() {
        let err = parse_array(r#""a","b""#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedShape {
                expected: "array",
                ..
            }
        ));
    }
}
