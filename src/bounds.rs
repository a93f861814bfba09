use serde_json::Value;

/// bound emitted when the solver reported nothing usable
pub const NO_BOUND: i64 = -1;

/// stray characters the solver wrapper leaves around the JSON payload
const STRAY_CHARS: &str = "'<>()\" ";

/**
extracts the `Bound.Value` integer from a solver output blob.

The blob is loosely formatted: the JSON payload (or the literal token
`null`) is wrapped in stray quote/bracket characters and whitespace.
Tolerance rules, in order:
 1. all whitespace is removed;
 2. characters of `' < > ( ) "` are trimmed from both ends;
 3. an empty remainder or the token `null` yields [`NO_BOUND`];
 4. otherwise the remainder must be JSON; a missing or non-integer
    `Bound.Value` yields [`NO_BOUND`].
*/
pub fn parse_bound(raw:&str) -> serde_json::Result<i64> {
    let compact:String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let content = compact.trim_matches(|c| STRAY_CHARS.contains(c));
    if content.is_empty() || content == "null" {
        return Ok(NO_BOUND);
    }
    let data:Value = serde_json::from_str(content)?;
    Ok(
        data.get("Bound")
            .and_then(|b| b.get("Value"))
            .and_then(Value::as_i64)
            .unwrap_or(NO_BOUND)
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sentinel() {
        assert_eq!(parse_bound("null").unwrap(), -1);
        assert_eq!(parse_bound("'null'\n").unwrap(), -1);
    }

    #[test]
    fn test_empty_blob() {
        assert_eq!(parse_bound("").unwrap(), -1);
        assert_eq!(parse_bound("'' \n").unwrap(), -1);
    }

    #[test]
    fn test_wrapped_payload() {
        let raw = "'<{\"Bound\": {\"Value\": 7}}>'\n";
        assert_eq!(parse_bound(raw).unwrap(), 7);
    }

    #[test]
    fn test_plain_payload() {
        assert_eq!(parse_bound(r#"{"Bound":{"Value": 42}}"#).unwrap(), 42);
    }

    #[test]
    fn test_missing_bound_field() {
        assert_eq!(parse_bound(r#"{"Other": 3}"#).unwrap(), -1);
        assert_eq!(parse_bound(r#"{"Bound": {}}"#).unwrap(), -1);
    }

    #[test]
    fn test_malformed_payload() {
        assert!(parse_bound("'<{\"Bound\":>'").is_err());
    }
}
