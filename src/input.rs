use crate::error::{CollatzError, CzResult};

/// Parses a text entry. Blank text is "absent" rather than an error.
pub fn parse_entry(text: &str) -> CzResult<Option<i64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| CollatzError::InvalidInput(trimmed.to_string()))
}

/// Accepts only entries that may be submitted: present, positive integers.
pub fn parse_start(text: &str) -> CzResult<u64> {
    match parse_entry(text)? {
        None => Err(CollatzError::EmptyInput),
        Some(0) => Err(CollatzError::ZeroStart),
        Some(n) if n < 0 => Err(CollatzError::NegativeStart(n)),
        Some(n) => Ok(n as u64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("").unwrap(), None);
        assert_eq!(parse_entry("   ").unwrap(), None);
        assert_eq!(parse_entry(" 42 ").unwrap(), Some(42));
        assert_eq!(parse_entry("-7").unwrap(), Some(-7));
        assert!(matches!(
            parse_entry("12a"),
            Err(CollatzError::InvalidInput(s)) if s == "12a"
        ));
        assert!(parse_entry("-").is_err());
    }

    #[test]
    fn test_parse_start_guards() {
        assert_eq!(parse_start("27").unwrap(), 27);
        assert!(matches!(parse_start(""), Err(CollatzError::EmptyInput)));
        assert!(matches!(parse_start("0"), Err(CollatzError::ZeroStart)));
        assert!(matches!(
            parse_start("-3"),
            Err(CollatzError::NegativeStart(-3))
        ));
    }
}
