use chrono::NaiveDate;
use lobbyview_api::Error;

pub const MAX_TEXT_LENGTH: usize = 200;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, Error> {
    if input.len() > max_len {
        return Err(Error::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(Error::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a free-text filter value (names, descriptions, issue text).
pub fn validate_text(input: &str) -> Result<String, Error> {
    sanitize_text(input, MAX_TEXT_LENGTH)
}

/// Validate an optional free-text flag, passing `None` through.
pub fn validate_opt_text(input: Option<&str>) -> Result<Option<String>, Error> {
    input.map(validate_text).transpose()
}

/// Validate a chamber code: `H` or `S`, case-insensitive.
pub fn validate_chamber(input: &str) -> Result<String, Error> {
    let upper = input.trim().to_uppercase();
    match upper.as_str() {
        "H" | "HOUSE" => Ok("H".to_string()),
        "S" | "SENATE" => Ok("S".to_string()),
        _ => Err(Error::InvalidInput(format!(
            "unknown chamber '{}'. Valid values: H, S",
            input
        ))),
    }
}

/// Validate a quarter code. The API stores quarters as `1`-`4`.
pub fn validate_quarter(input: &str) -> Result<String, Error> {
    let trimmed = input.trim();
    match trimmed {
        "1" | "2" | "3" | "4" => Ok(trimmed.to_string()),
        _ => Err(Error::InvalidInput(format!(
            "invalid quarter '{}'. Valid values: 1, 2, 3, 4",
            input
        ))),
    }
}

/// Validate a `YYYY-MM-DD` date.
pub fn validate_date(input: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        Error::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD",
            input
        ))
    })
}

/// Validate a page number: must be at least 1.
pub fn validate_page(page: u32) -> Result<u32, Error> {
    if page == 0 {
        return Err(Error::InvalidInput(
            "page must be at least 1".to_string(),
        ));
    }
    Ok(page)
}
