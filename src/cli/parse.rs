use chrono::NaiveDate;

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", s, e))
}

/// Parse a `TITLE=ID` mapping; the split is at the last `=`
pub fn parse_mapping(s: &str) -> std::result::Result<(String, String), String> {
    match s.rsplit_once('=') {
        Some((title, id)) if !title.is_empty() && !id.is_empty() => {
            Ok((title.to_string(), id.to_string()))
        }
        _ => Err(format!("invalid mapping '{}' (expected TITLE=ID)", s)),
    }
}
