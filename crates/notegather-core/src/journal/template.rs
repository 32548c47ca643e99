use crate::error::{GatherError, Result};
use chrono::NaiveDate;
use regex::Regex;

/// Placeholder token, capture name and digit count
static PLACEHOLDERS: [(&str, &str, usize); 3] =
    [("YYYY", "year", 4), ("MM", "month", 2), ("DD", "day", 2)];

/// Compiled date-header template such as `### YYYY-MM-DD`
///
/// `YYYY` matches four digits, `MM` and `DD` two digits each; every other
/// character matches itself. A header may be followed by whitespace and
/// free text (`### 2024-01-20 Saturday`).
#[derive(Debug, Clone)]
pub struct HeaderTemplate {
    format: String,
    pattern: Option<Regex>,
}

impl HeaderTemplate {
    /// Compile `format`; an empty format yields a disabled template
    pub fn compile(format: &str) -> Result<Self> {
        if format.trim().is_empty() {
            return Ok(Self::disabled());
        }

        let mut pattern = String::from("^");
        let mut seen = [false; 3];
        let mut rest = format;
        while !rest.is_empty() {
            let placeholder = PLACEHOLDERS
                .iter()
                .enumerate()
                .find(|(_, (token, _, _))| rest.starts_with(token));
            match placeholder {
                Some((idx, (token, name, width))) => {
                    if seen[idx] {
                        return Err(invalid(format, &format!("{token} appears more than once")));
                    }
                    seen[idx] = true;
                    pattern.push_str(&format!(r"(?P<{name}>\d{{{width}}})"));
                    rest = &rest[token.len()..];
                }
                None => {
                    let ch = rest.chars().next().unwrap_or_default();
                    pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }
        pattern.push_str(r"(?:\s.*)?$");

        if let Some((missing, _, _)) = PLACEHOLDERS
            .iter()
            .zip(seen)
            .find(|(_, present)| !present)
            .map(|(placeholder, _)| placeholder)
        {
            return Err(invalid(format, &format!("missing {missing} placeholder")));
        }

        let regex = Regex::new(&pattern).map_err(|e| invalid(format, &e.to_string()))?;
        Ok(HeaderTemplate {
            format: format.to_string(),
            pattern: Some(regex),
        })
    }

    /// A template that never matches
    pub fn disabled() -> Self {
        HeaderTemplate {
            format: String::new(),
            pattern: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Date of a header line, or `None` for ordinary content
    ///
    /// Lines that match the template's shape but carry an impossible date
    /// (month 13, February 30th) are ordinary content.
    pub fn parse_header(&self, line: &str) -> Option<NaiveDate> {
        let cap = self.pattern.as_ref()?.captures(line.trim_end())?;
        let year: i32 = cap.name("year")?.as_str().parse().ok()?;
        let month: u32 = cap.name("month")?.as_str().parse().ok()?;
        let day: u32 = cap.name("day")?.as_str().parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

fn invalid(format: &str, reason: &str) -> GatherError {
    GatherError::InvalidHeaderFormat {
        format: format.to_string(),
        reason: reason.to_string(),
    }
}
