use std::path::Path;

use lancer_common::{LancerError, Result};
use tracing::info;

use crate::profile::Profile;

/// Load freelancer profiles from a CSV file
///
/// The first row is the header; every following row becomes one `Profile`
/// with the header's column names.
pub fn load_profiles(path: impl AsRef<Path>) -> Result<Vec<Profile>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;

    let profiles = parse_profiles(&raw)?;
    info!("Loaded {} profiles from {}", profiles.len(), path.display());

    Ok(profiles)
}

/// Parse CSV text into profiles
///
/// Double-quoted fields may contain commas; a doubled quote inside a quoted
/// field is an escaped quote. Fields cannot span lines. An empty input (or
/// a header with no data rows) yields an empty collection, not an error.
pub fn parse_profiles(raw: &str) -> Result<Vec<Profile>> {
    let mut lines = raw
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let header = match lines.next() {
        Some(line) => parse_row(line)?,
        None => return Ok(Vec::new()),
    };

    let mut profiles = Vec::new();

    for (row_idx, line) in lines.enumerate() {
        let fields = parse_row(line)?;

        if fields.len() != header.len() {
            return Err(LancerError::invalid_input(format!(
                "Row {} has {} fields, expected {}",
                row_idx + 2,
                fields.len(),
                header.len()
            )));
        }

        profiles.push(Profile::new(
            header.iter().cloned().zip(fields).collect(),
        ));
    }

    Ok(profiles)
}

/// Parse one CSV row into its fields
fn parse_row(line: &str) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                // Doubled quote is an escaped quote; a lone quote closes the field
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            '"' => {
                return Err(LancerError::invalid_input(format!(
                    "Unexpected quote in unquoted field: {line}"
                )));
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if in_quotes {
        return Err(LancerError::invalid_input(format!(
            "Unterminated quoted field: {line}"
        )));
    }

    fields.push(current);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_rows() {
        let raw = "name,skills,experience\n김하나,React,3년\n이두리,Java,5년\n";
        let profiles = parse_profiles(raw).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].get("name"), Some("김하나"));
        assert_eq!(profiles[1].get("skills"), Some("Java"));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let raw = "name,skills\n김하나,\"React, TypeScript, GraphQL\"\n";
        let profiles = parse_profiles(raw).unwrap();

        assert_eq!(
            profiles[0].get("skills"),
            Some("React, TypeScript, GraphQL")
        );
    }

    #[test]
    fn test_parse_escaped_quote() {
        let raw = "name,note\nA,\"said \"\"hi\"\"\"\n";
        let profiles = parse_profiles(raw).unwrap();
        assert_eq!(profiles[0].get("note"), Some("said \"hi\""));
    }

    #[test]
    fn test_empty_input_yields_empty_collection() {
        assert!(parse_profiles("").unwrap().is_empty());
        assert!(parse_profiles("name,skills\n").unwrap().is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let raw = "name,skills\r\n김하나,React\r\n";
        let profiles = parse_profiles(raw).unwrap();
        assert_eq!(profiles[0].get("skills"), Some("React"));
    }

    #[test]
    fn test_field_count_mismatch_is_error() {
        let raw = "name,skills\n김하나\n";
        let result = parse_profiles(raw);
        assert!(result.is_err());
    }

    #[test]
    fn test_unterminated_quote_is_error() {
        assert!(parse_row("a,\"open").is_err());
    }
}
