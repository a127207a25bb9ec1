//! Flat code list parsing
//!
//! A flat list is delimited text with one code per line:
//! `code<delim>system<delim>display`. The first line is a header and is
//! always skipped. Fields are split literally: there is no quoting, so a
//! value can never contain the delimiter.

use crate::error::Result;
use crate::grouping::Record;
use csv::{ReaderBuilder, StringRecord, Trim};
use vsgen_models::ValueSetConcept;

/// Default field delimiter for flat lists
pub const DEFAULT_DELIMITER: u8 = b',';

/// One parsed line of a flat code list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    pub code: String,
    /// `None` when the line ends before the system column
    pub system: Option<String>,
    /// `None` when the line ends before the display column
    pub display: Option<String>,
}

impl FlatRecord {
    fn from_fields(fields: &StringRecord) -> Option<Self> {
        let code = fields.get(0).filter(|c| !c.is_empty())?;
        Some(Self {
            code: code.to_string(),
            system: fields.get(1).map(str::to_string),
            display: fields.get(2).map(str::to_string),
        })
    }
}

impl From<FlatRecord> for Record {
    fn from(record: FlatRecord) -> Self {
        Record {
            system: record.system,
            concept: ValueSetConcept::new(record.code, record.display),
        }
    }
}

/// Parse flat list content into records, in file order.
///
/// Line 1 is skipped whatever it contains. Blank lines and lines with an
/// empty code produce no record. Columns past the third are ignored.
pub fn parse_flat(content: &str, delimiter: u8) -> Result<Vec<FlatRecord>> {
    let body = content.split_once('\n').map_or("", |(_, rest)| rest);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .delimiter(delimiter)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for result in reader.records() {
        let fields = result?;
        match FlatRecord::from_fields(&fields) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                // +1 for the header consumed above
                let line = fields.position().map(|p| p.line() + 1);
                tracing::trace!(?line, "skipping flat line without a code");
            }
        }
    }

    tracing::debug!(records = records.len(), skipped, "parsed flat code list");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<FlatRecord> {
        parse_flat(content, DEFAULT_DELIMITER).unwrap()
    }

    #[test]
    fn test_header_line_is_skipped() {
        let records = parse("code,system,display\nA,http://sys,Alpha\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "A");
        assert_eq!(records[0].system.as_deref(), Some("http://sys"));
        assert_eq!(records[0].display.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_first_line_skipped_even_if_it_looks_like_data() {
        let records = parse("X,http://sys,Ex\nA,http://sys,Alpha");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "A");
    }

    #[test]
    fn test_blank_first_line_is_the_header() {
        let records = parse("\nA,http://sys,Alpha\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "A");
    }

    #[test]
    fn test_blank_and_codeless_lines_are_dropped() {
        let records = parse("h\nA,s,a\n\n,s,no code\nB,s,b\n\n");
        let codes: Vec<_> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_missing_trailing_fields() {
        let records = parse("h\nA2\nA3,http://sys\n");
        assert_eq!(records[0].code, "A2");
        assert_eq!(records[0].system, None);
        assert_eq!(records[0].display, None);
        assert_eq!(records[1].system.as_deref(), Some("http://sys"));
        assert_eq!(records[1].display, None);
    }

    #[test]
    fn test_empty_system_field_is_empty_not_absent() {
        let records = parse("h\nA1,,Display One\n");
        assert_eq!(records[0].system.as_deref(), Some(""));
        assert_eq!(records[0].display.as_deref(), Some("Display One"));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let records = parse("h\nA,s,Alpha,extra,more\n");
        assert_eq!(records[0].display.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_quotes_are_not_interpreted() {
        // Known limitation: a quoted display containing the delimiter is split.
        let records = parse("h\nA,s,\"Alpha, the first\"\n");
        assert_eq!(records[0].display.as_deref(), Some("\"Alpha"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse("code,system,display\r\nA,s,Alpha\r\nB,s,Beta\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].display.as_deref(), Some("Beta"));
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let records = parse("h\n A ,s, Alpha \n");
        assert_eq!(records[0].code, " A ");
        assert_eq!(records[0].display.as_deref(), Some(" Alpha "));
    }

    #[test]
    fn test_custom_delimiter() {
        let records = parse_flat("h\nA;s;Alpha, with comma\n", b';').unwrap();
        assert_eq!(records[0].display.as_deref(), Some("Alpha, with comma"));
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(parse("code,system,display\n").is_empty());
        assert!(parse("").is_empty());
    }
}
