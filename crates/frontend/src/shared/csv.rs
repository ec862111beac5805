//! CSV handling for bulk import previews.
//!
//! Parsing is RFC-style: quoted fields may contain commas, newlines and
//! doubled quotes. The first record is a header and is skipped by the import
//! mappers; blank lines are ignored.

/// Accept only `.csv` files, checked before any network call.
pub fn has_csv_extension(file_name: &str) -> bool {
    file_name
        .rsplit('.')
        .next()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
        && file_name.contains('.')
}

/// Parse CSV text into records of fields.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(ch),
            }
            continue;
        }
        match ch {
            '"' => in_quotes = true,
            ',' => {
                record.push(std::mem::take(&mut field));
            }
            '\r' => {
                // handled by the following '\n', or ignored at EOF
            }
            '\n' => {
                record.push(std::mem::take(&mut field));
                if !(record.len() == 1 && record[0].trim().is_empty()) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // trailing record without a final newline
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        if !(record.len() == 1 && record[0].trim().is_empty()) {
            records.push(record);
        }
    }

    records
}

/// Data records of a parsed file: everything after the header line.
pub fn data_records(text: &str) -> Vec<Vec<String>> {
    let mut records = parse(text);
    if !records.is_empty() {
        records.remove(0);
    }
    records
}

/// Positional field accessor for import mappers; trims whitespace and turns
/// missing/empty cells into `None`.
pub fn field(record: &[String], index: usize) -> Option<String> {
    record
        .get(index)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check() {
        assert!(has_csv_extension("holidays.csv"));
        assert!(has_csv_extension("HOLIDAYS.CSV"));
        assert!(!has_csv_extension("holidays.xlsx"));
        assert!(!has_csv_extension("csv"));
    }

    #[test]
    fn simple_records() {
        let parsed = parse("a,b,c\n1,2,3\n");
        assert_eq!(parsed, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let parsed = parse("name,date\n\"Diwali, Day 1\",2026-11-08\n");
        assert_eq!(parsed[1][0], "Diwali, Day 1");
        assert_eq!(parsed[1][1], "2026-11-08");
    }

    #[test]
    fn doubled_quotes_unescape() {
        let parsed = parse("note\n\"He said \"\"hi\"\"\"\n");
        assert_eq!(parsed[1][0], "He said \"hi\"");
    }

    #[test]
    fn quoted_fields_may_contain_newlines() {
        let parsed = parse("note,code\n\"line one\nline two\",X\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1][0], "line one\nline two");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let parsed = parse("a,b\n\n1,2\n   \n");
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn crlf_line_endings() {
        let parsed = parse("a,b\r\n1,2\r\n");
        assert_eq!(parsed, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn header_is_dropped_from_data_records() {
        let records = data_records("name,date\nRepublic Day,2026-01-26\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0][0], "Republic Day");
    }

    #[test]
    fn missing_trailing_field_reads_as_none() {
        let records = data_records("name,date\nRepublic Day,2026-01-26\nNew Year\n");
        assert_eq!(records.len(), 2);
        assert_eq!(field(&records[1], 0).as_deref(), Some("New Year"));
        assert_eq!(field(&records[1], 1), None);
    }
}
