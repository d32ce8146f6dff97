//! TSV parser for rows pasted from a spreadsheet.
//!
//! # Format
//! ```text
//! English<TAB>Portuguese<TAB>Breakdown
//! hello<TAB>olá<TAB>greeting
//! cat<TAB>gato
//! ```
//!
//! The header row is optional and only recognised on the first non-blank
//! line. Rows missing either side are dropped; the rest are kept in order.

use crate::types::{FlashcardRecord, HeaderLabels};

/// Records read from a paste, plus what was thrown away.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub records: Vec<FlashcardRecord>,
    /// Non-blank lines that could not form a record.
    pub skipped: usize,
    pub header_dropped: bool,
}

/// Parse pasted TSV text into records using the default header labels.
pub fn parse(raw: &str) -> Vec<FlashcardRecord> {
    parse_report(raw, &HeaderLabels::default()).records
}

/// Parse pasted TSV text, reporting skipped lines and header detection.
pub fn parse_report(raw: &str, labels: &HeaderLabels) -> ParseReport {
    let mut parser = Parser::new(labels);

    for (idx, line) in raw.lines().enumerate() {
        parser.process_line(line, idx + 1);
    }

    parser.report
}

struct Row<'a> {
    source: &'a str,
    target: &'a str,
    note: &'a str,
}

enum LineType<'a> {
    Blank,
    /// Fewer than two tab-separated fields.
    Short,
    Row(Row<'a>),
}

struct Parser<'a> {
    labels: &'a HeaderLabels,
    seen_first: bool,
    report: ParseReport,
}

impl<'a> Parser<'a> {
    fn new(labels: &'a HeaderLabels) -> Self {
        Self {
            labels,
            seen_first: false,
            report: ParseReport::default(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) {
        match Self::parse_line(line) {
            LineType::Blank => {}
            LineType::Short => {
                self.seen_first = true;
                self.report.skipped += 1;
            }
            LineType::Row(row) => self.handle_row(row, line_num),
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        if line.trim().is_empty() {
            return LineType::Blank;
        }

        // Columns past the third are ignored.
        let mut fields = line.split('\t').map(str::trim);
        let source = fields.next().unwrap_or("");
        let Some(target) = fields.next() else {
            return LineType::Short;
        };
        let note = fields.next().unwrap_or("");

        LineType::Row(Row {
            source,
            target,
            note,
        })
    }

    fn handle_row(&mut self, row: Row<'_>, line_num: usize) {
        let is_first = !self.seen_first;
        self.seen_first = true;

        if is_first && self.labels.matches(row.source, row.target) {
            self.report.header_dropped = true;
            return;
        }

        match FlashcardRecord::new(row.source, row.target, row.note, line_num) {
            Some(record) => self.report.records.push(record),
            None => self.report.skipped += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn triples(records: &[FlashcardRecord]) -> Vec<(&str, &str, &str)> {
        records
            .iter()
            .map(|r| (r.source.as_str(), r.target.as_str(), r.note.as_str()))
            .collect()
    }

    #[test]
    fn drops_header_row() {
        let records = parse("English\tPortuguese\tBreakdown\nhello\tolá\tgreeting");
        assert_eq!(triples(&records), vec![("hello", "olá", "greeting")]);
    }

    #[test]
    fn missing_note_defaults_to_empty() {
        let records = parse("cat\tgato");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].note, "");
        assert!(!records[0].has_note());
    }

    #[test]
    fn ignores_blank_lines() {
        let records = parse("\n   \ncat\tgato\n");
        assert_eq!(triples(&records), vec![("cat", "gato", "")]);
        assert_eq!(records[0].line_number, 3);
    }

    #[test]
    fn keeps_well_formed_lines_among_malformed_ones() {
        let input = "dog\tcachorro\tanimal\n\
                     just one column\n\
                     \tmissing source\n\
                     missing target\t\n\
                     house\tcasa\n\
                     \t\t\n\
                     book\tlivro\tnoun";
        let report = parse_report(input, &HeaderLabels::default());

        assert_eq!(
            triples(&report.records),
            vec![
                ("dog", "cachorro", "animal"),
                ("house", "casa", ""),
                ("book", "livro", "noun"),
            ]
        );
        assert_eq!(report.skipped, 3);
        assert!(!report.header_dropped);

        let ids: HashSet<_> = report.records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn header_check_only_applies_to_first_line() {
        let records = parse("cat\tgato\nEnglish\tPortuguese");
        assert_eq!(
            triples(&records),
            vec![("cat", "gato", ""), ("English", "Portuguese", "")]
        );
    }

    #[test]
    fn header_detected_by_either_column() {
        assert!(parse("ENGLISH\tpt").is_empty());
        assert!(parse("en\tportuguese").is_empty());
    }

    #[test]
    fn header_detected_after_leading_blank_lines() {
        let report = parse_report("\n\nenglish\tportuguese\ncat\tgato", &HeaderLabels::default());
        assert!(report.header_dropped);
        assert_eq!(report.records.len(), 1);
    }

    #[test]
    fn short_first_line_consumes_header_slot() {
        let records = parse("title only\nEnglish\tPortuguese");
        assert_eq!(triples(&records), vec![("English", "Portuguese", "")]);
    }

    #[test]
    fn trims_fields_and_handles_crlf() {
        let records = parse("  cat \t gato  \t  feline \r\nhouse\tcasa\r\n");
        assert_eq!(
            triples(&records),
            vec![("cat", "gato", "feline"), ("house", "casa", "")]
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let records = parse("cat\tgato\tnoun\textra\tmore");
        assert_eq!(triples(&records), vec![("cat", "gato", "noun")]);
    }

    #[test]
    fn custom_header_labels() {
        let labels = HeaderLabels {
            source: "term".to_string(),
            target: "termo".to_string(),
        };
        let report = parse_report("Term\tTermo\nhello\tolá", &labels);
        assert!(report.header_dropped);
        assert_eq!(triples(&report.records), vec![("hello", "olá", "")]);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse("").is_empty());
    }
}
