//! Bulk loading of `source;destination` records.

use std::io::Read;

use crate::client::SaveClient;
use crate::error::{Error, Result};
use crate::model::Mapping;

pub const SEPARATOR: u8 = b';';

/// Reads every record before returning, so one bad line rejects the whole input.
///
/// Fields follow the usual CSV quoting rules: a quoted field may hold the
/// separator, and `""` inside quotes stands for one quote.
pub fn read_mappings<R: Read>(reader: R) -> Result<Vec<Mapping>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(SEPARATOR)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut mappings = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 2 {
            return Err(Error::BadRecord {
                line: record.position().map_or(0, |pos| pos.line() as usize),
                record: record.iter().collect::<Vec<_>>().join(";"),
            });
        }
        mappings.push(Mapping::new(&record[0], &record[1]));
    }

    Ok(mappings)
}

/// Parses the whole input, then posts each mapping. Nothing is sent when
/// any record is malformed.
pub async fn import_mappings<R: Read>(client: &SaveClient, reader: R) -> Result<usize> {
    let mappings = read_mappings(reader)?;
    client.save_all(&mappings).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records_and_skips_blank_lines() {
        let input = "docs;https://docs.example.com\r\n\nissue/%s;https://tracker.example.com/%s\n";
        let mappings = read_mappings(input.as_bytes()).unwrap();
        assert_eq!(
            mappings,
            vec![
                Mapping::new("docs", "https://docs.example.com"),
                Mapping::new("issue/%s", "https://tracker.example.com/%s"),
            ]
        );
    }

    #[test]
    fn rejects_record_with_wrong_field_count() {
        let input = "docs;https://docs.example.com\nbroken\n";
        match read_mappings(input.as_bytes()) {
            Err(Error::BadRecord { line, record }) => {
                assert_eq!(line, 2);
                assert_eq!(record, "broken");
            }
            other => panic!("expected bad record, got {other:?}"),
        }

        assert!(read_mappings("a;b;c".as_bytes()).is_err());
    }

    #[test]
    fn quoted_field_may_contain_separator() {
        let mappings = read_mappings("\"a;b\";https://x\n".as_bytes()).unwrap();
        assert_eq!(mappings, vec![Mapping::new("a;b", "https://x")]);
    }

    #[test]
    fn quotes_are_stripped_and_unescaped() {
        let input = "\"docs\";https://d\n\"say \"\"hi\"\"\";https://hi\n";
        let mappings = read_mappings(input.as_bytes()).unwrap();
        assert_eq!(
            mappings,
            vec![
                Mapping::new("docs", "https://d"),
                Mapping::new("say \"hi\"", "https://hi"),
            ]
        );
    }
}
