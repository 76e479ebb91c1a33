//! Club entry records and their file formats.
//!
//! Entries are stored as `;`-separated CSV with a single header line:
//!
//! ```text
//! country;city;club;trainer;year;score
//! Spain;Madrid;Real Madrid;Carlo Ancelotti;2014;87
//! ```
//!
//! Benchmark sizes are read from a plain text file of whitespace-separated
//! unsigned integers.

use std::fmt;
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::record::RecordError;

pub mod generate;

/// Default CSV field separator.
pub const DEFAULT_SEPARATOR: char = ';';

/// Header line written before entries.
pub const CSV_HEADER: [&str; 6] = ["country", "city", "club", "trainer", "year", "score"];

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// A football club entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClubEntry {
    /// Country the club plays in
    pub country: String,

    /// Home city
    pub city: String,

    /// Club name
    pub club: String,

    /// Coach's name, the key of the lookup benchmark
    pub trainer: String,

    /// Season year
    pub year: i32,

    /// Season score
    pub score: i32,
}

impl ClubEntry {
    /// Parses one CSV line.
    ///
    /// # Arguments
    ///
    /// * `line` - The text of the line, without its terminator.
    /// * `separator` - The field separator.
    /// * `line_number` - 1-based line number, used in errors.
    pub fn from_csv_line(line: &str, separator: char, line_number: usize) -> RecordResult<Self> {
        let mut fields = line.splitn(CSV_HEADER.len() + 1, separator);
        let mut next_field = |field: &'static str| {
            fields.next().ok_or(RecordError::MissingField {
                line: line_number,
                field,
            })
        };

        let country = next_field("country")?.to_string();
        let city = next_field("city")?.to_string();
        let club = next_field("club")?.to_string();
        let trainer = next_field("trainer")?.to_string();
        let year = parse_number(next_field("year")?, "year", line_number)?;
        let score = parse_number(next_field("score")?, "score", line_number)?;

        if let Some(rest) = fields.next() {
            return Err(RecordError::TrailingData {
                line: line_number,
                rest: rest.to_string(),
            });
        }

        Ok(Self {
            country,
            city,
            club,
            trainer,
            year,
            score,
        })
    }

    /// Renders the entry as one CSV line without a terminator.
    pub fn to_csv_line(&self, separator: char) -> String {
        format!(
            "{country}{sep}{city}{sep}{club}{sep}{trainer}{sep}{year}{sep}{score}",
            country = self.country,
            city = self.city,
            club = self.club,
            trainer = self.trainer,
            year = self.year,
            score = self.score,
            sep = separator,
        )
    }

    /// The string hashed by the collision benchmark: every text field joined.
    pub fn collision_key(&self) -> String {
        [
            self.country.as_str(),
            self.city.as_str(),
            self.club.as_str(),
            self.trainer.as_str(),
        ]
        .concat()
    }
}

impl fmt::Display for ClubEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "country: \"{}\"", self.country)?;
        writeln!(f, "city: \"{}\"", self.city)?;
        writeln!(f, "club: \"{}\"", self.club)?;
        writeln!(f, "trainer: \"{}\"", self.trainer)?;
        writeln!(f, "year: {}", self.year)?;
        writeln!(f, "score: {}", self.score)
    }
}

fn parse_number(text: &str, field: &'static str, line: usize) -> RecordResult<i32> {
    text.trim().parse().map_err(|_| RecordError::InvalidNumber {
        line,
        field,
        value: text.to_string(),
    })
}

/// Reads every entry of a CSV file, skipping the header line.
///
/// Blank lines are ignored. A trailing `\r` is stripped from each line.
pub fn read_entries_csv(path: &Path, separator: char) -> RecordResult<Vec<ClubEntry>> {
    let file = fs::File::open(path).map_err(|e| RecordError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line.map_err(|e| RecordError::io(path, e))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        entries.push(ClubEntry::from_csv_line(line, separator, index + 1)?);
    }

    tracing::debug!(path = %path.display(), entries = entries.len(), "Read club entries");
    Ok(entries)
}

/// Writes a header line followed by every entry.
pub fn write_entries_csv(path: &Path, entries: &[ClubEntry], separator: char) -> RecordResult<()> {
    let file = fs::File::create(path).map_err(|e| RecordError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let header = CSV_HEADER.join(&separator.to_string());
    writeln!(writer, "{header}").map_err(|e| RecordError::io(path, e))?;
    for entry in entries {
        writeln!(writer, "{}", entry.to_csv_line(separator)).map_err(|e| RecordError::io(path, e))?;
    }
    writer.flush().map_err(|e| RecordError::io(path, e))
}

/// Parses whitespace-separated unsigned integers.
pub fn parse_sizes(text: &str) -> RecordResult<Vec<usize>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| RecordError::InvalidSize(token.to_string()))
        })
        .collect()
}

/// Reads a sizes file.
pub fn read_sizes(path: &Path) -> RecordResult<Vec<usize>> {
    let text = fs::read_to_string(path).map_err(|e| RecordError::io(path, e))?;
    parse_sizes(&text)
}

/// Caps every size at `max_size`, then sorts and removes duplicates.
pub fn shrink_sizes(sizes: &mut Vec<usize>, max_size: usize) {
    for size in sizes.iter_mut() {
        *size = (*size).min(max_size);
    }
    sizes.sort_unstable();
    sizes.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample() -> ClubEntry {
        ClubEntry {
            country: "Spain".to_string(),
            city: "Madrid".to_string(),
            club: "Real Madrid".to_string(),
            trainer: "Carlo Ancelotti".to_string(),
            year: 2014,
            score: 87,
        }
    }

    #[test]
    fn test_parse_line() {
        let entry =
            ClubEntry::from_csv_line("Spain;Madrid;Real Madrid;Carlo Ancelotti;2014;87", ';', 2)
                .unwrap();
        assert_eq!(entry, sample());
    }

    #[test]
    fn test_csv_line_round_trip() {
        let entry = sample();
        let line = entry.to_csv_line(',');
        assert_eq!(line, "Spain,Madrid,Real Madrid,Carlo Ancelotti,2014,87");
        assert_eq!(ClubEntry::from_csv_line(&line, ',', 1).unwrap(), entry);
    }

    #[test_case("Spain;Madrid;Real Madrid;Carlo Ancelotti;2014", "score" ; "no score")]
    #[test_case("Spain;Madrid", "club" ; "no club")]
    fn test_missing_field(line: &str, expected: &str) {
        match ClubEntry::from_csv_line(line, ';', 7) {
            Err(RecordError::MissingField { line: 7, field }) => assert_eq!(field, expected),
            other => panic!("expected missing field, got {other:?}"),
        }
    }

    #[test_case("Spain;Madrid;Real Madrid;Carlo Ancelotti;twenty;87", "year" ; "bad year")]
    #[test_case("Spain;Madrid;Real Madrid;Carlo Ancelotti;2014;", "score" ; "empty score")]
    fn test_invalid_number(line: &str, expected: &str) {
        match ClubEntry::from_csv_line(line, ';', 3) {
            Err(RecordError::InvalidNumber { line: 3, field, .. }) => assert_eq!(field, expected),
            other => panic!("expected invalid number, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_data() {
        let result = ClubEntry::from_csv_line("Spain;Madrid;Real Madrid;Carlo Ancelotti;2014;87;x", ';', 4);
        assert!(matches!(result, Err(RecordError::TrailingData { line: 4, .. })));
    }

    #[test]
    fn test_collision_key() {
        assert_eq!(sample().collision_key(), "SpainMadridReal MadridCarlo Ancelotti");
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.contains("trainer: \"Carlo Ancelotti\""));
        assert!(text.contains("score: 87"));
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!(parse_sizes("100 200\n\t5000 ").unwrap(), vec![100, 200, 5000]);
        assert!(parse_sizes("").unwrap().is_empty());
        assert!(matches!(parse_sizes("10 -3"), Err(RecordError::InvalidSize(token)) if token == "-3"));
    }

    #[test]
    fn test_shrink_sizes() {
        let mut sizes = vec![5000, 100, 700, 100, 20_000];
        shrink_sizes(&mut sizes, 1000);
        assert_eq!(sizes, vec![100, 700, 1000]);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.csv");
        let mut second = sample();
        second.trainer = "Zinedine Zidane".to_string();
        second.year = 2017;

        write_entries_csv(&path, &[sample(), second.clone()], ';').unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("country;city;club;trainer;year;score\n"));

        let entries = read_entries_csv(&path, ';').unwrap();
        assert_eq!(entries, vec![sample(), second]);
    }

    #[test]
    fn test_read_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        fs::write(
            &path,
            "country;city;club;trainer;year;score\n\
             Spain;Madrid;Real Madrid;Carlo Ancelotti;2014;87\n\
             \n\
             Italy;Turin;Juventus;Massimiliano Allegri;year;90\n",
        )
        .unwrap();

        match read_entries_csv(&path, ';') {
            Err(RecordError::InvalidNumber { line, field, .. }) => {
                assert_eq!(line, 4);
                assert_eq!(field, "year");
            }
            other => panic!("expected invalid number, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = read_entries_csv(Path::new("/definitely/not/here.csv"), ';');
        assert!(matches!(result, Err(RecordError::Io { .. })));
    }
}
