#![allow(dead_code)]

use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const REFERENCE_LOAN: [&str; 8] = [
    "--principal",
    "120000",
    "--term",
    "12",
    "--rate",
    "6",
    "--start",
    "2024-01-15",
];

/// Writes a rate-change CSV with the standard header followed by `lines`.
pub fn changes_file(lines: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "type, row, delta")?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    file.flush()?;
    Ok(file)
}

/// Generates `count` alternating increase/decrease changes spread over a
/// schedule of `term` rows, walking from the first row to the last.
pub fn generate_changes(path: &Path, count: u32, term: u32) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "row", "delta"])?;

    for i in 0..count {
        let row = 1 + (i * term / count.max(1)).min(term - 1);
        let action = if i % 2 == 0 { "increase" } else { "decrease" };
        wtr.write_record([action, &row.to_string(), "0.25"])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Extracts the `rate` column from rendered CSV output.
pub fn rate_column(output: &[u8]) -> Vec<String> {
    let mut reader = csv::Reader::from_reader(output);
    reader
        .records()
        .map(|record| record.expect("valid schedule record")[6].to_string())
        .collect()
}
