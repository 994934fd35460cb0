use crate::domain::ports::ScheduleRenderer;
use crate::domain::schedule::Schedule;
use crate::error::Result;
use std::io::Write;

/// Renders a schedule as CSV, one record per payment row.
pub struct CsvScheduleWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvScheduleWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }
}

impl<W: Write> ScheduleRenderer for CsvScheduleWriter<W> {
    fn render(&mut self, schedule: &Schedule) -> Result<()> {
        for row in schedule {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::AmortizationEngine;
    use crate::domain::loan::LoanParameters;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writes_header_and_one_line_per_row() {
        let parameters = LoanParameters::new(
            dec!(120000),
            12,
            dec!(6),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
        .unwrap();
        let engine = AmortizationEngine::new(parameters).unwrap();

        let mut buf = Vec::new();
        CsvScheduleWriter::new(&mut buf)
            .render(engine.schedule())
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines[0],
            "id,due_date,remaining_principal,principal,interest,total,rate"
        );
        assert!(lines[1].starts_with("1,2024-01-15,120000,"));
        assert!(lines[1].ends_with(",6"));
        assert!(lines[12].starts_with("12,2024-12-15,"));
    }
}
