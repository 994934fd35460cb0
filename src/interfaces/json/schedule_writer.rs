use crate::domain::ports::ScheduleRenderer;
use crate::domain::schedule::{Schedule, ScheduleSummary};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ScheduleDocument<'a> {
    rows: &'a Schedule,
    summary: ScheduleSummary,
}

/// Renders a schedule as a pretty-printed JSON document with a totals summary.
pub struct JsonScheduleWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonScheduleWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ScheduleRenderer for JsonScheduleWriter<W> {
    fn render(&mut self, schedule: &Schedule) -> Result<()> {
        let document = ScheduleDocument {
            rows: schedule,
            summary: schedule.summary()?,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
