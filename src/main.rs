use amortize::application::engine::AmortizationEngine;
use amortize::domain::ports::ScheduleRendererBox;
use amortize::interfaces::csv::rate_change_reader::RateChangeReader;
use amortize::interfaces::csv::schedule_writer::CsvScheduleWriter;
use amortize::interfaces::input::LoanForm;
use amortize::interfaces::json::schedule_writer::JsonScheduleWriter;
use amortize::logging;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amount borrowed
    #[arg(long, allow_negative_numbers = true)]
    principal: Decimal,

    /// Number of monthly payments
    #[arg(long, allow_negative_numbers = true)]
    term: i64,

    /// Annual interest rate in percent
    #[arg(long, allow_negative_numbers = true)]
    rate: Decimal,

    /// Due date of the first payment (YYYY-MM-DD)
    #[arg(long)]
    start: String,

    /// CSV file of rate changes (`type, row, delta`), applied in order
    #[arg(long)]
    changes: Option<PathBuf>,

    /// Output format for the schedule
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    // Rejected input never reaches the engine
    let form = LoanForm {
        principal: cli.principal,
        term_months: cli.term,
        annual_rate: cli.rate,
        start_date: cli.start,
    };
    let parameters = form.collect().into_diagnostic()?;
    let mut engine = AmortizationEngine::new(parameters).into_diagnostic()?;

    if let Some(path) = cli.changes {
        let file = File::open(path).into_diagnostic()?;
        let reader = RateChangeReader::new(file);
        for change_result in reader.changes() {
            match change_result {
                Ok(change) => {
                    if let Err(e) = engine.apply_rate_change(&change) {
                        warn!(row = change.row, error = %e, "Skipping rate change");
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Error reading rate change");
                }
            }
        }
    }

    let stdout = io::stdout();
    let mut renderer: ScheduleRendererBox = match cli.format {
        OutputFormat::Csv => Box::new(CsvScheduleWriter::new(stdout.lock())),
        OutputFormat::Json => Box::new(JsonScheduleWriter::new(stdout.lock())),
    };
    renderer.render(engine.schedule()).into_diagnostic()?;

    Ok(())
}
