use crate::domain::loan::LoanParameters;
use crate::error::{Result, ScheduleError};
use chrono::NaiveDate;
use rust_decimal::Decimal;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw loan inputs as a user typed them.
///
/// `collect` is the gate in front of the engine: any numeric field below 1
/// or an unparseable date rejects the whole form and no engine gets built.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanForm {
    pub principal: Decimal,
    pub term_months: i64,
    pub annual_rate: Decimal,
    pub start_date: String,
}

impl LoanForm {
    pub fn collect(&self) -> Result<LoanParameters> {
        require_at_least_one("principal", self.principal)?;
        require_at_least_one("term_months", Decimal::from(self.term_months))?;
        require_at_least_one("annual_rate", self.annual_rate)?;

        let term_months = u32::try_from(self.term_months)
            .map_err(|_| ScheduleError::invalid("term_months", "too many months"))?;
        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), DATE_FORMAT)?;

        LoanParameters::new(self.principal, term_months, self.annual_rate, start_date)
    }
}

fn require_at_least_one(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ONE {
        return Err(ScheduleError::invalid(field, "must be at least 1"));
    }
    Ok(())
}
