use crate::domain::loan::{LoanParameters, PaymentTerms};
use crate::domain::rate_change::RateChange;
use crate::domain::schedule::{PaymentRow, Schedule};
use crate::error::{Result, ScheduleError};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use std::ops::Range;
use tracing::{debug, info};

/// Computes an annuity schedule and keeps it current as the rate changes.
///
/// `AmortizationEngine` owns the loan parameters, the payment terms derived
/// from them and the schedule itself. Every operation either completes or
/// leaves all three untouched.
#[derive(Debug, Clone)]
pub struct AmortizationEngine {
    parameters: LoanParameters,
    terms: PaymentTerms,
    schedule: Schedule,
}

impl AmortizationEngine {
    /// Derives the payment terms and generates the full schedule.
    ///
    /// # Arguments
    ///
    /// * `parameters` - Validated loan inputs.
    pub fn new(parameters: LoanParameters) -> Result<Self> {
        let terms = PaymentTerms::derive(
            parameters.principal(),
            parameters.annual_rate(),
            parameters.term_months(),
        )?;
        let rows = build_rows(
            &terms,
            parameters.annual_rate(),
            0..parameters.term_months() as usize,
            parameters.principal(),
            parameters.start_date(),
        )?;

        debug!(
            principal = %parameters.principal(),
            term_months = parameters.term_months(),
            annual_rate = %parameters.annual_rate(),
            payment = %terms.fixed_payment,
            "Generated schedule"
        );

        Ok(Self {
            parameters,
            terms,
            schedule: Schedule::from_rows(rows),
        })
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn parameters(&self) -> &LoanParameters {
        &self.parameters
    }

    pub fn terms(&self) -> &PaymentTerms {
        &self.terms
    }

    /// Consumes the engine and returns the final schedule.
    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    /// Changes the rate from `row_index` onwards and recomputes the tail.
    ///
    /// The new rate is the rate stored on that row plus `rate_delta` (in
    /// percentage points). The balance on that row becomes the working
    /// principal, amortized over the months that remain. Rows before
    /// `row_index` and all due dates are left as they are.
    pub fn apply_rate_change_at(&mut self, row_index: usize, rate_delta: Decimal) -> Result<&Schedule> {
        let len = self.schedule.len();
        let (principal, anchor_rate, anchor_date) = match self.schedule.get(row_index) {
            Some(row) => (row.remaining_principal, row.interest_rate, row.due_date),
            None => {
                return Err(ScheduleError::IndexOutOfRange {
                    index: row_index,
                    len,
                });
            }
        };

        let annual_rate = anchor_rate
            .checked_add(rate_delta)
            .ok_or_else(|| ScheduleError::overflow("annual rate"))?;
        if annual_rate < Decimal::ZERO {
            return Err(ScheduleError::invalid(
                "annual_rate",
                format!("rate change would make the rate negative ({annual_rate})"),
            ));
        }

        let remaining_term = (len - row_index) as u32;
        let terms = PaymentTerms::derive(principal, annual_rate, remaining_term)?;
        let tail = build_rows(&terms, annual_rate, row_index..len, principal, anchor_date)?;

        self.parameters.rebase(principal, annual_rate);
        self.terms = terms;
        self.schedule.replace_from(row_index, tail);

        info!(
            row = row_index + 1,
            annual_rate = %annual_rate,
            payment = %terms.fixed_payment,
            "Applied rate change"
        );

        Ok(&self.schedule)
    }

    /// Applies a rate change addressed by 1-based row number.
    pub fn apply_rate_change(&mut self, change: &RateChange) -> Result<&Schedule> {
        let row_index = change.row_index()?;
        let delta = change.delta_percent()?;
        self.apply_rate_change_at(row_index, delta)
    }
}

/// Computes the rows for `indices` in order.
///
/// The first row opens the (sub)schedule with `opening_balance` on
/// `opening_date`; each following row carries the previous row's balance and
/// falls due one calendar month later.
fn build_rows(
    terms: &PaymentTerms,
    annual_rate: Decimal,
    indices: Range<usize>,
    opening_balance: Decimal,
    opening_date: NaiveDate,
) -> Result<Vec<PaymentRow>> {
    let mut rows: Vec<PaymentRow> = Vec::with_capacity(indices.len());

    for index in indices {
        let row = match rows.last() {
            None => compute_row(terms, annual_rate, index, opening_balance, opening_date, true)?,
            Some(previous) => compute_row(
                terms,
                annual_rate,
                index,
                previous.remaining_principal,
                next_due_date(previous.due_date)?,
                false,
            )?,
        };
        rows.push(row);
    }

    Ok(rows)
}

fn compute_row(
    terms: &PaymentTerms,
    annual_rate: Decimal,
    index: usize,
    credit_left: Decimal,
    due_date: NaiveDate,
    opening: bool,
) -> Result<PaymentRow> {
    // The opening row shows the balance it starts from.
    let remaining_principal = if opening {
        credit_left
    } else {
        let interest = credit_left
            .checked_mul(terms.monthly_rate)
            .ok_or_else(|| ScheduleError::overflow("interest component"))?;
        credit_left - (terms.fixed_payment - interest)
    };

    let interest_component = remaining_principal
        .checked_mul(terms.monthly_rate)
        .ok_or_else(|| ScheduleError::overflow("interest component"))?;
    let principal_component = terms.fixed_payment - interest_component;

    Ok(PaymentRow {
        sequence_number: (index + 1) as u32,
        due_date,
        remaining_principal,
        principal_component,
        interest_component,
        total_payment: principal_component + interest_component,
        interest_rate: annual_rate,
    })
}

/// One calendar month later, clamped to the last day of shorter months.
fn next_due_date(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(1))
        .ok_or_else(|| ScheduleError::overflow("due date"))
}
