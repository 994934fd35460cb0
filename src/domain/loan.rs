use crate::error::{Result, ScheduleError};
use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// The inputs that define a loan.
///
/// Constructed through [`LoanParameters::new`], which rejects non-positive
/// values instead of letting them degrade into meaningless numbers further down.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanParameters {
    principal: Decimal,
    term_months: u32,
    annual_rate: Decimal,
    start_date: NaiveDate,
}

impl LoanParameters {
    /// Validates and bundles the loan inputs.
    ///
    /// # Arguments
    ///
    /// * `principal` - The amount borrowed. Must be positive.
    /// * `term_months` - Number of monthly payments. Must be at least one.
    /// * `annual_rate` - Annual interest rate in percent (`6` means 6%). Must be positive.
    /// * `start_date` - Due date of the first payment.
    pub fn new(
        principal: Decimal,
        term_months: u32,
        annual_rate: Decimal,
        start_date: NaiveDate,
    ) -> Result<Self> {
        if principal <= Decimal::ZERO {
            return Err(ScheduleError::invalid("principal", "must be positive"));
        }
        if term_months == 0 {
            return Err(ScheduleError::invalid("term_months", "must be at least 1"));
        }
        if annual_rate <= Decimal::ZERO {
            return Err(ScheduleError::invalid("annual_rate", "must be positive"));
        }
        // The last due date must exist before any row is built.
        if start_date
            .checked_add_months(Months::new(term_months - 1))
            .is_none()
        {
            return Err(ScheduleError::invalid(
                "term_months",
                "last payment falls outside the supported calendar range",
            ));
        }

        Ok(Self {
            principal,
            term_months,
            annual_rate,
            start_date,
        })
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn annual_rate(&self) -> Decimal {
        self.annual_rate
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Moves the working principal and rate to a new anchor after a rate change.
    /// The term is left alone: it always matches the schedule length.
    pub(crate) fn rebase(&mut self, principal: Decimal, annual_rate: Decimal) {
        self.principal = principal;
        self.annual_rate = annual_rate;
    }
}

/// Converts an annual percentage rate into a monthly decimal fraction.
pub fn monthly_rate(annual_rate: Decimal) -> Decimal {
    annual_rate / MONTHS_PER_YEAR / PERCENT
}

/// Fraction of the principal that makes up one fixed annuity payment.
///
/// Equal to `r(1+r)^n / ((1+r)^n - 1)`, evaluated as `r / (1 - (1+r)^-n)` so
/// that long terms shrink towards zero instead of overflowing. A zero rate
/// spreads the principal evenly (`1/n`).
pub fn annuity_coefficient(monthly_rate: Decimal, term_months: u32) -> Result<Decimal> {
    if term_months == 0 {
        return Err(ScheduleError::invalid("term_months", "must be at least 1"));
    }
    if monthly_rate < Decimal::ZERO {
        return Err(ScheduleError::invalid("annual_rate", "must not be negative"));
    }
    if monthly_rate.is_zero() {
        return Ok(Decimal::ONE / Decimal::from(term_months));
    }

    let discount = Decimal::ONE / (Decimal::ONE + monthly_rate);
    let discounted = discount
        .checked_powu(u64::from(term_months))
        .ok_or_else(|| ScheduleError::overflow("annuity discount factor"))?;

    let denominator = Decimal::ONE - discounted;
    if denominator.is_zero() {
        return Err(ScheduleError::DivisionByZero {
            context: "annuity coefficient".to_string(),
        });
    }

    monthly_rate
        .checked_div(denominator)
        .ok_or_else(|| ScheduleError::overflow("annuity coefficient"))
}

/// Values derived from principal, rate and term.
///
/// Recomputed whenever the rate or the working principal changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentTerms {
    /// Annual rate / 12 / 100.
    pub monthly_rate: Decimal,
    pub annuity_factor: Decimal,
    pub fixed_payment: Decimal,
}

impl PaymentTerms {
    pub fn derive(principal: Decimal, annual_rate: Decimal, term_months: u32) -> Result<Self> {
        let monthly_rate = monthly_rate(annual_rate);
        let annuity_factor = annuity_coefficient(monthly_rate, term_months)?;
        let fixed_payment = annuity_factor
            .checked_mul(principal)
            .ok_or_else(|| ScheduleError::overflow("fixed monthly payment"))?;

        Ok(Self {
            monthly_rate,
            annuity_factor,
            fixed_payment,
        })
    }
}
