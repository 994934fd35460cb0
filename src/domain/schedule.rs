use crate::error::{Result, ScheduleError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One billing period of the schedule.
///
/// Rows are computed by the engine and handed out by reference only, so they
/// never change after creation; a rate change replaces them instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRow {
    /// 1-based position in the schedule.
    #[serde(rename = "id")]
    pub sequence_number: u32,
    pub due_date: NaiveDate,
    /// Principal still owed. The first row of a (sub)schedule reports the
    /// opening balance rather than the balance after its payment.
    pub remaining_principal: Decimal,
    #[serde(rename = "principal")]
    pub principal_component: Decimal,
    #[serde(rename = "interest")]
    pub interest_component: Decimal,
    #[serde(rename = "total")]
    pub total_payment: Decimal,
    /// Annual rate in percent that was in effect when the row was computed.
    #[serde(rename = "rate")]
    pub interest_rate: Decimal,
}

/// Aggregates over a whole schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub payments: usize,
    pub total_principal: Decimal,
    pub total_interest: Decimal,
    pub total_paid: Decimal,
}

/// Ordered payment rows, indexed by `sequence_number - 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    rows: Vec<PaymentRow>,
}

impl Schedule {
    pub(crate) fn from_rows(rows: Vec<PaymentRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PaymentRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PaymentRow> {
        self.rows.get(index)
    }

    pub fn last(&self) -> Option<&PaymentRow> {
        self.rows.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaymentRow> {
        self.rows.iter()
    }

    /// Replaces every row from `index` onwards with `tail`.
    ///
    /// The caller computes `tail` in full before calling, so a failed
    /// recomputation never leaves a half-written schedule behind.
    pub(crate) fn replace_from(&mut self, index: usize, tail: Vec<PaymentRow>) {
        debug_assert_eq!(index + tail.len(), self.rows.len());
        self.rows.truncate(index);
        self.rows.extend(tail);
    }

    /// Totals over every row. Fails rather than wrapping when a total leaves
    /// the decimal range.
    pub fn summary(&self) -> Result<ScheduleSummary> {
        let (total_principal, total_interest) = self.rows.iter().try_fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(principal, interest), row| {
                Some((
                    principal.checked_add(row.principal_component)?,
                    interest.checked_add(row.interest_component)?,
                ))
            },
        )
        .ok_or_else(|| ScheduleError::overflow("schedule totals"))?;
        let total_paid = total_principal
            .checked_add(total_interest)
            .ok_or_else(|| ScheduleError::overflow("schedule totals"))?;

        Ok(ScheduleSummary {
            payments: self.rows.len(),
            total_principal,
            total_interest,
            total_paid,
        })
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a PaymentRow;
    type IntoIter = std::slice::Iter<'a, PaymentRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(sequence_number: u32, principal: Decimal, interest: Decimal) -> PaymentRow {
        PaymentRow {
            sequence_number,
            due_date: NaiveDate::from_ymd_opt(2024, sequence_number, 1).unwrap(),
            remaining_principal: dec!(100),
            principal_component: principal,
            interest_component: interest,
            total_payment: principal + interest,
            interest_rate: dec!(5),
        }
    }

    #[test]
    fn test_summary_totals() {
        let schedule = Schedule::from_rows(vec![
            row(1, dec!(40), dec!(2)),
            row(2, dec!(60), dec!(1)),
        ]);

        let summary = schedule.summary().unwrap();
        assert_eq!(summary.payments, 2);
        assert_eq!(summary.total_principal, dec!(100));
        assert_eq!(summary.total_interest, dec!(3));
        assert_eq!(summary.total_paid, dec!(103));
    }

    #[test]
    fn test_summary_overflow_is_an_error() {
        let half = Decimal::MAX / dec!(2);
        let schedule = Schedule::from_rows(vec![
            row(1, dec!(1), half),
            row(2, dec!(1), half),
            row(3, dec!(1), half),
        ]);

        assert!(matches!(
            schedule.summary(),
            Err(ScheduleError::NumericOverflow { context }) if context == "schedule totals"
        ));
    }

    #[test]
    fn test_replace_from_keeps_prefix() {
        let mut schedule = Schedule::from_rows(vec![
            row(1, dec!(10), dec!(1)),
            row(2, dec!(10), dec!(1)),
            row(3, dec!(10), dec!(1)),
        ]);
        let prefix = schedule.get(0).cloned().unwrap();

        schedule.replace_from(1, vec![row(2, dec!(20), dec!(2)), row(3, dec!(30), dec!(3))]);

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.get(0), Some(&prefix));
        assert_eq!(schedule.get(2).unwrap().principal_component, dec!(30));
    }

    #[test]
    fn test_row_serialization_field_names() {
        let json = serde_json::to_value(row(1, dec!(10), dec!(1))).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["due_date"], "2024-01-01");
        assert_eq!(json["principal"], "10");
        assert_eq!(json["rate"], "5");
    }
}
