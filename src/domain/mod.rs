//! Domain types for annuity loans: parameters, derived payment terms,
//! schedule rows and rate-change requests.

pub mod loan;
pub mod ports;
pub mod rate_change;
pub mod schedule;
