//! Application layer containing the amortization engine.
//!
//! `AmortizationEngine` owns a loan and its schedule. Presentation code talks
//! to it through plain data: parameters in, schedule rows out.

pub mod engine;
