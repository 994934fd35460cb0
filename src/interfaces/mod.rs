//! Boundary adapters: the input collector, the rate-change CSV source and the
//! schedule renderers.

pub mod csv;
pub mod input;
pub mod json;
