//! gridcalc_engine - Cell model, value classification and formula evaluation.

pub mod engine;
