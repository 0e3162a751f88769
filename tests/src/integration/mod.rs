//! # Integration Tests
//!
//! Whole-pipeline tests across `fox-ordering` and the `fox-names` front end.

pub mod scenarios;
