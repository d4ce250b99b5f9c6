//! # seqorder Bench
//!
//! Benchmarking utilities for seqorder performance testing.

pub mod schemas;
