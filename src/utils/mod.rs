//! Shared helpers for validating MAF fields.

pub mod validation;
