//! # attest-core
//!
//! Core types and invariants for Attest.
//!
//! This crate provides the foundational types shared across all Attest crates:
//! - Domain structs (golden templates, submissions, analysis reports)
//! - The weighted trust-score formula
//! - JSON Schema registry for validating untyped records
//! - Cross-cutting error types

pub mod analysis;
pub mod errors;
pub mod schema;
pub mod score;
pub mod submission;
pub mod template;

pub use analysis::{AnalysisReport, CertificateAnalysis, NOT_FOUND};
pub use errors::CoreError;
pub use schema::{SchemaError, SchemaRegistry};
pub use submission::CertificateSubmission;
pub use template::GoldenTemplate;
