//! # gdpr-masking
//!
//! Turns a text plus its [`DetectionBundle`](gdpr_core::models::DetectionBundle)
//! into a masked rendering: every detected value replaced by a `[KIND]`
//! placeholder, plus one violation-provenance tag up front when the
//! semantic stage found anything.

pub mod engine;

pub use engine::MaskingEngine;
