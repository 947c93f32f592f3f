//! # gdpr-patterns
//!
//! Regex-based PII scanner. Pure functions over text, no I/O, no state.
//! Nine fixed pattern kinds; matches from different kinds may overlap in
//! character range — arbitration happens later, in the masking engine.

pub mod detector;
pub mod patterns;

pub use detector::PatternDetector;
