//! # gdpr-entities
//!
//! Entity detector. Delegates span recognition to any
//! [`IEntityRecognizer`](gdpr_core::traits::IEntityRecognizer) backend,
//! then cleans up what recognizers typically get wrong: financial
//! boilerplate tagged as organizations, phone numbers tagged as dates,
//! and surnames split across adjacent spans.

pub mod detector;
pub mod filters;
pub mod reassembly;

pub use detector::EntityDetector;
