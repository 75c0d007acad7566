//! Minuta: document generation for rental-contract paperwork.
//!
//! Raw form fields go through three pure stages:
//!
//! - [`grammar`] derives Portuguese agreement fields (gendered role terms,
//!   salutations, joined name lists) from raw names and gender markers.
//! - [`anonymize`] optionally redacts personal data.
//! - [`template`] renders a Handlebars-style template against the result.
//!
//! [`engine::DocumentEngine`] chains them with one [`config::Config`].
//!
//! ```
//! use chrono::NaiveDate;
//! use minuta::engine::DocumentEngine;
//!
//! let raw = minuta::fields! {
//!     "primeiroLocatario" => "ana souza",
//!     "segundoLocatario" => "beatriz lima",
//!     "generoLocatario" => "feminino",
//! };
//! let now = NaiveDate::from_ymd_opt(2024, 5, 20)
//!     .and_then(|d| d.and_hms_opt(9, 0, 0))
//!     .unwrap();
//! let document = DocumentEngine::default().generate("{{saudacaoLocatario}}", &raw, now);
//! assert_eq!(document, "Prezadas Ana e Beatriz");
//! ```

pub mod anonymize;
pub mod config;
pub mod dates;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod fields;
pub mod grammar;
pub mod names;
pub mod template;
