//! Field dictionary model.
//!
//! Every stage of the pipeline (resolver, anonymizer, interpreter) consumes and
//! produces the same flat dictionary:
//!
//! - keys are [`FieldKey`]s, a closed set of names the engine knows plus
//!   `Custom` for pass-through form fields
//! - values are [`FieldValue`]s, either text or a list of strings
//!
//! # JSON Format
//!
//! A [`FieldMap`] reads and writes a flat JSON object:
//!
//! ```text
//! {
//!   "nomeLocatario": "Ana Souza",
//!   "prazoDias": 30,
//!   "fiadores": ["Carlos Lima", "Rita Dias"],
//!   "observacao": null
//! }
//! ```
//!
//! Numbers and booleans are read as their text form, `null` means absent.
//! Legacy producers that send a list as a JSON-encoded string
//! (`"[\"Ana\",\"Bia\"]"`) are still understood wherever a list is expected.

mod key;
mod map;
mod value;


pub use key::FieldKey;
pub use map::FieldMap;
pub use value::FieldValue;
