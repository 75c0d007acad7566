//! Portuguese agreement for contract documents.
//!
//! The resolver turns raw form fields into the derived fields templates use
//! for gender and number agreement: role nouns (`LOCATÁRIA`, `os locadores`),
//! contractions (`da locatária`, `aos locadores`), greetings
//! (`Prezadas Ana e Beatriz`) and formatted name lists.
//!
//! Resolution works per party role in a single pass:
//!
//! 1. Collect names from discrete slots, or split the free-text name field
//!    when no slot is filled.
//! 2. Read the gender marker (`masculino|feminino|masculinos|femininos`).
//!    A plural marker forces plural; otherwise the name count decides.
//!    No marker means [`DEFAULT_GENDER`].
//! 3. Pick every phrase from the resulting [`Agreement`].
//!
//! Nothing is cached: derived fields are rebuilt from the raw input on every
//! call. The resolver never fails; missing names produce placeholder text.

mod agreement;
mod party;
mod resolver;

#[cfg(test)]
mod tests;

pub use agreement::{
    Agreement, DEFAULT_GENDER, FIADOR, Gender, GenderMarker, LOCADOR, LOCATARIO, Noun, Number,
    PROPRIETARIO,
};
pub use party::{NameSource, Party, Role};
pub use resolver::{
    FIRST_NAME_PLACEHOLDER, FREE_TEXT_PLACEHOLDER, OWNER_NAME_PLACEHOLDER, Resolver,
    TENANT_NAME_PLACEHOLDER,
};
