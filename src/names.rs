//! Name-list tokenizing and joining.
//!
//! Party names arrive either in discrete slots or as one free-text field such
//! as `"Ana Souza, Bruno Lima e Carla Dias"`. The separator grammar is fixed:
//!
//! - `,` separates names
//! - a line break separates names
//! - the standalone word `e` or `E` separates names
//!
//! A letter `e` inside a word (`Rafael`, `Helena`) is never a separator. A
//! surname particle written as a bare `e` (`Souza e Silva`) is read as a
//! separator; the grammar has no way to tell the two apart.
//!
//! Joining follows the Portuguese list rule used across every generated
//! document: one name stands alone, two are joined by `e`, three or more use
//! commas with `e` before the last.

/// A separator recognised by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Comma,
    Newline,
    Conjunction,
}

/// A lexical unit of a free-text name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameToken<'a> {
    Word(&'a str),
    Separator(Separator),
}

/// Split a free-text name field into words and separators.
pub fn tokenize(text: &str) -> Vec<NameToken<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (pos, ch) in text.char_indices() {
        let separator = match ch {
            ',' => Some(Separator::Comma),
            '\n' => Some(Separator::Newline),
            _ => None,
        };

        if separator.is_some() || ch.is_whitespace() {
            if let Some(start) = word_start.take() {
                push_word(&mut tokens, &text[start..pos]);
            }
            if let Some(sep) = separator {
                tokens.push(NameToken::Separator(sep));
            }
        } else if word_start.is_none() {
            word_start = Some(pos);
        }
    }

    if let Some(start) = word_start {
        push_word(&mut tokens, &text[start..]);
    }

    tokens
}

fn push_word<'a>(tokens: &mut Vec<NameToken<'a>>, word: &'a str) {
    if word == "e" || word == "E" {
        tokens.push(NameToken::Separator(Separator::Conjunction));
    } else {
        tokens.push(NameToken::Word(word));
    }
}

/// Split a free-text field into individual names.
///
/// Whitespace inside each name is collapsed to single spaces; empty entries
/// are dropped.
///
/// ```
/// use minuta::names::split_names;
///
/// assert_eq!(
///     split_names("Ana Souza, Bruno Lima e Carla Dias"),
///     vec!["Ana Souza", "Bruno Lima", "Carla Dias"]
/// );
/// ```
pub fn split_names(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in tokenize(text) {
        match token {
            NameToken::Word(word) => current.push(word),
            NameToken::Separator(_) => {
                if !current.is_empty() {
                    names.push(current.join(" "));
                    current.clear();
                }
            }
        }
    }
    if !current.is_empty() {
        names.push(current.join(" "));
    }

    names
}

/// Whether a free-text field names more than one person.
pub fn has_multiple_names(text: &str) -> bool {
    split_names(text).len() > 1
}

/// Join names with the Portuguese list rule.
///
/// ```
/// use minuta::names::join_names;
///
/// assert_eq!(join_names(&["Ana"]), "Ana");
/// assert_eq!(join_names(&["Ana", "Bia"]), "Ana e Bia");
/// assert_eq!(join_names(&["Ana", "Bia", "Caio"]), "Ana, Bia e Caio");
/// ```
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|n| n.as_ref()).collect();
            format!("{} e {}", head.join(", "), last.as_ref())
        }
    }
}

/// Join names with the list rule, wrapping each name in `<tag>…</tag>`.
///
/// An empty tag disables the markup.
pub fn join_emphasized<S: AsRef<str>>(names: &[S], tag: &str) -> String {
    if tag.is_empty() {
        return join_names(names);
    }
    let wrapped: Vec<String> = names
        .iter()
        .map(|n| format!("<{tag}>{}</{tag}>", n.as_ref()))
        .collect();
    join_names(&wrapped)
}

/// The first whitespace-separated word of a full name.
pub fn first_name(full_name: &str) -> Option<&str> {
    full_name.split_whitespace().next()
}

/// Upper-case the first letter and lower-case the rest.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
