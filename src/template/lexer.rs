//! Splits a template into literal text and `{{…}}` tags.

/// A lexical unit of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Text(&'a str),
    /// A complete tag. `raw` includes the braces, `inner` does not.
    Tag {
        raw: &'a str,
        inner: &'a str,
        position: usize,
    },
    /// A `{{` that never closes before the next `{{` or the end of input.
    Unterminated { raw: &'a str, position: usize },
}

/// Tokenize a template. Positions are byte offsets into `template`.
pub(crate) fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(found) = template[cursor..].find("{{") {
        let mut open = cursor + found;
        push_text(&mut tokens, &template[cursor..open]);

        let Some(close_offset) = template[open + 2..].find("}}") else {
            tokens.push(Token::Unterminated {
                raw: &template[open..],
                position: open,
            });
            return tokens;
        };
        let close = open + 2 + close_offset;

        // The innermost opener before `}}` starts the tag; anything between
        // an earlier opener and it never closed.
        if let Some(inner_open) = template[open + 2..close].rfind("{{") {
            let tag_open = open + 2 + inner_open;
            tokens.push(Token::Unterminated {
                raw: &template[open..tag_open],
                position: open,
            });
            open = tag_open;
        }

        tokens.push(Token::Tag {
            raw: &template[open..close + 2],
            inner: &template[open + 2..close],
            position: open,
        });
        cursor = close + 2;
    }

    push_text(&mut tokens, &template[cursor..]);
    tokens
}

fn push_text<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
}
