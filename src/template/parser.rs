//! Template parser.
//!
//! Parsing never fails. Anything that is not a well-formed directive is kept
//! as literal text and reported as a [`TemplateIssue`]:
//!
//! - an unterminated `{{` is literal text
//! - an unknown block, a block header with wrong arguments, or an opener with
//!   no matching closer is literal text; its contents are still parsed
//! - a stray closer or `{{#else}}` outside `if`/`eq` is literal text
//! - an unknown helper is literal text
//! - a block nested deeper than [`MAX_NESTING_DEPTH`] is literal text, along
//!   with its matching closer

use super::ast::{Helper, Node, extend_nodes, push_text};
use super::lexer::{Token, tokenize};
use std::fmt;

/// Deepest block nesting the parser builds into the directive tree.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A problem found while parsing a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateIssue {
    /// A `{{` without a closing `}}`.
    UnterminatedTag { position: usize },
    /// `{{#name …}}` for a block that does not exist.
    UnknownBlock { name: String, position: usize },
    /// A known block opened with the wrong arguments.
    MalformedHeader { block: String, position: usize },
    /// A tag whose contents are neither a variable nor a helper call.
    MalformedTag { tag: String, position: usize },
    /// `{{helper field}}` with an unknown helper.
    UnknownHelper { name: String, position: usize },
    /// A block opener that is never closed.
    UnclosedBlock { block: String, position: usize },
    /// A closer with no open block.
    StrayCloser { block: String, position: usize },
    /// A closer that does not match the innermost open block.
    MismatchedCloser {
        expected: String,
        found: String,
        position: usize,
    },
    /// `{{#else}}` outside `if`/`eq`, or a second else in one block.
    StrayElse { position: usize },
    /// The number of block openers and closers differ.
    CountMismatch { opened: usize, closed: usize },
    /// A block opened beyond [`MAX_NESTING_DEPTH`].
    NestingTooDeep { block: String, position: usize },
}

impl fmt::Display for TemplateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateIssue::UnterminatedTag { position } => {
                write!(f, "unterminated '{{{{' at position {}", position)
            }
            TemplateIssue::UnknownBlock { name, position } => {
                write!(f, "unknown block '#{}' at position {}", name, position)
            }
            TemplateIssue::MalformedHeader { block, position } => {
                write!(f, "malformed '#{}' header at position {}", block, position)
            }
            TemplateIssue::MalformedTag { tag, position } => {
                write!(f, "malformed tag '{}' at position {}", tag, position)
            }
            TemplateIssue::UnknownHelper { name, position } => {
                write!(f, "unknown helper '{}' at position {}", name, position)
            }
            TemplateIssue::UnclosedBlock { block, position } => {
                write!(f, "block '#{}' at position {} is never closed", block, position)
            }
            TemplateIssue::StrayCloser { block, position } => {
                write!(f, "'/{}' at position {} closes no open block", block, position)
            }
            TemplateIssue::MismatchedCloser {
                expected,
                found,
                position,
            } => write!(
                f,
                "'/{}' at position {} does not match open block '#{}'",
                found, position, expected
            ),
            TemplateIssue::StrayElse { position } => {
                write!(f, "'else' at position {} is outside an if/eq block", position)
            }
            TemplateIssue::CountMismatch { opened, closed } => write!(
                f,
                "{} block opener(s) but {} closer(s)",
                opened, closed
            ),
            TemplateIssue::NestingTooDeep { block, position } => write!(
                f,
                "block '#{}' at position {} is nested deeper than {} levels",
                block, position, MAX_NESTING_DEPTH
            ),
        }
    }
}

/// A tag argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arg<'a> {
    Path(&'a str),
    Literal(&'a str),
}

/// A well-formed block header.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Each { list: String },
    Equals { field: String, literal: String },
    If { field: String },
    Unless { field: String },
}

impl Block {
    fn name(&self) -> &'static str {
        match self {
            Block::Each { .. } => "each",
            Block::Equals { .. } => "eq",
            Block::If { .. } => "if",
            Block::Unless { .. } => "unless",
        }
    }

    fn accepts_else(&self) -> bool {
        matches!(self, Block::Equals { .. } | Block::If { .. })
    }
}

/// What a single tag means, before block matching.
enum Tag<'a> {
    Open(Block),
    Else,
    Close(&'a str),
    Node(Node),
    Literal(TemplateIssue),
}

/// An open block awaiting its closer.
struct Frame<'a> {
    block: Block,
    opener: &'a str,
    position: usize,
    then: Vec<Node>,
    otherwise: Option<(&'a str, Vec<Node>)>,
}

impl<'a> Frame<'a> {
    fn nodes_mut(&mut self) -> &mut Vec<Node> {
        match &mut self.otherwise {
            Some((_, nodes)) => nodes,
            None => &mut self.then,
        }
    }

    fn into_node(self) -> Node {
        let (then, otherwise) = (self.then, self.otherwise.map(|(_, n)| n).unwrap_or_default());
        match self.block {
            Block::Each { list } => Node::Each { list, body: then },
            Block::Equals { field, literal } => Node::Equals {
                field,
                literal,
                then,
                otherwise,
            },
            Block::If { field } => Node::If {
                field,
                then,
                otherwise,
            },
            Block::Unless { field } => Node::Unless { field, body: then },
        }
    }

    /// The frame as literal opener text followed by its parsed contents.
    fn into_literal(self) -> Vec<Node> {
        let mut nodes = vec![Node::Text(self.opener.to_string())];
        extend_nodes(&mut nodes, self.then);
        if let Some((raw, otherwise)) = self.otherwise {
            push_text(&mut nodes, raw);
            extend_nodes(&mut nodes, otherwise);
        }
        nodes
    }
}

struct Parser<'a> {
    root: Vec<Node>,
    stack: Vec<Frame<'a>>,
    /// Names of blocks opened past the depth limit, kept as literal text.
    too_deep: Vec<&'static str>,
    issues: Vec<TemplateIssue>,
    opened: usize,
    closed: usize,
}

impl<'a> Parser<'a> {
    fn current(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(frame) => frame.nodes_mut(),
            None => &mut self.root,
        }
    }

    fn literal(&mut self, raw: &str) {
        push_text(self.current(), raw);
    }

    fn token(&mut self, token: Token<'a>) {
        match token {
            Token::Text(text) => self.literal(text),
            Token::Unterminated { raw, position } => {
                self.issues.push(TemplateIssue::UnterminatedTag { position });
                self.literal(raw);
            }
            Token::Tag {
                raw,
                inner,
                position,
            } => self.tag(raw, inner, position),
        }
    }

    fn tag(&mut self, raw: &'a str, inner: &'a str, position: usize) {
        let tag = classify(inner, position);
        if !self.too_deep.is_empty() || self.stack.len() >= MAX_NESTING_DEPTH {
            if let Some(tag) = self.too_deep_tag(tag, raw, position) {
                self.apply(tag, raw, position);
            }
            return;
        }
        self.apply(tag, raw, position);
    }

    /// Handle a tag at the depth limit. Openers and their closers become
    /// literal text; anything else is passed back.
    fn too_deep_tag(&mut self, tag: Tag<'a>, raw: &str, position: usize) -> Option<Tag<'a>> {
        match tag {
            Tag::Open(block) => {
                self.issues.push(TemplateIssue::NestingTooDeep {
                    block: block.name().to_string(),
                    position,
                });
                self.too_deep.push(block.name());
                self.literal(raw);
                None
            }
            Tag::Close(name) if self.too_deep.last().is_some_and(|open| *open == name) => {
                self.too_deep.pop();
                self.literal(raw);
                None
            }
            Tag::Else if !self.too_deep.is_empty() => {
                self.literal(raw);
                None
            }
            other => Some(other),
        }
    }

    fn apply(&mut self, tag: Tag<'a>, raw: &'a str, position: usize) {
        match tag {
            Tag::Node(node) => self.current().push(node),
            Tag::Literal(issue) => {
                self.issues.push(issue);
                self.literal(raw);
            }
            Tag::Open(block) => {
                self.opened += 1;
                self.stack.push(Frame {
                    block,
                    opener: raw,
                    position,
                    then: Vec::new(),
                    otherwise: None,
                });
            }
            Tag::Else => {
                let accepted = match self.stack.last_mut() {
                    Some(frame) if frame.block.accepts_else() && frame.otherwise.is_none() => {
                        frame.otherwise = Some((raw, Vec::new()));
                        true
                    }
                    _ => false,
                };
                if !accepted {
                    self.issues.push(TemplateIssue::StrayElse { position });
                    self.literal(raw);
                }
            }
            Tag::Close(name) => {
                self.closed += 1;
                self.close(raw, name, position);
            }
        }
    }

    fn close(&mut self, raw: &str, name: &str, position: usize) {
        let Some(top) = self.stack.last() else {
            self.issues.push(TemplateIssue::StrayCloser {
                block: name.to_string(),
                position,
            });
            self.literal(raw);
            return;
        };

        if top.block.name() != name {
            self.issues.push(TemplateIssue::MismatchedCloser {
                expected: top.block.name().to_string(),
                found: name.to_string(),
                position,
            });
        }

        let Some(depth) = self.stack.iter().rposition(|f| f.block.name() == name) else {
            self.literal(raw);
            return;
        };

        // Blocks opened inside the one being closed were never closed.
        while self.stack.len() > depth + 1 {
            self.unwind_top();
        }
        if let Some(frame) = self.stack.pop() {
            let node = frame.into_node();
            self.current().push(node);
        }
    }

    fn unwind_top(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.issues.push(TemplateIssue::UnclosedBlock {
                block: frame.block.name().to_string(),
                position: frame.position,
            });
            let nodes = frame.into_literal();
            extend_nodes(self.current(), nodes);
        }
    }

    fn finish(mut self) -> (Vec<Node>, Vec<TemplateIssue>) {
        while !self.stack.is_empty() {
            self.unwind_top();
        }
        if self.opened != self.closed {
            self.issues.push(TemplateIssue::CountMismatch {
                opened: self.opened,
                closed: self.closed,
            });
        }
        (self.root, self.issues)
    }
}

/// Parse a template into nodes plus every issue found on the way.
pub(crate) fn parse(template: &str) -> (Vec<Node>, Vec<TemplateIssue>) {
    let mut parser = Parser {
        root: Vec::new(),
        stack: Vec::new(),
        too_deep: Vec::new(),
        issues: Vec::new(),
        opened: 0,
        closed: 0,
    };
    for token in tokenize(template) {
        parser.token(token);
    }
    parser.finish()
}

fn classify(inner: &str, position: usize) -> Tag<'_> {
    let inner = inner.trim();

    if let Some(header) = inner.strip_prefix('#') {
        let (name, rest) = header.split_once(char::is_whitespace).unwrap_or((header, ""));
        if name == "else" && rest.trim().is_empty() {
            return Tag::Else;
        }
        return match open_block(name, rest) {
            Some(block) => Tag::Open(block),
            None if matches!(name, "each" | "eq" | "if" | "unless") => {
                Tag::Literal(TemplateIssue::MalformedHeader {
                    block: name.to_string(),
                    position,
                })
            }
            None => Tag::Literal(TemplateIssue::UnknownBlock {
                name: name.to_string(),
                position,
            }),
        };
    }

    if let Some(name) = inner.strip_prefix('/') {
        return Tag::Close(name.trim());
    }

    if inner == "else" {
        return Tag::Else;
    }

    let malformed = || {
        Tag::Literal(TemplateIssue::MalformedTag {
            tag: inner.to_string(),
            position,
        })
    };
    match split_args(inner).as_deref() {
        Some([Arg::Path(name)]) => Tag::Node(Node::Variable(name.to_string())),
        Some([Arg::Path(name), Arg::Path(field)]) => match Helper::from_name(name) {
            Some(helper) => Tag::Node(Node::Helper {
                helper,
                field: field.to_string(),
            }),
            None => Tag::Literal(TemplateIssue::UnknownHelper {
                name: name.to_string(),
                position,
            }),
        },
        _ => malformed(),
    }
}

fn open_block(name: &str, rest: &str) -> Option<Block> {
    let args = split_args(rest)?;
    match (name, args.as_slice()) {
        ("each", [Arg::Path(list)]) => Some(Block::Each {
            list: list.to_string(),
        }),
        ("eq", [Arg::Path(field), Arg::Literal(literal) | Arg::Path(literal)]) => {
            Some(Block::Equals {
                field: field.to_string(),
                literal: literal.to_string(),
            })
        }
        ("if", [Arg::Path(field)]) => Some(Block::If {
            field: field.to_string(),
        }),
        ("unless", [Arg::Path(field)]) => Some(Block::Unless {
            field: field.to_string(),
        }),
        _ => None,
    }
}

/// Split tag arguments on whitespace. Quoted arguments are literals.
///
/// Returns `None` for an unterminated quote or an argument that is neither a
/// path nor a literal.
fn split_args(text: &str) -> Option<Vec<Arg<'_>>> {
    let mut args = Vec::new();
    let mut rest = text.trim_start();

    while let Some(first) = rest.chars().next() {
        if first == '"' || first == '\'' {
            let body = &rest[1..];
            let end = body.find(first)?;
            args.push(Arg::Literal(&body[..end]));
            rest = &body[end + 1..];
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..end];
            if !is_path(word) {
                return None;
            }
            args.push(Arg::Path(word));
            rest = &rest[end..];
        }
        rest = rest.trim_start();
    }

    Some(args)
}

/// A field name, `this`, or `@index`.
fn is_path(word: &str) -> bool {
    if word == "@index" {
        return true;
    }
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
