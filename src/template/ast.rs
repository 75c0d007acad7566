//! Directive tree.

/// A formatting helper callable as `{{helper field}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Helper {
    Currency,
    Number,
    Upper,
    Lower,
}

impl Helper {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "currency" => Some(Helper::Currency),
            "number" => Some(Helper::Number),
            "upper" => Some(Helper::Upper),
            "lower" => Some(Helper::Lower),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Helper::Currency => "currency",
            Helper::Number => "number",
            Helper::Upper => "upper",
            Helper::Lower => "lower",
        }
    }
}

/// A node of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal output, including malformed directives.
    Text(String),
    /// `{{name}}`
    Variable(String),
    /// `{{helper name}}`
    Helper { helper: Helper, field: String },
    /// `{{#each list}}body{{/each}}`
    Each { list: String, body: Vec<Node> },
    /// `{{#eq field "literal"}}then{{#else}}otherwise{{/eq}}`
    Equals {
        field: String,
        literal: String,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },
    /// `{{#if field}}then{{#else}}otherwise{{/if}}`
    If {
        field: String,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },
    /// `{{#unless field}}body{{/unless}}`
    Unless { field: String, body: Vec<Node> },
}

/// Append literal text, merging with a preceding text node.
pub(crate) fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    match nodes.last_mut() {
        Some(Node::Text(last)) => last.push_str(text),
        _ => nodes.push(Node::Text(text.to_string())),
    }
}

/// Append nodes, merging adjacent text.
pub(crate) fn extend_nodes(nodes: &mut Vec<Node>, more: Vec<Node>) {
    for node in more {
        match node {
            Node::Text(text) => push_text(nodes, &text),
            other => nodes.push(other),
        }
    }
}

/// Visit every node of a tree depth-first, both branches included.
pub(crate) fn walk<'a>(nodes: &'a [Node], visit: &mut impl FnMut(&'a Node)) {
    for node in nodes {
        visit(node);
        match node {
            Node::Each { body, .. } | Node::Unless { body, .. } => walk(body, visit),
            Node::Equals {
                then, otherwise, ..
            }
            | Node::If {
                then, otherwise, ..
            } => {
                walk(then, visit);
                walk(otherwise, visit);
            }
            Node::Text(_) | Node::Variable(_) | Node::Helper { .. } => {}
        }
    }
}
