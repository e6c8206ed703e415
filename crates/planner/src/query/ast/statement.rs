//! A flat, not yet serialized SQL fragment.

use crate::query::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A keyword or punctuation token.
    Token(Token),
    /// An identifier, quoted by the dialect when compiled.
    Identifier(String),
    /// Text emitted verbatim, e.g. a caller supplied `WHERE` clause.
    Text(String),
}

/// Ordered sequence of nodes. Separators are never stored; the compiler
/// inserts them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    nodes: Vec<Node>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn token(&mut self, token: Token) -> &mut Self {
        self.push(Node::Token(token))
    }

    pub fn ident(&mut self, name: &str) -> &mut Self {
        self.push(Node::Identifier(name.to_string()))
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.push(Node::Text(text.to_string()))
    }

    /// `qualifier.name`
    pub fn qualified(&mut self, qualifier: &str, name: &str) -> &mut Self {
        self.ident(qualifier).token(Token::Period).ident(name)
    }

    pub fn append(&mut self, other: Statement) -> &mut Self {
        self.nodes.extend(other.nodes);
        self
    }

    /// Appends `items`, separated by commas.
    pub fn comma_separated(&mut self, items: impl IntoIterator<Item = Statement>) -> &mut Self {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.token(Token::Comma);
            }
            self.append(item);
        }
        self
    }
}

impl From<Vec<Node>> for Statement {
    fn from(nodes: Vec<Node>) -> Self {
        Statement { nodes }
    }
}

impl FromIterator<Node> for Statement {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Statement {
            nodes: iter.into_iter().collect(),
        }
    }
}
