//! Serializes a `Statement` into SQL text.

use crate::query::{
    ast::statement::{Node, Statement},
    dialect::{Dialect, Postgres},
    token::Token,
};

/// Compiles statements for one dialect.
///
/// Exactly one space separates adjacent units, except that no space is
/// placed around `.` or before `,`. Compilation never fails: an `Illegal`
/// token renders as `ILLEGAL`, empty text is skipped and `Eof` ends the
/// statement.
pub struct Compiler<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> Compiler<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    pub fn compile(&self, statement: &Statement) -> String {
        let mut sql = String::new();
        let mut previous: Option<&Node> = None;

        for node in statement.nodes() {
            let text = match node {
                Node::Token(Token::Eof) => break,
                Node::Token(token) => token.as_str().to_string(),
                Node::Identifier(name) => self.dialect.quote_identifier(name),
                Node::Text(text) if text.is_empty() => continue,
                Node::Text(text) => text.clone(),
            };

            if let Some(previous) = previous
                && needs_space(previous, node)
            {
                sql.push(' ');
            }

            sql.push_str(&text);
            previous = Some(node);
        }

        sql
    }
}

impl Default for Compiler<'static> {
    fn default() -> Self {
        Compiler::new(&Postgres)
    }
}

fn needs_space(previous: &Node, next: &Node) -> bool {
    !matches!(previous, Node::Token(Token::Period))
        && !matches!(next, Node::Token(Token::Period | Token::Comma))
}
