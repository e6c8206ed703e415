use std::fmt;

/// SQL keywords and punctuation understood by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Token {
    Illegal = 0,
    Eof,

    // Keywords
    Select,
    From,
    InnerJoin,
    On,

    // Symbols
    Comma,
    Equal,
    Period,
}

const TOKENS: [Token; 9] = [
    Token::Illegal,
    Token::Eof,
    Token::Select,
    Token::From,
    Token::InnerJoin,
    Token::On,
    Token::Comma,
    Token::Equal,
    Token::Period,
];

impl Token {
    /// Canonical text of the token.
    pub fn as_str(self) -> &'static str {
        match self {
            Token::Illegal => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Select => "SELECT",
            Token::From => "FROM",
            Token::InnerJoin => "INNER JOIN",
            Token::On => "ON",
            Token::Comma => ",",
            Token::Equal => "=",
            Token::Period => ".",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Token::Select | Token::From | Token::InnerJoin | Token::On
        )
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, Token::Comma | Token::Equal | Token::Period)
    }

    /// Resolves a keyword or symbol spelling, ignoring ASCII case and
    /// repeated inner whitespace. Anything unknown is `Illegal`.
    pub fn lookup(text: &str) -> Token {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        TOKENS
            .into_iter()
            .filter(|token| token.is_keyword() || token.is_symbol())
            .find(|token| token.as_str().eq_ignore_ascii_case(&normalized))
            .unwrap_or(Token::Illegal)
    }
}

impl From<u8> for Token {
    fn from(value: u8) -> Self {
        TOKENS
            .get(value as usize)
            .copied()
            .unwrap_or(Token::Illegal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
