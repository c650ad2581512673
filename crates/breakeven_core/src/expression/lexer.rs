//! Tokenizer for the arithmetic expression grammar

use std::fmt;

use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{n}"),
            TokenKind::Ident(name) => f.write_str(name),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::Caret => f.write_str("^"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Character offset of the token's first character
    pub position: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Split an expression into tokens.
///
/// A maximal run of `[A-Za-z0-9_.]` is a number when it holds only digits and at most
/// one point, and an identifier when it holds no point and at least one non-digit.
pub fn tokenize(source: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let position = i;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            c if is_word_char(c) => {
                let end = chars[i..]
                    .iter()
                    .position(|&c| !is_word_char(c))
                    .map_or(chars.len(), |offset| i + offset);
                let word: String = chars[i..end].iter().collect();
                i = end;
                tokens.push(Token {
                    kind: classify_word(word, position)?,
                    position,
                });
                continue;
            }
            ch => return Err(EvalError::UnexpectedChar { ch, position }),
        };

        tokens.push(Token { kind, position });
        i += 1;
    }

    Ok(tokens)
}

fn classify_word(word: String, position: usize) -> Result<TokenKind, EvalError> {
    let points = word.chars().filter(|&c| c == '.').count();
    let all_numeric = word.chars().all(|c| c.is_ascii_digit() || c == '.');

    if all_numeric && points <= 1 && word != "." {
        return word
            .parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| EvalError::InvalidNumber { text: word, position });
    }
    if points == 0 {
        return Ok(TokenKind::Ident(word));
    }
    Err(EvalError::InvalidNumber { text: word, position })
}
