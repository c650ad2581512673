//! Recursive-descent parser producing an expression tree
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := '-' unary | power
//! power   := primary ('^' unary)?
//! primary := number | identifier | '(' expr ')'
//! ```
//!
//! `^` is right-associative and binds tighter than unary minus, so `-2^2` is `-4`
//! and `2^-1` is `0.5`.

use serde::{Deserialize, Serialize};

use super::lexer::{Token, TokenKind, tokenize};
use crate::error::EvalError;

/// Nesting limit guarding the recursion against hostile input
pub const MAX_DEPTH: usize = 128;
/// Token limit; also bounds the depth of long operator chains
pub const MAX_TOKENS: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Number(f64),
    Ident(String),
    Neg(Box<Node>),
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
}

pub fn parse(source: &str) -> Result<Node, EvalError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }
    if tokens.len() > MAX_TOKENS {
        return Err(EvalError::TooLong { limit: MAX_TOKENS });
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let node = parser.expr()?;
    match parser.peek() {
        None => Ok(node),
        Some(token) => Err(unexpected(token)),
    }
}

fn unexpected(token: &Token) -> EvalError {
    EvalError::UnexpectedToken {
        found: token.kind.to_string(),
        position: token.position,
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token if it is one of `ops`
    fn eat_op(&mut self, ops: &[(TokenKind, BinaryOp)]) -> Option<BinaryOp> {
        let kind = &self.peek()?.kind;
        let op = ops.iter().find(|(k, _)| k == kind).map(|(_, op)| *op)?;
        self.pos += 1;
        Some(op)
    }

    fn descend(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Node, EvalError> {
        self.descend()?;
        let mut lhs = self.term()?;
        while let Some(op) =
            self.eat_op(&[(TokenKind::Plus, BinaryOp::Add), (TokenKind::Minus, BinaryOp::Sub)])
        {
            let rhs = self.term()?;
            lhs = Node::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        self.depth -= 1;
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Node, EvalError> {
        let mut lhs = self.unary()?;
        while let Some(op) =
            self.eat_op(&[(TokenKind::Star, BinaryOp::Mul), (TokenKind::Slash, BinaryOp::Div)])
        {
            let rhs = self.unary()?;
            lhs = Node::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Node, EvalError> {
        if matches!(self.peek(), Some(Token { kind: TokenKind::Minus, .. })) {
            self.pos += 1;
            self.descend()?;
            let operand = self.unary()?;
            self.depth -= 1;
            return Ok(Node::Neg(Box::new(operand)));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Node, EvalError> {
        let base = self.primary()?;
        if self.eat_op(&[(TokenKind::Caret, BinaryOp::Pow)]).is_some() {
            self.descend()?;
            let exponent = self.unary()?;
            self.depth -= 1;
            return Ok(Node::Binary {
                op: BinaryOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, EvalError> {
        let token = self.next().ok_or(EvalError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(n) => Ok(Node::Number(n)),
            TokenKind::Ident(name) => Ok(Node::Ident(name)),
            TokenKind::LParen => {
                let inner = self.expr()?;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(&other)),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            _ => Err(unexpected(&token)),
        }
    }
}
