//! Arithmetic expression language used by formulas.
//!
//! Supports `+ - * / ^`, unary minus, parentheses, unsigned decimal literals and bare
//! identifiers resolved against an [`EvaluationContext`]. There are no functions,
//! assignments or side effects.
//!
//! Evaluation is a pure function of the expression and the context. Every failure,
//! including a NaN or infinite result, comes back as an [`EvalError`].

mod lexer;
mod parser;

use serde::{Deserialize, Serialize};

pub use parser::{BinaryOp, MAX_DEPTH, MAX_TOKENS, Node};

use crate::context::EvaluationContext;
use crate::error::EvalError;

/// A parsed expression, ready to evaluate against any number of contexts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, EvalError> {
        Ok(Self {
            source: source.to_string(),
            root: parser::parse(source)?,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn eval(&self, context: &EvaluationContext) -> Result<f64, EvalError> {
        let value = eval_node(&self.root, context)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }

    /// Every identifier referenced, in order of first appearance
    pub fn identifiers(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_identifiers(&self.root, &mut names);
        names
    }
}

/// Parse and evaluate in one step
pub fn evaluate(source: &str, context: &EvaluationContext) -> Result<f64, EvalError> {
    Expression::parse(source)?.eval(context)
}

fn eval_node(node: &Node, context: &EvaluationContext) -> Result<f64, EvalError> {
    match node {
        Node::Number(n) => Ok(*n),
        Node::Ident(name) => context
            .get(name)
            .ok_or_else(|| EvalError::UnknownIdentifier(name.clone())),
        Node::Neg(inner) => Ok(-eval_node(inner, context)?),
        Node::Binary { op, lhs, rhs } => {
            let lhs = eval_node(lhs, context)?;
            let rhs = eval_node(rhs, context)?;
            Ok(op.apply(lhs, rhs))
        }
    }
}

fn collect_identifiers<'a>(node: &'a Node, names: &mut Vec<&'a str>) {
    match node {
        Node::Number(_) => {}
        Node::Ident(name) => {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        Node::Neg(inner) => collect_identifiers(inner, names),
        Node::Binary { lhs, rhs, .. } => {
            collect_identifiers(lhs, names);
            collect_identifiers(rhs, names);
        }
    }
}
