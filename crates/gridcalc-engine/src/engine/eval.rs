//! Arithmetic expression evaluation (shunting-yard).
//!
//! Formulas are reduced to plain strings of numbers and the operators
//! `+ - * / ^` before they reach this module; see [`super::formula`] for the
//! reference substitution step. Evaluation happens in three passes:
//!
//! 1. [`tokenize`] splits the text into numbers and operators. A `+`/`-` at the
//!    start or right after another operator is a sign and stays with the number.
//! 2. [`to_postfix`] reorders the tokens with an operator stack. Equal
//!    precedence pops before pushing, so every operator (`^` included) is
//!    left-associative.
//! 3. [`evaluate_postfix`] folds the postfix queue with a value stack.

use std::fmt;

use super::EvalError;
use super::classify::is_operator;

/// Divisors closer to zero than this are treated as zero.
const ZERO_TOLERANCE: f64 = 1e-5;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Precedence level; 1 binds tightest.
    pub fn level(self) -> u8 {
        match self {
            Operator::Pow => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Add | Operator::Sub => 3,
        }
    }

    /// True if `self` binds strictly tighter than `other`.
    pub fn binds_tighter(self, other: Operator) -> bool {
        self.level() < other.level()
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => {
                if rhs.abs() < ZERO_TOLERANCE {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
            Operator::Pow => Ok(lhs.powf(rhs)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        };
        write!(f, "{}", c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

/// Split an arithmetic expression into numbers and operators.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        let after_operator = matches!(tokens.last(), None | Some(Token::Operator(_)));

        if let Some(op) = Operator::from_char(c)
            && !(after_operator && matches!(op, Operator::Add | Operator::Sub))
        {
            if after_operator {
                return Err(EvalError::MalformedExpression(format!(
                    "operator '{}' at position {} has no left operand",
                    op,
                    i + 1
                )));
            }
            tokens.push(Token::Operator(op));
            i += 1;
            continue;
        }

        // A number, possibly starting with a sign.
        let start = i;
        i += 1;
        while i < chars.len() && !is_operator(chars[i]) {
            i += 1;
        }
        let literal: String = chars[start..i].iter().collect();
        let value = literal.parse::<f64>().map_err(|_| {
            EvalError::MalformedExpression(format!("invalid number '{}'", literal))
        })?;
        tokens.push(Token::Number(value));
    }

    Ok(tokens)
}

/// Reorder infix tokens into postfix order.
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Operator> = Vec::new();

    for token in tokens {
        match *token {
            Token::Number(_) => output.push(*token),
            Token::Operator(op) => {
                while let Some(&top) = operators.last() {
                    if op.binds_tighter(top) {
                        break;
                    }
                    output.push(Token::Operator(top));
                    operators.pop();
                }
                operators.push(op);
            }
        }
    }

    while let Some(op) = operators.pop() {
        output.push(Token::Operator(op));
    }
    output
}

/// Evaluate a postfix token queue.
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        match *token {
            Token::Number(n) => stack.push(n),
            Token::Operator(op) => {
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::MalformedExpression(format!(
                        "operator '{}' is missing an operand",
                        op
                    )));
                };
                stack.push(op.apply(lhs, rhs)?);
            }
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        [] => Err(EvalError::MalformedExpression("empty expression".to_string())),
        _ => Err(EvalError::MalformedExpression(
            "operands left without an operator".to_string(),
        )),
    }
}

/// Evaluate an expression made only of numbers and `+ - * / ^`.
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expr)?;
    evaluate_postfix(&to_postfix(&tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_levels() {
        assert!(Operator::Mul.binds_tighter(Operator::Add));
        assert!(Operator::Div.binds_tighter(Operator::Sub));
        assert!(Operator::Pow.binds_tighter(Operator::Add));
        assert!(Operator::Pow.binds_tighter(Operator::Div));
        assert!(!Operator::Sub.binds_tighter(Operator::Add));
        assert!(!Operator::Mul.binds_tighter(Operator::Mul));
        assert!(!Operator::Add.binds_tighter(Operator::Pow));
    }

    #[test]
    fn test_evaluate_basic() {
        assert_eq!(evaluate("5+5"), Ok(10.0));
        assert_eq!(evaluate("1/2"), Ok(0.5));
        assert_eq!(evaluate("10+81/3^2"), Ok(19.0));
        assert_eq!(evaluate("13.5+1/2"), Ok(14.0));
        assert_eq!(evaluate("45+5"), Ok(50.0));
        assert_eq!(evaluate("12.5+1/2-14"), Ok(-1.0));
    }

    #[test]
    fn test_evaluate_unary_sign_after_operator() {
        assert_eq!(evaluate("3+4*2/-4^2"), Ok(3.5));
        assert_eq!(evaluate("2--3"), Ok(5.0));
        assert_eq!(evaluate("-3.000000*2"), Ok(-6.0));
    }

    #[test]
    fn test_evaluate_left_associative() {
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
        assert_eq!(evaluate("2^3^2"), Ok(64.0));
        assert_eq!(evaluate("8/2/2"), Ok(2.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("10.5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("12.000000/0.000000"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1/0.000001"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_malformed_expressions() {
        assert!(matches!(evaluate(""), Err(EvalError::MalformedExpression(_))));
        assert!(matches!(evaluate("5+"), Err(EvalError::MalformedExpression(_))));
        assert!(matches!(evaluate("*5"), Err(EvalError::MalformedExpression(_))));
        assert!(matches!(evaluate("1+--2"), Err(EvalError::MalformedExpression(_))));
        assert!(matches!(evaluate("1.2.3"), Err(EvalError::MalformedExpression(_))));
    }

    #[test]
    fn test_to_postfix_order() {
        let tokens = tokenize("1+2*3").unwrap();
        let postfix = to_postfix(&tokens);
        assert_eq!(
            postfix,
            vec![
                Token::Number(1.0),
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Operator(Operator::Mul),
                Token::Operator(Operator::Add),
            ]
        );
    }
}
