mod evaluator;
mod parser;

pub use evaluator::Evaluator;
pub use parser::ExpressionParser as Parser;

use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Number(f64),
    Identifier(String),
    UnaryOperation {
        sign: Sign,
        operand: Box<ASTNode>,
    },
    BinaryOperation {
        left: Box<ASTNode>,
        operator: Operator,
        right: Box<ASTNode>,
    },
    Group(Box<ASTNode>),
    FunctionCall {
        name: String,
        args: Vec<ASTNode>,
    },
}

impl ASTNode {
    pub fn unary(sign: Sign, operand: ASTNode) -> Self {
        ASTNode::UnaryOperation {
            sign,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: ASTNode, operator: Operator, right: ASTNode) -> Self {
        ASTNode::BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn group(inner: ASTNode) -> Self {
        ASTNode::Group(Box::new(inner))
    }

    pub fn call(name: &str, args: Vec<ASTNode>) -> Self {
        ASTNode::FunctionCall {
            name: name.to_string(),
            args,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }
}

impl TryFrom<&str> for Sign {
    type Error = EvalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Sign::Plus),
            "-" => Ok(Sign::Minus),
            _ => Err(EvalError::UnknownOperator(value.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    BitAnd,
    BitOr,
    Pow,
}

impl Operator {
    /// Applies the operator to two already evaluated operands.
    ///
    /// Arithmetic follows IEEE-754, so dividing by zero gives an infinity or NaN
    /// rather than an error.
    ///
    /// `Modulo`, `BitAnd` and `BitOr` are integer operations: both operands are
    /// truncated toward zero into an `i64` first (saturating at the `i64` bounds,
    /// NaN becomes 0), so `7.9 % 2.5` is `1`. An integer remainder by zero yields
    /// NaN.
    ///
    /// `Pow` is written `^`, which many languages use for XOR. Here it raises
    /// `left` to the power `right` in floating point, so `2 ^ 0.5` is √2.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Modulo => {
                let divisor = right as i64;
                if divisor == 0 {
                    f64::NAN
                } else {
                    (left as i64).wrapping_rem(divisor) as f64
                }
            }
            Operator::BitAnd => ((left as i64) & (right as i64)) as f64,
            Operator::BitOr => ((left as i64) | (right as i64)) as f64,
            Operator::Pow => left.powf(right),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::Pow => "^",
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = EvalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            "%" => Ok(Operator::Modulo),
            "&" => Ok(Operator::BitAnd),
            "|" => Ok(Operator::BitOr),
            "^" => Ok(Operator::Pow),
            _ => Err(EvalError::UnknownOperator(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_from_symbol() {
        let symbols = ["+", "-", "*", "/", "%", "&", "|", "^"];
        for symbol in symbols {
            let operator = Operator::try_from(symbol).unwrap();
            assert_eq!(operator.symbol(), symbol);
        }
    }

    #[test]
    fn test_unknown_operator_symbol() {
        assert_eq!(
            Operator::try_from("<<"),
            Err(EvalError::UnknownOperator("<<".to_string()))
        );
        assert_eq!(
            Sign::try_from("!"),
            Err(EvalError::UnknownOperator("!".to_string()))
        );
    }

    #[test]
    fn test_modulo_truncates_operands() {
        assert_eq!(Operator::Modulo.apply(6.0, 4.0), 2.0);
        assert_eq!(Operator::Modulo.apply(7.9, 2.5), 1.0);
        assert_eq!(Operator::Modulo.apply(-7.0, 3.0), -1.0);
        assert_eq!(Operator::Modulo.apply(i64::MIN as f64, -1.0), 0.0);
    }

    #[test]
    fn test_modulo_by_zero_is_nan() {
        assert!(Operator::Modulo.apply(5.0, 0.0).is_nan());
        assert!(Operator::Modulo.apply(5.0, 0.9).is_nan());
    }

    #[test]
    fn test_bitwise_operators() {
        assert_eq!(Operator::BitAnd.apply(6.0, 3.0), 2.0);
        assert_eq!(Operator::BitOr.apply(6.0, 3.0), 7.0);
        assert_eq!(Operator::BitOr.apply(4.9, 1.2), 5.0);
        assert_eq!(Operator::BitAnd.apply(-1.0, 255.0), 255.0);
    }

    #[test]
    fn test_division_follows_ieee() {
        assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_pow_is_exponentiation() {
        assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
        assert!((Operator::Pow.apply(2.0, 0.5) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_sign_apply() {
        assert_eq!(Sign::Minus.apply(3.5), -3.5);
        assert_eq!(Sign::Plus.apply(3.5), 3.5);
    }
}
