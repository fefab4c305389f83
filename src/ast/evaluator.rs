use crate::ast::ASTNode;
use crate::error::EvalError;
use crate::functions::{constants, Registry};
use log::trace;

/// Folds an [`ASTNode`] into a number, resolving calls against a borrowed registry.
///
/// The evaluator holds no state of its own, so one instance can be shared by
/// reference across threads.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'r> {
    registry: &'r Registry,
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new(Registry::global())
    }
}

impl<'r> Evaluator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Evaluates an `ASTNode`.
    ///
    /// Both sides of a binary operation are always evaluated; when both fail the
    /// left error wins. Function arguments are evaluated left to right and the
    /// first failure is returned immediately.
    pub fn evaluate(&self, ast: &ASTNode) -> Result<f64, EvalError> {
        let result = match ast {
            ASTNode::Number(n) => Ok(*n),

            ASTNode::Identifier(ident) => {
                let name = ident.to_lowercase();
                constants::lookup(&name).ok_or(EvalError::UnknownIdentifier(name))
            }

            ASTNode::UnaryOperation { sign, operand } => {
                self.evaluate(operand).map(|value| sign.apply(value))
            }

            ASTNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = self.evaluate(left);
                let right_value = self.evaluate(right);
                Ok(operator.apply(left_value?, right_value?))
            }

            ASTNode::Group(inner) => self.evaluate(inner),

            ASTNode::FunctionCall { name, args } => self.call_function(name, args),
        }?;

        trace!("{:?} => {}", ast, result);
        Ok(result)
    }

    fn call_function(&self, name: &str, args: &[ASTNode]) -> Result<f64, EvalError> {
        let values = args
            .iter()
            .map(|arg| self.evaluate(arg))
            .collect::<Result<Vec<f64>, EvalError>>()?;

        let name = name.to_lowercase();
        let function = self
            .registry
            .get(&name)
            .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;

        trace!("Calling builtin {} with {:?}", name, values);
        function.call(&values)
    }
}
