use crate::ast::{ASTNode, Operator, Sign};
use crate::error::ParseError;
use log::debug;
use pest::error::InputLocation;
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "expression.pest"]
pub struct ExpressionParser;

impl ExpressionParser {
    pub fn parse_expression(input: &str) -> Result<ASTNode, ParseError> {
        debug!("Parsing expression: {}", input);
        let expression = ExpressionParser::parse(Rule::expression, input)
            .map_err(|e| classify_error(input, &e))?
            .next()
            .ok_or_else(|| ParseError::Unsupported("empty parse result".to_string()))?;

        let root = next_pair(&mut expression.into_inner(), Rule::expression)?;
        let ast = Self::build_or_expression(root)?;
        debug!("Parse result: {:?}", ast);
        Ok(ast)
    }

    fn build_or_expression(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        Self::build_binary_chain(pair, Self::build_and_expression)
    }

    fn build_and_expression(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        Self::build_binary_chain(pair, Self::build_additive_expression)
    }

    fn build_additive_expression(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        Self::build_binary_chain(pair, Self::build_term)
    }

    fn build_term(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        Self::build_binary_chain(pair, Self::build_unary)
    }

    /// Folds `operand (op operand)*` into a left-nested tree.
    fn build_binary_chain(
        pair: Pair<Rule>,
        build_operand: fn(Pair<Rule>) -> Result<ASTNode, ParseError>,
    ) -> Result<ASTNode, ParseError> {
        let rule = pair.as_rule();
        let mut pairs = pair.into_inner();
        let mut node = build_operand(next_pair(&mut pairs, rule)?)?;

        while let Some(operator_pair) = pairs.next() {
            let operator = Operator::try_from(operator_pair.as_str())
                .map_err(|e| ParseError::Unsupported(e.to_string()))?;
            let right = build_operand(next_pair(&mut pairs, rule)?)?;
            node = ASTNode::binary(node, operator, right);
        }

        Ok(node)
    }

    fn build_unary(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        debug!("Building unary: {:?}", pair.as_str());
        let mut signs = Vec::new();
        let mut operand = None;

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::PLUS | Rule::MINUS => signs.push(
                    Sign::try_from(inner.as_str())
                        .map_err(|e| ParseError::Unsupported(e.to_string()))?,
                ),
                Rule::power => operand = Some(Self::build_power(inner)?),
                rule => {
                    return Err(ParseError::Unsupported(format!(
                        "unexpected rule in unary expression: {:?}",
                        rule
                    )))
                }
            }
        }

        let mut node = operand
            .ok_or_else(|| ParseError::Unsupported("unary sign without operand".to_string()))?;
        // innermost sign is the one closest to the operand
        for sign in signs.into_iter().rev() {
            node = ASTNode::unary(sign, node);
        }
        Ok(node)
    }

    fn build_power(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        let rule = pair.as_rule();
        let mut pairs = pair.into_inner();
        let base = Self::build_primary_expression(next_pair(&mut pairs, rule)?)?;

        match pairs.next() {
            Some(caret) => {
                let operator = Operator::try_from(caret.as_str())
                    .map_err(|e| ParseError::Unsupported(e.to_string()))?;
                let exponent = Self::build_unary(next_pair(&mut pairs, rule)?)?;
                Ok(ASTNode::binary(base, operator, exponent))
            }
            None => Ok(base),
        }
    }

    fn build_primary_expression(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        match pair.as_rule() {
            Rule::number => parse_number(pair.as_str()).map(ASTNode::Number),
            Rule::identifier => Ok(ASTNode::Identifier(pair.as_str().to_string())),
            Rule::group => {
                let inner = next_pair(&mut pair.into_inner(), Rule::group)?;
                Ok(ASTNode::group(Self::build_or_expression(inner)?))
            }
            Rule::function_call => Self::build_function_call(pair),
            rule => {
                debug!("Unexpected rule in primary expression: {:?}", pair);
                Err(ParseError::Unsupported(format!(
                    "unexpected rule in primary expression: {:?}",
                    rule
                )))
            }
        }
    }

    fn build_function_call(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        let mut inner = pair.into_inner();
        let name = next_pair(&mut inner, Rule::function_call)?.as_str().to_string();
        let args = match inner.next() {
            Some(arguments) => arguments
                .into_inner()
                .map(Self::build_or_expression)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };
        Ok(ASTNode::FunctionCall { name, args })
    }
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, rule: Rule) -> Result<Pair<'i, Rule>, ParseError> {
    pairs
        .next()
        .ok_or_else(|| ParseError::Unsupported(format!("missing operand in {:?}", rule)))
}

/// Integer-form literals must fit in an `i64`; decimal forms go straight to `f64`.
fn parse_number(literal: &str) -> Result<f64, ParseError> {
    let value = if literal.contains('.') {
        literal.parse::<f64>().ok()
    } else {
        literal.parse::<i64>().ok().map(|value| value as f64)
    };
    value.ok_or_else(|| ParseError::MalformedNumber(literal.to_string()))
}

fn classify_error(input: &str, error: &pest::error::Error<Rule>) -> ParseError {
    let position = match error.location {
        InputLocation::Pos(position) => position,
        InputLocation::Span((start, _)) => start,
    };
    debug!("Parse error: {}", error);

    let consumed = input.get(..position).unwrap_or(input);
    let rest = input.get(position..).unwrap_or("").trim_start();
    let found_at = input.len() - rest.len();

    let mut open = Vec::new();
    for (index, c) in consumed.char_indices() {
        match c {
            '(' => open.push(index),
            ')' => {
                open.pop();
            }
            _ => {}
        }
    }

    // a missing `)` is only to blame when the input ends on a complete operand
    let ends_on_operand = consumed
        .trim_end()
        .ends_with(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == ')');

    match rest.chars().next() {
        None => match open.last() {
            Some(&position) if ends_on_operand => ParseError::UnmatchedParenthesis { position },
            _ => ParseError::UnexpectedEnd {
                position: input.len(),
            },
        },
        Some(')') if open.is_empty() => ParseError::UnmatchedParenthesis { position: found_at },
        Some(_) => ParseError::UnexpectedToken {
            found: token_at(rest),
            position: found_at,
        },
    }
}

fn token_at(rest: &str) -> String {
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
        .unwrap_or(rest.len());
    if end == 0 {
        rest.chars().next().map(String::from).unwrap_or_default()
    } else {
        rest[..end].to_string()
    }
}
