use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::operator::{BinaryOp, UnaryOp};

struct Parser {
    chars: Vec<char>,
    position: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn bump(&mut self) -> Result<char, ExpressionError> {
        let c = self.peek().ok_or(ExpressionError::UnexpectedEnd)?;
        self.position += 1;
        Ok(c)
    }

    fn unexpected(&self, found: char) -> ExpressionError {
        ExpressionError::UnexpectedChar {
            found,
            position: self.position.saturating_sub(1),
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ExpressionError> {
        let c = self.bump()?;
        if c == expected {
            Ok(())
        } else {
            Err(self.unexpected(c))
        }
    }

    fn literal(&mut self) -> Result<Expression, ExpressionError> {
        let start = self.position;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.position += 1;
        }

        let text: String = self.chars[start..self.position].iter().collect();
        let first = text.bytes().next().ok_or(ExpressionError::UnexpectedEnd)?;
        if text.bytes().any(|b| b != first) {
            return Err(ExpressionError::MixedDigits(text));
        }

        Ok(Expression::Literal {
            digit: first - b'0',
            count: text.len(),
        })
    }

    fn expression(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some(c) if c.is_ascii_digit() => self.literal(),
            Some('(') => {
                self.position += 1;
                self.parenthesized()
            }
            Some(c) => {
                self.position += 1;
                Err(self.unexpected(c))
            }
        }
    }

    /// Body of `( ... )` after the opening parenthesis.
    fn parenthesized(&mut self) -> Result<Expression, ExpressionError> {
        // Binary left operands never start with a sign, so a leading `-` is negation.
        let prefix = match self.peek() {
            Some('-') => Some(UnaryOp::Neg),
            Some('√') => Some(UnaryOp::Sqrt),
            _ => None,
        };
        if let Some(op) = prefix {
            self.position += 1;
            let inner = self.expression()?;
            self.expect(')')?;
            return Ok(Expression::Unary(op, Box::new(inner)));
        }

        let left = self.expression()?;
        let c = self.bump()?;
        if c == '!' {
            self.expect(')')?;
            return Ok(Expression::Unary(UnaryOp::Factorial, Box::new(left)));
        }

        let op = BinaryOp::from_symbol(c).ok_or_else(|| self.unexpected(c))?;
        let right = self.expression()?;
        self.expect(')')?;
        Ok(Expression::Binary(op, Box::new(left), Box::new(right)))
    }
}

impl Expression {
    /// Parse a path such as `(4+(√4))` produced by the search.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a well-formed path.
    pub fn parse(path: &str) -> Result<Expression, ExpressionError> {
        let mut parser = Parser {
            chars: path.chars().collect(),
            position: 0,
        };

        let expr = parser.expression()?;
        if parser.position != parser.chars.len() {
            debug!("Path '{}' has trailing input", path);
            return Err(ExpressionError::TrailingInput(parser.position));
        }
        Ok(expr)
    }
}
