//! Recursive-descent parser that evaluates while it parses
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | atom
//! atom   := NUMBER | '(' expr ')'
//! ```

use super::{CalcError, Number, Token, MAX_DEPTH};

pub(super) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(super) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    pub(super) fn parse(mut self) -> Result<Number, CalcError> {
        let value = self.expr()?;
        match self.peek() {
            None => Ok(value),
            Some(Token::RParen) => Err(CalcError::UnbalancedParentheses),
            Some(token) => Err(CalcError::UnexpectedToken(token)),
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn enter(&mut self) -> Result<(), CalcError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::TooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Number, CalcError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.bump();
                    value = value.add(self.term()?)?;
                }
                Some(Token::Minus) => {
                    self.bump();
                    value = value.sub(self.term()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<Number, CalcError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.bump();
                    value = value.mul(self.unary()?)?;
                }
                Some(Token::Slash) => {
                    self.bump();
                    value = value.div(self.unary()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<Number, CalcError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.bump();
                self.enter()?;
                let value = self.unary();
                self.depth -= 1;
                value
            }
            Some(Token::Minus) => {
                self.bump();
                self.enter()?;
                let value = self.unary().and_then(Number::neg);
                self.depth -= 1;
                value
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<Number, CalcError> {
        match self.bump() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                self.enter()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.bump() {
                    Some(Token::RParen) => Ok(value),
                    None => Err(CalcError::UnbalancedParentheses),
                    Some(token) => Err(CalcError::UnexpectedToken(token)),
                }
            }
            Some(token) => Err(CalcError::UnexpectedToken(token)),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}
