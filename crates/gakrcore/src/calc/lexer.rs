use std::fmt;

use super::{CalcError, Number};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(Number),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
        }
    }
}

/// Splits an expression into tokens, rejecting anything outside
/// `0-9 . + - * / ( )` and whitespace.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().enumerate().peekable();

    while let Some((pos, c)) = chars.next() {
        let token = match c {
            ' ' | '\t' | '\n' | '\r' => continue,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '0'..='9' | '.' => {
                let mut literal = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        literal.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Number(parse_literal(&literal)?)
            }
            other => return Err(CalcError::InvalidCharacter { ch: other, pos }),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn parse_literal(literal: &str) -> Result<Number, CalcError> {
    let dots = literal.matches('.').count();
    let has_digit = literal.bytes().any(|b| b.is_ascii_digit());
    if dots > 1 || !has_digit {
        return Err(CalcError::MalformedNumber(literal.to_string()));
    }

    if dots == 0 {
        // only digits reach here, so the only failure mode is overflow
        return literal.parse::<i64>().map(Number::Int).map_err(|_| CalcError::Overflow);
    }

    literal
        .parse::<f64>()
        .map_err(|_| CalcError::MalformedNumber(literal.to_string()))
        .and_then(Number::checked_float)
}
