use super::Reply;
use crate::calc::{self, CalcError};
use crate::core::markdown::{bold, code};

pub const INVALID_CHARACTERS: &str = "❌ Invalid characters. Only numbers and + - * / allowed.";
pub const CALCULATION_ERROR: &str = "❌ Error in calculation.";

/// Evaluates `expression` and formats the result.
///
/// Evaluation failures become error replies; nothing is propagated.
pub fn reply(expression: &str) -> Reply {
    match calc::evaluate(expression) {
        Ok(result) => Reply::markdown(format!(
            "🧮 *Calculation*\n\n{} \\= {}",
            code(expression),
            bold(&result.to_string())
        )),
        Err(CalcError::InvalidCharacter { ch, pos }) => {
            log::debug!("Rejected calc expression: '{}' at {}", ch, pos);
            Reply::plain(INVALID_CHARACTERS)
        }
        Err(e) => {
            log::debug!("Calc failed for '{}': {}", expression, e);
            Reply::plain(CALCULATION_ERROR)
        }
    }
}
