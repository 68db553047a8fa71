//! Validity rules for expressions about to be converted.
//!
//! A valid expression always decomposes down to single symbols. Each rule
//! reports the byte range of the offending text so diagnostics can point at it.

use std::ops::Range;

use crate::balance::{Bracket, Imbalance, check_balance};

use super::{KLEENE, UNION_SYMBOLS, is_union_symbol};

/// Why an expression cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expression is empty")]
    Empty,

    /// The whole expression is a single operator.
    #[error("`{symbol}` is an operator, not an expression")]
    LoneOperator { symbol: char },

    #[error("repeated union symbol `{symbol}{symbol}`")]
    RepeatedUnion { symbol: char, offset: usize },

    #[error("repeated Kleene closure `**`")]
    RepeatedKleene { offset: usize },

    #[error("Kleene closure applied to union symbol `{symbol}`")]
    KleeneAfterUnion { symbol: char, offset: usize },

    #[error("{0}")]
    Unbalanced(Imbalance),

    /// Union symbol at the edge of the text or a group, or next to another one.
    #[error("union symbol `{symbol}` is missing an operand")]
    EmptyBranch { symbol: char, offset: usize },

    #[error("Kleene closure `*` has no operand")]
    DanglingKleene { offset: usize },

    #[error("empty group `{}{}`", .bracket.opener(), .bracket.closer())]
    EmptyGroup { bracket: Bracket, offset: usize },
}

impl ValidationError {
    /// Byte range of the offending text in the normalized expression.
    pub fn range(&self) -> Range<usize> {
        match *self {
            Self::Empty => 0..0,
            Self::LoneOperator { .. } => 0..1,
            Self::RepeatedUnion { offset, .. }
            | Self::RepeatedKleene { offset }
            | Self::KleeneAfterUnion { offset, .. }
            | Self::EmptyGroup { offset, .. } => offset..offset + 2,
            Self::Unbalanced(imbalance) => imbalance.offset..imbalance.offset + 1,
            Self::EmptyBranch { offset, .. } | Self::DanglingKleene { offset } => {
                offset..offset + 1
            }
        }
    }
}

pub(super) fn validate(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut chars = text.chars();
    if let (Some(symbol), None) = (chars.next(), chars.next()) {
        if symbol == KLEENE || is_union_symbol(symbol) {
            return Err(ValidationError::LoneOperator { symbol });
        }
    }

    if let Some(offset) = text.find("**") {
        return Err(ValidationError::RepeatedKleene { offset });
    }

    for symbol in UNION_SYMBOLS {
        let doubled: String = [symbol, symbol].iter().collect();
        if let Some(offset) = text.find(&doubled) {
            return Err(ValidationError::RepeatedUnion { symbol, offset });
        }
    }

    for symbol in UNION_SYMBOLS {
        let starred: String = [symbol, KLEENE].iter().collect();
        if let Some(offset) = text.find(&starred) {
            return Err(ValidationError::KleeneAfterUnion { symbol, offset });
        }
    }

    check_balance(text).map_err(ValidationError::Unbalanced)?;

    check_operands(text)
}

/// Every operator needs its operands, and groups can't be empty.
fn check_operands(text: &str) -> Result<(), ValidationError> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    for (n, &(offset, c)) in chars.iter().enumerate() {
        let prev = n.checked_sub(1).map(|p| chars[p].1);
        let next = chars.get(n + 1).map(|&(_, c)| c);

        if is_union_symbol(c) {
            let left_missing =
                prev.is_none_or(|p| Bracket::from_opener(p).is_some() || is_union_symbol(p));
            let right_missing =
                next.is_none_or(|n| Bracket::from_closer(n).is_some() || is_union_symbol(n));
            if left_missing || right_missing {
                return Err(ValidationError::EmptyBranch { symbol: c, offset });
            }
        } else if c == KLEENE {
            if prev.is_none_or(|p| Bracket::from_opener(p).is_some()) {
                return Err(ValidationError::DanglingKleene { offset });
            }
        } else if let Some(bracket) = Bracket::from_opener(c) {
            if next == Some(bracket.closer()) {
                return Err(ValidationError::EmptyGroup { bracket, offset });
            }
        }
    }

    Ok(())
}
