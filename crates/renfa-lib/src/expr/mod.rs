//! Regular expression text model.
//!
//! There is no tokenizer or parse tree: an [`Expression`] is classified and
//! split by scanning its text, using bracket balance to tell top-level
//! operators from nested ones. Each construction step works on one label and
//! produces the sub-labels for the next step.
//!
//! Precedence, loosest first: union, concatenation, Kleene closure.

mod validate;

#[cfg(test)]
mod expr_tests;

use std::fmt;

use serde::Serialize;

use crate::balance::{Bracket, is_balanced};

pub use validate::ValidationError;

/// Kleene closure marker (postfix).
pub const KLEENE: char = '*';

/// Label of an empty-word transition.
pub const EMPTY_WORD: char = '_';

/// Union spellings. All three denote the same operator.
pub const UNION_SYMBOLS: [char; 3] = ['+', ',', '|'];

/// Characters that never belong to the alphabet.
pub const METACHARACTERS: [char; 8] = ['(', ')', '[', ']', '+', '*', ',', '|'];

pub fn is_union_symbol(c: char) -> bool {
    UNION_SYMBOLS.contains(&c)
}

pub fn is_metacharacter(c: char) -> bool {
    METACHARACTERS.contains(&c)
}

/// Remove one outer group if `text` is `(..)` or `[..]` and the inside is
/// still balanced. `(a)(b)` is returned unchanged: its first `(` does not pair
/// with its last `)`.
pub fn strip_outer_grouping(text: &str) -> &str {
    let Some(open) = text.chars().next().and_then(Bracket::from_opener) else {
        return text;
    };
    if text.len() < 2 || !text.ends_with(open.closer()) {
        return text;
    }

    let inner = &text[1..text.len() - 1];
    if is_balanced(inner) { inner } else { text }
}

/// Top-level union branches of `text`.
///
/// A union symbol splits only when everything since the previous split is
/// balanced. Without a top-level union the result is `[text]`.
pub fn split_by_union(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (offset, c) in text.char_indices() {
        if is_union_symbol(c) && is_balanced(&text[start..offset]) {
            pieces.push(&text[start..offset]);
            start = offset + c.len_utf8();
        }
    }

    pieces.push(&text[start..]);
    pieces
}

/// Top-level concatenation factors of `text`.
///
/// A union is returned whole: concatenation binds tighter, so it only splits
/// union-free text. A factor ends wherever the scanned text is balanced and the
/// next character is not `*`, which keeps `d*` and `(bc)*` in one piece.
pub fn split_by_concatenation(text: &str) -> Vec<&str> {
    if split_by_union(text).len() > 1 {
        return vec![text];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let end = offset + c.len_utf8();
        if !is_balanced(&text[start..end]) {
            continue;
        }
        match chars.peek() {
            None | Some(&(_, KLEENE)) => {}
            Some(_) => {
                pieces.push(&text[start..end]);
                start = end;
            }
        }
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

/// Remove whitespace, then peel outer groups while the inside stays balanced.
fn normalize(text: &str) -> String {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut current = compact.as_str();
    loop {
        let stripped = strip_outer_grouping(current);
        if stripped.len() == current.len() {
            break;
        }
        current = stripped;
    }
    current.to_string()
}

/// How a label decomposes in one construction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition {
    /// Single symbol; nothing left to do.
    Minimal,
    /// Branches, in source order.
    Union(Vec<Expression>),
    /// Factors, in source order. Always at least two.
    Concatenation(Vec<Expression>),
    /// Operand of the closure, with `*` and its grouping removed.
    KleeneClosure(Expression),
}

/// A normalized regular expression.
///
/// Construction removes whitespace and redundant outer grouping; the text never
/// changes afterwards. Ordering is by text, which is how transitions with the
/// same source are ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Expression {
    text: String,
}

impl Expression {
    pub fn new(text: &str) -> Self {
        Self {
            text: normalize(text),
        }
    }

    /// The `_` label of empty-word transitions.
    pub fn empty_word() -> Self {
        Self {
            text: EMPTY_WORD.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in symbols.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::validate(&self.text)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Exactly one symbol (an alphabet symbol or `_`).
    pub fn is_minimal(&self) -> bool {
        self.len() == 1
    }

    /// The symbol of a minimal expression.
    pub fn symbol(&self) -> Option<char> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    pub fn is_empty_word(&self) -> bool {
        self.symbol() == Some(EMPTY_WORD)
    }

    pub fn is_union(&self) -> bool {
        self.split_by_union().len() > 1
    }

    pub fn is_concatenation(&self) -> bool {
        self.split_by_concatenation().len() > 1
    }

    /// `x*`, `(..)*` or `[..]*` forming a single concatenation factor.
    pub fn is_kleene_closure(&self) -> bool {
        let text = self.text.as_str();
        if split_by_concatenation(text).len() != 1 {
            return false;
        }

        (self.len() == 2 && text.ends_with(KLEENE))
            || (text.starts_with('(') && text.ends_with(")*"))
            || (text.starts_with('[') && text.ends_with("]*"))
    }

    pub fn split_by_union(&self) -> Vec<&str> {
        split_by_union(&self.text)
    }

    pub fn split_by_concatenation(&self) -> Vec<&str> {
        split_by_concatenation(&self.text)
    }

    /// Operand of a Kleene closure; any other expression is returned as is.
    pub fn strip_kleene_closure(&self) -> Expression {
        if !self.is_kleene_closure() {
            return self.clone();
        }
        let operand = &self.text[..self.text.len() - KLEENE.len_utf8()];
        Expression::new(operand)
    }

    /// Classify by precedence: minimal, union, concatenation, Kleene closure.
    ///
    /// `None` means the text fits no rule, which validation rules out.
    pub fn classify(&self) -> Option<Decomposition> {
        if self.is_minimal() {
            return Some(Decomposition::Minimal);
        }

        let branches = self.split_by_union();
        if branches.len() > 1 {
            return Some(Decomposition::Union(
                branches.into_iter().map(Expression::new).collect(),
            ));
        }

        let factors = self.split_by_concatenation();
        if factors.len() > 1 {
            return Some(Decomposition::Concatenation(
                factors.into_iter().map(Expression::new).collect(),
            ));
        }

        if self.is_kleene_closure() {
            return Some(Decomposition::KleeneClosure(self.strip_kleene_closure()));
        }

        None
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
