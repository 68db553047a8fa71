//! Bracket balance checking.
//!
//! `(`/`)` and `[`/`]` are interchangeable grouping pairs, but a group must be
//! closed by the same kind that opened it. Every split decision in
//! [`crate::expr`] asks this module whether the text scanned so far is
//! balanced, i.e. whether an operator sits at the outermost level.

use std::fmt;

/// Grouping bracket kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    Paren,
    Square,
}

impl Bracket {
    pub fn from_opener(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Paren),
            '[' => Some(Self::Square),
            _ => None,
        }
    }

    pub fn from_closer(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Paren),
            ']' => Some(Self::Square),
            _ => None,
        }
    }

    pub fn opener(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
        }
    }

    pub fn closer(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
        }
    }
}

/// Why a text is not balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImbalanceKind {
    /// A closer with nothing open.
    UnexpectedCloser(Bracket),
    /// A closer of the other kind than the innermost open group.
    MismatchedCloser { open: Bracket, close: Bracket },
    /// Group still open at the end of the text.
    Unclosed(Bracket),
}

/// First balance violation found in a text, with its byte offset.
///
/// For `Unclosed`, the offset points at the innermost opener left on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Imbalance {
    pub offset: usize,
    pub kind: ImbalanceKind,
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ImbalanceKind::UnexpectedCloser(b) => {
                write!(f, "unexpected `{}` with no open group", b.closer())
            }
            ImbalanceKind::MismatchedCloser { open, close } => write!(
                f,
                "`{}` closes a group opened with `{}`",
                close.closer(),
                open.opener()
            ),
            ImbalanceKind::Unclosed(b) => write!(f, "unclosed `{}`", b.opener()),
        }
    }
}

/// Scan `text` left to right with a stack of open brackets.
pub fn check_balance(text: &str) -> Result<(), Imbalance> {
    let mut stack: Vec<(usize, Bracket)> = Vec::new();

    for (offset, c) in text.char_indices() {
        if let Some(open) = Bracket::from_opener(c) {
            stack.push((offset, open));
            continue;
        }

        let Some(close) = Bracket::from_closer(c) else {
            continue;
        };

        match stack.pop() {
            None => {
                return Err(Imbalance {
                    offset,
                    kind: ImbalanceKind::UnexpectedCloser(close),
                });
            }
            Some((_, open)) if open != close => {
                return Err(Imbalance {
                    offset,
                    kind: ImbalanceKind::MismatchedCloser { open, close },
                });
            }
            Some(_) => {}
        }
    }

    match stack.pop() {
        Some((offset, open)) => Err(Imbalance {
            offset,
            kind: ImbalanceKind::Unclosed(open),
        }),
        None => Ok(()),
    }
}

/// True if every opener in `text` is closed by a closer of the same kind.
pub fn is_balanced(text: &str) -> bool {
    check_balance(text).is_ok()
}
