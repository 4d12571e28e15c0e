//! Grading outcome for a submitted answer

use super::values::{Answer, Factor};

/// Result of checking an answer against the frozen product.
///
/// A wrong answer is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Correct {
        rows: Factor,
        cols: Factor,
        product: u16,
    },
    Incorrect {
        submitted: Answer,
    },
}

impl Grade {
    pub fn is_correct(&self) -> bool {
        matches!(self, Grade::Correct { .. })
    }

    /// Feedback line shown under the answer field
    pub fn message(&self) -> String {
        match self {
            Grade::Correct {
                rows,
                cols,
                product,
            } => format!("Correct! {} x {} = {}", rows, cols, product),
            Grade::Incorrect { submitted } => format!(
                "Not quite, check the picture and try again. (entered: {})",
                submitted
            ),
        }
    }
}
