//! The multiplication visualization session
//!
//! [`VisualizationSession`] is the whole of the learning logic. It keeps the
//! *pending* inputs (what the learner is currently typing) apart from the
//! *frozen* [`Snapshot`] taken when the learner asks to see the picture. The
//! grid and the grading always use the snapshot, so editing the inputs after
//! visualizing changes nothing until the next [`visualize`] call.
//!
//! ```text
//!            visualize()                     restart()
//!   Idle ─────────────────▶ Visualized ─────────────────▶ Idle
//!                            │     ▲
//!                            └─────┘ visualize() / submit_answer()
//! ```
//!
//! The session is a plain value owned by the caller; there is no shared or
//! global state.
//!
//! [`visualize`]: VisualizationSession::visualize

pub mod grade;
pub mod grid;
pub mod symbol;
pub mod values;

pub use grade::Grade;
pub use grid::{Cell, Grid};
pub use symbol::Symbol;
pub use values::{Answer, Factor};

use tracing::{debug, info};

/// Factors and symbol captured by [`VisualizationSession::visualize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub rows: Factor,
    pub cols: Factor,
    pub symbol: Symbol,
}

impl Snapshot {
    pub fn product(&self) -> u16 {
        self.rows.times(self.cols)
    }

    /// Heading shown above the picture
    pub fn question(&self) -> String {
        format!("{} x {} = ?", self.rows, self.cols)
    }
}

/// State of one learner's session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationSession {
    pending_a: Factor,
    pending_b: Factor,
    pending_symbol: Symbol,
    snapshot: Option<Snapshot>,
    visualized: bool,
    last_answer: Option<Answer>,
}

impl Default for VisualizationSession {
    fn default() -> Self {
        VisualizationSession::new(Factor::clamped(3), Factor::clamped(4), Symbol::Apple)
    }
}

impl VisualizationSession {
    /// Create a session with the given pending inputs; nothing is visualized yet
    pub fn new(a: Factor, b: Factor, symbol: Symbol) -> Self {
        VisualizationSession {
            pending_a: a,
            pending_b: b,
            pending_symbol: symbol,
            snapshot: None,
            visualized: false,
            last_answer: None,
        }
    }

    /// Update the pending factors. The frozen snapshot is untouched.
    pub fn set_factors(&mut self, a: Factor, b: Factor) {
        self.pending_a = a;
        self.pending_b = b;
        debug!(a = a.get(), b = b.get(), "pending factors updated");
    }

    /// Update the pending symbol. The frozen snapshot is untouched.
    pub fn select_symbol(&mut self, symbol: Symbol) {
        self.pending_symbol = symbol;
        debug!(symbol = symbol.name(), "pending symbol updated");
    }

    /// Freeze the pending inputs and show the picture.
    ///
    /// Calling it again with the same pending inputs yields the same snapshot;
    /// with different inputs the snapshot is replaced.
    pub fn visualize(&mut self) -> Snapshot {
        let snapshot = Snapshot {
            rows: self.pending_a,
            cols: self.pending_b,
            symbol: self.pending_symbol,
        };
        self.snapshot = Some(snapshot);
        self.visualized = true;
        info!(
            rows = snapshot.rows.get(),
            cols = snapshot.cols.get(),
            symbol = snapshot.symbol.name(),
            "visualized"
        );
        snapshot
    }

    /// The grid for the frozen snapshot, or `None` while not visualized
    pub fn render_grid(&self) -> Option<Grid> {
        self.visualized_snapshot()
            .map(|s| Grid::build(s.rows, s.cols, s.symbol))
    }

    /// Grade `value` against the frozen product.
    ///
    /// Returns `None` while not visualized, since there is nothing to answer.
    /// Resubmitting is always allowed.
    pub fn submit_answer(&mut self, value: Answer) -> Option<Grade> {
        let snapshot = self.visualized_snapshot()?;
        let product = snapshot.product();
        self.last_answer = Some(value);

        let grade = if value.get() == product {
            Grade::Correct {
                rows: snapshot.rows,
                cols: snapshot.cols,
                product,
            }
        } else {
            Grade::Incorrect { submitted: value }
        };
        info!(
            submitted = value.get(),
            correct = grade.is_correct(),
            "answer graded"
        );
        Some(grade)
    }

    /// Hide the picture. Pending inputs are kept so the learner can
    /// visualize again straight away.
    pub fn restart(&mut self) {
        self.visualized = false;
        self.last_answer = None;
        info!("session restarted");
    }

    /// Instructor aid: product of the *pending* factors, whatever the
    /// visualized state
    pub fn reveal_answer(&self) -> u16 {
        let product = self.pending_a.times(self.pending_b);
        info!(
            a = self.pending_a.get(),
            b = self.pending_b.get(),
            product,
            "answer revealed"
        );
        product
    }

    pub fn pending_factors(&self) -> (Factor, Factor) {
        (self.pending_a, self.pending_b)
    }

    pub fn pending_symbol(&self) -> Symbol {
        self.pending_symbol
    }

    pub fn is_visualized(&self) -> bool {
        self.visualized
    }

    /// The last frozen snapshot, kept across `restart`
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.snapshot
    }

    pub fn last_answer(&self) -> Option<Answer> {
        self.last_answer
    }

    fn visualized_snapshot(&self) -> Option<Snapshot> {
        if self.visualized {
            self.snapshot
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(n: i64) -> Factor {
        Factor::clamped(n)
    }

    #[test]
    fn new_session_is_idle() {
        let session = VisualizationSession::default();
        assert!(!session.is_visualized());
        assert_eq!(session.pending_factors(), (f(3), f(4)));
        assert_eq!(session.pending_symbol(), Symbol::Apple);
        assert!(session.render_grid().is_none());
        assert!(session.snapshot().is_none());
    }

    #[test]
    fn edits_after_visualize_do_not_touch_snapshot() {
        let mut session = VisualizationSession::new(f(2), f(5), Symbol::Star);
        session.visualize();
        session.set_factors(f(9), f(9));
        session.select_symbol(Symbol::Dog);

        let grid = session.render_grid().unwrap();
        assert_eq!(grid.groups().len(), 2);
        assert_eq!(grid.symbol(), Symbol::Star);
        assert_eq!(
            session.submit_answer(Answer::clamped(10)).map(|g| g.is_correct()),
            Some(true)
        );
    }

    #[test]
    fn visualize_again_overwrites_snapshot() {
        let mut session = VisualizationSession::new(f(2), f(2), Symbol::Apple);
        let first = session.visualize();
        assert_eq!(session.visualize(), first);

        session.set_factors(f(4), f(1));
        let second = session.visualize();
        assert_eq!(second.rows, f(4));
        assert_eq!(session.render_grid().unwrap().glyph_count(), 4);
    }

    #[test]
    fn submit_before_visualize_is_ignored() {
        let mut session = VisualizationSession::default();
        assert_eq!(session.submit_answer(Answer::clamped(12)), None);
        assert_eq!(session.last_answer(), None);
    }

    #[test]
    fn restart_hides_grid_but_keeps_pending() {
        let mut session = VisualizationSession::new(f(6), f(7), Symbol::Cookie);
        session.visualize();
        session.submit_answer(Answer::clamped(41));
        session.restart();

        assert!(!session.is_visualized());
        assert!(session.render_grid().is_none());
        assert_eq!(session.last_answer(), None);
        assert_eq!(session.pending_factors(), (f(6), f(7)));
        assert_eq!(session.pending_symbol(), Symbol::Cookie);
    }

    #[test]
    fn question_heading() {
        let snapshot = Snapshot {
            rows: f(7),
            cols: f(8),
            symbol: Symbol::Dog,
        };
        assert_eq!(snapshot.question(), "7 x 8 = ?");
        assert_eq!(snapshot.product(), 56);
    }
}
