//! Overflow verdict and its pure transition function.

/// Whether a cell's content fits inside its height budget.
///
/// # Cardinality
/// - 2 states, both valid, no terminal state
/// - Starts as `Fitting`: content is rendered optimistically and corrected
///   one measurement later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowState {
    /// Content fits; no affordance is shown.
    #[default]
    Fitting,
    /// Content is taller than the budget; fade and banner are shown.
    Overflowing,
}

impl OverflowState {
    /// Verdict for a measured extent against a budget.
    ///
    /// Strict comparison: content exactly as tall as the budget fits.
    pub fn classify(measured_extent: usize, budget: u16) -> Self {
        if measured_extent > budget as usize {
            Self::Overflowing
        } else {
            Self::Fitting
        }
    }

    /// True when the affordance should be rendered.
    pub fn is_overflowing(self) -> bool {
        matches!(self, Self::Overflowing)
    }
}

/// Next overflow state after a measurement pass.
///
/// The verdict depends only on the measurement. Callers compare the result
/// with `_current` and re-render only on a change.
pub fn transition(_current: OverflowState, measured_extent: usize, budget: u16) -> OverflowState {
    OverflowState::classify(measured_extent, budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fitting() {
        assert_eq!(OverflowState::default(), OverflowState::Fitting);
        assert!(!OverflowState::default().is_overflowing());
    }

    #[test]
    fn extent_above_budget_overflows() {
        assert_eq!(
            transition(OverflowState::Fitting, 9, 8),
            OverflowState::Overflowing
        );
    }

    #[test]
    fn extent_equal_to_budget_fits() {
        assert_eq!(transition(OverflowState::Fitting, 8, 8), OverflowState::Fitting);
        assert_eq!(
            transition(OverflowState::Overflowing, 8, 8),
            OverflowState::Fitting
        );
    }

    #[test]
    fn shrinking_content_returns_to_fitting() {
        assert_eq!(
            transition(OverflowState::Overflowing, 3, 8),
            OverflowState::Fitting
        );
    }

    #[test]
    fn unchanged_layout_is_a_fixed_point() {
        let once = transition(OverflowState::Fitting, 20, 8);
        let twice = transition(once, 20, 8);
        assert_eq!(once, twice);
    }

    #[test]
    fn zero_budget_overflows_on_any_content() {
        assert_eq!(transition(OverflowState::Fitting, 0, 0), OverflowState::Fitting);
        assert_eq!(
            transition(OverflowState::Fitting, 1, 0),
            OverflowState::Overflowing
        );
    }
}
