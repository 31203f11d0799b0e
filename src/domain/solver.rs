use crate::domain::lp::{LpProblem, LpSolution};
use crate::domain::validate::CalcError;

/// Common interface for the two-variable LP backends.
pub trait LpSolver: Send + Sync {
    /// Maximize the objective over the constraint region.
    ///
    /// # Arguments
    /// * `problem` - Objective and constraint coefficients (A·v ≤ b, v ≥ 0)
    ///
    /// # Returns
    /// The optimal point and objective value, or a tagged failure when the
    /// region is empty or the objective has no finite maximum over it.
    fn solve(&self, problem: &LpProblem) -> Result<LpSolution, CalcError>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
