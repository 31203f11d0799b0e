use crate::error::{DecisionCalcError, Result};
use crate::types::LpRequest;

/// Builder for LP solve requests with a fluent API
///
/// The server's problem shape is fixed: one maximization objective and
/// exactly two ≤ constraints over non-negative x and y.
#[derive(Debug, Default)]
pub struct LpRequestBuilder {
    objective: Option<(f64, f64)>,
    constraints: Vec<(f64, f64, f64)>,
}

impl LpRequestBuilder {
    /// Create a new LP request builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the objective coefficients: maximize c1·x + c2·y
    ///
    /// # Example
    ///
    /// ```
    /// use decision_calc_sdk::LpRequestBuilder;
    ///
    /// let builder = LpRequestBuilder::new().objective(3.0, 5.0);
    /// ```
    pub fn objective(mut self, c1: f64, c2: f64) -> Self {
        self.objective = Some((c1, c2));
        self
    }

    /// Add the constraint a_x·x + a_y·y ≤ b
    ///
    /// Call exactly twice; `build` rejects any other count.
    ///
    /// # Example
    ///
    /// ```
    /// use decision_calc_sdk::LpRequestBuilder;
    ///
    /// // x + 2y ≤ 6
    /// let builder = LpRequestBuilder::new().constraint(1.0, 2.0, 6.0);
    /// ```
    pub fn constraint(mut self, a_x: f64, a_y: f64, b: f64) -> Self {
        self.constraints.push((a_x, a_y, b));
        self
    }

    /// Build the LP request
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No objective has been set
    /// - The constraint count is not exactly two
    pub fn build(self) -> Result<LpRequest> {
        let (c1, c2) = self.objective.ok_or_else(|| {
            DecisionCalcError::InvalidRequest("objective must be set".to_string())
        })?;

        if self.constraints.len() != 2 {
            return Err(DecisionCalcError::InvalidRequest(format!(
                "exactly two constraints are required, got {}",
                self.constraints.len()
            )));
        }

        let (a1, a2, b1) = self.constraints[0];
        let (a3, a4, b2) = self.constraints[1];

        Ok(LpRequest {
            c1,
            c2,
            a1,
            a2,
            b1,
            a3,
            a4,
            b2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid_request() {
        let result = LpRequestBuilder::new()
            .objective(3.0, 5.0)
            .constraint(1.0, 2.0, 6.0)
            .constraint(3.0, 2.0, 12.0)
            .build();

        assert!(result.is_ok());
        let request = result.unwrap();
        assert_eq!(request.c1, 3.0);
        assert_eq!(request.b2, 12.0);
    }

    #[test]
    fn test_builder_no_objective() {
        let result = LpRequestBuilder::new()
            .constraint(1.0, 2.0, 6.0)
            .constraint(3.0, 2.0, 12.0)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_one_constraint() {
        let result = LpRequestBuilder::new()
            .objective(3.0, 5.0)
            .constraint(1.0, 2.0, 6.0)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_too_many_constraints() {
        let result = LpRequestBuilder::new()
            .objective(3.0, 5.0)
            .constraint(1.0, 2.0, 6.0)
            .constraint(3.0, 2.0, 12.0)
            .constraint(1.0, 0.0, 4.0)
            .build();

        assert!(result.is_err());
    }
}
