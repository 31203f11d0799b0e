use crate::domain::breakeven::BepInput;
use crate::domain::eoq::EoqInput;
use crate::domain::lp::LpProblem;
use crate::domain::queueing::QueueInput;

/// Why a calculator refused to produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    InvalidInput,
    Infeasible,
    Unbounded,
    UnstableSystem,
}

#[derive(Debug, Clone)]
pub struct CalcError {
    pub reason: FailureReason,
    pub details: String,
}

impl CalcError {
    pub fn invalid_input(details: impl Into<String>) -> Self {
        CalcError {
            reason: FailureReason::InvalidInput,
            details: details.into(),
        }
    }
}

fn require_finite(name: &str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(format!(
            "{} must be a finite number, got {}",
            name, value
        )))
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), CalcError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(format!(
            "{} must be strictly positive, got {}",
            name, value
        )))
    }
}

/// LP coefficients may carry any sign, but NaN/∞ would poison the vertex
/// arithmetic before the solver could report anything sensible.
pub fn check_lp(problem: &LpProblem) -> Result<(), CalcError> {
    let fields = [
        ("c1", problem.c1),
        ("c2", problem.c2),
        ("a1", problem.a1),
        ("a2", problem.a2),
        ("b1", problem.b1),
        ("a3", problem.a3),
        ("a4", problem.a4),
        ("b2", problem.b2),
    ];
    for (name, value) in fields {
        require_finite(name, value)?;
    }
    Ok(())
}

pub fn check_eoq(input: &EoqInput) -> Result<(), CalcError> {
    require_positive("demand", input.demand)?;
    require_positive("ordering_cost", input.ordering_cost)?;
    require_positive("holding_cost", input.holding_cost)
}

/// Positivity plus the M/M/1 stability condition λ < μ; at λ ≥ μ the queue
/// grows without bound and no steady state exists.
pub fn check_queue(input: &QueueInput) -> Result<(), CalcError> {
    require_positive("arrival_rate", input.arrival_rate)?;
    require_positive("service_rate", input.service_rate)?;
    if input.arrival_rate < input.service_rate {
        Ok(())
    } else {
        Err(CalcError {
            reason: FailureReason::UnstableSystem,
            details: format!(
                "arrival rate {} must stay strictly below service rate {}",
                input.arrival_rate, input.service_rate
            ),
        })
    }
}

pub fn check_bep(input: &BepInput) -> Result<(), CalcError> {
    require_positive("fixed_cost", input.fixed_cost)?;
    require_finite("variable_cost", input.variable_cost)?;
    if input.variable_cost < 0.0 {
        return Err(CalcError::invalid_input(format!(
            "variable_cost must be non-negative, got {}",
            input.variable_cost
        )));
    }
    require_finite("selling_price", input.selling_price)?;
    if input.selling_price <= input.variable_cost {
        return Err(CalcError::invalid_input(format!(
            "selling_price {} must exceed variable_cost {}",
            input.selling_price, input.variable_cost
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_eoq_given_positive_inputs_should_return_ok() {
        let input = EoqInput {
            demand: 1000.0,
            ordering_cost: 50.0,
            holding_cost: 2.0,
        };
        assert!(check_eoq(&input).is_ok());
    }

    #[test]
    fn test_check_eoq_given_zero_holding_cost_should_return_invalid_input() {
        let input = EoqInput {
            demand: 1000.0,
            ordering_cost: 50.0,
            holding_cost: 0.0,
        };
        let error = check_eoq(&input).unwrap_err();
        assert_eq!(error.reason, FailureReason::InvalidInput);
    }

    #[test]
    fn test_check_eoq_given_nan_demand_should_return_invalid_input() {
        let input = EoqInput {
            demand: f64::NAN,
            ordering_cost: 50.0,
            holding_cost: 2.0,
        };
        let error = check_eoq(&input).unwrap_err();
        assert_eq!(error.reason, FailureReason::InvalidInput);
    }

    #[test]
    fn test_check_queue_given_stable_rates_should_return_ok() {
        let input = QueueInput {
            arrival_rate: 5.0,
            service_rate: 8.0,
        };
        assert!(check_queue(&input).is_ok());
    }

    #[test]
    fn test_check_queue_given_equal_rates_should_return_unstable_system() {
        let input = QueueInput {
            arrival_rate: 8.0,
            service_rate: 8.0,
        };
        let error = check_queue(&input).unwrap_err();
        assert_eq!(error.reason, FailureReason::UnstableSystem);
    }

    #[test]
    fn test_check_queue_given_negative_rate_should_return_invalid_input() {
        let input = QueueInput {
            arrival_rate: -1.0,
            service_rate: 8.0,
        };
        let error = check_queue(&input).unwrap_err();
        assert_eq!(error.reason, FailureReason::InvalidInput);
    }

    #[test]
    fn test_check_bep_given_price_above_variable_cost_should_return_ok() {
        let input = BepInput {
            fixed_cost: 10000.0,
            variable_cost: 50.0,
            selling_price: 100.0,
        };
        assert!(check_bep(&input).is_ok());
    }

    #[test]
    fn test_check_bep_given_price_at_variable_cost_should_return_invalid_input() {
        let input = BepInput {
            fixed_cost: 10000.0,
            variable_cost: 100.0,
            selling_price: 100.0,
        };
        let error = check_bep(&input).unwrap_err();
        assert_eq!(error.reason, FailureReason::InvalidInput);
    }

    #[test]
    fn test_check_bep_given_zero_fixed_cost_should_return_invalid_input() {
        let input = BepInput {
            fixed_cost: 0.0,
            variable_cost: 50.0,
            selling_price: 100.0,
        };
        let error = check_bep(&input).unwrap_err();
        assert_eq!(error.reason, FailureReason::InvalidInput);
    }

    #[test]
    fn test_check_lp_given_infinite_coefficient_should_return_invalid_input() {
        let problem = LpProblem {
            c1: 3.0,
            c2: f64::INFINITY,
            a1: 1.0,
            a2: 2.0,
            b1: 6.0,
            a3: 3.0,
            a4: 2.0,
            b2: 12.0,
        };
        let error = check_lp(&problem).unwrap_err();
        assert_eq!(error.reason, FailureReason::InvalidInput);
    }
}
