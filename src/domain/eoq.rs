use crate::domain::validate::{check_eoq, CalcError};
use crate::domain::Curve;

#[derive(Debug, Clone, Copy)]
pub struct EoqInput {
    pub demand: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
}

#[derive(Debug, Clone)]
pub struct EoqResult {
    pub eoq: f64,
    pub cost_curve: Curve,
}

/// Annual cost of ordering in batches of `q`: ordering cost on D/q orders
/// plus holding cost on an average inventory of q/2. Only defined for q ≥ 1.
pub fn total_cost(input: &EoqInput, q: f64) -> f64 {
    (input.demand / q) * input.ordering_cost + (q / 2.0) * input.holding_cost
}

pub fn compute(input: &EoqInput) -> Result<EoqResult, CalcError> {
    check_eoq(input)?;
    let eoq = (2.0 * input.demand * input.ordering_cost / input.holding_cost).sqrt();

    // Integer sweep from 1 to 2·EOQ. The floor of 2 keeps the range
    // non-degenerate when EOQ itself lands below one unit.
    let upper = (2.0 * eoq).ceil().max(2.0) as u64;
    let mut cost_curve = Curve::with_capacity(upper as usize);
    for q in 1..=upper {
        let q = q as f64;
        cost_curve.push(q, total_cost(input, q));
    }

    Ok(EoqResult { eoq, cost_curve })
}
