use crate::domain::validate::{check_bep, CalcError};
use crate::domain::Curve;

#[derive(Debug, Clone, Copy)]
pub struct BepInput {
    pub fixed_cost: f64,
    pub variable_cost: f64,
    pub selling_price: f64,
}

#[derive(Debug, Clone)]
pub struct BepResult {
    pub break_even_units: f64,
    pub break_even_revenue: f64,
    pub revenue_curve: Curve,
    pub cost_curve: Curve,
}

pub fn compute(input: &BepInput) -> Result<BepResult, CalcError> {
    check_bep(input)?;
    let break_even_units = input.fixed_cost / (input.selling_price - input.variable_cost);
    // Algebraically break_even_units · P; the contribution-margin form is
    // what the result reports.
    let break_even_revenue =
        input.fixed_cost / (1.0 - input.variable_cost / input.selling_price);

    // Unit sweep from 0 to 2·BEP, one point per unit, so the crossing sits
    // in the middle of the chart.
    let upper = (2.0 * break_even_units).ceil().max(2.0) as u64;
    let mut revenue_curve = Curve::with_capacity(upper as usize + 1);
    let mut cost_curve = Curve::with_capacity(upper as usize + 1);
    for unit in 0..=upper {
        let unit = unit as f64;
        revenue_curve.push(unit, unit * input.selling_price);
        cost_curve.push(unit, input.fixed_cost + input.variable_cost * unit);
    }

    Ok(BepResult {
        break_even_units,
        break_even_revenue,
        revenue_curve,
        cost_curve,
    })
}
