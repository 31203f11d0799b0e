use crate::domain;
use crate::domain::breakeven::BepResult;
use crate::domain::eoq::EoqResult;
use crate::domain::lp::{LpSolution, RegionSeries};
use crate::domain::queueing::QueueResult;
use crate::domain::validate::CalcError;
use crate::models::{
    BepResponse, EoqResponse, ErrorBody, FailureReason, LpResponse, QueueResponse, Series,
};

/// Display rounding for the wire; the domain keeps full precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn to_series(name: &str, curve: domain::Curve) -> Series {
    Series {
        name: name.to_string(),
        x: curve.x,
        y: curve.y,
    }
}

impl From<domain::validate::FailureReason> for FailureReason {
    fn from(reason: domain::validate::FailureReason) -> Self {
        match reason {
            domain::validate::FailureReason::InvalidInput => FailureReason::InvalidInput,
            domain::validate::FailureReason::Infeasible => FailureReason::Infeasible,
            domain::validate::FailureReason::Unbounded => FailureReason::Unbounded,
            domain::validate::FailureReason::UnstableSystem => FailureReason::UnstableSystem,
        }
    }
}

impl From<CalcError> for ErrorBody {
    fn from(error: CalcError) -> Self {
        ErrorBody {
            reason: error.reason.into(),
            details: error.details,
        }
    }
}

pub fn to_lp_response(solution: LpSolution, region: RegionSeries) -> LpResponse {
    LpResponse {
        x: round2(solution.x),
        y: round2(solution.y),
        z: round2(solution.z),
        constraint_lines: region
            .constraint_lines
            .into_iter()
            .map(|(name, curve)| to_series(&name, curve))
            .collect(),
        envelope: to_series("feasible region", region.envelope),
    }
}

pub fn to_eoq_response(result: EoqResult) -> EoqResponse {
    EoqResponse {
        eoq: result.eoq,
        cost_curve: to_series("total cost", result.cost_curve),
    }
}

pub fn to_queue_response(result: QueueResult) -> QueueResponse {
    let metrics = result.metrics;
    QueueResponse {
        rho: metrics.rho,
        l: metrics.l,
        lq: metrics.lq,
        w: metrics.w,
        wq: metrics.wq,
        curves: vec![
            to_series("L", result.l_curve),
            to_series("Lq", result.lq_curve),
            to_series("W", result.w_curve),
            to_series("Wq", result.wq_curve),
        ],
    }
}

pub fn to_bep_response(result: BepResult) -> BepResponse {
    BepResponse {
        break_even_units: result.break_even_units,
        break_even_revenue: result.break_even_revenue,
        revenue_curve: to_series("total revenue", result.revenue_curve),
        cost_curve: to_series("total cost", result.cost_curve),
    }
}
