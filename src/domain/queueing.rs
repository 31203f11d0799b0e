use crate::domain::validate::{check_queue, CalcError};
use crate::domain::Curve;

#[derive(Debug, Clone, Copy)]
pub struct QueueInput {
    pub arrival_rate: f64,
    pub service_rate: f64,
}

/// Steady-state M/M/1 metrics. All of them diverge as ρ → 1; that is the
/// model, not an error, as long as ρ stays strictly below 1.
#[derive(Debug, Clone, Copy)]
pub struct QueueMetrics {
    /// Utilization λ/μ.
    pub rho: f64,
    /// Expected number in system.
    pub l: f64,
    /// Expected number in queue.
    pub lq: f64,
    /// Expected time in system.
    pub w: f64,
    /// Expected wait in queue.
    pub wq: f64,
}

#[derive(Debug, Clone)]
pub struct QueueResult {
    pub metrics: QueueMetrics,
    pub l_curve: Curve,
    pub lq_curve: Curve,
    pub w_curve: Curve,
    pub wq_curve: Curve,
}

fn metrics_at(arrival_rate: f64, service_rate: f64) -> QueueMetrics {
    let rho = arrival_rate / service_rate;
    QueueMetrics {
        rho,
        l: rho / (1.0 - rho),
        lq: rho * rho / (1.0 - rho),
        w: 1.0 / (service_rate - arrival_rate),
        wq: rho / (service_rate - arrival_rate),
    }
}

pub fn compute(input: &QueueInput) -> Result<QueueResult, CalcError> {
    check_queue(input)?;
    let metrics = metrics_at(input.arrival_rate, input.service_rate);

    // Metric curves against ρ, swept strictly inside (0, 1) so the λ = μ
    // singularity never enters the series.
    let mut l_curve = Curve::with_capacity(99);
    let mut lq_curve = Curve::with_capacity(99);
    let mut w_curve = Curve::with_capacity(99);
    let mut wq_curve = Curve::with_capacity(99);
    for i in 1..=99u32 {
        let rho = f64::from(i) / 100.0;
        let swept = metrics_at(rho * input.service_rate, input.service_rate);
        l_curve.push(rho, swept.l);
        lq_curve.push(rho, swept.lq);
        w_curve.push(rho, swept.w);
        wq_curve.push(rho, swept.wq);
    }

    Ok(QueueResult {
        metrics,
        l_curve,
        lq_curve,
        w_curve,
        wq_curve,
    })
}
