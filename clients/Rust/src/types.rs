use serde::{Deserialize, Serialize};

/// Two-variable maximization problem:
/// maximize c1·x + c2·y subject to a1·x + a2·y ≤ b1, a3·x + a4·y ≤ b2,
/// x ≥ 0, y ≥ 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LpRequest {
    pub c1: f64,
    pub c2: f64,
    pub a1: f64,
    pub a2: f64,
    pub b1: f64,
    pub a3: f64,
    pub a4: f64,
    pub b2: f64,
}

/// Economic-order-quantity inputs; every field must be strictly positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoqRequest {
    /// Annual demand D
    pub demand: f64,
    /// Cost per order S
    pub ordering_cost: f64,
    /// Holding cost per unit per year H
    pub holding_cost: f64,
}

impl EoqRequest {
    /// Create a new EOQ request
    pub fn new(demand: f64, ordering_cost: f64, holding_cost: f64) -> Self {
        Self {
            demand,
            ordering_cost,
            holding_cost,
        }
    }
}

/// M/M/1 queue inputs; the server requires arrival_rate < service_rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueRequest {
    /// λ, arrivals per unit time
    pub arrival_rate: f64,
    /// μ, services per unit time
    pub service_rate: f64,
}

impl QueueRequest {
    /// Create a new queueing request
    pub fn new(arrival_rate: f64, service_rate: f64) -> Self {
        Self {
            arrival_rate,
            service_rate,
        }
    }
}

/// Break-even inputs; the server requires selling_price > variable_cost ≥ 0
/// and fixed_cost > 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BepRequest {
    pub fixed_cost: f64,
    pub variable_cost: f64,
    pub selling_price: f64,
}

impl BepRequest {
    /// Create a new break-even request
    pub fn new(fixed_cost: f64, variable_cost: f64, selling_price: f64) -> Self {
        Self {
            fixed_cost,
            variable_cost,
            selling_price,
        }
    }
}

/// A named coordinate-array series, ready to plot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Optimal point and objective value (2-decimal display precision) plus the
/// constraint geometry as plot series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LpResponse {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub constraint_lines: Vec<Series>,
    pub envelope: Series,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoqResponse {
    pub eoq: f64,
    pub cost_curve: Series,
}

/// Steady-state M/M/1 metrics with the four metric curves against ρ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueResponse {
    pub rho: f64,
    pub l: f64,
    pub lq: f64,
    pub w: f64,
    pub wq: f64,
    pub curves: Vec<Series>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BepResponse {
    pub break_even_units: f64,
    pub break_even_revenue: f64,
    pub revenue_curve: Series,
    pub cost_curve: Series,
}

/// Tagged reason of a 422 failure response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    InvalidInput,
    Infeasible,
    Unbounded,
    UnstableSystem,
}

/// Body of a 422 failure response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub reason: FailureReason,
    pub details: String,
}
