use serde::{Deserialize, Serialize};

// ---------- API (wire) types: owned & serde-friendly ----------

/// maximize c1·x + c2·y subject to a1·x + a2·y ≤ b1, a3·x + a4·y ≤ b2,
/// x ≥ 0, y ≥ 0.
#[derive(Serialize, Deserialize, Clone)]
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

#[derive(Serialize, Deserialize, Clone)]
pub struct EoqRequest {
    /// Annual demand D.
    pub demand: f64,
    /// Cost per order S.
    pub ordering_cost: f64,
    /// Holding cost per unit per year H.
    pub holding_cost: f64,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct QueueRequest {
    /// λ, arrivals per unit time.
    pub arrival_rate: f64,
    /// μ, services per unit time.
    pub service_rate: f64,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct BepRequest {
    pub fixed_cost: f64,
    /// Variable cost per unit; must stay below selling_price.
    pub variable_cost: f64,
    pub selling_price: f64,
}

// ---------- API response types (decoupled from the domain) ----------

/// A named coordinate-array series for the presentation layer to plot.
#[derive(Serialize, Deserialize, Clone)]
pub struct Series {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Optimal point and objective value, rounded to 2 decimals for display,
/// plus the chart series of the constraint geometry.
#[derive(Serialize, Deserialize, Clone)]
pub struct LpResponse {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub constraint_lines: Vec<Series>,
    pub envelope: Series,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct EoqResponse {
    pub eoq: f64,
    pub cost_curve: Series,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct QueueResponse {
    pub rho: f64,
    pub l: f64,
    pub lq: f64,
    pub w: f64,
    pub wq: f64,
    /// L, Lq, W, Wq against ρ.
    pub curves: Vec<Series>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct BepResponse {
    pub break_even_units: f64,
    pub break_even_revenue: f64,
    pub revenue_curve: Series,
    pub cost_curve: Series,
}

// ---------- API failure types ----------

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    InvalidInput,
    Infeasible,
    Unbounded,
    UnstableSystem,
}

/// Body of every 422 response; the presentation layer maps `reason` to a
/// user-facing message and may show `details` verbatim.
#[derive(Serialize, Deserialize, Clone)]
pub struct ErrorBody {
    pub reason: FailureReason,
    pub details: String,
}
