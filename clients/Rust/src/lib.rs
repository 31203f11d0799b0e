//! # decision-calc API Client
//!
//! A Rust client SDK for the decision-calc REST API: four stateless
//! decision-science calculators (2-variable linear programming, economic
//! order quantity, M/M/1 queueing, break-even analysis).
//!
//! ## Example
//!
//! ```no_run
//! use decision_calc_sdk::{DecisionCalcClient, EoqRequest, LpRequestBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DecisionCalcClient::new("http://localhost:9000")?;
//!
//!     let lp = LpRequestBuilder::new()
//!         .objective(3.0, 5.0)
//!         .constraint(1.0, 2.0, 6.0)
//!         .constraint(3.0, 2.0, 12.0)
//!         .build()?;
//!     let solution = client.solve_lp(lp).await?;
//!     println!("optimum: ({}, {}) Z = {}", solution.x, solution.y, solution.z);
//!
//!     let eoq = client.solve_eoq(EoqRequest::new(1000.0, 50.0, 2.0)).await?;
//!     println!("EOQ: {:.2}", eoq.eoq);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod client;
pub mod error;
pub mod types;

pub use builder::LpRequestBuilder;
pub use client::DecisionCalcClient;
pub use error::{DecisionCalcError, Result};
pub use types::{
    BepRequest, BepResponse, EoqRequest, EoqResponse, ErrorBody, FailureReason, LpRequest,
    LpResponse, QueueRequest, QueueResponse, Series,
};
