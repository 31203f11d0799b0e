use std::env;

use crate::domain::solver::LpSolver;
use crate::domain::solvers::VertexSolver;

/// Available solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverType {
    Vertex,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vertex" | "geometric" => Some(SolverType::Vertex),
            _ => None,
        }
    }

    /// Backend named by the SOLVER environment variable, defaulting to
    /// vertex enumeration.
    pub fn from_env() -> Self {
        env::var("SOLVER")
            .ok()
            .and_then(|s| SolverType::from_str(&s))
            .unwrap_or(SolverType::Vertex)
    }
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType) -> Box<dyn LpSolver> {
    match solver_type {
        SolverType::Vertex => Box::new(VertexSolver::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_type_from_str() {
        assert_eq!(SolverType::from_str("vertex"), Some(SolverType::Vertex));
        assert_eq!(SolverType::from_str("Vertex"), Some(SolverType::Vertex));
        assert_eq!(SolverType::from_str("geometric"), Some(SolverType::Vertex));
        assert_eq!(SolverType::from_str("unknown"), None);
    }

    #[test]
    fn test_create_vertex_solver() {
        let solver = create_solver(SolverType::Vertex);
        assert_eq!(solver.name(), "vertex");
    }
}
