use crate::domain::lp::{LpProblem, LpSolution, EPS};
use crate::domain::solver::LpSolver;
use crate::domain::validate::{CalcError, FailureReason};

/// Geometric backend for the fixed two-variable problem. A bounded LP
/// attains its maximum at a vertex of the feasible polygon, and with only
/// four boundary lines (two constraints plus the axes) every vertex is the
/// intersection of one pair of them, so enumeration is exact.
pub struct VertexSolver;

impl VertexSolver {
    pub fn new() -> Self {
        VertexSolver
    }
}

/// Intersection of a1·x + b1·y = c1 and a2·x + b2·y = c2, None for
/// (near-)parallel lines.
fn intersect(l1: (f64, f64, f64), l2: (f64, f64, f64)) -> Option<(f64, f64)> {
    let (a1, b1, c1) = l1;
    let (a2, b2, c2) = l2;
    let det = a1 * b2 - b1 * a2;
    if det.abs() < EPS {
        return None;
    }
    Some(((c1 * b2 - c2 * b1) / det, (a1 * c2 - a2 * c1) / det))
}

fn satisfies(problem: &LpProblem, x: f64, y: f64) -> bool {
    // Tolerance scales with the right-hand side so large problems don't
    // reject their own boundary vertices to rounding.
    let tol = |b: f64| 1e-7 * b.abs().max(1.0);
    x >= -EPS
        && y >= -EPS
        && problem.a1 * x + problem.a2 * y - problem.b1 <= tol(problem.b1)
        && problem.a3 * x + problem.a4 * y - problem.b2 <= tol(problem.b2)
}

/// A non-negative direction along which both constraints keep holding;
/// moving along it never leaves the region.
fn in_recession_cone(problem: &LpProblem, dx: f64, dy: f64) -> bool {
    dx >= -EPS
        && dy >= -EPS
        && problem.a1 * dx + problem.a2 * dy <= EPS
        && problem.a3 * dx + problem.a4 * dy <= EPS
}

impl LpSolver for VertexSolver {
    fn solve(&self, problem: &LpProblem) -> Result<LpSolution, CalcError> {
        let boundaries = [
            (problem.a1, problem.a2, problem.b1),
            (problem.a3, problem.a4, problem.b2),
            (1.0, 0.0, 0.0), // x = 0
            (0.0, 1.0, 0.0), // y = 0
        ];

        let mut vertices: Vec<(f64, f64)> = Vec::new();
        for i in 0..boundaries.len() {
            for j in (i + 1)..boundaries.len() {
                if let Some((x, y)) = intersect(boundaries[i], boundaries[j]) {
                    if satisfies(problem, x, y) {
                        vertices.push((x, y));
                    }
                }
            }
        }

        // The non-negativity bounds make the region pointed, so a non-empty
        // region always contains at least one vertex.
        if vertices.is_empty() {
            return Err(CalcError {
                reason: FailureReason::Infeasible,
                details: "no non-negative (x, y) satisfies both constraints".to_string(),
            });
        }

        // Extreme rays of the recession cone lie on its own boundary lines;
        // an improving ray means the maximum is unbounded.
        let rays = [
            (1.0, 0.0),
            (0.0, 1.0),
            (problem.a2, -problem.a1),
            (-problem.a2, problem.a1),
            (problem.a4, -problem.a3),
            (-problem.a4, problem.a3),
        ];
        for (dx, dy) in rays {
            let norm = (dx * dx + dy * dy).sqrt();
            if norm < EPS {
                continue;
            }
            let (dx, dy) = (dx / norm, dy / norm);
            if in_recession_cone(problem, dx, dy) && problem.objective_at(dx, dy) > EPS {
                return Err(CalcError {
                    reason: FailureReason::Unbounded,
                    details: "objective increases without bound over the feasible region"
                        .to_string(),
                });
            }
        }

        let mut best = vertices[0];
        for &(x, y) in vertices.iter().skip(1) {
            if problem.objective_at(x, y) > problem.objective_at(best.0, best.1) {
                best = (x, y);
            }
        }

        // Snap the tiny negative slack the tolerance admits back onto the axes.
        let x = best.0.max(0.0);
        let y = best.1.max(0.0);
        Ok(LpSolution {
            x,
            y,
            z: problem.objective_at(x, y),
        })
    }

    fn name(&self) -> &str {
        "vertex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solve(problem: &LpProblem) -> Result<LpSolution, CalcError> {
        VertexSolver::new().solve(problem)
    }

    #[test]
    fn test_solve_given_bounded_problem_should_return_optimal_vertex() {
        // maximize 3x + 5y s.t. x + 2y ≤ 6, 3x + 2y ≤ 12
        let problem = LpProblem {
            c1: 3.0,
            c2: 5.0,
            a1: 1.0,
            a2: 2.0,
            b1: 6.0,
            a3: 3.0,
            a4: 2.0,
            b2: 12.0,
        };
        let solution = solve(&problem).unwrap();
        assert_relative_eq!(solution.x, 3.0, max_relative = 1e-9);
        assert_relative_eq!(solution.y, 1.5, max_relative = 1e-9);
        assert_relative_eq!(solution.z, 16.5, max_relative = 1e-9);
    }

    #[test]
    fn test_solve_given_optimum_on_axis_should_return_intercept() {
        // maximize y s.t. x + y ≤ 4, x + 2y ≤ 6 → (0, 3)
        let problem = LpProblem {
            c1: 0.0,
            c2: 1.0,
            a1: 1.0,
            a2: 1.0,
            b1: 4.0,
            a3: 1.0,
            a4: 2.0,
            b2: 6.0,
        };
        let solution = solve(&problem).unwrap();
        assert_relative_eq!(solution.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(solution.y, 3.0, max_relative = 1e-9);
    }

    #[test]
    fn test_solve_given_empty_region_should_return_infeasible() {
        // x + y ≤ -1 excludes the whole non-negative quadrant
        let problem = LpProblem {
            c1: 1.0,
            c2: 1.0,
            a1: 1.0,
            a2: 1.0,
            b1: -1.0,
            a3: 1.0,
            a4: 0.0,
            b2: 10.0,
        };
        let error = solve(&problem).unwrap_err();
        assert_eq!(error.reason, FailureReason::Infeasible);
    }

    #[test]
    fn test_solve_given_open_region_should_return_unbounded() {
        // Both constraints slack everywhere in the quadrant; maximize x + y
        let problem = LpProblem {
            c1: 1.0,
            c2: 1.0,
            a1: -1.0,
            a2: 0.0,
            b1: 1.0,
            a3: 0.0,
            a4: -1.0,
            b2: 1.0,
        };
        let error = solve(&problem).unwrap_err();
        assert_eq!(error.reason, FailureReason::Unbounded);
    }

    #[test]
    fn test_solve_given_unbounded_region_but_capped_objective_should_return_optimum() {
        // Region open along y, but the objective only rewards x.
        let problem = LpProblem {
            c1: 1.0,
            c2: 0.0,
            a1: 1.0,
            a2: 0.0,
            b1: 5.0,
            a3: 0.0,
            a4: -1.0,
            b2: 1.0,
        };
        let solution = solve(&problem).unwrap();
        assert_relative_eq!(solution.x, 5.0, max_relative = 1e-9);
        assert_relative_eq!(solution.z, 5.0, max_relative = 1e-9);
    }

    #[test]
    fn test_solve_given_origin_only_region_should_return_zero() {
        // x ≤ 0 and y ≤ 0 pin the region to the origin
        let problem = LpProblem {
            c1: 2.0,
            c2: 3.0,
            a1: 1.0,
            a2: 0.0,
            b1: 0.0,
            a3: 0.0,
            a4: 1.0,
            b2: 0.0,
        };
        let solution = solve(&problem).unwrap();
        assert_relative_eq!(solution.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(solution.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(solution.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_solve_given_vacuous_constraint_should_still_bound_with_other() {
        // 0·x + 0·y ≤ 5 is vacuous; x + y ≤ 4 does the work.
        let problem = LpProblem {
            c1: 1.0,
            c2: 1.0,
            a1: 0.0,
            a2: 0.0,
            b1: 5.0,
            a3: 1.0,
            a4: 1.0,
            b2: 4.0,
        };
        let solution = solve(&problem).unwrap();
        assert_relative_eq!(solution.z, 4.0, max_relative = 1e-9);
    }
}
