use crate::domain::Curve;

/// Coefficients below this are treated as zero when dividing by them.
pub const EPS: f64 = 1e-9;

const SWEEP_POINTS: usize = 101;

/// maximize c1·x + c2·y
/// subject to a1·x + a2·y ≤ b1, a3·x + a4·y ≤ b2, x ≥ 0, y ≥ 0
#[derive(Debug, Clone, Copy)]
pub struct LpProblem {
    pub c1: f64,
    pub c2: f64,
    pub a1: f64,
    pub a2: f64,
    pub b1: f64,
    pub a3: f64,
    pub a4: f64,
    pub b2: f64,
}

impl LpProblem {
    /// The two constraints as (a_x, a_y, b) rows of A·v ≤ b.
    pub fn constraints(&self) -> [(f64, f64, f64); 2] {
        [
            (self.a1, self.a2, self.b1),
            (self.a3, self.a4, self.b2),
        ]
    }

    pub fn objective_at(&self, x: f64, y: f64) -> f64 {
        self.c1 * x + self.c2 * y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LpSolution {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Chart data for one solved problem: each constraint's boundary line as
/// y(x), plus the upper envelope of the feasible region.
#[derive(Debug, Clone)]
pub struct RegionSeries {
    pub constraint_lines: Vec<(String, Curve)>,
    pub envelope: Curve,
}

/// y on the boundary a_x·x + a_y·y = b, or None when the line is vertical
/// (y-coefficient ~0) and cannot be written as a function of x.
fn boundary_y(a_x: f64, a_y: f64, b: f64, x: f64) -> Option<f64> {
    if a_y.abs() < EPS {
        None
    } else {
        Some((b - a_x * x) / a_y)
    }
}

/// Largest positive x-intercept across the constraints, framing the sweep
/// so both boundary lines reach the x-axis inside the chart.
fn sweep_limit(problem: &LpProblem) -> f64 {
    let mut limit: f64 = 0.0;
    for (a_x, _, b) in problem.constraints() {
        if a_x.abs() > EPS {
            let intercept = b / a_x;
            if intercept > limit {
                limit = intercept;
            }
        }
    }
    if limit > EPS {
        limit
    } else {
        10.0
    }
}

pub fn region_series(problem: &LpProblem) -> RegionSeries {
    let x_max = sweep_limit(problem);
    let xs: Vec<f64> = (0..SWEEP_POINTS)
        .map(|i| x_max * i as f64 / (SWEEP_POINTS - 1) as f64)
        .collect();

    let mut constraint_lines = Vec::new();
    for (idx, (a_x, a_y, b)) in problem.constraints().into_iter().enumerate() {
        if a_y.abs() < EPS {
            // Vertical boundary; nothing to plot as y(x).
            continue;
        }
        let ys: Vec<f64> = xs.iter().map(|&x| (b - a_x * x) / a_y).collect();
        constraint_lines.push((
            format!("constraint {}", idx + 1),
            Curve {
                x: xs.clone(),
                y: ys,
            },
        ));
    }

    // Pointwise minimum of the defined boundary lines, clipped to y ≥ 0.
    let envelope_y: Vec<f64> = xs
        .iter()
        .map(|&x| {
            let mut y = f64::INFINITY;
            for (a_x, a_y, b) in problem.constraints() {
                if let Some(candidate) = boundary_y(a_x, a_y, b, x) {
                    y = y.min(candidate);
                }
            }
            if y.is_finite() {
                y.max(0.0)
            } else {
                0.0
            }
        })
        .collect();

    RegionSeries {
        constraint_lines,
        envelope: Curve {
            x: xs,
            y: envelope_y,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_problem() -> LpProblem {
        LpProblem {
            c1: 3.0,
            c2: 5.0,
            a1: 1.0,
            a2: 2.0,
            b1: 6.0,
            a3: 3.0,
            a4: 2.0,
            b2: 12.0,
        }
    }

    #[test]
    fn test_region_series_given_two_plain_constraints_should_emit_two_lines() {
        let series = region_series(&sample_problem());
        assert_eq!(series.constraint_lines.len(), 2);
        assert_eq!(series.envelope.x.len(), series.envelope.y.len());
    }

    #[test]
    fn test_region_series_given_vertical_constraint_should_skip_its_line() {
        let mut problem = sample_problem();
        problem.a2 = 0.0; // constraint 1 becomes x ≤ 6
        let series = region_series(&problem);
        assert_eq!(series.constraint_lines.len(), 1);
        assert_eq!(series.constraint_lines[0].0, "constraint 2");
    }

    #[test]
    fn test_region_series_envelope_should_be_pointwise_minimum_clipped_at_zero() {
        let series = region_series(&sample_problem());
        for (i, &x) in series.envelope.x.iter().enumerate() {
            let line1 = (6.0 - x) / 2.0;
            let line2 = (12.0 - 3.0 * x) / 2.0;
            let expected = line1.min(line2).max(0.0);
            assert!((series.envelope.y[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sweep_limit_given_no_positive_intercept_should_fall_back() {
        let problem = LpProblem {
            c1: 1.0,
            c2: 1.0,
            a1: 0.0,
            a2: 1.0,
            b1: 4.0,
            a3: 0.0,
            a4: 1.0,
            b2: 5.0,
        };
        assert_eq!(sweep_limit(&problem), 10.0);
    }
}
