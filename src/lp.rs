/*!
Linear programming oracle used by the restricted master problem.

Solves `maximize c·x  s.t.  A x <= b, x >= 0` with a dense-tableau primal
simplex (Bland's rule). The oracle reports the primal values, the objective,
and the dual value of every row (read off the slack reduced costs of the
optimal tableau), which the pricing subproblem consumes.

Contract: the constraint matrix must be nonnegative (the only shape the
master problem produces). Under this contract a negative right-hand side is
infeasible outright, and the all-slack basis is feasible otherwise, so no
phase-1 is needed.
*/

/// numerical tolerance of the simplex
pub const EPS:f64 = 1e-9;

/// outcome of an LP solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpStatus {
    /// an optimal basic solution was found
    Optimal,
    /// the constraints cannot be satisfied (expected: signals a dead branch)
    Infeasible,
    /// the objective is unbounded (signals a model-construction defect)
    Unbounded,
}

/// result of an LP solve
#[derive(Debug, Clone)]
pub struct LpResult {
    /// solve status
    pub status: LpStatus,
    /// one value per variable (empty unless optimal)
    pub primal: Vec<f64>,
    /// one dual value per constraint row (empty unless optimal)
    pub duals: Vec<f64>,
    /// objective value (meaningless unless optimal)
    pub objective: f64,
}

impl LpResult {
    fn non_optimal(status:LpStatus) -> Self {
        Self { status, primal:Vec::new(), duals:Vec::new(), objective:f64::NEG_INFINITY }
    }
}

/** linear program `maximize c·x  s.t.  A x <= b, x >= 0` (dense rows). */
#[derive(Debug, Clone, Default)]
pub struct LpProblem {
    /// objective coefficients (one per variable)
    objective: Vec<f64>,
    /// constraint rows (each of length nb_vars)
    rows: Vec<Vec<f64>>,
    /// right-hand sides (one per row)
    rhs: Vec<f64>,
}

impl LpProblem {

    /// creates a problem over `objective.len()` variables
    pub fn new(objective:Vec<f64>) -> Self {
        Self { objective, rows:Vec::new(), rhs:Vec::new() }
    }

    /// number of variables
    pub fn nb_vars(&self) -> usize { self.objective.len() }

    /// number of constraint rows
    pub fn nb_rows(&self) -> usize { self.rows.len() }

    /** appends a row `coefs·x <= rhs`.

# Panics
 - if the row length differs from the number of variables
    */
    pub fn add_row(&mut self, coefs:Vec<f64>, rhs:f64) {
        assert_eq!(coefs.len(), self.nb_vars(), "row length mismatch");
        self.rows.push(coefs);
        self.rhs.push(rhs);
    }

    /** solves the program.

# Panics
 - if the simplex exceeds its iteration cap (cycling despite Bland's rule
   would indicate a defect in the tableau updates)
    */
    pub fn solve(&self) -> LpResult {
        let n = self.nb_vars();
        let m = self.nb_rows();
        // nonnegative matrix: a negative rhs cannot be satisfied
        if self.rhs.iter().any(|b| *b < -EPS) {
            return LpResult::non_optimal(LpStatus::Infeasible);
        }
        // tableau over the n structural variables followed by m slacks
        let mut tableau:Vec<Vec<f64>> = Vec::with_capacity(m);
        for (i,row) in self.rows.iter().enumerate() {
            let mut t_row = vec![0.; n+m];
            t_row[..n].copy_from_slice(row);
            t_row[n+i] = 1.;
            tableau.push(t_row);
        }
        let mut rhs = self.rhs.clone();
        let mut basis:Vec<usize> = (n..n+m).collect();
        let mut cost = vec![0.; n+m];
        cost[..n].copy_from_slice(&self.objective);
        let mut objective = 0.;
        let max_nb_pivots = 1000*(n+m+1);
        let mut nb_pivots = 0;
        loop {
            // entering variable: lowest index with positive reduced cost (Bland)
            let entering = match (0..n+m).find(|j| cost[*j] > EPS) {
                None => break, // optimal
                Some(j) => j
            };
            // leaving row: minimum ratio, ties broken on the basis index (Bland)
            let mut leaving_opt:Option<usize> = None;
            let mut best_ratio = f64::INFINITY;
            for i in 0..m {
                if tableau[i][entering] > EPS {
                    let ratio = rhs[i] / tableau[i][entering];
                    let better = match leaving_opt {
                        None => true,
                        Some(l) => ratio < best_ratio - EPS
                            || (ratio < best_ratio + EPS && basis[i] < basis[l])
                    };
                    if better {
                        leaving_opt = Some(i);
                        best_ratio = ratio;
                    }
                }
            }
            let leaving = match leaving_opt {
                None => return LpResult::non_optimal(LpStatus::Unbounded),
                Some(i) => i
            };
            // pivot
            let pivot = tableau[leaving][entering];
            for x in tableau[leaving].iter_mut() { *x /= pivot; }
            rhs[leaving] /= pivot;
            let pivot_row = tableau[leaving].clone();
            let pivot_rhs = rhs[leaving];
            for i in 0..m {
                if i == leaving { continue; }
                let factor = tableau[i][entering];
                if factor.abs() > EPS {
                    for (j,p) in pivot_row.iter().enumerate() {
                        tableau[i][j] -= factor * p;
                    }
                    rhs[i] -= factor * pivot_rhs;
                }
            }
            let factor = cost[entering];
            for (j,p) in pivot_row.iter().enumerate() {
                cost[j] -= factor * p;
            }
            objective += factor * pivot_rhs;
            basis[leaving] = entering;
            nb_pivots += 1;
            assert!(nb_pivots <= max_nb_pivots, "simplex exceeded its iteration cap");
        }
        // primal values: basic variables take their row's rhs
        let mut primal = vec![0.; n];
        for (i,b) in basis.iter().enumerate() {
            if *b < n { primal[*b] = rhs[i]; }
        }
        // dual of row i: negated reduced cost of its slack
        let duals:Vec<f64> = (0..m).map(|i| f64::max(-cost[n+i], 0.)).collect();
        LpResult { status:LpStatus::Optimal, primal, duals, objective }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_empty() {
        let lp = LpProblem::new(vec![]);
        let res = lp.solve();
        assert_eq!(res.status, LpStatus::Optimal);
        assert!(res.objective.abs() < EPS);
    }

    #[test]
    fn test_packing_pair() {
        // max x1 + x2  s.t.  x1 <= 1, x2 <= 1, x1 + x2 <= 1
        let mut lp = LpProblem::new(vec![1.,1.]);
        lp.add_row(vec![1.,0.], 1.);
        lp.add_row(vec![0.,1.], 1.);
        lp.add_row(vec![1.,1.], 1.);
        let res = lp.solve();
        assert_eq!(res.status, LpStatus::Optimal);
        assert!((res.objective - 1.).abs() < 1e-6);
        assert!((res.primal[0] + res.primal[1] - 1.).abs() < 1e-6);
        // only the packing row is binding
        assert!(res.duals[0].abs() < 1e-6);
        assert!(res.duals[1].abs() < 1e-6);
        assert!((res.duals[2] - 1.).abs() < 1e-6);
    }

    #[test]
    fn test_two_binding_rows() {
        // max 3x + 2y  s.t.  x + y <= 4, x <= 2, y <= 3
        let mut lp = LpProblem::new(vec![3.,2.]);
        lp.add_row(vec![1.,1.], 4.);
        lp.add_row(vec![1.,0.], 2.);
        lp.add_row(vec![0.,1.], 3.);
        let res = lp.solve();
        assert_eq!(res.status, LpStatus::Optimal);
        assert!((res.objective - 10.).abs() < 1e-6);
        assert!((res.primal[0] - 2.).abs() < 1e-6);
        assert!((res.primal[1] - 2.).abs() < 1e-6);
        // dual objective matches the primal one (strong duality)
        let dual_obj = 4.*res.duals[0] + 2.*res.duals[1] + 3.*res.duals[2];
        assert!((dual_obj - 10.).abs() < 1e-6);
    }

    #[test]
    fn test_infeasible_rhs() {
        let mut lp = LpProblem::new(vec![1.]);
        lp.add_row(vec![1.], -1.);
        assert_eq!(lp.solve().status, LpStatus::Infeasible);
    }

    #[test]
    fn test_duals_are_dual_feasible() {
        // fractional optimum: max x1+x2+x3 with pairwise packing rows
        let mut lp = LpProblem::new(vec![1.,1.,1.]);
        lp.add_row(vec![1.,1.,0.], 1.);
        lp.add_row(vec![0.,1.,1.], 1.);
        lp.add_row(vec![1.,0.,1.], 1.);
        let res = lp.solve();
        assert_eq!(res.status, LpStatus::Optimal);
        assert!((res.objective - 1.5).abs() < 1e-6);
        // y^T A >= c for every column
        for j in 0..3 {
            let reduced:f64 = (0..3)
                .map(|i| res.duals[i] * [[1.,1.,0.],[0.,1.,1.],[1.,0.,1.]][i][j])
                .sum();
            assert!(reduced >= 1. - 1e-6);
        }
    }
}
