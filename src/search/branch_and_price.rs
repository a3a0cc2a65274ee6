use std::collections::BTreeMap;
use std::time::Instant;

use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use serde::Serialize;

use crate::graph::{Instance, VertexId};
use crate::lp::LpStatus;
use crate::search::master::{build_and_solve, ColumnPool, RmpSolution};
use crate::search::pricing::find_improving_column;

/// integrality tolerance on LP values
const INTEGRALITY_EPS:f64 = 1e-6;

/** node of the branch-and-price tree: an immutable partial assignment of
column indices to {0,1}. Each node owns its own map (value-copied from the
parent), so sibling branches cannot leak state into each other. */
#[derive(Debug, Clone)]
pub struct BranchNode {
    /// column index -> fixed value
    fixed: BTreeMap<usize,bool>,
    /// LP bound of the parent (priority for best-first exploration)
    bound: f64,
}

/// search statistics of one solve
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolveStats {
    /// branch nodes processed
    pub nb_nodes: usize,
    /// columns in the pool at the end of the solve
    pub nb_columns: usize,
    /// restricted master solves (column generation iterations)
    pub nb_cg_iterations: usize,
}

/// result of one branch-and-price solve
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// maximum s-stable set size found
    pub size: usize,
    /// witness vertex set (sorted)
    pub witness: Vec<VertexId>,
    /// false if the time limit pruned part of the tree (partial result)
    pub complete: bool,
    /// search statistics
    pub stats: SolveStats,
}

/** runs column generation under a node's fixed assignment: alternately solve
the restricted master and price a new column with vertex weights `1 - dual[v]`
against the selection-row dual, until no column of positive reduced cost
exists (or the proposed column is already pooled, which at an optimal master
only happens through numerical noise). The restricted objective is monotone
nondecreasing across iterations and the pool is finite, so the loop
terminates. */
fn column_generation(
    inst:&Instance,
    s:usize,
    pool:&mut ColumnPool,
    fixed:&BTreeMap<usize,bool>,
    stats:&mut SolveStats,
) -> RmpSolution {
    loop {
        let rmp = build_and_solve(inst, pool, fixed);
        stats.nb_cg_iterations += 1;
        if rmp.status != LpStatus::Optimal {
            return rmp;
        }
        let n = inst.n();
        let weights:Vec<f64> = (0..n).map(|v| 1. - rmp.duals[v]).collect();
        let threshold = rmp.duals[n];
        match find_improving_column(inst, s, &weights, threshold) {
            None => return rmp,
            Some(column) => {
                if pool.push(column).is_none() {
                    return rmp;
                }
            }
        }
    }
}

/** solves the maximum s-stable set problem by branch-and-price.

The column pool is seeded with singletons and lives for this call only. Nodes
are explored best-first (highest parent LP bound). At each node, column
generation is re-run before testing integrality; infeasible nodes and nodes
whose bound cannot beat the incumbent are pruned; integral optima update the
incumbent; otherwise the lowest-index fractional column is branched to 0/1.

On time-limit expiry the remaining frontier is dropped and the result is
flagged incomplete rather than failing the whole solve.
*/
pub fn solve(inst:&Instance, s:usize, time_limit:f32) -> SolveResult {
    let t_start = Instant::now();
    let mut pool = ColumnPool::singletons(inst, s);
    let mut stats = SolveStats::default();
    let mut best_size = 0;
    let mut best_witness:Vec<VertexId> = Vec::new();
    let mut complete = true;
    let mut nodes = vec![BranchNode { fixed:BTreeMap::new(), bound:f64::INFINITY }];
    let mut frontier:PriorityQueue<usize,OrderedFloat<f64>> = PriorityQueue::new();
    frontier.push(0, OrderedFloat(f64::INFINITY));
    while let Some((node_id,_)) = frontier.pop() {
        if t_start.elapsed().as_secs_f32() > time_limit {
            complete = false;
            break;
        }
        stats.nb_nodes += 1;
        // a sibling's incumbent may have overtaken the stored bound
        if best_size > 0 && integer_bound(nodes[node_id].bound) <= best_size {
            continue;
        }
        let fixed = nodes[node_id].fixed.clone();
        let rmp = column_generation(inst, s, &mut pool, &fixed, &mut stats);
        if rmp.status == LpStatus::Infeasible {
            continue; // dead branch
        }
        if best_size > 0 && integer_bound(rmp.objective) <= best_size {
            continue;
        }
        match rmp.values.iter().position(|x| (x - x.round()).abs() > INTEGRALITY_EPS) {
            None => {
                // integral: candidate incumbent
                let mut witness:Vec<VertexId> = Vec::new();
                for (column,x) in pool.iter().zip(rmp.values.iter()) {
                    if *x > 0.5 {
                        witness.extend(column.vertices());
                    }
                }
                witness.sort_unstable();
                if witness.len() > best_size {
                    best_size = witness.len();
                    best_witness = witness;
                }
            },
            Some(j) => {
                // branch on the lowest-index fractional column
                for value in [false, true] {
                    let mut fixed_child = fixed.clone();
                    fixed_child.insert(j, value);
                    nodes.push(BranchNode { fixed:fixed_child, bound:rmp.objective });
                    frontier.push(nodes.len()-1, OrderedFloat(rmp.objective));
                }
            }
        }
    }
    stats.nb_columns = pool.len();
    SolveResult { size:best_size, witness:best_witness, complete, stats }
}

/// largest integral objective reachable under an LP bound
fn integer_bound(bound:f64) -> usize {
    (bound + INTEGRALITY_EPS).floor() as usize
}
