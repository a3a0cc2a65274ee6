use std::collections::BTreeMap;

use bit_set::BitSet;

use crate::graph::{Instance, VertexId};
use crate::lp::{LpProblem, LpStatus, EPS};
use crate::stability::is_stable;

/** candidate s-stable vertex subset considered as a unit ("column") by the
set-packing formulation. Immutable once built. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// member vertices
    members: BitSet,
    /// cached member count (objective weight of the column)
    size: usize,
}

impl Column {

    /** builds a column. Stability is checked, not assumed.

# Panics
 - if the member set is not s-stable
    */
    pub fn new(inst:&Instance, members:BitSet, s:usize) -> Self {
        assert!(
            is_stable(inst, &members, s),
            "column {:?} is not {}-stable", members, s
        );
        let size = members.len();
        Self { members, size }
    }

    /// member vertices
    pub fn members(&self) -> &BitSet { &self.members }

    /// number of member vertices
    pub fn size(&self) -> usize { self.size }

    /// returns if the column contains vertex v
    pub fn contains(&self, v:VertexId) -> bool { self.members.contains(v) }

    /// member vertices as a sorted list
    pub fn vertices(&self) -> Vec<VertexId> { self.members.iter().collect() }
}

/** pool of columns. Append-only during a solve: indices are stable once
assigned (branching decisions reference columns by index), and duplicate
membership sets are rejected. */
#[derive(Debug, Default)]
pub struct ColumnPool {
    /// columns in insertion order
    columns: Vec<Column>,
}

impl ColumnPool {

    /// seeds the pool with one singleton column per vertex
    pub fn singletons(inst:&Instance, s:usize) -> Self {
        let mut res = Self::default();
        for v in 0..inst.n() {
            let mut members = BitSet::with_capacity(inst.n());
            members.insert(v);
            res.push(Column::new(inst, members, s));
        }
        res
    }

    /// number of columns
    pub fn len(&self) -> usize { self.columns.len() }

    /// returns if the pool holds no column
    pub fn is_empty(&self) -> bool { self.columns.is_empty() }

    /// column at index i
    pub fn column(&self, i:usize) -> &Column { &self.columns[i] }

    /// iterates over the columns in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Column> { self.columns.iter() }

    /// returns if some column already has this membership set
    pub fn contains_members(&self, members:&BitSet) -> bool {
        self.columns.iter().any(|c| c.members() == members)
    }

    /** appends a column and returns its index, or None if an identical
    column is already present (duplicates would break index-based branching). */
    pub fn push(&mut self, column:Column) -> Option<usize> {
        if self.contains_members(column.members()) {
            return None;
        }
        self.columns.push(column);
        Some(self.columns.len()-1)
    }
}

/** solution of one restricted master solve */
#[derive(Debug, Clone)]
pub struct RmpSolution {
    /// LP status (Infeasible signals a dead branch)
    pub status: LpStatus,
    /// one value per column of the pool (fixed columns hold their fixed value)
    pub values: Vec<f64>,
    /// one dual value per vertex, then the selection-row dual last
    pub duals: Vec<f64>,
    /// objective value (includes the weight of columns fixed to 1)
    pub objective: f64,
}

impl RmpSolution {
    fn infeasible() -> Self {
        Self {
            status: LpStatus::Infeasible,
            values: Vec::new(),
            duals: Vec::new(),
            objective: f64::NEG_INFINITY,
        }
    }
}

/**
builds and solves the LP relaxation of the restricted master problem:

```text
maximize   ∑_j |C_j|·x_j
s.t.       ∑_{j : v ∈ C_j} x_j <= 1     (one packing row per vertex)
           ∑_j x_j <= 1                 (selection row)
           x_j >= 0
```

Columns listed in *fixed* are substituted out rather than left free: a column
fixed to 0 is dropped, a column fixed to 1 moves into the right-hand sides
(a negative remainder means the node's assignment is contradictory and the
problem is infeasible). Rows are ordered by vertex id with the selection row
last, and variables by column index, so dual values align positionally with
vertices on every call.

# Panics
 - if the relaxation is unbounded (impossible for well-formed packing rows;
   observing it means the model construction is defective)
*/
pub fn build_and_solve(
    inst:&Instance,
    pool:&ColumnPool,
    fixed:&BTreeMap<usize,bool>,
) -> RmpSolution {
    let n = inst.n();
    // substitute fixed columns into the right-hand sides
    let mut rhs = vec![1.; n+1];
    let mut fixed_weight = 0.;
    for (j,value) in fixed {
        if *value {
            for v in pool.column(*j).members().iter() {
                rhs[v] -= 1.;
            }
            rhs[n] -= 1.;
            fixed_weight += pool.column(*j).size() as f64;
        }
    }
    if rhs.iter().any(|b| *b < -EPS) {
        return RmpSolution::infeasible();
    }
    // one variable per free column, in index order
    let free:Vec<usize> = (0..pool.len())
        .filter(|j| !fixed.contains_key(j))
        .collect();
    let objective:Vec<f64> = free.iter()
        .map(|j| pool.column(*j).size() as f64)
        .collect();
    let mut lp = LpProblem::new(objective);
    for v in 0..n {
        let row:Vec<f64> = free.iter()
            .map(|j| if pool.column(*j).contains(v) { 1. } else { 0. })
            .collect();
        lp.add_row(row, rhs[v]);
    }
    lp.add_row(vec![1.; free.len()], rhs[n]);
    let res = lp.solve();
    match res.status {
        LpStatus::Infeasible => RmpSolution::infeasible(),
        LpStatus::Unbounded => {
            panic!("RMP relaxation unbounded: model construction defect");
        },
        LpStatus::Optimal => {
            let mut values = vec![0.; pool.len()];
            for (j,value) in fixed {
                values[*j] = if *value { 1. } else { 0. };
            }
            for (k,j) in free.iter().enumerate() {
                values[*j] = res.primal[k];
            }
            RmpSolution {
                status: LpStatus::Optimal,
                values,
                duals: res.duals,
                objective: res.objective + fixed_weight,
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn c5() -> Instance {
        Instance::from_edges(5, &[(0,1),(1,2),(2,3),(3,4),(4,0)])
    }

    fn bitset(vertices:&[usize]) -> BitSet {
        let mut res = BitSet::new();
        for v in vertices { res.insert(*v); }
        res
    }

    #[test]
    fn test_singleton_pool() {
        let inst = c5();
        let pool = ColumnPool::singletons(&inst, 0);
        assert_eq!(pool.len(), 5);
        let res = build_and_solve(&inst, &pool, &BTreeMap::new());
        assert_eq!(res.status, LpStatus::Optimal);
        // the selection row caps the objective at the best column weight
        assert!((res.objective - 1.).abs() < 1e-6);
        assert_eq!(res.duals.len(), 6);
        assert_eq!(res.values.len(), 5);
    }

    #[test]
    fn test_larger_column_wins() {
        let inst = c5();
        let mut pool = ColumnPool::singletons(&inst, 1);
        let j = pool.push(Column::new(&inst, bitset(&[0,1,3]), 1)).unwrap();
        let res = build_and_solve(&inst, &pool, &BTreeMap::new());
        assert!((res.objective - 3.).abs() < 1e-6);
        assert!((res.values[j] - 1.).abs() < 1e-6);
    }

    #[test]
    fn test_fix_to_one() {
        let inst = c5();
        let pool = ColumnPool::singletons(&inst, 0);
        let mut fixed = BTreeMap::new();
        fixed.insert(2, true);
        let res = build_and_solve(&inst, &pool, &fixed);
        assert_eq!(res.status, LpStatus::Optimal);
        assert!((res.objective - 1.).abs() < 1e-6);
        assert!((res.values[2] - 1.).abs() < 1e-6);
        // the selection row forbids any other column
        for j in [0,1,3,4] {
            assert!(res.values[j].abs() < 1e-6);
        }
    }

    #[test]
    fn test_contradictory_fixing_is_infeasible() {
        let inst = c5();
        let mut pool = ColumnPool::singletons(&inst, 1);
        let j = pool.push(Column::new(&inst, bitset(&[0,1]), 1)).unwrap();
        let mut fixed = BTreeMap::new();
        fixed.insert(0, true); // singleton {0}
        fixed.insert(j, true); // {0,1} overlaps it
        let res = build_and_solve(&inst, &pool, &fixed);
        assert_eq!(res.status, LpStatus::Infeasible);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let inst = c5();
        let mut pool = ColumnPool::singletons(&inst, 0);
        let mut members = BitSet::new();
        members.insert(3);
        assert_eq!(pool.push(Column::new(&inst, members, 0)), None);
        assert_eq!(pool.len(), 5);
    }

    #[test]
    #[should_panic]
    fn test_unstable_column_rejected() {
        let inst = c5();
        Column::new(&inst, bitset(&[0,1]), 0);
    }

    #[test]
    fn test_deterministic_resolve() {
        let inst = c5();
        let pool = ColumnPool::singletons(&inst, 0);
        let a = build_and_solve(&inst, &pool, &BTreeMap::new());
        let b = build_and_solve(&inst, &pool, &BTreeMap::new());
        assert_eq!(a.objective, b.objective);
        assert_eq!(a.values, b.values);
        assert_eq!(a.duals, b.duals);
    }
}
