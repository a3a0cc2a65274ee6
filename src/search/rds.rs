use bit_set::BitSet;

use crate::graph::{Instance, VertexId};
use crate::stability::is_stable_with;

/**
Implements a Russian Doll Search for the maximum s-stable set.

Seeds are explored from the last vertex down: the subproblem rooted at seed v
only uses vertices of the suffix {v..n-1}, nesting smaller subproblems inside
larger ones. Candidate pools shrink at every step: after adding v, only later
candidates whose addition keeps the set s-stable survive (instability is
preserved by extension, so discarding them loses no optimal solution).
A `|P| + |C| <= best` bound cut prunes hopeless branches.
*/
pub fn rds_search(inst:&Instance, s:usize) -> Vec<VertexId> {
    let n = inst.n();
    let mut best:Vec<VertexId> = Vec::new();
    for seed in (0..n).rev() {
        let mut members = BitSet::with_capacity(n);
        members.insert(seed);
        let mut current = vec![seed];
        let candidates:Vec<VertexId> = (seed+1..n)
            .filter(|u| is_stable_with(inst, &members, s, *u))
            .collect();
        extend(inst, s, &mut members, &mut current, &candidates, &mut best);
    }
    best
}

/** explores every s-stable extension of *current* using vertices of
*candidates* (sorted, already compatible with the current set). */
fn extend(
    inst:&Instance,
    s:usize,
    members:&mut BitSet,
    current:&mut Vec<VertexId>,
    candidates:&[VertexId],
    best:&mut Vec<VertexId>,
) {
    if current.len() > best.len() {
        *best = current.clone();
    }
    // bound cut: even taking every candidate cannot beat the incumbent
    if current.len() + candidates.len() <= best.len() {
        return;
    }
    for (i,v) in candidates.iter().enumerate() {
        members.insert(*v);
        current.push(*v);
        let next:Vec<VertexId> = candidates[i+1..].iter().copied()
            .filter(|u| is_stable_with(inst, members, s, *u))
            .collect();
        extend(inst, s, members, current, &next, best);
        members.remove(*v);
        current.pop();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;

    use crate::stability::{checker, is_stable};

    /// brute-force maximum s-stable set size (graphs small enough for 2^n)
    fn brute_force_size(inst:&Instance, s:usize) -> usize {
        let n = inst.n();
        let mut best = 0;
        for mask in 0_usize..(1<<n) {
            let mut members = BitSet::with_capacity(n);
            for v in 0..n {
                if mask & (1<<v) != 0 { members.insert(v); }
            }
            if members.len() > best && is_stable(inst, &members, s) {
                best = members.len();
            }
        }
        best
    }

    /// random G(n,p) graph used for cross-validation
    fn random_graph(n:usize, p:f64, rng:&mut StdRng) -> Instance {
        let mut edges = Vec::new();
        for a in 0..n {
            for b in a+1..n {
                if rng.gen::<f64>() < p { edges.push((a,b)); }
            }
        }
        Instance::from_edges(n, &edges)
    }

    #[test]
    fn test_k4() {
        let inst = Instance::from_edges(4, &[(0,1),(0,2),(0,3),(1,2),(1,3),(2,3)]);
        assert_eq!(rds_search(&inst, 0).len(), 1);
    }

    #[test]
    fn test_edgeless() {
        let inst = Instance::from_edges(4, &[]);
        assert_eq!(rds_search(&inst, 0).len(), 4);
    }

    #[test]
    fn test_c5() {
        let inst = Instance::from_edges(5, &[(0,1),(1,2),(2,3),(3,4),(4,0)]);
        assert_eq!(rds_search(&inst, 0).len(), 2); // maximum independent set
        assert_eq!(rds_search(&inst, 1).len(), 3);
    }

    #[test]
    fn test_petersen() {
        let inst = Instance::from_file("insts/peterson.col");
        assert_eq!(rds_search(&inst, 0).len(), 4);
    }

    #[test]
    fn test_empty_graph() {
        let inst = Instance::from_edges(0, &[]);
        assert!(rds_search(&inst, 0).is_empty());
    }

    #[test]
    fn test_witness_is_stable() {
        let inst = Instance::from_file("insts/peterson.col");
        for s in 0..3 {
            let sol = rds_search(&inst, s);
            assert_eq!(checker(&inst, &sol, s), Some(sol.len()));
        }
    }

    #[test]
    fn test_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in [4,6,8] {
            for p in [0.2, 0.5, 0.8] {
                for s in 0..3 {
                    let inst = random_graph(n, p, &mut rng);
                    assert_eq!(
                        rds_search(&inst, s).len(),
                        brute_force_size(&inst, s),
                        "n:{} p:{} s:{}", n, p, s
                    );
                }
            }
        }
    }
}
