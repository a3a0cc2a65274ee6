use bit_set::BitSet;

use crate::graph::{Instance, VertexId};

/** returns the number of members of *members* adjacent to v (v itself excluded). */
pub fn nb_conflicts(inst:&Instance, members:&BitSet, v:VertexId) -> usize {
    inst.adj_bitset(v).intersection(members).count()
}

/** s-stability predicate: every member of *members* is adjacent to at most
*s* other members. The empty set and singletons are trivially stable.

The predicate is re-checked over the whole set on every candidate extension:
an addition can push an earlier-accepted vertex over its budget, so checking
the new vertex alone is not enough.
*/
pub fn is_stable(inst:&Instance, members:&BitSet, s:usize) -> bool {
    members.iter().all(|v| nb_conflicts(inst, members, v) <= s)
}

/** checks if adding *v* to a stable set keeps it stable.
Equivalent to `is_stable` on the extended set, but only inspects v and its
neighbors (the budget of a non-neighbor of v cannot change).
*/
pub fn is_stable_with(inst:&Instance, members:&BitSet, s:usize, v:VertexId) -> bool {
    debug_assert!(!members.contains(v));
    let mut nb_v = 0;
    for u in inst.adj_bitset(v).intersection(members) {
        nb_v += 1;
        // u gains v as a conflicting member
        if nb_conflicts(inst, members, u) + 1 > s { return false; }
    }
    nb_v <= s
}

/**
returns None if the solution is not a valid s-stable set
returns the objective (its size) if the solution is feasible
*/
pub fn checker(inst:&Instance, sol:&[VertexId], s:usize) -> Option<usize> {
    // check that no vertex is added twice
    let mut members = BitSet::with_capacity(inst.n());
    for v in sol {
        if *v >= inst.n() || members.contains(*v) {
            return None;
        }
        members.insert(*v);
    }
    // check stability
    if !is_stable(inst, &members, s) {
        return None;
    }
    Some(sol.len())
}
