use bit_set::BitSet;

use crate::graph::{Instance, VertexId};
use crate::lp::EPS;
use crate::search::master::Column;
use crate::stability::is_stable_with;

/// improvement tolerance: a column prices in only if its reduced cost is
/// clearly positive (protects the generation loop from numerical noise)
pub const IMPROVEMENT_EPS:f64 = 1e-6;

/** exact maximum-weight s-stable set. Returns the members and their total
weight (empty set and weight 0 if every weight is nonpositive).

Only vertices of positive weight are candidates: a nonpositive-weight member
can be removed without losing stability or weight. Candidates are consumed in
index order so every set is enumerated once; after each addition, later
candidates that would break stability are discarded (instability is preserved
by extension), and branches whose remaining weight cannot beat the incumbent
are cut.
*/
pub fn max_weight_stable(inst:&Instance, s:usize, weights:&[f64]) -> (BitSet, f64) {
    assert_eq!(weights.len(), inst.n(), "one weight per vertex expected");
    let candidates:Vec<VertexId> = (0..inst.n())
        .filter(|v| weights[*v] > EPS)
        .collect();
    let mut search = Search {
        inst, s, weights,
        best: BitSet::with_capacity(inst.n()),
        best_weight: 0.,
    };
    let mut members = BitSet::with_capacity(inst.n());
    search.extend(&mut members, 0., &candidates);
    (search.best, search.best_weight)
}

/** searches for a column of positive reduced cost: an s-stable set whose
total weight strictly exceeds *threshold*. Returns None when no such set
exists, which terminates column generation. */
pub fn find_improving_column(
    inst:&Instance,
    s:usize,
    weights:&[f64],
    threshold:f64,
) -> Option<Column> {
    let (members, weight) = max_weight_stable(inst, s, weights);
    if !members.is_empty() && weight > threshold + IMPROVEMENT_EPS {
        Some(Column::new(inst, members, s))
    } else {
        None
    }
}

struct Search<'a> {
    inst:&'a Instance,
    s:usize,
    weights:&'a [f64],
    best:BitSet,
    best_weight:f64,
}

impl<'a> Search<'a> {
    fn extend(&mut self, members:&mut BitSet, weight:f64, candidates:&[VertexId]) {
        if weight > self.best_weight + EPS {
            self.best = members.clone();
            self.best_weight = weight;
        }
        // bound cut
        let remaining:f64 = candidates.iter().map(|v| self.weights[*v]).sum();
        if weight + remaining <= self.best_weight + EPS {
            return;
        }
        for (i,v) in candidates.iter().enumerate() {
            if !is_stable_with(self.inst, members, self.s, *v) {
                continue;
            }
            members.insert(*v);
            let next:Vec<VertexId> = candidates[i+1..].iter().copied()
                .filter(|u| is_stable_with(self.inst, members, self.s, *u))
                .collect();
            self.extend(members, weight + self.weights[*v], &next);
            members.remove(*v);
        }
    }
}
