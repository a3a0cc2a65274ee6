use bit_set::BitSet;

use crate::dimacs::read_from_file;

/** Vertex Id */
pub type VertexId = usize;

/** models a simple undirected graph instance.
The graph is immutable once built: solvers only read it. */
#[derive(Debug)]
pub struct Instance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}


impl Instance {

    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// number of edges
    pub fn m(&self) -> usize { self.m }

    /// list of vertices adjacent to vertex i
    pub fn adj(&self, i:VertexId) -> &Vec<VertexId> {
        &self.adj_list[i]
    }

    /// degree of vertex i
    pub fn degree(&self, i:VertexId) -> usize { self.adj_list[i].len() }

    /// neighbors of vertex i as a bitset
    pub fn adj_bitset(&self, i:VertexId) -> &BitSet {
        &self.adj_matrix[i]
    }

    /// edge list
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// builds the edge list
    pub fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /** constructor using an adjacency list.

# Panics
 - if an edge references a vertex that does not exist, or a self-loop
    */
    pub fn new(adj_list:Vec<Vec<usize>>) -> Self {
        let n = adj_list.len();
        // check that the adjacency list is well-formed
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                assert!(*j < n, "edge ({},{}) references a non-existing vertex", i, j);
                assert!(*j != i, "self-loop on vertex {}", i);
            }
        }
        // compute nb edges
        let mut m = 0;
        for e in &adj_list { // at the end: m = ∑ d(v)
            m += e.len();
        }
        m /= 2; // m = (∑ d(v)) / 2
        let edges = Self::build_edges(&adj_list);
        // build the adjacency matrix
        let mut adj_matrix = vec![BitSet::default(); n];
        for (a,row) in adj_matrix.iter_mut().enumerate() {
            for b in &adj_list[a] {
                row.insert(*b);
            }
        }
        Self { n, m, edges, adj_list, adj_matrix }
    }

    /// creates an instance from an edge list
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Self {
        let mut adj_list = vec![Vec::new(); n];
        for (a,b) in edges {
            adj_list[*a].push(*b);
            adj_list[*b].push(*a);
        }
        Self::new(adj_list)
    }

    /// creates an instance from a DIMACS file
    pub fn from_file(filename:&str) -> Self {
        let (_,_,adj_list) = read_from_file(filename);
        Self::new(adj_list)
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.n());
        println!("\t{} \t edges", self.m());
        if self.n() > 0 {
            let degrees:Vec<usize> = (0..self.n()).map(|i| {
                self.adj(i).len()
            }).collect();
            println!("\t{} \t min degree", degrees.iter().min().unwrap());
            println!("\t{} \t max degree", degrees.iter().max().unwrap());
        }
    }

    /** returns if a and b are adjacent in O(1) using the adjacency matrix */
    pub fn are_adjacent(&self, a:VertexId, b:VertexId) -> bool {
        self.adj_matrix[a].contains(b)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_instance() {
        let inst = Instance::from_file("insts/c5.col");
        assert_eq!(inst.n(), 5);
        assert_eq!(inst.m(), 5);
        assert_eq!(inst.adj(0), &[1,4]);
        assert!(inst.are_adjacent(0,1));
        assert!(!inst.are_adjacent(0,2));
    }

    #[test]
    fn test_from_edges() {
        let inst = Instance::from_edges(4, &[(0,1),(1,2)]);
        assert_eq!(inst.n(), 4);
        assert_eq!(inst.m(), 2);
        assert_eq!(inst.degree(1), 2);
        assert_eq!(inst.degree(3), 0);
        // the edge list round-trips (sorted, a < b)
        assert_eq!(inst.edges(), &[(0,1),(1,2)]);
    }

    #[test]
    #[should_panic]
    fn test_malformed_edge() {
        Instance::from_edges(2, &[(0,2)]);
    }
}
