//! Exact algorithms for the maximum s-stable set problem
//! (Russian Doll Search & branch-and-price)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// graph instance base type, solutions and checker
pub mod graph;

/// read/write DIMACS formats
pub mod dimacs;

/// s-stability predicate and solution checker
pub mod stability;

/// linear programming oracle (primal & dual values)
pub mod lp;

/// helper and utility methods for executables
pub mod util;

/// search algorithms for the maximum s-stable set problem
pub mod search;
