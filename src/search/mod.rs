/// Russian Doll Search (exact recursive enumeration, LP-free)
pub mod rds;

/// pricing subproblem (maximum-weight s-stable set)
pub mod pricing;

/// restricted master problem (column pool + set-packing relaxation)
pub mod master;

/// branch-and-price driver
pub mod branch_and_price;
