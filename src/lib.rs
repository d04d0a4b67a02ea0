//! Watched-literal indexing and clause-simplification core for CDCL SAT
//! solvers. Binary and ternary clauses live implicitly in per-literal watch
//! lists; long clauses live in an arena addressed by stable offsets. The
//! cleaning pass keeps clause storage, watch lists, and per-arity counters
//! bit-exactly consistent while simplifying against an assignment.
/// assignment table, read by the cleaning pass
pub mod assign;
/// clause database
pub mod cdb;
/// parameters used on instantiation
pub mod config;
/// plumbing layer
pub mod types;
