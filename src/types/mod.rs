//! Module `types` provides various building blocks, including
//! some common traits.

/// methods on flags used in Clause
pub mod flags;
/// methods on literals
pub mod lit;

pub use self::{flags::*, lit::*};

pub use crate::{cdb::ClauseOffset, config::Config};

use std::fmt;

/// Variable as Index is `usize`. Variable 0 is reserved.
pub type VarId = usize;

/// API for object instantiation based on `Config` and `CNFDescription`.
/// This is implemented by all the stateful modules of this crate.
///
/// # Example
///
/// ```
/// use crate::{weft::config::Config, weft::types::*};
/// use weft::cdb::ClauseDB;
/// let _ = ClauseDB::instantiate(&Config::default(), &CNFDescription::default());
///```
pub trait Instantiate {
    /// make and return an object from `Config` and `CNFDescription`.
    fn instantiate(conf: &Config, cnf: &CNFDescription) -> Self;
    /// update by a solver event.
    fn handle(&mut self, _e: SolverEvent) {}
}

/// Events sent by the surrounding search loop to each component.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverEvent {
    /// a new variable was allocated.
    NewVar,
}

/// Identity of the clause on which a cleaning pass gave up: the arena
/// offset for long clauses, `None` for implicit binary/ternary ones,
/// together with the clause's literals at the moment of failure.
pub type OffendingClause = (Option<ClauseOffset>, Vec<Lit>);

/// Internal errors.
#[derive(Debug, Eq, PartialEq)]
pub enum SolverError {
    // A clause lost all its literals under the given assignment;
    // the caller passed a conflicting assignment to the cleaner.
    EmptyClause(OffendingClause),
    // A clause shrank to a single live literal; the assignment snapshot
    // is inconsistent with the caller's unit propagation.
    UnitClause(OffendingClause),
    // A clause contains a literal out of the range defined in its header.
    InvalidLiteral,
    OutOfMemory,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A Return type used by fallible operations.
pub type MaybeInconsistent = Result<(), SolverError>;

/// API for accessing internal data in a module.
/// Counters and statistics should be used locally in their defining modules;
/// to avoid making them public, we define a generic exporter here.
pub trait PropertyDereference<I, O: Sized> {
    fn derefer(&self, key: I) -> O;
}

/// data about a problem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CNFDescription {
    pub num_of_variables: usize,
    pub num_of_clauses: usize,
    pub pathname: String,
}

impl Default for CNFDescription {
    fn default() -> CNFDescription {
        CNFDescription {
            num_of_variables: 0,
            num_of_clauses: 0,
            pathname: String::new(),
        }
    }
}

impl fmt::Display for CNFDescription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let CNFDescription {
            num_of_variables: nv,
            num_of_clauses: nc,
            pathname: path,
        } = &self;
        write!(f, "CNF({nv}, {nc}, {path})")
    }
}
