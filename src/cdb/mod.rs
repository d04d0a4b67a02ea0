//! Module `cdb` provides the clause database: per-literal watch lists over
//! implicit binary/ternary clauses and an arena of long clauses, plus the
//! cleaning pass that simplifies the database against an assignment.

/// methods on long `Clause` and `ClauseOffset`
mod clause;
/// methods on the cleaning pass
mod cleaner;
/// methods on `ClauseDB`
mod db;
/// methods on `Watched` and watch lists
mod watch;

pub use self::{
    clause::{Clause, ClauseIF, ClauseOffset},
    cleaner::ClauseCleanerIF,
    property::*,
    watch::{binary_watch_of_mut, WatchList, WatchListIF, Watched},
};

use {
    crate::types::*,
    std::{ops::IndexMut, slice::Iter},
};

/// Reference to a clause registered in the database, tagged by arity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseRef {
    Binary(Lit, Lit),
    Ternary(Lit, Lit, Lit),
    Long(ClauseOffset),
}

/// API for clause management like [`new_clause`](`crate::cdb::ClauseDBIF::new_clause`),
/// [`remove_long_clause`](`crate::cdb::ClauseDBIF::remove_long_clause`), and so on.
pub trait ClauseDBIF: Instantiate + IndexMut<ClauseOffset, Output = Clause> {
    /// return the number of live long clauses.
    fn num_long(&self) -> usize;
    /// return an iterator over the arena, freed slots included.
    fn iter(&self) -> Iter<'_, Clause>;
    /// return the watch list for clauses containing `!l`.
    fn watcher_list(&self, l: Lit) -> &WatchList;
    /// return a mutable watch list.
    fn watcher_list_mut(&mut self, l: Lit) -> &mut WatchList;
    /// register a clause of two or more literals and install one watch
    /// entry per literal position. Fewer than two literals is a contract
    /// violation.
    fn new_clause(&mut self, vec: &mut Vec<Lit>, learnt: bool) -> ClauseRef;
    /// unregister a binary clause `{l0, l1}` and destroy its watch entries.
    fn remove_bin_clause(&mut self, l0: Lit, l1: Lit, learnt: bool);
    /// unregister a ternary clause `{l0, l1, l2}` and destroy its watch
    /// entries.
    fn remove_tri_clause(&mut self, l0: Lit, l1: Lit, l2: Lit, learnt: bool);
    /// unregister a long clause, destroy its watch entries, and free its
    /// arena slot.
    fn remove_long_clause(&mut self, offset: ClauseOffset);
    /// rewrite the literal body of a long clause; the new body must keep
    /// at least three literals. Watch repair is the caller's business.
    fn shrink_clause(&mut self, offset: ClauseOffset, new_lits: Vec<Lit>);
    /// check the number of long clauses against the soft limit.
    /// * `Err(SolverError::OutOfMemory)` -- the db size is over the limit.
    /// * `Ok(true)` -- enough small
    /// * `Ok(false)` -- close to the limit
    fn check_size(&self) -> Result<bool, SolverError>;
}

/// Clause database
///
///```
/// use crate::{weft::config::Config, weft::types::*};
/// use crate::weft::cdb::ClauseDB;
/// let cdb = ClauseDB::instantiate(&Config::default(), &CNFDescription::default());
///```
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    /// arena of long clauses; the first slot is a sentinel
    clause: Vec<Clause>,
    /// freed arena slots awaiting reuse
    recycle: Vec<ClauseOffset>,
    /// watch table; one list per literal value
    pub watch: Vec<WatchList>,
    /// a number of long clauses to emit out-of-memory exception
    soft_limit: usize,

    //
    //## statistics
    //
    /// the number of irredundant binary clauses.
    num_bi_clause: usize,
    /// the number of learnt binary clauses.
    num_bi_learnt: usize,
    /// the number of irredundant ternary clauses.
    num_tri_clause: usize,
    /// the number of learnt ternary clauses.
    num_tri_learnt: usize,
    /// the number of irredundant long clauses.
    num_long_clause: usize,
    /// the number of learnt long clauses.
    num_long_learnt: usize,
}

pub mod property {
    use super::ClauseDB;
    use crate::types::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub enum Tusize {
        NumBiClause,
        NumBiLearnt,
        NumTriClause,
        NumTriLearnt,
        NumLongClause,
        NumLongLearnt,
    }

    pub const USIZES: [Tusize; 6] = [
        Tusize::NumBiClause,
        Tusize::NumBiLearnt,
        Tusize::NumTriClause,
        Tusize::NumTriLearnt,
        Tusize::NumLongClause,
        Tusize::NumLongLearnt,
    ];

    impl PropertyDereference<Tusize, usize> for ClauseDB {
        #[inline]
        fn derefer(&self, k: Tusize) -> usize {
            match k {
                Tusize::NumBiClause => self.num_bi_clause,
                Tusize::NumBiLearnt => self.num_bi_learnt,
                Tusize::NumTriClause => self.num_tri_clause,
                Tusize::NumTriLearnt => self.num_tri_learnt,
                Tusize::NumLongClause => self.num_long_clause,
                Tusize::NumLongLearnt => self.num_long_learnt,
            }
        }
    }
}
