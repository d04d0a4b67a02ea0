//! Clause cleaning: given a conflict-free assignment snapshot, remove
//! satisfied clauses, strip falsified literals, and repair watch lists and
//! counters so that the database looks as if the surviving clauses had been
//! added directly. Invoked by the search loop at decision level 0.

use {
    super::{watch::WatchListIF, ClauseDB, ClauseDBIF, ClauseIF, ClauseOffset, Watched},
    crate::{assign::AssignIF, types::*},
    log::debug,
};

/// API for the cleaning pass over the whole clause database.
///
/// Each method runs to completion on the calling thread and never commits a
/// partial rewrite of a single clause: on an `Err` the offending clause is
/// untouched, while clauses already rewritten earlier in the pass stay
/// rewritten since each rewrite is independently consistent.
pub trait ClauseCleanerIF {
    /// simplify all binary clauses against the assignment.
    fn clean_bin_clauses<A>(&mut self, asg: &A) -> MaybeInconsistent
    where
        A: AssignIF;
    /// simplify all ternary clauses against the assignment.
    fn clean_tri_clauses<A>(&mut self, asg: &A) -> MaybeInconsistent
    where
        A: AssignIF;
    /// simplify all long clauses against the assignment.
    fn clean_long_clauses<A>(&mut self, asg: &A) -> MaybeInconsistent
    where
        A: AssignIF;
    /// simplify the whole database: long, then ternary, then binary, so
    /// that entries installed by arity transitions are already clean.
    fn clean_all_clauses<A>(&mut self, asg: &A) -> MaybeInconsistent
    where
        A: AssignIF;
}

impl ClauseCleanerIF for ClauseDB {
    fn clean_bin_clauses<A>(&mut self, asg: &A) -> MaybeInconsistent
    where
        A: AssignIF,
    {
        let mut removed = 0;
        for i in 2..self.watch.len() {
            let lit1 = !Lit::from(i);
            let mut n = 0;
            while n < self.watch[i].len() {
                let Watched::Binary { other, learnt } = self.watch[i][n] else {
                    n += 1;
                    continue;
                };
                // each clause is handled once, from its smaller literal
                if other < lit1 {
                    n += 1;
                    continue;
                }
                match (asg.assigned(lit1), asg.assigned(other)) {
                    (Some(true), _) | (_, Some(true)) => {
                        self.watch[i].remove_at(n);
                        self.watch[!other].remove_binary(lit1, learnt);
                        if learnt {
                            self.num_bi_learnt -= 1;
                        } else {
                            self.num_bi_clause -= 1;
                        }
                        removed += 1;
                    }
                    (Some(false), Some(false)) => {
                        return Err(SolverError::EmptyClause((None, vec![lit1, other])));
                    }
                    (Some(false), None) | (None, Some(false)) => {
                        return Err(SolverError::UnitClause((None, vec![lit1, other])));
                    }
                    (None, None) => {
                        n += 1;
                    }
                }
            }
        }
        debug!("cdb: removed {removed} satisfied binary clauses");
        Ok(())
    }
    fn clean_tri_clauses<A>(&mut self, asg: &A) -> MaybeInconsistent
    where
        A: AssignIF,
    {
        let mut removed = 0;
        let mut shrunk = 0;
        for i in 2..self.watch.len() {
            let lit1 = !Lit::from(i);
            let mut n = 0;
            while n < self.watch[i].len() {
                let Watched::Ternary {
                    other1,
                    other2,
                    learnt,
                } = self.watch[i][n]
                else {
                    n += 1;
                    continue;
                };
                // each clause is handled once, from its smallest literal
                if other1 < lit1 || other2 < lit1 {
                    n += 1;
                    continue;
                }
                let lits = [lit1, other1, other2];
                if lits.iter().any(|l| asg.assigned(*l) == Some(true)) {
                    self.watch[i].remove_at(n);
                    self.watch[!other1].remove_ternary(lit1, other2);
                    self.watch[!other2].remove_ternary(lit1, other1);
                    if learnt {
                        self.num_tri_learnt -= 1;
                    } else {
                        self.num_tri_clause -= 1;
                    }
                    removed += 1;
                    continue;
                }
                // a stable filter: survivors keep their relative order
                let surv = lits
                    .iter()
                    .copied()
                    .filter(|l| asg.assigned(*l).is_none())
                    .collect::<Vec<_>>();
                match surv.len() {
                    3 => {
                        n += 1;
                    }
                    2 => {
                        self.watch[i].remove_at(n);
                        self.watch[!other1].remove_ternary(lit1, other2);
                        self.watch[!other2].remove_ternary(lit1, other1);
                        if learnt {
                            self.num_tri_learnt -= 1;
                        } else {
                            self.num_tri_clause -= 1;
                        }
                        self.new_clause(&mut surv.clone(), learnt);
                        shrunk += 1;
                    }
                    1 => {
                        return Err(SolverError::UnitClause((None, lits.to_vec())));
                    }
                    _ => {
                        return Err(SolverError::EmptyClause((None, lits.to_vec())));
                    }
                }
            }
        }
        debug!("cdb: removed {removed} and shrank {shrunk} ternary clauses");
        Ok(())
    }
    fn clean_long_clauses<A>(&mut self, asg: &A) -> MaybeInconsistent
    where
        A: AssignIF,
    {
        let mut removed = 0;
        let mut shrunk = 0;
        for n in 1..self.clause.len() {
            let offset = ClauseOffset::from(n);
            let c = &self.clause[n];
            if c.is(FlagClause::DEAD) {
                continue;
            }
            if c.iter().all(|l| asg.assigned(*l).is_none()) {
                continue;
            }
            if c.is_satisfied_under(asg) {
                self.remove_long_clause(offset);
                removed += 1;
                continue;
            }
            let old_l0 = c.lit0();
            let old_l1 = c.lit1();
            let learnt = c.is(FlagClause::LEARNT);
            // a stable filter: survivors keep their relative order
            let surv = c
                .iter()
                .copied()
                .filter(|l| asg.assigned(*l).is_none())
                .collect::<Vec<_>>();
            match surv.len() {
                0 => {
                    return Err(SolverError::EmptyClause((Some(offset), c.lits.clone())));
                }
                1 => {
                    return Err(SolverError::UnitClause((Some(offset), c.lits.clone())));
                }
                2 => {
                    // the clause leaves the arena as an implicit binary
                    self.remove_long_clause(offset);
                    self.new_clause(&mut surv.clone(), learnt);
                    shrunk += 1;
                }
                _ => {
                    // still long; re-derive the two watch entries
                    if surv[0] == old_l0 && surv[1] == old_l1 {
                        // anchors survive in place; only the blocker
                        // caches may point at removed literals
                        self.watch[!old_l0].update_blocker(offset, surv[1]);
                        self.watch[!old_l1].update_blocker(offset, surv[0]);
                    } else {
                        self.watch[!old_l0].remove_long(offset);
                        self.watch[!old_l1].remove_long(offset);
                        self.watch[!surv[0]].push(Watched::Long {
                            offset,
                            blocker: surv[1],
                            learnt,
                        });
                        self.watch[!surv[1]].push(Watched::Long {
                            offset,
                            blocker: surv[0],
                            learnt,
                        });
                    }
                    self.shrink_clause(offset, surv);
                    shrunk += 1;
                }
            }
        }
        debug!("cdb: removed {removed} and shrank {shrunk} long clauses");
        Ok(())
    }
    fn clean_all_clauses<A>(&mut self, asg: &A) -> MaybeInconsistent
    where
        A: AssignIF,
    {
        self.clean_long_clauses(asg)?;
        self.clean_tri_clauses(asg)?;
        self.clean_bin_clauses(asg)?;
        debug_assert!(self.counters_consistent());
        #[cfg(feature = "boundary_check")]
        assert!(self.watches_consistent());
        Ok(())
    }
}
