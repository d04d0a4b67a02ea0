use {
    super::{
        watch::WatchListIF, Clause, ClauseDB, ClauseDBIF, ClauseIF, ClauseOffset, ClauseRef,
        WatchList, Watched,
    },
    crate::types::*,
    log::trace,
    std::{
        ops::{Index, IndexMut},
        slice::Iter,
    },
};

impl Index<ClauseOffset> for ClauseDB {
    type Output = Clause;
    #[inline]
    fn index(&self, offset: ClauseOffset) -> &Clause {
        &self.clause[offset.ordinal as usize]
    }
}

impl IndexMut<ClauseOffset> for ClauseDB {
    #[inline]
    fn index_mut(&mut self, offset: ClauseOffset) -> &mut Clause {
        &mut self.clause[offset.ordinal as usize]
    }
}

impl Instantiate for ClauseDB {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> ClauseDB {
        let nv = cnf.num_of_variables;
        let nc = cnf.num_of_clauses;
        let mut clause = Vec::with_capacity(1 + nc);
        clause.push(Clause::default());
        let mut watch = Vec::with_capacity(2 * (nv + 1));
        for _ in 0..2 * (nv + 1) {
            watch.push(WatchList::new());
        }
        ClauseDB {
            clause,
            watch,
            soft_limit: config.c_cls_lim,
            ..ClauseDB::default()
        }
    }
    fn handle(&mut self, e: SolverEvent) {
        match e {
            SolverEvent::NewVar => {
                // for negated literal
                self.watch.push(WatchList::new());
                // for positive literal
                self.watch.push(WatchList::new());
            }
        }
    }
}

impl ClauseDBIF for ClauseDB {
    fn num_long(&self) -> usize {
        self.clause.len() - self.recycle.len() - 1
    }
    fn iter(&self) -> Iter<'_, Clause> {
        self.clause.iter()
    }
    #[inline]
    fn watcher_list(&self, l: Lit) -> &WatchList {
        &self.watch[l]
    }
    #[inline]
    fn watcher_list_mut(&mut self, l: Lit) -> &mut WatchList {
        &mut self.watch[l]
    }
    fn new_clause(&mut self, vec: &mut Vec<Lit>, learnt: bool) -> ClauseRef {
        debug_assert!(1 < vec.len());
        debug_assert!(vec.iter().all(|l| l.vi() <= (self.watch.len() - 2) / 2));
        match vec.len() {
            2 => {
                let (l0, l1) = (vec[0], vec[1]);
                debug_assert_ne!(l0.vi(), l1.vi());
                self.watch[!l0].push(Watched::Binary { other: l1, learnt });
                self.watch[!l1].push(Watched::Binary { other: l0, learnt });
                if learnt {
                    self.num_bi_learnt += 1;
                } else {
                    self.num_bi_clause += 1;
                }
                trace!("cdb: attach binary clause ({l0}, {l1})");
                ClauseRef::Binary(l0, l1)
            }
            3 => {
                let (l0, l1, l2) = (vec[0], vec[1], vec[2]);
                debug_assert_ne!(l0.vi(), l1.vi());
                debug_assert_ne!(l1.vi(), l2.vi());
                debug_assert_ne!(l0.vi(), l2.vi());
                self.watch[!l0].push(Watched::Ternary {
                    other1: l1,
                    other2: l2,
                    learnt,
                });
                self.watch[!l1].push(Watched::Ternary {
                    other1: l0,
                    other2: l2,
                    learnt,
                });
                self.watch[!l2].push(Watched::Ternary {
                    other1: l0,
                    other2: l1,
                    learnt,
                });
                if learnt {
                    self.num_tri_learnt += 1;
                } else {
                    self.num_tri_clause += 1;
                }
                trace!("cdb: attach ternary clause ({l0}, {l1}, {l2})");
                ClauseRef::Ternary(l0, l1, l2)
            }
            _ => {
                let offset = if let Some(offset) = self.recycle.pop() {
                    let c = &mut self.clause[offset.ordinal as usize];
                    debug_assert!(c.is(FlagClause::DEAD));
                    c.flags = FlagClause::empty();
                    debug_assert!(c.lits.is_empty());
                    std::mem::swap(&mut c.lits, vec);
                    offset
                } else {
                    let offset = ClauseOffset::from(self.clause.len());
                    let mut c = Clause::default();
                    std::mem::swap(&mut c.lits, vec);
                    self.clause.push(c);
                    offset
                };
                let c = &mut self.clause[offset.ordinal as usize];
                if learnt {
                    c.turn_on(FlagClause::LEARNT);
                    self.num_long_learnt += 1;
                } else {
                    self.num_long_clause += 1;
                }
                let l0 = c.lit0();
                let l1 = c.lit1();
                self.watch[!l0].push(Watched::Long {
                    offset,
                    blocker: l1,
                    learnt,
                });
                self.watch[!l1].push(Watched::Long {
                    offset,
                    blocker: l0,
                    learnt,
                });
                trace!("cdb: attach long clause {offset}");
                ClauseRef::Long(offset)
            }
        }
    }
    fn remove_bin_clause(&mut self, l0: Lit, l1: Lit, learnt: bool) {
        self.watch[!l0].remove_binary(l1, learnt);
        self.watch[!l1].remove_binary(l0, learnt);
        if learnt {
            self.num_bi_learnt -= 1;
        } else {
            self.num_bi_clause -= 1;
        }
        trace!("cdb: detach binary clause ({l0}, {l1})");
    }
    fn remove_tri_clause(&mut self, l0: Lit, l1: Lit, l2: Lit, learnt: bool) {
        self.watch[!l0].remove_ternary(l1, l2);
        self.watch[!l1].remove_ternary(l0, l2);
        self.watch[!l2].remove_ternary(l0, l1);
        if learnt {
            self.num_tri_learnt -= 1;
        } else {
            self.num_tri_clause -= 1;
        }
        trace!("cdb: detach ternary clause ({l0}, {l1}, {l2})");
    }
    fn remove_long_clause(&mut self, offset: ClauseOffset) {
        let c = &self.clause[offset.ordinal as usize];
        debug_assert!(!c.is(FlagClause::DEAD));
        let l0 = c.lit0();
        let l1 = c.lit1();
        let learnt = c.is(FlagClause::LEARNT);
        self.watch[!l0].remove_long(offset);
        self.watch[!l1].remove_long(offset);
        if learnt {
            self.num_long_learnt -= 1;
        } else {
            self.num_long_clause -= 1;
        }
        let c = &mut self.clause[offset.ordinal as usize];
        c.lits.clear();
        c.flags = FlagClause::DEAD;
        self.recycle.push(offset);
        trace!("cdb: detach long clause {offset}");
    }
    fn shrink_clause(&mut self, offset: ClauseOffset, new_lits: Vec<Lit>) {
        debug_assert!(2 < new_lits.len());
        let c = &mut self.clause[offset.ordinal as usize];
        debug_assert!(!c.is(FlagClause::DEAD));
        debug_assert!(new_lits.len() < c.lits.len());
        c.lits = new_lits;
    }
    fn check_size(&self) -> Result<bool, SolverError> {
        if self.soft_limit == 0 || self.num_long() <= self.soft_limit {
            Ok(0 == self.soft_limit || 4 * self.num_long() < 3 * self.soft_limit)
        } else {
            Err(SolverError::OutOfMemory)
        }
    }
}

impl ClauseDB {
    /// independently recount watch entries per arity and subtype and compare
    /// with the counters: each binary clause owns two entries, each ternary
    /// three, each long two. A post-condition of every public operation.
    pub fn counters_consistent(&self) -> bool {
        let mut bin = (0, 0);
        let mut tri = (0, 0);
        let mut long = (0, 0);
        for ws in self.watch.iter().skip(2) {
            for w in ws.iter() {
                let cell = match w {
                    Watched::Binary { .. } => &mut bin,
                    Watched::Ternary { .. } => &mut tri,
                    Watched::Long { .. } => &mut long,
                };
                if w.is_learnt() {
                    cell.0 += 1;
                } else {
                    cell.1 += 1;
                }
            }
        }
        bin == (2 * self.num_bi_learnt, 2 * self.num_bi_clause)
            && tri == (3 * self.num_tri_learnt, 3 * self.num_tri_clause)
            && long == (2 * self.num_long_learnt, 2 * self.num_long_clause)
    }
    /// check the propagation invariant: every watch entry has its partner
    /// entries at the clause's other literal positions, every long entry
    /// points to a live clause from one of its two anchors, and every live
    /// long clause is watched exactly twice.
    pub fn watches_consistent(&self) -> bool {
        let mut seen = vec![0usize; self.clause.len()];
        for (i, ws) in self.watch.iter().enumerate().skip(2) {
            let l = !Lit::from(i);
            for w in ws.iter() {
                match w {
                    Watched::Binary { other, learnt } => {
                        if self.watch[!*other].find_binary(l, *learnt).is_none() {
                            return false;
                        }
                    }
                    Watched::Ternary { other1, other2, .. } => {
                        if self.watch[!*other1].find_ternary(l, *other2).is_none() {
                            return false;
                        }
                        if self.watch[!*other2].find_ternary(l, *other1).is_none() {
                            return false;
                        }
                    }
                    Watched::Long { offset, .. } => {
                        let c = &self.clause[offset.ordinal as usize];
                        if c.is(FlagClause::DEAD) || (c.lit0() != l && c.lit1() != l) {
                            return false;
                        }
                        seen[offset.ordinal as usize] += 1;
                    }
                }
            }
        }
        for (n, c) in self.clause.iter().enumerate().skip(1) {
            let expected = if c.is(FlagClause::DEAD) { 0 } else { 2 };
            if seen[n] != expected {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdb::{Tusize, WatchListIF};

    fn lit(i: i32) -> Lit {
        Lit::from(i)
    }
    fn mk_cdb(nv: usize) -> ClauseDB {
        let cnf = CNFDescription {
            num_of_variables: nv,
            ..CNFDescription::default()
        };
        ClauseDB::instantiate(&Config::default(), &cnf)
    }

    #[test]
    fn test_attach_binary() {
        let mut cdb = mk_cdb(4);
        let cr = cdb.new_clause(&mut vec![lit(1), lit(2)], false);
        assert_eq!(cr, ClauseRef::Binary(lit(1), lit(2)));
        assert_eq!(cdb.watcher_list(lit(-1)).find_binary(lit(2), false), Some(0));
        assert_eq!(cdb.watcher_list(lit(-2)).find_binary(lit(1), false), Some(0));
        assert_eq!(cdb.derefer(Tusize::NumBiClause), 1);
        assert!(cdb.counters_consistent());
        assert!(cdb.watches_consistent());
    }
    #[test]
    fn test_attach_ternary() {
        let mut cdb = mk_cdb(4);
        cdb.new_clause(&mut vec![lit(1), lit(2), lit(3)], true);
        assert_eq!(
            cdb.watcher_list(lit(-2)).find_ternary(lit(1), lit(3)),
            Some(0)
        );
        assert_eq!(cdb.derefer(Tusize::NumTriLearnt), 1);
        assert_eq!(cdb.derefer(Tusize::NumTriClause), 0);
        assert!(cdb.counters_consistent());
        assert!(cdb.watches_consistent());
    }
    #[test]
    fn test_attach_long() {
        let mut cdb = mk_cdb(4);
        let ClauseRef::Long(offset) = cdb.new_clause(&mut vec![lit(1), lit(2), lit(3), lit(4)], false)
        else {
            panic!("expected a long clause");
        };
        assert_eq!(cdb[offset].len(), 4);
        assert_eq!(cdb.watcher_list(lit(-1)).find_long(offset), Some(0));
        assert_eq!(cdb.watcher_list(lit(-2)).find_long(offset), Some(0));
        assert_eq!(cdb.watcher_list(lit(-3)).find_long(offset), None);
        assert_eq!(cdb.num_long(), 1);
        assert!(cdb.counters_consistent());
        assert!(cdb.watches_consistent());
    }
    #[test]
    fn test_detach_and_recycle() {
        let mut cdb = mk_cdb(6);
        let ClauseRef::Long(offset) = cdb.new_clause(&mut vec![lit(1), lit(2), lit(3), lit(4)], false)
        else {
            panic!("expected a long clause");
        };
        cdb.remove_long_clause(offset);
        assert_eq!(cdb.num_long(), 0);
        assert!(cdb.watcher_list(lit(-1)).is_empty());
        // the freed slot is reused and the handle stays dense
        let ClauseRef::Long(next) = cdb.new_clause(&mut vec![lit(3), lit(4), lit(5), lit(6)], true)
        else {
            panic!("expected a long clause");
        };
        assert_eq!(offset, next);
        assert_eq!(cdb.derefer(Tusize::NumLongLearnt), 1);
        assert!(cdb.counters_consistent());
        assert!(cdb.watches_consistent());
    }
    #[test]
    fn test_remove_bin_tri() {
        let mut cdb = mk_cdb(4);
        cdb.new_clause(&mut vec![lit(1), lit(2)], false);
        cdb.new_clause(&mut vec![lit(1), lit(2), lit(3)], false);
        cdb.remove_bin_clause(lit(1), lit(2), false);
        assert_eq!(cdb.derefer(Tusize::NumBiClause), 0);
        cdb.remove_tri_clause(lit(1), lit(2), lit(3), false);
        assert_eq!(cdb.derefer(Tusize::NumTriClause), 0);
        assert!(cdb.watch.iter().all(|ws| ws.is_empty()));
        assert!(cdb.counters_consistent());
    }
    #[test]
    fn test_check_size() {
        let config = Config::default().clause_limit(2);
        let cnf = CNFDescription {
            num_of_variables: 8,
            ..CNFDescription::default()
        };
        let mut cdb = ClauseDB::instantiate(&config, &cnf);
        assert_eq!(cdb.check_size(), Ok(true));
        cdb.new_clause(&mut vec![lit(1), lit(2), lit(3), lit(4)], false);
        cdb.new_clause(&mut vec![lit(5), lit(6), lit(7), lit(8)], false);
        assert_eq!(cdb.check_size(), Ok(false));
        cdb.new_clause(&mut vec![lit(1), lit(3), lit(5), lit(7)], false);
        assert_eq!(cdb.check_size(), Err(SolverError::OutOfMemory));
    }
}
