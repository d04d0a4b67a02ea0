use {
    super::ClauseOffset,
    crate::types::*,
    std::ops::{Index, IndexMut},
};

/// One record in a watch list, tagged by the arity of the clause it
/// represents. Binary and ternary clauses are stored *only* here: the entry
/// at `!l` carries the remaining literal(s) of a clause containing `l`.
/// Long clauses are referenced by arena offset plus a cached blocking
/// literal used to skip reading the clause body when it is satisfied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Watched {
    Binary {
        other: Lit,
        learnt: bool,
    },
    Ternary {
        other1: Lit,
        other2: Lit,
        learnt: bool,
    },
    Long {
        offset: ClauseOffset,
        blocker: Lit,
        learnt: bool,
    },
}

impl Watched {
    /// return the learnt flag, whatever the arity.
    pub fn is_learnt(&self) -> bool {
        match self {
            Watched::Binary { learnt, .. }
            | Watched::Ternary { learnt, .. }
            | Watched::Long { learnt, .. } => *learnt,
        }
    }
    /// return `true` if any literal stored in this entry belongs to
    /// variable `vi`. For long entries only the blocker is stored;
    /// callers reach their bodies through the offset.
    pub fn mentions(&self, vi: VarId) -> bool {
        match self {
            Watched::Binary { other, .. } => other.vi() == vi,
            Watched::Ternary { other1, other2, .. } => other1.vi() == vi || other2.vi() == vi,
            Watched::Long { blocker, .. } => blocker.vi() == vi,
        }
    }
}

/// watch list; the order of entries carries no meaning.
pub type WatchList = Vec<Watched>;

impl Index<Lit> for Vec<WatchList> {
    type Output = WatchList;
    #[inline]
    fn index(&self, l: Lit) -> &Self::Output {
        &self[usize::from(l)]
    }
}

impl IndexMut<Lit> for Vec<WatchList> {
    #[inline]
    fn index_mut(&mut self, l: Lit) -> &mut Self::Output {
        &mut self[usize::from(l)]
    }
}

/// API for watch lists, like `find_binary`, `remove_at`, and so on.
/// Removals come in two flavors on purpose: the `remove_*` family is
/// order-preserving so that callers iterating the same list by index stay
/// valid, while `remove_binary_all` and `remove_var_entries` compact and
/// may scramble order.
pub trait WatchListIF {
    /// return `true` if some entry satisfies `pred`; a linear scan.
    fn exists<F>(&self, pred: F) -> bool
    where
        F: Fn(&Watched) -> bool;
    /// return the position of the binary entry with `other` and `learnt`.
    fn find_binary(&self, other: Lit, learnt: bool) -> Option<usize>;
    /// return the position of the ternary entry carrying the unordered
    /// pair `{other1, other2}`.
    fn find_ternary(&self, other1: Lit, other2: Lit) -> Option<usize>;
    /// return the position of the long entry for `offset`.
    fn find_long(&self, offset: ClauseOffset) -> Option<usize>;
    /// return a mutable reference to the binary entry with `other` and
    /// `learnt`. The entry must exist; a miss is a contract violation.
    fn find_binary_mut(&mut self, other: Lit, learnt: bool) -> &mut Watched;
    /// remove the *n*-th entry, shifting the rest down; an *O(n)*
    /// order-preserving operation. Panics if `n` is out of bounds.
    fn remove_at(&mut self, n: usize);
    /// remove the binary entry with `other` and `learnt`, preserving order.
    /// The entry must exist.
    fn remove_binary(&mut self, other: Lit, learnt: bool);
    /// remove the ternary entry for `{other1, other2}`, preserving order.
    /// The entry must exist.
    fn remove_ternary(&mut self, other1: Lit, other2: Lit);
    /// remove the long entry for `offset`, preserving order. The entry
    /// must exist.
    fn remove_long(&mut self, offset: ClauseOffset);
    /// remove every binary entry implying `other`; a compacting sweep.
    /// Return the numbers of removed (learnt, irredundant) entries.
    fn remove_binary_all(&mut self, other: Lit) -> (usize, usize);
    /// remove every entry mentioning variable `vi`; a compacting sweep
    /// used by variable elimination. Return the numbers of removed
    /// (learnt, irredundant) entries.
    fn remove_var_entries(&mut self, vi: VarId) -> (usize, usize);
    /// rewrite the cached blocking literal of the long entry for `offset`.
    fn update_blocker(&mut self, offset: ClauseOffset, l: Lit);
}

impl WatchListIF for WatchList {
    fn exists<F>(&self, pred: F) -> bool
    where
        F: Fn(&Watched) -> bool,
    {
        self.iter().any(pred)
    }
    fn find_binary(&self, other: Lit, learnt: bool) -> Option<usize> {
        self.iter().position(
            |w| matches!(w, Watched::Binary { other: o, learnt: r } if *o == other && *r == learnt),
        )
    }
    fn find_ternary(&self, other1: Lit, other2: Lit) -> Option<usize> {
        self.iter().position(|w| {
            matches!(w, Watched::Ternary { other1: a, other2: b, .. }
                     if (*a == other1 && *b == other2) || (*a == other2 && *b == other1))
        })
    }
    fn find_long(&self, offset: ClauseOffset) -> Option<usize> {
        self.iter()
            .position(|w| matches!(w, Watched::Long { offset: c, .. } if *c == offset))
    }
    fn find_binary_mut(&mut self, other: Lit, learnt: bool) -> &mut Watched {
        self.iter_mut()
            .find(
                |w| matches!(w, Watched::Binary { other: o, learnt: r } if *o == other && *r == learnt),
            )
            .expect("missing binary watch for a registered clause")
    }
    fn remove_at(&mut self, n: usize) {
        self.remove(n);
    }
    fn remove_binary(&mut self, other: Lit, learnt: bool) {
        let n = self
            .find_binary(other, learnt)
            .expect("missing binary watch for a registered clause");
        self.remove(n);
    }
    fn remove_ternary(&mut self, other1: Lit, other2: Lit) {
        let n = self
            .find_ternary(other1, other2)
            .expect("missing ternary watch for a registered clause");
        self.remove(n);
    }
    fn remove_long(&mut self, offset: ClauseOffset) {
        let n = self
            .find_long(offset)
            .expect("missing long watch for a registered clause");
        self.remove(n);
    }
    fn remove_binary_all(&mut self, other: Lit) -> (usize, usize) {
        let mut removed_learnt = 0;
        let mut removed_irred = 0;
        let mut n = 0;
        while n < self.len() {
            if let Watched::Binary { other: o, learnt } = self[n] {
                if o == other {
                    if learnt {
                        removed_learnt += 1;
                    } else {
                        removed_irred += 1;
                    }
                    self.swap_remove(n);
                    continue;
                }
            }
            n += 1;
        }
        (removed_learnt, removed_irred)
    }
    fn remove_var_entries(&mut self, vi: VarId) -> (usize, usize) {
        let mut removed_learnt = 0;
        let mut removed_irred = 0;
        let mut n = 0;
        while n < self.len() {
            if self[n].mentions(vi) {
                if self[n].is_learnt() {
                    removed_learnt += 1;
                } else {
                    removed_irred += 1;
                }
                self.swap_remove(n);
                continue;
            }
            n += 1;
        }
        (removed_learnt, removed_irred)
    }
    fn update_blocker(&mut self, offset: ClauseOffset, l: Lit) {
        for w in self.iter_mut() {
            if let Watched::Long {
                offset: c, blocker, ..
            } = w
            {
                if *c == offset {
                    *blocker = l;
                    return;
                }
            }
        }
    }
}

/// locate the watch list for `!lit1`, then return a mutable reference to
/// its binary entry implying `lit2`; used to update a watch seen from the
/// opposite endpoint of the clause. The entry must exist.
pub fn binary_watch_of_mut(
    watches: &mut Vec<WatchList>,
    lit1: Lit,
    lit2: Lit,
    learnt: bool,
) -> &mut Watched {
    watches[!lit1].find_binary_mut(lit2, learnt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(i: i32) -> Lit {
        Lit::from(i)
    }
    fn bin(other: i32, learnt: bool) -> Watched {
        Watched::Binary {
            other: lit(other),
            learnt,
        }
    }
    fn tri(o1: i32, o2: i32) -> Watched {
        Watched::Ternary {
            other1: lit(o1),
            other2: lit(o2),
            learnt: false,
        }
    }
    fn long(ordinal: usize, blocker: i32) -> Watched {
        Watched::Long {
            offset: ClauseOffset::from(ordinal),
            blocker: lit(blocker),
            learnt: false,
        }
    }

    #[test]
    fn test_find() {
        let ws: WatchList = vec![bin(2, false), tri(3, 4), long(1, 5), bin(2, true)];
        assert!(ws.exists(|w| w.is_learnt()));
        assert_eq!(ws.find_binary(lit(2), false), Some(0));
        assert_eq!(ws.find_binary(lit(2), true), Some(3));
        assert_eq!(ws.find_binary(lit(3), false), None);
        assert_eq!(ws.find_ternary(lit(3), lit(4)), Some(1));
        // the pair is unordered
        assert_eq!(ws.find_ternary(lit(4), lit(3)), Some(1));
        assert_eq!(ws.find_ternary(lit(4), lit(5)), None);
        assert_eq!(ws.find_long(ClauseOffset::from(1)), Some(2));
        assert_eq!(ws.find_long(ClauseOffset::from(9)), None);
    }
    #[test]
    fn test_remove_preserves_order() {
        let mut ws: WatchList = vec![bin(2, false), tri(3, 4), long(1, 5), bin(6, false)];
        ws.remove_at(1);
        assert_eq!(ws, vec![bin(2, false), long(1, 5), bin(6, false)]);
        ws.remove_binary(lit(2), false);
        assert_eq!(ws, vec![long(1, 5), bin(6, false)]);
        ws.remove_long(ClauseOffset::from(1));
        assert_eq!(ws, vec![bin(6, false)]);
    }
    #[test]
    #[should_panic]
    fn test_remove_at_out_of_bounds() {
        let mut ws: WatchList = vec![bin(2, false)];
        ws.remove_at(1);
    }
    #[test]
    #[should_panic]
    fn test_remove_binary_must_find() {
        let mut ws: WatchList = vec![bin(2, false)];
        ws.remove_binary(lit(2), true);
    }
    #[test]
    fn test_remove_binary_all() {
        let mut ws: WatchList = vec![
            bin(2, false),
            bin(2, true),
            tri(2, 3),
            bin(4, false),
            bin(2, false),
        ];
        let (learnt, irred) = ws.remove_binary_all(lit(2));
        assert_eq!((learnt, irred), (1, 2));
        assert_eq!(ws.len(), 2);
        assert!(ws.exists(|w| matches!(w, Watched::Ternary { .. })));
        assert_eq!(ws.find_binary(lit(4), false).is_some(), true);
    }
    #[test]
    fn test_remove_var_entries() {
        let mut ws: WatchList = vec![bin(2, false), tri(-2, 3), tri(3, 4), long(1, 2), bin(5, true)];
        let (learnt, irred) = ws.remove_var_entries(2);
        assert_eq!((learnt, irred), (0, 3));
        assert_eq!(ws.len(), 2);
        assert!(!ws.exists(|w| w.mentions(2)));
    }
    #[test]
    fn test_find_binary_mut() {
        let mut table: Vec<WatchList> = vec![WatchList::new(); 8];
        table[!lit(1)].push(bin(2, false));
        table[!lit(2)].push(bin(1, false));
        if let Watched::Binary { learnt, .. } = binary_watch_of_mut(&mut table, lit(1), lit(2), false)
        {
            *learnt = true;
        }
        assert_eq!(table[!lit(1)].find_binary(lit(2), true), Some(0));
        assert_eq!(table[!lit(2)].find_binary(lit(1), false), Some(0));
    }
    #[test]
    fn test_update_blocker() {
        let mut ws: WatchList = vec![long(1, 5), long(2, 5)];
        ws.update_blocker(ClauseOffset::from(2), lit(7));
        assert_eq!(ws[1], long(2, 7));
        assert_eq!(ws[0], long(1, 5));
    }
}
