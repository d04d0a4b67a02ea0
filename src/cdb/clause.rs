use {
    crate::{assign::AssignIF, types::*},
    std::{
        fmt,
        ops::{Index, IndexMut, Range, RangeFrom},
        slice::Iter,
    },
};

/// Opaque handle of a long clause's location in the arena, starting with one.
/// Stable until the clause is freed; this crate compares offsets but watch
/// entries never dereference memory through them.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClauseOffset {
    /// a sequence number.
    pub ordinal: u32,
}

impl ClauseOffset {
    #[inline]
    pub fn is_none(&self) -> bool {
        self.ordinal == 0
    }
}

impl From<usize> for ClauseOffset {
    #[inline]
    fn from(u: usize) -> ClauseOffset {
        ClauseOffset { ordinal: u as u32 }
    }
}

impl fmt::Display for ClauseOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}C", self.ordinal)
    }
}

/// API for long clauses, providing literal accessors.
pub trait ClauseIF {
    /// return true if it contains no literals; a freed arena slot.
    fn is_empty(&self) -> bool;
    /// return the 1st watch anchor.
    fn lit0(&self) -> Lit;
    /// return the 2nd watch anchor.
    fn lit1(&self) -> Lit;
    /// return `true` if the clause contains the literal.
    fn contains(&self, lit: Lit) -> bool;
    /// check clause satisfiability under an assignment.
    fn is_satisfied_under<A>(&self, asg: &A) -> bool
    where
        A: AssignIF;
    /// return an iterator over its literals.
    fn iter(&self) -> Iter<'_, Lit>;
    /// return the number of literals.
    fn len(&self) -> usize;
}

/// A long clause in the arena. Binary and ternary clauses are *implicit*:
/// their literals live directly in watch entries and never reach this type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clause {
    /// the literals; the first two are the watch anchors.
    pub(super) lits: Vec<Lit>,
    /// flags
    pub(super) flags: FlagClause,
}

impl Index<usize> for Clause {
    type Output = Lit;
    #[inline]
    fn index(&self, i: usize) -> &Lit {
        &self.lits[i]
    }
}

impl IndexMut<usize> for Clause {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Lit {
        &mut self.lits[i]
    }
}

impl Index<Range<usize>> for Clause {
    type Output = [Lit];
    #[inline]
    fn index(&self, r: Range<usize>) -> &[Lit] {
        &self.lits[r]
    }
}

impl Index<RangeFrom<usize>> for Clause {
    type Output = [Lit];
    #[inline]
    fn index(&self, r: RangeFrom<usize>) -> &[Lit] {
        &self.lits[r]
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Lit;
    type IntoIter = Iter<'a, Lit>;
    fn into_iter(self) -> Self::IntoIter {
        self.lits.iter()
    }
}

impl From<&Clause> for Vec<i32> {
    fn from(c: &Clause) -> Vec<i32> {
        c.lits.iter().map(|l| i32::from(*l)).collect::<Vec<i32>>()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.lits)
    }
}

impl ClauseIF for Clause {
    fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }
    #[inline]
    fn lit0(&self) -> Lit {
        self.lits[0]
    }
    #[inline]
    fn lit1(&self) -> Lit {
        self.lits[1]
    }
    fn contains(&self, lit: Lit) -> bool {
        self.lits.contains(&lit)
    }
    fn is_satisfied_under<A>(&self, asg: &A) -> bool
    where
        A: AssignIF,
    {
        self.lits.iter().any(|l| asg.assigned(*l) == Some(true))
    }
    fn iter(&self) -> Iter<'_, Lit> {
        self.lits.iter()
    }
    fn len(&self) -> usize {
        self.lits.len()
    }
}

impl FlagIF for Clause {
    type FlagType = FlagClause;
    #[inline]
    fn is(&self, flag: Self::FlagType) -> bool {
        self.flags.contains(flag)
    }
    fn set(&mut self, f: Self::FlagType, b: bool) {
        self.flags.set(f, b);
    }
    fn turn_off(&mut self, flag: Self::FlagType) {
        self.flags.remove(flag);
    }
    fn turn_on(&mut self, flag: Self::FlagType) {
        self.flags.insert(flag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(i: i32) -> Lit {
        Lit::from(i)
    }

    #[test]
    fn test_clause_accessors() {
        let c = Clause {
            lits: vec![lit(1), lit(2), lit(3), lit(4)],
            flags: FlagClause::empty(),
        };
        assert_eq!(c.len(), 4);
        assert_eq!(c.lit0(), lit(1));
        assert_eq!(c.lit1(), lit(2));
        assert!(c.contains(lit(4)));
        assert!(!c.contains(lit(-4)));
        assert_eq!(Vec::<i32>::from(&c), vec![1, 2, 3, 4]);
    }
    #[test]
    fn test_clause_flags() {
        let mut c = Clause::default();
        assert!(!c.is(FlagClause::LEARNT));
        c.turn_on(FlagClause::LEARNT);
        assert!(c.is(FlagClause::LEARNT));
        c.turn_off(FlagClause::LEARNT);
        assert!(!c.is(FlagClause::LEARNT));
    }
}
