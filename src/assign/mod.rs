//! Module `assign` provides the assignment table consulted by the
//! clause-cleaning pass. The table is owned and mutated by the search
//! loop; this crate only reads it through [`AssignIF`].

use crate::types::*;

/// API for assignment lookup, like [`assigned`](`crate::assign::AssignIF::assigned`).
pub trait AssignIF {
    /// return the value of a variable.
    fn assign(&self, vi: VarId) -> Option<bool>;
    /// return the value of a literal, seen from its polarity.
    /// - `None` if the variable is unassigned.
    /// - `Some(true)` if the literal is satisfied.
    /// - `Some(false)` if the literal is falsified.
    fn assigned(&self, l: Lit) -> Option<bool>;
    /// return the number of variables.
    fn num_vars(&self) -> usize;
}

/// Assignment table; a flat `Option<bool>` per variable.
///
///```
/// use crate::{weft::config::Config, weft::types::*};
/// use weft::assign::AssignTable;
/// let asg = AssignTable::instantiate(&Config::default(), &CNFDescription::default());
///```
#[derive(Clone, Debug, Default)]
pub struct AssignTable {
    /// assigned values; slot 0 is a sentinel for the reserved variable 0.
    assign: Vec<Option<bool>>,
    /// the number of variables.
    num_vars: usize,
}

impl Instantiate for AssignTable {
    fn instantiate(_conf: &Config, cnf: &CNFDescription) -> AssignTable {
        let nv = cnf.num_of_variables;
        AssignTable {
            assign: vec![None; nv + 1],
            num_vars: nv,
        }
    }
    fn handle(&mut self, e: SolverEvent) {
        if e == SolverEvent::NewVar {
            self.assign.push(None);
            self.num_vars += 1;
        }
    }
}

impl AssignIF for AssignTable {
    #[inline]
    fn assign(&self, vi: VarId) -> Option<bool> {
        self.assign[vi]
    }
    #[inline]
    fn assigned(&self, l: Lit) -> Option<bool> {
        self.assign[l.vi()].map(|b| if bool::from(l) { b } else { !b })
    }
    fn num_vars(&self) -> usize {
        self.num_vars
    }
}

impl AssignTable {
    /// assign the variable of `l` so that `l` becomes true.
    pub fn force_assign(&mut self, l: Lit) {
        self.assign[l.vi()] = Some(bool::from(l));
    }
    /// unassign a variable.
    pub fn cancel(&mut self, vi: VarId) {
        self.assign[vi] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(i: i32) -> Lit {
        Lit::from(i)
    }

    #[test]
    fn test_assigned() {
        let cnf = CNFDescription {
            num_of_variables: 4,
            ..CNFDescription::default()
        };
        let mut asg = AssignTable::instantiate(&Config::default(), &cnf);
        assert_eq!(asg.assigned(lit(1)), None);
        asg.force_assign(lit(-1));
        assert_eq!(asg.assign(1), Some(false));
        assert_eq!(asg.assigned(lit(1)), Some(false));
        assert_eq!(asg.assigned(lit(-1)), Some(true));
        asg.cancel(1);
        assert_eq!(asg.assigned(lit(-1)), None);
    }
    #[test]
    fn test_new_var() {
        let cnf = CNFDescription {
            num_of_variables: 2,
            ..CNFDescription::default()
        };
        let mut asg = AssignTable::instantiate(&Config::default(), &cnf);
        asg.handle(SolverEvent::NewVar);
        assert_eq!(asg.num_vars(), 3);
        assert_eq!(asg.assign(3), None);
    }
}
