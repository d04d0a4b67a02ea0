/// Configuration of a solver instance, used at instantiation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// soft limit of the number of long clauses (0 for no limit)
    pub c_cls_lim: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config { c_cls_lim: 0 }
    }
}

impl Config {
    /// set `c_cls_lim`.
    pub fn clause_limit(mut self, n: usize) -> Self {
        self.c_cls_lim = n;
        self
    }
}
