use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// Lazily filled table of a [`DpProblem`]'s values
///
/// Each index is computed at most once. Lookups take `&self`, so the cache
/// can be shared by closures that query it while it is being filled.
pub struct DpCache<I, K, B, P> {
    table: RefCell<B>,
    problem: P,
    _index: PhantomData<fn(&I) -> K>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn new(table: B, problem: P) -> Self {
        Self {
            table: RefCell::new(table),
            problem,
            _index: PhantomData,
        }
    }

    /// Value of `index`, resolving and storing any dependencies not yet known
    pub fn get(&self, index: &I) -> K {
        if let Some(known) = self.table.borrow().get(index) {
            return known.clone();
        }

        // The borrow above is released before recursing
        let deps = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Vec<_>>();
        let value = self.problem.compute(index, &deps);

        self.table.borrow_mut().insert(index.clone(), value.clone());
        value
    }

    /// Number of values computed so far
    pub fn len(&self) -> usize {
        self.table.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
