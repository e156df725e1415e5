/// Recurrence evaluated by [`DpCache`](super::DpCache)
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Tribonacci;
///
/// impl DpProblem<usize, u64> for Tribonacci {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n < 3 { vec![] } else { vec![n - 1, n - 2, n - 3] }
///     }
///
///     fn compute(&self, n: &usize, prev: &[u64]) -> u64 {
///         if *n < 3 { u64::from(*n == 2) } else { prev.iter().sum() }
///     }
/// }
///
/// let cache = DpCache::new(VecBackend::new(), Tribonacci);
/// assert_eq!(cache.get(&10), 81);
/// ```
pub trait DpProblem<I, K> {
    /// Indices whose values `index` is built from; empty for base cases
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value of `index`, given its dependencies' values in `deps` order
    fn compute(&self, index: &I, deps: &[K]) -> K;
}

impl<I, K, D, C> DpProblem<I, K> for (D, C)
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, &[K]) -> K,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.0)(index)
    }

    fn compute(&self, index: &I, deps: &[K]) -> K {
        (self.1)(index, deps)
    }
}
