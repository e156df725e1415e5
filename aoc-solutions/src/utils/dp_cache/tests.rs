use std::cell::Cell;

use super::*;

/// Diamond `0 -> {1, 2} -> 3` that counts how often it computes
struct Diamond<'a> {
    computed: &'a Cell<usize>,
}

impl DpProblem<usize, u64> for Diamond<'_> {
    fn deps(&self, n: &usize) -> Vec<usize> {
        match n {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            _ => vec![],
        }
    }

    fn compute(&self, n: &usize, deps: &[u64]) -> u64 {
        self.computed.set(self.computed.get() + 1);
        *n as u64 + deps.iter().sum::<u64>()
    }
}

fn factorial() -> DpCache<
    usize,
    u64,
    VecBackend<u64>,
    (impl Fn(&usize) -> Vec<usize>, impl Fn(&usize, &[u64]) -> u64),
> {
    DpCache::new(
        VecBackend::new(),
        (
            |&n: &usize| if n == 0 { vec![] } else { vec![n - 1] },
            |&n: &usize, prev: &[u64]| prev.first().map_or(1, |p| p * n as u64),
        ),
    )
}

#[test]
fn test_shared_dependency_computed_once() {
    let computed = Cell::new(0);
    let cache = DpCache::new(VecBackend::new(), Diamond { computed: &computed });

    // 3; 1 + 3; 2 + 3; 0 + 4 + 5
    assert_eq!(cache.get(&0), 9);
    assert_eq!(computed.get(), 4);
    assert_eq!(cache.len(), 4);

    assert_eq!(cache.get(&3), 3);
    assert_eq!(cache.get(&0), 9);
    assert_eq!(computed.get(), 4);
}

#[test]
fn test_closure_pair_chain() {
    let cache = factorial();
    assert!(cache.is_empty());
    assert_eq!(cache.get(&5), 120);
    assert_eq!(cache.len(), 6);
    // Lower indices were filled on the way up
    assert_eq!(cache.get(&3), 6);
    assert_eq!(cache.len(), 6);
}

#[test]
fn test_presized_table_answers_queries_out_of_order() {
    let cache = DpCache::new(
        VecBackend::with_len(8),
        (
            |&n: &usize| if n < 2 { vec![] } else { vec![n - 1, n - 2] },
            |&n: &usize, prev: &[u64]| if n < 2 { n as u64 } else { prev[0] + prev[1] },
        ),
    );

    assert_eq!(cache.get(&40), 102_334_155);
    assert_eq!(cache.get(&7), 13);
}

#[test]
fn test_sparse_indices() {
    // Collatz stopping times never touch most integers below the start
    let steps = DpCache::new(
        HashMapBackend::new(),
        (
            |&n: &u64| match n {
                0 | 1 => vec![],
                even if even % 2 == 0 => vec![even / 2],
                odd => vec![3 * odd + 1],
            },
            |_: &u64, next: &[u32]| next.first().map_or(0, |s| s + 1),
        ),
    );

    assert_eq!(steps.get(&1), 0);
    assert_eq!(steps.get(&6), 8);
    assert_eq!(steps.get(&27), 111);
    assert!(steps.len() < 200);
}

#[test]
fn test_backends_keep_first_value() {
    let mut dense = VecBackend::new();
    assert_eq!(dense.get(&2), None);
    dense.insert(2, 'a');
    dense.insert(2, 'b');
    assert_eq!(dense.get(&2), Some(&'a'));
    assert_eq!(dense.get(&0), None);
    assert_eq!(dense.len(), 1);

    let mut sparse = HashMapBackend::new();
    sparse.insert("row", 1);
    sparse.insert("row", 2);
    assert_eq!(sparse.get(&"row"), Some(&1));
    assert_eq!(sparse.get(&"other"), None);
    assert_eq!(sparse.len(), 1);
}
