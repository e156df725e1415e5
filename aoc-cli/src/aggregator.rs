//! Puts results from parallel workers back into report order
//!
//! Workers finish in any order. The aggregator knows every key it should
//! see and releases results only once all earlier keys have arrived.

use crate::executor::{SolverResult, WorkItem};
use std::collections::{BTreeMap, VecDeque};

/// Report position of one answer: by year, then day, then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

pub struct ResultAggregator {
    /// Keys not yet emitted, smallest first
    expected: VecDeque<ResultKey>,
    /// Received results waiting for an earlier key
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    /// Expect one result per part of every work item
    pub fn for_work_items(work_items: &[WorkItem]) -> Self {
        Self::new(
            work_items
                .iter()
                .flat_map(|w| {
                    w.parts.clone().map(move |part| ResultKey {
                        year: w.year,
                        day: w.day,
                        part,
                    })
                })
                .collect(),
        )
    }

    pub fn new(mut expected_keys: Vec<ResultKey>) -> Self {
        expected_keys.sort_unstable();
        expected_keys.dedup();
        Self {
            expected: expected_keys.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Accept `result` and hand back whatever is now next in line
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front()
            && let Some(result) = self.pending.remove(next)
        {
            self.expected.pop_front();
            ready.push(result);
        }
        ready
    }

    /// Everything still held back, in key order; used once the channel closes
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Whether every expected key has been released
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn make_result(k: ResultKey) -> SolverResult {
        SolverResult {
            year: k.year,
            day: k.day,
            part: k.part,
            answer: Ok(format!("{}_{}_{}", k.year, k.day, k.part)),
            parse_duration: Some(TimeDelta::milliseconds(5)),
            solve_duration: TimeDelta::milliseconds(10),
            verification: None,
        }
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new(vec![key(2023, 1, 1), key(2023, 1, 2)]);

        let ready = agg.add(make_result(key(2023, 1, 1)));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_result(key(2023, 1, 2)));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg =
            ResultAggregator::new(vec![key(2023, 2, 1), key(2023, 1, 2), key(2023, 1, 1)]);

        assert!(agg.add(make_result(key(2023, 1, 2))).is_empty());
        assert!(agg.add(make_result(key(2023, 2, 1))).is_empty());

        let ready = agg.add(make_result(key(2023, 1, 1)));
        let keys: Vec<ResultKey> = ready.iter().map(ResultKey::from).collect();
        assert_eq!(keys, vec![key(2023, 1, 1), key(2023, 1, 2), key(2023, 2, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_keys_from_work_items() {
        let work = [
            WorkItem {
                year: 2023,
                day: 4,
                parts: 1..=2,
            },
            WorkItem {
                year: 2023,
                day: 3,
                parts: 2..=2,
            },
        ];
        let mut agg = ResultAggregator::for_work_items(&work);

        assert!(agg.add(make_result(key(2023, 4, 1))).is_empty());
        let ready: Vec<ResultKey> = agg
            .add(make_result(key(2023, 3, 2)))
            .iter()
            .map(ResultKey::from)
            .collect();
        assert_eq!(ready, [key(2023, 3, 2), key(2023, 4, 1)]);
        assert!(!agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new(vec![key(2023, 1, 1), key(2023, 1, 2)]);

        agg.add(make_result(key(2023, 1, 2)));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
        assert!(!agg.is_complete());
        assert!(agg.drain().is_empty());
    }

    proptest! {
        #[test]
        fn emits_every_result_in_key_order(order in Just((0..12u8).collect::<Vec<_>>()).prop_shuffle()) {
            let keys: Vec<ResultKey> = (0..12u8).map(|i| key(2023, i / 2 + 1, i % 2 + 1)).collect();
            let mut agg = ResultAggregator::new(keys.clone());

            let mut emitted = Vec::new();
            for i in order {
                emitted.extend(agg.add(make_result(keys[usize::from(i)])));
            }

            prop_assert!(agg.is_complete());
            let emitted: Vec<ResultKey> = emitted.iter().map(ResultKey::from).collect();
            prop_assert_eq!(emitted, keys);
        }
    }
}
