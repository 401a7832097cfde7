//! Every kind of every family has a generator, an encoder and a decoder.

#[cfg(test)]
mod tests {
    use proptest::strategy::{Strategy, ValueTree};
    use proptest::test_runner::TestRunner;
    use tablestore_search_core::{verify_family, FamilyCoverage};
    use tablestore_search_model::{
        Aggregation, AggregationKind, GroupBy, GroupByKind, Query, QueryKind, Sorter, SorterKind,
    };

    use crate::generators::{arb_aggregation_of, arb_group_by_of, arb_query_of, arb_sorter_of};

    const SAMPLES_PER_KIND: usize = 4;

    /// Draw a few values of each kind from `strategy_of`.
    fn sample_each<K, T, S>(kinds: &[K], strategy_of: impl Fn(K) -> S) -> Vec<T>
    where
        K: Copy,
        S: Strategy<Value = T>,
    {
        let mut runner = TestRunner::deterministic();
        let mut samples = Vec::with_capacity(kinds.len() * SAMPLES_PER_KIND);
        for &kind in kinds {
            let strategy = strategy_of(kind);
            for _ in 0..SAMPLES_PER_KIND {
                let tree = strategy.new_tree(&mut runner).expect("test sample");
                samples.push(tree.current());
            }
        }
        samples
    }

    fn assert_complete(coverage: &FamilyCoverage, variants: usize) {
        assert_eq!(coverage.variants, variants, "{}", coverage.family);
        assert!(coverage.is_complete(), "{coverage:?}");
    }

    #[test]
    fn test_should_cover_every_query_kind() {
        let samples: Vec<Query> = sample_each(QueryKind::ALL, |kind| arb_query_of(kind, 1));
        assert!(samples.iter().all(|q| QueryKind::ALL.contains(&q.kind())));

        let coverage = verify_family(&samples).expect("test query coverage");
        assert_complete(&coverage, 19);
    }

    #[test]
    fn test_should_cover_every_group_by_kind() {
        let samples: Vec<GroupBy> = sample_each(GroupByKind::ALL, |kind| arb_group_by_of(kind, 1));
        let coverage = verify_family(&samples).expect("test group-by coverage");
        assert_complete(&coverage, 8);
    }

    #[test]
    fn test_should_cover_every_aggregation_kind() {
        let samples: Vec<Aggregation> = sample_each(AggregationKind::ALL, arb_aggregation_of);
        let coverage = verify_family(&samples).expect("test aggregation coverage");
        assert_complete(&coverage, 8);
    }

    #[test]
    fn test_should_cover_every_sorter_kind() {
        let samples: Vec<Sorter> = sample_each(SorterKind::ALL, |kind| arb_sorter_of(kind, 1));
        let coverage = verify_family(&samples).expect("test sorter coverage");
        assert_complete(&coverage, 5);
    }

    #[test]
    fn test_should_keep_each_sample_of_its_requested_kind() {
        for &kind in QueryKind::ALL {
            let samples: Vec<Query> = sample_each(&[kind], |kind| arb_query_of(kind, 0));
            assert!(samples.iter().all(|q| q.kind() == kind), "kind {kind}");
        }
    }
}
