use fukuro::{select_weighted_with_rng, Ceiling, Entry, Error, ScriptedSource, WeightedBag};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn entries(weights: &[u64]) -> Vec<Entry<usize>> {
    weights
        .iter()
        .enumerate()
        .map(|(i, &w)| Entry::new(format!("item{i}"), w, i))
        .collect()
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

proptest! {
    #[test]
    fn prop_cumulative_is_prefix_sum(
        weights in prop::collection::vec(0u64..1_000, 0..40)
    ) {
        let bag = WeightedBag::new(Ceiling::Total, entries(&weights)).expect("no overflow");

        let mut acc = 0;
        for (i, &w) in weights.iter().enumerate() {
            acc += w;
            prop_assert_eq!(bag.cumulative()[i], acc);
        }
        prop_assert_eq!(bag.cumulative().len(), weights.len());
        prop_assert_eq!(bag.total_weight(), acc);
        prop_assert!(bag.cumulative().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_ceiling_derivation(
        weights in prop::collection::vec(0u64..1_000, 0..20),
        k in 1u64..10_000,
    ) {
        let total: u64 = weights.iter().sum();

        let derived = WeightedBag::new(Ceiling::Total, entries(&weights)).expect("no overflow");
        prop_assert_eq!(derived.effective_ceiling(), total);

        let fixed = WeightedBag::new(Ceiling::Fixed(k), entries(&weights)).expect("no overflow");
        prop_assert_eq!(fixed.effective_ceiling(), k);
    }

    #[test]
    fn prop_incremental_matches_bulk(
        weights in prop::collection::vec(0u64..1_000, 0..30),
        k in prop::option::of(1u64..5_000),
    ) {
        init_logging();
        let ceiling = Ceiling::from(k);
        let bulk = WeightedBag::new(ceiling, entries(&weights)).expect("no overflow");

        let mut incremental = WeightedBag::empty(ceiling);
        for entry in entries(&weights) {
            incremental.add_item(entry).expect("no overflow");
        }

        prop_assert_eq!(bulk.cumulative(), incremental.cumulative());
        prop_assert_eq!(bulk.total_weight(), incremental.total_weight());
        prop_assert_eq!(bulk.effective_ceiling(), incremental.effective_ceiling());
        prop_assert_eq!(bulk.entries(), incremental.entries());
    }

    #[test]
    fn prop_total_ceiling_never_misses(
        weights in prop::collection::vec(0u64..100, 1..20),
        seed in any::<u64>(),
    ) {
        prop_assume!(weights.iter().any(|&w| w > 0));
        let mut bag = WeightedBag::seeded(Ceiling::Total, entries(&weights), seed)
            .expect("no overflow");

        for _ in 0..100 {
            let hit = bag.select_entry().expect("positive ceiling");
            let entry = hit.expect("total ceiling cannot miss");
            // Membership, and zero-weight entries are unreachable.
            prop_assert!(entry.weight() > 0);
            prop_assert_eq!(weights[*entry.payload()], entry.weight());
        }
    }

    #[test]
    fn prop_zero_weights_always_miss(
        n in 0usize..10,
        k in 1u64..10_000,
        seed in any::<u64>(),
    ) {
        let mut bag = WeightedBag::seeded(Ceiling::Fixed(k), entries(&vec![0; n]), seed)
            .expect("no overflow");
        for _ in 0..100 {
            prop_assert_eq!(bag.select().expect("positive ceiling"), None);
        }
    }

    #[test]
    fn prop_hit_iff_draw_below_total(
        weights in prop::collection::vec(0u64..100, 0..20),
        k in 1u64..5_000,
        draw in any::<u64>(),
    ) {
        let total: u64 = weights.iter().sum();
        let source = ScriptedSource::new(vec![draw]);
        let mut bag = WeightedBag::with_source(Ceiling::Fixed(k), entries(&weights), source)
            .expect("no overflow");

        let r = draw % k;
        let hit = bag.select_entry().expect("positive ceiling");
        prop_assert_eq!(hit.is_some(), r < total);
        if let Some(entry) = hit {
            // The drawn value lies inside the entry's half-open range.
            let i = *entry.payload();
            let upper: u64 = weights[..=i].iter().sum();
            prop_assert!(r < upper);
            prop_assert!(r >= upper - weights[i]);
        }
    }

    #[test]
    fn prop_take_conserves_entries(
        weights in prop::collection::vec(1u64..50, 1..15),
        seed in any::<u64>(),
    ) {
        let mut bag = WeightedBag::seeded(Ceiling::Total, entries(&weights), seed)
            .expect("no overflow");

        let mut taken = Vec::new();
        while !bag.is_empty() {
            let entry = bag.take().expect("positive ceiling").expect("total ceiling cannot miss");
            taken.push(*entry.payload());
            let remaining: u64 = bag.entries().iter().map(Entry::weight).sum();
            prop_assert_eq!(bag.total_weight(), remaining);
            prop_assert_eq!(bag.cumulative().last().copied().unwrap_or(0), remaining);
        }

        taken.sort_unstable();
        prop_assert_eq!(taken, (0..weights.len()).collect::<Vec<_>>());
        prop_assert_eq!(bag.take(), Err(Error::InvalidCeiling(0)));
    }

    #[test]
    fn prop_weighted_pick_is_member(
        weights in prop::collection::vec(0.0f64..10.0, 1..20),
        seed in any::<u64>(),
    ) {
        prop_assume!(weights.iter().any(|&w| w > 0.0));
        let values: Vec<(usize, f64)> = weights.iter().copied().enumerate().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let &i = select_weighted_with_rng(&values, &mut rng).expect("valid weights");
        prop_assert!(i < weights.len());
        prop_assert!(weights[i] > 0.0);
    }
}
