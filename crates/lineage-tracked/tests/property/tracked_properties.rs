use lineage_core::Identity;
use lineage_tracked::{bind, Operand, Shaped, TrackedValue};
use proptest::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use test_fixtures::recording_lineage;

fn target_counts(records: &[String]) -> FxHashMap<String, usize> {
    let mut counts = FxHashMap::default();
    for record in records {
        let target = record
            .trim_end_matches(')')
            .rsplit(", ")
            .next()
            .unwrap_or_default()
            .to_string();
        *counts.entry(target).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn values_match_raw_arithmetic(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let (lineage, _log) = recording_lineage();
        let ta = TrackedValue::new(a, lineage.clone());
        let tb = TrackedValue::new(b, lineage);
        prop_assert_eq!(*(&ta + &tb).unwrap().value(), a + b);
        prop_assert_eq!(*(&ta - &tb).unwrap().value(), a - b);
        prop_assert_eq!(*(&ta * &tb).unwrap().value(), a * b);
        if b != 0 {
            let (q, r) = ta.div_mod(&tb).unwrap();
            prop_assert_eq!(*q.value() * b + *r.value(), a);
            prop_assert!(r.value().abs() < b.abs());
            prop_assert!(*r.value() == 0 || (*r.value() < 0) == (b < 0));
        }
    }

    #[test]
    fn every_output_gets_a_fresh_identity(values in prop::collection::vec(-1e6f64..1e6, 1..16)) {
        let (lineage, _log) = recording_lineage();
        let inputs: Vec<_> = values
            .iter()
            .map(|v| TrackedValue::new(*v, lineage.clone()))
            .collect();
        let mut seen: FxHashSet<Identity> = inputs.iter().map(|v| v.identity()).collect();
        for pair in inputs.windows(2) {
            let out = (&pair[0] + &pair[1]).unwrap();
            prop_assert!(seen.insert(out.identity()));
        }
        for input in &inputs {
            let (q, r) = input.div_mod(3.0).unwrap();
            prop_assert!(seen.insert(q.identity()));
            prop_assert!(seen.insert(r.identity()));
        }
    }

    #[test]
    fn record_count_is_tracked_inputs_times_outputs(
        a in -1e3f64..1e3,
        b in -1e3f64..1e3,
        plain in -1e3f64..1e3,
    ) {
        let (lineage, log) = recording_lineage();
        let ta = TrackedValue::new(a, lineage.clone());
        let tb = TrackedValue::new(b, lineage);

        let _ = (&ta + &tb).unwrap();
        prop_assert_eq!(log.len(), 2);
        let _ = (&ta + plain).unwrap();
        prop_assert_eq!(log.len(), 3);
        if b != 0.0 {
            let _ = ta.div_mod(&tb).unwrap();
            prop_assert_eq!(log.len(), 7);
        }
        prop_assert_eq!(log.len(), target_counts(&log.records()).values().sum::<usize>());
    }

    #[test]
    fn each_target_appears_once_per_provenance_entry(n in 1usize..6) {
        let (lineage, log) = recording_lineage();
        let head = TrackedValue::new(1u32, lineage.clone());
        let rest: Vec<_> = (0..n).map(|i| TrackedValue::new(i as u32, lineage.clone())).collect();
        let operands: Vec<Operand<'_, u32>> = rest.iter().map(Operand::from).collect();
        let out = head
            .apply_with("count", &operands, |_, others| Ok(others.len() as u32))
            .unwrap();
        let counts = target_counts(&log.records());
        prop_assert_eq!(counts.get(&out.identity().to_string()).copied(), Some(n + 1));
    }

    #[test]
    fn bind_records_one_origin_per_element(rows in 0usize..5, cols in 0usize..5) {
        let (lineage, log) = recording_lineage();
        let raw = Shaped::from_shape_fn([rows, cols], |c| (c[0] * cols + c[1]) as i32).unwrap();
        let (bound, container) = bind(&lineage, &raw, None).unwrap();
        prop_assert_eq!(log.len(), rows * cols);
        let ids: FxHashSet<Identity> = bound.iter().map(|v| v.identity()).collect();
        prop_assert_eq!(ids.len(), rows * cols);
        prop_assert!(!ids.contains(&container));
    }
}
