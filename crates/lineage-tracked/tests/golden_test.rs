//! Golden scenarios: exact record text under sequential identities.

use lineage_tracked::{bind, Shaped, TrackedValue};
use test_fixtures::{expand_identities, recording_lineage, scenario, Scenario};

fn expected_records(scenario: &Scenario) -> Vec<String> {
    scenario
        .expected_records
        .iter()
        .map(|t| expand_identities(t))
        .collect()
}

#[test]
fn add_two_tracked() {
    let s = scenario("add_two_tracked");
    let (lineage, log) = recording_lineage();
    let a = TrackedValue::new(s.inputs[0], lineage.clone());
    let b = TrackedValue::new(s.inputs[1], lineage);

    let c = (&a + &b).unwrap();
    assert_eq!(*c.value(), s.expected_values[0]);
    assert_eq!(log.records(), expected_records(&s), "{}", s.description);
}

#[test]
fn div_mod_fan_out() {
    let s = scenario("div_mod_fan_out");
    let (lineage, log) = recording_lineage();
    let d = TrackedValue::new(s.inputs[0], lineage);

    let (q, r) = d.div_mod(s.inputs[1]).unwrap();
    assert_eq!(vec![*q.value(), *r.value()], s.expected_values);
    assert_eq!(log.records(), expected_records(&s), "{}", s.description);
}

#[test]
fn bind_two_by_two() {
    let s = scenario("bind_two_by_two");
    let (lineage, log) = recording_lineage();
    let raw = Shaped::from_shape_vec(s.shape.clone(), s.inputs.clone()).unwrap();

    let (bound, _) = bind(&lineage, &raw, None).unwrap();
    let values: Vec<f64> = bound.iter().map(|v| *v.value()).collect();
    assert_eq!(values, s.expected_values);
    assert_eq!(log.records(), expected_records(&s), "{}", s.description);
}
