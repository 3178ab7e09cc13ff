use geneview::petal::{petal_regions, petal_sizes, universe_size};
use geneview::{SetCollection, SetCount, VennError, generate_petal_labels};
use std::collections::BTreeSet;

fn abc() -> SetCollection<u32> {
    SetCollection::new()
        .with_set("A", [1, 2, 3, 4])
        .unwrap()
        .with_set("B", [3, 4, 5, 6])
        .unwrap()
        .with_set("C", [4, 6, 7, 8])
        .unwrap()
}

/// `n` overlapping sets of small integers.
fn overlapping(n: usize) -> SetCollection<u32> {
    let mut sets = SetCollection::new();
    for i in 0..n {
        let start = (i * 3) as u32;
        sets.insert(format!("S{i}"), start..start + 10).unwrap();
    }
    sets
}

#[test]
fn every_code_gets_exactly_one_label() {
    for n in 2..=6 {
        let labels = generate_petal_labels(&overlapping(n), "{size}").unwrap();
        let count = SetCount::try_from(n).unwrap();
        assert_eq!(labels.len(), (1 << n) - 1);
        let expected: Vec<String> = count.logics().map(|c| c.to_string()).collect();
        let got: Vec<String> = labels.codes().map(|c| c.to_string()).collect();
        assert_eq!(got, expected, "n = {n}");
    }
}

#[test]
fn regions_partition_the_union() {
    for n in 2..=6 {
        let sets = overlapping(n);
        let regions = petal_regions(&sets).unwrap();
        let mut seen = BTreeSet::new();
        for region in regions.values() {
            for e in region {
                assert!(seen.insert(*e), "element {e} in two petals (n = {n})");
            }
        }
        let union: BTreeSet<u32> = sets.universe().into_iter().copied().collect();
        assert_eq!(seen, union, "n = {n}");
    }
}

#[test]
fn labels_are_idempotent() {
    let sets = overlapping(4);
    let fmt = "{size} ({percentage:.1f}%)";
    assert_eq!(
        generate_petal_labels(&sets, fmt).unwrap(),
        generate_petal_labels(&sets, fmt).unwrap()
    );
}

#[test]
fn three_set_regions_match_brute_force() {
    let sets = abc();
    let regions = petal_regions(&sets).unwrap();
    let region = |code: &str| -> BTreeSet<u32> {
        regions
            .iter()
            .find(|(c, _)| c.as_str() == code)
            .map(|(_, r)| r.iter().copied().collect())
            .unwrap()
    };
    assert_eq!(region("100"), BTreeSet::from([1, 2]));
    assert_eq!(region("010"), BTreeSet::from([5]));
    assert_eq!(region("001"), BTreeSet::from([7, 8]));
    assert_eq!(region("110"), BTreeSet::from([3]));
    assert_eq!(region("101"), BTreeSet::new());
    assert_eq!(region("011"), BTreeSet::from([6]));
    assert_eq!(region("111"), BTreeSet::from([4]));

    let sizes: Vec<usize> = petal_sizes(&sets).unwrap().into_values().collect();
    // code order: 001 010 011 100 101 110 111
    assert_eq!(sizes, vec![2, 1, 1, 2, 0, 1, 1]);
    assert_eq!(universe_size(&sets), 8);
}

#[test]
fn percentages_use_the_union_as_denominator() {
    let labels = generate_petal_labels(&abc(), "{percentage}").unwrap();
    assert_eq!(labels.get("100"), Some("25.0"));
    assert_eq!(labels.get("111"), Some("12.5"));
    assert_eq!(labels.get("101"), Some("0.0"));
}

#[test]
fn logic_key_renders_the_code() {
    let labels = generate_petal_labels(&abc(), "{logic}: {size}").unwrap();
    assert_eq!(labels.get("110"), Some("110: 1"));
}

#[test]
fn set_count_bounds() {
    for n in [1usize, 7] {
        let err = generate_petal_labels(&overlapping(n), "{size}").unwrap_err();
        assert_eq!(err, VennError::InvalidCardinality(n));
    }
    for n in [2usize, 6] {
        assert!(generate_petal_labels(&overlapping(n), "{size}").is_ok());
    }
}

#[test]
fn empty_sets_do_not_divide_by_zero() {
    let sets: SetCollection<u32> = SetCollection::new()
        .with_set("A", [])
        .unwrap()
        .with_set("B", [])
        .unwrap();
    let labels = generate_petal_labels(&sets, "{percentage}").unwrap();
    assert!(labels.iter().all(|(_, l)| l == "0.0"));
}

#[test]
fn bad_templates_are_rejected() {
    assert!(matches!(
        generate_petal_labels(&abc(), "{count}"),
        Err(VennError::Template(_))
    ));
}
