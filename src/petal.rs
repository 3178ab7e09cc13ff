//! Petal regions and petal labels for raw input sets.

use crate::error::Result;
use crate::models::{LogicCode, NamedSet, PetalLabels, SetCollection};
use crate::template::{LabelTemplate, PetalValues};
use ahash::AHashSet;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::hash::Hash;

/// Default label template: the petal cardinality.
pub const DEFAULT_FMT: &str = "{size}";

/// Elements of one petal: in every set marked `1`, in no set marked `0`.
pub fn petal_region<'a, T: Eq + Hash>(
    sets: &'a [NamedSet<T>],
    code: &LogicCode,
) -> AHashSet<&'a T> {
    let (included, excluded): (Vec<_>, Vec<_>) = sets
        .iter()
        .enumerate()
        .partition(|(i, _)| code.includes(*i));

    let Some((&(_, first), rest)) = included.split_first() else {
        return AHashSet::new();
    };
    first
        .elements
        .iter()
        .filter(|e| rest.iter().all(|(_, s)| s.elements.contains(*e)))
        .filter(|e| excluded.iter().all(|(_, s)| !s.elements.contains(*e)))
        .collect()
}

/// All `2^n - 1` petal regions, keyed by logic code.
pub fn petal_regions<T: Eq + Hash + Clone>(
    sets: &SetCollection<T>,
) -> Result<BTreeMap<LogicCode, AHashSet<T>>> {
    let count = sets.count()?;
    Ok(count
        .logics()
        .map(|code| {
            let region = petal_region(sets.sets(), &code)
                .into_iter()
                .cloned()
                .collect();
            (code, region)
        })
        .collect())
}

/// Petal cardinalities keyed by logic code.
pub fn petal_sizes<T: Eq + Hash>(sets: &SetCollection<T>) -> Result<BTreeMap<LogicCode, usize>> {
    let count = sets.count()?;
    Ok(count
        .logics()
        .map(|code| {
            let size = petal_region(sets.sets(), &code).len();
            (code, size)
        })
        .collect())
}

/// Percentage denominator: size of the union, or 1 when every set is empty.
pub fn universe_size<T: Eq + Hash>(sets: &SetCollection<T>) -> usize {
    let n = sets.universe().len();
    if n == 0 {
        warn!("all input sets are empty; percentages are computed against 1");
        1
    } else {
        n
    }
}

/// Format every petal of `sets` through the label template `fmt`.
///
/// Fails when the number of sets is outside 2..=6 or the template is invalid.
pub fn generate_petal_labels<T: Eq + Hash>(
    sets: &SetCollection<T>,
    fmt: &str,
) -> Result<PetalLabels> {
    let count = sets.count()?;
    let template = LabelTemplate::parse(fmt)?;
    let sizes = petal_sizes(sets)?;
    let universe = universe_size(sets);
    debug!(
        "generating {} petal labels for {} sets (universe = {})",
        sizes.len(),
        count,
        universe
    );

    let mut labels = PetalLabels::new(count);
    for (code, size) in sizes {
        let label = template.render(&PetalValues {
            size,
            percentage: 100.0 * size as f64 / universe as f64,
            logic: code.as_str(),
        });
        labels.insert(code, label);
    }
    Ok(labels)
}
