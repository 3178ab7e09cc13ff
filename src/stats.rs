use crate::error::Result;
use crate::models::{LogicCode, SetCollection};
use crate::petal::{petal_sizes, universe_size};
use serde::Serialize;
use std::hash::Hash;

/// Size and share of one petal.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PetalStat {
    pub logic: LogicCode,
    /// Names of the sets the petal belongs to, joined by `&`.
    pub sets: String,
    pub size: usize,
    pub percentage: f64,
}

/// Per-petal statistics in logic-code order.
pub fn petal_summary<T: Eq + Hash>(sets: &SetCollection<T>) -> Result<Vec<PetalStat>> {
    let names = sets.names();
    let universe = universe_size(sets);
    let out = petal_sizes(sets)?
        .into_iter()
        .map(|(logic, size)| {
            let members: Vec<&str> = names
                .iter()
                .enumerate()
                .filter(|(i, _)| logic.includes(*i))
                .map(|(_, n)| n.as_str())
                .collect();
            PetalStat {
                sets: members.join("&"),
                size,
                percentage: 100.0 * size as f64 / universe as f64,
                logic,
            }
        })
        .collect();
    Ok(out)
}
