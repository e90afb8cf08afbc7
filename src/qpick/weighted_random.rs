use super::entry::Entry;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    #[error("no entries found")]
    NoEntries,
    #[error("q-value must be a positive number; got '{weight:?}' for '{name}'")]
    InvalidWeight { name: String, weight: f64 },
    #[error("sum of q-values is too large")]
    TotalOverflow,
}

/// The winning entry, and the raw roll that chose it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick<'a> {
    pub entry: &'a Entry,
    pub roll: f64,
}

///
/// Sums the weights, stopping at the first one that is not a finite positive number.
///
pub fn total_weight(entries: &[Entry]) -> Result<f64, SelectError> {
    if entries.is_empty() {
        return Err(SelectError::NoEntries);
    }
    let mut total = 0.0;
    for entry in entries {
        // Written this way round so NaN is rejected too
        if !(entry.weight > 0.0) || entry.weight.is_infinite() {
            return Err(SelectError::InvalidWeight {
                name: entry.name.clone(),
                weight: entry.weight,
            });
        }
        total += entry.weight;
    }
    if total.is_infinite() {
        return Err(SelectError::TotalOverflow);
    }
    Ok(total)
}

///
/// Index of the entry whose slice of `[0, total)` contains `roll`.
///
/// Each entry owns `[before, before + weight)`, so a roll landing exactly on a
/// boundary goes to the later entry. `None` if the roll is past the end.
///
pub fn locate(entries: &[Entry], roll: f64) -> Option<usize> {
    let mut max = 0.0;
    for (index, entry) in entries.iter().enumerate() {
        max += entry.weight;
        trace!("{} covers up to {}", entry.name, max);
        if roll < max {
            return Some(index);
        }
    }
    None
}

///
/// Resolves a roll to its entry.
///
/// # Panics
///
/// If the roll is not below the cumulative weight of all entries. A roll drawn
/// from `[0, total)` never gets here, so this is an internal defect.
///
pub fn resolve(entries: &[Entry], roll: f64) -> Pick<'_> {
    match locate(entries, roll) {
        Some(index) => Pick {
            entry: &entries[index],
            roll,
        },
        None => {
            let max: f64 = entries.iter().map(|entry| entry.weight).sum();
            panic!("roll ({}) exceeded max ({})", roll, max)
        }
    }
}

///
/// Picks one entry with probability `weight / total`, using a single draw from `rng`.
///
pub fn weighted_random<'a, R: Rng + ?Sized>(
    entries: &'a [Entry],
    rng: &mut R,
) -> Result<Pick<'a>, SelectError> {
    let total = total_weight(entries)?;
    let roll = rng.gen_range(0.0..total);
    debug!("Rolled {} of {}", roll, total);
    Ok(resolve(entries, roll))
}

///
/// A generator seeded from the wall clock, so each run draws differently.
///
pub fn seeded_rng() -> StdRng {
    let now = chrono::Utc::now();
    let seed = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64;
    debug!("Seeding generator with {}", seed);
    StdRng::seed_from_u64(seed)
}
