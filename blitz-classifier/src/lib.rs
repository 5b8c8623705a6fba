use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

pub mod decision_tree;
pub mod error;
pub mod node;
pub mod random_forest;

pub use error::ModelError;

/// A trained model that maps one feature row to a label.
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &[f64]) -> Result<f64, ModelError>;
}

pub fn mean(xs: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = xs.fold((0.0, 0usize), |(sum, n), x| (sum + x, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Counts each distinct value. Returns the counts in ascending value order and the total.
pub fn histogram(xs: impl Iterator<Item = f64>) -> (Vec<(f64, usize)>, usize) {
    let mut counts = BTreeMap::new();
    let mut n = 0;
    for x in xs {
        *counts.entry(OrderedFloat(x)).or_insert(0usize) += 1;
        n += 1;
    }

    (counts.into_iter().map(|(x, count)| (x.0, count)).collect(), n)
}

/// Majority vote. Ties go to the smallest value.
pub fn most_frequent(xs: impl Iterator<Item = f64>) -> f64 {
    let (histogram, _) = histogram(xs);
    histogram
        .into_iter()
        .fold(None, |best: Option<(f64, usize)>, (x, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((x, count)),
        })
        .map_or(f64::NAN, |(x, _)| x)
}
