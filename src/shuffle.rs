//! Fisher-Yates shuffling with original-index tracking.
//!
//! Levels are reshuffled once per session and ethics choices once per
//! scenario load. Display order is free to change, but answers must still
//! resolve against the canonical order, so every shuffled element carries
//! the index it had before permuting.

use rand::Rng;
use serde::Serialize;

/// An element paired with its position in the unshuffled sequence.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Indexed<T> {
  pub original_index: usize,
  pub item: T,
}

/// In-place uniform permutation.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
  for i in (1..items.len()).rev() {
    let j = rng.gen_range(0..=i);
    items.swap(i, j);
  }
}

/// Copy the input, tag each element with its original index, then shuffle.
pub fn shuffled_indexed<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<Indexed<T>> {
  let mut tagged: Vec<Indexed<T>> = items
    .iter()
    .cloned()
    .enumerate()
    .map(|(original_index, item)| Indexed { original_index, item })
    .collect();
  fisher_yates(&mut tagged, rng);
  tagged
}
