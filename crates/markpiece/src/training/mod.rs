//! # Merge Training
//!
//! * [`find_most_frequent_pair`] - deterministic frequency-based pair
//!   selection.
//! * [`replace_pair`] / [`apply_merges`] - greedy left-to-right pair
//!   rewriting.
//! * [`TrainOptions`] - the merge-learning driver configuration.

mod merges;
mod pair_counter;
mod trainer;

pub use merges::{apply_merges, replace_pair};
pub use pair_counter::find_most_frequent_pair;
pub use trainer::TrainOptions;

pub(crate) use trainer::train_into;
