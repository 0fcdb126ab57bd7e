//! Sorting algorithms expressed as step-by-step sequencers.
//!
//! Each algorithm is an explicit state machine. A call to
//! [`StepSequencer::advance`] performs exactly one visualizable unit of work
//! against the array it is handed and returns the [`Step`] describing what to
//! highlight, or `None` once the sort is complete.
//!
//! ```text
//!   tick ──▶ advance(&mut values) ──▶ Some(Step) ──▶ render_frame(values, highlights)
//!                                 └─▶ None       ──▶ session returns to Idle
//! ```
//!
//! Sequencers are fused: after returning `None` they keep returning `None`.
//! None of the algorithms are stable; equal values may end up in any order.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use std::collections::BTreeMap;
use std::fmt::{self, Debug};

use clap::ValueEnum;
use serde::Deserialize;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

/// Sort direction. Flips every comparison made by every algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Returns true if `a` belongs strictly before `b`.
    pub fn precedes(self, a: i64, b: i64) -> bool {
        match self {
            Direction::Ascending => a < b,
            Direction::Descending => a > b,
        }
    }

    /// Returns true if `values` is ordered according to this direction.
    pub fn is_sorted(self, values: &[i64]) -> bool {
        values.windows(2).all(|w| !self.precedes(w[1], w[0]))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }
}

/// Colouring role of a highlighted bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Drawn green.
    Primary,
    /// Drawn red.
    Secondary,
}

/// Index to role map for a single frame.
///
/// Inserting the same index twice keeps the later role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights(BTreeMap<usize, Role>);

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, index: usize, role: Role) -> Self {
        self.0.insert(index, role);
        self
    }

    pub fn insert(&mut self, index: usize, role: Role) {
        self.0.insert(index, role);
    }

    pub fn role(&self, index: usize) -> Option<Role> {
        self.0.get(&index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Role)> + '_ {
        self.0.iter().map(|(i, r)| (*i, *r))
    }

    /// Highlight `primary` green and `secondary` red, in that order.
    pub fn pair(primary: usize, secondary: usize) -> Self {
        Self::new()
            .with(primary, Role::Primary)
            .with(secondary, Role::Secondary)
    }
}

/// One unit of progress yielded by a sequencer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    /// Bars to highlight in the frame for this step.
    pub highlights: Highlights,
    /// Final pivot position; only set by quick sort after a partition.
    pub pivot: Option<usize>,
}

impl Step {
    pub fn new(highlights: Highlights) -> Self {
        Self {
            highlights,
            pivot: None,
        }
    }
}

/// Anything that can produce a sort as a sequence of steps.
pub trait StepSequencer: Debug {
    /// Perform one unit of work on `values` and describe it.
    ///
    /// `values` must be the same array (same length) on every call.
    /// Returns `None` once the sort is complete, and on every call after.
    fn advance(&mut self, values: &mut [i64]) -> Option<Step>;
}

/// The five supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Returns the display label for this algorithm.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Build a fresh sequencer for an array of `len` elements.
    pub fn sequencer(self, len: usize, direction: Direction) -> Box<dyn StepSequencer> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort::new(len, direction)),
            Algorithm::Insertion => Box::new(InsertionSort::new(len, direction)),
            Algorithm::Selection => Box::new(SelectionSort::new(len, direction)),
            Algorithm::Merge => Box::new(MergeSort::new(len, direction)),
            Algorithm::Quick => Box::new(QuickSort::new(len, direction)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Run a sequencer to exhaustion, returning every step.
    pub fn drain(sequencer: &mut dyn StepSequencer, values: &mut [i64]) -> Vec<Step> {
        let mut steps = Vec::new();
        while let Some(step) = sequencer.advance(values) {
            steps.push(step);
            assert!(steps.len() < 1_000_000, "sequencer did not terminate");
        }
        steps
    }

    /// Sort `input` with `algorithm`, returning the result and the steps taken.
    pub fn run(algorithm: Algorithm, input: &[i64], direction: Direction) -> (Vec<i64>, Vec<Step>) {
        let mut values = input.to_vec();
        let mut sequencer = algorithm.sequencer(values.len(), direction);
        let steps = drain(sequencer.as_mut(), &mut values);
        (values, steps)
    }

    /// Seeded random values in `-20..=20`, so duplicates are common.
    pub fn scrambled(len: usize, seed: u64) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(-20..=20)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{drain, run, scrambled};
    use super::*;

    fn sorted_copy(values: &[i64], direction: Direction) -> Vec<i64> {
        let mut expected = values.to_vec();
        expected.sort_unstable();
        if direction == Direction::Descending {
            expected.reverse();
        }
        expected
    }

    #[test]
    fn test_every_algorithm_sorts_both_directions() {
        for len in [0usize, 1, 2, 3, 7, 16, 33] {
            for seed in 0..4 {
                let input = scrambled(len, seed);
                for direction in [Direction::Ascending, Direction::Descending] {
                    for algorithm in Algorithm::ALL {
                        let (output, _) = run(algorithm, &input, direction);
                        // Equal multiset and correct order in one comparison.
                        assert_eq!(
                            output,
                            sorted_copy(&input, direction),
                            "{} {:?} on {:?}",
                            algorithm,
                            direction,
                            input
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_duplicates_give_same_result_for_all_algorithms() {
        let input = vec![3, 1, 3, 2, 1, 3, 2, 2, 1];
        for direction in [Direction::Ascending, Direction::Descending] {
            let results: Vec<Vec<i64>> = Algorithm::ALL
                .iter()
                .map(|a| run(*a, &input, direction).0)
                .collect();
            for result in &results {
                assert_eq!(result, &results[0]);
            }
        }
    }

    #[test]
    fn test_empty_and_single_yield_no_steps() {
        for algorithm in Algorithm::ALL {
            assert!(run(algorithm, &[], Direction::Ascending).1.is_empty());
            assert!(run(algorithm, &[42], Direction::Descending).1.is_empty());
        }
    }

    #[test]
    fn test_sequencers_are_fused() {
        for algorithm in Algorithm::ALL {
            let mut values = vec![2, 1];
            let mut sequencer = algorithm.sequencer(values.len(), Direction::Ascending);
            drain(sequencer.as_mut(), &mut values);
            assert!(sequencer.advance(&mut values).is_none());
            assert!(sequencer.advance(&mut values).is_none());
        }
    }

    #[test]
    fn test_highlights_stay_in_bounds() {
        let input = scrambled(25, 9);
        for algorithm in Algorithm::ALL {
            let (_, steps) = run(algorithm, &input, Direction::Descending);
            for step in steps {
                assert!(!step.highlights.is_empty());
                assert!(step.highlights.iter().all(|(i, _)| i < input.len()));
            }
        }
    }

    #[test]
    fn test_only_quick_sort_carries_pivot() {
        let input = scrambled(12, 3);
        for algorithm in Algorithm::ALL {
            let (_, steps) = run(algorithm, &input, Direction::Ascending);
            let has_pivot = steps.iter().any(|s| s.pivot.is_some());
            assert_eq!(has_pivot, algorithm == Algorithm::Quick, "{}", algorithm);
        }
    }

    #[test]
    fn test_resorting_sorted_array_swaps_nothing() {
        let (sorted, _) = run(Algorithm::Quick, &scrambled(20, 5), Direction::Ascending);

        assert!(run(Algorithm::Bubble, &sorted, Direction::Ascending).1.is_empty());
        assert!(run(Algorithm::Insertion, &sorted, Direction::Ascending).1.is_empty());

        // Selection still scans every remaining element, but never swaps.
        let (after, steps) = run(Algorithm::Selection, &sorted, Direction::Ascending);
        assert_eq!(after, sorted);
        assert_eq!(steps.len(), 20 * 19 / 2);
    }

    #[test]
    fn test_highlights_later_insert_wins() {
        let highlights = Highlights::pair(3, 3);
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights.role(3), Some(Role::Secondary));
        assert_eq!(highlights.role(4), None);
    }

    #[test]
    fn test_direction_precedes() {
        assert!(Direction::Ascending.precedes(1, 2));
        assert!(!Direction::Ascending.precedes(2, 2));
        assert!(Direction::Descending.precedes(2, 1));
        assert!(Direction::Descending.is_sorted(&[4, 2, 2, 1]));
        assert!(!Direction::Ascending.is_sorted(&[4, 2, 2, 1]));
    }

    #[test]
    fn test_algorithm_labels() {
        assert_eq!(Algorithm::Merge.label(), "Merge Sort");
        assert_eq!(Algorithm::Quick.to_string(), "Quick Sort");
    }
}
