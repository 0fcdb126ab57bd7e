use super::{Direction, Highlights, Step, StepSequencer};

/// Bubble sort. Only swaps are visualized; in-order pairs are skipped
/// without yielding.
#[derive(Debug)]
pub struct BubbleSort {
    len: usize,
    direction: Direction,
    /// Completed passes.
    pass: usize,
    /// Left index of the next adjacent pair to compare.
    j: usize,
}

impl BubbleSort {
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            len,
            direction,
            pass: 0,
            j: 0,
        }
    }
}

impl StepSequencer for BubbleSort {
    fn advance(&mut self, values: &mut [i64]) -> Option<Step> {
        loop {
            if self.pass + 1 >= self.len {
                return None;
            }
            if self.j + 1 + self.pass >= self.len {
                self.pass += 1;
                self.j = 0;
                continue;
            }

            let j = self.j;
            self.j += 1;
            if self.direction.precedes(values[j + 1], values[j]) {
                values.swap(j, j + 1);
                return Some(Step::new(Highlights::pair(j, j + 1)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::test_support::drain;
    use crate::sort::Role;

    #[test]
    fn test_hand_computed_trace() {
        let mut values = vec![5, 3, 8, 1];
        let mut sort = BubbleSort::new(values.len(), Direction::Ascending);

        let expected = [
            ((0, 1), [3, 5, 8, 1]),
            ((2, 3), [3, 5, 1, 8]),
            ((1, 2), [3, 1, 5, 8]),
            ((0, 1), [1, 3, 5, 8]),
        ];
        for ((left, right), after) in expected {
            let step = sort.advance(&mut values).unwrap();
            assert_eq!(values, after);
            assert_eq!(step.highlights.role(left), Some(Role::Primary));
            assert_eq!(step.highlights.role(right), Some(Role::Secondary));
            assert_eq!(step.highlights.len(), 2);
        }
        assert!(sort.advance(&mut values).is_none());
    }

    #[test]
    fn test_reversed_input_swaps_every_pair() {
        for n in [2usize, 5, 10, 31] {
            let mut values: Vec<i64> = (0..n as i64).rev().collect();
            let mut sort = BubbleSort::new(n, Direction::Ascending);
            let steps = drain(&mut sort, &mut values);
            assert_eq!(steps.len(), n * (n - 1) / 2);
            assert_eq!(values, (0..n as i64).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_descending_flips_comparisons() {
        let mut values = vec![1, 2, 3];
        let mut sort = BubbleSort::new(3, Direction::Descending);
        let steps = drain(&mut sort, &mut values);
        assert_eq!(values, vec![3, 2, 1]);
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_equal_neighbours_never_swap() {
        let mut values = vec![2, 2, 2, 2];
        let mut sort = BubbleSort::new(4, Direction::Descending);
        assert!(drain(&mut sort, &mut values).is_empty());
    }
}
