use super::{Direction, Highlights, Step, StepSequencer};

/// A Lomuto partition of `low..=high` in progress.
#[derive(Debug)]
struct Partition {
    low: usize,
    high: usize,
    pivot: i64,
    /// Where the next element that precedes the pivot will be stored.
    store: usize,
    /// Next index to scan.
    j: usize,
}

/// Quick sort with Lomuto partitioning around the last element.
///
/// Every swap during a partition is a step, followed by one step that places
/// the pivot and reports its final index. Subranges are handled depth first,
/// left before right, from an explicit stack; already-ordered input degrades
/// to a chain of `n` partitions.
#[derive(Debug)]
pub struct QuickSort {
    direction: Direction,
    /// Inclusive ranges still to partition, top of stack first.
    pending: Vec<(usize, usize)>,
    active: Option<Partition>,
}

impl QuickSort {
    pub fn new(len: usize, direction: Direction) -> Self {
        let pending = if len > 1 { vec![(0, len - 1)] } else { Vec::new() };
        Self {
            direction,
            pending,
            active: None,
        }
    }
}

impl StepSequencer for QuickSort {
    fn advance(&mut self, values: &mut [i64]) -> Option<Step> {
        loop {
            let Some(part) = self.active.as_mut() else {
                let (low, high) = self.pending.pop()?;
                if low < high {
                    self.active = Some(Partition {
                        low,
                        high,
                        pivot: values[high],
                        store: low,
                        j: low,
                    });
                }
                continue;
            };

            while part.j < part.high {
                let j = part.j;
                part.j += 1;
                if self.direction.precedes(values[j], part.pivot) {
                    let store = part.store;
                    values.swap(store, j);
                    part.store += 1;
                    return Some(Step::new(Highlights::pair(store, j)));
                }
            }

            let Partition {
                low, high, store, ..
            } = *part;
            self.active = None;
            values.swap(store, high);

            // Pushed right first so the left subrange is finished first.
            if store + 1 < high {
                self.pending.push((store + 1, high));
            }
            if store > low + 1 {
                self.pending.push((low, store - 1));
            }

            return Some(Step {
                highlights: Highlights::pair(store, high),
                pivot: Some(store),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::test_support::drain;

    #[test]
    fn test_sorted_input_is_worst_case() {
        for n in [2usize, 3, 8, 40] {
            let mut values: Vec<i64> = (0..n as i64).collect();
            let mut sort = QuickSort::new(n, Direction::Ascending);
            let steps = drain(&mut sort, &mut values);

            // Partitions of size n, n-1, ..., 2 each swap every scanned
            // element into place and then place the pivot.
            assert_eq!(steps.len(), n * (n + 1) / 2 - 1);

            let pivots: Vec<usize> = steps.iter().filter_map(|s| s.pivot).collect();
            assert_eq!(pivots, (1..n).rev().collect::<Vec<_>>());
            assert_eq!(values, (0..n as i64).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_partition_trace() {
        let mut values = vec![3, 7, 1, 4];
        let mut sort = QuickSort::new(4, Direction::Ascending);

        // Pivot 4: 3 stays at 0, 1 swaps into 1.
        let step = sort.advance(&mut values).unwrap();
        assert_eq!(step.highlights, Highlights::pair(0, 0));
        let step = sort.advance(&mut values).unwrap();
        assert_eq!(values, vec![3, 1, 7, 4]);
        assert_eq!(step.highlights, Highlights::pair(1, 2));

        let step = sort.advance(&mut values).unwrap();
        assert_eq!(values, vec![3, 1, 4, 7]);
        assert_eq!(step.pivot, Some(2));
        assert_eq!(step.highlights, Highlights::pair(2, 3));

        // Left subrange [3, 1] with pivot 1: no swaps, pivot lands at 0.
        let step = sort.advance(&mut values).unwrap();
        assert_eq!(step.pivot, Some(0));
        assert_eq!(values, vec![1, 3, 4, 7]);

        assert!(sort.advance(&mut values).is_none());
    }

    #[test]
    fn test_left_subrange_before_right() {
        let mut values = vec![9, 8, 5, 2, 1, 3];
        let mut sort = QuickSort::new(values.len(), Direction::Ascending);
        let pivots: Vec<usize> = drain(&mut sort, &mut values)
            .iter()
            .filter_map(|s| s.pivot)
            .collect();
        assert_eq!(values, vec![1, 2, 3, 5, 8, 9]);
        // First pivot 3 lands at 2; the left range 0..=1 is partitioned
        // before anything right of it.
        assert_eq!(pivots[0], 2);
        assert!(pivots[1] < 2);
    }

    #[test]
    fn test_descending_duplicates() {
        let mut values = vec![2, 4, 2, 1, 4];
        let mut sort = QuickSort::new(5, Direction::Descending);
        drain(&mut sort, &mut values);
        assert_eq!(values, vec![4, 4, 2, 2, 1]);
    }
}
