use super::{Direction, Highlights, Role, Step, StepSequencer};

/// Pending work for the merge sort stack.
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Sort the half-open range `start..end`.
    Sort { start: usize, end: usize },
    /// Merge the sorted runs `start..mid` and `mid..end`.
    Merge { start: usize, mid: usize, end: usize },
}

/// A merge in progress, reading from copies of its two runs.
#[derive(Debug)]
struct ActiveMerge {
    left: Vec<i64>,
    right: Vec<i64>,
    li: usize,
    ri: usize,
    current: usize,
    /// The compare step for the current pair has already been shown.
    compared: bool,
}

impl ActiveMerge {
    fn new(values: &[i64], start: usize, mid: usize, end: usize) -> Self {
        Self {
            left: values[start..mid].to_vec(),
            right: values[mid..end].to_vec(),
            li: 0,
            ri: 0,
            current: start,
            compared: false,
        }
    }

    fn advance(&mut self, values: &mut [i64], direction: Direction) -> Option<Step> {
        let current = self.current;

        match (self.left.get(self.li), self.right.get(self.ri)) {
            (Some(&l), Some(&r)) => {
                // Show the slot about to be filled before deciding what goes in it.
                if !self.compared {
                    self.compared = true;
                    return Some(Step::new(Highlights::new().with(current, Role::Secondary)));
                }
                self.compared = false;
                if direction.precedes(l, r) {
                    values[current] = l;
                    self.li += 1;
                } else {
                    values[current] = r;
                    self.ri += 1;
                }
            }
            (Some(&l), None) => {
                values[current] = l;
                self.li += 1;
            }
            (None, Some(&r)) => {
                values[current] = r;
                self.ri += 1;
            }
            (None, None) => return None,
        }

        self.current += 1;
        Some(Step::new(Highlights::new().with(current, Role::Primary)))
    }
}

/// Top-down merge sort driven by an explicit work stack.
///
/// Ranges are processed depth first: left half, right half, then the merge
/// of the two. While both runs still have elements, every placement costs
/// two steps (compare, then place); draining the leftover run costs one
/// step per element.
#[derive(Debug)]
pub struct MergeSort {
    direction: Direction,
    stack: Vec<Task>,
    active: Option<ActiveMerge>,
}

impl MergeSort {
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            direction,
            stack: vec![Task::Sort { start: 0, end: len }],
            active: None,
        }
    }
}

impl StepSequencer for MergeSort {
    fn advance(&mut self, values: &mut [i64]) -> Option<Step> {
        loop {
            if let Some(merge) = self.active.as_mut() {
                if let Some(step) = merge.advance(values, self.direction) {
                    return Some(step);
                }
                self.active = None;
            }

            match self.stack.pop()? {
                Task::Sort { start, end } => {
                    if end - start > 1 {
                        let mid = start + (end - start) / 2;
                        self.stack.push(Task::Merge { start, mid, end });
                        self.stack.push(Task::Sort { start: mid, end });
                        self.stack.push(Task::Sort { start, end: mid });
                    }
                }
                Task::Merge { start, mid, end } => {
                    self.active = Some(ActiveMerge::new(values, start, mid, end));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::test_support::drain;

    #[test]
    fn test_compare_step_before_place_step() {
        let mut values = vec![2, 1];
        let mut sort = MergeSort::new(2, Direction::Ascending);

        let compare = sort.advance(&mut values).unwrap();
        assert_eq!(values, vec![2, 1]);
        assert_eq!(compare.highlights, Highlights::new().with(0, Role::Secondary));

        let place = sort.advance(&mut values).unwrap();
        assert_eq!(values, vec![1, 1]);
        assert_eq!(place.highlights, Highlights::new().with(0, Role::Primary));

        // Drain the leftover run.
        let place = sort.advance(&mut values).unwrap();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(place.highlights, Highlights::new().with(1, Role::Primary));

        assert!(sort.advance(&mut values).is_none());
    }

    #[test]
    fn test_step_count_on_reversed_four() {
        let mut values = vec![4, 3, 2, 1];
        let mut sort = MergeSort::new(4, Direction::Ascending);
        let steps = drain(&mut sort, &mut values);
        assert_eq!(values, vec![1, 2, 3, 4]);
        // Two 2-element merges of 3 steps, then one 4-element merge with
        // two compared placements (4 steps) and a 2-element drain.
        assert_eq!(steps.len(), 3 + 3 + 6);
    }

    #[test]
    fn test_depth_first_left_before_right() {
        let mut values = vec![2, 1, 4, 3];
        let mut sort = MergeSort::new(4, Direction::Ascending);
        let touched: Vec<usize> = drain(&mut sort, &mut values)
            .iter()
            .flat_map(|s| s.highlights.iter().map(|(i, _)| i).collect::<Vec<_>>())
            .collect();
        assert_eq!(&touched[..3], &[0, 0, 1]);
        assert_eq!(&touched[3..6], &[2, 2, 3]);
        assert_eq!(touched[6], 0);
    }

    #[test]
    fn test_descending_merge() {
        let mut values = vec![1, 5, 2, 5, 3];
        let mut sort = MergeSort::new(5, Direction::Descending);
        drain(&mut sort, &mut values);
        assert_eq!(values, vec![5, 5, 3, 2, 1]);
    }
}
