use super::{Direction, Highlights, Role, Step, StepSequencer};

/// Insertion sort. Each shift of the element being inserted is one step.
#[derive(Debug)]
pub struct InsertionSort {
    len: usize,
    direction: Direction,
    /// Next index to insert.
    next: usize,
    /// Current position of the element being inserted, if any.
    cursor: Option<usize>,
}

impl InsertionSort {
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            len,
            direction,
            next: 1,
            cursor: None,
        }
    }
}

impl StepSequencer for InsertionSort {
    fn advance(&mut self, values: &mut [i64]) -> Option<Step> {
        loop {
            let Some(k) = self.cursor else {
                if self.next >= self.len {
                    return None;
                }
                self.cursor = Some(self.next);
                self.next += 1;
                continue;
            };

            if k > 0 && self.direction.precedes(values[k], values[k - 1]) {
                values.swap(k - 1, k);
                let k = k - 1;
                self.cursor = Some(k);

                let mut highlights = Highlights::new();
                if k > 0 {
                    highlights.insert(k - 1, Role::Primary);
                }
                highlights.insert(k, Role::Secondary);
                return Some(Step::new(highlights));
            }
            self.cursor = None;
        }
    }
}
