use super::{Direction, Highlights, Role, Step, StepSequencer};

/// Selection sort.
///
/// Every scan comparison is a step, whether or not the best candidate
/// changed, plus one step for each swap that moves a candidate into place.
#[derive(Debug)]
pub struct SelectionSort {
    len: usize,
    direction: Direction,
    /// Position being filled.
    i: usize,
    /// Next index to scan.
    j: usize,
    /// Best candidate seen so far in this scan.
    best: usize,
}

impl SelectionSort {
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            len,
            direction,
            i: 0,
            j: 1,
            best: 0,
        }
    }
}

impl StepSequencer for SelectionSort {
    fn advance(&mut self, values: &mut [i64]) -> Option<Step> {
        loop {
            if self.i >= self.len {
                return None;
            }

            if self.j < self.len {
                let j = self.j;
                self.j += 1;
                if self.direction.precedes(values[j], values[self.best]) {
                    self.best = j;
                }
                let highlights = Highlights::new()
                    .with(j, Role::Secondary)
                    .with(self.best, Role::Primary);
                return Some(Step::new(highlights));
            }

            let (i, best) = (self.i, self.best);
            self.i += 1;
            self.j = self.i + 1;
            self.best = self.i;

            if best != i {
                values.swap(i, best);
                return Some(Step::new(Highlights::pair(i, best)));
            }
        }
    }
}
