//! The array being visualized.

use rand::Rng;

use super::layout::{Canvas, LayoutMetrics};

/// Mutable sequence of integers plus the layout metrics derived from it.
///
/// Sequencers mutate [`SortArray::values_mut`] in place; the next frame
/// always shows the current contents.
#[derive(Debug, Clone)]
pub struct SortArray {
    values: Vec<i64>,
    canvas: Canvas,
    layout: LayoutMetrics,
}

impl SortArray {
    /// Create an array from explicit values.
    pub fn from_values(values: Vec<i64>, canvas: Canvas) -> Self {
        let layout = LayoutMetrics::compute(&values, canvas);
        Self {
            values,
            canvas,
            layout,
        }
    }

    /// Create an array of `size` random values in `[min, max]`.
    pub fn random<R: Rng>(rng: &mut R, size: usize, min: i64, max: i64, canvas: Canvas) -> Self {
        let mut array = Self::from_values(Vec::new(), canvas);
        array.reset(rng, size, min, max);
        array
    }

    /// Replace the contents with `size` uniformly random values in
    /// `[min, max]` and recompute the layout.
    ///
    /// Callers guarantee `min <= max` and `size >= 1`.
    pub fn reset<R: Rng>(&mut self, rng: &mut R, size: usize, min: i64, max: i64) {
        self.values = (0..size).map(|_| rng.gen_range(min..=max)).collect();
        self.layout = LayoutMetrics::compute(&self.values, self.canvas);
    }

    /// Recompute the layout for a new canvas size.
    pub fn relayout(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        self.layout = LayoutMetrics::compute(&self.values, canvas);
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// In-place handle given to the running sequencer, which swaps and
    /// assigns through it. The length cannot change.
    pub fn values_mut(&mut self) -> &mut [i64] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn layout(&self) -> &LayoutMetrics {
        &self.layout
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }
}
