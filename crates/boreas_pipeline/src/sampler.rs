//! Sliding-window slicing of the time series.

use crate::{Dataset, ObservationPair};
use boreas_core::SamplerConfig;

/// A fixed-length contiguous slice of the time series.
///
/// Windows are immutable once sliced; the index increments once per window,
/// not per trial.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct TimeSeriesWindow {
    /// Position of this window in the run, starting at 0
    index: usize,
    /// The rows covered by this window
    rows: Vec<ObservationPair>,
}

impl TimeSeriesWindow {
    pub(crate) fn new(index: usize, rows: Vec<ObservationPair>) -> Self {
        Self { index, rows }
    }

    /// Number of rows in the window.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the window holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Line-per-row rendering of the window, `"<forecast>  <actual>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use boreas_core::SamplerConfig;
    /// use boreas_pipeline::{Dataset, ObservationPair, WindowSampler};
    ///
    /// let dataset = Dataset::from_pairs(vec![
    ///     ObservationPair::new(5.2, 4.9),
    ///     ObservationPair::new(6.1, 6.3),
    /// ]);
    /// let config = SamplerConfig::builder()
    ///     .window_length(2)
    ///     .start_offset(0)
    ///     .upper_bound(2)
    ///     .build();
    ///
    /// let window = WindowSampler::new(&dataset, config).next().unwrap();
    /// assert_eq!(window.transcript(), "5.2  4.9\n6.1  6.3");
    /// ```
    pub fn transcript(&self) -> String {
        self.rows
            .iter()
            .map(|row| format!("{}  {}", row.forecast(), row.actual()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Slices a dataset into successive fixed-length windows.
///
/// Produces `dataset[S..S+W]`, `dataset[S+1..S+1+W]`, … for start offset `S`
/// and window length `W`, as long as the window end stays within the
/// configured upper bound and the dataset. A dataset too short for even the
/// first window yields zero items, which is an empty run rather than an
/// error.
#[derive(Debug)]
pub struct WindowSampler<'a> {
    rows: &'a [ObservationPair],
    config: SamplerConfig,
    offset: usize,
    next_index: usize,
}

impl<'a> WindowSampler<'a> {
    /// Creates a sampler over a dataset.
    pub fn new(dataset: &'a Dataset, config: SamplerConfig) -> Self {
        Self {
            rows: dataset.rows(),
            config,
            offset: *config.start_offset(),
            next_index: 0,
        }
    }
}

impl Iterator for WindowSampler<'_> {
    type Item = TimeSeriesWindow;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.offset + self.config.window_length();
        if end > *self.config.upper_bound() || end > self.rows.len() {
            return None;
        }

        let window =
            TimeSeriesWindow::new(self.next_index, self.rows[self.offset..end].to_vec());
        self.offset += 1;
        self.next_index += 1;
        Some(window)
    }
}
