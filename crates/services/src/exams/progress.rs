use ielts_core::progress::ProgressBand;

/// Aggregated exam progress for the header bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExamProgress {
    pub answered: usize,
    pub total: usize,
    /// 0..=100. Writing papers use the word-target weighting instead of counts.
    pub percent: f64,
    pub band: ProgressBand,
}

impl ExamProgress {
    #[must_use]
    pub fn new(answered: usize, total: usize, percent: f64) -> Self {
        Self {
            answered,
            total,
            percent,
            band: ProgressBand::classify(percent),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    /// Rounded percentage for display.
    #[must_use]
    pub fn rounded(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = self.percent.round().clamp(0.0, 100.0) as u32;
        pct
    }
}
