//! Configuration for the sales-percentage sweep

use std::iter::StepBy;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::SweepConfigError;

/// Upper bound on the number of raw samples in one sweep
pub const MAX_POINTS: u64 = 10_000;

/// Inclusive integer range of sales percentages to sample.
///
/// Only constructed through [`SweepConfig::new`] so the step is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepConfig {
    start_percent: u32,
    end_percent: u32,
    step_percent: u32,
}

impl Default for SweepConfig {
    /// 65% to 100% in 1% steps: 36 raw points
    fn default() -> Self {
        Self {
            start_percent: 65,
            end_percent: 100,
            step_percent: 1,
        }
    }
}

impl SweepConfig {
    pub fn new(
        start_percent: u32,
        end_percent: u32,
        step_percent: u32,
    ) -> Result<Self, SweepConfigError> {
        if step_percent == 0 {
            return Err(SweepConfigError::ZeroStep);
        }
        if start_percent > end_percent {
            return Err(SweepConfigError::InvertedRange {
                start: start_percent,
                end: end_percent,
            });
        }
        let count = raw_count(start_percent, end_percent, step_percent);
        if count > MAX_POINTS {
            return Err(SweepConfigError::TooManyPoints {
                count,
                limit: MAX_POINTS,
            });
        }
        Ok(Self {
            start_percent,
            end_percent,
            step_percent,
        })
    }

    pub fn start_percent(&self) -> u32 {
        self.start_percent
    }

    pub fn end_percent(&self) -> u32 {
        self.end_percent
    }

    pub fn step_percent(&self) -> u32 {
        self.step_percent
    }

    /// Sampled percentages in ascending order
    pub fn percentages(&self) -> StepBy<RangeInclusive<u32>> {
        (self.start_percent..=self.end_percent).step_by(self.step_percent as usize)
    }

    pub fn point_count(&self) -> usize {
        raw_count(self.start_percent, self.end_percent, self.step_percent) as usize
    }
}

fn raw_count(start: u32, end: u32, step: u32) -> u64 {
    u64::from(end - start) / u64::from(step) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_36_points() {
        let config = SweepConfig::default();
        assert_eq!(config.point_count(), 36);
        let points: Vec<u32> = config.percentages().collect();
        assert_eq!(points.first(), Some(&65));
        assert_eq!(points.last(), Some(&100));
        assert_eq!(points.len(), 36);
    }

    #[test]
    fn test_step_that_skips_end() {
        let config = SweepConfig::new(60, 100, 15).unwrap();
        assert_eq!(config.percentages().collect::<Vec<_>>(), vec![60, 75, 90]);
        assert_eq!(config.point_count(), 3);
    }

    #[test]
    fn test_invalid_ranges() {
        assert_eq!(SweepConfig::new(10, 20, 0), Err(SweepConfigError::ZeroStep));
        assert_eq!(
            SweepConfig::new(90, 80, 1),
            Err(SweepConfigError::InvertedRange { start: 90, end: 80 })
        );
    }

    #[test]
    fn test_point_cap() {
        assert_eq!(
            SweepConfig::new(0, u32::MAX, 1),
            Err(SweepConfigError::TooManyPoints {
                count: u64::from(u32::MAX) + 1,
                limit: MAX_POINTS,
            })
        );
        assert_eq!(
            SweepConfig::new(0, 10_000, 1),
            Err(SweepConfigError::TooManyPoints {
                count: 10_001,
                limit: MAX_POINTS,
            })
        );

        let widest = SweepConfig::new(0, 9_999, 1).unwrap();
        assert_eq!(widest.point_count(), 10_000);

        let sparse = SweepConfig::new(0, u32::MAX, u32::MAX).unwrap();
        assert_eq!(sparse.point_count(), 2);
        assert_eq!(sparse.percentages().collect::<Vec<_>>(), vec![0, u32::MAX]);
    }
}
