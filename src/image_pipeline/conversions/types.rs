//! Frame processing configuration types

use crate::image_pipeline::edge::EdgeThresholds;
use crate::image_pipeline::edge::types::{DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD};

/// Configuration for the per-frame edge transform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingConfig {
    /// Hysteresis thresholds for the edge detector (80/200 by default)
    pub thresholds: EdgeThresholds,
}

impl ProcessingConfig {
    pub fn builder() -> ProcessingConfigBuilder {
        ProcessingConfigBuilder::default()
    }
}

/// Builder for ProcessingConfig
#[derive(Default)]
pub struct ProcessingConfigBuilder {
    low_threshold: Option<u32>,
    high_threshold: Option<u32>,
}

impl ProcessingConfigBuilder {
    pub fn low_threshold(mut self, low: u32) -> Self {
        self.low_threshold = Some(low);
        self
    }

    pub fn high_threshold(mut self, high: u32) -> Self {
        self.high_threshold = Some(high);
        self
    }

    pub fn build(self) -> ProcessingConfig {
        ProcessingConfig {
            thresholds: EdgeThresholds::new(
                self.low_threshold.unwrap_or(DEFAULT_LOW_THRESHOLD),
                self.high_threshold.unwrap_or(DEFAULT_HIGH_THRESHOLD),
            ),
        }
    }
}
