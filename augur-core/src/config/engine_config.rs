use serde::{Deserialize, Serialize};

use crate::errors::{AugurResult, EngineError};

use super::defaults;
use super::{ConfirmConfig, CoverageConfig, RevealConfig, SelectionConfig, UpdateConfig};

/// Top-level engine configuration, supplied per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Blend between flat baseline and popularity in the prior (0 = flat,
    /// 1 = fully popularity-driven).
    pub prior_alpha: f64,
    /// Confidence threshold used to binarize inferred attribute links.
    pub inferred_threshold: f64,
    /// Maximum number of questions before a forced terminal reveal.
    pub question_budget: u32,
    /// Turn indices at which a confirmation question is always inserted.
    pub forced_confirm_turns: Vec<u32>,
    pub coverage: CoverageConfig,
    pub selection: SelectionConfig,
    pub confirm: ConfirmConfig,
    pub update: UpdateConfig,
    pub reveal: RevealConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prior_alpha: defaults::DEFAULT_PRIOR_ALPHA,
            inferred_threshold: defaults::DEFAULT_INFERRED_THRESHOLD,
            question_budget: defaults::DEFAULT_QUESTION_BUDGET,
            forced_confirm_turns: Vec::new(),
            coverage: CoverageConfig::default(),
            selection: SelectionConfig::default(),
            confirm: ConfirmConfig::default(),
            update: UpdateConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Range-check every knob. Called once at session start.
    pub fn validate(&self) -> AugurResult<()> {
        fn unit(name: &str, v: f64) -> AugurResult<()> {
            if !(0.0..=1.0).contains(&v) {
                return Err(EngineError::InvalidConfig {
                    reason: format!("{name} must be in [0, 1], got {v}"),
                });
            }
            Ok(())
        }

        unit("prior_alpha", self.prior_alpha)?;
        unit("inferred_threshold", self.inferred_threshold)?;
        unit("coverage.min_ratio", self.coverage.min_ratio)?;
        unit("coverage.max_ratio", self.coverage.max_ratio)?;
        unit("selection.p_band_min", self.selection.p_band_min)?;
        unit("selection.p_band_max", self.selection.p_band_max)?;
        unit("confirm.band_min", self.confirm.band_min)?;
        unit("confirm.band_max", self.confirm.band_max)?;
        unit("reveal.threshold", self.reveal.threshold)?;
        unit("reveal.miss_penalty", self.reveal.miss_penalty)?;

        if self.coverage.min_ratio > self.coverage.max_ratio {
            return Err(EngineError::InvalidConfig {
                reason: "coverage.min_ratio exceeds coverage.max_ratio".into(),
            });
        }
        if self.selection.p_band_min > self.selection.p_band_max {
            return Err(EngineError::InvalidConfig {
                reason: "selection.p_band_min exceeds selection.p_band_max".into(),
            });
        }
        if self.confirm.band_min > self.confirm.band_max {
            return Err(EngineError::InvalidConfig {
                reason: "confirm.band_min exceeds confirm.band_max".into(),
            });
        }
        if self.confirm.threshold_divisor <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: "confirm.threshold_divisor must be positive".into(),
            });
        }
        if !(0.0..0.5).contains(&self.update.epsilon) {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "update.epsilon must be in [0, 0.5), got {}",
                    self.update.epsilon
                ),
            });
        }
        if self.update.beta <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: "update.beta must be positive".into(),
            });
        }
        if self.question_budget == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "question_budget must be at least 1".into(),
            });
        }
        Ok(())
    }
}
