//! Subcommand implementations.
//!
//! Every playback command resolves a [`Session`] first: config file, then
//! flag overrides, then validation. Custom values are parsed before any
//! controller exists, so invalid input never reaches playback.

pub mod explore;
pub mod info;
pub mod play;
pub mod trace;

use sortviz_core::{SortAlgorithm, parse_custom_values};
use sortviz_runtime::{PlaybackClock, PlaybackConfig, PlaybackController};

use crate::cli::{ArrayArgs, GlobalArgs};
use crate::error::{CliError, Result};

/// Resolved inputs for one playback command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub config: PlaybackConfig,
    /// Values from `--values`; `None` means a random array.
    pub values: Option<Vec<i32>>,
}

impl Session {
    /// Merge the config file with flag overrides and validate the result.
    pub fn resolve(global: &GlobalArgs, array: &ArrayArgs, speed: Option<u8>) -> Result<Self> {
        let mut config = match &global.config {
            Some(path) => {
                PlaybackConfig::from_file(path).map_err(|source| CliError::Config {
                    path: path.clone(),
                    source,
                })?
            }
            None => PlaybackConfig::default(),
        };
        if let Some(seed) = array.seed {
            config.seed = Some(seed);
        }
        if let Some(size) = array.size {
            config.default_size = size;
        }
        if let Some(order) = array.order {
            config = config.with_order(order.into());
        }
        if let Some(speed) = speed {
            config.initial_speed = speed;
        }
        let config = config.validated().map_err(CliError::InvalidConfig)?;

        let values = array
            .values
            .as_deref()
            .map(parse_custom_values)
            .transpose()?;

        tracing::debug!(
            algorithm = array.algorithm.kind().slug(),
            size = config.default_size,
            custom = values.is_some(),
            seed = config.seed,
            "session resolved"
        );
        Ok(Self { config, values })
    }

    /// Controller showing the session's array.
    pub fn controller<A: SortAlgorithm, C: PlaybackClock>(
        &self,
        clock: C,
    ) -> PlaybackController<A, C> {
        let mut ctrl = PlaybackController::new(self.config.clone(), clock);
        if let Some(values) = &self.values {
            ctrl.reset(Some(values.as_slice()), None);
        }
        ctrl
    }
}
