//! CLI commands for notegather

pub mod dispatch;
pub mod gather;
pub mod journal;
pub mod links;
pub mod recent;
pub mod sanitize;

use notegather_core::config::GatherConfig;

/// Layer per-invocation flags over the loaded configuration
pub(crate) fn with_overrides(
    mut config: GatherConfig,
    depth: Option<u32>,
    max_chars: Option<usize>,
    exclude: &[String],
) -> GatherConfig {
    if let Some(depth) = depth {
        config.max_depth = depth;
    }
    if let Some(max_chars) = max_chars {
        config.max_chars = max_chars;
    }
    config.exclude_folders.extend(exclude.iter().cloned());
    config
}
