//! Commit policy resolution for bim-meta
//!
//! Multi-tier resolution per setting: CLI → ENV → TOML → built-in default.
//! The command-line tier is applied last by [`apply_cli_overrides`].

use crate::services::CommitPolicy;
use bim_common::config::{env_bool, TomlConfig};
use tracing::{debug, info};

/// Environment override for `CommitPolicy::overwrite_description`
pub const OVERWRITE_DESCRIPTION_ENV: &str = "BIM_OVERWRITE_DESCRIPTION";

/// Environment override for `CommitPolicy::overwrite_caption`
pub const OVERWRITE_CAPTION_ENV: &str = "BIM_OVERWRITE_CAPTION";

/// Resolve one boolean setting, logging where it came from
fn resolve_flag(name: &str, env_var: &str, toml_value: Option<bool>, default: bool) -> bool {
    if let Some(value) = env_bool(env_var) {
        if toml_value.is_some() {
            debug!("{} set in both environment and TOML, using environment", name);
        }
        info!("{} = {} (environment)", name, value);
        return value;
    }

    if let Some(value) = toml_value {
        info!("{} = {} (TOML config)", name, value);
        return value;
    }

    debug!("{} = {} (default)", name, default);
    default
}

/// Build the commit policy from environment and TOML config
pub fn resolve_commit_policy(toml_config: &TomlConfig) -> CommitPolicy {
    let defaults = CommitPolicy::default();

    CommitPolicy {
        overwrite_description: resolve_flag(
            "overwrite_description",
            OVERWRITE_DESCRIPTION_ENV,
            toml_config.commit.overwrite_description,
            defaults.overwrite_description,
        ),
        overwrite_caption: resolve_flag(
            "overwrite_caption",
            OVERWRITE_CAPTION_ENV,
            toml_config.commit.overwrite_caption,
            defaults.overwrite_caption,
        ),
    }
}

/// Apply the `commit` subcommand flags on top of a resolved policy
///
/// Flags only ever switch a setting in their own direction; an absent flag
/// leaves the ENV/TOML/default value in place.
pub fn apply_cli_overrides(
    mut policy: CommitPolicy,
    keep_description: bool,
    overwrite_caption: bool,
) -> CommitPolicy {
    if keep_description {
        info!("overwrite_description = false (command line)");
        policy.overwrite_description = false;
    }
    if overwrite_caption {
        info!("overwrite_caption = true (command line)");
        policy.overwrite_caption = true;
    }
    policy
}
