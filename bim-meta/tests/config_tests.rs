//! Commit policy resolution: CLI → ENV → TOML → default
//!
//! Tests touching BIM_* environment variables run #[serial].

use bim_common::config::{CommitSettings, TomlConfig};
use bim_meta::config::{
    apply_cli_overrides, resolve_commit_policy, OVERWRITE_CAPTION_ENV, OVERWRITE_DESCRIPTION_ENV,
};
use bim_meta::CommitPolicy;
use serial_test::serial;
use std::env;

fn clear_env() {
    env::remove_var(OVERWRITE_DESCRIPTION_ENV);
    env::remove_var(OVERWRITE_CAPTION_ENV);
}

#[test]
#[serial]
fn test_defaults_without_config() {
    clear_env();

    let policy = resolve_commit_policy(&TomlConfig::default());

    assert_eq!(policy, CommitPolicy::default());
    assert!(policy.overwrite_description);
    assert!(!policy.overwrite_caption);
}

#[test]
#[serial]
fn test_toml_overrides_defaults() {
    clear_env();
    let toml = TomlConfig {
        commit: CommitSettings {
            overwrite_description: Some(false),
            overwrite_caption: Some(true),
        },
        ..Default::default()
    };

    let policy = resolve_commit_policy(&toml);

    assert!(!policy.overwrite_description);
    assert!(policy.overwrite_caption);
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();
    env::set_var(OVERWRITE_DESCRIPTION_ENV, "true");
    let toml = TomlConfig {
        commit: CommitSettings {
            overwrite_description: Some(false),
            overwrite_caption: None,
        },
        ..Default::default()
    };

    let policy = resolve_commit_policy(&toml);

    assert!(policy.overwrite_description);
    assert!(!policy.overwrite_caption);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_value_ignored() {
    clear_env();
    env::set_var(OVERWRITE_CAPTION_ENV, "sometimes");

    let policy = resolve_commit_policy(&TomlConfig::default());

    assert!(!policy.overwrite_caption);

    clear_env();
}

#[test]
#[serial]
fn test_cli_flags_override_env_and_toml() {
    clear_env();
    env::set_var(OVERWRITE_DESCRIPTION_ENV, "yes");
    let toml = TomlConfig {
        commit: CommitSettings {
            overwrite_description: Some(true),
            overwrite_caption: Some(false),
        },
        ..Default::default()
    };

    let policy = apply_cli_overrides(resolve_commit_policy(&toml), true, true);

    assert!(!policy.overwrite_description);
    assert!(policy.overwrite_caption);

    clear_env();
}

#[test]
#[serial]
fn test_absent_cli_flags_keep_resolved_policy() {
    clear_env();
    let toml = TomlConfig {
        commit: CommitSettings {
            overwrite_description: Some(false),
            overwrite_caption: Some(true),
        },
        ..Default::default()
    };

    let resolved = resolve_commit_policy(&toml);
    let policy = apply_cli_overrides(resolved, false, false);

    assert_eq!(policy, resolved);
    assert!(!policy.overwrite_description);
    assert!(policy.overwrite_caption);
}
