//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use graha_config::{CyclePolicy, GrahaConfig, MixedPeerBucket};
use pretty_assertions::assert_eq;

#[test]
fn loads_resolution_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[resolution]
cycle_policy = "peer_base"
mixed_peer_bucket = "benefic"
"#,
        )?;

        let config: GrahaConfig = Figment::from(Serialized::defaults(GrahaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.resolution.cycle_policy, CyclePolicy::PeerBase);
        assert_eq!(config.resolution.mixed_peer_bucket, MixedPeerBucket::Benefic);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[resolution]
cycle_policy = "fail"
"#,
        )?;

        let config: GrahaConfig = Figment::from(Serialized::defaults(GrahaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.resolution.cycle_policy, CyclePolicy::Fail);
        assert_eq!(config.resolution.mixed_peer_bucket, MixedPeerBucket::Malefic);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".graha")?;
        jail.create_file(
            ".graha/config.toml",
            r#"
[resolution]
mixed_peer_bucket = "benefic"
"#,
        )?;

        let config = GrahaConfig::load().expect("config loads");
        assert_eq!(config.resolution.mixed_peer_bucket, MixedPeerBucket::Benefic);
        Ok(())
    });
}

#[test]
fn unknown_policy_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[resolution]
cycle_policy = "ignore"
"#,
        )?;

        let result = Figment::from(Serialized::defaults(GrahaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract::<GrahaConfig>();

        assert!(result.is_err());
        Ok(())
    });
}
