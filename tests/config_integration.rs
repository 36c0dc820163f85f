//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use aerofire::config::AppConfig;
use aerofire_core::Variant;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("aerofire_config_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("AEROFIRE_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("AEROFIRE_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_selects_variant() {
    std::env::set_var("AEROFIRE_GAME__VARIANT", "asteroid_blast");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("AEROFIRE_GAME__VARIANT");

    assert_eq!(config.game.variant, Variant::AsteroidBlast);
    assert!(config.game.to_sim_config().effects.is_some());
}

#[test]
#[serial]
fn test_default_file_loads() {
    std::env::remove_var("AEROFIRE_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.game.max_delta, 0.1);
    assert_eq!(config.camera.fov, 75.0);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user");
    fs::write(
        dir.join("default.toml"),
        "[game]\nvariant = \"ring_run\"\nmax_delta = 0.1\n",
    )
    .unwrap();
    fs::write(
        dir.join("user.toml"),
        "[game]\nvariant = \"asteroid_hunt\"\nmax_delta = 0.05\nseed = 9\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).ok();

    assert_eq!(config.game.variant, Variant::AsteroidHunt);
    assert_eq!(config.game.max_delta, 0.05);
    assert_eq!(config.game.seed, Some(9));
    // Untouched sections keep their defaults
    assert_eq!(config.window.width, 1280);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.game.variant, Variant::RingRun);
}

#[test]
#[serial]
fn test_bad_variant_is_an_error() {
    let dir = scratch_dir("bad");
    fs::write(dir.join("default.toml"), "[game]\nvariant = \"zeppelin\"\nmax_delta = 0.1\n").unwrap();

    let result = AppConfig::load_from(&dir);
    fs::remove_dir_all(&dir).ok();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
