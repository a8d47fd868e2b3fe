//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use bouncyballs::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("BOUNCE_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("BOUNCE_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("BOUNCE_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Bouncy Balls");
    assert_eq!(config.window.width, 607.5);
    assert_eq!(config.window.height, 1080.0);
    assert_eq!(config.physics.gravity, [0.0, 900.0]);
    assert_eq!(config.rendering.target_fps, 60);
}

#[test]
#[serial]
fn test_env_override_nested_numeric() {
    std::env::set_var("BOUNCE_SCENE__BALL_RADIUS", "25.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.scene.ball_radius, 25.0);
    std::env::remove_var("BOUNCE_SCENE__BALL_RADIUS");
}
