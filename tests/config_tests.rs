use lcd_panel::{Color, ConfigError, PanelConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = PanelConfig::default();
    assert_eq!(config.rows, 8);
    assert_eq!(config.columns, 5);
    assert_eq!(config.pixel_width, 2.0);
    assert_eq!(config.pixel_height, 2.0);
    assert_eq!(config.intra_spacing, 0.4);
    assert_eq!(config.blink_interval_ms, 600);
    assert_eq!(config.bar_color.to_hex(), "#8FB43A");
    assert_eq!(config.bar_glow_color.to_hex(), "#1A2600");
}

#[test]
fn test_config_builder() {
    let config = PanelConfig::new()
        .with_grid(11, 5)
        .with_pixel_size(3.0, 1.5)
        .with_intra_spacing(0.0)
        .with_blink_interval_ms(400);
    assert_eq!((config.rows, config.columns), (11, 5));
    assert_eq!(config.step_x(), 3.0);
    assert_eq!(config.step_y(), 1.5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_round_trip_through_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("lcd.yaml");
    let config = PanelConfig::new().with_colors(Color::new(0, 0x40, 0), Color::new(0, 0xff, 0));

    config.save_yaml(&path)?;
    let written = fs::read_to_string(&path)?;
    assert!(written.contains("#00FF00"));

    assert_eq!(PanelConfig::load_yaml(&path)?, config);
    Ok(())
}

#[test]
fn test_invalid_yaml_surfaces_as_config_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("lcd.yaml");
    fs::write(&path, "rows: [not, a, number]\n").expect("write");

    let err = PanelConfig::load_yaml(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_save_refuses_invalid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("lcd.yaml");
    let result = PanelConfig::new().with_blink_interval_ms(0).save_yaml(&path);
    assert!(result.is_err());
    assert!(!path.exists());
}
