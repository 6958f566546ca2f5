//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::RunConfig;
use std::path::Path;

/// Loads and validates a `vfpga.toml` run configuration from a project directory.
pub fn load_config(project_dir: &Path) -> Result<RunConfig, ConfigError> {
    let config_path = project_dir.join("vfpga.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `vfpga.toml` run configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<RunConfig, ConfigError> {
    let config: RunConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that the configuration describes a usable run.
fn validate_config(config: &RunConfig) -> Result<(), ConfigError> {
    if config.fabric.width == 0 || config.fabric.height == 0 {
        return Err(ConfigError::ValidationError(format!(
            "fabric dimensions must be non-zero, got {}x{}",
            config.fabric.width, config.fabric.height
        )));
    }
    if !(0.0..1.0).contains(&config.placement.cooling_rate) {
        return Err(ConfigError::ValidationError(format!(
            "cooling_rate must be in [0, 1), got {}",
            config.placement.cooling_rate
        )));
    }
    if config.routing.max_iterations == 0 {
        return Err(ConfigError::ValidationError(
            "routing.max_iterations must be non-zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_fabric_only_config_fills_defaults() {
        let toml = r#"
[fabric]
width = 10
height = 10
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.fabric.bram_column, 3);
        assert_eq!(config.fabric.dsp_column, 7);
        assert_eq!(config.placement.seed, 0);
        assert_eq!(config.placement.cooling_rate, 0.95);
        assert_eq!(config.placement.moves_per_temp_multiplier, 10);
        assert_eq!(config.routing.max_iterations, 50);
        assert_eq!(config.routing.initial_pres_fac, 0.5);
        assert_eq!(config.routing.pres_fac_growth, 1.5);
        assert_eq!(config.routing.hist_fac, 1.0);
        assert_eq!(config.timing.lut_delay_ps, 200.0);
    }

    #[test]
    fn full_config_overrides_every_section() {
        let toml = r#"
[fabric]
width = 20
height = 16
bram_column = 4
dsp_column = 12

[placement]
seed = 99
initial_temp_override = 50.0
cooling_rate = 0.9
moves_per_temp_multiplier = 5

[routing]
max_iterations = 20
initial_pres_fac = 1.0
pres_fac_growth = 2.0
hist_fac = 0.5

[timing]
lut_delay_ps = 150.0
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.fabric.bram_column, 4);
        assert_eq!(config.fabric.dsp_column, 12);
        assert_eq!(config.placement.seed, 99);
        assert_eq!(config.placement.initial_temp_override, Some(50.0));
        assert_eq!(config.routing.max_iterations, 20);
        assert_eq!(config.timing.lut_delay_ps, 150.0);
    }

    #[test]
    fn zero_width_is_rejected() {
        let toml = r#"
[fabric]
width = 0
height = 10
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn zero_height_is_rejected() {
        let toml = r#"
[fabric]
width = 10
height = 0
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn out_of_range_cooling_rate_is_rejected() {
        let toml = r#"
[fabric]
width = 10
height = 10

[placement]
cooling_rate = 1.5
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn zero_max_iterations_is_rejected() {
        let toml = r#"
[fabric]
width = 10
height = 10

[routing]
max_iterations = 0
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let toml = "this is not valid toml {{{}}}";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_fabric_section_errors() {
        let toml = "";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
