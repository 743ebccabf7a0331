#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::config::loader::{
        CONFIG_PATH_ENV, ConfigError, get_config_file_path, load_config_from, load_config_from_file,
        save_config_to,
    };
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");

        // Loading a missing file writes and returns the defaults
        let config = load_config_from(&config_path).expect("Failed to load default config");

        assert!(config_path.exists(), "Config file should have been created");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            gravity_interval_ms: 300,
            seed: Some(99),
            show_grid: true,
        };
        save_config_to(&config_path, &config).expect("Failed to save config");

        let loaded_config = load_config_from(&config_path).expect("Failed to load config");
        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("nested").join("dir").join("config.toml");

        save_config_to(&config_path, &Config::default()).expect("Failed to save config");
        assert!(config_path.exists());
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "invalid toml content ! @ #").expect("Failed to write config");

        match load_config_from(&config_path) {
            Err(ConfigError::Parse(_)) => {}
            Ok(_) => panic!("Expected error when loading invalid config"),
            Err(e) => panic!("Unexpected error type: {e:?}"),
        }
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "gravity_interval_ms = 0\n").expect("Failed to write config");

        let err = load_config_from(&config_path).expect_err("zero interval should be rejected");
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("gravity_interval_ms"));
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "show_grid = true\n").expect("Failed to write config");

        let loaded_config = load_config_from(&config_path).expect("Failed to load partial config");
        assert!(loaded_config.show_grid);
        assert_eq!(loaded_config.gravity_interval_ms, 500);
        assert_eq!(loaded_config.seed, None);
    }

    #[test]
    fn test_config_env_var_override() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("override_config.toml");
        let config = Config {
            gravity_interval_ms: 750,
            seed: None,
            show_grid: true,
        };

        // No other test reads this variable
        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, &config_path);
        }
        let resolved = get_config_file_path();
        let saved = save_config_to(&resolved, &config);
        let loaded = load_config_from_file();
        unsafe {
            std::env::remove_var(CONFIG_PATH_ENV);
        }

        assert_eq!(resolved, config_path);
        saved.expect("Failed to save config");
        assert!(config_path.exists());
        assert_eq!(loaded.expect("Failed to load config"), config);
    }
}
