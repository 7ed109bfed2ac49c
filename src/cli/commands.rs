//! Subcommand handlers.

use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::config::{default_path, Config, ConfigError, DEFAULT_CONFIG};
use crate::glyph::DEFAULT_ASPECT_CORRECTION;

/// Handle config subcommand actions.
///
/// `path` is the `--config` override; without it the default location is used.
pub fn handle_config_action(action: &ConfigAction, path: Option<&Path>) -> Result<(), ConfigError> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = if config_path.exists() {
                Config::load_from_explicit(&config_path)?
            } else {
                Config::default()
            };
            print!("{}", describe(&config, &config_path));
            Ok(())
        }
        ConfigAction::Init => {
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

/// Human-readable summary of the effective settings.
fn describe(config: &Config, config_path: &Path) -> String {
    let render = &config.render;
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let status = if config_path.exists() {
        "exists"
    } else {
        "not found"
    };

    format!(
        "Current configuration:\n  Reverse: {}\n  Interpolation: {}\n  Aspect correction: {}\n  Allow empty output: {}\n\nConfig file: {} ({})\n",
        yes_no(render.reverse),
        render.interpolation.unwrap_or_default(),
        render.aspect_correction.unwrap_or(DEFAULT_ASPECT_CORRECTION),
        yes_no(render.allow_empty),
        config_path.display(),
        status
    )
}

/// Write the default config file, refusing to overwrite an existing one.
fn init_config(config_path: &Path) -> Result<(), ConfigError> {
    if config_path.exists() {
        return Err(ConfigError::AlreadyExists(config_path.to_path_buf()));
    }

    let io_error = |source| ConfigError::IoError {
        path: config_path.to_path_buf(),
        source,
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_config(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\n").unwrap();

        let err = init_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[render]\n");
    }

    #[test]
    fn test_describe_defaults() {
        let text = describe(&Config::default(), Path::new("/nonexistent/config.toml"));
        assert!(text.contains("Reverse: no"));
        assert!(text.contains("Interpolation: bicubic"));
        assert!(text.contains("Aspect correction: 1.5"));
        assert!(text.contains("Allow empty output: yes"));
        assert!(text.contains("(not found)"));
    }

    #[test]
    fn test_show_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\nreverse = true\n").unwrap();

        handle_config_action(&ConfigAction::Show, Some(&path)).unwrap();

        let text = describe(&Config::load_from_explicit(&path).unwrap(), &path);
        assert!(text.contains("Reverse: yes"), "{}", text);
        assert!(text.contains("Interpolation: bicubic"), "{}", text);
        assert!(text.contains("(exists)"), "{}", text);
    }

    #[test]
    fn test_show_rejects_bad_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render\nreverse = ").unwrap();

        let err = handle_config_action(&ConfigAction::Show, Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
