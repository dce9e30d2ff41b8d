mod process;
mod system;

pub use process::*;
pub use system::*;

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const CONFIG_PATHS: [&str; 3] = ["config.toml", "config/config.toml", "../config.toml"];

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    pub process: Option<ProcessConfig>,
    pub system: Option<SystemConfig>,
}

impl Config {
    pub fn from_toml_str(config_str: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(config_str)?)
    }

    pub fn process(&self) -> ProcessConfig {
        self.process.clone().unwrap_or_default()
    }

    pub fn system(&self) -> SystemConfig {
        self.system.clone().unwrap_or_default()
    }
}

/// First of `CONFIG_PATHS` that exists below `base`.
pub fn find_config_path(base: &Path) -> Option<PathBuf> {
    CONFIG_PATHS
        .iter()
        .map(|path| base.join(path))
        .find(|path| path.exists())
}

pub fn get_config_path() -> Option<String> {
    find_config_path(Path::new("")).map(|path| path.to_string_lossy().into_owned())
}

pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = Config::from_toml_str(&config_str)?;
    info!("[load_config] load config from {} : {:?}", path.display(), config);
    Ok(config)
}

pub fn load_config_in(base: &Path) -> Result<Config, ConfigError> {
    match find_config_path(base) {
        Some(path) => load_config_from(path),
        None => Err(ConfigError::NotFound(
            CONFIG_PATHS.iter().map(|p| p.to_string()).collect(),
        )),
    }
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_in(Path::new(""))
}

// 全局配置实例
use once_cell::sync::Lazy;
use std::sync::Mutex;

pub static CONFIG: Lazy<Mutex<Option<Config>>> = Lazy::new(|| Mutex::new(None));

pub fn set_config(config: Config) {
    let mut config_guard = CONFIG.lock().unwrap_or_else(|e| e.into_inner());
    *config_guard = Some(config);
}

// 初始化配置
pub fn init_config() -> Result<Config, ConfigError> {
    let config = load_config()?;
    set_config(config.clone());
    Ok(config)
}

// 获取配置
pub fn get_config() -> Option<Config> {
    CONFIG.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ImageMask, ProcessOptions, SwapMode};
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
[process]
swap_model = "inswapper 128"
face_distance = 0.5
swap_mode = "selected"
masking_text = "cup,hands"
restore_original_mouth = true

[process.processors.faceswap]
model = "inswapper"

[process.processors.codeformer]
fidelity = 0.7

[system]
log_level = "debug"
"#;

    #[test]
    fn parses_sections() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        let process = config.process();
        assert_eq!(process.swap_model.as_deref(), Some("inswapper 128"));
        assert_eq!(process.face_distance, 0.5);
        assert_eq!(process.swap_mode, SwapMode::Selected);
        assert_eq!(process.masking_text, "cup,hands");
        assert!(process.restore_original_mouth);
        assert_eq!(config.system().log_level(), "debug");
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        let process = config.process();
        let defaults = ProcessConfig::default();
        assert_eq!(process.blend_ratio, defaults.blend_ratio);
        assert_eq!(process.num_steps, defaults.num_steps);
        assert_eq!(process.subsample_size, defaults.subsample_size);
        assert!(!process.show_mask);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.process(), ProcessConfig::default());
        assert_eq!(config.system().log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn processors_keep_file_order() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        let process = config.process();
        let names: Vec<&str> = process.processors.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["faceswap", "codeformer"]);
        assert_eq!(process.processors["codeformer"]["fidelity"], 0.7);
    }

    #[test]
    fn request_from_config_builds_options() {
        let process = Config::from_toml_str(SAMPLE).unwrap().process();
        let mask = ImageMask::new(2, 1, vec![0, 255]);
        let options = ProcessOptions::new(process.request(3, Some(mask.clone()))).unwrap();
        assert_eq!(options.swap_output_size, 128);
        assert_eq!(options.selected_index, 3);
        assert_eq!(options.imagemask, Some(mask));
        assert_eq!(options.face_distance_threshold, 0.5);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = Config::from_toml_str("[process\nswap_model = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config_from("does/not/exist.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, Path::new("does/not/exist.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    // <tmp>/roop-options-<pid>-<name>/app, so "../config.toml" stays inside the scratch dir
    fn scratch_app_dir(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("roop-options-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&root);
        let app = root.join("app");
        fs::create_dir_all(&app).unwrap();
        app
    }

    #[test]
    fn no_config_file_lists_searched_paths() {
        let app = scratch_app_dir("none");
        assert_eq!(find_config_path(&app), None);
        match load_config_in(&app).unwrap_err() {
            ConfigError::NotFound(paths) => assert_eq!(
                paths,
                vec!["config.toml", "config/config.toml", "../config.toml"]
            ),
            other => panic!("unexpected error: {other}"),
        }
        fs::remove_dir_all(app.parent().unwrap()).unwrap();
    }

    #[test]
    fn search_falls_back_in_order() {
        let app = scratch_app_dir("order");
        fs::write(app.join("../config.toml"), "[system]\nlog_level = \"warn\"\n").unwrap();
        assert_eq!(find_config_path(&app), Some(app.join("../config.toml")));

        fs::create_dir_all(app.join("config")).unwrap();
        fs::write(app.join("config/config.toml"), SAMPLE).unwrap();
        assert_eq!(find_config_path(&app), Some(app.join("config/config.toml")));
        let config = load_config_in(&app).unwrap();
        assert_eq!(config.system().log_level(), "debug");

        fs::write(app.join("config.toml"), "").unwrap();
        assert_eq!(find_config_path(&app), Some(app.join("config.toml")));
        assert_eq!(load_config_in(&app).unwrap(), Config::default());

        fs::remove_dir_all(app.parent().unwrap()).unwrap();
    }

    #[test]
    fn loads_from_file_and_caches() {
        let path = std::env::temp_dir().join(format!("roop-options-{}.toml", std::process::id()));
        fs::write(&path, SAMPLE).unwrap();
        let config = load_config_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        set_config(config.clone());
        assert_eq!(get_config(), Some(config));
    }
}
