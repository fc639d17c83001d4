use std::path::Path;
use std::path::PathBuf;

use sweep_lib::config::Config;
use sweep_lib::file_system::FileSystemInteractor;

pub const REAL_FS: FileSystemInteractor = FileSystemInteractor { dry_run: false };

/// A config whose driver is a harmless stand-in and whose derived paths
/// all live under `root`.
pub fn test_config(root: &Path, driver: &str, datasets: &[&str]) -> Config {
    Config {
        config_file: PathBuf::from("config_GIN.yml"),
        tag: "run1".to_string(),
        datasets: datasets.iter().map(|d| d.to_string()).collect(),
        date_tag: Some("0101".to_string()),
        gpu: "0".to_string(),
        driver: driver.to_string(),
        driver_arguments: vec![],
        extra_arguments: vec![],
        results_folder: root.join("results"),
        logs_folder: root.join("logs"),
        debug: true,
    }
}
