use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tempdir::TempDir;

use crate::config::Config;
use crate::file_system::FileSystemInteractor;

pub const REAL_FS: FileSystemInteractor = FileSystemInteractor { dry_run: false };

/// A configuration matching the worked example in the documentation.
pub fn sample_config() -> Config {
    Config {
        config_file: PathBuf::from("config_GIN.yml"),
        tag: "run1".to_string(),
        datasets: vec!["NCI1".to_string()],
        date_tag: Some("0101".to_string()),
        gpu: "0".to_string(),
        driver: "Launch_Experiments.py".to_string(),
        driver_arguments: vec![],
        extra_arguments: vec![],
        results_folder: PathBuf::from("results"),
        logs_folder: PathBuf::from("logs"),
        debug: true,
    }
}

/// Write `contents` to a fresh `file.toml` in a temporary directory.
pub fn create_sample_toml(contents: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new("config_folder").expect("A temp folder could not be created.");
    let file_pathbuf = dir.path().join("file.toml");

    let mut file = File::create(file_pathbuf.as_path()).expect("A file could not be created.");
    file.write_all(contents.as_bytes())
        .expect("The test file could not be written.");

    (file_pathbuf, dir)
}
