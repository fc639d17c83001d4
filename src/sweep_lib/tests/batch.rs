use std::path::PathBuf;

use chrono::Local;
use chrono::TimeZone;

use crate::batch::Batch;
use crate::test_utils::sample_config;

/// The worked example from the documentation: the argument list and the
/// log path are pinned down literally, so any change to the naming
/// convention has to be a conscious one.
#[test]
fn documented_naming_convention() {
    let batch = Batch::from_config(&sample_config(), Local::now()).unwrap();

    assert_eq!(batch.jobs.len(), 1);

    let job = &batch.jobs[0];
    assert_eq!(
        job.arguments,
        vec![
            "--config-file",
            "config_GIN.yml",
            "--dataset-name",
            "NCI1",
            "--result-folder",
            "results/result_0101_run1_NCI1",
            "--debug",
        ]
    );
    assert_eq!(job.result_folder, PathBuf::from("results/result_0101_run1_NCI1"));
    assert_eq!(job.log_file, PathBuf::from("logs/0_0101_run1_NCI1_nohup.log"));
}

/// One job per dataset, in the order the datasets were supplied.
#[test]
fn one_job_per_dataset_in_order() {
    let mut conf = sample_config();
    conf.datasets = vec![
        "PROTEINS".to_string(),
        "NCI1".to_string(),
        "ENZYMES".to_string(),
        "IMDB-BINARY".to_string(),
    ];

    let batch = Batch::from_config(&conf, Local::now()).unwrap();

    let launched: Vec<&str> = batch.jobs.iter().map(|j| j.dataset.as_str()).collect();
    assert_eq!(launched, vec!["PROTEINS", "NCI1", "ENZYMES", "IMDB-BINARY"]);
}

/// Two distinct datasets with identical tag, date and GPU fields must
/// never share a result folder or a log file.
#[test]
fn derived_paths_are_unique_per_dataset() {
    let mut conf = sample_config();
    conf.datasets = vec!["NCI1".to_string(), "PROTEINS".to_string()];

    let batch = Batch::from_config(&conf, Local::now()).unwrap();

    assert_ne!(batch.jobs[0].result_folder, batch.jobs[1].result_folder);
    assert_ne!(batch.jobs[0].log_file, batch.jobs[1].log_file);
}

/// The dataset and the tag/date fields appear verbatim in both derived
/// paths.
#[test]
fn derived_paths_contain_all_fields() {
    let batch = Batch::from_config(&sample_config(), Local::now()).unwrap();
    let job = &batch.jobs[0];

    for piece in ["NCI1", "0101", "run1"] {
        assert!(job.result_folder.to_str().unwrap().contains(piece));
        assert!(job.log_file.to_str().unwrap().contains(piece));
    }
}

#[test]
fn empty_dataset_list_plans_nothing() {
    let mut conf = sample_config();
    conf.datasets = vec![];

    let batch = Batch::from_config(&conf, Local::now()).unwrap();
    assert!(batch.jobs.is_empty());
}

/// Without a configured date tag, the batch's creation time supplies
/// one as MMDD.
#[test]
fn date_tag_defaults_to_creation_date() {
    let mut conf = sample_config();
    conf.date_tag = None;

    let time = Local.with_ymd_and_hms(2020, 3, 7, 12, 0, 0).unwrap();
    let batch = Batch::from_config(&conf, time).unwrap();

    assert_eq!(
        batch.jobs[0].log_file,
        PathBuf::from("logs/0_0307_run1_NCI1_nohup.log")
    );
}

#[test]
fn debug_flag_can_be_disabled() {
    let mut conf = sample_config();
    conf.debug = false;

    let batch = Batch::from_config(&conf, Local::now()).unwrap();
    assert!(!batch.jobs[0].arguments.contains(&"--debug".to_string()));
}

/// Extra arguments go after the generated ones, so they can override
/// driver defaults the way a trailing flag would on the shell.
#[test]
fn extra_arguments_are_appended() {
    let mut conf = sample_config();
    conf.extra_arguments = vec!["--outer-folds".to_string(), "10".to_string()];

    let batch = Batch::from_config(&conf, Local::now()).unwrap();

    let args = &batch.jobs[0].arguments;
    assert_eq!(&args[args.len() - 2..], ["--outer-folds", "10"]);
    assert_eq!(args[args.len() - 3], "--debug");
}

/// The driver command and its leading arguments are carried over for
/// the dispatcher.
#[test]
fn driver_is_carried_over() {
    let mut conf = sample_config();
    conf.driver = "python3".to_string();
    conf.driver_arguments = vec!["Launch_Experiments.py".to_string()];

    let batch = Batch::from_config(&conf, Local::now()).unwrap();

    assert_eq!(batch.driver, "python3");
    assert_eq!(batch.driver_arguments, vec!["Launch_Experiments.py"]);
}

#[test]
fn empty_tag_is_rejected() {
    let mut conf = sample_config();
    conf.tag = "".to_string();

    assert!(Batch::from_config(&conf, Local::now()).is_err());
}

#[test]
fn separators_in_embedded_fields_are_rejected() {
    let mut conf = sample_config();
    conf.tag = "run/1".to_string();
    assert!(Batch::from_config(&conf, Local::now()).is_err());

    let mut conf = sample_config();
    conf.gpu = "gpu 0".to_string();
    assert!(Batch::from_config(&conf, Local::now()).is_err());

    let mut conf = sample_config();
    conf.date_tag = Some("01/01".to_string());
    assert!(Batch::from_config(&conf, Local::now()).is_err());
}

/// Dataset names are not validated here; even a name the driver will
/// reject is passed through untouched.
#[test]
fn dataset_names_are_passed_through() {
    let mut conf = sample_config();
    conf.datasets = vec!["NOT-A-REAL-DATASET".to_string()];

    let batch = Batch::from_config(&conf, Local::now()).unwrap();
    assert_eq!(batch.jobs[0].dataset, "NOT-A-REAL-DATASET");
}
