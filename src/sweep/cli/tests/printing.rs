use crate::cli::printing::format_table;

#[test]
fn format_table_aligns_columns() {
    let table = format_table(vec![
        vec!["dataset".to_string(), "log file".to_string()],
        vec![
            "NCI1".to_string(),
            "logs/0_0101_run1_NCI1_nohup.log".to_string(),
        ],
    ]);

    assert_eq!(
        table,
        "dataset | log file\nNCI1    | logs/0_0101_run1_NCI1_nohup.log"
    );
}

#[test]
fn format_table_of_nothing_is_empty() {
    assert_eq!(format_table(vec![]), "");
}
