use super::*;

#[test]
fn accepts_csv_extension_case_insensitively() {
    assert_eq!(check_csv_file("records.CSV", 1024.0), Ok(()));
}

#[test]
fn rejects_other_extensions() {
    assert_eq!(check_csv_file("records.xlsx", 10.0), Err("Please select a CSV file".to_owned()));
    assert!(check_csv_file("records", 10.0).is_err());
}

#[test]
fn rejects_oversize_files() {
    assert!(check_csv_file("big.csv", 11.0 * 1024.0 * 1024.0).is_err());
}
