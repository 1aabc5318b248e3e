use super::*;

const SUITE: &str = "unitest1: v1: 1 v2: 0\nunitest2: v1: 0 v2: 3\nunitest3: v1: 2 v2: 1\n";

#[test]
fn can_read_fault_matrix() {
    let tests = read_suite(BufReader::new(SUITE.as_bytes())).unwrap();

    assert_eq!(tests.len(), 3);
    assert_eq!(tests[0].name(), "unitest1");
    assert!(tests[0].detects(1));
    assert!(!tests[0].detects(2));
    assert!(!tests[1].detects(1));
    assert!(tests[1].detects(2));
    assert!(tests[2].detects(1) && tests[2].detects(2));
    assert!(tests.iter().all(|test| test.total_faults() == 2));
}

#[test]
fn can_skip_blank_lines() {
    let content = "unitest1: v1: 1\n\nunitest2: v1: 0\n";

    assert_eq!(read_suite(BufReader::new(content.as_bytes())).unwrap().len(), 2);
}

#[test]
fn can_reject_inconsistent_columns() {
    let content = "unitest1: v1: 1 v2: 0\nunitest2: v1: 0\n";

    assert!(read_suite(BufReader::new(content.as_bytes())).is_err());
}

#[test]
fn can_reject_malformed_counts() {
    assert!(read_suite(BufReader::new("unitest1: v1: x".as_bytes())).is_err());
}

#[test]
fn can_reject_empty_suite() {
    assert!(read_suite(BufReader::new("".as_bytes())).is_err());
}
