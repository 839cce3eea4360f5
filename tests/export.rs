use paretoplot::data::export::*;
use paretoplot::{History, Sample};

fn history() -> History {
    let mut h = History::new();
    h.push(Sample { time: 0.0, value_a: 0.5, value_b: 0.0 });
    h.push(Sample { time: 0.25, value_a: 450.5, value_b: 436.0 });
    h
}

#[test]
fn writes_expected_csv() {
    let mut buf = Vec::new();
    write_history_csv(&mut buf, &history()).unwrap();
    let s = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = s.trim().split('\n').collect();
    assert_eq!(lines[0], "time_seconds,other,optimal");
    assert_eq!(lines[1], "0.000000000,0.5,0");
    assert_eq!(lines[2], "0.250000000,450.5,436");
    assert_eq!(lines.len(), 3);
}

#[test]
fn empty_history_writes_header_only() {
    let mut buf = Vec::new();
    write_history_csv(&mut buf, &History::new()).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "time_seconds,other,optimal\n");
}

#[test]
fn saves_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.csv");
    save_history_csv(&path, &history()).unwrap();
    let s = std::fs::read_to_string(&path).unwrap();
    assert_eq!(s.lines().count(), 3);
}

#[test]
fn default_name_is_a_csv_file() {
    let name = default_export_name();
    assert!(name.starts_with("history_"));
    assert!(name.ends_with(".csv"));
}
