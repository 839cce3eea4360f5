use paretoplot::data::log::*;
use paretoplot::data::pareto::*;
use paretoplot::*;

fn sample(time: f64, value_a: f64, value_b: f64) -> Sample {
    Sample { time, value_a, value_b }
}

#[test]
fn deltas_are_zero_with_fewer_than_two_samples() {
    let mut h = History::new();
    assert_eq!(h.last_deltas(), Deltas::default());
    h.push(sample(0.0, 3.0, 4.0));
    assert_eq!(h.last_deltas(), Deltas::default());
}

#[test]
fn deltas_use_the_two_most_recent_samples() {
    let mut h = History::new();
    h.push(sample(0.0, 1.0, 1.0));
    h.push(sample(0.1, 5.0, 2.0));
    h.push(sample(0.2, 8.0, 1.5));
    let d = h.last_deltas();
    assert_eq!(d.other, 3.0);
    assert_eq!(d.optimal, -0.5);
}

#[test]
fn series_points_follow_insertion_order() {
    let mut h = History::new();
    h.push(sample(0.0, 1.0, 2.0));
    h.push(sample(0.5, 3.0, 4.0));
    assert_eq!(h.points_a(), vec![[0.0, 1.0], [0.5, 3.0]]);
    assert_eq!(h.points_b(), vec![[0.0, 2.0], [0.5, 4.0]]);
}

#[test]
fn time_stamp_shows_seconds_and_tenths() {
    assert_eq!(format_time_stamp(0), "[0:0]");
    assert_eq!(format_time_stamp(1250), "[1:2]");
    assert_eq!(format_time_stamp(20_000), "[20:0]");
}

#[test]
fn log_line_pads_label_and_keeps_four_significant_digits() {
    let [optimal, other] = log_pair(
        600,
        Deltas {
            other: 12.345678,
            optimal: -1.5,
        },
    );
    assert_eq!(optimal.to_string(), format!("[0:6] {:<20} -1.5", "Optimal:"));
    assert_eq!(other.to_string(), format!("[0:6] {:<20} 12.35", "Other:"));
}

#[test]
fn first_tick_logs_zero_deltas() {
    let [optimal, _] = log_pair(200, Deltas::default());
    assert_eq!(optimal.to_string(), format!("[0:2] {:<20} 0.0", "Optimal:"));
    assert_eq!(format_delta(31234.5678), "3.123e+04");
}

#[test]
fn pareto_groups_sit_on_their_anchors() {
    let groups = pareto_groups(&mut ScriptedSource::constant(0.5));
    let roles: Vec<ScatterRole> = groups.iter().map(|g| g.role).collect();
    assert_eq!(
        roles,
        vec![ScatterRole::Candidate, ScatterRole::Utopia, ScatterRole::Optimal]
    );
    assert_eq!(groups[0].points, vec![[23.0, 25.0]]);
    assert_eq!(groups[1].points, vec![[2.0, 23.0]]);
    assert_eq!(groups[2].points, vec![[2.0, 45.0]]);
    assert_eq!(groups[1].marker_size, 10.0);
}

#[test]
fn pareto_jitter_spans_half_the_noise_size() {
    let low = pareto_groups(&mut ScriptedSource::constant(0.0));
    assert_eq!(low[0].points, vec![[22.0, 24.0]]);
    assert_eq!(low[2].points, vec![[1.75, 43.0]]);
    assert_eq!(jitter(10.0, 4.0, 1.0), 12.0);
}

#[test]
fn only_named_groups_have_labels() {
    assert_eq!(ScatterRole::Candidate.label(), None);
    assert_eq!(ScatterRole::Utopia.label(), Some("Utopia point"));
    assert_eq!(SeriesKind::Optimal.label(), "Optimal");
}
