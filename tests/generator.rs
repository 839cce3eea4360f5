use approx::assert_relative_eq;
use paretoplot::data::generator::DEFAULT_QUADRATIC_COEFFICIENT;
use paretoplot::*;

fn constant_generator(ms: u64) -> DataGenerator<ScriptedSource> {
    DataGenerator::with_default_coefficient(ms, ScriptedSource::constant(0.5)).unwrap()
}

#[test]
fn produces_requested_count_in_increasing_time() {
    let mut g = DataGenerator::with_default_coefficient(2000, RandSource::thread()).unwrap();
    let samples: Vec<Sample> = g.produce(100).collect();
    assert_eq!(samples.len(), 100);
    assert_eq!(samples[0].time, 0.0);
    assert_eq!(samples[99].time, 2.0);
    for w in samples.windows(2) {
        assert!(w[1].time > w[0].time);
    }
    assert!(samples.iter().all(|s| (0.0..=2.0).contains(&s.time)));
}

#[test]
fn over_capacity_request_is_clamped() {
    let mut g = constant_generator(1000);
    assert_eq!(g.produce(250).count(), SAMPLE_CAP);
    assert_eq!(g.produce(7).len(), 7);
    assert_eq!(g.produce(0).count(), 0);
}

#[test]
fn time_points_partition_the_duration() {
    let g = constant_generator(3000);
    assert_eq!(g.final_time_seconds(), 3.0);
    assert_eq!(g.time_points().len(), SAMPLE_CAP);
    assert_relative_eq!(g.time_points()[1], 3.0 / 99.0);
}

#[test]
fn values_follow_trend_and_decay_for_fixed_draws() {
    let mut g = constant_generator(2000);
    let samples: Vec<Sample> = g.produce(5).collect();
    for (i, s) in samples.iter().enumerate() {
        let quad = DEFAULT_QUADRATIC_COEFFICIENT * 1.022f64.powi(i as i32 + 1);
        assert_relative_eq!(s.value_a, 1800.0 * s.time + 0.5, epsilon = 1e-9);
        assert_relative_eq!(s.value_b, 1800.0 * s.time * (1.0 - quad), epsilon = 1e-9);
    }
}

#[test]
fn draws_are_consumed_in_order() {
    // u1 shapes the baseline slope, u2 is its additive noise, u3 the optimised slope.
    let src = ScriptedSource::new(vec![0.0, 0.25, 1.0]);
    let mut g = DataGenerator::new(99_000, 0.0, src).unwrap();
    let s = g.produce(2).nth(1).unwrap();
    assert_eq!(s.time, 1.0);
    assert_relative_eq!(s.value_a, 1784.0 + 0.25);
    assert_relative_eq!(s.value_b, 1816.0);
}

#[test]
fn decay_factor_carries_over_between_calls() {
    let mut g = constant_generator(2000);
    assert_eq!(g.produce(10).count(), 10);
    assert_relative_eq!(g.quad(), 0.03 * 1.022f64.powi(10), epsilon = 1e-12);

    let second: Vec<Sample> = g.produce(5).collect();
    let mut fresh = constant_generator(2000);
    let first_run: Vec<Sample> = fresh.produce(5).collect();

    // Same time points, but the second call keeps compounding.
    assert_eq!(second[1].time, first_run[1].time);
    assert!(second[1].value_b < first_run[1].value_b);
    let expected_quad = 0.03 * 1.022f64.powi(12);
    assert_relative_eq!(
        second[1].value_b,
        1800.0 * second[1].time * (1.0 - expected_quad),
        epsilon = 1e-9
    );
}

#[test]
fn random_values_stay_inside_noise_envelope() {
    let mut g = DataGenerator::with_default_coefficient(2000, RandSource::thread()).unwrap();
    let mut quad = DEFAULT_QUADRATIC_COEFFICIENT;
    for s in g.produce(100) {
        quad *= 1.022;
        assert!(s.value_a >= 1784.0 * s.time && s.value_a < 1816.0 * s.time + 1.0);
        let lo = 1784.0 * s.time * (1.0 - quad);
        let hi = 1816.0 * s.time * (1.0 - quad);
        assert!(s.value_b >= lo.min(hi) - 1e-9 && s.value_b <= lo.max(hi) + 1e-9);
    }
}

#[test]
fn stream_is_finite_and_not_restartable() {
    let g = constant_generator(1000);
    let mut stream = g.into_stream(3);
    assert_eq!(stream.remaining(), 3);
    assert!(stream.next().is_some());
    assert!(stream.next().is_some());
    assert!(stream.next().is_some());
    assert!(stream.is_exhausted());
    assert!(stream.next().is_none());
    assert!(stream.next().is_none());
}

#[test]
fn rejects_zero_duration_and_non_finite_coefficient() {
    assert!(matches!(
        DataGenerator::with_default_coefficient(0, ScriptedSource::default()),
        Err(SimulationError::ZeroDuration)
    ));
    assert!(matches!(
        DataGenerator::new(1000, f64::NAN, ScriptedSource::default()),
        Err(SimulationError::NonFiniteCoefficient(_))
    ));
}
