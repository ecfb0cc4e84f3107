//! 수격 계산 회귀 테스트. 4 in / 100 gpm / 100 ft / 0.25 in / 100 ms 기준 시나리오.
use water_hammer_estimator::chart::ChartData;
use water_hammer_estimator::water_hammer::{
    simulate, transient, Advisory, HammerError, InputField, InvalidReason, SimulationInputs,
};

fn base() -> SimulationInputs {
    SimulationInputs {
        diameter_in: 4.0,
        flow_rate_gpm: 100.0,
        pipe_length_ft: 100.0,
        wall_thickness_in: 0.25,
        closure_time_ms: 100.0,
    }
}

#[test]
fn reference_scenario_matches_hand_calculation() {
    let sim = simulate(&base()).expect("valid inputs");
    let d = &sim.derived;
    assert!((sim.inputs_si.diameter_m - 0.1016).abs() < 1e-12);
    assert!((sim.inputs_si.flow_rate_m3_s - 0.006309).abs() < 1e-12);
    assert!((d.area_m2 - 0.008107).abs() < 1e-6, "area={}", d.area_m2);
    assert!((d.velocity_m_s - 0.77819).abs() < 1e-4, "v={}", d.velocity_m_s);
    assert!(
        (d.speed_of_sound_m_s - 1367.753).abs() < 1e-2,
        "c={}",
        d.speed_of_sound_m_s
    );
    assert_eq!(d.effective_factor, 1.0);
    assert!((d.delta_p_pa - 1_064_365.8).abs() < 1.0, "dp={}", d.delta_p_pa);
    assert!((d.delta_p_psi - 154.373).abs() < 1e-2, "dp_psi={}", d.delta_p_psi);
    assert!((d.frequency_hz - 22.4369).abs() < 1e-3, "f={}", d.frequency_hz);
    assert_eq!(d.damping_per_s, 3.0);
}

#[test]
fn series_spans_two_seconds_in_1001_samples() {
    let sim = simulate(&base()).unwrap();
    assert_eq!(sim.series.len(), 1001);
    let first = sim.series.get(0).unwrap();
    assert_eq!(first.time_s, 0.0);
    assert_eq!(first.pressure_psi, sim.derived.delta_p_psi);
    let last = sim.series.get(1000).unwrap();
    assert_eq!(last.time_s, 2.0);

    let chart = ChartData::from_series(&sim.series);
    assert_eq!(chart.labels.len(), chart.values.len());
    assert_eq!(chart.labels[0], "0.000");
    assert_eq!(chart.labels[1000], "2.000");
    assert_eq!(chart.series_label, "Pressure (psi)");
    assert_eq!(chart.x_axis_title, "Time (s)");
}

#[test]
fn lazy_samples_match_collected_series() {
    let sim = simulate(&base()).unwrap();
    let model = sim.transient_model();
    let lazy: Vec<_> = model.samples().collect();
    assert_eq!(lazy.as_slice(), sim.series.samples());
}

#[test]
fn zero_length_pipe_falls_back_to_one_hertz() {
    let sim = simulate(&SimulationInputs {
        pipe_length_ft: 0.0,
        ..base()
    })
    .unwrap();
    assert_eq!(sim.derived.frequency_hz, transient::FALLBACK_FREQUENCY_HZ);
    assert_eq!(sim.derived.critical_time_s, None);
    assert!(sim.series.iter().all(|s| s.pressure_psi.is_finite()));
    assert!(sim.advisories.contains(&Advisory::ZeroLengthFallback));
}

#[test]
fn slow_closure_halves_the_spike_at_one_second() {
    let fast = simulate(&base()).unwrap();
    let slow = simulate(&SimulationInputs {
        closure_time_ms: 1000.0,
        ..base()
    })
    .unwrap();
    assert_eq!(slow.derived.effective_factor, 0.5);
    assert!((slow.derived.delta_p_psi * 2.0 - fast.derived.delta_p_psi).abs() < 1e-9);
    assert!(matches!(
        slow.advisories.as_slice(),
        [Advisory::SlowClosureHeuristic { .. }]
    ));
}

#[test]
fn critical_time_advisory_only_when_closure_exceeds_2l_over_c() {
    let sim = simulate(&base()).unwrap();
    let tc = sim.derived.critical_time_s.unwrap();
    assert!((tc - 0.04457).abs() < 1e-4, "tc={tc}");
    assert!(matches!(
        sim.advisories.as_slice(),
        [Advisory::ClosureSlowerThanCriticalTime { .. }]
    ));

    let quick = simulate(&SimulationInputs {
        closure_time_ms: 10.0,
        ..base()
    })
    .unwrap();
    assert!(quick.advisories.is_empty());
    // 참고 사항은 계산값을 바꾸지 않는다
    assert_eq!(quick.derived.delta_p_psi, sim.derived.delta_p_psi);
}

#[test]
fn non_positive_inputs_are_rejected_before_computation() {
    let cases = [
        (InputField::Diameter, 0.0),
        (InputField::FlowRate, -1.0),
        (InputField::WallThickness, 0.0),
        (InputField::ClosureTime, 0.0),
    ];
    for (field, value) in cases {
        let mut inputs = base();
        inputs.set(field, value);
        assert_eq!(
            simulate(&inputs).unwrap_err(),
            HammerError::InvalidInput {
                field,
                reason: InvalidReason::NotPositive
            }
        );
    }
}

#[test]
fn negative_length_and_nan_are_rejected() {
    let err = simulate(&SimulationInputs {
        pipe_length_ft: -5.0,
        ..base()
    })
    .unwrap_err();
    assert_eq!(err.field(), Some(InputField::PipeLength));

    let err = simulate(&SimulationInputs {
        closure_time_ms: f64::NAN,
        ..base()
    })
    .unwrap_err();
    assert_eq!(
        err,
        HammerError::invalid(InputField::ClosureTime, InvalidReason::NotFinite)
    );
}

#[test]
fn overflowing_geometry_is_reported_not_propagated_as_nan() {
    let err = simulate(&SimulationInputs {
        diameter_in: 1e300,
        ..base()
    })
    .unwrap_err();
    assert_eq!(err, HammerError::NonFiniteResult { quantity: "area" });
}

#[test]
fn repeated_runs_are_bit_identical() {
    let a = simulate(&base()).unwrap();
    let b = simulate(&base()).unwrap();
    assert_eq!(a, b);
}
