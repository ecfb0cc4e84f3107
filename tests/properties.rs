//! 모든 유효 입력에 대해 성립해야 하는 성질.
use proptest::prelude::*;
use water_hammer_estimator::water_hammer::{
    simulate, valve_closure::effective_factor, wave_speed, SimulationInputs,
};

fn valid_inputs() -> impl Strategy<Value = SimulationInputs> {
    (
        0.1_f64..48.0,
        0.1_f64..20_000.0,
        0.0_f64..10_000.0,
        0.01_f64..4.0,
        0.1_f64..10_000.0,
    )
        .prop_map(
            |(diameter_in, flow_rate_gpm, pipe_length_ft, wall_thickness_in, closure_time_ms)| {
                SimulationInputs {
                    diameter_in,
                    flow_rate_gpm,
                    pipe_length_ft,
                    wall_thickness_in,
                    closure_time_ms,
                }
            },
        )
}

proptest! {
    #[test]
    fn derived_quantities_are_finite_and_positive(inputs in valid_inputs()) {
        let d = simulate(&inputs).unwrap().derived;
        for value in [d.area_m2, d.velocity_m_s, d.speed_of_sound_m_s, d.delta_p_pa] {
            prop_assert!(value.is_finite() && value > 0.0, "value={}", value);
        }
    }

    #[test]
    fn wave_speed_stays_below_rigid_limit(inputs in valid_inputs()) {
        let d = simulate(&inputs).unwrap().derived;
        prop_assert!(d.speed_of_sound_m_s < wave_speed::rigid_pipe_wave_speed());
    }

    #[test]
    fn pressure_stays_inside_damped_envelope(inputs in valid_inputs()) {
        let sim = simulate(&inputs).unwrap();
        prop_assert_eq!(sim.series.len(), 1001);
        prop_assert_eq!(sim.series.samples()[0].pressure_psi, sim.derived.delta_p_psi);
        for s in &sim.series {
            let bound = sim.derived.delta_p_psi.abs() * (-3.0 * s.time_s).exp();
            prop_assert!(s.pressure_psi.abs() <= bound, "t={} p={} bound={}", s.time_s, s.pressure_psi, bound);
        }
    }

    #[test]
    fn effective_factor_is_piecewise(closure_time_s in 1e-6_f64..100.0) {
        let expected = if closure_time_s <= 0.5 { 1.0 } else { 0.5 / closure_time_s };
        prop_assert_eq!(effective_factor(closure_time_s), expected);
        prop_assert!(effective_factor(closure_time_s) <= 1.0);
    }

    #[test]
    fn simulation_is_deterministic(inputs in valid_inputs()) {
        prop_assert_eq!(simulate(&inputs).unwrap(), simulate(&inputs).unwrap());
    }
}

#[test]
fn effective_factor_is_continuous_at_half_second() {
    assert_eq!(effective_factor(0.5), 1.0);
    assert!((effective_factor(0.5 + 1e-12) - 1.0).abs() < 1e-9);
}

#[test]
fn thick_walls_approach_rigid_pipe_speed() {
    let rigid = wave_speed::rigid_pipe_wave_speed();
    assert!((rigid - 1483.24).abs() < 0.01);
    let thin = wave_speed::korteweg_wave_speed(0.1016, 0.00635);
    let thick = wave_speed::korteweg_wave_speed(0.1016, 0.635);
    let very_thick = wave_speed::korteweg_wave_speed(0.1016, 25.4);
    assert!(thin < thick && thick < very_thick && very_thick < rigid);
    assert!((rigid - very_thick) / rigid < 1e-4);
}
