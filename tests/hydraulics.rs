//! 스프레드시트 기준 사례의 전 구간 회귀 테스트.
use pipe_hydraulics_toolbox::piping::{calculate, FittingCounts, PipeFlowInput};

fn water_100gpm_4in() -> PipeFlowInput {
    PipeFlowInput {
        flow_gpm: 100.0,
        diameter_in: 4.0,
        straight_length_ft: 100.0,
        viscosity_cp: 1.0,
        specific_gravity: 1.0,
        vertical_rise_ft: 0.0,
        fittings: FittingCounts::default(),
    }
}

#[test]
fn turbulent_reference_case() {
    let result = calculate(&water_100gpm_4in());
    assert!((result.kinematic_viscosity_ft2_per_s - 1.077393e-5).abs() < 1e-12);
    assert!((result.diameter_ft - 0.3333).abs() < 1e-12);
    assert!((result.flow_area_ft2 - 0.0872).abs() < 1e-12);
    assert!((result.flow_rate_cfs - 0.2228).abs() < 1e-12);
    assert!((result.velocity_ft_per_s - 2.56).abs() < 1e-12);
    assert!((result.shear_rate_per_s - 61.25).abs() < 1e-9);
    assert_eq!(result.relative_roughness, 0.0);
    assert!((result.reynolds_number - 79200.0).abs() < 1e-6);
    assert!((result.friction_factor - 0.0192).abs() < 1e-12);
    assert_eq!(result.total_fitting_length_ft, 0.0);
    assert_eq!(result.total_length_ft, 100.0);
    assert!((result.head_loss_ft - 0.59).abs() < 1e-12);
    assert!((result.pressure_drop_psi - 0.26).abs() < 1e-12);
}

#[test]
fn fittings_reference_case() {
    let input = PipeFlowInput {
        flow_gpm: 250.0,
        diameter_in: 6.0,
        straight_length_ft: 500.0,
        viscosity_cp: 1.2,
        specific_gravity: 0.98,
        vertical_rise_ft: 10.0,
        fittings: FittingCounts {
            nineties: 4.0,
            fortyfives: 2.0,
            tee_branches: 1.0,
            tee_lines: 3.0,
            globe_valves: 1.0,
            gate_valves: 2.0,
            swing_checks: 1.0,
            angle_valves: 0.0,
        },
    };
    let result = calculate(&input);
    assert!((result.kinematic_viscosity_ft2_per_s - 1.3192567e-5).abs() < 1e-12);
    assert!((result.diameter_ft - 0.5).abs() < 1e-12);
    assert!((result.reynolds_number - 107600.0).abs() < 1e-6);
    assert!((result.friction_factor - 0.0179).abs() < 1e-12);
    let eq = &result.equivalent_lengths;
    assert!((eq.nineties_ft - 23.46).abs() < 1e-9);
    assert!((eq.fortyfives_ft - 5.866).abs() < 1e-9);
    assert!((eq.tee_branches_ft - 31.84).abs() < 1e-9);
    assert!((eq.tee_lines_ft - 31.84).abs() < 1e-9);
    assert!((eq.globe_valves_ft - 181.6).abs() < 1e-9);
    assert!((eq.gate_valves_ft - 8.939).abs() < 1e-9);
    assert!((eq.swing_checks_ft - 53.07).abs() < 1e-9);
    assert_eq!(eq.angle_valves_ft, 0.0);
    assert!((result.total_fitting_length_ft - 336.615).abs() < 1e-9);
    assert_eq!(result.total_length_ft, 837.0);
    assert!((result.head_loss_ft - 14.0).abs() < 1e-12);
    assert!((result.pressure_drop_psi - 5.9).abs() < 1e-12);
}

#[test]
fn laminar_reference_case() {
    let input = PipeFlowInput {
        flow_gpm: 1.0,
        diameter_in: 2.0,
        straight_length_ft: 50.0,
        viscosity_cp: 100.0,
        specific_gravity: 1.2,
        vertical_rise_ft: 0.0,
        fittings: FittingCounts::default(),
    };
    let result = calculate(&input);
    assert!((result.reynolds_number - 18.94).abs() < 1e-9);
    assert!((result.friction_factor - 3.38).abs() < 1e-12);
    assert!((result.relative_roughness - 0.0001).abs() < 1e-12);
    assert!((result.head_loss_ft - 0.16).abs() < 1e-12);
    assert!((result.pressure_drop_psi - 0.083).abs() < 1e-12);
}

#[test]
fn identical_inputs_yield_identical_records() {
    let first = calculate(&water_100gpm_4in());
    let second = calculate(&water_100gpm_4in());
    assert_eq!(first.friction_factor, second.friction_factor);
    assert_eq!(first.head_loss_ft, second.head_loss_ft);
    assert_eq!(first.pressure_drop_psi, second.pressure_drop_psi);
    assert_eq!(first.darcy_chart, second.darcy_chart);
}

#[test]
fn zero_fitting_counts_contribute_nothing() {
    let result = calculate(&water_100gpm_4in());
    let eq = &result.equivalent_lengths;
    for value in [
        eq.nineties_ft,
        eq.fortyfives_ft,
        eq.tee_branches_ft,
        eq.tee_lines_ft,
        eq.globe_valves_ft,
        eq.gate_valves_ft,
        eq.swing_checks_ft,
        eq.angle_valves_ft,
    ] {
        assert_eq!(value, 0.0);
    }
}

#[test]
fn total_length_is_straight_plus_fittings_rounded() {
    let mut input = water_100gpm_4in();
    input.fittings.globe_valves = 1.0;
    input.straight_length_ft = 123.4;
    let result = calculate(&input);
    let expected = (input.straight_length_ft + result.total_fitting_length_ft).round();
    assert_eq!(result.total_length_ft, expected);
}
