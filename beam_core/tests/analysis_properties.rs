//! Whole-pipeline properties of the beam analysis: equilibrium closure,
//! boundary conditions, symmetry, linearity and textbook cases.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use beam_core::calculations::{analyze, AnalysisResult, Beam, SupportType};
use beam_core::loads::{total_vertical_force, Load};
use beam_core::sections::Section;
use beam_core::tool;
use serde_json::json;

/// 200 GPa steel on I = 8.0e7 mm⁴
fn section() -> Section {
    Section::custom(8.0e7, 5.0e5, 5000.0)
}

const EI: f64 = 200_000.0 * 8.0e7;

fn mixed_loads(span: f64) -> Vec<Load> {
    vec![
        Load::point(12.0, 0.3 * span),
        Load::distributed(4.0, 0.2 * span, 0.7 * span),
        Load::moment(9.0, 0.6 * span),
        Load::point(-3.0, 0.9 * span),
        Load::moment(-5.0, 0.1 * span),
    ]
}

fn run(support: SupportType, span: f64, loads: Vec<Load>, stations: usize) -> AnalysisResult {
    let beam = Beam::new(support, span, section()).with_loads(loads).with_stations(stations);
    analyze(&beam).expect("valid beam")
}

#[test]
fn equilibrium_closes_for_every_support_type() {
    let span = 7.5;
    let loads = mixed_loads(span);
    let applied = total_vertical_force(&loads);

    for support in SupportType::ALL {
        let result = run(support, span, loads.clone(), 100);
        assert_relative_eq!(result.reactions.total_force(), applied, max_relative = 1e-12);
        assert_abs_diff_eq!(result.equilibrium_residual_kn, 0.0, epsilon = 1e-9);
        assert_relative_eq!(result.total_load_kn, applied, max_relative = 1e-12);
    }
}

#[test]
fn moment_closes_at_free_and_pinned_ends() {
    let span = 7.5;
    for support in SupportType::ALL {
        let result = run(support, span, mixed_loads(span), 100);
        let last = result.stations.last().unwrap();
        match support {
            SupportType::FixedFixed => {
                let fixed_end = result.reactions.right_moment_knm;
                assert_abs_diff_eq!(last.moment_knm, fixed_end, epsilon = 1e-9)
            }
            _ => assert_abs_diff_eq!(last.moment_knm, 0.0, epsilon = 1e-9),
        }
    }
}

#[test]
fn zero_loads_give_zero_everything() {
    let zero_loads = vec![
        Load::point(0.0, 2.0),
        Load::distributed(0.0, 1.0, 3.0),
        Load::moment(0.0, 4.0),
    ];

    for support in SupportType::ALL {
        for loads in [Vec::new(), zero_loads.clone()] {
            let result = run(support, 5.0, loads, 50);
            let r = result.reactions;
            assert_eq!(r.left_force_kn, 0.0);
            assert_eq!(r.right_force_kn, 0.0);
            assert_eq!(r.left_moment_knm, 0.0);
            assert_eq!(r.right_moment_knm, 0.0);
            for s in &result.stations {
                assert_eq!(s.shear_kn, 0.0);
                assert_eq!(s.moment_knm, 0.0);
                assert_eq!(s.deflection_mm, 0.0);
            }
            assert!(result.passes());
        }
    }
}

#[test]
fn deflection_vanishes_at_both_supports() {
    for support in [SupportType::SimplySupported, SupportType::FixedFixed] {
        let result = run(support, 6.0, mixed_loads(6.0), 100);
        let scale = result.max_deflection.value.abs();
        assert!(scale > 0.0);
        assert_eq!(result.stations[0].deflection_mm, 0.0);
        let last = result.stations.last().unwrap();
        assert_abs_diff_eq!(last.deflection_mm, 0.0, epsilon = 1e-9 * scale);
    }
}

#[test]
fn fixed_left_has_zero_slope_and_deflection() {
    for support in [SupportType::Cantilever, SupportType::ProppedCantilever] {
        let loads = vec![Load::point(10.0, 2.0), Load::distributed(2.0, 0.0, 4.0)];
        let result = run(support, 4.0, loads, 400);
        let s = &result.stations;
        assert_eq!(s[0].deflection_mm, 0.0);
        assert_eq!(s[0].slope_rad, 0.0);

        // Chord slope over the first interval is small next to the peak slope
        let h = (s[1].position_m - s[0].position_m) * 1000.0;
        let first_chord = (s[1].deflection_mm - s[0].deflection_mm) / h;
        let peak_slope = s.iter().map(|x| x.slope_rad.abs()).fold(0.0, f64::max);
        assert!(first_chord.abs() < 0.02 * peak_slope, "{} vs {}", first_chord, peak_slope);
    }
}

#[test]
fn midspan_point_load_is_symmetric() {
    let (p, l) = (12.0, 8.0);
    let result = run(SupportType::SimplySupported, l, vec![Load::point(p, l / 2.0)], 100);

    assert_relative_eq!(result.reactions.left_force_kn, p / 2.0);
    assert_relative_eq!(result.reactions.right_force_kn, p / 2.0);

    let n = result.stations.len();
    for i in 0..n {
        assert_abs_diff_eq!(
            result.stations[i].moment_knm,
            result.stations[n - 1 - i].moment_knm,
            epsilon = 1e-9
        );
    }
    assert_relative_eq!(result.max_moment.value, p * l / 4.0, max_relative = 1e-12);
    assert_relative_eq!(result.max_moment.position_m, l / 2.0);
}

#[test]
fn textbook_simply_supported_point_load() {
    // Default resolution, no station override
    let beam = Beam::new(SupportType::SimplySupported, 10.0, section())
        .with_load(Load::point(10.0, 5.0));
    let result = analyze(&beam).unwrap();

    assert_relative_eq!(result.reactions.left_force_kn, 5.0);
    assert_relative_eq!(result.reactions.right_force_kn, 5.0);
    assert_relative_eq!(result.max_moment.value, 25.0, max_relative = 1e-12);
    assert_relative_eq!(result.max_moment.position_m, 5.0);
    assert_abs_diff_eq!(result.stations[0].moment_knm, 0.0);
    assert_abs_diff_eq!(result.stations[100].moment_knm, 0.0, epsilon = 1e-9);

    // δ = PL³/(48EI)
    let expected = 10.0e3 * 10_000.0_f64.powi(3) / (48.0 * EI);
    assert_relative_eq!(result.max_deflection.value, expected, max_relative = 1e-3);
}

#[test]
fn cantilever_tip_load() {
    let result = run(SupportType::Cantilever, 4.0, vec![Load::point(10.0, 4.0)], 100);

    assert_relative_eq!(result.reactions.left_force_kn, 10.0);
    assert_relative_eq!(result.reactions.left_moment_knm, -40.0);
    assert_eq!(result.reactions.right_force_kn, 0.0);

    // Magnitude falls linearly to zero at the free end
    for s in &result.stations {
        assert_abs_diff_eq!(s.moment_knm, -10.0 * (4.0 - s.position_m), epsilon = 1e-9);
    }
    assert_relative_eq!(result.max_moment.value, -40.0);
    assert_eq!(result.max_moment.position_m, 0.0);
}

#[test]
fn fixed_fixed_full_udl() {
    let (w, l) = (5.0, 6.0);
    let result = run(SupportType::FixedFixed, l, vec![Load::distributed(w, 0.0, l)], 200);

    assert_relative_eq!(result.reactions.left_moment_knm, -15.0, max_relative = 1e-12);
    assert_relative_eq!(result.reactions.right_moment_knm, -15.0, max_relative = 1e-12);
    assert_relative_eq!(result.reactions.left_force_kn, 15.0, max_relative = 1e-12);
    assert_relative_eq!(result.reactions.right_force_kn, 15.0, max_relative = 1e-12);

    // Midspan: M = wL²/24, δ = wL⁴/(384EI)
    assert_relative_eq!(result.stations[100].moment_knm, w * l * l / 24.0, max_relative = 1e-9);
    let expected = w * (l * 1000.0).powi(4) / (384.0 * EI);
    assert_relative_eq!(result.stations[100].deflection_mm, expected, max_relative = 2e-3);
}

#[test]
fn propped_cantilever_compatibility_holds() {
    let span = 6.0;
    let cases = vec![
        vec![Load::distributed(10.0, 0.0, span)],
        vec![Load::point(20.0, 1.5)],
        vec![Load::moment(15.0, 4.0)],
        mixed_loads(span),
    ];

    for loads in cases {
        let result = run(SupportType::ProppedCantilever, span, loads, 150);
        let scale = result.stations.iter().map(|s| s.deflection_mm.abs()).fold(0.0, f64::max);
        assert!(scale > 0.0);

        let last = result.stations.last().unwrap();
        assert_abs_diff_eq!(last.deflection_mm, 0.0, epsilon = 1e-9 * scale);
        assert_abs_diff_eq!(last.moment_knm, 0.0, epsilon = 1e-9);
        assert_eq!(result.reactions.right_moment_knm, 0.0);
    }
}

#[test]
fn propped_cantilever_udl_matches_closed_form() {
    let (w, l) = (10.0, 5.0);
    let result = run(SupportType::ProppedCantilever, l, vec![Load::distributed(w, 0.0, l)], 200);

    assert_relative_eq!(result.reactions.right_force_kn, 3.0 * w * l / 8.0, max_relative = 1e-3);
    assert_relative_eq!(result.reactions.left_force_kn, 5.0 * w * l / 8.0, max_relative = 1e-3);
    assert_relative_eq!(result.reactions.left_moment_knm, -w * l * l / 8.0, max_relative = 1e-3);
}

#[test]
fn couple_sign_reverses_response() {
    let span = 5.0;
    for support in SupportType::ALL {
        let cw = run(support, span, vec![Load::moment(8.0, 2.0)], 100);
        let ccw = run(support, span, vec![Load::moment(-8.0, 2.0)], 100);

        let (a, b) = (&cw.reactions, &ccw.reactions);
        assert_abs_diff_eq!(a.left_force_kn, -b.left_force_kn, epsilon = 1e-9);
        assert_abs_diff_eq!(a.right_force_kn, -b.right_force_kn, epsilon = 1e-9);
        assert_abs_diff_eq!(a.left_moment_knm, -b.left_moment_knm, epsilon = 1e-9);
        assert_abs_diff_eq!(cw.reactions.total_force(), 0.0, epsilon = 1e-9);

        for (a, b) in cw.stations.iter().zip(&ccw.stations) {
            assert_abs_diff_eq!(a.moment_knm, -b.moment_knm, epsilon = 1e-9);
            assert_abs_diff_eq!(a.deflection_mm, -b.deflection_mm, epsilon = 1e-9);
        }
    }
}

#[test]
fn clockwise_couple_raises_sagging_moment() {
    // Simply supported, clockwise M0 at a: M jumps from −M0·a/L to +M0·(L−a)/L
    let (m0, a, l) = (10.0, 4.0, 10.0);
    let result = run(SupportType::SimplySupported, l, vec![Load::moment(m0, a)], 100);

    assert_relative_eq!(result.reactions.right_force_kn, m0 / l);
    assert_relative_eq!(result.reactions.left_force_kn, -m0 / l);

    let at_couple = &result.stations[40];
    assert_relative_eq!(at_couple.position_m, a);
    assert_relative_eq!(at_couple.moment_knm, m0 * (l - a) / l, max_relative = 1e-12);
    assert_relative_eq!(result.stations[39].moment_knm, -m0 * 3.9 / l, max_relative = 1e-12);
}

#[test]
fn analysis_is_idempotent() {
    for support in SupportType::ALL {
        let beam = Beam::new(support, 7.5, section())
            .with_loads(mixed_loads(7.5))
            .with_self_weight(true);
        let first = analyze(&beam).unwrap();
        let second = analyze(&beam).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn tool_round_trip_matches_direct_analysis() {
    let params = json!({
        "beam_type": "propped",
        "span": 6.0,
        "loads": [
            { "type": "udl", "magnitude": 5.0 },
            { "type": "point", "magnitude": 12.0, "position": 2.0 }
        ],
        "section": { "type": "custom", "I": 8.0e7, "S": 5.0e5, "A": 5000.0 },
        "material": { "preset": "steel" }
    });
    let response = tool::execute(&params).unwrap();
    let via_tool: AnalysisResult = serde_json::from_value(response.data["result"].clone()).unwrap();

    let direct = run(
        SupportType::ProppedCantilever,
        6.0,
        vec![Load::distributed(5.0, 0.0, 6.0), Load::point(12.0, 2.0)],
        100,
    );
    assert_eq!(via_tool.reactions, direct.reactions);
    assert_eq!(via_tool.stations.len(), direct.stations.len());
    assert_eq!(via_tool.checks.status, direct.checks.status);
}
