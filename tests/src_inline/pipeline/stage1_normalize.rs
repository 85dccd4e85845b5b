use super::*;

const EPS: f64 = 1e-9;

fn three_teams() -> ScoreMatrix {
    ScoreMatrix::from_rows([
        ("A", vec![("x", 10.0), ("y", 5.0)]),
        ("B", vec![("x", 20.0), ("y", 5.0)]),
        ("C", vec![("x", 30.0), ("y", 5.0)]),
    ])
    .unwrap()
}

fn params(max_points: f64) -> ScoringParams {
    ScoringParams {
        max_points,
        ..ScoringParams::csv_default()
    }
}

#[test]
fn test_mean_std_population() {
    let (mean, std) = mean_std(&[10.0, 20.0, 30.0]);
    assert!((mean - 20.0).abs() < EPS);
    assert!((std - (200.0f64 / 3.0).sqrt()).abs() < EPS);
}

#[test]
fn test_mean_std_identical_values_is_exact_zero() {
    let (mean, std) = mean_std(&[0.1, 0.1, 0.1]);
    assert_eq!(mean, 0.1);
    assert_eq!(std, 0.0);
}

#[test]
fn test_tiny_distinct_values_keep_their_spread() {
    let (mean, std) = mean_std(&[1e-200, 2e-200]);
    assert!((mean / 1.5e-200 - 1.0).abs() < EPS);
    assert!((std / 0.5e-200 - 1.0).abs() < EPS);

    let m = ScoreMatrix::from_rows([("a", vec![("t", 1e-200)]), ("b", vec![("t", 2e-200)])]).unwrap();
    let p = ScoringParams {
        zero_spread: ZeroSpreadPolicy::Reject,
        ..params(6.0)
    };
    let out = normalize(&m, &DirectionMap::from_flags([("t", true)]), &p).unwrap();
    assert!((out.get("a", "t").unwrap() - 2.0).abs() < EPS);
    assert!((out.get("b", "t").unwrap() - 4.0).abs() < EPS);
    assert!(!out.stats_for("t").unwrap().zero_variance);
}

#[test]
fn test_worked_example_categories() {
    let directions = DirectionMap::from_flags([("x", true), ("y", false)]);
    let out = normalize(&three_teams(), &directions, &params(10.0)).unwrap();

    assert!((out.get("A", "x").unwrap() - 2.958758547680685).abs() < EPS);
    assert!((out.get("B", "x").unwrap() - 5.0).abs() < EPS);
    assert!((out.get("C", "x").unwrap() - 7.041241452319315).abs() < EPS);
    for team in ["A", "B", "C"] {
        assert_eq!(out.get(team, "y"), Some(5.0));
    }

    let x = out.stats_for("x").unwrap();
    assert!((x.mean - 20.0).abs() < EPS);
    assert!((x.std_dev - 8.16496580927726).abs() < 1e-12);
    assert!(!x.zero_variance);
    assert!(out.stats_for("y").unwrap().zero_variance);
    assert_eq!(out.max_points, 10.0);
}

#[test]
fn test_zero_variance_is_midpoint_whatever_the_value() {
    let m = ScoreMatrix::from_rows([
        ("a", vec![("t", 123.0)]),
        ("b", vec![("t", 123.0)]),
    ])
    .unwrap();
    for flag in [true, false] {
        let directions = DirectionMap::from_flags([("t", flag)]);
        let out = normalize(&m, &directions, &params(4.0)).unwrap();
        assert_eq!(out.get("a", "t"), Some(2.0));
        assert_eq!(out.get("b", "t"), Some(2.0));
    }
}

#[test]
fn test_zero_variance_reject_policy() {
    let directions = DirectionMap::from_flags([("x", true), ("y", false)]);
    let p = ScoringParams {
        zero_spread: ZeroSpreadPolicy::Reject,
        ..params(10.0)
    };
    let err = normalize(&three_teams(), &directions, &p).unwrap_err();
    assert_eq!(
        err,
        ScoreError::ZeroVariance {
            category: "y".to_string()
        }
    );
}

#[test]
fn test_direction_consistent_monotonicity() {
    let m = ScoreMatrix::from_rows([
        ("a", vec![("up", 1.0), ("down", 1.0)]),
        ("b", vec![("up", 5.0), ("down", 5.0)]),
        ("c", vec![("up", 3.0), ("down", 3.0)]),
        ("d", vec![("up", 4.5), ("down", 4.5)]),
    ])
    .unwrap();
    let directions = DirectionMap::from_flags([("up", true), ("down", false)]);
    let out = normalize(&m, &directions, &params(1.0)).unwrap();

    let teams = ["a", "b", "c", "d"];
    for i in teams {
        for j in teams {
            let raw_i = m.get(i, "up").unwrap();
            let raw_j = m.get(j, "up").unwrap();
            if raw_i < raw_j {
                assert!(out.get(i, "up").unwrap() < out.get(j, "up").unwrap());
                assert!(out.get(i, "down").unwrap() > out.get(j, "down").unwrap());
            }
        }
    }
}

#[test]
fn test_directions_mirror_around_midpoint() {
    let m = three_teams();
    let up = normalize(&m, &DirectionMap::from_flags([("x", true), ("y", true)]), &params(1.0)).unwrap();
    let down =
        normalize(&m, &DirectionMap::from_flags([("x", false), ("y", true)]), &params(1.0)).unwrap();
    for team in ["A", "B", "C"] {
        let sum = up.get(team, "x").unwrap() + down.get(team, "x").unwrap();
        assert!((sum - 1.0).abs() < EPS);
    }
}

#[test]
fn test_affine_transform_does_not_change_output() {
    let base = ScoreMatrix::from_rows([
        ("a", vec![("x", 2.0)]),
        ("b", vec![("x", 7.5)]),
        ("c", vec![("x", 11.0)]),
        ("d", vec![("x", 4.0)]),
    ])
    .unwrap();
    let mut shifted = ScoreMatrix::new(["x"]).unwrap();
    for (team, row) in base.rows() {
        shifted.push_team(team, vec![row[0] * 3.5 - 40.0]).unwrap();
    }
    let directions = DirectionMap::from_flags([("x", false)]);
    let a = normalize(&base, &directions, &params(10.0)).unwrap();
    let b = normalize(&shifted, &directions, &params(10.0)).unwrap();
    for team in base.teams() {
        let va = a.get(team, "x").unwrap();
        let vb = b.get(team, "x").unwrap();
        assert!((va - vb).abs() < 1e-9, "{team}: {va} vs {vb}");
    }
}

#[test]
fn test_outliers_are_not_clamped() {
    let mut m = ScoreMatrix::new(["x"]).unwrap();
    for i in 0..10 {
        m.push_team(format!("t{i}"), vec![0.0]).unwrap();
    }
    m.push_team("outlier", vec![100.0]).unwrap();
    let out = normalize(&m, &DirectionMap::from_flags([("x", true)]), &params(1.0)).unwrap();
    // z = sqrt(10) for a single outlier among eleven
    let expected = (10.0f64.sqrt() + 3.0) / 6.0;
    let got = out.get("outlier", "x").unwrap();
    assert!(got > 1.0);
    assert!((got - expected).abs() < EPS);
}

#[test]
fn test_input_is_not_mutated() {
    let m = three_teams();
    let before = m.clone();
    let directions = DirectionMap::from_flags([("x", true), ("y", false)]);
    let _ = normalize(&m, &directions, &params(10.0)).unwrap();
    assert_eq!(m, before);
}

#[test]
fn test_missing_direction_fails_before_any_statistic() {
    let directions = DirectionMap::from_flags([("x", true)]);
    let err = normalize(&three_teams(), &directions, &params(10.0)).unwrap_err();
    assert_eq!(
        err,
        ScoreError::MissingDirection {
            category: "y".to_string()
        }
    );
    assert!(err.is_schema_mismatch());
}

#[test]
fn test_unknown_direction_lenient_vs_strict() {
    let directions = DirectionMap::from_flags([("x", true), ("y", false), ("z", true)]);
    assert!(normalize(&three_teams(), &directions, &params(10.0)).is_ok());

    let strict = ScoringParams {
        schema: SchemaMode::Strict,
        ..params(10.0)
    };
    let err = normalize(&three_teams(), &directions, &strict).unwrap_err();
    assert_eq!(
        err,
        ScoreError::UnknownDirection {
            category: "z".to_string()
        }
    );
}

#[test]
fn test_no_teams_is_empty_input() {
    let m = ScoreMatrix::new(["x"]).unwrap();
    let err = normalize(&m, &DirectionMap::from_flags([("x", true)]), &params(1.0)).unwrap_err();
    assert!(matches!(err, ScoreError::EmptyInput(_)));
}

#[test]
fn test_invalid_max_points() {
    let directions = DirectionMap::from_flags([("x", true), ("y", false)]);
    let err = normalize(&three_teams(), &directions, &params(-1.0)).unwrap_err();
    assert_eq!(err, ScoreError::InvalidMaxPoints(-1.0));
}

#[test]
fn test_standardize_direct() {
    assert_eq!(standardize(7.0, 7.0, 0.0, Direction::HigherIsBetter, 3.0), 1.5);
    let up = standardize(12.0, 10.0, 2.0, Direction::HigherIsBetter, 6.0);
    let down = standardize(12.0, 10.0, 2.0, Direction::LowerIsBetter, 6.0);
    assert!((up - 4.0).abs() < EPS);
    assert!((down - 2.0).abs() < EPS);
}
