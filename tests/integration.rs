use std::f64::consts::{FRAC_PI_2, PI};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tri_engine::solver::{
    Candidates, Case, SlotLabels, SolveError, Solver, Specification, Tolerance, Triangle, solve,
    solve_with_filter, ssa_candidates,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

fn random_sides(rng: &mut StdRng) -> [f64; 3] {
    let a: f64 = rng.random_range(1.0..10.0);
    let b: f64 = rng.random_range(1.0..10.0);
    let c = rng.random_range((a - b).abs() + 0.1..a + b - 0.1);
    [a, b, c]
}

#[test]
fn random_sss_angles_sum_to_pi() {
    let mut rng = StdRng::seed_from_u64(0x7121_a5e5);
    for _ in 0..500 {
        let [a, b, c] = random_sides(&mut rng);
        let t = solve(&Specification::from([("a", a), ("b", b), ("c", c)])).unwrap();
        let sum: f64 = t.angles().iter().sum();
        assert!((sum - PI).abs() < 1e-9, "angle sum {sum} for {:?}", t.sides());
        assert_eq!(t.sides(), [a, b, c]);
    }
}

#[test]
fn random_triangles_round_trip_through_every_case() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let [a, b, c] = random_sides(&mut rng);
        let t = solve(&Specification::from([("a", a), ("b", b), ("c", c)])).unwrap();

        let sas = solve(&Specification::from([("a", a), ("b", b), ("gamma", t.gamma())])).unwrap();
        assert!(close(sas.c(), c), "SAS gave c={} expected {c}", sas.c());

        let asa = solve(&Specification::from([
            ("alpha", t.alpha()),
            ("beta", t.beta()),
            ("c", c),
        ]))
        .unwrap();
        assert!(close(asa.a(), a) && close(asa.b(), b));

        let aas = solve(&Specification::from([
            ("alpha", t.alpha()),
            ("beta", t.beta()),
            ("a", a),
        ]))
        .unwrap();
        assert!(close(aas.c(), c));

        let (primary, alternate) =
            ssa_candidates(&Specification::from([("a", a), ("b", b), ("alpha", t.alpha())]))
                .unwrap();
        let matched = std::iter::once(&primary)
            .chain(alternate.as_ref())
            .any(|candidate| close(candidate.c(), c));
        assert!(matched, "no SSA candidate reproduces c={c}");
    }
}

#[test]
fn ambiguous_specification_end_to_end() {
    let alpha = 0.672_460_005_683_680_7;
    let spec = Specification::new()
        .with("a", 3.0)
        .with("b", 4.0)
        .with("alpha", alpha);

    assert_eq!(Solver::new().classify(&spec).unwrap(), Case::Ssa);
    assert_eq!(solve(&spec).unwrap_err(), SolveError::AmbiguousSolution);

    let acute = solve_with_filter(&spec, Triangle::is_acute).unwrap();
    let obtuse = solve_with_filter(&spec, Triangle::is_obtuse).unwrap();
    assert!(close(acute.c(), 4.8));
    assert!(close(obtuse.c(), 1.458_333_333_3));
    assert!(obtuse.beta() > FRAC_PI_2);

    let err = solve_with_filter(&spec, |_: &Triangle| true).unwrap_err();
    assert_eq!(err, SolveError::FilterResolutionFailure { accepted: 2 });
    assert!(err.to_string().contains("did not disambiguate"));

    match Solver::new().derive_candidates(&spec).unwrap() {
        Candidates::Ambiguous(first, second) => {
            assert_eq!(first, acute);
            assert_eq!(second, obtuse);
        }
        Candidates::Unique(_) => panic!("expected two candidates"),
    }
}

#[test]
fn custom_labels_flow_through_solver() {
    let labels = SlotLabels::from_vertex_names("ABC").unwrap();
    let solver = Solver::with_labels(labels.clone());
    let spec = Specification::from_coordinates_with_labels([0.0, 0.0], [4.0, 0.0], [0.0, 3.0], &labels);
    let t = solver.solve(&spec).unwrap();

    assert!(t.is_pythagorean());
    assert!(close(t.get("A").unwrap(), FRAC_PI_2));
    assert!(close(t.get("BC").unwrap(), 5.0));
    assert!(close(t.opposite("BC").unwrap(), FRAC_PI_2));
    assert!(close(t.area(), 6.0));
    assert!(close(t.altitude("BC").unwrap(), 2.4));
    assert!(matches!(t.get("a"), Err(SolveError::UnknownSlot(_))));
}

#[test]
fn loose_tolerance_accepts_rounded_input() {
    let t = solve(&Specification::from([("a", 3.0), ("b", 4.0), ("c", 5.000_001)])).unwrap();
    assert!(!t.is_pythagorean());
    assert!(t.is_pythagorean_with(&Tolerance::LOOSE));
    assert!(t.is_pythagorean_with(&|x: f64, y: f64| (x - y).abs() < 1e-3));
}

#[test]
fn scaled_triangles_stay_similar() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let [a, b, c] = random_sides(&mut rng);
        let t = solve(&Specification::from([("a", a), ("b", b), ("c", c)])).unwrap();
        let factor: f64 = rng.random_range(0.01..100.0);
        let scaled = t.scale(factor).unwrap();
        assert!(t.is_similar(&scaled));
        assert!(close(scaled.area(), t.area() * factor * factor));
        assert!(t.canonical().is_similar(&t));
    }
}

#[test]
fn random_equal_side_ssa_is_never_ambiguous() {
    let mut rng = StdRng::seed_from_u64(0x150c_e1e5);
    for _ in 0..500 {
        let side: f64 = rng.random_range(1e-3..1e3);
        let alpha: f64 = rng.random_range(1e-6..PI - 1e-6);
        let spec = Specification::from([("a", side), ("b", side), ("alpha", alpha)]);
        match solve(&spec) {
            Ok(t) => {
                assert!(alpha < FRAC_PI_2, "obtuse alpha {alpha} accepted");
                assert!(close(t.c(), 2.0 * side * alpha.cos()), "alpha {alpha}");
                assert!(t.area() > 0.0);
            }
            Err(err) => {
                assert!(alpha >= FRAC_PI_2, "acute alpha {alpha} rejected: {err}");
                assert!(matches!(err, SolveError::NoAngleSolution { .. }));
            }
        }
    }
}

#[test]
fn random_sss_at_extreme_magnitudes_matches_unit_scale() {
    let mut rng = StdRng::seed_from_u64(0xe7_1e3e);
    for _ in 0..200 {
        let sides = random_sides(&mut rng);
        let reference = solve(&Specification::from([("a", sides[0]), ("b", sides[1]), ("c", sides[2])]))
            .unwrap();
        for factor in [1e200, 1e-200, 1e300, 1e-300] {
            let [a, b, c] = sides.map(|side| side * factor);
            let t = solve(&Specification::from([("a", a), ("b", b), ("c", c)])).unwrap();
            for (angle, expected) in t.angles().into_iter().zip(reference.angles()) {
                assert!((angle - expected).abs() < 1e-9, "factor {factor}: {angle} vs {expected}");
            }
            assert!(t.is_similar(&reference));
            let height = t.altitude("a").unwrap();
            assert!(close(height / factor, reference.altitude("a").unwrap()));
        }
    }
}
