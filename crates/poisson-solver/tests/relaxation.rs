//! Integration test: sweep results on small cubes.
//!
//! Checks hand-computed values for the first sweeps on N = 3, the
//! boundary stamp after every lifecycle step, convergence to the
//! one-dimensional linear profile, and agreement with a direct
//! face-by-face rendition of the update rule.

use poisson_core::{BoundaryValues, ConfigError, Cube};
use poisson_solver::{run_poisson, solve, SolveError, SolvePhase, Solver, SolverConfig};
use poisson_test_utils::{assert_close, boundary_stamped, hashed_source, point_source, zero_source};

fn config(n: usize, iterations: u32) -> SolverConfig {
    SolverConfig {
        n,
        iterations,
        ..Default::default()
    }
}

// ── Hand-computed scenarios ─────────────────────────────────────────

#[test]
fn one_sweep_on_n3_gives_minus_one_sixth_in_middle_plane() {
    let field = run_poisson(3, &[0.0; 27], 1, 1, 1.0, false).unwrap();
    let cube = Cube::new(3).unwrap();
    for z in 0..3 {
        for y in 0..3 {
            assert_eq!(field[cube.index(0, y, z)], -2.0);
            assert_eq!(field[cube.index(2, y, z)], 1.0);
            let v = field[cube.index(1, y, z)];
            assert!((v + 1.0 / 6.0).abs() < 1e-15, "({y},{z}) = {v}");
        }
    }
}

#[test]
fn two_sweeps_on_n3_give_minus_five_eighteenths() {
    let field = run_poisson(3, &[0.0; 27], 2, 1, 1.0, false).unwrap();
    let cube = Cube::new(3).unwrap();
    for z in 0..3 {
        for y in 0..3 {
            let v = field[cube.index(1, y, z)];
            assert!((v + 5.0 / 18.0).abs() < 1e-15, "({y},{z}) = {v}");
        }
    }
}

#[test]
fn point_source_is_scaled_by_delta_squared() {
    let cube = Cube::new(3).unwrap();
    let source = point_source(&cube, 1, 1, 1, 6.0);
    let field = run_poisson(3, &source, 1, 1, 0.5, false).unwrap();
    // (1 - 2 - 0.25 * 6) / 6
    assert!((field[cube.index(1, 1, 1)] + 2.5 / 6.0).abs() < 1e-15);
    assert!((field[cube.index(1, 0, 1)] + 1.0 / 6.0).abs() < 1e-15);
}

#[test]
fn zero_iterations_return_stamped_zero_field() {
    let field = run_poisson(5, &[3.0; 125], 0, 1, 1.0, false).unwrap();
    for row in field.chunks_exact(5) {
        assert_eq!(row, &[-2.0, 0.0, 0.0, 0.0, 1.0]);
    }
}

#[test]
fn single_cell_cube_holds_high_value() {
    for iterations in [0, 1, 5] {
        let field = run_poisson(1, &[42.0], iterations, 1, 1.0, false).unwrap();
        assert_eq!(field, vec![1.0]);
    }
}

#[test]
fn converges_to_linear_profile_without_source() {
    let cube = Cube::new(5).unwrap();
    let solution = solve(&config(5, 500), &zero_source(&cube)).unwrap();
    for z in 0..5 {
        for y in 0..5 {
            for (x, expected) in [(1, -1.25), (2, -0.5), (3, 0.25)] {
                let v = solution.get(x, y, z);
                assert!((v - expected).abs() < 1e-9, "({x},{y},{z}) = {v}");
            }
        }
    }
}

#[test]
fn custom_boundary_values_are_stamped() {
    let cube = Cube::new(5).unwrap();
    let cfg = SolverConfig {
        boundary: BoundaryValues {
            low: 3.0,
            high: -4.0,
        },
        ..config(5, 4)
    };
    let solution = solve(&cfg, &zero_source(&cube)).unwrap();
    assert!(boundary_stamped(&cube, &cfg.boundary, solution.field()));
}

// ── Lifecycle ───────────────────────────────────────────────────────

#[test]
fn closed_faces_hold_after_every_step() {
    let cube = Cube::new(7).unwrap();
    let source = hashed_source(&cube, 11);
    let values = BoundaryValues::default();
    let mut solver = Solver::new(config(7, 6), &source).unwrap();
    assert!(boundary_stamped(&cube, &values, solver.current()));
    while solver.step() != SolvePhase::Done {
        assert!(boundary_stamped(&cube, &values, solver.current()));
    }
    assert_eq!(solver.sweeps_completed(), 6);
    assert!(boundary_stamped(&cube, &values, solver.current()));
}

#[test]
fn stepwise_and_one_shot_agree() {
    let cube = Cube::new(5).unwrap();
    let source = hashed_source(&cube, 3);
    let mut solver = Solver::new(config(5, 9), &source).unwrap();
    while solver.step() != SolvePhase::Done {}
    let stepped = solver.current().to_vec();
    let one_shot = run_poisson(5, &source, 9, 1, 1.0, false).unwrap();
    assert_eq!(stepped, one_shot);
}

#[test]
fn metrics_report_setup() {
    let cube = Cube::new(9).unwrap();
    let solution = solve(&config(9, 3), &zero_source(&cube)).unwrap();
    let m = solution.metrics();
    assert_eq!(m.sweeps, 3);
    assert_eq!(m.memory_bytes, 2 * 729 * std::mem::size_of::<f64>());
    assert!(m.max_sweep_us <= m.sweep_total_us);
}

// ── Errors ──────────────────────────────────────────────────────────

#[test]
fn even_edge_rejected() {
    let err = run_poisson(4, &[0.0; 64], 1, 1, 1.0, false).unwrap_err();
    assert_eq!(err, SolveError::Config(ConfigError::EvenEdge { n: 4 }));
}

#[test]
fn empty_cube_rejected() {
    let err = run_poisson(0, &[], 1, 1, 1.0, false).unwrap_err();
    assert_eq!(err, SolveError::Config(ConfigError::EmptyCube));
}

#[test]
fn short_source_rejected() {
    let err = run_poisson(3, &[0.0; 9], 1, 1, 1.0, false).unwrap_err();
    assert_eq!(
        err,
        SolveError::SourceLength {
            expected: 27,
            actual: 9
        }
    );
}

#[test]
fn zero_threads_and_bad_spacing_rejected() {
    assert!(matches!(
        run_poisson(3, &[0.0; 27], 1, 0, 1.0, false),
        Err(SolveError::Config(ConfigError::InvalidThreads { threads: 0 }))
    ));
    for delta in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            run_poisson(3, &[0.0; 27], 1, 1, delta, false),
            Err(SolveError::Config(ConfigError::InvalidSpacing { .. }))
        ));
    }
}

// ── Face-by-face reference ──────────────────────────────────────────

/// One sweep written out per region of the cube: interior, the four open
/// faces and the four open edges, each with its own mirrored indices.
fn reference_sweep(n: usize, cur: &[f64], src: &[f64], delta_sq: f64, next: &mut [f64]) {
    let idx = |x: usize, y: usize, z: usize| (z * n + y) * n + x;
    let last = n - 1;
    for z in 0..n {
        for y in 0..n {
            for x in 1..last {
                let xs = cur[idx(x + 1, y, z)] + cur[idx(x - 1, y, z)];
                let s = delta_sq * src[idx(x, y, z)];
                let v = match (y == 0, y == last, z == 0, z == last) {
                    // interior
                    (false, false, false, false) => {
                        (xs + cur[idx(x, y + 1, z)]
                            + cur[idx(x, y - 1, z)]
                            + cur[idx(x, y, z + 1)]
                            + cur[idx(x, y, z - 1)]
                            - s)
                            / 6.0
                    }
                    // y = 0 face
                    (true, false, false, false) => {
                        (xs + cur[idx(x, 1, z)]
                            + cur[idx(x, 1, z)]
                            + cur[idx(x, y, z + 1)]
                            + cur[idx(x, y, z - 1)]
                            - s)
                            / 6.0
                    }
                    // y = N-1 face
                    (false, true, false, false) => {
                        (xs + cur[idx(x, last - 1, z)]
                            + cur[idx(x, last - 1, z)]
                            + cur[idx(x, y, z + 1)]
                            + cur[idx(x, y, z - 1)]
                            - s)
                            / 6.0
                    }
                    // z = 0 face
                    (false, false, true, false) => {
                        (xs + cur[idx(x, y + 1, z)]
                            + cur[idx(x, y - 1, z)]
                            + cur[idx(x, y, 1)]
                            + cur[idx(x, y, 1)]
                            - s)
                            / 6.0
                    }
                    // z = N-1 face
                    (false, false, false, true) => {
                        (xs + cur[idx(x, y + 1, z)]
                            + cur[idx(x, y - 1, z)]
                            + cur[idx(x, y, last - 1)]
                            + cur[idx(x, y, last - 1)]
                            - s)
                            / 6.0
                    }
                    // edges
                    (y_lo, _, z_lo, _) => {
                        let yn = if y_lo { 1 } else { last - 1 };
                        let zn = if z_lo { 1 } else { last - 1 };
                        (xs + cur[idx(x, yn, z)]
                            + cur[idx(x, yn, z)]
                            + cur[idx(x, y, zn)]
                            + cur[idx(x, y, zn)]
                            - s)
                            / 6.0
                    }
                };
                next[idx(x, y, z)] = v;
            }
        }
    }
    for row in next.chunks_exact_mut(n) {
        row[0] = BoundaryValues::DEFAULT_LOW;
        row[last] = BoundaryValues::DEFAULT_HIGH;
    }
}

fn reference_solve(n: usize, src: &[f64], iterations: u32, delta: f64) -> Vec<f64> {
    let mut cur = vec![0.0; n * n * n];
    for row in cur.chunks_exact_mut(n) {
        row[0] = BoundaryValues::DEFAULT_LOW;
        row[n - 1] = BoundaryValues::DEFAULT_HIGH;
    }
    let mut next = cur.clone();
    for _ in 0..iterations {
        reference_sweep(n, &cur, src, delta * delta, &mut next);
        std::mem::swap(&mut cur, &mut next);
    }
    cur
}

#[test]
fn matches_face_by_face_reference_exactly() {
    for (n, seed, iterations, delta) in [(3, 1, 4, 1.0), (5, 2, 10, 0.5), (7, 3, 13, 0.1)] {
        let cube = Cube::new(n).unwrap();
        let source = hashed_source(&cube, seed);
        let expected = reference_solve(n, &source, iterations, delta);
        let actual = run_poisson(n, &source, iterations, 1, delta, false).unwrap();
        assert_eq!(actual, expected, "n = {n}");
    }
}

#[test]
fn reference_agrees_under_tolerance_on_larger_cube() {
    let cube = Cube::new(11).unwrap();
    let source = hashed_source(&cube, 99);
    let expected = reference_solve(11, &source, 8, 1.0);
    let actual = run_poisson(11, &source, 8, 3, 1.0, false).unwrap();
    assert_close(&actual, &expected, 0.0);
}
