use approx::relative_eq;
use matbench::{
    Matrix, MatrixError, Strategy, matmul_partitioned_with, matmul_serial, run_benchmark,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::num::NonZeroUsize;

fn assert_matrices_close(expected: &Matrix<f64>, actual: &Matrix<f64>, name: &str) {
    assert_eq!(expected.rows(), actual.rows(), "{}: row count mismatch", name);
    assert_eq!(expected.cols(), actual.cols(), "{}: col count mismatch", name);
    for (idx, (&e, &a)) in expected
        .as_slice()
        .iter()
        .zip(actual.as_slice())
        .enumerate()
    {
        assert!(
            relative_eq!(e, a, max_relative = 1e-9),
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            idx,
            e,
            a
        );
    }
}

fn random_matrix(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut m = Matrix::new(rows, cols);
    m.randomize_with(&mut StdRng::seed_from_u64(seed), 0.0, 100.0)
        .unwrap();
    m
}

// ============================================================
// Concrete scenario
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
    let expected = Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap();

    for strategy in Strategy::ALL {
        let c = strategy.multiply(&a, &b).unwrap();
        assert_eq!(c, expected, "{}", strategy);
    }
}

#[test]
fn test_integer_elements() {
    let a = Matrix::from_rows(vec![vec![1i32, 2, 3], vec![4, 5, 6]]).unwrap();
    let b = Matrix::from_rows(vec![vec![7i32, 8], vec![9, 10], vec![11, 12]]).unwrap();

    for strategy in Strategy::ALL {
        let c = strategy.multiply(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[58, 64, 139, 154], "{}", strategy);
    }
}

// ============================================================
// Agreement across strategies
// ============================================================

#[test]
fn test_strategies_agree_on_random_inputs() {
    let test_cases = [
        (1, 1, 1),
        (3, 5, 7),
        (7, 3, 5),
        (13, 17, 19),
        (64, 32, 48),
        (100, 50, 75),
    ];

    for (seed, (m, n, k)) in test_cases.into_iter().enumerate() {
        let a = random_matrix(m, k, seed as u64 * 2);
        let b = random_matrix(k, n, seed as u64 * 2 + 1);

        let reference = matmul_serial(&a, &b).unwrap();
        for strategy in Strategy::ALL {
            let c = strategy.multiply(&a, &b).unwrap();
            assert_matrices_close(&reference, &c, &format!("{} {}x{}x{}", strategy, m, n, k));
        }
    }
}

#[test]
fn test_partitioned_agrees_for_any_worker_count() {
    let a = random_matrix(37, 29, 11);
    let b = random_matrix(29, 41, 12);
    let reference = matmul_serial(&a, &b).unwrap();

    for workers in 1..=40 {
        let c = matmul_partitioned_with(&a, &b, NonZeroUsize::new(workers).unwrap()).unwrap();
        assert_matrices_close(&reference, &c, &format!("workers_{}", workers));
    }
}

#[test]
fn test_more_workers_than_rows() {
    let a = random_matrix(2, 6, 21);
    let b = random_matrix(6, 4, 22);
    let reference = matmul_serial(&a, &b).unwrap();

    let c = matmul_partitioned_with(&a, &b, NonZeroUsize::new(16).unwrap()).unwrap();

    assert_matrices_close(&reference, &c, "2 rows on 16 workers");
}

// ============================================================
// Identity
// ============================================================

#[test]
fn test_identity_right_multiply() {
    let test_sizes = [(1, 1), (4, 4), (9, 5), (5, 9), (33, 17)];

    for (m, k) in test_sizes {
        let a = random_matrix(m, k, (m * 100 + k) as u64);
        let id = Matrix::identity(k);

        for strategy in Strategy::ALL {
            let c = strategy.multiply(&a, &id).unwrap();
            assert_matrices_close(&a, &c, &format!("{} identity {}x{}", strategy, m, k));
        }
    }
}

// ============================================================
// Degenerate shapes
// ============================================================

#[test]
fn test_empty_contraction_is_zero() {
    let a = Matrix::<f64>::new(4, 0);
    let b = Matrix::<f64>::new(0, 3);

    for strategy in Strategy::ALL {
        let c = strategy.multiply(&a, &b).unwrap();
        assert_eq!((c.rows(), c.cols()), (4, 3), "{}", strategy);
        assert!(c.as_slice().iter().all(|&v| v == 0.0), "{}", strategy);
    }
}

#[test]
fn test_empty_result_shapes() {
    let shapes = [(0, 5, 3), (5, 0, 3), (0, 0, 0)];

    for (m, n, k) in shapes {
        let a = Matrix::<f64>::new(m, k);
        let b = Matrix::<f64>::new(k, n);

        for strategy in Strategy::ALL {
            let c = strategy.multiply(&a, &b).unwrap();
            assert_eq!((c.rows(), c.cols()), (m, n), "{} {}x{}x{}", strategy, m, n, k);
        }
    }
}

// ============================================================
// Dimension checking
// ============================================================

#[test]
fn test_dimension_mismatch_all_strategies() {
    let a = Matrix::<f64>::new(3, 4);
    let b = Matrix::<f64>::new(5, 2);
    let expected = MatrixError::DimensionMismatch {
        left_rows: 3,
        left_cols: 4,
        right_rows: 5,
        right_cols: 2,
    };

    for strategy in Strategy::ALL {
        assert_eq!(strategy.multiply(&a, &b), Err(expected.clone()), "{}", strategy);
    }
}

#[test]
fn test_dimension_mismatch_aborts_benchmark() {
    let a = Matrix::<f64>::new(2, 3);
    let b = Matrix::<f64>::new(2, 3);

    assert!(matches!(
        run_benchmark(&a, &b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

// ============================================================
// Benchmark harness
// ============================================================

#[test]
fn test_benchmark_report_lines() {
    let a = random_matrix(32, 32, 5);
    let b = random_matrix(32, 32, 6);

    let report = run_benchmark(&a, &b).unwrap();
    let mut out = Vec::new();
    report.write_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    for (line, name) in lines.iter().zip(["Serial", "Async", "Thread Pool"]) {
        let prefix = format!("{} Multiplication Time: ", name);
        assert!(line.starts_with(&prefix), "unexpected line: {}", line);
        let micros = line[prefix.len()..].trim_end_matches(" µs");
        assert!(micros.parse::<u128>().is_ok(), "not an integer: {}", micros);
    }
}
