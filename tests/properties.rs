use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ring_matrix::{Fraction, Matrix, MatrixError, Operation};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_matrix(rng: &mut StdRng, rows: usize, columns: usize) -> Matrix<i64> {
    Matrix::from_list(
        (0..rows)
            .map(|_| (0..columns).map(|_| rng.gen_range(-100..100)).collect())
            .collect(),
    )
    .unwrap()
}

fn random_shape(rng: &mut StdRng) -> (usize, usize) {
    (rng.gen_range(1..6), rng.gen_range(1..6))
}

#[test]
fn test_transpose_is_an_involution() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..50 {
        let (rows, columns) = random_shape(&mut rng);
        let a = random_matrix(&mut rng, rows, columns);
        assert_eq!(a.transpose().shape(), (columns, rows));
        assert_eq!(a.transpose().transpose(), a);
    }

    let mut rng = StdRng::seed_from_u64(1);
    let a = Matrix::<f64>::random(4, 7, &mut rng).unwrap();
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn test_addition_laws() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..50 {
        let (rows, columns) = random_shape(&mut rng);
        let a = random_matrix(&mut rng, rows, columns);
        let b = random_matrix(&mut rng, rows, columns);
        let c = random_matrix(&mut rng, rows, columns);

        assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(a.subtract(&a).unwrap(), Matrix::new(rows, columns).unwrap());
        assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
    }
}

#[test]
fn test_multiplication_laws() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let (m, n) = random_shape(&mut rng);
        let p = rng.gen_range(1..6);
        let a = random_matrix(&mut rng, m, n);
        let b = random_matrix(&mut rng, n, p);

        let id = Matrix::<i64>::identity(n).unwrap();
        assert_eq!(a.multiply(&id).unwrap(), a);

        let ab = a.multiply(&b).unwrap();
        assert_eq!(ab.shape(), (m, p));
        assert_eq!(
            ab.transpose(),
            b.transpose().multiply(&a.transpose()).unwrap()
        );

        assert_eq!(a.multiply_scalar(1), a);
        assert_eq!(a.multiply_scalar(0), Matrix::new(m, n).unwrap());
        assert_eq!(a.multiply_scalar(3), a.add(&a).unwrap().add(&a).unwrap());
    }
}

#[test]
fn test_concrete_scenario() {
    init_logger();
    let a = Matrix::from_list(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::from_list(vec![vec![5, 6], vec![7, 8]]).unwrap();

    assert_eq!(a.add(&b).unwrap().to_list(), vec![vec![6, 8], vec![10, 12]]);
    assert_eq!(a.multiply(&b).unwrap().to_list(), vec![vec![19, 22], vec![43, 50]]);
    assert_eq!(a.transpose().to_list(), vec![vec![1, 3], vec![2, 4]]);
    assert_eq!(a.multiply_scalar(2).to_list(), vec![vec![2, 4], vec![6, 8]]);
    assert!(matches!(
        a.get(2, 0),
        Err(MatrixError::IndexOutOfRange { row: 2, column: 0, rows: 2, columns: 2 })
    ));
}

#[test]
fn test_dimension_mismatch() {
    init_logger();
    let a = Matrix::<i64>::new(2, 3).unwrap();
    let b = Matrix::<i64>::new(3, 2).unwrap();
    let c = Matrix::<i64>::new(4, 2).unwrap();

    let err = a.add(&b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            operation: Operation::Add,
            left: (2, 3),
            right: (3, 2),
        }
    );
    assert_eq!(
        a.multiply(&c).unwrap_err(),
        MatrixError::DimensionMismatch {
            operation: Operation::Multiply,
            left: (2, 3),
            right: (4, 2),
        }
    );
    assert_eq!(
        a.multiply(&c).unwrap_err().to_string(),
        "Dimensions not compatible for multiplication: \
         matrix A has 2 rows and 3 columns, matrix B has 4 rows and 2 columns"
    );
    assert!(a.multiply(&b).is_ok());
}

#[test]
fn test_rational_product_is_exact() {
    init_logger();
    let f = |s: &str| s.parse::<Fraction>().unwrap();
    let hilbert = Matrix::from_list(
        (1..=3)
            .map(|i| (1..=3).map(|j| Fraction::new((1).into(), (i + j - 1).into())).collect())
            .collect(),
    )
    .unwrap();
    let inverse = Matrix::from_list(vec![
        vec![f("9"), f("-36"), f("30")],
        vec![f("-36"), f("192"), f("-180")],
        vec![f("30"), f("-180"), f("180")],
    ])
    .unwrap();

    assert_eq!(
        hilbert.multiply(&inverse).unwrap(),
        Matrix::<Fraction>::identity(3).unwrap()
    );
}
