use alloc::vec;

use approx::assert_relative_eq;

use super::*;

fn fives() -> Tensor {
    vec![vec![5.0; 3]; 3].try_into().unwrap()
}

fn sparse() -> Tensor {
    let mut t2 = Tensor::zeros();
    t2[1][1] = 0.312;
    t2[0][2] = 2.00004;
    t2
}

#[test]
fn test_untouched_cell_reads_zero() {
    let t2 = sparse();
    assert_eq!(t2[0][1], 0.0);
    assert_eq!(fives()[2][1], 5.0);
}

#[test]
fn test_add() {
    let ta = fives() + sparse();
    assert_relative_eq!(
        ta,
        Tensor::from_rows([[5.0, 5.0, 7.00004], [5.0, 5.312, 5.0], [5.0, 5.0, 5.0]])
    );
}

#[test]
fn test_scale() {
    let ts = fives() * 0.3213;
    assert_relative_eq!(ts, Tensor::from_rows([[1.6065; 3]; 3]), epsilon = 1e-12);
}

#[test]
fn test_product() {
    let t = fives();
    let ta = t + sparse();
    let tm = t * ta;
    assert_relative_eq!(
        tm,
        Tensor::from_rows([[75.0, 76.56, 85.0002]; 3]),
        epsilon = 1e-10
    );
}

#[test]
fn test_double_dot() {
    let t = fives();
    let ta = t + sparse();
    // the sum of all cells of `ta` is 47.31204, whichever order it is walked in
    assert_relative_eq!(t.double_dot(&ta), 236.5602, epsilon = 1e-10);
    assert_relative_eq!(t.frobenius_inner(&ta), 236.5602, epsilon = 1e-10);
}

#[test]
fn test_product_times_vector() {
    let t = fives();
    let tm = t * (t + sparse());
    let v = tm * Vector::from([7.0; 3]);
    assert_relative_eq!(v, Vector::from([1655.9214; 3]), epsilon = 1e-9);
}

#[test]
fn test_transpose_of_product() {
    let t = fives();
    let tm = t * (t + sparse());
    let tt = tm.transpose();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(tt[i][j], tm[j][i]);
        }
    }
    assert_relative_eq!(
        tt,
        Tensor::from_rows([[75.0; 3], [76.56; 3], [85.0002; 3]]),
        epsilon = 1e-10
    );
}

#[test]
fn test_display_rows() {
    let ta = fives() + sparse();
    let rendered = alloc::format!("{}", ta);
    assert_eq!(rendered.lines().count(), 3);
    assert!(rendered.starts_with("[[5, 5, 7.00004],"));
}
