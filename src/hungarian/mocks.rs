use super::matrix::CostMatrix;

fn to_cost_matrix<const N: usize>(rows: [[i64; N]; N]) -> CostMatrix<i64> {
    match CostMatrix::new(rows.iter().map(|row| row.to_vec()).collect()) {
        Ok(m) => m,
        Err(_) => unreachable!("array rows are always square"),
    }
}

/// mock matrix generation functions
/// each returns the matrix and its minimum total cost
pub fn mock_matrix1() -> (CostMatrix<i64>, i64) {
    let m = to_cost_matrix([
        [1, 2, 3, 0, 1],
        [0, 3, 12, 1, 1],
        [3, 0, 1, 13, 1],
        [3, 1, 1, 12, 0],
        [3, 1, 1, 12, 0],
    ]);
    (m, 1)
}

pub fn mock_matrix2() -> (CostMatrix<i64>, i64) {
    let m = to_cost_matrix([
        [0, 2, 0, 0, 1],
        [0, 3, 12, 1, 1],
        [3, 1, 1, 13, 1],
        [3, 1, 1, 12, 0],
        [3, 1, 1, 12, 0],
    ]);
    (m, 2)
}

/// degenerate matrix with many equal values
pub fn mock_matrix3() -> (CostMatrix<i64>, i64) {
    let m = to_cost_matrix([
        [-3, -3, -3, -3, -2, -2, -2, -2, -99, -99],
        [-3, -3, -3, -3, -5, -5, -5, -5, -2, -99],
        [-2, -2, -2, -2, -5, -5, -5, -5, -3, -99],
        [-2, -2, -2, -2, -5, -5, -5, -5, -99, -3],
        [-3, -3, -3, -3, -2, -2, -2, -2, -99, -5],
        [-4, -4, -4, -4, -3, -3, -3, -3, -1, -99],
        [-4, -4, -4, -4, -3, -3, -3, -3, -99, -1],
        [-4, -4, -4, -4, -1, -1, -1, -1, -99, -99],
        [-1, -1, -1, -1, -3, -3, -3, -3, -6, -99],
        [-3, -3, -3, -3, -1, -1, -1, -1, -99, -6],
    ]);
    (m, -231)
}

pub fn mock_matrix4() -> (CostMatrix<i64>, i64) {
    let m = to_cost_matrix([
        [-2, -2, -2, -2, -5, -5, -5, -5, -3, -99],
        [-2, -2, -2, -2, -5, -5, -5, -5, -99, -3],
        [-2, -2, -2, -2, -3, -3, -3, -3, -99, -99],
        [-3, -3, -3, -3, -5, -5, -5, -5, -8, -2],
        [-2, -2, -2, -2, -3, -3, -3, -3, -99, -8],
        [-3, -3, -3, -3, -1, -1, -1, -1, -99, -4],
        [-1, -1, -1, -1, -3, -3, -3, -3, -99, -99],
        [-3, -3, -3, -3, -1, -1, -1, -1, -6, -99],
        [-3, -3, -3, -3, -1, -1, -1, -1, -99, -6],
        [-1, -1, -1, -1, -3, -3, -3, -3, -7, -99],
    ]);
    (m, -227)
}

pub fn mock_matrix5() -> (CostMatrix<i64>, i64) {
    let m = to_cost_matrix([
        [-5, -5, -5, -5, -3, -3, -3, -3, -6, -2],
        [-2, -2, -2, -2, -3, -3, -3, -3, -99, -6],
        [-3, -3, -3, -3, -2, -2, -2, -2, -99, -99],
        [-2, -2, -2, -2, -3, -3, -3, -3, -11, -5],
        [-3, -3, -3, -3, -2, -2, -2, -2, -99, -11],
        [-3, -3, -3, -3, -4, -4, -4, -4, -1, -7],
        [-4, -4, -4, -4, -1, -1, -1, -1, -3, -99],
        [-3, -3, -3, -3, -4, -4, -4, -4, -9, -1],
        [-1, -1, -1, -1, -4, -4, -4, -4, -99, -9],
        [-4, -4, -4, -4, -1, -1, -1, -1, -10, -3],
    ]);
    (m, -229)
}

pub fn all_mocks() -> Vec<(CostMatrix<i64>, i64)> {
    vec![
        mock_matrix1(),
        mock_matrix2(),
        mock_matrix3(),
        mock_matrix4(),
        mock_matrix5(),
    ]
}
