//! Zig-zag ordering of a square matrix, as used for JPEG coefficients.

/// `n`×`n` matrix where each entry is its position along the zig-zag path
/// that starts top-left, moves right, then sweeps the anti-diagonals.
pub fn zigzag_matrix(n: usize) -> Vec<Vec<usize>> {
    let mut matrix = vec![vec![0; n]; n];
    if n == 0 {
        return matrix;
    }

    let mut next = 0;
    for d in 0..2 * n - 1 {
        let lo = d.saturating_sub(n - 1);
        let hi = d.min(n - 1);
        // Odd diagonals run down-left, even ones up-right
        let rows: Box<dyn Iterator<Item = usize>> = if d % 2 == 1 {
            Box::new(lo..=hi)
        } else {
            Box::new((lo..=hi).rev())
        };
        for row in rows {
            matrix[row][d - row] = next;
            next += 1;
        }
    }
    matrix
}
