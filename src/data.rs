use nalgebra::{matrix, SMatrix, SVector};

/// Number of data rows in the example (the batch dimension).
pub const BATCH_SIZE: usize = 3;
/// Number of score columns per row (the class dimension).
pub const NUM_CLASSES: usize = 4;

pub type ScoreMatrix = SMatrix<f32, 3, 4>;
pub type ValueVector = SVector<f32, 3>;

/// The fixed score matrix the diagram walks through.
pub fn score_matrix() -> ScoreMatrix {
    matrix![
        0.1, 0.2, 0.6, 0.1;
        0.8, 0.1, 0.0, 0.1;
        0.3, 0.3, 0.1, 0.3;
    ]
}

/// Per-row target column indices (which class to pick out of each row).
pub fn target_columns() -> [usize; BATCH_SIZE] {
    [2, 0, 1]
}

/// The arange over the batch dimension shown in the "Row Idx" panel.
pub fn row_indices() -> [usize; BATCH_SIZE] {
    [0, 1, 2]
}

/// Row-wise gather: element `r` of the result is `scores[(r, targets[r])]`.
pub fn gather(scores: &ScoreMatrix, targets: &[usize; BATCH_SIZE]) -> ValueVector {
    ValueVector::from_fn(|r, _| {
        debug_assert!(targets[r] < NUM_CLASSES);
        scores[(r, targets[r])]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gather_extracts_expected_values() {
        let extracted = gather(&score_matrix(), &target_columns());
        let expected = [0.6, 0.8, 0.3];
        for r in 0..BATCH_SIZE {
            assert!(
                (extracted[r] - expected[r]).abs() < 1e-6,
                "row {}: got {}, expected {}",
                r,
                extracted[r],
                expected[r]
            );
        }
    }

    #[test]
    fn gather_matches_direct_indexing() {
        let scores = score_matrix();
        let targets = target_columns();
        let extracted = gather(&scores, &targets);
        for r in 0..BATCH_SIZE {
            assert_eq!(extracted[r], scores[(r, targets[r])]);
        }
    }

    #[test]
    fn row_indices_are_an_arange() {
        for (i, r) in row_indices().iter().enumerate() {
            assert_eq!(*r, i);
        }
    }

    #[test]
    fn target_columns_are_in_bounds() {
        for c in target_columns() {
            assert!(c < NUM_CLASSES);
        }
    }
}
