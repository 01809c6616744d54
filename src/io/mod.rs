pub mod octave_loader;

/// Width of the zero-padded view index substituted into name patterns.
const VIEW_INDEX_WIDTH: usize = 3;

/// Replaces the `#` placeholder of an image or pose name pattern with the
/// zero-padded view index, e.g. `rect_#_3_r5000.png` -> `rect_001_3_r5000.png`.
pub fn substitute_view_index(pattern: &str, view: usize) -> String {
    pattern.replace('#', &format!("{:0width$}", view, width = VIEW_INDEX_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_zero_padded_view_index() {
        assert_eq!(substitute_view_index("Rectified/scan9/rect_#_3_r5000.png", 1), "Rectified/scan9/rect_001_3_r5000.png");
        assert_eq!(substitute_view_index("dinoSparseRing/dinoSR0#.png", 12), "dinoSparseRing/dinoSR0012.png");
    }

    #[test]
    fn pattern_without_placeholder_is_unchanged() {
        assert_eq!(substitute_view_index("dinoSparseRing/dinoSR_par.txt", 7), "dinoSparseRing/dinoSR_par.txt");
    }
}
