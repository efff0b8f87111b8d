//! Test data generators for synthetic slice and mask data.
//!
//! These generators create predictable, verifiable patterns that can be used
//! across the test suite.

use viewer_common::SliceIdentity;

/// Creates a label field of concentric square rings.
///
/// The outermost ring is background (0), and each ring inwards carries the
/// next label, capped at `max_label`. This mirrors the integer label maps the
/// contour overlay is drawn from.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `max_label` - Highest label value to emit
///
/// # Example
///
/// ```
/// use test_utils::create_label_field;
///
/// let field = create_label_field(5, 5, 6);
/// assert_eq!(field[0][0], 0.0);
/// assert_eq!(field[2][2], 2.0);
/// ```
pub fn create_label_field(width: usize, height: usize, max_label: u32) -> Vec<Vec<f64>> {
    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let ring = row.min(col).min(height - 1 - row).min(width - 1 - col);
                    (ring as u32).min(max_label) as f64
                })
                .collect()
        })
        .collect()
}

/// Creates a label field and serializes it the way the overlay source
/// arrives on the wire: a JSON array of rows.
pub fn create_label_field_json(width: usize, height: usize, max_label: u32) -> String {
    let field = create_label_field(width, height, max_label);
    serde_json::to_string(&field).unwrap_or_else(|_| "[]".to_string())
}

/// Creates `count` distinct slice identities named `slice_0`, `slice_1`, ...
pub fn create_slice_ids(count: usize) -> Vec<SliceIdentity> {
    (0..count)
        .map(|i| SliceIdentity::new(format!("slice_{}", i)))
        .collect()
}
