//! In-place partition swaps used to move a spectrum's zero-frequency bin
//! between the center and the edges.

/// Swap the left and right partitions of `v`, in place.
///
/// For a vector of length `N` the partition is split at index `N - N / 2`;
/// the right partition is moved in front of the left one. The input is
/// mutated and the same slice is returned.
///
/// ```
/// let mut v = [0.0f32, 1.0, 2.0];
/// specframe_dsp::shift(&mut v);
/// assert_eq!(v, [2.0, 0.0, 1.0]);
/// ```
pub fn shift(v: &mut [f32]) -> &mut [f32] {
    let split = v.len() - v.len() / 2;
    v.rotate_left(split);
    v
}

/// Swap the right and left partitions of `v`, in place.
///
/// Unlike [`shift`], the partition is split at index `N / 2`, making this
/// the exact inverse of [`shift`] for every length. The two coincide when
/// `N` is even.
///
/// ```
/// let mut v = [0.0f32, 1.0, 2.0];
/// specframe_dsp::ishift(&mut v);
/// assert_eq!(v, [1.0, 2.0, 0.0]);
/// ```
pub fn ishift(v: &mut [f32]) -> &mut [f32] {
    let split = v.len() / 2;
    v.rotate_left(split);
    v
}
