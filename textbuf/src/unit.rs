/// Element type of a text buffer.
///
/// Implemented for `u8` (narrow, 8-bit code units) and `char` (wide,
/// fixed-width code points). The capacity and length invariants of
/// [`TextBuf`](crate::TextBuf) are identical for both widths.
pub trait Unit: Copy + PartialEq + Eq + Default + core::fmt::Debug {}

impl Unit for u8 {}
impl Unit for char {}
