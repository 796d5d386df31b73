/// Build a [`DynamicArray`](crate::DynamicArray) from a literal sequence.
///
/// - `dynarr![]` is empty with zero capacity.
/// - `dynarr![a, b, c]` holds the elements in order; length and capacity
///   both equal the element count.
/// - `dynarr![value; n]` holds `n` clones of `value`.
///
/// ```
/// use dynarr_array::dynarr;
///
/// let arr = dynarr![1, 2, 3];
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.capacity(), 3);
///
/// let zeros = dynarr![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}
