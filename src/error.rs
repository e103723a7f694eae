//! Error values shared by both deque flavors.

use thiserror::Error;

/// The ways a deque operation can fail.
///
/// Pops and peeks on an empty deque report [`DequeError::Empty`] instead of
/// handing back a placeholder value. The fallible push variants report
/// [`DequeError::CursorOverflow`] once a cursor has consumed its entire half
/// of the signed 64-bit key space.
///
/// # Examples
/// ```
/// use sparque::{DequeError, SparseDeque};
/// let mut deque: SparseDeque<i32> = SparseDeque::new();
/// assert_eq!(deque.pop_front(), Err(DequeError::Empty));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// The deque holds no elements, so there is no boundary slot to read.
    #[error("deque is empty")]
    Empty,
    /// A cursor reached the end of the representable key space. Only
    /// reachable by sustained single-directional insertion on the order of
    /// 2^63 pushes to one end.
    #[error("deque cursor exhausted the 64-bit key space")]
    CursorOverflow,
}
