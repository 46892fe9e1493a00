//! Side tags for bisector edges

/// Identifies one side of a bisector edge.
///
/// Every geometric edge separates two sites and carries two clipped
/// endpoints; both are indexed by `Orientation`. The tag records which
/// side of the bisector something belongs to and says nothing about
/// geometric direction on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Right,
}

impl Orientation {
    /// Returns the opposite side.
    #[inline]
    pub fn other(self) -> Orientation {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
        }
    }

    /// Slot in an endpoint pair for this side.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Orientation::Left => 0,
            Orientation::Right => 1,
        }
    }
}
