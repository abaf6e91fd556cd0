use std::{cmp::Ordering, ops::Add};

/// Offsets of the 8 cells surrounding a position, row by row
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A cell coordinate on the unbounded grid
///
/// Identity and hashing depend on `x` and `y` only. Arithmetic saturates at the
/// bounds of `i32` rather than wrapping, since a wrapped coordinate would alias a
/// cell on the opposite side of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Offsets this position, or [`None`] if the result is not representable
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The 8 positions surrounding this one
    ///
    /// Neighbors past the edge of the `i32` range do not exist and are skipped,
    /// so a cell on the edge yields fewer than 8.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Pos2> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.checked_offset(dx, dy))
    }

    /// The 3x3 block centered on this position, including the position itself
    #[inline]
    pub fn neighborhood(self) -> impl Iterator<Item = Pos2> {
        std::iter::once(self).chain(self.neighbors())
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl From<(i32, i32)> for Pos2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // compare y coordinate first, then x coordinate
        // i.e. if y coordinate is equal, then compare x coordinate
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_exclude_center() {
        let center = Pos2::new(-3, 7);
        let neighbors: HashSet<Pos2> = center.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
        assert!(neighbors.iter().all(|n| (n.x - center.x).abs() <= 1 && (n.y - center.y).abs() <= 1));
    }

    #[test]
    fn neighborhood_is_three_by_three() {
        let block: HashSet<Pos2> = Pos2::zero().neighborhood().collect();

        assert_eq!(block.len(), 9);
        assert!(block.contains(&Pos2::zero()));
        assert!(block.contains(&Pos2::new(1, 1)));
        assert!(block.contains(&Pos2::new(-1, -1)));
    }

    #[test]
    fn neighbors_stop_at_range_edge() {
        let corner = Pos2::new(i32::MAX, i32::MIN);
        let neighbors: Vec<Pos2> = corner.neighbors().collect();

        // only the 3 neighbors toward the interior are representable
        assert_eq!(neighbors.len(), 3);
        assert!(!neighbors.contains(&corner));
    }

    #[test]
    fn arithmetic_saturates() {
        let edge = Pos2::new(i32::MAX, i32::MIN);

        assert_eq!(edge + Pos2::new(1, 1), Pos2::new(i32::MAX, i32::MIN + 1));
        assert_eq!(edge + Pos2::new(-1, -1), Pos2::new(i32::MAX - 1, i32::MIN));
    }

    #[test]
    fn orders_row_major() {
        let mut cells = vec![Pos2::new(1, 1), Pos2::new(5, 0), Pos2::new(-2, 1)];
        cells.sort();

        assert_eq!(cells, vec![Pos2::new(5, 0), Pos2::new(-2, 1), Pos2::new(1, 1)]);
    }
}
