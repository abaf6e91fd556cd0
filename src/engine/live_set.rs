use crate::Pos2;
use std::collections::HashSet;

/// The sparse set of live cells
///
/// Every mutating operation reports whether the set actually changed, so that
/// redundant edits can be told apart from real ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Pos2>,
}

impl LiveSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `pos` alive, returning `false` if it already was
    #[inline]
    pub fn insert(&mut self, pos: Pos2) -> bool {
        self.cells.insert(pos)
    }

    /// Marks `pos` dead, returning `false` if it already was
    #[inline]
    pub fn erase(&mut self, pos: Pos2) -> bool {
        self.cells.remove(&pos)
    }

    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        self.cells.contains(&pos)
    }

    /// Kills every cell, returning `false` if the set was already empty
    pub fn clear(&mut self) -> bool {
        let changed = !self.cells.is_empty();
        self.cells.clear();
        changed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.cells.iter().copied()
    }

    /// The live cells in row-major order
    pub fn sorted(&self) -> Vec<Pos2> {
        let mut cells: Vec<Pos2> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    /// Inclusive top-left and bottom-right corners of the smallest rectangle
    /// holding every live cell
    pub fn bounds(&self) -> Option<(Pos2, Pos2)> {
        let mut cells = self.iter();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(tl, br), pos| {
            (
                Pos2::new(tl.x.min(pos.x), tl.y.min(pos.y)),
                Pos2::new(br.x.max(pos.x), br.y.max(pos.y)),
            )
        }))
    }
}

impl FromIterator<Pos2> for LiveSet {
    fn from_iter<T: IntoIterator<Item = Pos2>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Pos2> for LiveSet {
    fn extend<T: IntoIterator<Item = Pos2>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}
