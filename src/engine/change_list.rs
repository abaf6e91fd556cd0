use super::Transition;
use crate::Pos2;
use std::collections::HashSet;

/// The cells whose state may differ in the next generation
///
/// Built as the union of the 3x3 neighborhoods of every cell that changed in the
/// generation just computed. A cell outside of it has the same live-neighbor count
/// as last generation, so it cannot change next generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeList {
    cells: HashSet<Pos2>,
}

impl ChangeList {
    pub fn from_transition(transition: &Transition) -> Self {
        let mut cells = HashSet::with_capacity(transition.len() * 9);
        for changed in transition.changed() {
            cells.extend(changed.neighborhood());
        }
        Self { cells }
    }

    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        self.cells.contains(&pos)
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

    #[inline]
    pub(super) fn clear(&mut self) {
        self.cells.clear();
    }
}
