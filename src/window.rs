use crate::{LiveSet, Pos2};

/// A rectangular view over a set of live cells
///
/// Bounds are kept as `i64` so a window may reach either end of the `i32` range.
pub struct CellWindow<'a> {
    tl: (i64, i64),
    /// exclusive
    br: (i64, i64),
    alive: &'a LiveSet,
}
impl<'a> CellWindow<'a> {
    /// A `width` by `height` window whose top-left cell is `top_left`
    pub fn new(alive: &'a LiveSet, top_left: Pos2, width: u32, height: u32) -> Self {
        let tl = (i64::from(top_left.x), i64::from(top_left.y));
        Self {
            tl,
            br: (tl.0 + i64::from(width), tl.1 + i64::from(height)),
            alive,
        }
    }

    /// A window just large enough to show every live cell
    pub fn fit(alive: &'a LiveSet) -> Self {
        let Some((tl, br)) = alive.bounds() else {
            return Self::new(alive, Pos2::zero(), 0, 0);
        };
        Self {
            tl: (i64::from(tl.x), i64::from(tl.y)),
            br: (i64::from(br.x) + 1, i64::from(br.y) + 1),
            alive,
        }
    }

    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        let (x, y) = (i64::from(pos.x), i64::from(pos.y));
        (self.tl.0..self.br.0).contains(&x) && (self.tl.1..self.br.1).contains(&y)
    }

    /// The live cells inside the window, in no particular order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.alive.iter().filter(move |&pos| self.contains(pos))
    }
}

impl<'a> std::fmt::Display for CellWindow<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut visible: Vec<Pos2> = self.iter().collect();
        visible.sort_unstable();

        // column and row of the last printed cell, none before the first one
        let mut last: Option<(i64, i64)> = None;
        for alive in visible {
            let (x, y) = (i64::from(alive.x), i64::from(alive.y));
            // lines to print, then padding spaces to print
            let (lines, padding) = match last {
                Some((last_x, last_y)) if last_y == y => (0, x - last_x - 1),
                Some((_, last_y)) => (y - last_y, x - self.tl.0),
                None => (y - self.tl.1, x - self.tl.0),
            };
            let lines = usize::try_from(lines).map_err(|_| std::fmt::Error)?;
            let padding = usize::try_from(padding).map_err(|_| std::fmt::Error)?;
            write!(f, "{0:\n<1$}{0: <2$}█", "", lines, padding)?;
            last = Some((x, y));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i32, i32)]) -> LiveSet {
        cells.iter().copied().map(Pos2::from).collect()
    }

    #[test]
    fn filters_to_half_open_rectangle() {
        let alive = set(&[(0, 0), (2, 2), (3, 0), (-1, 1)]);
        let window = CellWindow::new(&alive, Pos2::zero(), 3, 3);
        let mut visible: Vec<Pos2> = window.iter().collect();
        visible.sort();

        assert_eq!(visible, vec![Pos2::new(0, 0), Pos2::new(2, 2)]);
    }

    #[test]
    fn displays_blinker() {
        let vertical = set(&[(0, -1), (0, 0), (0, 1)]);
        let horizontal = set(&[(-1, 5), (0, 5), (1, 5)]);

        assert_eq!(CellWindow::fit(&vertical).to_string(), "█\n█\n█");
        assert_eq!(CellWindow::fit(&horizontal).to_string(), "███");
    }

    #[test]
    fn displays_gaps() {
        let alive = set(&[(0, 0), (2, 0), (1, 2)]);

        assert_eq!(CellWindow::fit(&alive).to_string(), "█ █\n\n █");
    }

    #[test]
    fn fit_keeps_cells_on_maximum_edge() {
        let alive = set(&[(i32::MAX - 1, i32::MAX), (i32::MAX, i32::MAX)]);

        assert_eq!(CellWindow::fit(&alive).to_string(), "██");
    }

    #[test]
    fn fit_pads_from_minimum_edge() {
        let alive = set(&[(i32::MIN, i32::MIN), (i32::MIN + 2, i32::MIN), (i32::MIN + 1, i32::MIN + 1)]);

        assert_eq!(CellWindow::fit(&alive).to_string(), "█ █\n █");
    }

    #[test]
    fn window_reaching_across_range() {
        let alive = set(&[(i32::MIN, 0), (i32::MAX - 1, 0), (i32::MAX, 0)]);
        // u32::MAX columns starting at i32::MIN end just before i32::MAX
        let window = CellWindow::new(&alive, Pos2::new(i32::MIN, 0), u32::MAX, 1);

        assert!(window.contains(Pos2::new(i32::MIN, 0)));
        assert!(window.contains(Pos2::new(i32::MAX - 1, 0)));
        assert!(!window.contains(Pos2::new(i32::MAX, 0)));
        assert_eq!(window.iter().count(), 2);
    }

    #[test]
    fn empty_window_prints_nothing() {
        assert_eq!(CellWindow::fit(&LiveSet::new()).to_string(), "");
    }
}
