use super::LiveSet;
use crate::Pos2;

/// Counts how many of the 8 cells around `pos` are alive
#[inline]
pub fn live_neighbors(alive: &LiveSet, pos: Pos2) -> u8 {
    pos.neighbors().filter(|&n| alive.contains(n)).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i32, i32)]) -> LiveSet {
        cells.iter().copied().map(Pos2::from).collect()
    }

    #[test]
    fn isolated_cell_has_no_neighbors() {
        let alive = set(&[(4, 4)]);

        assert_eq!(live_neighbors(&alive, Pos2::new(4, 4)), 0);
    }

    #[test]
    fn center_is_not_its_own_neighbor() {
        let alive = set(&[(0, 0), (1, 0), (0, 1), (5, 5)]);

        assert_eq!(live_neighbors(&alive, Pos2::new(0, 0)), 2);
        assert_eq!(live_neighbors(&alive, Pos2::new(1, 1)), 3);
    }

    #[test]
    fn fully_surrounded_cell() {
        let alive: LiveSet = Pos2::zero().neighbors().collect();

        assert_eq!(live_neighbors(&alive, Pos2::zero()), 8);
    }
}
