use super::{LiveSet, Transition, rules};
use std::collections::HashMap;

/// Computes the next generation by scanning every live cell from scratch
///
/// Each live cell counts its own live neighbors, and adds one to a candidate
/// count for each dead neighbor. Candidate counts are only read after the whole
/// set has been scanned, so every live neighbor of a candidate has been counted.
pub(super) fn cold_scan(alive: &LiveSet) -> Transition {
    let mut candidates: HashMap<_, u8> = HashMap::with_capacity(alive.len() * 2);
    let mut deaths = Vec::new();

    for cell in alive.iter() {
        let mut count = 0u8;
        for neighbor in cell.neighbors() {
            if alive.contains(neighbor) {
                count += 1;
            } else {
                *candidates.entry(neighbor).or_default() += 1;
            }
        }
        if !rules::next_state(true, count) {
            deaths.push(cell);
        }
    }

    let births = candidates
        .into_iter()
        .filter(|&(_, count)| rules::next_state(false, count))
        .map(|(pos, _)| pos)
        .collect();

    Transition { births, deaths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pos2;

    fn set(cells: &[(i32, i32)]) -> LiveSet {
        cells.iter().copied().map(Pos2::from).collect()
    }

    #[test]
    fn isolated_cell_dies() {
        let transition = cold_scan(&set(&[(3, 3)]));

        assert_eq!(transition.deaths, vec![Pos2::new(3, 3)]);
        assert!(transition.births.is_empty());
    }

    #[test]
    fn blinker_rotates() {
        let mut transition = cold_scan(&set(&[(-1, 0), (0, 0), (1, 0)]));
        transition.births.sort();
        transition.deaths.sort();

        assert_eq!(transition.births, vec![Pos2::new(0, -1), Pos2::new(0, 1)]);
        assert_eq!(transition.deaths, vec![Pos2::new(-1, 0), Pos2::new(1, 0)]);
    }

    #[test]
    fn crowded_candidate_is_not_born() {
        // the dead center is referenced by all 8 ring cells in the same pass
        let ring: LiveSet = Pos2::zero().neighbors().collect();
        let transition = cold_scan(&ring);

        assert!(!transition.births.contains(&Pos2::zero()));
    }

    #[test]
    fn candidate_with_three_neighbors_spread_out_is_born() {
        let transition = cold_scan(&set(&[(-1, -1), (1, -1), (0, 1)]));

        assert_eq!(transition.births, vec![Pos2::zero()]);
    }
}
