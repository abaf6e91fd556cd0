use super::{ChangeList, LiveSet, Transition, neighbors::live_neighbors, rules};

/// Computes the next generation by re-evaluating only the cells in `changes`
///
/// Each candidate counts its live neighbors directly, so no counts carry over
/// between candidates or between generations.
pub(super) fn warm_step(alive: &LiveSet, changes: &ChangeList) -> Transition {
    let mut transition = Transition::default();

    for cell in changes.iter() {
        let is_alive = alive.contains(cell);
        let next = rules::next_state(is_alive, live_neighbors(alive, cell));
        match (is_alive, next) {
            (true, false) => transition.deaths.push(cell),
            (false, true) => transition.births.push(cell),
            _ => {}
        }
    }

    transition
}
