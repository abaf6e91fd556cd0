mod change_list;
mod cold;
mod live_set;
mod neighbors;
mod rules;
mod warm;

pub use self::change_list::ChangeList;
pub use self::live_set::LiveSet;
pub use self::neighbors::live_neighbors;
use crate::Pos2;

/// What the next call to [`GameOfLife::step`] will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Stepping is a no-op; edits are accepted
    Paused,
    /// The next step scans every live cell
    RunningCold,
    /// The next step only re-evaluates the [`ChangeList`]
    RunningWarm,
}

/// How running generations are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Cold scan once, then incremental steps until the next edit
    #[default]
    Incremental,
    /// Cold scan every generation
    AlwaysCold,
}

/// The cells that are born and die in one generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub births: Vec<Pos2>,
    pub deaths: Vec<Pos2>,
}

impl Transition {
    #[inline]
    pub fn len(&self) -> usize {
        self.births.len() + self.deaths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.births.is_empty() && self.deaths.is_empty()
    }

    /// Every cell that changed state
    pub fn changed(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.births.iter().chain(self.deaths.iter()).copied()
    }

    fn apply(&self, alive: &mut LiveSet) {
        for &pos in &self.deaths {
            alive.erase(pos);
        }
        alive.extend(self.births.iter().copied());
    }
}

#[derive(Debug)]
pub struct GameOfLife {
    alive: LiveSet,
    changes: ChangeList,
    mode: Mode,
    strategy: Strategy,
    /// Set by any edit that changed [`LiveSet`], cleared by a cold scan
    edited: bool,
    generation: u64,
}

impl Default for GameOfLife {
    fn default() -> Self {
        Self::new()
    }
}

impl GameOfLife {
    #[inline]
    pub fn new() -> Self {
        Self::from_alive(LiveSet::new().iter())
    }

    /// Creates a paused engine from the given live cells
    #[inline]
    pub fn from_alive<I: IntoIterator<Item = Pos2>>(alive: I) -> Self {
        Self {
            alive: alive.into_iter().collect(),
            changes: ChangeList::default(),
            mode: Mode::Paused,
            strategy: Strategy::default(),
            edited: true,
            generation: 0,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Makes `pos` alive while paused
    ///
    /// Returns whether the set changed. Edits while running are rejected.
    pub fn edit_insert(&mut self, pos: Pos2) -> bool {
        self.edit(|alive| alive.insert(pos))
    }

    /// Makes `pos` dead while paused
    ///
    /// Returns whether the set changed. Edits while running are rejected.
    pub fn edit_erase(&mut self, pos: Pos2) -> bool {
        self.edit(|alive| alive.erase(pos))
    }

    /// Kills every cell while paused
    ///
    /// Returns whether the set changed. Edits while running are rejected.
    pub fn edit_clear(&mut self) -> bool {
        self.edit(LiveSet::clear)
    }

    fn edit(&mut self, op: impl FnOnce(&mut LiveSet) -> bool) -> bool {
        if self.is_running() {
            return false;
        }
        let changed = op(&mut self.alive);
        if changed {
            // the change list only describes the last computed generation
            self.edited = true;
            self.changes.clear();
        }
        changed
    }

    /// Pauses or resumes the simulation
    ///
    /// Resuming after a net edit schedules a cold scan, otherwise the incremental
    /// engine picks up where it left off.
    pub fn set_running(&mut self, running: bool) {
        self.mode = match (running, self.mode) {
            (false, _) => Mode::Paused,
            (true, Mode::Paused) if self.edited || self.strategy == Strategy::AlwaysCold => {
                Mode::RunningCold
            }
            (true, Mode::Paused) => Mode::RunningWarm,
            (true, mode) => mode,
        };
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.mode != Mode::Paused
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Advances one generation if running
    ///
    /// Returns whether a generation was computed.
    pub fn step(&mut self) -> bool {
        let transition = match self.mode {
            Mode::Paused => return false,
            Mode::RunningCold => cold::cold_scan(&self.alive),
            Mode::RunningWarm => warm::warm_step(&self.alive, &self.changes),
        };

        self.changes = ChangeList::from_transition(&transition);
        transition.apply(&mut self.alive);
        self.edited = false;
        self.generation += 1;
        self.mode = match self.strategy {
            Strategy::Incremental => Mode::RunningWarm,
            Strategy::AlwaysCold => Mode::RunningCold,
        };
        true
    }

    /// The live cells, in no particular order
    #[inline]
    pub fn live_cells(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.alive.iter()
    }

    #[inline]
    pub fn live_set(&self) -> &LiveSet {
        &self.alive
    }

    /// The cells that will be re-evaluated by the next incremental step
    #[inline]
    pub fn active_cells(&self) -> &ChangeList {
        &self.changes
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.alive.len()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.changes.len()
    }

    /// Number of generations computed so far
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn take(self) -> LiveSet {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(cells: &[(i32, i32)]) -> GameOfLife {
        GameOfLife::from_alive(cells.iter().copied().map(Pos2::from))
    }

    fn running(cells: &[(i32, i32)], strategy: Strategy) -> GameOfLife {
        let mut game = game(cells).with_strategy(strategy);
        game.set_running(true);
        game
    }

    fn live(cells: &[(i32, i32)]) -> LiveSet {
        cells.iter().copied().map(Pos2::from).collect()
    }

    const GLIDER: [(i32, i32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    const BLOCK: [(i32, i32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

    #[test]
    fn starts_paused_and_cold() {
        let mut game = game(&BLOCK);

        assert_eq!(game.mode(), Mode::Paused);
        assert!(!game.step());
        assert_eq!(game.generation(), 0);

        game.set_running(true);
        assert_eq!(game.mode(), Mode::RunningCold);
        assert!(game.step());
        assert_eq!(game.mode(), Mode::RunningWarm);
    }

    #[test]
    fn step_while_paused_is_noop() {
        let mut game = game(&[(0, 0)]);

        assert!(!game.step());
        assert_eq!(game.live_count(), 1);
    }

    #[test]
    fn edits_force_cold_scan() {
        let mut game = running(&BLOCK, Strategy::Incremental);
        game.step();
        game.set_running(false);

        assert!(game.edit_insert(Pos2::new(10, 10)));
        assert_eq!(game.active_count(), 0);
        game.set_running(true);
        assert_eq!(game.mode(), Mode::RunningCold);
    }

    #[test]
    fn noop_edits_keep_warm_mode() {
        let mut game = running(&BLOCK, Strategy::Incremental);
        game.step();
        game.set_running(false);

        assert!(!game.edit_insert(Pos2::new(0, 0)));
        assert!(!game.edit_erase(Pos2::new(50, 50)));
        game.set_running(true);
        assert_eq!(game.mode(), Mode::RunningWarm);
        assert_eq!(game.live_set(), &live(&BLOCK));
    }

    #[test]
    fn clear_of_empty_set_is_noop() {
        let mut game = running(&[(0, 0)], Strategy::Incremental);
        game.step();
        game.set_running(false);

        assert_eq!(game.live_count(), 0);
        assert!(!game.edit_clear());
        game.set_running(true);
        assert_eq!(game.mode(), Mode::RunningWarm);
    }

    #[test]
    fn edits_rejected_while_running() {
        let mut game = running(&BLOCK, Strategy::Incremental);

        assert!(!game.edit_insert(Pos2::new(5, 5)));
        assert!(!game.edit_erase(Pos2::new(0, 0)));
        assert!(!game.edit_clear());
        assert_eq!(game.live_set(), &live(&BLOCK));
    }

    #[test]
    fn pause_and_resume_stays_warm() {
        let mut game = running(&GLIDER, Strategy::Incremental);
        game.step();
        game.set_running(false);
        game.set_running(true);

        assert_eq!(game.mode(), Mode::RunningWarm);
    }

    #[test]
    fn isolated_cell_dies() {
        for strategy in [Strategy::Incremental, Strategy::AlwaysCold] {
            let mut game = running(&[(7, -2)], strategy);

            assert!(game.step());
            assert_eq!(game.live_count(), 0);
        }
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = live(&[(-1, 0), (0, 0), (1, 0)]);
        let vertical = live(&[(0, -1), (0, 0), (0, 1)]);

        for strategy in [Strategy::Incremental, Strategy::AlwaysCold] {
            let mut game = running(&[(-1, 0), (0, 0), (1, 0)], strategy);

            game.step();
            assert_eq!(game.live_set(), &vertical);
            game.step();
            assert_eq!(game.live_set(), &horizontal);
            game.step();
            assert_eq!(game.live_set(), &vertical);
        }
    }

    #[test]
    fn glider_translates_diagonally() {
        let mut cold = running(&GLIDER, Strategy::AlwaysCold);
        let mut warm = running(&GLIDER, Strategy::Incremental);

        for generation in 1..=20 {
            cold.step();
            warm.step();
            assert_eq!(cold.live_set(), warm.live_set(), "generation {generation}");

            if generation % 4 == 0 {
                let shift = generation / 4;
                let expected: LiveSet = GLIDER
                    .iter()
                    .map(|&(x, y)| Pos2::new(x + shift, y + shift))
                    .collect();
                assert_eq!(warm.live_set(), &expected, "generation {generation}");
            }
        }
    }

    #[test]
    fn block_is_stable_and_goes_quiet() {
        let mut game = running(&BLOCK, Strategy::Incremental);

        for _ in 0..100 {
            game.step();
            assert_eq!(game.live_set(), &live(&BLOCK));
        }
        assert_eq!(game.active_count(), 0);
        assert_eq!(game.generation(), 100);
    }

    #[test]
    fn active_count_tracks_changed_neighborhoods() {
        let mut game = running(&[(0, 0)], Strategy::Incremental);
        game.step();

        // one death, so exactly its 3x3 neighborhood is active
        assert_eq!(game.active_count(), 9);
        game.step();
        assert_eq!(game.active_count(), 0);
    }
}
