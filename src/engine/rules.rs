use std::sync::OnceLock;

/// One row per center state (dead, alive), one column per live-neighbor count
type RuleTable = [[bool; 9]; 2];

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn get_rule_table() -> &'static RuleTable {
    static CELL: OnceLock<RuleTable> = OnceLock::new();
    CELL.get_or_init(generate_rule_table)
}

/// Creates a lookup table for the B3/S23 ruleset
///
/// The table is indexed by whether the center cell is alive, then by how many of
/// its 8 neighbors are alive. Returns whether the center is alive next generation.
fn generate_rule_table() -> RuleTable {
    let mut table = [[false; 9]; 2];
    for (alive, row) in table.iter_mut().enumerate() {
        for (neighbors, next) in row.iter_mut().enumerate() {
            *next = matches!((alive == 1, neighbors), (true, 2) | (_, 3));
        }
    }
    table
}

/// Whether a cell is alive in the next generation
#[inline]
pub(super) fn next_state(alive: bool, neighbors: u8) -> bool {
    get_rule_table()[usize::from(alive)][usize::from(neighbors)]
}
