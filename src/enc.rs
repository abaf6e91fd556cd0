//! Run-length encoded (RLE) pattern files.

use crate::pos::Pos2;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid run length `{run}` on line {line}")]
    InvalidRun { run: String, line: usize },
    #[error("pattern extends past the coordinate range on line {line}")]
    OutOfRange { line: usize },
}

pub trait PositionEncoder {
    /// Encodes positions given in row-major order
    fn encode(self, positions: &[Pos2]) -> String;
    fn decode(self, value: &str) -> Result<Vec<Pos2>, DecodeError>;
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}
impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, run: i64, c: char) {
        let append = match run {
            0 => String::new(),
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    pub fn end(mut self) -> String {
        self.sequence.push('!');
        self.sequence
    }
}

pub struct RunLengthEncoded {
    name: Option<String>,
    header: bool,
}
impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    fn encode_header(&self, alive_cells: &[Pos2]) -> String {
        let mut header = String::new();
        if !self.header {
            return header;
        }
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {}\n", name));
        }
        let (w, h) = match (alive_cells.first(), alive_cells.last()) {
            (Some(first), Some(last)) => {
                let min_x = alive_cells.iter().map(|p| p.x).min().unwrap_or_default();
                let max_x = alive_cells.iter().map(|p| p.x).max().unwrap_or_default();
                (
                    i64::from(max_x) - i64::from(min_x) + 1,
                    i64::from(last.y) - i64::from(first.y) + 1,
                )
            }
            _ => (0, 0),
        };
        header.push_str(&format!("x = {}, y = {}, rule = B3/S23\n", w, h));
        header
    }
    fn encode_cells(&self, alive_cells: &[Pos2]) -> String {
        debug_assert!(
            alive_cells.windows(2).all(|w| w[0] < w[1]),
            "input is not properly sorted"
        );

        // runs are measured in i64 so patterns spanning the whole i32 range can't overflow
        let min_x = alive_cells
            .iter()
            .map(|p| i64::from(p.x))
            .min()
            .unwrap_or_default();

        // column and row of the last alive cell, none before the first one
        let mut last: Option<(i64, i64)> = None;
        let mut alive_run = 0;
        let mut seq = RunEncoder::new(70);
        for pos in alive_cells {
            let (x, y) = (i64::from(pos.x), i64::from(pos.y));
            let (lines_run, dead_run) = match last {
                // if we're one ahead of the last, then only increment the run
                Some((last_x, last_y)) if last_y == y && last_x + 1 == x => {
                    alive_run += 1;
                    last = Some((x, y));
                    continue;
                }
                Some((last_x, last_y)) if last_y == y => (0, x - last_x - 1),
                Some((_, last_y)) => (y - last_y, x - min_x),
                None => (0, x - min_x),
            };
            // NOTE: order matters!
            seq.push_run(alive_run, 'o');
            seq.push_run(lines_run, '$');
            seq.push_run(dead_run, 'b');

            alive_run = 1;
            last = Some((x, y));
        }

        seq.push_run(alive_run, 'o');
        seq.end()
    }
}
impl Default for RunLengthEncoded {
    fn default() -> Self {
        Self {
            name: None,
            header: true,
        }
    }
}

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d*)([bo$!])").expect("valid token pattern"));

impl PositionEncoder for RunLengthEncoded {
    fn encode(self, cells: &[Pos2]) -> String {
        format!("{}{}\n", self.encode_header(cells), self.encode_cells(cells))
    }

    fn decode(self, value: &str) -> Result<Vec<Pos2>, DecodeError> {
        let mut alive = Vec::new();
        // tracked wider than i32 so an out of range pattern is reported, not wrapped
        let (mut x, mut y) = (0i64, 0i64);
        'lines_loop: for (i, mut line) in value.lines().enumerate() {
            let line_no = i + 1;
            if let Some(i) = line.find('#') {
                line = &line[..i];
            }
            // the size header carries nothing the cells don't
            if line.trim_start().starts_with('x') {
                continue;
            }

            let out_of_range = || DecodeError::OutOfRange { line: line_no };
            let cell = |v: i64| i32::try_from(v).map_err(|_| out_of_range());
            for (_, [run_str, state]) in TOKEN.captures_iter(line).map(|x| x.extract()) {
                let run = match run_str {
                    "" => 1,
                    s => s.parse::<i64>().map_err(|_| DecodeError::InvalidRun {
                        run: s.to_owned(),
                        line: line_no,
                    })?,
                };
                let advance = |v: i64| v.checked_add(run).ok_or_else(out_of_range);
                match state {
                    "!" => break 'lines_loop,
                    "o" => {
                        let end = advance(x)?;
                        let row = cell(y)?;
                        let cells = cell(x)?..=cell(end - 1)?;
                        alive.extend(cells.map(|x| Pos2 { x, y: row }));
                        x = end;
                    }
                    "b" => x = advance(x)?,
                    "$" => {
                        x = 0;
                        y = advance(y)?;
                    }
                    _ => unreachable!(),
                }
            }
        }

        Ok(alive)
    }
}
