use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};
use sparselife::{Pos2, engine::Strategy};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),
    #[error("invalid value `{value}` for --{name}")]
    InvalidValue { name: &'static str, value: String },
    #[error("unknown fill mode `{0}` (expected random, alternating, all, or empty)")]
    FillMode(String),
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("p", "paused", "start the console paused, for editing");
        opts.optflag("", "cold", "recompute every generation from scratch");
        opts.optflag("", "print", "print the final generation to stdout");
        opts.optopt("o", "output", "output file", "FILE");
        opts.optopt("i", "input", "input file", "FILE");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt("f", "fill", "set fill type", "TYPE");
        opts.optopt("", "seed", "seed for the random fill", "SEED");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts
    }

    /// Parses the arguments, or returns `Ok(None)` after printing the usage
    pub fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, ArgsError> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: sparselife [options]"));
            return Ok(None);
        }

        let args = Self { matches };
        args.validate()?;
        Ok(Some(args))
    }
    pub fn from_env() -> Result<Option<Self>, ArgsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    /// Checks every valued option up front, so the getters below can't fail
    fn validate(&self) -> Result<(), ArgsError> {
        self.get::<i32>("width")?;
        self.get::<i32>("height")?;
        self.get::<u64>("seed")?;
        self.get::<u64>("sleep")?;
        self.get::<u64>("gens")?;
        if let Some(mode) = self.matches.opt_str("fill") {
            FillMode::new(&mode).ok_or(ArgsError::FillMode(mode))?;
        }
        Ok(())
    }

    fn get<T: std::str::FromStr>(&self, name: &'static str) -> Result<Option<T>, ArgsError> {
        match self.matches.opt_str(name) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| ArgsError::InvalidValue { name, value }),
            None => Ok(None),
        }
    }

    fn width(&self) -> Option<i32> {
        self.get("width").ok().flatten()
    }
    fn height(&self) -> Option<i32> {
        self.get("height").ok().flatten()
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn paused(&self) -> bool {
        self.matches.opt_present("paused")
    }
    pub fn print(&self) -> bool {
        self.matches.opt_present("print")
    }
    pub fn strategy(&self) -> Strategy {
        if self.matches.opt_present("cold") {
            Strategy::AlwaysCold
        } else {
            Strategy::Incremental
        }
    }

    pub fn generations(&self) -> u64 {
        self.get("gens").ok().flatten().unwrap_or(u64::MAX) // kinda hacky way of saying "infinity"
    }
    pub fn sleep(&self) -> Option<Duration> {
        match self.get("sleep").ok().flatten() {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        }
    }
    pub fn seed(&self) -> Option<u64> {
        self.get("seed").ok().flatten()
    }

    pub fn grid_size(&self) -> (i32, i32) {
        let default = match crossterm::terminal::size() {
            Ok((cols, rows)) if self.console() => (cols as i32, rows as i32 - 1),
            _ => (500, 500),
        };

        (
            self.width().unwrap_or(default.0),
            self.height().unwrap_or(default.1),
        )
    }
    pub fn fill_mode(&self) -> FillMode {
        let mode_str = self.matches.opt_str("fill");
        FillMode::new(mode_str.as_deref().unwrap_or("random")).unwrap_or(FillMode::Random)
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn reserve_size(&self, w: i32, h: i32) -> usize {
        let total = (w.max(0) as usize) * (h.max(0) as usize);
        match self {
            Self::Random => total.div_ceil(2),
            Self::Alternating => total.div_ceil(2),
            Self::All => total,
            Self::Empty => 0,
        }
    }
    fn fill_cell<R: Rng>(&self, cell: Pos2, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.x + cell.y) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }
    pub fn create_alive(self, w: i32, h: i32, seed: Option<u64>) -> Vec<Pos2> {
        let mut alive = Vec::new();
        let reserve_size = self.reserve_size(w, h);
        if reserve_size == 0 {
            // reserve_size indicates this will produce no alive cells
            return alive;
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        alive.reserve(reserve_size);
        for y in 0..h {
            for x in 0..w {
                let cell = Pos2 { x, y };
                if self.fill_cell(cell, &mut rng) {
                    alive.push(cell);
                }
            }
        }
        alive
    }
}
