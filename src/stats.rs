use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// A snapshot of the engine after one generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sample {
    pub alive: usize,
    pub active: usize,
}

pub trait Recorder {
    type Str: AsRef<str>;

    fn record(&mut self, sample: Sample);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> Self::Str;
}

pub struct SimpleRecord {
    gens: usize,
    last_sample: Sample,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(initial: Sample) -> Self {
        Self {
            gens: 0,
            last_sample: initial,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    /// Updates the counts shown without counting a generation, e.g. after an edit
    pub fn observe(&mut self, sample: Sample) {
        self.last_sample = sample;
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, sample: Sample) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.last_sample = sample;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    fn report(&mut self) -> Self::Str {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}, active:{}",
            gens_per_sec, self.gens, self.last_sample.alive, self.last_sample.active
        )
    }
}

pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, Sample)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(initial: Sample) -> Self {
        Self {
            inner: SimpleRecord::new(initial),
            data: Vec::new(),
            last: Instant::now(),
        }
    }

    pub fn write_to<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        out.write_all(b"gen,delta_t,alive,active\n")?;
        for (i, (delta, sample)) in self.data.iter().enumerate() {
            let line = format!("{},{},{},{}\n", i, delta, sample.alive, sample.active);
            out.write_all(line.as_bytes())?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_to(std::io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    type Str = <SimpleRecord as Recorder>::Str;

    fn record(&mut self, sample: Sample) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, sample));
        self.inner.record(sample);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> Self::Str {
        self.inner.report()
    }
}

pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(initial: Sample, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(initial))
        } else {
            Self::Simple(SimpleRecord::new(initial))
        }
    }

    pub fn observe(&mut self, sample: Sample) {
        match self {
            Self::Csv(r) => r.inner.observe(sample),
            Self::Simple(r) => r.observe(sample),
        }
    }

    /// Writes the per-generation CSV, if this recorder keeps one
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        match self {
            Self::Csv(r) => r.save(path),
            Self::Simple(_) => Ok(()),
        }
    }
}
impl Recorder for SwitchRecorder {
    type Str = String;

    fn record(&mut self, sample: Sample) {
        match self {
            Self::Csv(r) => r.record(sample),
            Self::Simple(r) => r.record(sample),
        }
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Csv(r) => r.has_report(),
            Self::Simple(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> Self::Str {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}
