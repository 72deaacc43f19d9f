//! Historical draw records and their CSV storage.
//!
//! # Storage Format
//!
//! One CSV file per lottery, named by [`LotteryKind::data_file_name`]:
//!
//! ```text
//! Date,Number1,...,NumberN[,Powerball | ,Star1,...,StarM]
//! ```
//!
//! Loading is lenient: a combined `Numbers` (or `Stars`) column is accepted in
//! place of the numbered columns, several date formats are understood, and
//! rows that cannot be parsed are skipped with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use csv::StringRecord;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{FortunaError, Result};
use crate::lottery::{Bonus, LotteryKind, NumberRange, Ticket};

/// Seed used when filling in missing data files.
pub const DEFAULT_SYNTHETIC_SEED: u64 = 42;

/// Draws generated per missing data file.
pub const DEFAULT_SYNTHETIC_DRAWS: usize = 100;

/// Date formats tried in order by [`parse_date`].
const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%B %d, %Y",
];

/// One historical draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub date: Option<NaiveDate>,
    /// Sorted ascending.
    pub numbers: Vec<i64>,
    pub lottery: LotteryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powerball: Option<i64>,
    /// Sorted ascending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<Vec<i64>>,
}

impl Draw {
    pub fn from_ticket(lottery: LotteryKind, date: Option<NaiveDate>, ticket: Ticket) -> Self {
        Self {
            date,
            numbers: ticket.numbers,
            lottery,
            powerball: ticket.powerball,
            stars: ticket.stars,
        }
    }
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

/// Parse a date in any of the supported formats.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let parsed = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok());
    if parsed.is_none() {
        warn!("failed to parse date: {s:?}");
    }
    parsed
}

/// Parse delimited integers. Any invalid token yields an empty list.
pub fn parse_numbers(s: &str, delimiter: char) -> Vec<i64> {
    let parsed: std::result::Result<Vec<i64>, _> = s
        .split(delimiter)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::parse::<i64>)
        .collect();
    parsed.unwrap_or_else(|_| {
        warn!("failed to parse numbers: {s:?}");
        Vec::new()
    })
}

// ---------------------------------------------------------------------------
// Synthetic data
// ---------------------------------------------------------------------------

/// Generate `num_draws` weekly draws starting 2020-01-01.
///
/// Output is fully determined by `seed`; `None` seeds from the OS.
pub fn generate_synthetic_draws(
    kind: LotteryKind,
    num_draws: usize,
    seed: Option<u64>,
) -> Result<Vec<Draw>> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let config = kind.config();
    let start = NaiveDate::from_ymd_opt(2020, 1, 1);

    (0..num_draws)
        .map(|i| {
            let date = start.and_then(|d| d.checked_add_days(Days::new(7 * i as u64)));
            let ticket = config.generate_ticket_with_rng(&mut rng)?;
            Ok(Draw::from_ticket(kind, date, ticket))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV write
// ---------------------------------------------------------------------------

/// Write draws to `path`, creating parent directories.
///
/// Columns are derived from the first draw.
pub fn save_draws(draws: &[Draw], path: &Path) -> Result<()> {
    let first = draws.first().ok_or(FortunaError::EmptyDataset)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let n_numbers = first.numbers.len();
    let n_stars = first.stars.as_ref().map_or(0, Vec::len);
    let has_powerball = first.powerball.is_some();

    let mut header = vec!["Date".to_string()];
    header.extend((1..=n_numbers).map(|i| format!("Number{i}")));
    if has_powerball {
        header.push("Powerball".to_string());
    } else {
        header.extend((1..=n_stars).map(|i| format!("Star{i}")));
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&header)?;

    for draw in draws {
        let mut row = Vec::with_capacity(header.len());
        row.push(
            draw.date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        row.extend(pad(&draw.numbers, n_numbers));
        if has_powerball {
            row.push(draw.powerball.map(|p| p.to_string()).unwrap_or_default());
        } else {
            row.extend(pad(draw.stars.as_deref().unwrap_or(&[]), n_stars));
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;

    info!("saved {} {} draws to {}", draws.len(), first.lottery, path.display());
    Ok(())
}

fn pad(values: &[i64], width: usize) -> Vec<String> {
    (0..width)
        .map(|i| values.get(i).map(|v| v.to_string()).unwrap_or_default())
        .collect()
}

// ---------------------------------------------------------------------------
// CSV read
// ---------------------------------------------------------------------------

/// Read every parseable draw for `kind` from `path`.
pub fn load_draws(path: &Path, kind: LotteryKind) -> Result<Vec<Draw>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut draws = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!("{}: skipping row {}: {e}", path.display(), line + 1);
                continue;
            }
        };
        match parse_row(&headers, &record, kind) {
            Ok(Some(draw)) => draws.push(draw),
            Ok(None) => warn!("{}: row {} has no numbers", path.display(), line + 1),
            Err(e) => warn!("{}: skipping row {}: {e}", path.display(), line + 1),
        }
    }
    Ok(draws)
}

fn field<'a>(headers: &StringRecord, record: &'a StringRecord, name: &str) -> Option<&'a str> {
    let idx = headers.iter().position(|h| h == name)?;
    record.get(idx).filter(|v| !v.is_empty())
}

/// Read `{prefix}1..={count}` columns, falling back to a combined column.
fn numbered_columns(
    headers: &StringRecord,
    record: &StringRecord,
    prefix: &str,
    count: usize,
    combined: &str,
) -> std::result::Result<Vec<i64>, std::num::ParseIntError> {
    let mut values = Vec::with_capacity(count);
    for i in 1..=count {
        if let Some(v) = field(headers, record, &format!("{prefix}{i}")) {
            values.push(v.parse()?);
        }
    }
    if values.is_empty() {
        if let Some(v) = field(headers, record, combined) {
            values = parse_numbers(v, ',');
        }
    }
    Ok(values)
}

fn parse_row(
    headers: &StringRecord,
    record: &StringRecord,
    kind: LotteryKind,
) -> std::result::Result<Option<Draw>, std::num::ParseIntError> {
    let config = kind.config();
    let date = field(headers, record, "Date").and_then(parse_date);

    let mut numbers = numbered_columns(headers, record, "Number", config.main.count, "Numbers")?;
    if numbers.is_empty() {
        return Ok(None);
    }
    numbers.sort_unstable();

    let mut draw = Draw {
        date,
        numbers,
        lottery: kind,
        powerball: None,
        stars: None,
    };

    match config.bonus {
        Some(Bonus::Powerball { .. }) => {
            if let Some(v) = field(headers, record, "Powerball") {
                match v.parse() {
                    Ok(pb) => draw.powerball = Some(pb),
                    Err(_) => warn!("invalid Powerball value: {v:?}"),
                }
            }
        }
        Some(Bonus::Stars(NumberRange { count, .. })) => {
            let mut stars = Vec::new();
            for i in 1..=count {
                if let Some(v) = field(headers, record, &format!("Star{i}")) {
                    match v.parse() {
                        Ok(s) => stars.push(s),
                        Err(_) => warn!("invalid Star value: {v:?}"),
                    }
                }
            }
            if stars.is_empty() {
                if let Some(v) = field(headers, record, "Stars") {
                    stars = parse_numbers(v, ',');
                }
            }
            if !stars.is_empty() {
                stars.sort_unstable();
                draw.stars = Some(stars);
            }
        }
        None => {}
    }

    Ok(Some(draw))
}

// ---------------------------------------------------------------------------
// Data directory
// ---------------------------------------------------------------------------

/// A directory holding one draw file per lottery.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, kind: LotteryKind) -> PathBuf {
        self.root.join(kind.data_file_name())
    }

    pub fn load(&self, kind: LotteryKind) -> Result<Vec<Draw>> {
        load_draws(&self.path_for(kind), kind)
    }

    /// Generate synthetic history for every lottery whose file is missing.
    ///
    /// Returns the paths that were created.
    pub fn ensure_files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            info!("creating data directory {}", self.root.display());
            fs::create_dir_all(&self.root)?;
        }

        let mut created = Vec::new();
        for kind in LotteryKind::ALL {
            let path = self.path_for(kind);
            if path.exists() {
                continue;
            }
            info!("generating synthetic data for {kind}");
            let draws =
                generate_synthetic_draws(kind, DEFAULT_SYNTHETIC_DRAWS, Some(DEFAULT_SYNTHETIC_SEED))?;
            save_draws(&draws, &path)?;
            created.push(path);
        }
        Ok(created)
    }
}
