//! Lottery format table.
//!
//! Each supported lottery maps to a plain [`LotteryConfig`]: the main number
//! range, how many numbers are drawn from it, and an optional bonus draw.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FortunaError, Result};
use crate::sampler::SampleRequest;

/// Supported lottery formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotteryKind {
    Mega7,
    Easy6,
    Fast5,
    Powerball,
    EuroMillions,
    OMillionaire,
}

impl LotteryKind {
    pub const ALL: [LotteryKind; 6] = [
        Self::Mega7,
        Self::Easy6,
        Self::Fast5,
        Self::Powerball,
        Self::EuroMillions,
        Self::OMillionaire,
    ];

    /// Identifier used on the command line and in data files.
    pub fn id(self) -> &'static str {
        match self {
            Self::Mega7 => "mega7",
            Self::Easy6 => "easy6",
            Self::Fast5 => "fast5",
            Self::Powerball => "powerball",
            Self::EuroMillions => "euromillions",
            Self::OMillionaire => "omillionaire",
        }
    }

    /// Name of the historical draw file for this lottery.
    pub fn data_file_name(self) -> &'static str {
        match self {
            Self::Mega7 => "Emirates_Draw_MEGA7.csv",
            Self::Easy6 => "Emirates_Draw_EASY6.csv",
            Self::Fast5 => "Emirates_Draw_FAST5.csv",
            Self::Powerball => "Powerball_USA.csv",
            Self::EuroMillions => "EuroMillions.csv",
            Self::OMillionaire => "OMillionaire.csv",
        }
    }

    pub fn config(self) -> LotteryConfig {
        match self {
            Self::Mega7 => LotteryConfig::plain(NumberRange::new(1, 50, 7)),
            Self::Easy6 => LotteryConfig::plain(NumberRange::new(1, 45, 6)),
            Self::Fast5 => LotteryConfig::plain(NumberRange::new(1, 45, 5)),
            Self::Powerball => LotteryConfig {
                main: NumberRange::new(1, 69, 5),
                bonus: Some(Bonus::Powerball { min: 1, max: 26 }),
            },
            Self::EuroMillions => LotteryConfig {
                main: NumberRange::new(1, 50, 5),
                bonus: Some(Bonus::Stars(NumberRange::new(1, 12, 2))),
            },
            Self::OMillionaire => LotteryConfig::plain(NumberRange::new(1, 45, 6)),
        }
    }
}

impl std::fmt::Display for LotteryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for LotteryKind {
    type Err = FortunaError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.id() == needle)
            .ok_or_else(|| FortunaError::UnknownLottery(s.to_string()))
    }
}

/// `count` numbers drawn from `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
    pub count: usize,
}

impl NumberRange {
    pub const fn new(min: i64, max: i64, count: usize) -> Self {
        Self { min, max, count }
    }

    pub fn contains(&self, n: i64) -> bool {
        (self.min..=self.max).contains(&n)
    }

    pub fn request(&self) -> SampleRequest {
        SampleRequest {
            count: self.count,
            min: self.min,
            max: self.max,
        }
    }

    /// Sorted unique sample from this range.
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<i64>> {
        self.request().sample_with_rng(rng)
    }
}

/// Extra numbers drawn alongside the main set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bonus {
    /// One number from a separate range.
    Powerball { min: i64, max: i64 },
    /// Several unique "star" numbers from a separate range.
    Stars(NumberRange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryConfig {
    pub main: NumberRange,
    pub bonus: Option<Bonus>,
}

impl LotteryConfig {
    const fn plain(main: NumberRange) -> Self {
        Self { main, bonus: None }
    }

    /// Draw one ticket: the main set plus the bonus, if any.
    pub fn generate_ticket_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Ticket> {
        let numbers = self.main.sample_with_rng(rng)?;
        let mut ticket = Ticket {
            numbers,
            powerball: None,
            stars: None,
        };
        match self.bonus {
            Some(Bonus::Powerball { min, max }) => {
                ticket.powerball = Some(NumberRange::new(min, max, 1).sample_with_rng(rng)?[0]);
            }
            Some(Bonus::Stars(range)) => {
                ticket.stars = Some(range.sample_with_rng(rng)?);
            }
            None => {}
        }
        Ok(ticket)
    }

    pub fn generate_ticket(&self) -> Result<Ticket> {
        self.generate_ticket_with_rng(&mut rand::rng())
    }
}

/// One generated set of numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub numbers: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powerball: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<Vec<i64>>,
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.numbers)?;
        if let Some(pb) = self.powerball {
            write!(f, " Powerball: {pb}")?;
        }
        if let Some(stars) = &self.stars {
            write!(f, " Stars: {stars:?}")?;
        }
        Ok(())
    }
}
