use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;

#[derive(Clone, Debug, Deserialize)]
pub struct Person {
    pub name: String,
    pub craft: String,
}

/// `astros.json`
#[derive(Clone, Debug, Deserialize)]
pub struct Astronauts {
    pub people: Vec<Person>,
    pub number: u32,
}

/// A coordinate as sent by the API: usually a decimal string, sometimes a number.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CoordinateField {
    Number(f64),
    Text(String),
}

impl CoordinateField {
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            CoordinateField::Number(val) => Ok(*val),
            CoordinateField::Text(val) => val
                .trim()
                .parse::<f64>()
                .with_context(|| format!("coordinate {:?} is not a number", val)),
        }
    }
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateField::Number(val) => write!(f, "{}", val),
            CoordinateField::Text(val) => f.write_str(val),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct IssPosition {
    pub latitude: CoordinateField,
    pub longitude: CoordinateField,
}

/// `iss-now.json`
#[derive(Clone, Debug, Deserialize)]
pub struct PositionReport {
    pub iss_position: IssPosition,
    pub timestamp: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Pass {
    pub risetime: i64,
}

/// `iss-pass.json`
#[derive(Clone, Debug, Deserialize)]
pub struct PassReport {
    pub response: Vec<Pass>,
}

impl PassReport {
    pub fn next_risetime(&self) -> Option<i64> {
        self.response.first().map(|pass| pass.risetime)
    }
}
