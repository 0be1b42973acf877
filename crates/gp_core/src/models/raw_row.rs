//! Decoding of stored game rows into [`GameStatRecord`].
//!
//! The storage layer keeps rushing, receiving and defensive numbers as JSON
//! strings next to the flat columns. They are decoded here, once, so the
//! calculators only ever see typed optional fields.

use serde::{Deserialize, Serialize};

use super::game_record::GameStatRecord;
use crate::error::{AnalyticsError, Result};

/// A stored game row: flat columns plus per-category JSON text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGameRow {
    #[serde(flatten)]
    pub record: GameStatRecord,
    #[serde(default)]
    pub rushing: Option<String>,
    #[serde(default)]
    pub receiving: Option<String>,
    #[serde(default)]
    pub defense: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RushingBlob {
    pub attempts: Option<f64>,
    pub yards: Option<f64>,
}

/// Passing game as recorded from the receivers' side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReceivingBlob {
    pub targets: Option<f64>,
    pub receptions: Option<f64>,
    pub yards: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefenseBlob {
    pub sacks: Option<f64>,
    pub qb_hits: Option<f64>,
    pub tackles_for_loss: Option<f64>,
    pub pressures: Option<f64>,
    pub blitzes: Option<f64>,
    pub hurries: Option<f64>,
    pub interceptions: Option<f64>,
    pub fumbles_forced: Option<f64>,
    pub fumbles_recovered: Option<f64>,
    pub safeties: Option<f64>,
    pub points_off_turnovers: Option<f64>,
}

/// Decode one category column. Blank text and JSON `null` mean "no data".
fn decode_category<T>(category: &'static str, text: Option<&str>) -> Result<Option<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    serde_json::from_str::<Option<T>>(text)
        .map_err(|source| AnalyticsError::MalformedCategory { category, source })
}

/// Keep `current` when known, otherwise take the category value.
fn fill(current: &mut Option<f64>, from_blob: Option<f64>) {
    if current.is_none() {
        *current = from_blob;
    }
}

impl TryFrom<RawGameRow> for GameStatRecord {
    type Error = AnalyticsError;

    fn try_from(row: RawGameRow) -> Result<Self> {
        let RawGameRow { mut record, rushing, receiving, defense } = row;

        if let Some(blob) = decode_category::<RushingBlob>("rushing", rushing.as_deref())? {
            fill(&mut record.rushing_attempts, blob.attempts);
            fill(&mut record.rushing_yards, blob.yards);
        }

        if let Some(blob) = decode_category::<ReceivingBlob>("receiving", receiving.as_deref())? {
            fill(&mut record.passing_attempts, blob.targets);
            fill(&mut record.completions, blob.receptions);
            fill(&mut record.passing_yards, blob.yards);
        }

        if let Some(blob) = decode_category::<DefenseBlob>("defense", defense.as_deref())? {
            fill(&mut record.sacks, blob.sacks);
            fill(&mut record.qb_hits, blob.qb_hits);
            fill(&mut record.tackles_for_loss, blob.tackles_for_loss);
            fill(&mut record.pressures, blob.pressures);
            fill(&mut record.blitzes, blob.blitzes);
            fill(&mut record.hurries, blob.hurries);
            fill(&mut record.interceptions, blob.interceptions);
            fill(&mut record.fumbles_forced, blob.fumbles_forced);
            fill(&mut record.fumbles_recovered, blob.fumbles_recovered);
            fill(&mut record.safeties, blob.safeties);
            fill(&mut record.points_off_turnovers, blob.points_off_turnovers);
        }

        Ok(record)
    }
}

/// Decode a batch of rows, failing on the first malformed category.
pub fn decode_rows(rows: Vec<RawGameRow>) -> Result<Vec<GameStatRecord>> {
    rows.into_iter().map(GameStatRecord::try_from).collect()
}
