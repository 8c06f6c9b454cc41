//! Data models for the grid historian
//!
//! This module contains the core data structures for representing energy
//! asset stations and synthesized daily observations, following the wire
//! contract the dashboard consumes.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Domain and Data Type Enumerations
// =============================================================================

/// Top-level asset category a station belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Wind farms
    Wind,
    /// Photovoltaic plants
    Solar,
    /// Pumped-hydro and battery storage plants
    Storage,
    /// EV charging stations and pile clusters
    Charging,
}

impl Domain {
    /// All domains, in catalog order
    pub fn all() -> [Domain; 4] {
        [Domain::Wind, Domain::Solar, Domain::Storage, Domain::Charging]
    }

    /// Wire name used by the dashboard and the store keys
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Wind => "wind",
            Domain::Solar => "solar",
            Domain::Storage => "storage",
            Domain::Charging => "charging",
        }
    }

    /// Localized display label (e.g. "风电场景")
    pub fn label(self) -> &'static str {
        match self {
            Domain::Wind => "风电场景",
            Domain::Solar => "光伏场景",
            Domain::Storage => "储能场景",
            Domain::Charging => "充电场景",
        }
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "wind" => Ok(Domain::Wind),
            "solar" => Ok(Domain::Solar),
            "storage" => Ok(Domain::Storage),
            "charging" => Ok(Domain::Charging),
            other => Err(Error::unknown_domain(other)),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of measurement series recorded for a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Daily generation / discharge / delivered-energy records
    Generation,
    /// Trading and settlement prices
    Price,
    /// Load and demand records
    Load,
    /// Charging-session records
    Charging,
}

impl DataType {
    /// All data types, in wire order
    pub fn all() -> [DataType; 4] {
        [
            DataType::Generation,
            DataType::Price,
            DataType::Load,
            DataType::Charging,
        ]
    }

    /// Wire name used by the dashboard and the store keys
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Generation => "generation",
            DataType::Price => "price",
            DataType::Load => "load",
            DataType::Charging => "charging",
        }
    }

    /// Localized display label (e.g. "发电记录")
    pub fn label(self) -> &'static str {
        match self {
            DataType::Generation => "发电记录",
            DataType::Price => "交易价格",
            DataType::Load => "负荷曲线",
            DataType::Charging => "充电记录",
        }
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "generation" => Ok(DataType::Generation),
            "price" => Ok(DataType::Price),
            "load" => Ok(DataType::Load),
            "charging" => Ok(DataType::Charging),
            other => Err(Error::unknown_data_type(other)),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Granularity
// =============================================================================

/// Requested temporal bucketing resolution for a query.
///
/// Aggregation is currently an identity passthrough; the vocabulary is kept
/// so query parameters round-trip unchanged through exports and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    #[serde(rename = "5min")]
    FiveMinute,
    #[serde(rename = "15min")]
    QuarterHour,
    #[serde(rename = "hour")]
    Hour,
    #[default]
    #[serde(rename = "day")]
    Day,
    #[serde(rename = "month")]
    Month,
}

impl Granularity {
    /// Wire name used by the dashboard
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::FiveMinute => "5min",
            Granularity::QuarterHour => "15min",
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Month => "month",
        }
    }

    /// Localized display label
    pub fn label(self) -> &'static str {
        match self {
            Granularity::FiveMinute => "5分钟",
            Granularity::QuarterHour => "15分钟",
            Granularity::Hour => "1小时",
            Granularity::Day => "1天",
            Granularity::Month => "1月",
        }
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "5min" => Ok(Granularity::FiveMinute),
            "15min" => Ok(Granularity::QuarterHour),
            "hour" => Ok(Granularity::Hour),
            "day" => Ok(Granularity::Day),
            "month" => Ok(Granularity::Month),
            other => Err(Error::unknown_granularity(other)),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Station
// =============================================================================

/// A registered station or device within a domain
///
/// Stations are static: loaded once at startup from the catalog and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station identifier (e.g. "wind1")
    pub id: String,

    /// Human-readable station name (e.g. "张北风电场")
    pub name: String,

    /// Asset domain the station belongs to
    pub domain: Domain,
}

impl Station {
    /// Create a new station with validation
    pub fn new(id: impl Into<String>, name: impl Into<String>, domain: Domain) -> Result<Self> {
        let station = Self {
            id: id.into(),
            name: name.into(),
            domain,
        };
        station.validate()?;
        Ok(station)
    }

    /// Validate station data
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::data_validation("station id cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(format!(
                "station '{}' has an empty name",
                self.id
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Sample
// =============================================================================

/// Quality status assigned to a sample at generation time
///
/// The status is fixed when the sample is synthesized and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleStatus {
    /// Value inside the expected envelope
    Normal,
    /// Value spiked or dipped outside the expected envelope
    Anomaly,
}

impl SampleStatus {
    /// True for anomalous samples
    pub fn is_anomaly(self) -> bool {
        matches!(self, SampleStatus::Anomaly)
    }

    /// Localized display label (正常 / 异常)
    pub fn label(self) -> &'static str {
        match self {
            SampleStatus::Normal => crate::constants::status_labels::NORMAL,
            SampleStatus::Anomaly => crate::constants::status_labels::ANOMALY,
        }
    }
}

impl fmt::Display for SampleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleStatus::Normal => f.write_str("normal"),
            SampleStatus::Anomaly => f.write_str("anomaly"),
        }
    }
}

/// One synthesized daily observation for a station and measurement field
///
/// Samples are immutable once generated. The serde names (`date`, `value`,
/// `unit`, `field`, `stationId`, `status`) are a stable contract consumed
/// by export adapters; adapters never reach past them into internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Calendar day the observation covers (one sample per day)
    pub date: NaiveDate,

    /// Measured value, rounded to two decimals at generation
    pub value: f64,

    /// Unit of measure (e.g. "MWh", "元/MWh")
    pub unit: String,

    /// Measurement field label (e.g. "风电场日发电量")
    #[serde(rename = "field")]
    pub field_label: String,

    /// Identifier of the producing station
    #[serde(rename = "stationId")]
    pub station_id: String,

    /// Quality status assigned at generation time
    pub status: SampleStatus,
}

impl Sample {
    /// Validate sample data for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.value.is_finite() {
            return Err(Error::data_validation(format!(
                "sample for station '{}' on {} has a non-finite value",
                self.station_id, self.date
            )));
        }
        if self.station_id.trim().is_empty() {
            return Err(Error::data_validation("sample station id cannot be empty"));
        }
        if self.field_label.trim().is_empty() {
            return Err(Error::data_validation("sample field label cannot be empty"));
        }
        Ok(())
    }
}

/// Round a value to two decimal places, the precision samples carry
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_sample() -> Sample {
        Sample {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            value: 1845.32,
            unit: "MWh".to_string(),
            field_label: "风电场日发电量".to_string(),
            station_id: "wind1".to_string(),
            status: SampleStatus::Normal,
        }
    }

    mod domain_tests {
        use super::*;

        #[test]
        fn test_domain_round_trip() {
            for domain in Domain::all() {
                assert_eq!(domain.as_str().parse::<Domain>().unwrap(), domain);
            }
        }

        #[test]
        fn test_unknown_domain_rejected() {
            let err = "hydro".parse::<Domain>().unwrap_err();
            assert!(matches!(err, Error::UnknownDomain { .. }));
        }
    }

    mod data_type_tests {
        use super::*;

        #[test]
        fn test_data_type_round_trip() {
            for data_type in DataType::all() {
                assert_eq!(data_type.as_str().parse::<DataType>().unwrap(), data_type);
            }
        }

        #[test]
        fn test_unknown_data_type_rejected() {
            let err = "emissions".parse::<DataType>().unwrap_err();
            assert!(matches!(err, Error::UnknownDataType { .. }));
        }

        #[test]
        fn test_whitespace_trimmed() {
            assert_eq!(" price ".parse::<DataType>().unwrap(), DataType::Price);
        }
    }

    mod granularity_tests {
        use super::*;

        #[test]
        fn test_granularity_round_trip() {
            for token in ["5min", "15min", "hour", "day", "month"] {
                let granularity = token.parse::<Granularity>().unwrap();
                assert_eq!(granularity.as_str(), token);
            }
        }

        #[test]
        fn test_default_is_daily() {
            assert_eq!(Granularity::default(), Granularity::Day);
        }

        #[test]
        fn test_unknown_granularity_rejected() {
            assert!("weekly".parse::<Granularity>().is_err());
        }
    }

    mod station_tests {
        use super::*;

        #[test]
        fn test_station_creation_valid() {
            let station = Station::new("wind1", "张北风电场", Domain::Wind).unwrap();
            assert_eq!(station.id, "wind1");
            assert!(station.validate().is_ok());
        }

        #[test]
        fn test_station_empty_fields_rejected() {
            assert!(Station::new("", "张北风电场", Domain::Wind).is_err());
            assert!(Station::new("wind1", "  ", Domain::Wind).is_err());
        }
    }

    mod sample_tests {
        use super::*;

        #[test]
        fn test_sample_validation() {
            let sample = create_test_sample();
            assert!(sample.validate().is_ok());

            let mut bad = create_test_sample();
            bad.value = f64::NAN;
            assert!(bad.validate().is_err());

            let mut bad = create_test_sample();
            bad.station_id = String::new();
            assert!(bad.validate().is_err());
        }

        #[test]
        fn test_sample_wire_names() {
            let sample = create_test_sample();
            let json = serde_json::to_value(&sample).unwrap();
            assert_eq!(json["date"], "2024-01-15");
            assert_eq!(json["field"], "风电场日发电量");
            assert_eq!(json["stationId"], "wind1");
            assert_eq!(json["status"], "normal");
            assert_eq!(json["unit"], "MWh");
        }

        #[test]
        fn test_status_labels() {
            assert_eq!(SampleStatus::Normal.label(), "正常");
            assert_eq!(SampleStatus::Anomaly.label(), "异常");
            assert!(SampleStatus::Anomaly.is_anomaly());
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1234.5678), 1234.57);
        assert_eq!(round2(0.004), 0.0);
        assert_eq!(round2(-2.344), -2.34);
    }
}
