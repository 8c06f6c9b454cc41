//! Station catalog service for station/device lookups
//!
//! This module provides the static registry mapping each asset domain to
//! its stations. The catalog is loaded once at startup, validated, and
//! never mutated afterwards.

use crate::app::models::{Domain, Station};
use crate::{Error, Result};
use std::collections::HashMap;

/// Static registry of stations and devices, grouped by domain
///
/// The catalog indexes stations by id for O(1) lookups and keeps the
/// per-domain listing in declaration order for stable display.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    /// Stations in catalog order, grouped by domain
    by_domain: HashMap<Domain, Vec<Station>>,

    /// Station index by id for O(1) lookups
    by_id: HashMap<String, Station>,
}

impl StationCatalog {
    /// Build a catalog from a list of stations, validating each entry.
    ///
    /// Duplicate station ids are rejected: every sample must belong to
    /// exactly one station.
    pub fn new(stations: Vec<Station>) -> Result<Self> {
        let mut by_domain: HashMap<Domain, Vec<Station>> = HashMap::new();
        let mut by_id: HashMap<String, Station> = HashMap::new();

        for station in stations {
            station.validate()?;
            if by_id.contains_key(&station.id) {
                return Err(Error::data_validation(format!(
                    "duplicate station id '{}' in catalog",
                    station.id
                )));
            }
            by_id.insert(station.id.clone(), station.clone());
            by_domain.entry(station.domain).or_default().push(station);
        }

        Ok(Self { by_domain, by_id })
    }

    /// The built-in demo catalog backing the dashboard
    pub fn builtin() -> Self {
        let stations = vec![
            Station {
                id: "wind1".into(),
                name: "张北风电场".into(),
                domain: Domain::Wind,
            },
            Station {
                id: "wind2".into(),
                name: "大同风电场".into(),
                domain: Domain::Wind,
            },
            Station {
                id: "wind3".into(),
                name: "河北沿海风电场".into(),
                domain: Domain::Wind,
            },
            Station {
                id: "solar1".into(),
                name: "青海光伏电站".into(),
                domain: Domain::Solar,
            },
            Station {
                id: "solar2".into(),
                name: "宁夏沙漠光伏基地".into(),
                domain: Domain::Solar,
            },
            Station {
                id: "solar3".into(),
                name: "山西屋顶光伏".into(),
                domain: Domain::Solar,
            },
            Station {
                id: "storage1".into(),
                name: "庐山抽水蓄能电站".into(),
                domain: Domain::Storage,
            },
            Station {
                id: "storage2".into(),
                name: "张家口储能电站".into(),
                domain: Domain::Storage,
            },
            Station {
                id: "charging1".into(),
                name: "北京海淀充电站".into(),
                domain: Domain::Charging,
            },
            Station {
                id: "charging2".into(),
                name: "上海浦东充电桩群".into(),
                domain: Domain::Charging,
            },
            Station {
                id: "charging3".into(),
                name: "广州番禺充电中心".into(),
                domain: Domain::Charging,
            },
        ];

        // The built-in catalog is known-good; construction cannot fail.
        Self::new(stations).expect("built-in catalog must be valid")
    }

    /// Get station metadata by id (O(1) lookup)
    pub fn get_station(&self, id: &str) -> Option<&Station> {
        self.by_id.get(id)
    }

    /// Check whether a station id exists in the catalog
    pub fn contains_station(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Stations registered for a domain, in catalog order
    pub fn stations_in_domain(&self, domain: Domain) -> &[Station] {
        self.by_domain
            .get(&domain)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All stations across all domains, in domain/catalog order
    pub fn stations(&self) -> Vec<&Station> {
        Domain::all()
            .iter()
            .flat_map(|domain| self.stations_in_domain(*domain))
            .collect()
    }

    /// Total number of registered stations
    pub fn station_count(&self) -> usize {
        self.by_id.len()
    }

    /// Resolve a station's display name, falling back to the raw id
    pub fn station_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get_station(id).map(|s| s.name.as_str()).unwrap_or(id)
    }

    /// Find stations by name pattern (case-insensitive substring match)
    pub fn find_stations_by_name(&self, pattern: &str) -> Vec<&Station> {
        let pattern_lower = pattern.to_lowercase();
        self.stations()
            .into_iter()
            .filter(|station| station.name.to_lowercase().contains(&pattern_lower))
            .collect()
    }
}

impl Default for StationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
