use std::collections::HashSet;
use std::path::Path;

use crate::error::PestwatchError;
use crate::types::{Hotel, HotelStatus};

const EMBEDDED_DATASET: &str = include_str!("../data/hotels.json");

/// Listing filter. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct HotelFilter {
    pub query: Option<String>,
    pub status: Option<HotelStatus>,
}

/// The ordered, read-only hotel dataset.
#[derive(Debug, Clone)]
pub struct HotelDirectory {
    hotels: Vec<Hotel>,
}

impl HotelDirectory {
    /// Build a directory, rejecting duplicate identifiers.
    pub fn new(hotels: Vec<Hotel>) -> Result<Self, PestwatchError> {
        ensure_unique_ids(&hotels)?;
        Ok(Self { hotels })
    }

    /// The seed dataset compiled into the binary.
    pub fn embedded() -> Result<Self, PestwatchError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, PestwatchError> {
        let hotels: Vec<Hotel> = serde_json::from_str(json)?;
        Self::new(hotels)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PestwatchError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let directory = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            hotels = directory.len(),
            "Loaded hotel dataset"
        );
        Ok(directory)
    }

    pub fn find(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn all(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Hotels matching the filter, in dataset order.
    pub fn search(&self, filter: &HotelFilter) -> Vec<&Hotel> {
        let needle = filter
            .query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        self.hotels
            .iter()
            .filter(|h| filter.status.map_or(true, |s| h.status == s))
            .filter(|h| match &needle {
                Some(q) => h.name.to_lowercase().contains(q) || h.city.to_lowercase().contains(q),
                None => true,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

fn ensure_unique_ids(hotels: &[Hotel]) -> Result<(), PestwatchError> {
    let mut seen = HashSet::with_capacity(hotels.len());
    for hotel in hotels {
        if !seen.insert(hotel.id.as_str()) {
            return Err(PestwatchError::DuplicateHotelId {
                id: hotel.id.clone(),
            });
        }
    }
    Ok(())
}
