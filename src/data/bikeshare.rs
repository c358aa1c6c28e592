//! Bike-share live feed
//!
//! The feed is one JSON document listing countries, their cities, and each
//! city's places. Only the configured city is of interest; its home bounds
//! double as the initial view when the fragment carries none.

use crate::core::config::BikeshareSourceOptions;
use crate::core::geo::{LatLng, LatLngBounds};
use crate::data::http;
use crate::prelude::HashMap;
use crate::{MapError, Result};
use serde::Deserialize;

/// One rental place.
#[derive(Debug, Clone, Deserialize)]
pub struct BikePlace {
    #[serde(default)]
    pub uid: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bikes_available_to_rent: u32,
    #[serde(default)]
    pub bike_numbers: Vec<String>,
    #[serde(default)]
    pub bike_types: HashMap<String, u32>,
    pub lat: f64,
    pub lng: f64,
}

impl BikePlace {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Available count for one bike type, zero when the type is absent.
    pub fn available_of_type(&self, bike_type: &str) -> u32 {
        self.bike_types.get(bike_type).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl CityBounds {
    pub fn to_bounds(&self) -> LatLngBounds {
        LatLngBounds::from_corners(self.south_west, self.north_east)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BikeCity {
    pub uid: u64,
    #[serde(default)]
    pub places: Vec<BikePlace>,
    pub bounds: CityBounds,
}

#[derive(Debug, Deserialize)]
pub struct LiveDocument {
    #[serde(default)]
    pub countries: Vec<Country>,
}

#[derive(Debug, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub cities: Vec<BikeCity>,
}

/// Selects a city by uid from the live document.
pub fn find_city(document: LiveDocument, city_uid: u64) -> Result<BikeCity> {
    document
        .countries
        .into_iter()
        .flat_map(|country| country.cities)
        .find(|city| city.uid == city_uid)
        .ok_or_else(|| MapError::Data(format!("cannot find city {}", city_uid)).into())
}

/// Live feed client.
pub struct BikeshareFeed {
    options: BikeshareSourceOptions,
}

impl BikeshareFeed {
    pub fn new(options: BikeshareSourceOptions) -> Self {
        Self { options }
    }

    /// Fetches the live document and returns the configured city.
    pub async fn fetch_city(&self) -> Result<BikeCity> {
        let query = [
            ("city", self.options.city_uid.to_string()),
            ("domains", self.options.domain.clone()),
            ("list_cities", "0".to_string()),
            ("bikes", "0".to_string()),
        ];
        let document: LiveDocument = http::get_json(&self.options.endpoint, &query).await?;
        find_city(document, self.options.city_uid)
    }
}
