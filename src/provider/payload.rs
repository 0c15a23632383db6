//! Location provider backed by a JSON user payload.
//!
//! The payload follows the random-user response layout:
//!
//! ```text
//! {"results": [
//!   {"name": {"first": "Ada", "last": "Byron"},
//!    "location": {"city": "London", "postcode": "N1 9GU",
//!                 "coordinates": {"latitude": "51.53", "longitude": "-0.10"}}}
//! ]}
//! ```
//!
//! Coordinates arrive either as JSON numbers or numeric strings, and
//! postcodes as either integers or strings.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use serde::Deserialize;

use super::LocationProvider;
use crate::error::{Result, TourError};
use crate::models::Point;

/// A postal code as it appears in the payload: numeric or free text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    /// Numeric postcode, e.g. `90210`.
    Number(i64),
    /// Alphanumeric postcode, e.g. `"N1 9GU"`.
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{n}"),
            Postcode::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn parse(&self, field: &str, record: usize) -> Result<f64> {
        let value = match self {
            Coordinate::Number(v) => *v,
            Coordinate::Text(s) => s.trim().parse().map_err(|_| {
                TourError::invalid_payload(format!(
                    "record {record}: {field} is not a number: {s:?}"
                ))
            })?,
        };
        if !value.is_finite() {
            return Err(TourError::invalid_payload(format!(
                "record {record}: {field} is not finite"
            )));
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Payload {
    results: Vec<Record>,
}

#[derive(Debug, Clone, Deserialize)]
struct Record {
    name: PersonName,
    location: Location,
}

#[derive(Debug, Clone, Deserialize)]
struct PersonName {
    first: String,
    last: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Location {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    postcode: Option<Postcode>,
    coordinates: Coordinates,
}

#[derive(Debug, Clone, Deserialize)]
struct Coordinates {
    latitude: Coordinate,
    longitude: Coordinate,
}

impl Record {
    fn display_name(&self) -> String {
        let person = format!("{} {}", self.name.first, self.name.last);
        let place: Vec<String> = [
            self.location.city.clone(),
            self.location.postcode.as_ref().map(Postcode::to_string),
        ]
        .into_iter()
        .flatten()
        .collect();
        if place.is_empty() {
            person
        } else {
            format!("{person} ({})", place.join(", "))
        }
    }

    fn to_point(&self, index: usize) -> Result<Point> {
        let coords = &self.location.coordinates;
        let lat = coords.latitude.parse("latitude", index)?;
        let lon = coords.longitude.parse("longitude", index)?;
        Ok(Point::new(self.display_name(), lat, lon))
    }
}

/// Serves locations from a pre-fetched JSON payload.
///
/// # Examples
///
/// ```
/// use nn_tour::provider::{LocationProvider, PayloadLocationProvider};
///
/// let json = r#"{"results": [
///   {"name": {"first": "Ada", "last": "Byron"},
///    "location": {"city": "London", "postcode": "N1 9GU",
///                 "coordinates": {"latitude": "51.53", "longitude": "-0.10"}}},
///   {"name": {"first": "Alan", "last": "Turing"},
///    "location": {"city": "Wilmslow", "postcode": 9425,
///                 "coordinates": {"latitude": 53.33, "longitude": -2.23}}}
/// ]}"#;
///
/// let provider: PayloadLocationProvider = json.parse().unwrap();
/// let points = provider.fetch_locations(2).unwrap();
/// assert_eq!(points[0].name(), "Ada Byron (London, N1 9GU)");
/// assert_eq!(points[1].name(), "Alan Turing (Wilmslow, 9425)");
/// ```
#[derive(Debug, Clone)]
pub struct PayloadLocationProvider {
    records: Vec<Record>,
}

impl PayloadLocationProvider {
    /// Parses a payload from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let payload: Payload = serde_json::from_reader(reader)?;
        debug!("parsed payload with {} records", payload.results.len());
        Ok(Self {
            records: payload.results,
        })
    }

    /// Reads and parses a payload file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let provider = Self::from_reader(BufReader::new(file))?;
        info!(
            "loaded {} location records from {}",
            provider.len(),
            path.display()
        );
        Ok(provider)
    }

    /// Number of records in the payload.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the payload has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromStr for PayloadLocationProvider {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl LocationProvider for PayloadLocationProvider {
    fn fetch_locations(&self, count: usize) -> Result<Vec<Point>> {
        if count > self.records.len() {
            return Err(TourError::InsufficientLocations {
                requested: count,
                available: self.records.len(),
            });
        }
        self.records[..count]
            .iter()
            .enumerate()
            .map(|(i, r)| r.to_point(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{"results": [
        {"name": {"first": "Ada", "last": "Byron"},
         "location": {"city": "London", "postcode": "N1 9GU",
                      "coordinates": {"latitude": "51.5", "longitude": "-0.1"}}},
        {"name": {"first": "Alan", "last": "Turing"},
         "location": {"city": "Wilmslow", "postcode": 9425,
                      "coordinates": {"latitude": 53.3, "longitude": -2.2}}},
        {"name": {"first": "Grace", "last": "Hopper"},
         "location": {"coordinates": {"latitude": " 40.7 ", "longitude": "-74.0"}}}
    ]}"#;

    #[test]
    fn test_postcode_variants() {
        let n: Postcode = serde_json::from_str("12345").expect("number");
        let s: Postcode = serde_json::from_str(r#""SW1A 1AA""#).expect("text");
        assert_eq!(n, Postcode::Number(12345));
        assert_eq!(s, Postcode::Text("SW1A 1AA".into()));
        assert_eq!(n.to_string(), "12345");
        assert_eq!(s.to_string(), "SW1A 1AA");
    }

    #[test]
    fn test_fetch_all() {
        let p: PayloadLocationProvider = PAYLOAD.parse().expect("valid payload");
        assert_eq!(p.len(), 3);
        let pts = p.fetch_locations(3).expect("enough records");
        assert_eq!(pts[0].name(), "Ada Byron (London, N1 9GU)");
        assert_eq!(pts[0].lat(), 51.5);
        assert_eq!(pts[1].name(), "Alan Turing (Wilmslow, 9425)");
        assert_eq!(pts[1].lon(), -2.2);
        assert_eq!(pts[2].name(), "Grace Hopper");
        assert_eq!(pts[2].lat(), 40.7);
    }

    #[test]
    fn test_fetch_prefix() {
        let p: PayloadLocationProvider = PAYLOAD.parse().expect("valid payload");
        let pts = p.fetch_locations(1).expect("enough records");
        assert_eq!(pts.len(), 1);
        assert!(p.fetch_locations(0).expect("zero is fine").is_empty());
    }

    #[test]
    fn test_fetch_too_many() {
        let p: PayloadLocationProvider = PAYLOAD.parse().expect("valid payload");
        match p.fetch_locations(5) {
            Err(TourError::InsufficientLocations {
                requested,
                available,
            }) => {
                assert_eq!(requested, 5);
                assert_eq!(available, 3);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        let r = "{\"results\": [".parse::<PayloadLocationProvider>();
        assert!(matches!(r, Err(TourError::Payload(_))));
    }

    #[test]
    fn test_bad_coordinate_text() {
        let json = r#"{"results": [
            {"name": {"first": "X", "last": "Y"},
             "location": {"coordinates": {"latitude": "north", "longitude": "1"}}}
        ]}"#;
        let p: PayloadLocationProvider = json.parse().expect("schema ok");
        match p.fetch_locations(1) {
            Err(TourError::InvalidPayload(msg)) => assert!(msg.contains("latitude")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_coordinate_text() {
        let cases = [
            ("NaN", "1", "latitude"),
            ("0", "inf", "longitude"),
            ("-infinity", "0", "latitude"),
        ];
        for (lat, lon, field) in cases {
            let json = format!(
                r#"{{"results": [
                    {{"name": {{"first": "X", "last": "Y"}},
                      "location": {{"coordinates": {{"latitude": "{lat}", "longitude": "{lon}"}}}}}}
                ]}}"#
            );
            let p: PayloadLocationProvider = json.parse().expect("schema ok");
            match p.fetch_locations(1) {
                Err(TourError::InvalidPayload(msg)) => {
                    assert!(msg.contains(field), "{msg}");
                    assert!(msg.contains("not finite"), "{msg}");
                }
                other => panic!("unexpected for {lat},{lon}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_path_missing() {
        let r = PayloadLocationProvider::from_path(Path::new("/nonexistent/payload.json"));
        assert!(matches!(r, Err(TourError::Io(_))));
    }
}
