use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::GeocodeError;
use crate::route::Coordinate;

/// One ranked geocoding hit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeCandidate {
    /// Display label, most specific part first.
    pub label: String,
    /// Administrative region, when the provider exposes one. Part of the
    /// cross-provider deduplication key.
    pub region: Option<String>,
    pub coordinate: Coordinate,
}

/// Capability contract for forward geocoding.
///
/// Results are ranked best-first and never empty: a provider with nothing to
/// offer reports [`GeocodeError::NotFound`].
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError>;
}

pub(crate) const USER_AGENT: &str = concat!("sunside/", env!("CARGO_PKG_VERSION"));

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Forward geocoder backed by a Nominatim instance.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
    limit: u8,
}

impl NominatimGeocoder {
    /// Uses the public openstreetmap.org instance, whose usage policy
    /// requires the identifying User-Agent set here.
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_base_url(NOMINATIM_URL.to_string())
    }

    /// Points the geocoder at a self-hosted instance.
    pub fn with_base_url(base_url: String) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url,
            limit: 5,
        })
    }
}

/// Wire shape of one Nominatim result row. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

#[async_trait]
impl GeocodeProvider for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
        let places: Vec<NominatimPlace> = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", &self.limit.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let candidates: Vec<GeocodeCandidate> = places
            .into_iter()
            .filter_map(|place| {
                let lat = place.lat.parse().ok()?;
                let lon = place.lon.parse().ok()?;
                Some(GeocodeCandidate {
                    region: region_of(&place.display_name),
                    label: place.display_name,
                    coordinate: Coordinate { lat, lon },
                })
            })
            .collect();

        if candidates.is_empty() {
            return Err(GeocodeError::NotFound {
                query: query.to_string(),
            });
        }
        log::debug!("{} candidates for {query:?}", candidates.len());
        Ok(candidates)
    }
}

/// Nominatim display names are comma-separated, most specific part first;
/// the second component is the closest thing to an administrative region.
fn region_of(display_name: &str) -> Option<String> {
    display_name
        .split(',')
        .nth(1)
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
}

/// Queries several providers at once and merges their rankings.
///
/// Candidates are deduplicated by a normalized key (place name plus
/// administrative region, case-insensitive); the earliest provider to list a
/// place keeps its rank. A provider that fails or finds nothing does not
/// sink the merge as long as another one delivers.
pub struct MergedGeocoder {
    providers: Vec<Arc<dyn GeocodeProvider>>,
}

impl MergedGeocoder {
    pub fn new(providers: Vec<Arc<dyn GeocodeProvider>>) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl GeocodeProvider for MergedGeocoder {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
        let lookups = self.providers.iter().map(|provider| provider.geocode(query));
        let outcomes = futures::future::join_all(lookups).await;

        let mut merged = Vec::new();
        let mut seen = HashSet::new();
        let mut first_error = None;

        for outcome in outcomes {
            match outcome {
                Ok(candidates) => {
                    for candidate in candidates {
                        if seen.insert(dedup_key(&candidate)) {
                            merged.push(candidate);
                        }
                    }
                }
                Err(error) => {
                    first_error.get_or_insert(error);
                }
            }
        }

        if merged.is_empty() {
            return Err(first_error.unwrap_or_else(|| GeocodeError::NotFound {
                query: query.to_string(),
            }));
        }
        Ok(merged)
    }
}

fn dedup_key(candidate: &GeocodeCandidate) -> (String, String) {
    let name = candidate
        .label
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    let region = candidate
        .region
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    (name, region)
}
