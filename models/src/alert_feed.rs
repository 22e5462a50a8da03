//! Active alert feed as returned by the alerts endpoint.
//!
//! Only `features[].properties.headline` is modelled. Every other field in
//! the upstream GeoJSON document is ignored during decoding.

use serde::{Deserialize, Serialize};

/// Parsed collection of active alerts, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertFeed {
    pub features: Vec<Alert>,
}

impl AlertFeed {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Headlines in feed order. Alerts without a headline yield `""`.
    pub fn headlines(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(Alert::headline)
    }
}

impl FromIterator<Alert> for AlertFeed {
    fn from_iter<T: IntoIterator<Item = Alert>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub properties: AlertProperties,
}

impl Alert {
    pub fn with_headline(headline: impl Into<String>) -> Self {
        Self {
            properties: AlertProperties {
                headline: Some(headline.into()),
            },
        }
    }

    pub fn headline(&self) -> &str {
        self.properties.headline.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertProperties {
    // The service sends `null` for some alerts.
    #[serde(default)]
    pub headline: Option<String>,
}
