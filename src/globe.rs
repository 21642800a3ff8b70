//! Event protocol between the page and the interactive globe widget. The
//! widget itself is an external script; the page only sees these events.

use thiserror::Error;

use crate::content::travel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobeStatus {
    Loading,
    Ready,
    Unsupported,
    Failed,
}

impl GlobeStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "loading" => Some(Self::Loading),
            "ready" => Some(Self::Ready),
            "unsupported" => Some(Self::Unsupported),
            "error" | "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn needs_fallback(self) -> bool {
        matches!(self, Self::Unsupported | Self::Failed)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GlobeEvent {
    CountrySelect { name: String, visited: bool },
    CountryHover { name: Option<String>, visited: bool },
    StateChange { status: GlobeStatus, error: Option<String> },
}

#[derive(Debug, Error)]
pub enum GlobeError {
    #[error("WebGL is not available")]
    Unsupported,
    #[error("globe widget is not loaded")]
    Missing,
    #[error("globe widget failed: {0}")]
    Widget(String),
}

impl GlobeError {
    pub fn status(&self) -> GlobeStatus {
        match self {
            Self::Unsupported => GlobeStatus::Unsupported,
            Self::Missing | Self::Widget(_) => GlobeStatus::Failed,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawGlobeEvent {
    pub kind: String,
    pub name: Option<String>,
    pub visited: Option<bool>,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl GlobeEvent {
    /// Unknown kinds and malformed payloads are dropped. A missing
    /// `visited` flag is filled in from the visited-country list.
    pub fn from_raw(raw: RawGlobeEvent) -> Option<Self> {
        let visited_of = |name: &str| raw.visited.unwrap_or_else(|| travel::is_visited(name));

        match raw.kind.as_str() {
            "select" => {
                let name = raw.name.as_deref().map(str::trim).filter(|name| !name.is_empty())?;
                Some(Self::CountrySelect {
                    visited: visited_of(name),
                    name: name.to_string(),
                })
            }
            "hover" => {
                let name = raw.name.as_deref().map(str::trim).filter(|name| !name.is_empty());
                Some(Self::CountryHover {
                    visited: name.map(visited_of).unwrap_or(false),
                    name: name.map(str::to_string),
                })
            }
            "state" => Some(Self::StateChange {
                status: GlobeStatus::parse(raw.status.as_deref()?)?,
                error: raw.error.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(kind: &str, name: Option<&str>) -> RawGlobeEvent {
        RawGlobeEvent {
            kind: kind.to_string(),
            name: name.map(str::to_string),
            ..RawGlobeEvent::default()
        }
    }

    #[test]
    fn select_fills_in_visited_flag() {
        assert_eq!(
            GlobeEvent::from_raw(raw("select", Some("Czechia"))),
            Some(GlobeEvent::CountrySelect {
                name: "Czechia".to_string(),
                visited: true
            })
        );
        assert_eq!(
            GlobeEvent::from_raw(raw("select", Some("Brazil"))),
            Some(GlobeEvent::CountrySelect {
                name: "Brazil".to_string(),
                visited: false
            })
        );
        assert_eq!(GlobeEvent::from_raw(raw("select", Some("  "))), None);
    }

    #[test]
    fn hover_may_clear_the_name() {
        assert_eq!(
            GlobeEvent::from_raw(raw("hover", None)),
            Some(GlobeEvent::CountryHover {
                name: None,
                visited: false
            })
        );
    }

    #[test]
    fn state_changes_need_a_known_status() {
        let mut event = raw("state", None);
        event.status = Some("error".to_string());
        event.error = Some("context lost".to_string());

        assert_eq!(
            GlobeEvent::from_raw(event.clone()),
            Some(GlobeEvent::StateChange {
                status: GlobeStatus::Failed,
                error: Some("context lost".to_string())
            })
        );

        event.status = Some("spinning".to_string());
        assert_eq!(GlobeEvent::from_raw(event), None);
        assert_eq!(GlobeEvent::from_raw(raw("zoom", None)), None);
    }

    #[test]
    fn errors_map_to_fallback_statuses() {
        assert!(GlobeError::Unsupported.status().needs_fallback());
        assert!(GlobeError::Widget("boom".to_string()).status().needs_fallback());
        assert!(!GlobeStatus::Ready.needs_fallback());
    }
}
