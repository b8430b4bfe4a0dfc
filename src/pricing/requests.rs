//! Request DTOs for quote calculation.

use serde::{Deserialize, Deserializer};

/// An order to be quoted
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteRequest {
    pub quantity: u32,
    /// Free-form color description, e.g. "2 colors"
    #[serde(default, deserialize_with = "lenient_color_spec")]
    pub color_spec: Option<String>,
    /// Only the literal "Yes" turns on the underbase surcharge
    #[serde(default)]
    pub light_on_dark: Option<String>,
    pub locations: Vec<PrintLocation>,
}

impl QuoteRequest {
    pub fn new(quantity: u32, locations: Vec<PrintLocation>) -> Self {
        Self {
            quantity,
            color_spec: None,
            light_on_dark: None,
            locations,
        }
    }

    pub fn with_color_spec(mut self, color_spec: impl Into<String>) -> Self {
        self.color_spec = Some(color_spec.into());
        self
    }

    pub fn with_light_on_dark(mut self, light_on_dark: impl Into<String>) -> Self {
        self.light_on_dark = Some(light_on_dark.into());
        self
    }

    /// Whether the order asks for light ink on dark garments
    pub fn needs_underbase(&self) -> bool {
        self.light_on_dark.as_deref() == Some("Yes")
    }
}

/// A print placement on the garment
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PrintLocation {
    Named(String),
    Detailed {
        name: String,
        /// Carried with the location but not priced
        #[serde(default, deserialize_with = "lenient_color_spec")]
        color_spec: Option<String>,
    },
}

impl PrintLocation {
    pub fn name(&self) -> &str {
        match self {
            PrintLocation::Named(name) => name,
            PrintLocation::Detailed { name, .. } => name,
        }
    }
}

impl From<&str> for PrintLocation {
    fn from(name: &str) -> Self {
        PrintLocation::Named(name.to_string())
    }
}

/// Accept a color spec given as a string, a bare number, or null.
fn lenient_color_spec<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_plain_locations() {
        let req: QuoteRequest = serde_json::from_str(
            r#"{"quantity": 120, "color_spec": "2 colors", "light_on_dark": "Yes",
                "locations": ["Left Chest", "Back Center"]}"#,
        )
        .unwrap();
        assert_eq!(req.quantity, 120);
        assert_eq!(req.color_spec.as_deref(), Some("2 colors"));
        assert!(req.needs_underbase());
        assert_eq!(req.locations[0].name(), "Left Chest");
        assert_eq!(req.locations[1], PrintLocation::from("Back Center"));
    }

    #[test]
    fn test_deserialize_detailed_locations() {
        let req: QuoteRequest = serde_json::from_str(
            r#"{"quantity": 24, "color_spec": null, "light_on_dark": "No",
                "locations": [
                    {"name": "Front Center", "color_spec": "5 colors"},
                    {"name": "Back Center"}
                ]}"#,
        )
        .unwrap();
        assert!(req.color_spec.is_none());
        assert!(!req.needs_underbase());
        assert_eq!(
            req.locations[0],
            PrintLocation::Detailed {
                name: "Front Center".to_string(),
                color_spec: Some("5 colors".to_string()),
            }
        );
        assert_eq!(req.locations[1].name(), "Back Center");
    }

    #[test]
    fn test_numeric_color_spec_becomes_text() {
        let req: QuoteRequest =
            serde_json::from_str(r#"{"quantity": 1, "color_spec": 3, "locations": ["Sleeve"]}"#)
                .unwrap();
        assert_eq!(req.color_spec.as_deref(), Some("3"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let req: QuoteRequest =
            serde_json::from_str(r#"{"quantity": 1, "locations": ["Front Center"]}"#).unwrap();
        assert!(req.color_spec.is_none());
        assert!(req.light_on_dark.is_none());
    }

    #[test]
    fn test_underbase_requires_exact_yes() {
        let base = QuoteRequest::new(10, vec!["Front Center".into()]);
        assert!(!base.needs_underbase());
        assert!(base.clone().with_light_on_dark("Yes").needs_underbase());
        assert!(!base.clone().with_light_on_dark("yes").needs_underbase());
        assert!(!base.clone().with_light_on_dark("Not sure").needs_underbase());
        assert!(!base.with_light_on_dark("No").needs_underbase());
    }
}
