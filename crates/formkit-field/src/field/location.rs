//! Composite latitude/longitude field.

use crate::field::{decorate, Field};
use crate::{FloatConverter, Fragment, ParseError, Step, Widget};
use formkit_types::{ConfigSnapshot, Coordinates, Patch, SubmittedData, Value};

const COMPONENTS: [&str; 2] = ["lat", "lon"];

/// Composite field spanning two numeric sub-inputs plus a map picker.
///
/// The submitted representation spans two raw keys, `"{id}-lat"` and
/// `"{id}-lon"`, each converted with float semantics. Parsing is
/// all-or-nothing: both sub-keys present and numeric, or an error —
/// a partial coordinate pair is never emitted.
///
/// The auxiliary map-picker widget carries an opaque, optional
/// map-service API key supplied by the caller via
/// [`with_api_key`](LocationField::with_api_key).
///
/// # Example
///
/// ```
/// use formkit_field::{Field, LocationField, ParseError};
/// use formkit_types::{Coordinates, SubmittedData, Value};
///
/// let field = LocationField::new("pos", "Receiver location");
///
/// let data = SubmittedData::new().with("pos-lat", "12.5").with("pos-lon", "-3.25");
/// let patch = field.parse(&data).unwrap();
/// assert_eq!(
///     patch.get("pos"),
///     Some(&Value::Location(Coordinates::new(12.5, -3.25)))
/// );
///
/// // Missing sub-key fails whole, never a partial patch.
/// let data = SubmittedData::new().with("pos-lat", "12.5");
/// assert!(matches!(
///     field.parse(&data),
///     Err(ParseError::MissingCompositeComponent { .. })
/// ));
/// ```
pub struct LocationField {
    id: String,
    label: String,
    help: Option<String>,
    api_key: Option<String>,
}

impl LocationField {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            help: None,
            api_key: None,
        }
    }

    /// Attaches help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Supplies the opaque map-service API key for the picker widget.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The composite submission key for one component.
    fn component_name(&self, component: &str) -> String {
        format!("{}-{}", self.id, component)
    }

    fn parse_component(&self, data: &SubmittedData, component: &str) -> Result<f64, ParseError> {
        let key = self.component_name(component);
        let raw = data
            .first(&key)
            .ok_or_else(|| ParseError::MissingCompositeComponent {
                field: self.id.clone(),
                component: component.to_string(),
            })?;
        FloatConverter::parse(raw).map_err(|e| e.for_field(self.id.as_str()))
    }
}

impl Field for LocationField {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    fn render(&self, snapshot: &ConfigSnapshot) -> Fragment {
        let current = snapshot.get(&self.id).and_then(Value::as_location);
        let sub_input = |component: &str, value: Option<f64>| Widget::NumberInput {
            name: self.component_name(component),
            placeholder: self.label.clone(),
            value: value.map(|v| Value::Float(v).to_string()).unwrap_or_default(),
            step: Some(Step::Any),
            unit: None,
        };
        let children = vec![
            sub_input("lat", current.map(|c| c.lat)),
            sub_input("lon", current.map(|c| c.lon)),
            Widget::MapPicker {
                target: self.id.clone(),
                api_key: self.api_key.clone(),
            },
        ];
        decorate(
            Fragment::new(&self.id, &self.label, Widget::Group { children }),
            self.help.as_deref(),
        )
    }

    fn parse(&self, data: &SubmittedData) -> Result<Patch, ParseError> {
        let [lat, lon] = COMPONENTS;
        let lat = self.parse_component(data, lat)?;
        let lon = self.parse_component(data, lon)?;
        Ok(Patch::single(
            &self.id,
            Value::Location(Coordinates::new(lat, lon)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> LocationField {
        LocationField::new("pos", "Position")
    }

    #[test]
    fn parse_both_components() {
        let data = SubmittedData::new()
            .with("pos-lat", "12.5")
            .with("pos-lon", "-3.25");
        let patch = field().parse(&data).unwrap();
        assert_eq!(
            patch.get("pos"),
            Some(&Value::Location(Coordinates::new(12.5, -3.25)))
        );
    }

    #[test]
    fn missing_lon_fails_whole() {
        let data = SubmittedData::new().with("pos-lat", "12.5");
        assert_eq!(
            field().parse(&data).unwrap_err(),
            ParseError::MissingCompositeComponent {
                field: "pos".into(),
                component: "lon".into(),
            }
        );
    }

    #[test]
    fn missing_lat_fails_whole() {
        let data = SubmittedData::new().with("pos-lon", "-3.25");
        assert_eq!(
            field().parse(&data).unwrap_err(),
            ParseError::MissingCompositeComponent {
                field: "pos".into(),
                component: "lat".into(),
            }
        );
    }

    #[test]
    fn malformed_component_fails_whole() {
        let data = SubmittedData::new()
            .with("pos-lat", "north")
            .with("pos-lon", "-3.25");
        assert_eq!(
            field().parse(&data).unwrap_err(),
            ParseError::MalformedNumber {
                field: "pos".into(),
                raw: "north".into(),
            }
        );
    }

    #[test]
    fn nothing_submitted_is_missing_not_empty() {
        // Composite fields have no "unchanged" case: absence is an error.
        assert!(matches!(
            field().parse(&SubmittedData::new()),
            Err(ParseError::MissingCompositeComponent { .. })
        ));
    }

    #[test]
    fn render_prefills_sub_inputs() {
        let snapshot = ConfigSnapshot::new().with("pos", Coordinates::new(50.1, 8.6));
        let frag = field().render(&snapshot);
        match &frag.widget {
            Widget::Group { children } => {
                assert_eq!(children.len(), 3);
                match &children[0] {
                    Widget::NumberInput { name, value, step, .. } => {
                        assert_eq!(name, "pos-lat");
                        assert_eq!(value, "50.1");
                        assert_eq!(*step, Some(Step::Any));
                    }
                    other => panic!("unexpected widget: {other:?}"),
                }
                match &children[2] {
                    Widget::MapPicker { target, api_key } => {
                        assert_eq!(target, "pos");
                        assert_eq!(*api_key, None);
                    }
                    other => panic!("unexpected widget: {other:?}"),
                }
            }
            other => panic!("unexpected widget: {other:?}"),
        }
    }

    #[test]
    fn render_carries_api_key_opaquely() {
        let frag = field().with_api_key("key-123").render(&ConfigSnapshot::new());
        match &frag.widget {
            Widget::Group { children } => match &children[2] {
                Widget::MapPicker { api_key, .. } => {
                    assert_eq!(api_key.as_deref(), Some("key-123"));
                }
                other => panic!("unexpected widget: {other:?}"),
            },
            other => panic!("unexpected widget: {other:?}"),
        }
    }
}
