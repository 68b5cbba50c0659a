//! Numeric fields.

use crate::field::{decorate, parse_scalar, Field};
use crate::{Converter, FloatConverter, Fragment, IntConverter, ParseError, Step, Widget};
use formkit_types::{ConfigSnapshot, Patch, SubmittedData};

/// Integer field with optional unit suffix and step constraint.
///
/// # Example
///
/// ```
/// use formkit_field::{Field, NumberField};
/// use formkit_types::{SubmittedData, Value};
///
/// let field = NumberField::new("frequency", "Center frequency")
///     .with_unit("Hz")
///     .with_step(500);
///
/// let data = SubmittedData::new().with("frequency", "7074000");
/// let patch = field.parse(&data).unwrap();
/// assert_eq!(patch.get("frequency"), Some(&Value::Int(7_074_000)));
/// ```
pub struct NumberField {
    id: String,
    label: String,
    help: Option<String>,
    unit: Option<String>,
    step: Option<i64>,
    converter: Box<dyn Converter>,
}

impl NumberField {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            help: None,
            unit: None,
            step: None,
            converter: Box::new(IntConverter),
        }
    }

    /// Attaches help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Appends a unit suffix (e.g. `"Hz"`) to the rendered input.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Constrains the input to the given increment.
    #[must_use]
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    /// Replaces the default integer converter.
    #[must_use]
    pub fn with_converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }
}

impl Field for NumberField {
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
        let widget = Widget::NumberInput {
            name: self.id.clone(),
            placeholder: self.label.clone(),
            value: self.converter.to_display(snapshot.get(&self.id)),
            step: self.step.map(Step::Every),
            unit: self.unit.clone(),
        };
        decorate(
            Fragment::new(&self.id, &self.label, widget),
            self.help.as_deref(),
        )
    }

    fn parse(&self, data: &SubmittedData) -> Result<Patch, ParseError> {
        parse_scalar(&self.id, self.converter.as_ref(), data)
    }
}

/// Float field with unconstrained precision (`step="any"`).
///
/// # Example
///
/// ```
/// use formkit_field::{Field, FloatField};
/// use formkit_types::{SubmittedData, Value};
///
/// let field = FloatField::new("squelch", "Squelch level");
/// let data = SubmittedData::new().with("squelch", "-22.5");
/// let patch = field.parse(&data).unwrap();
/// assert_eq!(patch.get("squelch"), Some(&Value::Float(-22.5)));
/// ```
pub struct FloatField {
    id: String,
    label: String,
    help: Option<String>,
    converter: Box<dyn Converter>,
}

impl FloatField {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            help: None,
            converter: Box::new(FloatConverter),
        }
    }

    /// Attaches help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Replaces the default float converter.
    #[must_use]
    pub fn with_converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }
}

impl Field for FloatField {
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
        let widget = Widget::NumberInput {
            name: self.id.clone(),
            placeholder: self.label.clone(),
            value: self.converter.to_display(snapshot.get(&self.id)),
            step: Some(Step::Any),
            unit: None,
        };
        decorate(
            Fragment::new(&self.id, &self.label, widget),
            self.help.as_deref(),
        )
    }

    fn parse(&self, data: &SubmittedData) -> Result<Patch, ParseError> {
        parse_scalar(&self.id, self.converter.as_ref(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use formkit_types::Value;

    #[test]
    fn number_renders_unit_and_step() {
        let field = NumberField::new("freq", "Frequency")
            .with_unit("Hz")
            .with_step(500);
        let snapshot = ConfigSnapshot::new().with("freq", 7_074_000i64);
        let frag = field.render(&snapshot);

        assert_eq!(
            frag.widget,
            Widget::NumberInput {
                name: "freq".into(),
                placeholder: "Frequency".into(),
                value: "7074000".into(),
                step: Some(Step::Every(500)),
                unit: Some("Hz".into()),
            }
        );
    }

    #[test]
    fn number_defaults_have_no_step_or_unit() {
        let frag = NumberField::new("freq", "Frequency").render(&ConfigSnapshot::new());
        match frag.widget {
            Widget::NumberInput { step, unit, value, .. } => {
                assert_eq!(step, None);
                assert_eq!(unit, None);
                assert_eq!(value, "");
            }
            other => panic!("unexpected widget: {other:?}"),
        }
    }

    #[test]
    fn number_parse_rejects_non_integer() {
        let data = SubmittedData::new().with("freq", "7074000.5");
        let err = NumberField::new("freq", "Frequency").parse(&data).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedNumber {
                field: "freq".into(),
                raw: "7074000.5".into(),
            }
        );
    }

    #[test]
    fn number_absent_yields_no_entry() {
        let patch = NumberField::new("freq", "Frequency")
            .parse(&SubmittedData::new())
            .unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn float_renders_step_any() {
        let field = FloatField::new("squelch", "Squelch");
        let snapshot = ConfigSnapshot::new().with("squelch", -22.5f64);
        let frag = field.render(&snapshot);
        match frag.widget {
            Widget::NumberInput { step, value, .. } => {
                assert_eq!(step, Some(Step::Any));
                assert_eq!(value, "-22.5");
            }
            other => panic!("unexpected widget: {other:?}"),
        }
    }

    #[test]
    fn float_parse() {
        let data = SubmittedData::new().with("squelch", "12.5");
        let patch = FloatField::new("squelch", "Squelch").parse(&data).unwrap();
        assert_eq!(patch.get("squelch"), Some(&Value::Float(12.5)));
    }
}
