//! End-to-end render → submit → parse → merge flow over a realistic
//! receiver-settings schema.

use formkit_field::{
    CheckboxField, Choice, DropdownField, FloatField, Fragment, LocationField,
    MultiCheckboxField, NumberField, ParseError, Schema, ServiceDirectory, TextField, Widget,
};
use formkit_types::{ConfigSnapshot, Coordinates, SubmittedData, Value};
use std::fmt;
use strum_macros::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, AsRefStr, EnumIter)]
enum Theme {
    Default,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Default => "Default theme",
            Theme::Dark => "Dark theme",
        };
        f.write_str(label)
    }
}

struct StubDirectory {
    entries: Vec<Choice>,
}

impl ServiceDirectory for StubDirectory {
    fn available(&self) -> Vec<Choice> {
        self.entries.clone()
    }
}

/// Builds the schema fresh, the way a request handler would, so the
/// directory-backed field picks up the directory's current state.
fn receiver_schema(directory: &dyn ServiceDirectory) -> Schema {
    Schema::builder()
        .field(TextField::new("receiver_name", "Receiver name").with_help("Shown to users"))
        .field(NumberField::new("frequency", "Center frequency").with_unit("Hz"))
        .field(FloatField::new("squelch", "Squelch level"))
        .field(CheckboxField::new("waterfall", "Waterfall", "Enable waterfall display"))
        .field(MultiCheckboxField::from_directory("services", "Background services", directory))
        .field(MultiCheckboxField::profile_presets("profiles", "Decoding profiles"))
        .field(DropdownField::from_enumeration::<Theme>("theme", "Theme"))
        .field(LocationField::new("location", "Receiver location").with_api_key("maps-key"))
        .build()
        .expect("unique field ids")
}

fn directory() -> StubDirectory {
    StubDirectory {
        entries: vec![Choice::new("ft8", "FT8"), Choice::new("wspr", "WSPR")],
    }
}

#[test]
fn render_emits_one_tagged_fragment_per_field() {
    let schema = receiver_schema(&directory());
    let snapshot = ConfigSnapshot::new()
        .with("receiver_name", "Test RX")
        .with("frequency", 14_074_000i64)
        .with("location", Coordinates::new(50.1, 8.6));

    let fragments: Vec<Fragment> = schema.render(&snapshot);
    let ids: Vec<&str> = fragments.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "receiver_name",
            "frequency",
            "squelch",
            "waterfall",
            "services",
            "profiles",
            "theme",
            "location"
        ]
    );

    // Current values flow into widgets.
    match &fragments[1].widget {
        Widget::NumberInput { value, unit, .. } => {
            assert_eq!(value, "14074000");
            assert_eq!(unit.as_deref(), Some("Hz"));
        }
        other => panic!("unexpected widget: {other:?}"),
    }
}

#[test]
fn full_submission_round_trip() {
    let schema = receiver_schema(&directory());

    let data = SubmittedData::new()
        .with("receiver_name", "New name")
        .with("frequency", "7074000")
        .with("squelch", "-22.5")
        .with("waterfall", "on")
        .with("services-wspr", "on")
        .with("profiles-normal", "on")
        .with("profiles-turbo", "on")
        .with("theme", "Dark")
        .with("location-lat", "50.1")
        .with("location-lon", "8.6");

    let patch = schema.parse(&data).expect("valid submission");

    assert_eq!(patch.get("receiver_name"), Some(&Value::Text("New name".into())));
    assert_eq!(patch.get("frequency"), Some(&Value::Int(7_074_000)));
    assert_eq!(patch.get("squelch"), Some(&Value::Float(-22.5)));
    assert_eq!(patch.get("waterfall"), Some(&Value::Bool(true)));
    assert_eq!(patch.get("services"), Some(&Value::Keys(vec!["wspr".into()])));
    assert_eq!(
        patch.get("profiles"),
        Some(&Value::Keys(vec!["normal".into(), "turbo".into()]))
    );
    assert_eq!(patch.get("theme"), Some(&Value::Text("Dark".into())));
    assert_eq!(
        patch.get("location"),
        Some(&Value::Location(Coordinates::new(50.1, 8.6)))
    );

    // Caller-side merge.
    let mut snapshot = ConfigSnapshot::new().with("receiver_name", "Old name");
    snapshot.apply(patch);
    assert_eq!(
        snapshot.get("receiver_name"),
        Some(&Value::Text("New name".into()))
    );
    assert_eq!(snapshot.get("frequency"), Some(&Value::Int(7_074_000)));
}

#[test]
fn partial_submission_only_touches_submitted_scalars() {
    let schema = receiver_schema(&directory());
    // Location sub-keys must be present: the composite field has no
    // "unchanged" case.
    let data = SubmittedData::new()
        .with("frequency", "7074000")
        .with("location-lat", "0")
        .with("location-lon", "0");

    let patch = schema.parse(&data).expect("valid submission");

    // Submitted scalar present.
    assert_eq!(patch.get("frequency"), Some(&Value::Int(7_074_000)));
    // Absent scalars yield no entry.
    assert_eq!(patch.get("receiver_name"), None);
    assert_eq!(patch.get("squelch"), None);
    assert_eq!(patch.get("theme"), None);
    // Absent checkboxes are explicit.
    assert_eq!(patch.get("waterfall"), Some(&Value::Bool(false)));
    assert_eq!(patch.get("services"), Some(&Value::Keys(vec![])));
    assert_eq!(patch.get("profiles"), Some(&Value::Keys(vec![])));
}

#[test]
fn reconstructing_per_request_picks_up_directory_changes() {
    let mut dir = directory();
    let first = receiver_schema(&dir);
    let first_services = first
        .render(&ConfigSnapshot::new())
        .into_iter()
        .find(|f| f.id == "services")
        .unwrap();

    dir.entries.push(Choice::new("aprs", "APRS"));
    let second = receiver_schema(&dir);
    let second_services = second
        .render(&ConfigSnapshot::new())
        .into_iter()
        .find(|f| f.id == "services")
        .unwrap();

    let count = |frag: &Fragment| match &frag.widget {
        Widget::Group { children } => children.len(),
        other => panic!("unexpected widget: {other:?}"),
    };
    assert_eq!(count(&first_services), 2);
    assert_eq!(count(&second_services), 3);
}

#[test]
fn aggregate_errors_identify_each_failing_field() {
    let schema = receiver_schema(&directory());
    let data = SubmittedData::new()
        .with("frequency", "fast")
        .with("theme", "neon")
        .with("location-lat", "50.1");

    let errors = schema.parse_all(&data).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(
        errors[0],
        ParseError::MalformedNumber {
            field: "frequency".into(),
            raw: "fast".into(),
        }
    );
    assert_eq!(
        errors[1],
        ParseError::UnknownEnumMember {
            field: "theme".into(),
            raw: "neon".into(),
        }
    );
    assert_eq!(
        errors[2],
        ParseError::MissingCompositeComponent {
            field: "location".into(),
            component: "lon".into(),
        }
    );
}
