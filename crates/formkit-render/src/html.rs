//! Bootstrap-flavored HTML serialization of the widget tree.

use formkit_field::{Fragment, SelectChoice, Step, Widget};
use std::fmt::Write;

const INPUT_CLASSES: &str = "form-control form-control-sm";
const CHECK_CLASSES: &str = "form-check form-control-sm";

/// Serializes [`Fragment`]s into HTML markup.
///
/// Every fragment becomes a uniformly labeled `form-group` row: a
/// label bound to the field id, the widget body, and optional
/// `<small>` help text. All attribute and text content is
/// HTML-escaped. Serialization is total — any well-formed widget tree
/// produces markup.
///
/// # Example
///
/// ```
/// use formkit_field::{Fragment, Widget};
/// use formkit_render::HtmlRenderer;
///
/// let fragment = Fragment::new(
///     "name",
///     "Name",
///     Widget::TextInput {
///         name: "name".into(),
///         placeholder: "Name".into(),
///         value: "a < b".into(),
///     },
/// );
///
/// let html = HtmlRenderer::new().render_fragment(&fragment);
/// assert!(html.contains("a &lt; b"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders a whole form: one fragment after another, in order.
    #[must_use]
    pub fn render_form(&self, fragments: &[Fragment]) -> String {
        tracing::debug!(fragments = fragments.len(), "serializing form");
        fragments
            .iter()
            .map(|f| self.render_fragment(f))
            .collect()
    }

    /// Renders one labeled field row.
    #[must_use]
    pub fn render_fragment(&self, fragment: &Fragment) -> String {
        let help = match &fragment.help {
            Some(text) => format!("<small>{}</small>", escape(text)),
            None => String::new(),
        };
        format!(
            concat!(
                r#"<div class="form-group row">"#,
                r#"<label class="col-form-label col-form-label-sm col-3" for="{id}">{label}</label>"#,
                r#"<div class="col-9 p-0">{widget}{help}</div>"#,
                "</div>"
            ),
            id = escape(&fragment.id),
            label = escape(&fragment.label),
            widget = self.render_widget(&fragment.widget),
            help = help,
        )
    }

    fn render_widget(&self, widget: &Widget) -> String {
        match widget {
            Widget::TextInput {
                name,
                placeholder,
                value,
            } => format!(
                r#"<input type="text" class="{INPUT_CLASSES}" id="{id}" name="{id}" placeholder="{placeholder}" value="{value}">"#,
                id = escape(name),
                placeholder = escape(placeholder),
                value = escape(value),
            ),

            Widget::TextArea { name, value } => format!(
                r#"<textarea class="{INPUT_CLASSES}" id="{id}" name="{id}">{value}</textarea>"#,
                id = escape(name),
                value = escape(value),
            ),

            Widget::NumberInput {
                name,
                placeholder,
                value,
                step,
                unit,
            } => {
                let step = match step {
                    Some(Step::Any) => r#" step="any""#.to_string(),
                    Some(Step::Every(n)) => format!(r#" step="{n}""#),
                    None => String::new(),
                };
                let append = match unit {
                    Some(unit) => format!(
                        r#"<div class="input-group-append"><span class="input-group-text">{}</span></div>"#,
                        escape(unit)
                    ),
                    None => String::new(),
                };
                format!(
                    concat!(
                        r#"<div class="input-group input-group-sm">"#,
                        r#"<input type="number" class="{classes}" id="{id}" name="{id}" placeholder="{placeholder}" value="{value}"{step}>"#,
                        "{append}",
                        "</div>"
                    ),
                    classes = INPUT_CLASSES,
                    id = escape(name),
                    placeholder = escape(placeholder),
                    value = escape(value),
                    step = step,
                    append = append,
                )
            }

            Widget::Checkbox {
                name,
                caption,
                checked,
            } => format!(
                concat!(
                    r#"<div class="{classes}">"#,
                    r#"<input class="form-check-input" type="checkbox" id="{id}" name="{id}"{checked}>"#,
                    r#"<label class="form-check-label" for="{id}">{caption}</label>"#,
                    "</div>"
                ),
                classes = CHECK_CLASSES,
                id = escape(name),
                checked = if *checked { " checked" } else { "" },
                caption = escape(caption),
            ),

            Widget::Select { name, options } => format!(
                r#"<select class="{INPUT_CLASSES}" id="{id}" name="{id}">{options}</select>"#,
                id = escape(name),
                options = self.render_options(options),
            ),

            Widget::Group { children } => {
                let mut out = String::new();
                for child in children {
                    out.push_str(&self.render_widget(child));
                }
                out
            }

            Widget::MapPicker { target, api_key } => {
                let key = match api_key {
                    Some(key) => format!(r#" data-key="{}""#, escape(key)),
                    None => String::new(),
                };
                format!(
                    r#"<div class="map-input"{key} for="{target}"></div>"#,
                    key = key,
                    target = escape(target),
                )
            }
        }
    }

    fn render_options(&self, options: &[SelectChoice]) -> String {
        let mut out = String::new();
        for option in options {
            let _ = write!(
                out,
                r#"<option value="{value}"{selected}>{text}</option>"#,
                value = escape(&option.value),
                selected = if option.selected { " selected" } else { "" },
                text = escape(&option.text),
            );
        }
        out
    }
}

/// Escapes text for use in HTML attribute and element content.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
