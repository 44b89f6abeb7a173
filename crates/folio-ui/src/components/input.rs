//! Input Field Components
//!
//! Text inputs and textareas for the contact form. Both show a
//! validation message under the field when one is given.

use dioxus::prelude::*;

use crate::components::button::class_list;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input name and id; also ties the label to the input
    pub name: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Validation message shown under the field
    #[props(default)]
    pub error: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         value: form.read().data().email.clone(),
///         oninput: move |s| form.write().set_field(FormField::Email, s),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///         error: form.read().errors().get(FormField::Email).map(str::to_string),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let base = if props.error.is_some() { "input-field invalid" } else { "input-field" };
    let input_class = class_list(base, props.class.as_deref());
    let error_id = format!("{}-error", props.name);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.name}",
                    "{label}"
                }
            }
            input {
                id: "{props.name}",
                name: "{props.name}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                "aria-invalid": if props.error.is_some() { "true" } else { "false" },
                "aria-describedby": "{error_id}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldError { id: error_id.clone(), message: props.error.clone() }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Textarea name and id
    pub name: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Validation message shown under the field
    #[props(default)]
    pub error: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = if props.error.is_some() {
        "input-field textarea invalid"
    } else {
        "input-field textarea"
    };
    let error_id = format!("{}-error", props.name);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.name}",
                    "{label}"
                }
            }
            textarea {
                id: "{props.name}",
                name: "{props.name}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                "aria-invalid": if props.error.is_some() { "true" } else { "false" },
                "aria-describedby": "{error_id}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldError { id: error_id.clone(), message: props.error.clone() }
        }
    }
}

/// Inline validation message; renders nothing without a message
#[component]
pub fn FieldError(id: String, message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { id: "{id}", class: "field-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
