//! Declarative form and page-header definitions.
//!
//! A page builds a `PageHeader` and a `FormConfig`, and the shared partials
//! (`partials/page_header.html`, `partials/form_builder.html`) turn them into
//! markup. Nothing here knows about any particular page.

use std::collections::{HashMap, HashSet};
use std::fmt;

pub mod coin_transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Select,
    Number,
    Textarea,
    Text,
    Email,
    Password,
    Date,
    Hidden,
}

impl FieldType {
    /// The `type` attribute for `<input>` widgets.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Date => "date",
            FieldType::Hidden => "hidden",
            FieldType::Select | FieldType::Textarea | FieldType::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
}

impl FormMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMethod::Get => "GET",
            FormMethod::Post => "POST",
        }
    }
}

/// One entry of a select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// A single form field. Empty strings mean "not set" for placeholder and help.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub field_type: FieldType,
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub options: Vec<SelectOption>,
    pub rows: Option<u32>,
    pub help: String,
    pub step: Option<String>,
    pub min: Option<String>,
}

impl FieldSpec {
    pub fn new(field_type: FieldType, name: impl Into<String>) -> Self {
        Self {
            field_type,
            name: name.into(),
            label: String::new(),
            placeholder: String::new(),
            required: false,
            options: Vec::new(),
            rows: None,
            help: String::new(),
            step: None,
            min: None,
        }
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self::new(FieldType::Select, name)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(FieldType::Number, name)
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(FieldType::Textarea, name)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(FieldType::Text, name)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = SelectOption>,
    {
        self.options = options.into_iter().collect();
        self
    }

    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.step = Some(step.into());
        self
    }

    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    // Template helpers: askama conditions must be plain bool expressions.

    pub fn is_select(&self) -> bool {
        self.field_type == FieldType::Select
    }

    pub fn is_textarea(&self) -> bool {
        self.field_type == FieldType::Textarea
    }

    pub fn is_hidden(&self) -> bool {
        self.field_type == FieldType::Hidden
    }

    pub fn input_type(&self) -> &'static str {
        self.field_type.input_type()
    }

    pub fn textarea_rows(&self) -> u32 {
        self.rows.unwrap_or(3)
    }

    /// DOM id for the widget, so the `<label for>` can point at it.
    pub fn dom_id(&self) -> String {
        format!("field-{}", self.name.replace(['[', ']', '.'], "_"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    EmptyFieldName,
    DuplicateField(String),
    DomIdCollision(String, String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::EmptyFieldName => write!(f, "field name must not be empty"),
            FormError::DuplicateField(name) => write!(f, "duplicate field name '{name}'"),
            FormError::DomIdCollision(a, b) => {
                write!(f, "fields '{a}' and '{b}' map to the same DOM id")
            }
        }
    }
}

impl std::error::Error for FormError {}

/// Everything the form builder needs to render one form.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub method: FormMethod,
    pub action: String,
    pub title: String,
    pub subtitle: String,
    pub fields: Vec<FieldSpec>,
    pub cancel_url: String,
    pub submit_text: String,
}

impl FormConfig {
    /// Names become the submitted keys, so they must be non-empty and unique.
    /// Their DOM ids must be unique too, or `<label for>` becomes ambiguous.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut seen = HashSet::new();
        let mut dom_ids: HashMap<String, &str> = HashMap::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(FormError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
            if let Some(other) = dom_ids.insert(field.dom_id(), field.name.as_str()) {
                return Err(FormError::DomIdCollision(other.to_string(), field.name.clone()));
            }
        }
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn method_str(&self) -> &'static str {
        self.method.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub title: String,
    pub url: Option<String>,
}

impl Breadcrumb {
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self { title: title.into(), url: Some(url.into()) }
    }

    pub fn current(title: impl Into<String>) -> Self {
        Self { title: title.into(), url: None }
    }
}

/// Page title block. `icon` is trusted markup and is rendered unescaped.
#[derive(Debug, Clone)]
pub struct PageHeader {
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub icon_bg: String,
    pub icon_color: String,
    pub breadcrumbs: Vec<Breadcrumb>,
}
