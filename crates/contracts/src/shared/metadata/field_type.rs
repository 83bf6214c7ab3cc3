//! Input kind enumeration for field metadata

/// How a field is edited in a form and interpreted by the form controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Phone,
    Number,
    Date,
    TextArea,
    /// Single choice among fixed options
    Select(&'static [&'static str]),
    /// List of `Tag` sub-items (skills, languages, clauses...)
    Tags,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Number => "number",
            Self::Date => "date",
            Self::TextArea => "textarea",
            Self::Select(_) => "select",
            Self::Tags => "tags",
        }
    }

    /// HTML `type` attribute for `<input>`-based kinds
    pub fn html_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Number => "number",
            Self::Date => "date",
            _ => "text",
        }
    }

    /// Whether the bag value of this field is a JSON array
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Tags)
    }
}
