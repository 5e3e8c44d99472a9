use formforge_core::types::{Field, FieldKind, Section, ValidationRules, Visibility};

/// Partial update for a section. Unset members leave the section
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SectionPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Applies the patch, returning true if the section changed.
    pub(crate) fn apply_to(&self, section: &mut Section) -> bool {
        let mut changed = false;
        if let Some(title) = &self.title {
            if section.title != *title {
                section.title = title.clone();
                changed = true;
            }
        }
        if let Some(description) = &self.description {
            if section.description != *description {
                section.description = description.clone();
                changed = true;
            }
        }
        changed
    }
}

/// Partial update for a field. Optional field attributes use a nested
/// `Option` so a patch can distinguish "leave alone" (`None`) from
/// "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub kind: Option<FieldKind>,
    pub label: Option<String>,
    pub required: Option<bool>,
    pub placeholder: Option<Option<String>>,
    pub options: Option<Option<Vec<String>>>,
    pub visibility: Option<Option<Visibility>>,
    pub validations: Option<Option<ValidationRules>>,
}

impl FieldPatch {
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Some(placeholder.into()));
        self
    }

    pub fn clear_placeholder(mut self) -> Self {
        self.placeholder = Some(None);
        self
    }

    pub fn options(mut self, options: Vec<String>) -> Self {
        self.options = Some(Some(options));
        self
    }

    pub fn clear_options(mut self) -> Self {
        self.options = Some(None);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(Some(visibility));
        self
    }

    pub fn clear_visibility(mut self) -> Self {
        self.visibility = Some(None);
        self
    }

    pub fn validations(mut self, validations: ValidationRules) -> Self {
        self.validations = Some(Some(validations));
        self
    }

    pub fn clear_validations(mut self) -> Self {
        self.validations = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the patch, returning true if the field changed.
    pub(crate) fn apply_to(&self, field: &mut Field) -> bool {
        let mut changed = false;
        if let Some(kind) = &self.kind {
            if field.kind != *kind {
                field.kind = kind.clone();
                changed = true;
            }
        }
        if let Some(label) = &self.label {
            if field.label != *label {
                field.label = label.clone();
                changed = true;
            }
        }
        if let Some(required) = self.required {
            if field.required != required {
                field.required = required;
                changed = true;
            }
        }
        if let Some(placeholder) = &self.placeholder {
            if field.placeholder != *placeholder {
                field.placeholder = placeholder.clone();
                changed = true;
            }
        }
        if let Some(options) = &self.options {
            if field.options != *options {
                field.options = options.clone();
                changed = true;
            }
        }
        if let Some(visibility) = &self.visibility {
            if field.visibility != *visibility {
                field.visibility = visibility.clone();
                changed = true;
            }
        }
        if let Some(validations) = &self.validations {
            if field.validations != *validations {
                field.validations = validations.clone();
                changed = true;
            }
        }
        changed
    }
}
