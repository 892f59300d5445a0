//! Form description types and the builder seam used to render them.
//!
//! The helper never renders HTML itself. It describes a grouped version
//! choice and one checkbox per package, and hands those to a [`FormBuilder`]
//! supplied by the hosting application. [`FormDefinition`] is the built-in
//! builder: it simply collects the fields and serializes them.

use serde::Serialize;
use std::collections::BTreeMap;

/// Presentation attributes attached to a field or its label.
pub type Attributes = BTreeMap<String, String>;

/// A single selectable version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionChoice {
    /// Label shown to the user.
    pub label: String,
    /// Constraint submitted when selected.
    pub value: String,
}

/// Labelled group of version choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceGroup {
    /// Group label.
    pub label: String,
    /// Choices in insertion order.
    pub choices: Vec<VersionChoice>,
}

impl ChoiceGroup {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            choices: Vec::new(),
        }
    }

    /// Add a choice. An existing label keeps its position and gets the new value.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.choices.iter_mut().find(|c| c.label == label) {
            Some(existing) => existing.value = value,
            None => self.choices.push(VersionChoice { label, value }),
        }
    }

    /// Value of the choice with `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value.as_str())
    }
}

/// Version choices grouped by label, groups in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionChoices {
    groups: Vec<ChoiceGroup>,
}

impl VersionChoices {
    /// Insert a choice into `group`, creating the group on first use.
    pub fn insert(&mut self, group: &str, label: impl Into<String>, value: impl Into<String>) {
        let index = match self.groups.iter().position(|g| g.label == group) {
            Some(index) => index,
            None => {
                self.groups.push(ChoiceGroup::new(group));
                self.groups.len() - 1
            }
        };
        self.groups[index].insert(label, value);
    }

    /// Group with the given label.
    #[must_use]
    pub fn group(&self, label: &str) -> Option<&ChoiceGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// All groups.
    #[must_use]
    pub fn groups(&self) -> &[ChoiceGroup] {
        &self.groups
    }

    /// Total number of choices across groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.choices.len()).sum()
    }

    /// Whether there are no choices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Grouped single-choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceField {
    /// Field identifier.
    pub name: String,
    /// Field label.
    pub label: String,
    /// Attributes of the label element.
    pub label_attr: Attributes,
    /// Attributes of the field element.
    pub attr: Attributes,
    /// Whether a value must be submitted.
    pub required: bool,
    /// Preselected value.
    pub data: String,
    /// Available choices.
    pub choices: VersionChoices,
}

/// Boolean toggle field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxField {
    /// Field identifier.
    pub name: String,
    /// Value submitted when checked.
    pub value: String,
    /// Field label.
    pub label: String,
    /// Help text.
    pub help: String,
    /// Attributes of the field element.
    pub attr: Attributes,
    /// Whether the box must be checked.
    pub required: bool,
}

/// Receives field descriptions and produces the host's form type.
pub trait FormBuilder {
    /// Finished form.
    type Form;

    /// Add a grouped choice field.
    fn add_choice(&mut self, field: ChoiceField);

    /// Add a boolean field.
    fn add_checkbox(&mut self, field: CheckboxField);

    /// Produce the form.
    fn finish(self) -> Self::Form;
}

/// A field of a [`FormDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormField {
    /// Grouped choice.
    Choice(ChoiceField),
    /// Checkbox.
    Checkbox(CheckboxField),
}

impl FormField {
    /// Field identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Choice(f) => &f.name,
            Self::Checkbox(f) => &f.name,
        }
    }
}

/// Plain, serializable form description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormDefinition {
    fields: Vec<FormField>,
}

impl FormDefinition {
    /// All fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Field by identifier.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Choice field by identifier.
    #[must_use]
    pub fn choice(&self, name: &str) -> Option<&ChoiceField> {
        match self.field(name)? {
            FormField::Choice(f) => Some(f),
            FormField::Checkbox(_) => None,
        }
    }

    /// All checkbox fields.
    pub fn checkboxes(&self) -> impl Iterator<Item = &CheckboxField> {
        self.fields.iter().filter_map(|f| match f {
            FormField::Checkbox(c) => Some(c),
            FormField::Choice(_) => None,
        })
    }
}

impl FormBuilder for FormDefinition {
    type Form = Self;

    fn add_choice(&mut self, field: ChoiceField) {
        self.fields.push(FormField::Choice(field));
    }

    fn add_checkbox(&mut self, field: CheckboxField) {
        self.fields.push(FormField::Checkbox(field));
    }

    fn finish(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn duplicate_label_replaces_in_place() {
        let mut choices = VersionChoices::default();
        choices.insert("A", "first", "1");
        choices.insert("A", "second", "2");
        choices.insert("A", "first", "3");

        let group = choices.group("A").unwrap();
        let labels: Vec<_> = group.choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
        assert_eq!(group.get("first"), Some("3"));
        assert_eq!(choices.len(), 2);
    }

    #[test]
    fn groups_in_creation_order() {
        let mut choices = VersionChoices::default();
        choices.insert("B", "x", "1");
        choices.insert("A", "y", "2");
        choices.insert("B", "z", "3");

        let labels: Vec<_> = choices.groups().iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A"]);
    }

    #[test]
    fn definition_collects_fields() {
        let mut form = FormDefinition::default();
        form.add_checkbox(CheckboxField {
            name: "typo3-cms-core".into(),
            value: "typo3/cms-core".into(),
            label: "typo3/cms-core".into(),
            help: "The core library of TYPO3.".into(),
            attr: Attributes::new(),
            required: false,
        });
        let form = form.finish();

        assert_eq!(form.fields().len(), 1);
        assert!(form.choice("typo3-cms-core").is_none());
        assert_eq!(form.checkboxes().count(), 1);
    }

    #[test]
    fn field_serializes_with_type_tag() {
        let field = FormField::Checkbox(CheckboxField {
            name: "typo3-minimal".into(),
            value: "typo3/minimal".into(),
            label: "typo3/minimal".into(),
            help: String::new(),
            attr: Attributes::new(),
            required: false,
        });
        let json = crate::to_json(&field).unwrap();
        assert!(json.starts_with(r#"{"type":"checkbox""#), "{json}");
    }
}
