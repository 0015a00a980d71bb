use serde_json::{Map, Value};

use crate::i18n::Translator;

/// Submitted form entries in document order. Names may repeat.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    entries: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Last value submitted under `name`, or "" when the field is absent.
    pub fn get(&self, name: &str) -> &str {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, value)| key == name && value == "on")
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckboxItem {
    pub field: String,
    pub label: String,
}

/// A set of checkboxes folded into one array field on submit.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckboxGroup {
    pub key: String,
    pub items: Vec<CheckboxItem>,
}

impl CheckboxGroup {
    /// Builds a group from ordered (option key, label) pairs; each checkbox
    /// is named `<prefix>_<option key>`.
    pub fn from_options(key: &str, prefix: &str, options: Vec<(String, String)>) -> Self {
        let items = options
            .into_iter()
            .map(|(option, label)| CheckboxItem {
                field: format!("{}_{}", prefix, option),
                label,
            })
            .collect();
        Self { key: key.to_string(), items }
    }

    fn checked_labels(&self, fields: &FormFields) -> Vec<Value> {
        self.items
            .iter()
            .filter(|item| fields.is_checked(&item.field))
            .map(|item| Value::String(item.label.clone()))
            .collect()
    }

    fn owns(&self, field: &str) -> bool {
        self.items.iter().any(|item| item.field == field)
    }
}

/// The three checkbox groups of the detailed consultation form, in the
/// active locale's option order.
pub fn consultation_groups(tr: &Translator) -> Vec<CheckboxGroup> {
    vec![
        CheckboxGroup::from_options(
            "health_conditions",
            "health",
            tr.options("consultation_form.health_conditions"),
        ),
        CheckboxGroup::from_options(
            "travel_styles",
            "style",
            tr.options("consultation_form.travel_styles"),
        ),
        CheckboxGroup::from_options(
            "accommodation_types",
            "accom",
            tr.options("consultation_form.accommodation_types"),
        ),
    ]
}

/// Normalizes submitted entries: plain fields pass through as strings and each
/// checkbox group collapses into an array of checked labels in declared order.
pub fn collect(fields: &FormFields, groups: &[CheckboxGroup]) -> Map<String, Value> {
    let mut record = Map::new();
    for (name, value) in fields.entries() {
        if groups.iter().any(|group| group.owns(name)) {
            continue;
        }
        record.insert(name.clone(), Value::String(value.clone()));
    }
    for group in groups {
        record.insert(group.key.clone(), Value::Array(group.checked_labels(fields)));
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use serde_json::json;

    fn styles() -> CheckboxGroup {
        CheckboxGroup::from_options(
            "travel_styles",
            "style",
            vec![
                ("relaxation".to_string(), "Relaxation".to_string()),
                ("adventure".to_string(), "Adventure".to_string()),
                ("culture".to_string(), "Culture".to_string()),
            ],
        )
    }

    #[test]
    fn checked_labels_follow_declared_order() {
        // submitted out of order on purpose
        let fields: FormFields = vec![
            ("style_culture", "on"),
            ("name", "Jane"),
            ("style_relaxation", "on"),
        ]
        .into_iter()
        .collect();

        let record = collect(&fields, &[styles()]);
        assert_eq!(record["travel_styles"], json!(["Relaxation", "Culture"]));
        assert_eq!(record["name"], json!("Jane"));
        assert!(!record.contains_key("style_culture"));
        assert!(!record.contains_key("style_relaxation"));
    }

    #[test]
    fn only_on_counts_as_checked() {
        let fields: FormFields = vec![("style_adventure", "off"), ("style_culture", "")]
            .into_iter()
            .collect();
        let record = collect(&fields, &[styles()]);
        assert_eq!(record["travel_styles"], json!([]));
    }

    #[test]
    fn empty_submission_still_yields_every_group() {
        let tr = Translator::new(Locale::En);
        let record = collect(&FormFields::default(), &consultation_groups(&tr));
        assert_eq!(record.len(), 3);
        assert_eq!(record["health_conditions"], json!([]));
        assert_eq!(record["accommodation_types"], json!([]));
    }

    #[test]
    fn labels_come_from_the_active_locale() {
        let fields: FormFields = vec![("health_asthma", "on")].into_iter().collect();
        let en = collect(&fields, &consultation_groups(&Translator::new(Locale::En)));
        let ko = collect(&fields, &consultation_groups(&Translator::new(Locale::Ko)));
        assert_eq!(en["health_conditions"], json!(["Asthma"]));
        assert_eq!(ko["health_conditions"], json!(["천식"]));
    }

    #[test]
    fn missing_plain_field_reads_empty() {
        let fields: FormFields = vec![("email", "a@b.c")].into_iter().collect();
        assert_eq!(fields.get("email"), "a@b.c");
        assert_eq!(fields.get("name"), "");
    }
}
