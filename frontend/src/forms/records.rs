use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::content::services::ServiceOffering;
use crate::forms::collector::{collect, CheckboxGroup, FormFields};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InquiryKind {
    QuickBooking,
    QuickInquiry,
}

/// Travel dates from a pair of date inputs. Unparseable or blank inputs are
/// treated as not chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn parse(from: &str, to: &str) -> Self {
        let date = |raw: &str| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
        Self {
            from: date(from),
            to: date(to),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InquiryRecord {
    pub name: String,
    pub email: String,
    pub passengers: Option<u32>,
    pub travel_date_from: Option<NaiveDate>,
    pub travel_date_to: Option<NaiveDate>,
    pub requests: String,
    #[serde(rename = "type")]
    pub kind: InquiryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_title: Option<String>,
}

impl InquiryRecord {
    fn from_fields(fields: &FormFields, kind: InquiryKind) -> Self {
        let dates = DateRange::parse(fields.get("travel_date_from"), fields.get("travel_date_to"));
        Self {
            name: fields.get("name").to_string(),
            email: fields.get("email").to_string(),
            passengers: fields.get("passengers").trim().parse().ok(),
            travel_date_from: dates.from,
            travel_date_to: dates.to,
            requests: fields.get("requests").to_string(),
            kind,
            service_id: None,
            service_title: None,
        }
    }

    /// Booking against a signature journey; carries the journey as subject.
    pub fn quick_booking(fields: &FormFields, service: &ServiceOffering) -> Self {
        Self {
            service_id: Some(service.id.to_string()),
            service_title: Some(service.title.clone()),
            ..Self::from_fields(fields, InquiryKind::QuickBooking)
        }
    }

    pub fn quick_inquiry(fields: &FormFields) -> Self {
        Self::from_fields(fields, InquiryKind::QuickInquiry)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRecord {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.get("name").to_string(),
            email: fields.get("email").to_string(),
            message: fields.get("message").to_string(),
        }
    }
}

/// Plain consultation fields with the value used when nothing was submitted.
pub const CONSULTATION_FIELDS: [(&str, &str); 26] = [
    ("name_passport", ""),
    ("dob", ""),
    ("nationality", ""),
    ("passport_number", ""),
    ("phone_kakaotalk", ""),
    ("accompanying_travelers", ""),
    ("preferred_consultation_date", ""),
    ("health_special_attention", ""),
    ("current_medications", ""),
    ("emergency_contact", ""),
    ("food_allergies", "no"),
    ("food_allergies_specify", ""),
    ("animal_allergies", "no"),
    ("animal_allergies_specify", ""),
    ("preferred_diet", ""),
    ("avoid_foods", ""),
    ("alcohol", ""),
    ("transport_ability", ""),
    ("long_distance_pref", ""),
    ("transport_discomfort", ""),
    ("specific_activities", ""),
    ("avoid_activities", ""),
    ("special_anniversary", ""),
    ("bed_config", "king"),
    ("additional_services", ""),
    ("additional_requests", ""),
];

/// The detailed consultation as one flat record.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct ConsultationRecord(Map<String, Value>);

impl ConsultationRecord {
    pub fn from_fields(fields: &FormFields, groups: &[CheckboxGroup]) -> Self {
        let collected = collect(fields, groups);
        let mut record = Map::new();
        for (name, default) in CONSULTATION_FIELDS {
            let value = match collected.get(name).and_then(Value::as_str) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => default.to_string(),
            };
            record.insert(name.to_string(), Value::String(value));
        }
        for group in groups {
            let labels = collected.get(&group.key).cloned().unwrap_or(Value::Array(Vec::new()));
            record.insert(group.key.clone(), labels);
        }
        Self(record)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::services::find_service;
    use crate::forms::collector::consultation_groups;
    use crate::i18n::{Locale, Translator};
    use serde_json::json;

    #[test]
    fn quick_booking_carries_subject_and_discriminator() {
        let tr = Translator::new(Locale::En);
        let service = find_service(&tr, "ultimate-escape").unwrap();
        let fields: FormFields = vec![
            ("name", "Jane"),
            ("email", "jane@example.com"),
            ("passengers", "2"),
            ("travel_date_from", "2025-03-01"),
            ("travel_date_to", ""),
            ("requests", "TG 659"),
        ]
        .into_iter()
        .collect();

        let value = serde_json::to_value(InquiryRecord::quick_booking(&fields, &service)).unwrap();
        assert_eq!(value["type"], json!("quick_booking"));
        assert_eq!(value["service_id"], json!("ultimate-escape"));
        assert_eq!(value["service_title"], json!(service.title));
        assert_eq!(value["passengers"], json!(2));
        assert_eq!(value["travel_date_from"], json!("2025-03-01"));
        assert_eq!(value["travel_date_to"], Value::Null);
    }

    #[test]
    fn quick_inquiry_has_no_subject() {
        let fields: FormFields = vec![("name", "Min"), ("email", "min@example.com"), ("passengers", "x")]
            .into_iter()
            .collect();
        let value = serde_json::to_value(InquiryRecord::quick_inquiry(&fields)).unwrap();
        assert_eq!(value["type"], json!("quick_inquiry"));
        assert_eq!(value["passengers"], Value::Null);
        assert!(value.get("service_id").is_none());
        assert!(value.get("service_title").is_none());
    }

    #[test]
    fn large_passenger_counts_stay_numeric_until_they_overflow() {
        let count = |raw: &str| {
            let fields: FormFields = vec![("name", "Min"), ("passengers", raw)].into_iter().collect();
            serde_json::to_value(InquiryRecord::quick_inquiry(&fields)).unwrap()["passengers"].clone()
        };
        assert_eq!(count("3000000000"), json!(3_000_000_000_u32));
        assert_eq!(count("99999999999"), Value::Null);
    }

    #[test]
    fn consultation_fills_defaults_and_derived_arrays() {
        let tr = Translator::new(Locale::En);
        let fields: FormFields = vec![
            ("name_passport", "KIM MINJI"),
            ("dob", "1990-04-12"),
            ("style_gastronomy", "on"),
            ("style_relaxation", "on"),
            ("accom_private_villa", "on"),
        ]
        .into_iter()
        .collect();

        let record = ConsultationRecord::from_fields(&fields, &consultation_groups(&tr));
        assert_eq!(record.get("food_allergies"), Some(&json!("no")));
        assert_eq!(record.get("bed_config"), Some(&json!("king")));
        assert_eq!(record.get("passport_number"), Some(&json!("")));
        assert_eq!(record.get("travel_styles"), Some(&json!(["Relaxation", "Gastronomy"])));
        assert_eq!(record.get("accommodation_types"), Some(&json!(["Private villa"])));
        assert_eq!(record.get("health_conditions"), Some(&json!([])));
        assert!(record.get("style_gastronomy").is_none());
    }

    #[test]
    fn date_range_ignores_garbage() {
        let range = DateRange::parse("2025-13-40", " 2025-01-02 ");
        assert_eq!(range.from, None);
        assert_eq!(range.to, NaiveDate::from_ymd_opt(2025, 1, 2));
    }
}
