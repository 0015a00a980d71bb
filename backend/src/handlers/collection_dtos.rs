use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::lead_models::{NewConsultation, NewContact, NewInquiry};

/// The named collections the site is allowed to write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Inquiries,
    Contacts,
    Consultations,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Inquiries => "inquiries",
            Collection::Contacts => "contacts",
            Collection::Consultations => "consultations",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inquiries" => Ok(Collection::Inquiries),
            "contacts" => Ok(Collection::Contacts),
            "consultations" => Ok(Collection::Consultations),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    QuickBooking,
    QuickInquiry,
}

impl InquiryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::QuickBooking => "quick_booking",
            InquiryType::QuickInquiry => "quick_inquiry",
        }
    }
}

// Request DTOs
#[derive(Deserialize, Debug)]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub passengers: Option<i64>,
    pub travel_date_from: Option<NaiveDate>,
    pub travel_date_to: Option<NaiveDate>,
    pub requests: Option<String>,
    #[serde(rename = "type")]
    pub inquiry_type: InquiryType,
    pub service_id: Option<String>,
    pub service_title: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn default_no() -> String {
    "no".to_string()
}

fn default_bed_config() -> String {
    "king".to_string()
}

#[derive(Deserialize, Debug)]
pub struct ConsultationRequest {
    pub name_passport: String,
    pub dob: String,
    pub nationality: String,
    #[serde(default)]
    pub passport_number: String,
    pub phone_kakaotalk: String,
    #[serde(default)]
    pub accompanying_travelers: String,
    #[serde(default)]
    pub preferred_consultation_date: String,
    #[serde(default)]
    pub health_special_attention: String,
    #[serde(default)]
    pub current_medications: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default = "default_no")]
    pub food_allergies: String,
    #[serde(default)]
    pub food_allergies_specify: String,
    #[serde(default = "default_no")]
    pub animal_allergies: String,
    #[serde(default)]
    pub animal_allergies_specify: String,
    #[serde(default)]
    pub preferred_diet: String,
    #[serde(default)]
    pub avoid_foods: String,
    #[serde(default)]
    pub alcohol: String,
    #[serde(default)]
    pub transport_ability: String,
    #[serde(default)]
    pub long_distance_pref: String,
    #[serde(default)]
    pub transport_discomfort: String,
    #[serde(default)]
    pub specific_activities: String,
    #[serde(default)]
    pub avoid_activities: String,
    #[serde(default)]
    pub special_anniversary: String,
    #[serde(default = "default_bed_config")]
    pub bed_config: String,
    #[serde(default)]
    pub additional_services: String,
    #[serde(default)]
    pub additional_requests: String,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default)]
    pub travel_styles: Vec<String>,
    #[serde(default)]
    pub accommodation_types: Vec<String>,
}

// Response DTOs
#[derive(Serialize, Debug)]
pub struct InsertResponse {
    pub id: i32,
    pub collection: String,
}

/// Blank form inputs arrive as empty strings; store them as NULL.
fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn labels_json(labels: &[String]) -> String {
    serde_json::to_string(labels).unwrap_or_else(|_| "[]".to_string())
}

impl InquiryRequest {
    pub fn into_new_inquiry(self, created_at: i64) -> NewInquiry {
        NewInquiry {
            name: self.name,
            email: self.email,
            passengers: self.passengers,
            travel_date_from: self.travel_date_from.map(|d| d.format("%Y-%m-%d").to_string()),
            travel_date_to: self.travel_date_to.map(|d| d.format("%Y-%m-%d").to_string()),
            requests: self.requests.and_then(non_empty),
            inquiry_type: self.inquiry_type.as_str().to_string(),
            service_id: self.service_id.and_then(non_empty),
            service_title: self.service_title.and_then(non_empty),
            created_at,
        }
    }
}

impl ContactRequest {
    pub fn into_new_contact(self, created_at: i64) -> NewContact {
        NewContact {
            name: self.name,
            email: self.email,
            message: self.message,
            created_at,
        }
    }
}

impl ConsultationRequest {
    pub fn into_new_consultation(self, created_at: i64) -> NewConsultation {
        NewConsultation {
            health_conditions: labels_json(&self.health_conditions),
            travel_styles: labels_json(&self.travel_styles),
            accommodation_types: labels_json(&self.accommodation_types),
            name_passport: self.name_passport,
            dob: self.dob,
            nationality: self.nationality,
            passport_number: non_empty(self.passport_number),
            phone_kakaotalk: self.phone_kakaotalk,
            accompanying_travelers: non_empty(self.accompanying_travelers),
            preferred_consultation_date: non_empty(self.preferred_consultation_date),
            health_special_attention: non_empty(self.health_special_attention),
            current_medications: non_empty(self.current_medications),
            emergency_contact: non_empty(self.emergency_contact),
            food_allergies: self.food_allergies,
            food_allergies_specify: non_empty(self.food_allergies_specify),
            animal_allergies: self.animal_allergies,
            animal_allergies_specify: non_empty(self.animal_allergies_specify),
            preferred_diet: non_empty(self.preferred_diet),
            avoid_foods: non_empty(self.avoid_foods),
            alcohol: non_empty(self.alcohol),
            transport_ability: non_empty(self.transport_ability),
            long_distance_pref: non_empty(self.long_distance_pref),
            transport_discomfort: non_empty(self.transport_discomfort),
            specific_activities: non_empty(self.specific_activities),
            avoid_activities: non_empty(self.avoid_activities),
            special_anniversary: non_empty(self.special_anniversary),
            bed_config: self.bed_config,
            additional_services: non_empty(self.additional_services),
            additional_requests: non_empty(self.additional_requests),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collection_names_are_a_closed_set() {
        assert_eq!("inquiries".parse::<Collection>(), Ok(Collection::Inquiries));
        assert_eq!("contacts".parse::<Collection>(), Ok(Collection::Contacts));
        assert_eq!("consultations".parse::<Collection>(), Ok(Collection::Consultations));
        assert_eq!("users".parse::<Collection>(), Err("users".to_string()));
        assert_eq!("Inquiries".parse::<Collection>(), Err("Inquiries".to_string()));
    }

    #[test]
    fn quick_booking_keeps_service_reference_and_dates() {
        let request: InquiryRequest = serde_json::from_value(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "passengers": 2,
            "travel_date_from": "2025-03-01",
            "travel_date_to": "2025-03-09",
            "requests": "",
            "type": "quick_booking",
            "service_id": "ultimate-escape",
            "service_title": "The Ultimate Escape"
        }))
        .unwrap();

        let new_inquiry = request.into_new_inquiry(1_700_000_000);
        assert_eq!(new_inquiry.inquiry_type, "quick_booking");
        assert_eq!(new_inquiry.service_id.as_deref(), Some("ultimate-escape"));
        assert_eq!(new_inquiry.travel_date_from.as_deref(), Some("2025-03-01"));
        assert_eq!(new_inquiry.travel_date_to.as_deref(), Some("2025-03-09"));
        assert_eq!(new_inquiry.requests, None);
        assert_eq!(new_inquiry.passengers, Some(2));
    }

    #[test]
    fn unknown_discriminator_is_rejected() {
        let result = serde_json::from_value::<InquiryRequest>(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "type": "newsletter"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn consultation_defaults_radio_groups_and_serializes_labels() {
        let request: ConsultationRequest = serde_json::from_value(json!({
            "name_passport": "KIM MINJI",
            "dob": "1990-04-12",
            "nationality": "Korean",
            "phone_kakaotalk": "+82 10 0000 0000",
            "health_conditions": ["Asthma"],
            "travel_styles": ["Relaxation", "Gastronomy"]
        }))
        .unwrap();

        let row = request.into_new_consultation(0);
        assert_eq!(row.food_allergies, "no");
        assert_eq!(row.animal_allergies, "no");
        assert_eq!(row.bed_config, "king");
        assert_eq!(row.health_conditions, r#"["Asthma"]"#);
        assert_eq!(row.travel_styles, r#"["Relaxation","Gastronomy"]"#);
        assert_eq!(row.accommodation_types, "[]");
        assert_eq!(row.passport_number, None);
    }
}
