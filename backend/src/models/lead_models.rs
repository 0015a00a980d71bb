use diesel::prelude::*;
use crate::schema::inquiries;
use crate::schema::contacts;
use crate::schema::consultations;

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = inquiries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Inquiry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub passengers: Option<i64>,
    pub travel_date_from: Option<String>, // YYYY-MM-DD
    pub travel_date_to: Option<String>,
    pub requests: Option<String>,
    pub inquiry_type: String, // "quick_booking" or "quick_inquiry"
    pub service_id: Option<String>, // only set for bookings made from a service card
    pub service_title: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = inquiries)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub passengers: Option<i64>,
    pub travel_date_from: Option<String>,
    pub travel_date_to: Option<String>,
    pub requests: Option<String>,
    pub inquiry_type: String,
    pub service_id: Option<String>,
    pub service_title: Option<String>,
    pub created_at: i64,
}

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = contacts)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: i64,
}

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = consultations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Consultation {
    pub id: i32,
    pub name_passport: String,
    pub dob: String,
    pub nationality: String,
    pub passport_number: Option<String>,
    pub phone_kakaotalk: String,
    pub accompanying_travelers: Option<String>,
    pub preferred_consultation_date: Option<String>,
    pub health_special_attention: Option<String>,
    pub current_medications: Option<String>,
    pub emergency_contact: Option<String>,
    pub food_allergies: String, // "yes" / "no"
    pub food_allergies_specify: Option<String>,
    pub animal_allergies: String,
    pub animal_allergies_specify: Option<String>,
    pub preferred_diet: Option<String>,
    pub avoid_foods: Option<String>,
    pub alcohol: Option<String>,
    pub transport_ability: Option<String>,
    pub long_distance_pref: Option<String>,
    pub transport_discomfort: Option<String>,
    pub specific_activities: Option<String>,
    pub avoid_activities: Option<String>,
    pub special_anniversary: Option<String>,
    pub bed_config: String,
    pub additional_services: Option<String>,
    pub additional_requests: Option<String>,
    pub health_conditions: String, // json array of labels
    pub travel_styles: String, // json array of labels
    pub accommodation_types: String, // json array of labels
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = consultations)]
pub struct NewConsultation {
    pub name_passport: String,
    pub dob: String,
    pub nationality: String,
    pub passport_number: Option<String>,
    pub phone_kakaotalk: String,
    pub accompanying_travelers: Option<String>,
    pub preferred_consultation_date: Option<String>,
    pub health_special_attention: Option<String>,
    pub current_medications: Option<String>,
    pub emergency_contact: Option<String>,
    pub food_allergies: String,
    pub food_allergies_specify: Option<String>,
    pub animal_allergies: String,
    pub animal_allergies_specify: Option<String>,
    pub preferred_diet: Option<String>,
    pub avoid_foods: Option<String>,
    pub alcohol: Option<String>,
    pub transport_ability: Option<String>,
    pub long_distance_pref: Option<String>,
    pub transport_discomfort: Option<String>,
    pub specific_activities: Option<String>,
    pub avoid_activities: Option<String>,
    pub special_anniversary: Option<String>,
    pub bed_config: String,
    pub additional_services: Option<String>,
    pub additional_requests: Option<String>,
    pub health_conditions: String,
    pub travel_styles: String,
    pub accommodation_types: String,
    pub created_at: i64,
}
