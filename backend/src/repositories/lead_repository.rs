use diesel::prelude::*;
use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::{
    models::lead_models::{
        Consultation, Contact, Inquiry, NewConsultation, NewContact, NewInquiry,
    },
    schema::{consultations, contacts, inquiries},
    DbPool,
};

#[derive(Error, Debug)]
pub enum LeadStoreError {
    #[error("Failed to get DB connection: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("Database error: {0}")]
    Query(#[from] DieselError),
}

/// Write-once storage for everything the site's forms submit.
pub struct LeadRepository {
    pool: DbPool,
}

impl LeadRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create_inquiry(&self, new_inquiry: &NewInquiry) -> Result<i32, LeadStoreError> {
        let mut conn = self.pool.get()?;
        let id = diesel::insert_into(inquiries::table)
            .values(new_inquiry)
            .returning(inquiries::id)
            .get_result::<i32>(&mut conn)?;
        Ok(id)
    }

    pub fn create_contact(&self, new_contact: &NewContact) -> Result<i32, LeadStoreError> {
        let mut conn = self.pool.get()?;
        let id = diesel::insert_into(contacts::table)
            .values(new_contact)
            .returning(contacts::id)
            .get_result::<i32>(&mut conn)?;
        Ok(id)
    }

    pub fn create_consultation(&self, new_consultation: &NewConsultation) -> Result<i32, LeadStoreError> {
        let mut conn = self.pool.get()?;
        let id = diesel::insert_into(consultations::table)
            .values(new_consultation)
            .returning(consultations::id)
            .get_result::<i32>(&mut conn)?;
        Ok(id)
    }

    pub fn find_inquiry(&self, inquiry_id: i32) -> Result<Option<Inquiry>, LeadStoreError> {
        let mut conn = self.pool.get()?;
        let inquiry = inquiries::table
            .find(inquiry_id)
            .select(Inquiry::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(inquiry)
    }

    pub fn find_contact(&self, contact_id: i32) -> Result<Option<Contact>, LeadStoreError> {
        let mut conn = self.pool.get()?;
        let contact = contacts::table
            .find(contact_id)
            .select(Contact::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(contact)
    }

    pub fn find_consultation(&self, consultation_id: i32) -> Result<Option<Consultation>, LeadStoreError> {
        let mut conn = self.pool.get()?;
        let consultation = consultations::table
            .find(consultation_id)
            .select(Consultation::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(consultation)
    }

    /// Row counts as (inquiries, contacts, consultations).
    pub fn counts(&self) -> Result<(i64, i64, i64), LeadStoreError> {
        let mut conn = self.pool.get()?;
        let inquiry_count = inquiries::table.count().get_result::<i64>(&mut conn)?;
        let contact_count = contacts::table.count().get_result::<i64>(&mut conn)?;
        let consultation_count = consultations::table.count().get_result::<i64>(&mut conn)?;
        Ok((inquiry_count, contact_count, consultation_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> LeadRepository {
        LeadRepository::new(crate::test_pool())
    }

    #[test]
    fn inquiry_is_written_once_and_readable() {
        let repo = repository();
        let id = repo
            .create_inquiry(&NewInquiry {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                passengers: Some(2),
                travel_date_from: Some("2025-03-01".to_string()),
                travel_date_to: None,
                requests: None,
                inquiry_type: "quick_booking".to_string(),
                service_id: Some("ultimate-escape".to_string()),
                service_title: Some("The Ultimate Escape".to_string()),
                created_at: 10,
            })
            .unwrap();

        let stored = repo.find_inquiry(id).unwrap().expect("inquiry stored");
        assert_eq!(stored.email, "jane@example.com");
        assert_eq!(stored.inquiry_type, "quick_booking");
        assert_eq!(stored.travel_date_to, None);
        assert_eq!(repo.counts().unwrap(), (1, 0, 0));
    }

    #[test]
    fn contact_ids_increase() {
        let repo = repository();
        let contact = |name: &str| NewContact {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            message: "Hello".to_string(),
            created_at: 0,
        };
        let first = repo.create_contact(&contact("a")).unwrap();
        let second = repo.create_contact(&contact("b")).unwrap();
        assert!(second > first);
        assert_eq!(repo.find_contact(second).unwrap().unwrap().name, "b");
        assert_eq!(repo.counts().unwrap(), (0, 2, 0));
    }

    #[test]
    fn missing_rows_are_none() {
        let repo = repository();
        assert!(repo.find_consultation(42).unwrap().is_none());
    }
}
