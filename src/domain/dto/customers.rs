use chrono::Utc;
use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::dto::common::to_utc;
use crate::domain::entities::{Customer, Record};
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::validate_required_string;

/// 고객 등록 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 30, message = "phone_number must be 1-30 characters"))]
    pub phone_number: String,
}

impl CreateCustomerRequest {
    pub fn into_entity(self) -> AppResult<Customer> {
        let now = DateTime::now();
        Ok(Customer {
            id: None,
            name: validate_required_string(&self.name, "name")?,
            email: self.email.trim().to_lowercase(),
            phone_number: validate_required_string(&self.phone_number, "phone_number")?,
            created_at: now,
            updated_at: now,
        })
    }
}

/// 고객 수정 요청
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UpdateCustomerRequest {
    pub fn into_changes(self) -> AppResult<Document> {
        let mut changes = Document::new();

        if let Some(name) = self.name {
            changes.insert("name", validate_required_string(&name, "name")?);
        }
        if let Some(email) = self.email {
            changes.insert("email", email.trim().to_lowercase());
        }
        if let Some(phone_number) = self.phone_number {
            changes.insert("phone_number", validate_required_string(&phone_number, "phone_number")?);
        }

        if changes.is_empty() {
            return Err(AppError::ValidationError("no fields to update".to_string()));
        }
        Ok(changes)
    }
}

/// 고객 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id_string(),
            name: customer.name,
            email: customer.email,
            phone_number: customer.phone_number,
            created_at: to_utc(customer.created_at),
            updated_at: to_utc(customer.updated_at),
        }
    }
}
