use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::Clinic;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Veterinarian {
    pub id: i64,
    pub name: String,
    pub crmv: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub clinic_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read view with the clinic relation eagerly expanded.
#[derive(Debug, Serialize, ToSchema)]
pub struct VeterinarianResponse {
    pub id: i64,
    pub name: String,
    pub crmv: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub clinic: Option<Clinic>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VeterinarianResponse {
    pub fn from_parts(vet: Veterinarian, clinic: Option<Clinic>) -> Self {
        Self {
            id: vet.id,
            name: vet.name,
            crmv: vet.crmv,
            email: vet.email,
            phone: vet.phone,
            specialty: vet.specialty,
            clinic,
            created_at: vet.created_at,
            updated_at: vet.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVeterinarianRequest {
    pub name: String,
    pub crmv: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub clinic_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVeterinarianRequest {
    pub name: Option<String>,
    pub crmv: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub clinic_id: Option<i64>,
}
