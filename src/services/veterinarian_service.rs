use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::{
    Clinic, CreateVeterinarianRequest, UpdateVeterinarianRequest, Veterinarian,
    VeterinarianResponse,
};

pub struct VeterinarianService;

impl VeterinarianService {
    pub async fn create(
        pool: &PgPool,
        data: CreateVeterinarianRequest,
    ) -> AppResult<Veterinarian> {
        let vet = sqlx::query_as::<_, Veterinarian>(
            r#"
            INSERT INTO veterinarians (name, crmv, email, phone, specialty, clinic_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.crmv)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.specialty)
        .bind(data.clinic_id)
        .fetch_one(pool)
        .await?;

        Ok(vet)
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<VeterinarianResponse>> {
        let vets = sqlx::query_as::<_, Veterinarian>(
            "SELECT * FROM veterinarians ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        let mut response = Vec::with_capacity(vets.len());
        for vet in vets {
            let clinic = Self::expand_clinic(pool, vet.clinic_id).await?;
            response.push(VeterinarianResponse::from_parts(vet, clinic));
        }

        Ok(response)
    }

    /// Not-found is `None` here; translating that into an error is the
    /// controller's call.
    pub async fn get_by_id(pool: &PgPool, id: i64) -> AppResult<Option<VeterinarianResponse>> {
        let vet = sqlx::query_as::<_, Veterinarian>("SELECT * FROM veterinarians WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match vet {
            Some(vet) => {
                let clinic = Self::expand_clinic(pool, vet.clinic_id).await?;
                Ok(Some(VeterinarianResponse::from_parts(vet, clinic)))
            }
            None => Ok(None),
        }
    }

    /// Partial update; a missing row surfaces as `sqlx::Error::RowNotFound`.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        data: UpdateVeterinarianRequest,
    ) -> AppResult<Veterinarian> {
        let vet = sqlx::query_as::<_, Veterinarian>(
            r#"
            UPDATE veterinarians
            SET name = COALESCE($2, name),
                crmv = COALESCE($3, crmv),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                specialty = COALESCE($6, specialty),
                clinic_id = COALESCE($7, clinic_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.crmv)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.specialty)
        .bind(data.clinic_id)
        .fetch_one(pool)
        .await?;

        Ok(vet)
    }

    /// Deleting an absent row surfaces as `sqlx::Error::RowNotFound`, the
    /// same store-level failure an update on a missing id produces.
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM veterinarians WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound.into());
        }

        Ok(())
    }

    async fn expand_clinic(pool: &PgPool, clinic_id: Option<i64>) -> AppResult<Option<Clinic>> {
        let Some(clinic_id) = clinic_id else {
            return Ok(None);
        };

        let clinic = sqlx::query_as::<_, Clinic>("SELECT * FROM clinics WHERE id = $1")
            .bind(clinic_id)
            .fetch_optional(pool)
            .await?;

        Ok(clinic)
    }
}
