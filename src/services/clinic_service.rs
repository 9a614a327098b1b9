use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::{Clinic, CreateClinicRequest, UpdateClinicRequest};

pub struct ClinicService;

impl ClinicService {
    pub async fn create(pool: &PgPool, data: CreateClinicRequest) -> AppResult<Clinic> {
        let clinic = sqlx::query_as::<_, Clinic>(
            r#"
            INSERT INTO clinics (name, address, phone)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.phone)
        .fetch_one(pool)
        .await?;

        Ok(clinic)
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Clinic>> {
        let clinics = sqlx::query_as::<_, Clinic>("SELECT * FROM clinics ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(clinics)
    }

    pub async fn get_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Clinic>> {
        let clinic = sqlx::query_as::<_, Clinic>("SELECT * FROM clinics WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(clinic)
    }

    pub async fn update(pool: &PgPool, id: i64, data: UpdateClinicRequest) -> AppResult<Clinic> {
        let clinic = sqlx::query_as::<_, Clinic>(
            r#"
            UPDATE clinics
            SET name = COALESCE($2, name),
                address = COALESCE($3, address),
                phone = COALESCE($4, phone),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.phone)
        .fetch_one(pool)
        .await?;

        Ok(clinic)
    }

    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clinics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound.into());
        }

        Ok(())
    }
}
