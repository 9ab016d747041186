//! TraitStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;

use crate::traits::TraitStore;

const TRAIT_COLUMNS: &str = "persona_id, about, core_expertise, communication_style, traits, \
                             pain_points, key_responsibilities, timestamp";

#[async_trait]
impl TraitStore for PgStorage {
    async fn upsert_persona_traits(&self, doc: &PersonaTrait) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO persona_traits ({TRAIT_COLUMNS})
             VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
             ON CONFLICT (persona_id) DO UPDATE SET
               about = EXCLUDED.about,
               core_expertise = EXCLUDED.core_expertise,
               communication_style = EXCLUDED.communication_style,
               traits = EXCLUDED.traits,
               pain_points = EXCLUDED.pain_points,
               key_responsibilities = EXCLUDED.key_responsibilities,
               timestamp = EXCLUDED.timestamp"
        ))
        .bind(&doc.persona_id)
        .bind(&doc.about)
        .bind(serde_json::to_value(&doc.core_expertise)?)
        .bind(&doc.communication_style)
        .bind(serde_json::to_value(&doc.traits)?)
        .bind(serde_json::to_value(&doc.pain_points)?)
        .bind(serde_json::to_value(&doc.key_responsibilities)?)
        .bind(doc.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_persona_traits(
        &self,
        persona_id: &str,
    ) -> Result<Option<PersonaTrait>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {TRAIT_COLUMNS} FROM persona_traits WHERE persona_id = $1"
        ))
        .bind(persona_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_persona_trait(&r)).transpose()
    }

    async fn list_persona_traits(&self) -> Result<Vec<PersonaTrait>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {TRAIT_COLUMNS} FROM persona_traits ORDER BY persona_id"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_persona_trait).collect()
    }

    async fn replace_flat_traits(&self, traits: &[FlatTrait]) -> Result<usize, StorageError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM flat_traits").execute(&mut *tx).await?;
        for (position, t) in traits.iter().enumerate() {
            sqlx::query(
                "INSERT INTO flat_traits (id, position, title, category, description)
                 VALUES ($1,$2,$3,$4,$5)",
            )
            .bind(uuid::Uuid::new_v4().to_string())
            .bind(i32::try_from(position).unwrap_or(i32::MAX))
            .bind(&t.title)
            .bind(&t.category)
            .bind(&t.description)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        tracing::info!(count = traits.len(), "flat traits replaced");
        Ok(traits.len())
    }

    async fn list_flat_traits(&self) -> Result<Vec<FlatTrait>, StorageError> {
        let rows = sqlx::query(
            "SELECT title, category, description FROM flat_traits ORDER BY position",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_flat_trait).collect()
    }

    async fn upsert_persona_profile(
        &self,
        persona_id: &str,
        traits: &[FlatTrait],
    ) -> Result<bool, StorageError> {
        let row = sqlx::query(
            "INSERT INTO persona_profiles (persona_id, traits, updated_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (persona_id) DO UPDATE SET
               traits = EXCLUDED.traits,
               updated_at = EXCLUDED.updated_at
             RETURNING (xmax = 0) AS inserted",
        )
        .bind(persona_id)
        .bind(serde_json::to_value(traits)?)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        let inserted: bool = row.try_get("inserted")?;
        Ok(inserted)
    }

    async fn get_persona_profile(
        &self,
        persona_id: &str,
    ) -> Result<Option<Vec<FlatTrait>>, StorageError> {
        let row = sqlx::query("SELECT traits FROM persona_profiles WHERE persona_id = $1")
            .bind(persona_id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| {
            let traits: serde_json::Value = r.try_get("traits")?;
            Ok(serde_json::from_value(traits)?)
        })
        .transpose()
    }
}
