use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::StorageError;
use business::domain::suggestion::model::SuggestionEntry;
use business::domain::suggestion::repository::SuggestionRepository;

use super::entity::SuggestionEntity;

pub struct SuggestionRepositoryPostgres {
    pool: PgPool,
}

impl SuggestionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SuggestionRepository for SuggestionRepositoryPostgres {
    async fn load(&self) -> Result<Option<Vec<SuggestionEntry>>, StorageError> {
        // first_seen order restores the per-language insertion order the
        // store uses as its tie-break.
        let entities = sqlx::query_as::<_, SuggestionEntity>(
            "SELECT language, normalized, text, count, first_seen FROM suggestions \
             ORDER BY first_seen ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| StorageError::Unavailable)?;

        if entities.is_empty() {
            return Ok(None);
        }

        let entries = entities
            .into_iter()
            .map(|entity| entity.into_domain())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(entries))
    }

    async fn save(&self, entries: &[SuggestionEntry]) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| StorageError::Unavailable)?;

        sqlx::query("DELETE FROM suggestions")
            .execute(&mut *tx)
            .await
            .map_err(|_| StorageError::Unavailable)?;

        for entry in entries {
            let entity = SuggestionEntity::from_domain(entry);
            sqlx::query(
                "INSERT INTO suggestions (language, normalized, text, count, first_seen) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&entity.language)
            .bind(&entity.normalized)
            .bind(&entity.text)
            .bind(entity.count)
            .bind(entity.first_seen)
            .execute(&mut *tx)
            .await
            .map_err(|_| StorageError::Unavailable)?;
        }

        tx.commit().await.map_err(|_| StorageError::Unavailable)?;
        Ok(())
    }
}
