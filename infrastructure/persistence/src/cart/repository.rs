use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::StorageError;

use super::entity::CartItemEntity;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            "SELECT wine_id, wine, quantity, added_at, position FROM cart_items ORDER BY position ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| StorageError::Unavailable)?;

        if entities.is_empty() {
            return Ok(None);
        }

        let items = entities
            .into_iter()
            .map(|entity| entity.into_domain())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(items))
    }

    async fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| StorageError::Unavailable)?;

        sqlx::query("DELETE FROM cart_items")
            .execute(&mut *tx)
            .await
            .map_err(|_| StorageError::Unavailable)?;

        for (position, item) in items.iter().enumerate() {
            let entity = CartItemEntity::from_domain(item, position as i32)?;
            sqlx::query(
                "INSERT INTO cart_items (wine_id, wine, quantity, added_at, position) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&entity.wine_id)
            .bind(&entity.wine)
            .bind(entity.quantity)
            .bind(entity.added_at)
            .bind(entity.position)
            .execute(&mut *tx)
            .await
            .map_err(|_| StorageError::Unavailable)?;
        }

        tx.commit().await.map_err(|_| StorageError::Unavailable)?;
        Ok(())
    }
}
