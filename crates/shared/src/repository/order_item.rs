use crate::{
    abstract_trait::OrderItemRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderItemRequest, UpdateOrderItemRequest},
    errors::RepositoryError,
    model::OrderItem,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

pub struct OrderItemRepository {
    db: ConnectionPool,
}

impl OrderItemRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderItemRepositoryTrait for OrderItemRepository {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT * FROM order_items ORDER BY created_at DESC LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<OrderItem>, RepositoryError> {
        let item = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT * FROM order_items WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn create(&self, req: &CreateOrderItemRequest) -> Result<OrderItem, RepositoryError> {
        let item = sqlx::query_as::<_, OrderItem>(
            r#"
            INSERT INTO order_items (order_id, plant_id, quantity, price)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(req.order_id)
        .bind(req.plant_id)
        .bind(req.quantity)
        .bind(req.price)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn create_many(
        &self,
        reqs: &[CreateOrderItemRequest],
    ) -> Result<u64, RepositoryError> {
        if reqs.is_empty() {
            return Ok(0);
        }

        let mut builder =
            QueryBuilder::new("INSERT INTO order_items (order_id, plant_id, quantity, price) ");
        builder.push_values(reqs, |mut row, req| {
            row.push_bind(req.order_id)
                .push_bind(req.plant_id)
                .push_bind(req.quantity)
                .push_bind(req.price);
        });
        builder.push(" ON CONFLICT DO NOTHING");

        let result = builder
            .build()
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected())
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateOrderItemRequest,
    ) -> Result<OrderItem, RepositoryError> {
        let item = sqlx::query_as::<_, OrderItem>(
            r#"
            UPDATE order_items
            SET quantity = COALESCE($2, quantity),
                price = COALESCE($3, price)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.quantity)
        .bind(req.price)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM order_items WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
