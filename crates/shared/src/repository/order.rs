use crate::{
    abstract_trait::OrderRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    errors::RepositoryError,
    model::Order,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

const DEFAULT_STATUS: &str = "pending";

pub struct OrderRepository {
    db: ConnectionPool,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT * FROM orders ORDER BY created_at DESC LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT * FROM orders WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn create(&self, req: &CreateOrderRequest) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (user_id, total_amount, status, shipping_address, billing_address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(req.user_id)
        .bind(req.total_amount)
        .bind(req.status.as_deref().unwrap_or(DEFAULT_STATUS))
        .bind(&req.shipping_address)
        .bind(&req.billing_address)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn create_many(&self, reqs: &[CreateOrderRequest]) -> Result<u64, RepositoryError> {
        if reqs.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::new(
            "INSERT INTO orders (user_id, total_amount, status, shipping_address, billing_address) ",
        );
        builder.push_values(reqs, |mut row, req| {
            row.push_bind(req.user_id)
                .push_bind(req.total_amount)
                .push_bind(req.status.as_deref().unwrap_or(DEFAULT_STATUS))
                .push_bind(&req.shipping_address)
                .push_bind(&req.billing_address);
        });
        builder.push(" ON CONFLICT DO NOTHING");

        let result = builder
            .build()
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: Uuid, req: &UpdateOrderRequest) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET total_amount = COALESCE($2, total_amount),
                status = COALESCE($3, status),
                shipping_address = COALESCE($4, shipping_address),
                billing_address = COALESCE($5, billing_address),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.total_amount)
        .bind(&req.status)
        .bind(&req.shipping_address)
        .bind(&req.billing_address)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM orders WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
