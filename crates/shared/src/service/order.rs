use crate::{
    abstract_trait::{DynOrderRepository, DynUserRepository},
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    errors::{RepositoryError, ServiceError},
    model::Order,
};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderService {
    orders: DynOrderRepository,
    users: DynUserRepository,
}

impl OrderService {
    pub fn new(orders: DynOrderRepository, users: DynUserRepository) -> Self {
        Self { orders, users }
    }

    pub async fn create(&self, req: &CreateOrderRequest) -> Result<Order, ServiceError> {
        if self.users.find_by_id(req.user_id).await?.is_none() {
            return Err(RepositoryError::ForeignKeyViolation(format!(
                "user {} does not exist",
                req.user_id
            ))
            .into());
        }

        let order = self.orders.create(req).await?;
        info!("✅ Order created with id {}", order.id);
        Ok(order)
    }

    pub async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Order>, ServiceError> {
        Ok(self.orders.find_all(limit).await?)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Order, ServiceError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound.into())
    }

    pub async fn update(&self, id: Uuid, req: &UpdateOrderRequest) -> Result<Order, ServiceError> {
        if self.orders.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(self.orders.update(id, req).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Order, ServiceError> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.orders.delete(id).await?;

        Ok(order)
    }

    pub async fn bulk_create(&self, reqs: &[CreateOrderRequest]) -> Result<u64, ServiceError> {
        Ok(self.orders.create_many(reqs).await?)
    }
}
