use crate::{
    abstract_trait::DynOrderItemRepository,
    domain::requests::{CreateOrderItemRequest, UpdateOrderItemRequest},
    errors::{RepositoryError, ServiceError},
    model::OrderItem,
};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderItemService {
    order_items: DynOrderItemRepository,
}

impl OrderItemService {
    pub fn new(order_items: DynOrderItemRepository) -> Self {
        Self { order_items }
    }

    /// Unknown order/plant ids surface as foreign-key violations from the
    /// store and map to a 400 upstream.
    pub async fn create(&self, req: &CreateOrderItemRequest) -> Result<OrderItem, ServiceError> {
        let item = self.order_items.create(req).await?;
        info!("✅ Order item created with id {}", item.id);
        Ok(item)
    }

    pub async fn find_all(&self, limit: Option<i64>) -> Result<Vec<OrderItem>, ServiceError> {
        Ok(self.order_items.find_all(limit).await?)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<OrderItem, ServiceError> {
        self.order_items
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateOrderItemRequest,
    ) -> Result<OrderItem, ServiceError> {
        if self.order_items.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(self.order_items.update(id, req).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<OrderItem, ServiceError> {
        let item = self
            .order_items
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.order_items.delete(id).await?;

        Ok(item)
    }

    pub async fn bulk_create(
        &self,
        reqs: &[CreateOrderItemRequest],
    ) -> Result<u64, ServiceError> {
        Ok(self.order_items.create_many(reqs).await?)
    }
}
