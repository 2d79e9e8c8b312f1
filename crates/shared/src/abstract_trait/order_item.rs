use crate::{
    domain::requests::{CreateOrderItemRequest, UpdateOrderItemRequest},
    errors::RepositoryError,
    model::OrderItem,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderItemRepository = Arc<dyn OrderItemRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemRepositoryTrait {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<OrderItem>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<OrderItem>, RepositoryError>;
    async fn create(&self, req: &CreateOrderItemRequest) -> Result<OrderItem, RepositoryError>;
    async fn create_many(&self, reqs: &[CreateOrderItemRequest])
    -> Result<u64, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateOrderItemRequest,
    ) -> Result<OrderItem, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
