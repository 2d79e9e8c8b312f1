use crate::{
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    errors::RepositoryError,
    model::Order,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderRepositoryTrait {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError>;
    async fn create(&self, req: &CreateOrderRequest) -> Result<Order, RepositoryError>;
    async fn create_many(&self, reqs: &[CreateOrderRequest]) -> Result<u64, RepositoryError>;
    async fn update(&self, id: Uuid, req: &UpdateOrderRequest) -> Result<Order, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
