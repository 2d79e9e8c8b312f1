use crate::{
    abstract_trait::DynCategoryRepository,
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    errors::{RepositoryError, ServiceError},
    model::Category,
};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct CategoryService {
    categories: DynCategoryRepository,
}

impl CategoryService {
    pub fn new(categories: DynCategoryRepository) -> Self {
        Self { categories }
    }

    pub async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, ServiceError> {
        let category = self.categories.create(req).await?;
        info!("✅ Category created with id {}", category.id);
        Ok(category)
    }

    pub async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Category>, ServiceError> {
        Ok(self.categories.find_all(limit).await?)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Category, ServiceError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, ServiceError> {
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(self.categories.update(id, req).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Category, ServiceError> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.categories.delete(id).await?;

        Ok(category)
    }

    pub async fn bulk_create(&self, reqs: &[CreateCategoryRequest]) -> Result<u64, ServiceError> {
        Ok(self.categories.create_many(reqs).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::CategoryRepositoryTrait;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryCategoryRepository {
        categories: Mutex<Vec<Category>>,
    }

    #[async_trait]
    impl CategoryRepositoryTrait for InMemoryCategoryRepository {
        async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Category>, RepositoryError> {
            let categories = self.categories.lock().unwrap();
            let take = limit.map(|l| l as usize).unwrap_or(categories.len());
            Ok(categories.iter().take(take).cloned().collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
            Ok(self
                .categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned())
        }

        async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError> {
            let mut categories = self.categories.lock().unwrap();
            if categories.iter().any(|c| c.name == req.name) {
                return Err(RepositoryError::UniqueViolation(
                    "categories_name_key".into(),
                ));
            }
            let category = Category {
                id: Uuid::new_v4(),
                name: req.name.clone(),
                description: req.description.clone(),
                created_at: None,
                updated_at: None,
            };
            categories.push(category.clone());
            Ok(category)
        }

        async fn create_many(
            &self,
            reqs: &[CreateCategoryRequest],
        ) -> Result<u64, RepositoryError> {
            let mut inserted = 0;
            for req in reqs {
                if self.create(req).await.is_ok() {
                    inserted += 1;
                }
            }
            Ok(inserted)
        }

        async fn update(
            &self,
            id: Uuid,
            req: &UpdateCategoryRequest,
        ) -> Result<Category, RepositoryError> {
            let mut categories = self.categories.lock().unwrap();
            let category = categories
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(RepositoryError::NotFound)?;
            if let Some(name) = &req.name {
                category.name = name.clone();
            }
            Ok(category.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
            self.categories.lock().unwrap().retain(|c| c.id != id);
            Ok(())
        }
    }

    fn service() -> (CategoryService, Arc<InMemoryCategoryRepository>) {
        let repo = Arc::new(InMemoryCategoryRepository::default());
        (CategoryService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found_without_side_effect() {
        let (service, repo) = service();
        service
            .create(&CreateCategoryRequest {
                name: "Succulents".into(),
                description: None,
            })
            .await
            .unwrap();

        let err = service.delete(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
        assert_eq!(repo.categories.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (service, _) = service();

        let err = service
            .update(
                Uuid::new_v4(),
                &UpdateCategoryRequest {
                    name: Some("Ferns".into()),
                    description: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_bulk_create_skips_duplicates() {
        let (service, repo) = service();
        let req = CreateCategoryRequest {
            name: "Succulents".into(),
            description: None,
        };

        let first = service.bulk_create(&[req.clone()]).await.unwrap();
        let second = service.bulk_create(&[req]).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 0);
        assert_eq!(repo.categories.lock().unwrap().len(), 1);
    }
}
