use crate::{
    abstract_trait::PlantRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{NewPlant, UpdatePlantRequest},
    errors::RepositoryError,
    model::Plant,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

pub struct PlantRepository {
    db: ConnectionPool,
}

impl PlantRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlantRepositoryTrait for PlantRepository {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Plant>, RepositoryError> {
        // LIMIT NULL is LIMIT ALL in Postgres
        let plants = sqlx::query_as::<_, Plant>(
            r#"
            SELECT * FROM plants ORDER BY created_at DESC LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(plants)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Plant>, RepositoryError> {
        let plant = sqlx::query_as::<_, Plant>(
            r#"
            SELECT * FROM plants WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(plant)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Plant>, RepositoryError> {
        let plant = sqlx::query_as::<_, Plant>(
            r#"
            SELECT * FROM plants WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(plant)
    }

    async fn create(&self, plant: &NewPlant) -> Result<Plant, RepositoryError> {
        let plant = sqlx::query_as::<_, Plant>(
            r#"
            INSERT INTO plants (name, slug, description, price, stock, category_id, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&plant.name)
        .bind(&plant.slug)
        .bind(&plant.description)
        .bind(plant.price)
        .bind(plant.stock)
        .bind(plant.category_id)
        .bind(&plant.image_url)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(plant)
    }

    async fn create_many(&self, plants: &[NewPlant]) -> Result<u64, RepositoryError> {
        if plants.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::new(
            "INSERT INTO plants (name, slug, description, price, stock, category_id, image_url) ",
        );
        builder.push_values(plants, |mut row, plant| {
            row.push_bind(&plant.name)
                .push_bind(&plant.slug)
                .push_bind(&plant.description)
                .push_bind(plant.price)
                .push_bind(plant.stock)
                .push_bind(plant.category_id)
                .push_bind(&plant.image_url);
        });
        builder.push(" ON CONFLICT DO NOTHING");

        let result = builder
            .build()
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: Uuid, req: &UpdatePlantRequest) -> Result<Plant, RepositoryError> {
        let plant = sqlx::query_as::<_, Plant>(
            r#"
            UPDATE plants
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                stock = COALESCE($5, stock),
                category_id = COALESCE($6, category_id),
                image_url = COALESCE($7, image_url),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.stock)
        .bind(req.category_id)
        .bind(&req.image_url)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(plant)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM plants WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
