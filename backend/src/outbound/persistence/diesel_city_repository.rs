//! PostgreSQL-backed `CityRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CityRepository, RepositoryError};
use crate::domain::{City, CityDraft, CityId, CountryId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CityRow, CityValues};
use super::pool::DbPool;
use super::schema::cities;

/// Diesel-backed implementation of the `CityRepository` port.
#[derive(Clone)]
pub struct DieselCityRepository {
    pool: DbPool,
}

impl DieselCityRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for DieselCityRepository {
    async fn insert(&self, draft: &CityDraft) -> Result<CityId, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let values = CityValues::from(draft);

        diesel::insert_into(cities::table)
            .values(&values)
            .returning(cities::id)
            .get_result::<i32>(&mut conn)
            .await
            .map(CityId::new)
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<City>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CityRow> = cities::table
            .select(CityRow::as_select())
            .order_by(cities::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(City::from).collect())
    }

    async fn list_by_country(&self, country_id: CountryId) -> Result<Vec<City>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CityRow> = cities::table
            .filter(cities::country_id.eq(country_id.as_i32()))
            .select(CityRow::as_select())
            .order_by(cities::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(City::from).collect())
    }

    async fn exists(&self, id: CityId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            cities::table.filter(cities::id.eq(id.as_i32())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn update(&self, id: CityId, draft: &CityDraft) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let values = CityValues::from(draft);

        diesel::update(cities::table.find(id.as_i32()))
            .set(&values)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: CityId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(cities::table.find(id.as_i32()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
