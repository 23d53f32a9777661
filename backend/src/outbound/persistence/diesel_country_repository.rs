//! PostgreSQL-backed `CountryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CountryRepository, RepositoryError};
use crate::domain::{Country, CountryDraft, CountryId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CountryRow, CountryValues};
use super::pool::DbPool;
use super::schema::countries;

/// Diesel-backed implementation of the `CountryRepository` port.
#[derive(Clone)]
pub struct DieselCountryRepository {
    pool: DbPool,
}

impl DieselCountryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for DieselCountryRepository {
    async fn insert(&self, draft: &CountryDraft) -> Result<CountryId, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let values = CountryValues::from(draft);

        diesel::insert_into(countries::table)
            .values(&values)
            .returning(countries::id)
            .get_result::<i32>(&mut conn)
            .await
            .map(CountryId::new)
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Country>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CountryRow> = countries::table
            .select(CountryRow::as_select())
            .order_by(countries::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Country::from).collect())
    }

    async fn exists(&self, id: CountryId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            countries::table.filter(countries::id.eq(id.as_i32())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn update(&self, id: CountryId, draft: &CountryDraft) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let values = CountryValues::from(draft);

        diesel::update(countries::table.find(id.as_i32()))
            .set(&values)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: CountryId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(countries::table.find(id.as_i32()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
