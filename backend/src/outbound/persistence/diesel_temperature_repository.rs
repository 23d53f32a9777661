//! PostgreSQL-backed `TemperatureRepository` implementation using Diesel ORM.
//!
//! Listings join `cities` so that coordinate and country filters can be
//! expressed against the reading's city. Filters are appended to a boxed
//! query only when present.
//!
//! Client timestamp text (the reading's timestamp and range bounds) is bound
//! as `TEXT` and cast by the server, so PostgreSQL's date input rules decide
//! what is accepted (`2024/12/31`, `Jan 1 2024`, `today`) and what is
//! rejected (`2024-13-01`, year zero).

use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Text, Timestamp};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, TemperatureRepository};
use crate::domain::{
    TemperatureChange, TemperatureDraft, TemperatureFilter, TemperatureId, TemperatureReading,
    TemperatureScope,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{TemperatureRow, TemperatureUpdate};
use super::pool::DbPool;
use super::schema::{cities, temperatures};

/// Diesel-backed implementation of the `TemperatureRepository` port.
#[derive(Clone)]
pub struct DieselTemperatureRepository {
    pool: DbPool,
}

impl DieselTemperatureRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// `CAST($1 AS timestamp)` over client text.
macro_rules! timestamp_text {
    ($raw:expr) => {
        sql::<Timestamp>("CAST(")
            .bind::<Text, _>(String::from($raw))
            .sql(" AS timestamp)")
    };
}

#[async_trait]
impl TemperatureRepository for DieselTemperatureRepository {
    async fn insert(&self, draft: &TemperatureDraft) -> Result<TemperatureId, RepositoryError> {
        let city_id = temperatures::city_id.eq(draft.city_id.as_i32());
        let value = temperatures::value.eq(draft.value);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted = match draft.recorded_on.as_deref() {
            Some(raw) => {
                diesel::insert_into(temperatures::table)
                    .values((
                        city_id,
                        value,
                        temperatures::recorded_at.eq(timestamp_text!(raw)),
                    ))
                    .returning(temperatures::id)
                    .get_result::<i32>(&mut conn)
                    .await
            }
            None => {
                diesel::insert_into(temperatures::table)
                    .values((city_id, value))
                    .returning(temperatures::id)
                    .get_result::<i32>(&mut conn)
                    .await
            }
        };

        inserted.map(TemperatureId::new).map_err(map_diesel_error)
    }

    async fn list(
        &self,
        filter: &TemperatureFilter,
    ) -> Result<Vec<TemperatureReading>, RepositoryError> {
        let mut query = temperatures::table
            .inner_join(cities::table)
            .select(TemperatureRow::as_select())
            .order_by(temperatures::id.asc())
            .into_boxed();

        match filter.scope {
            TemperatureScope::All => {}
            TemperatureScope::City(city_id) => {
                query = query.filter(temperatures::city_id.eq(city_id.as_i32()));
            }
            TemperatureScope::Country(country_id) => {
                query = query.filter(cities::country_id.eq(country_id.as_i32()));
            }
        }
        if let Some(from) = filter.range.from.as_deref() {
            query = query.filter(temperatures::recorded_at.ge(timestamp_text!(from)));
        }
        if let Some(until) = filter.range.until.as_deref() {
            query = query.filter(temperatures::recorded_at.le(timestamp_text!(until)));
        }
        if let Some(latitude) = filter.latitude {
            query = query.filter(cities::latitude.eq(latitude));
        }
        if let Some(longitude) = filter.longitude {
            query = query.filter(cities::longitude.eq(longitude));
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TemperatureRow> = query
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(TemperatureReading::from).collect())
    }

    async fn exists(&self, id: TemperatureId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            temperatures::table.filter(temperatures::id.eq(id.as_i32())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        id: TemperatureId,
        change: TemperatureChange,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = TemperatureUpdate {
            city_id: change.city_id.as_i32(),
            value: change.value,
        };

        diesel::update(temperatures::table.find(id.as_i32()))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: TemperatureId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(temperatures::table.find(id.as_i32()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
