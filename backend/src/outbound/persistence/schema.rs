//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Countries, unique by name.
    countries (id) {
        id -> Int4,
        #[max_length = 255]
        name -> Varchar,
        latitude -> Float8,
        longitude -> Float8,
    }
}

diesel::table! {
    /// Cities, unique by name within their country.
    cities (id) {
        id -> Int4,
        country_id -> Int4,
        #[max_length = 255]
        name -> Varchar,
        latitude -> Float8,
        longitude -> Float8,
    }
}

diesel::table! {
    /// Temperature readings, unique by city and timestamp.
    temperatures (id) {
        id -> Int4,
        city_id -> Int4,
        value -> Float8,
        /// Defaults to `NOW()` when omitted on insert.
        #[sql_name = "timestamp"]
        recorded_at -> Timestamp,
    }
}

diesel::joinable!(cities -> countries (country_id));
diesel::joinable!(temperatures -> cities (city_id));

diesel::allow_tables_to_appear_in_same_query!(countries, cities, temperatures);
