//! Store-generated entity identifiers.
//!
//! Rows are keyed by PostgreSQL `SERIAL` columns, so identifiers are `i32`.
//! Clients send identifiers as arbitrary JSON or path integers; a value that
//! does not fit in `i32` can never name a stored row, which
//! [`CountryId::from_wire`] and friends express as `None`.

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw store identifier.
            #[must_use]
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Convert a client-supplied integer; `None` when out of range.
            #[must_use]
            pub fn from_wire(raw: i64) -> Option<Self> {
                i32::try_from(raw).ok().map(Self)
            }

            /// The raw store identifier.
            #[must_use]
            pub const fn as_i32(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id! {
    /// Identifier of a row in `countries`.
    CountryId
}

entity_id! {
    /// Identifier of a row in `cities`.
    CityId
}

entity_id! {
    /// Identifier of a row in `temperatures`.
    TemperatureId
}
