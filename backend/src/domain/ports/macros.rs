//! Declarative helper for port error enums.
//!
//! Every variant carries a single `message` naming the underlying failure.
//! The macro derives `thiserror::Error` with `"<prefix>: {message}"` as the
//! display text, a snake-case constructor per variant taking
//! `impl Into<String>`, and a `message()` accessor returning the bare text.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $prefix:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{}: {message}", $prefix)]
                $variant { message: String },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build `", stringify!($name), "::", stringify!($variant), "`.")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )+

            /// Failure text without the variant prefix.
            #[must_use]
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } )|+ => message,
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SampleError {
            Unavailable => "store unavailable",
            CheckoutTimeout => "checkout timed out",
        }
    }

    #[test]
    fn constructors_are_snake_case_and_accept_str() {
        assert_eq!(
            SampleError::checkout_timeout("after 30s"),
            SampleError::CheckoutTimeout {
                message: "after 30s".to_owned()
            }
        );
    }

    #[test]
    fn display_prefixes_the_message() {
        let err = SampleError::unavailable(String::from("db down"));
        assert_eq!(err.to_string(), "store unavailable: db down");
        assert_eq!(err.message(), "db down");
    }
}
