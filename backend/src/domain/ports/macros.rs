//! Helper macro for generating domain port error enums.
//!
//! Every variant carries a single `message` field. The macro emits a
//! `thiserror` enum, one snake_case constructor per variant that accepts
//! anything convertible into a `String`, and a `kind()` accessor returning the
//! snake_case variant name for structured logging.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant {
                    /// Diagnostic detail for logs.
                    message: String,
                },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    /// Construct this variant from a diagnostic message.
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                }
            )*

            /// Snake-case variant name for structured logs.
            #[must_use]
            pub fn kind(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant { .. } => ::paste::paste! { stringify!([<$variant:snake>]) },
                    )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;
