//! Fixed value sets stored as short text columns.
//!
//! Each enum serializes to the same snake_case string that is stored in the
//! database and guarded there by a `CHECK` constraint. No transition rules
//! are enforced; any value may replace any other.

use std::fmt;
use std::str::FromStr;

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default = $default:ident) {
            $( $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( #[serde(rename = $value)] $variant ),+
        }

        impl $name {
            /// Every permitted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stored / serialized representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok($name::$variant), )+
                    other => Err(format!(
                        "\"{other}\" is not a valid {}", stringify!($name)
                    )),
                }
            }
        }

        impl Type<Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <String as Type<Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <String as Type<Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, Postgres> for $name {
            fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
                <&str as Encode<'q, Postgres>>::encode_by_ref(&self.as_str(), buf)
            }
        }

        impl<'r> Decode<'r, Postgres> for $name {
            fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
                let raw = <&str as Decode<'r, Postgres>>::decode(value)?;
                Ok(raw.parse::<$name>()?)
            }
        }
    };
}

define_choice_enum! {
    /// Project lifecycle status.
    ProjectStatus (default = Planning) {
        Planning => "planning",
        Active => "active",
        AtRisk => "at_risk",
        Done => "done",
    }
}

define_choice_enum! {
    /// Task priority.
    Priority (default = Medium) {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

define_choice_enum! {
    /// Risk severity.
    Severity (default = Medium) {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

define_choice_enum! {
    /// Risk tracking status.
    RiskStatus (default = Open) {
        Open => "open",
        Mitigated => "mitigated",
    }
}
