//! Macro for the fixed option sets offered by the questionnaire controls.
//!
//! Every radio group and checkbox group exposes a closed list of values,
//! each with a wire token and a display label. `answer_options!` generates
//! the enum plus its `all`, `token`, `label`, `FromStr` and `Display` impls.
//!
//! ```ignore
//! answer_options! {
//!     /// Primary business sector.
//!     Sector, field = "sector" {
//!         Finance => ("finance", "Finance & banking"),
//!         Other => ("other", "Other"),
//!     }
//! }
//! ```

macro_rules! answer_options {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => ($token:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in the order the control lists them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Form field this control feeds.
            pub const FIELD: &'static str = $field;

            /// Returns every option in display order.
            pub fn all() -> &'static [$name] {
                Self::ALL
            }

            /// Returns the wire token submitted by the control.
            pub fn token(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }

            /// Returns the human-readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::foundation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.token() == token)
                    .ok_or_else(|| $crate::domain::foundation::ValidationError::invalid_token(Self::FIELD, token))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.token())
            }
        }
    };
}

pub(crate) use answer_options;
