//! Macro for implementing Display and FromStr for string-valued enums
//!
//! Config files and environment variables carry enums as lowercase strings;
//! this macro keeps the two directions of that mapping in one place.
//!
//! # Example
//!
//! ```rust
//! use eventpass_domain::impl_domain_string_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Audience {
//!     Attendee,
//!     Organizer,
//! }
//!
//! impl_domain_string_conversions!(Audience {
//!     Attendee => "attendee",
//!     Organizer => "organizer",
//! });
//! ```

/// Implements Display and FromStr traits for string-valued enums
///
/// - Display writes the mapped string
/// - FromStr parses case-insensitively and names the enum in its error
#[macro_export]
macro_rules! impl_domain_string_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
