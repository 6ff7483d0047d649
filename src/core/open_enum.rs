//! String-backed enums that tolerate values added by the service later on.
//!
//! Every enum declared through [`open_enum!`] gets one variant per documented
//! value plus `Other(String)`. Parsing is case-insensitive and never fails: a
//! value the client does not know about is kept verbatim in `Other`, so a
//! response from a newer API version still deserializes and re-serializes
//! unchanged.

/// Declares an open enum.
///
/// ```ignore
/// open_enum! {
///     pub enum AccessTier {
///         Cool => "Cool",
///         Hot => "Hot",
///     }
/// }
/// ```
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this client version does not know about, kept as received.
            Other(String),
        }

        impl $name {
            /// The documented values, in their canonical spelling.
            pub const fn possible_values() -> &'static [&'static str] {
                &[$($value),+]
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(input: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if input.eq_ignore_ascii_case($value) {
                        return Ok(Self::$variant);
                    }
                )+
                Ok(Self::Other(input.to_string()))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(input: &str) -> Self {
                match input.parse() {
                    Ok(value) => value,
                    Err(never) => match never {},
                }
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(input: String) -> Self {
                Self::from(input.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}

pub(crate) use open_enum;
