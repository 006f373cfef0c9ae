//! Enumerations of wire tokens.
//!
//! Every Square vocabulary (statuses, types, reasons) is declared with
//! [`wire_enum!`](crate::wire_enum), which produces one named variant per
//! documented token plus an `Unrecognized(String)` variant. Tokens the server
//! introduces after this crate was released are kept verbatim in that variant
//! and written back unchanged.
//!
//! Decoding can additionally collect or reject unrecognized tokens; see
//! [`crate::wire::decode`].

use std::cell::RefCell;
use std::fmt;

use serde::Serialize;

/// Behavior shared by all generated enums.
pub trait WireEnum: Sized + Clone + fmt::Debug + fmt::Display + 'static {
    /// Type name as used by the API reference.
    const NAME: &'static str;

    /// Documented tokens in declaration order.
    const VALUES: &'static [&'static str];

    /// Exact wire token for this value.
    fn as_str(&self) -> &str;

    /// Parse a token; unknown tokens are preserved, never rejected.
    fn from_token(token: &str) -> Self;

    /// False for values outside the documented set.
    fn is_recognized(&self) -> bool;

    /// Iterate the documented values.
    fn known() -> impl Iterator<Item = Self> {
        Self::VALUES.iter().map(|token| Self::from_token(token))
    }
}

/// A token that did not match any documented value of an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UnrecognizedToken {
    /// Name of the enum the token was decoded into.
    pub enum_name: &'static str,
    /// The token as it appeared on the wire.
    pub token: String,
}

impl fmt::Display for UnrecognizedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{:?}", self.enum_name, self.token)
    }
}

#[derive(Default)]
struct Collector {
    strict: bool,
    seen: Vec<UnrecognizedToken>,
    rejected: Option<UnrecognizedToken>,
}

thread_local! {
    static COLLECTOR: RefCell<Option<Collector>> = const { RefCell::new(None) };
}

/// Outcome of [`collect`]: the closure result plus what the generated
/// deserializers reported while it ran.
pub(crate) struct Collected<R> {
    pub result: R,
    pub seen: Vec<UnrecognizedToken>,
    pub rejected: Option<UnrecognizedToken>,
}

/// Run `f` with an active collector on this thread.
///
/// Collectors nest: an outer collector is restored once `f` returns, and
/// tokens seen by the inner run are not forwarded to it.
pub(crate) fn collect<R>(strict: bool, f: impl FnOnce() -> R) -> Collected<R> {
    struct Restore(Option<Collector>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            COLLECTOR.with(|slot| *slot.borrow_mut() = previous);
        }
    }

    let previous = COLLECTOR.with(|slot| {
        slot.borrow_mut().replace(Collector {
            strict,
            ..Collector::default()
        })
    });
    let restore = Restore(previous);

    let result = f();
    let collector = COLLECTOR
        .with(|slot| slot.borrow_mut().take())
        .unwrap_or_default();
    drop(restore);

    Collected {
        result,
        seen: collector.seen,
        rejected: collector.rejected,
    }
}

/// Called by generated deserializers for every unrecognized token.
///
/// Returns `Err` only when a strict collector is active, in which case the
/// deserializer aborts.
#[doc(hidden)]
pub fn note_unrecognized(enum_name: &'static str, token: &str) -> Result<(), UnrecognizedToken> {
    tracing::debug!(enum_name, token, "passing through unrecognized enum token");

    COLLECTOR.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(collector) = slot.as_mut() else {
            return Ok(());
        };
        let unrecognized = UnrecognizedToken {
            enum_name,
            token: token.to_owned(),
        };
        if collector.strict {
            collector.rejected = Some(unrecognized.clone());
            return Err(unrecognized);
        }
        collector.seen.push(unrecognized);
        Ok(())
    })
}

/// Declare a wire enum.
///
/// ```
/// square_core::wire_enum! {
///     /// Order of results.
///     pub enum SortOrder {
///         /// Newest first.
///         Desc => "DESC",
///         /// Oldest first.
///         Asc => "ASC",
///     }
/// }
///
/// use square_core::WireEnum;
/// assert_eq!(SortOrder::Desc.as_str(), "DESC");
/// assert_eq!(SortOrder::from_token("SIDEWAYS").as_str(), "SIDEWAYS");
/// assert_eq!(SortOrder::VALUES, &["DESC", "ASC"]);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A token outside the documented set, preserved verbatim.
            Unrecognized(::std::string::String),
        }

        impl $name {
            /// Exact wire token for this value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $token,)+
                    Self::Unrecognized(token) => token.as_str(),
                }
            }

            /// Parse a token; unknown tokens become `Unrecognized`.
            #[must_use]
            pub fn from_token(token: &str) -> Self {
                match token {
                    $($token => Self::$variant,)+
                    other => Self::Unrecognized(::std::string::ToString::to_string(other)),
                }
            }

            /// False for values outside the documented set.
            #[must_use]
            pub const fn is_recognized(&self) -> bool {
                !::std::matches!(self, Self::Unrecognized(_))
            }
        }

        impl $crate::enums::WireEnum for $name {
            const NAME: &'static str = ::std::stringify!($name);
            const VALUES: &'static [&'static str] = &[$($token),+];

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn from_token(token: &str) -> Self {
                $name::from_token(token)
            }

            fn is_recognized(&self) -> bool {
                $name::is_recognized(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from_token(s))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(token: &str) -> Self {
                Self::from_token(token)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let token = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                let value = Self::from_token(&token);
                if !value.is_recognized() {
                    $crate::enums::note_unrecognized(
                        <Self as $crate::enums::WireEnum>::NAME,
                        &token,
                    )
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)?;
                }
                Ok(value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::wire_enum! {
        /// Test vocabulary.
        pub enum Shade {
            Light => "LIGHT",
            Dark => "DARK",
        }
    }

    #[test]
    fn test_tokens_round_trip_exactly() {
        for shade in Shade::known() {
            assert_eq!(Shade::from_token(shade.as_str()), shade);
        }
        assert_eq!(Shade::VALUES, &["LIGHT", "DARK"]);
        assert_eq!(<Shade as WireEnum>::NAME, "Shade");
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let shade = Shade::from_token("light");
        assert_eq!(shade, Shade::Unrecognized("light".to_string()));
        assert!(!shade.is_recognized());
        assert_eq!(shade.to_string(), "light");
    }

    #[test]
    fn test_serde_uses_tokens() {
        assert_eq!(serde_json::to_string(&Shade::Dark).unwrap(), "\"DARK\"");
        let parsed: Shade = serde_json::from_str("\"NEON\"").unwrap();
        assert_eq!(parsed.as_str(), "NEON");
    }

    #[test]
    fn test_collector_records_tokens() {
        let collected = collect(false, || serde_json::from_str::<Vec<Shade>>(r#"["LIGHT","NEON"]"#));
        assert!(collected.result.is_ok());
        assert_eq!(
            collected.seen,
            vec![UnrecognizedToken {
                enum_name: "Shade",
                token: "NEON".to_string(),
            }]
        );
        assert!(collected.rejected.is_none());
    }

    #[test]
    fn test_strict_collector_rejects() {
        let collected = collect(true, || serde_json::from_str::<Shade>("\"NEON\""));
        assert!(collected.result.is_err());
        assert_eq!(
            collected.rejected.map(|t| t.token),
            Some("NEON".to_string())
        );
    }

    #[test]
    fn test_collectors_nest() {
        let outer = collect(false, || {
            let inner = collect(true, || serde_json::from_str::<Shade>("\"X\""));
            assert!(inner.result.is_err());
            serde_json::from_str::<Shade>("\"Y\"")
        });
        assert!(outer.result.is_ok());
        assert_eq!(outer.seen.len(), 1);
        assert_eq!(outer.seen[0].token, "Y");
    }

    #[test]
    fn test_no_collector_is_lenient() {
        assert!(note_unrecognized("Shade", "ANY").is_ok());
    }
}
