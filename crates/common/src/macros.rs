/// Macros for plain `u64` newtypes such as block numbers and timestamps.
pub(super) mod u64_backed {

    /// Generates `new` and `get` methods, and `PartialEq` against `u64`.
    macro_rules! new_get_partialeq {
        ($target:ty) => {
            impl $target {
                pub const fn new(val: u64) -> Self {
                    Self(val)
                }

                pub const fn get(&self) -> u64 {
                    self.0
                }
            }

            impl PartialEq<u64> for $target {
                fn eq(&self, other: &u64) -> bool {
                    self.0 == *other
                }
            }

            impl From<u64> for $target {
                fn from(val: u64) -> Self {
                    Self(val)
                }
            }
        };
    }

    pub(crate) use new_get_partialeq;
}

/// Generates felt newtype-wrappers and the `macro_prelude` module.
///
/// Note that this is a single-use macro as it generates a module.
///
/// Usage:
///     `felt_newtypes!([x1, x2, ..])`
macro_rules! felt_newtypes {
    ([$($felt:ident),* $(,)?]) => {
        crate::macros::felt_newtypes!(@define_felt $($felt),*);

        pub mod macro_prelude {
            pub use super::felt;
            pub use super::felt_bytes;

            crate::macros::felt_newtypes!(@generate_felt_macro $($felt),*);

            crate::macros::felt_newtypes!(@generate_use $($felt),*);
        }
    };

    (@define_felt $head:ident, $($tail:ident),+ $(,)?) => {
        crate::macros::felt_newtypes!(@define_felt $head);
        crate::macros::felt_newtypes!(@define_felt $($tail),+);
    };

    (@define_felt $target:ident) => {
        paste::paste! {
            #[derive(Copy, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, PartialOrd, Ord)]
            pub struct $target(pub sncore_crypto::Felt);

            #[allow(unused)]
            impl $target {
                pub const ZERO: Self = Self(sncore_crypto::Felt::ZERO);

                pub fn as_inner(&self) -> &sncore_crypto::Felt {
                    &self.0
                }
            }

            impl<T> fake::Dummy<T> for $target {
                fn dummy_with_rng<R: rand::Rng + ?Sized>(_: &T, rng: &mut R) -> Self {
                    Self($crate::random_felt(rng))
                }
            }

            $crate::macros::fmt::thin_debug!($target);
            $crate::macros::fmt::hex_display!($target);
        }
    };

    (@generate_use $head:ident, $($tail:ident),+ $(,)?) => {
        crate::macros::felt_newtypes!(@generate_use $head);
        crate::macros::felt_newtypes!(@generate_use $($tail),+);
    };

    (@generate_use $target:ident) => {
        paste::paste! {
            pub use [<$target:snake>];
            pub use [<$target:snake _bytes>];
        }
    };

    (@generate_felt_macro $head:ident, $($tail:ident),+ $(,)?) => {
        crate::macros::felt_newtypes!(@generate_felt_macro $head);
        crate::macros::felt_newtypes!(@generate_felt_macro $($tail),+);
    };

    (@generate_felt_macro $target:ident) => {
        paste::paste! {
            #[macro_export]
            macro_rules! [<$target:snake>] {
                ($hex:expr) => {
                    $crate::$target($crate::felt!($hex))
                };
            }

            #[macro_export]
            macro_rules! [<$target:snake _bytes>] {
                ($bytes:expr) => {
                    $crate::$target($crate::felt_bytes!($bytes))
                };
            }
        }
    };
}
pub(super) use felt_newtypes;

pub(super) mod fmt {

    /// Adds a thin display implementation which uses the inner fields Display.
    macro_rules! thin_display {
        ($target:ty) => {
            impl std::fmt::Display for $target {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::Display::fmt(&self.0, f)
                }
            }
        };
    }

    /// Adds a display implementation which prints the inner felt as hex.
    macro_rules! hex_display {
        ($target:ty) => {
            impl std::fmt::Display for $target {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{:#x}", self.0)
                }
            }
        };
    }

    /// Adds a thin Debug implementation, which skips `X(Felt(debug))` as `X(hex)`.
    macro_rules! thin_debug {
        ($target:ty) => {
            impl std::fmt::Debug for $target {
                fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(fmt, "{}({:#x})", stringify!($target), self.0)
                }
            }
        };
    }

    pub(crate) use {hex_display, thin_debug, thin_display};
}

/// Creates a [Felt](sncore_crypto::Felt) from a hex string literal.
///
/// Panics on malformed input, so only use it with literals.
#[macro_export]
macro_rules! felt {
    ($hex:expr) => {{
        match $crate::Felt::from_hex($hex) {
            Ok(f) => f,
            Err(_) => panic!("Invalid felt literal"),
        }
    }};
}

/// Creates a [`Felt`](sncore_crypto::Felt) from a big-endian byte slice of at
/// most 32 bytes, e.g. a Cairo short string.
#[macro_export]
macro_rules! felt_bytes {
    ($bytes:expr) => {{
        let bytes: &[u8] = $bytes;
        assert!(bytes.len() <= 32, "Invalid constant: too many bytes");
        let mut buf = [0u8; 32];
        buf[32 - bytes.len()..].copy_from_slice(bytes);
        $crate::Felt::from_bytes_be(&buf)
    }};
}
