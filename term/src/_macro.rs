//! I define the [`wrap!`] macro,
//! which generates a newtype around `Arc<str>`
//! guaranteeing that the underlying text satisfies some property.

/// Generate a cheaply clonable wrapper around `Arc<str>`.
///
/// The first item of the body must be a `new` constructor checking the property;
/// any other item is added to the inherent implementation.
macro_rules! wrap {
    ($(#[$attr: meta])* $wid: ident : $new: item $($item: item)*) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $wid(std::sync::Arc<str>);

        impl $wid {
            $new

            #[doc = concat!("Build a new [`", stringify!($wid), "`] without checking that `inner` is valid.")]
            ///
            /// Only use it with values known to be valid (e.g. constants),
            /// otherwise the guarantees of this type are lost.
            pub fn new_unchecked<T: Into<std::sync::Arc<str>>>(inner: T) -> Self {
                $wid(inner.into())
            }

            /// Gets a reference to the underlying `str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            $($item)*
        }

        impl std::ops::Deref for $wid {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $wid {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $wid {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $wid {
            fn eq(&self, other: &str) -> bool {
                &*self.0 == other
            }
        }

        impl PartialEq<&str> for $wid {
            fn eq(&self, other: &&str) -> bool {
                &*self.0 == *other
            }
        }

        impl std::fmt::Display for $wid {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}
