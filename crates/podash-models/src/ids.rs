//! Strongly-typed ID newtypes for domain entities.
//!
//! Permission and role identities are opaque strings supplied by the catalog
//! loader. Wrapping them keeps a `RoleId` from being passed where a
//! `PermissionId` is expected, while still allowing `&str` lookups in hashed
//! and ordered collections through [`Borrow<str>`].
//!
//! # Example
//!
//! ```ignore
//! use podash_models::ids::{PermissionId, RoleId};
//!
//! fn grant(role: &RoleId, permission: &PermissionId) { /* ... */ }
//!
//! let role = RoleId::generate();
//! let permission = PermissionId::from("orders:read");
//!
//! grant(&role, &permission);    // OK
//! // grant(&permission, &role); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// Macro to define a strongly-typed, string-backed ID newtype.
///
/// Serializes transparently as the inner string.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identity.
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Create a new random ID backed by a v4 UUID.
            #[inline]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// True for an empty or whitespace-only identity, which loaders reject.
            #[inline]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            #[inline]
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Permission entities.
    PermissionId
);

define_id!(
    /// Strongly-typed ID for Role entities.
    RoleId
);
