//! Declarative helpers shared by the model modules.

/// Declares a fieldless domain enum with an `ALL` table, `as_str` and
/// `Display`.
///
/// `ALL` is generated from the same variant list as the enum itself, so it
/// can never fall out of step with the declaration.
macro_rules! domain_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value of this enum, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the display name of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declares a family enum whose variants wrap one struct each, together with
/// the `kind()` accessor and a `From` conversion per variant.
///
/// Variant names must match the family's kind enum one-to-one; the generated
/// `kind()` match has no wildcard arm.
macro_rules! family_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $kind:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        impl $name {
            /// Returns the kind tag that selects this node's wire payload.
            #[must_use]
            pub const fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant(_) => $kind::$variant,)+
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}
