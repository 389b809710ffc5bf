//! Utility macros for the token classifier.
//!
//! - `MK_TOKEN_KINDS!` - Declares a fieldless token kind enum together with
//!   its ordinal-ordered `ALL` list

/// Declares a `#[repr(u16)]` token kind enum.
///
/// Alongside the enum this generates `ALL`, every variant in declaration
/// order, so `ALL[n]` is always the variant whose ordinal is `n`, and
/// `COUNT`, the number of variants.
///
/// # Example
///
/// ```ignore
/// MK_TOKEN_KINDS! {
///     #[derive(Debug, Clone, Copy)]
///     pub enum Kind { EOF, Identifier }
/// }
///
/// assert_eq!(Kind::ALL[1] as u16, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN_KINDS {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(u16)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const COUNT: usize = $name::ALL.len();
        }
    };
}
