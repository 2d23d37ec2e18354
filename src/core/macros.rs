//! Macros to reduce boilerplate in the option record
//!
//! Every plain field of [`MapOptions`](crate::core::options::MapOptions) gets
//! the same three methods:
//! - a by-value accessor named after the field
//! - a consuming `with_*` setter for fluent chains
//! - an in-place `set_*` setter returning `&mut Self`
//!
//! Usage:
//! ```ignore
//! impl MapOptions {
//!     option_accessors! {
//!         value debug_active: bool => with_debug_active, set_debug_active;
//!         optional compass_margins: [i32; 4] => with_compass_margins, set_compass_margins;
//!     }
//! }
//! ```
//!
//! `value` fields hand their type straight through. `optional` fields store an
//! `Option<T>`: the accessor returns the option, `with_*` takes a `T` and
//! stores `Some`, and `set_*` takes the option itself so a field can be unset.
macro_rules! option_accessors {
    () => {};

    (
        $(#[$meta:meta])*
        value $field:ident : $ty:ty => $with:ident, $set:ident;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub fn $field(&self) -> $ty {
            self.$field
        }

        $(#[$meta])*
        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = value;
            self
        }

        $(#[$meta])*
        pub fn $set(&mut self, value: $ty) -> &mut Self {
            self.$field = value;
            self
        }

        $crate::core::macros::option_accessors! { $($rest)* }
    };

    (
        $(#[$meta:meta])*
        optional $field:ident : $ty:ty => $with:ident, $set:ident;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        $(#[$meta])*
        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }

        $(#[$meta])*
        pub fn $set(&mut self, value: Option<$ty>) -> &mut Self {
            self.$field = value;
            self
        }

        $crate::core::macros::option_accessors! { $($rest)* }
    };
}

pub(crate) use option_accessors;
