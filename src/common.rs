// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions for `no_std` builds.

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("ellipse-progress requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn sin_cos(self) -> (Self, Self) => sincos;
}
