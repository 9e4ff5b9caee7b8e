//! Macros for declaring named units and typed relations between families.

/// Declares lazily initialised named units of one family.
///
/// ```rust,ignore
/// define_units! {
///     Length;
///     METER = standard;
///     KILOMETER = ("kilometer", "km", 1_000.0);
///     DEGREE_CELSIUS = ("degree Celsius", "°C", 1.0, 273.15);
/// }
/// ```
///
/// The factor of every scaled unit is checked to be non-zero at compile time.
macro_rules! define_units {
    (@offset) => { 0.0 };
    (@offset $offset:expr) => { $offset };

    ($family:ty;) => {};

    ($family:ty; $(#[$meta:meta])* $name:ident = standard; $($rest:tt)*) => {
        $(#[$meta])*
        pub static $name: $crate::__private::Lazy<$crate::Unit<$family>> =
            $crate::__private::Lazy::new(<$family as $crate::NamedFamily>::standard_unit);

        define_units!($family; $($rest)*);
    };

    (
        $family:ty;
        $(#[$meta:meta])*
        $name:ident = ($unit:expr, $symbol:expr, $factor:expr $(, $offset:expr)?);
        $($rest:tt)*
    ) => {
        const _: () = assert!($factor != 0.0);

        $(#[$meta])*
        pub static $name: $crate::__private::Lazy<$crate::Unit<$family>> =
            $crate::__private::Lazy::new(|| {
                $crate::Unit::<$family>::scaled_unchecked(
                    $unit,
                    $symbol,
                    $factor,
                    define_units!(@offset $($offset)?),
                )
            });

        define_units!($family; $($rest)*);
    };
}

/// Declares `A * B -> C` and `A / B -> C` between relative scalars of named families.
///
/// Each line asserts at compile time that the dimension vectors add up, and generates the
/// owned and by-reference operator impls. The result is expressed in the standard unit of `C`.
macro_rules! relations {
    (@impl $Op:ident, $method:ident, $a:ident, $b:ident, $c:ident, $op:tt) => {
        impl ::core::ops::$Op<$crate::Scalar<$b>> for $crate::Scalar<$a> {
            type Output = $crate::Scalar<$c>;

            #[inline]
            fn $method(self, rhs: $crate::Scalar<$b>) -> $crate::Scalar<$c> {
                $crate::Scalar::from_si(self.si() $op rhs.si())
            }
        }

        impl<'a> ::core::ops::$Op<&'a $crate::Scalar<$b>> for &'a $crate::Scalar<$a> {
            type Output = $crate::Scalar<$c>;

            #[inline]
            fn $method(self, rhs: &'a $crate::Scalar<$b>) -> $crate::Scalar<$c> {
                $crate::Scalar::from_si(self.si() $op rhs.si())
            }
        }
    };

    () => {};

    ($a:ident * $b:ident => $c:ident; $($rest:tt)*) => {
        const _: () = assert!(<$a as $crate::NamedFamily>::DIMENSIONS
            .plus(<$b as $crate::NamedFamily>::DIMENSIONS)
            .equals(&<$c as $crate::NamedFamily>::DIMENSIONS));

        relations!(@impl Mul, mul, $a, $b, $c, *);
        relations!($($rest)*);
    };

    ($a:ident / $b:ident => $c:ident; $($rest:tt)*) => {
        const _: () = assert!(<$a as $crate::NamedFamily>::DIMENSIONS
            .minus(<$b as $crate::NamedFamily>::DIMENSIONS)
            .equals(&<$c as $crate::NamedFamily>::DIMENSIONS));

        relations!(@impl Div, div, $a, $b, $c, /);
        relations!($($rest)*);
    };
}
