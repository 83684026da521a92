/// Implements [`Queryable`](crate::Queryable) for a type that implements
/// [`DecodeValues`](crate::DecodeValues), so that decoders defer to it instead of attempting
/// primitive conversion.
///
/// ```rust
/// use urlquery_core::{DecodeValues, DecodeValuesError, queryable_decoder};
///
/// struct Csv(Vec<String>);
///
/// impl DecodeValues for Csv {
///     fn decode_values(&mut self, _key: &str, value: &str) -> Result<(), DecodeValuesError> {
///         self.0 = value.split(',').map(str::to_string).collect();
///         Ok(())
///     }
/// }
///
/// queryable_decoder!(Csv);
/// ```
#[macro_export]
macro_rules! queryable_decoder {
    ($ty:ty) => {
        impl $crate::Queryable for $ty {
            const SHAPE: &'static $crate::Shape = &const {
                $crate::Shape::builder()
                    .type_identifier(::core::stringify!($ty))
                    .kind($crate::Kind::Opaque)
                    .flags($crate::ShapeFlags::DECODER)
                    .build()
            };

            fn slot(&mut self) -> $crate::Slot<'_> {
                $crate::Slot::Custom {
                    shape: <Self as $crate::Queryable>::SHAPE,
                    value: self,
                }
            }
        }
    };
}

/// Implements `Queryable` for a primitive with a dedicated slot variant
macro_rules! scalar_queryable {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl $crate::Queryable for $ty {
                const SHAPE: &'static $crate::Shape = &const {
                    $crate::Shape::builder()
                        .type_identifier(::core::stringify!($ty))
                        .kind($crate::Kind::$kind)
                        .build()
                };

                #[inline]
                fn slot(&mut self) -> $crate::Slot<'_> {
                    $crate::Slot::$kind(self)
                }
            }
        )*
    };
}
pub(crate) use scalar_queryable;

/// Implements `Queryable` for a type that has a shape but no assignment path
macro_rules! opaque_queryable {
    ($($ty:ty => $ident:literal as $kind:ident),* $(,)?) => {
        $(
            impl $crate::Queryable for $ty {
                const SHAPE: &'static $crate::Shape = &const {
                    $crate::Shape::builder()
                        .type_identifier($ident)
                        .kind($crate::Kind::$kind)
                        .def($crate::Def::Opaque)
                        .build()
                };

                #[inline]
                fn slot(&mut self) -> $crate::Slot<'_> {
                    $crate::Slot::Other(<Self as $crate::Queryable>::SHAPE)
                }
            }
        )*
    };
}
pub(crate) use opaque_queryable;
