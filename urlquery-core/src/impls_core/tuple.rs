use crate::{Def, Kind, Queryable, Shape, Slot};

macro_rules! tuple_queryable {
    ($($name:ident),+) => {
        impl<$($name: Queryable),+> Queryable for ($($name,)+) {
            const SHAPE: &'static Shape = &const {
                Shape::builder()
                    .type_identifier("(…)")
                    .kind(Kind::Tuple)
                    .def(Def::Opaque)
                    .build()
            };

            fn slot(&mut self) -> Slot<'_> {
                Slot::Other(Self::SHAPE)
            }
        }
    };
}

tuple_queryable!(T0);
tuple_queryable!(T0, T1);
tuple_queryable!(T0, T1, T2);
tuple_queryable!(T0, T1, T2, T3);
