use std::collections::{HashMap, HashSet};

use crate::{Def, Kind, MapDef, Queryable, Shape, Slot};

impl<K: Queryable, V: Queryable, S> Queryable for HashMap<K, V, S> {
    const SHAPE: &'static Shape = &const {
        Shape::builder()
            .type_identifier("HashMap")
            .kind(Kind::Map)
            .def(Def::Map(MapDef::new(|| K::SHAPE, || V::SHAPE)))
            .build()
    };

    fn slot(&mut self) -> Slot<'_> {
        Slot::Other(Self::SHAPE)
    }
}

impl<T: Queryable, S> Queryable for HashSet<T, S> {
    const SHAPE: &'static Shape = &const {
        Shape::builder()
            .type_identifier("HashSet")
            .kind(Kind::Set)
            .def(Def::Map(MapDef::new(|| T::SHAPE, || <() as Queryable>::SHAPE)))
            .build()
    };

    fn slot(&mut self) -> Slot<'_> {
        Slot::Other(Self::SHAPE)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{Def, Kind, Queryable};

    #[test]
    fn hashmap_shape() {
        let shape = <HashMap<String, u8> as Queryable>::SHAPE;
        assert_eq!(shape.kind, Kind::Map);
        match shape.def {
            Def::Map(md) => {
                assert_eq!((md.key)().kind, Kind::String);
                assert_eq!((md.value)().kind, Kind::U8);
            }
            other => panic!("expected a map def, got {other:?}"),
        }
    }
}
