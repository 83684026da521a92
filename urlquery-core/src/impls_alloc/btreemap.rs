use alloc::collections::{BTreeMap, BTreeSet};

use crate::{Def, Kind, MapDef, Queryable, Shape, Slot};

impl<K: Queryable, V: Queryable> Queryable for BTreeMap<K, V> {
    const SHAPE: &'static Shape = &const {
        Shape::builder()
            .type_identifier("BTreeMap")
            .kind(Kind::Map)
            .def(Def::Map(MapDef::new(|| K::SHAPE, || V::SHAPE)))
            .build()
    };

    fn slot(&mut self) -> Slot<'_> {
        Slot::Other(Self::SHAPE)
    }
}

impl<T: Queryable> Queryable for BTreeSet<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder()
            .type_identifier("BTreeSet")
            .kind(Kind::Set)
            .def(Def::Map(MapDef::new(|| T::SHAPE, || <() as Queryable>::SHAPE)))
            .build()
    };

    fn slot(&mut self) -> Slot<'_> {
        Slot::Other(Self::SHAPE)
    }
}
