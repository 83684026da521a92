use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{Def, Kind, ListDef, Queryable, Shape, Slot};

impl<T: Queryable> Queryable for Vec<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder()
            .type_identifier("Vec")
            .kind(Kind::List)
            .def(Def::List(ListDef::new(|| T::SHAPE)))
            .build()
    };

    fn slot(&mut self) -> Slot<'_> {
        Slot::Other(Self::SHAPE)
    }
}

impl<T: Queryable> Queryable for VecDeque<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder()
            .type_identifier("VecDeque")
            .kind(Kind::List)
            .def(Def::List(ListDef::new(|| T::SHAPE)))
            .build()
    };

    fn slot(&mut self) -> Slot<'_> {
        Slot::Other(Self::SHAPE)
    }
}
