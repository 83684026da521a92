use alloc::boxed::Box;

use crate::{Def, Kind, PointerDef, Queryable, Shape, Slot};

impl<T: Queryable> Queryable for Option<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder()
            .type_identifier("Option")
            .kind(Kind::Pointer)
            .def(Def::Pointer(PointerDef::new(|| T::SHAPE, true)))
            .build()
    };

    fn slot(&mut self) -> Slot<'_> {
        Slot::Pointer {
            shape: Self::SHAPE,
            target: self.as_mut().map(|inner| Box::new(inner.slot())),
        }
    }
}
