use alloc::boxed::Box;

use crate::{Def, Kind, PointerDef, Queryable, Shape, Slot};

impl<T: Queryable> Queryable for Box<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder()
            .type_identifier("Box")
            .kind(Kind::Pointer)
            .def(Def::Pointer(PointerDef::new(|| T::SHAPE, false)))
            .build()
    };

    fn slot(&mut self) -> Slot<'_> {
        Slot::Pointer {
            shape: Self::SHAPE,
            target: Some(Box::new(T::slot(&mut **self))),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::{Queryable, Slot};

    #[test]
    fn box_always_has_a_target() {
        let mut value = Box::new(false);
        match value.slot().follow() {
            Some(Slot::Bool(b)) => *b = true,
            other => panic!("expected a bool slot, got {other:?}"),
        }
        assert!(*value);
    }
}
