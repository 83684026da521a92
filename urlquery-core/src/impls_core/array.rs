use crate::{ArrayDef, Def, Kind, Queryable, Shape, Slot};

impl<T: Queryable, const N: usize> Queryable for [T; N] {
    const SHAPE: &'static Shape = &const {
        Shape::builder()
            .type_identifier("[_; _]")
            .kind(Kind::Array)
            .def(Def::Array(ArrayDef::new(|| T::SHAPE, N)))
            .build()
    };

    fn slot(&mut self) -> Slot<'_> {
        Slot::Other(Self::SHAPE)
    }
}
