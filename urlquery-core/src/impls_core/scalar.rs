use crate::macros::{opaque_queryable, scalar_queryable};

scalar_queryable! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

opaque_queryable! {
    char => "char" as Char,
    () => "()" as Unit,
    core::time::Duration => "Duration" as Opaque,
}

#[cfg(test)]
mod tests {
    use crate::{Def, Kind, Queryable, Slot};

    #[test]
    fn scalar_shapes() {
        assert_eq!(i8::SHAPE.kind, Kind::I8);
        assert_eq!(i8::SHAPE.type_identifier, "i8");
        assert_eq!(usize::SHAPE.kind, Kind::Usize);
        assert_eq!(f32::SHAPE.type_identifier, "f32");
        assert!(matches!(bool::SHAPE.def, Def::Scalar));
    }

    #[test]
    fn char_has_no_assignment_path() {
        let mut c = 'x';
        assert!(matches!(c.slot(), Slot::Other(shape) if shape.kind == Kind::Char));
    }

    #[test]
    fn scalar_slots_write_through() {
        let mut n = 0i64;
        if let Slot::I64(v) = n.slot() {
            *v = -9;
        }
        assert_eq!(n, -9);
    }
}
