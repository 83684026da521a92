use alloc::boxed::Box;
use alloc::string::String;

use crate::{DecodeValues, Kind, Queryable, Record, Shape};

/// A typed, mutable view into a value, handed out by [`Queryable::slot`].
///
/// Decoders never see a value through anything else: a slot either exposes one primitive by
/// `&mut`, a record to walk, a pointer to follow, a self-decoding value, or only a shape (for
/// values that cannot be assigned).
pub enum Slot<'mem> {
    /// `bool`
    Bool(&'mem mut bool),
    /// `i8`
    I8(&'mem mut i8),
    /// `i16`
    I16(&'mem mut i16),
    /// `i32`
    I32(&'mem mut i32),
    /// `i64`
    I64(&'mem mut i64),
    /// `i128`
    I128(&'mem mut i128),
    /// `isize`
    Isize(&'mem mut isize),
    /// `u8`
    U8(&'mem mut u8),
    /// `u16`
    U16(&'mem mut u16),
    /// `u32`
    U32(&'mem mut u32),
    /// `u64`
    U64(&'mem mut u64),
    /// `u128`
    U128(&'mem mut u128),
    /// `usize`
    Usize(&'mem mut usize),
    /// `f32`
    F32(&'mem mut f32),
    /// `f64`
    F64(&'mem mut f64),
    /// `String`
    String(&'mem mut String),

    /// A record whose fields can be walked
    Record(&'mem mut dyn Record),

    /// `Option<T>`, `Box<T>`: `target` is `None` when the pointer points to nothing.
    Pointer {
        /// shape of the pointer itself
        shape: &'static Shape,
        /// slot of the pointee, if any
        target: Option<Box<Slot<'mem>>>,
    },

    /// A value that decodes itself
    Custom {
        /// shape of the value
        shape: &'static Shape,
        /// the value
        value: &'mem mut dyn DecodeValues,
    },

    /// A value that exists but may not be assigned (e.g. a private field)
    Sealed(&'static Shape),

    /// A value with no assignment path: sequences, maps, tuples, opaque types
    Other(&'static Shape),
}

impl<'mem> Slot<'mem> {
    /// Returns the shape of the value behind this slot
    pub fn shape(&self) -> &'static Shape {
        match self {
            Slot::Bool(_) => bool::SHAPE,
            Slot::I8(_) => i8::SHAPE,
            Slot::I16(_) => i16::SHAPE,
            Slot::I32(_) => i32::SHAPE,
            Slot::I64(_) => i64::SHAPE,
            Slot::I128(_) => i128::SHAPE,
            Slot::Isize(_) => isize::SHAPE,
            Slot::U8(_) => u8::SHAPE,
            Slot::U16(_) => u16::SHAPE,
            Slot::U32(_) => u32::SHAPE,
            Slot::U64(_) => u64::SHAPE,
            Slot::U128(_) => u128::SHAPE,
            Slot::Usize(_) => usize::SHAPE,
            Slot::F32(_) => f32::SHAPE,
            Slot::F64(_) => f64::SHAPE,
            Slot::String(_) => String::SHAPE,
            Slot::Record(record) => record.shape(),
            Slot::Pointer { shape, .. }
            | Slot::Custom { shape, .. }
            | Slot::Sealed(shape)
            | Slot::Other(shape) => shape,
        }
    }

    /// Returns the kind of the value behind this slot
    pub fn kind(&self) -> Kind {
        self.shape().kind
    }

    /// Whether a decoder may write through this slot
    pub fn is_settable(&self) -> bool {
        !matches!(self, Slot::Sealed(_))
    }

    /// Whether this slot is a pointer that points to nothing
    pub fn is_null(&self) -> bool {
        matches!(self, Slot::Pointer { target: None, .. })
    }

    /// Follows pointer indirection until reaching a non-pointer slot.
    ///
    /// Returns `None` if any pointer along the way points to nothing.
    pub fn follow(self) -> Option<Slot<'mem>> {
        let mut slot = self;
        loop {
            match slot {
                Slot::Pointer { target, .. } => slot = *target?,
                other => return Some(other),
            }
        }
    }
}

impl core::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Slot::Sealed(shape) => write!(f, "Slot::Sealed({shape})"),
            Slot::Pointer { shape, target } => {
                write!(f, "Slot::Pointer({shape}, ")?;
                match target {
                    Some(target) => write!(f, "{target:?})"),
                    None => write!(f, "null)"),
                }
            }
            other => write!(f, "Slot({})", other.shape()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;

    #[test]
    fn scalar_slots_report_their_kind() {
        let mut n = 0u16;
        assert_eq!(n.slot().kind(), Kind::U16);

        let mut s = String::new();
        assert_eq!(s.slot().kind(), Kind::String);
    }

    #[test]
    fn follow_resolves_nested_pointers() {
        let mut value: Option<Box<i32>> = Some(Box::new(4));
        match value.slot().follow() {
            Some(Slot::I32(n)) => *n = 5,
            other => panic!("expected an i32 slot, got {other:?}"),
        }
        assert_eq!(value, Some(Box::new(5)));
    }

    #[test]
    fn follow_stops_at_null() {
        let mut value: Option<Option<u8>> = Some(None);
        let slot = value.slot();
        assert!(!slot.is_null());
        assert!(slot.follow().is_none());
    }

    #[test]
    fn sealed_slots_are_not_settable() {
        assert!(!Slot::Sealed(bool::SHAPE).is_settable());
        let mut b = false;
        assert!(b.slot().is_settable());
    }
}
