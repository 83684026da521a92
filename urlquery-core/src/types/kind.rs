/// The kind of a value, as far as decoding is concerned.
///
/// Primitive kinds each have a conversion rule; everything else is structural and has none.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum Kind {
    /// `bool`
    Bool,
    /// `char`
    Char,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `i128`
    I128,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// An owned UTF-8 string
    String,
    /// `()`
    Unit,
    /// A tuple with at least one element
    Tuple,
    /// A struct (a record)
    Struct,
    /// A growable sequence, like `Vec<T>`
    List,
    /// A fixed-size sequence, like `[T; N]`
    Array,
    /// A key-value collection
    Map,
    /// A set
    Set,
    /// Something that points to another value, or to nothing: `Option<T>`, `Box<T>`
    Pointer,
    /// Anything whose structure isn't described
    Opaque,
}

impl Kind {
    /// Returns true for `i8` through `i128` and `isize`
    pub const fn is_signed_integer(self) -> bool {
        matches!(
            self,
            Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 | Kind::I128 | Kind::Isize
        )
    }

    /// Returns true for `u8` through `u128` and `usize`
    pub const fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 | Kind::U128 | Kind::Usize
        )
    }

    /// Returns true for `f32` and `f64`
    pub const fn is_float(self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    /// Returns true for lists and arrays
    pub const fn is_sequence(self) -> bool {
        matches!(self, Kind::List | Kind::Array)
    }

    /// Returns true for kinds a string can be converted into
    pub const fn is_primitive(self) -> bool {
        self.is_signed_integer()
            || self.is_unsigned_integer()
            || self.is_float()
            || matches!(self, Kind::Bool | Kind::String)
    }

    /// The name of this kind, spelled the way Rust spells the type where there is one.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Char => "char",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::String => "String",
            Kind::Unit => "()",
            Kind::Tuple => "tuple",
            Kind::Struct => "struct",
            Kind::List => "list",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Set => "set",
            Kind::Pointer => "pointer",
            Kind::Opaque => "opaque",
        }
    }
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
