use super::{Field, Shape};

/// Structural definition of a shape: what it contains, beyond its [`Kind`](super::Kind).
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Def {
    /// A value with no inner structure: numbers, booleans, strings
    Scalar,

    /// A record with named (or positional) fields
    Struct(StructDef),

    /// Something pointing to zero or one value of another shape
    Pointer(PointerDef),

    /// A growable sequence
    List(ListDef),

    /// A fixed-size sequence
    Array(ArrayDef),

    /// A key-value collection, or a set (whose value shape is `()`)
    Map(MapDef),

    /// Nothing is known about the inside of this value
    Opaque,
}

/// Fields of a struct, in declaration order
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct StructDef {
    /// all fields, in declaration order
    pub fields: &'static [Field],
}

impl StructDef {
    /// Creates a struct definition from its fields
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }
}

/// Definition of `Option<T>`, `Box<T>` and friends
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct PointerDef {
    /// shape of the pointee
    pub pointee: fn() -> &'static Shape,

    /// whether the pointer may point to nothing
    pub nullable: bool,
}

impl PointerDef {
    /// Creates a pointer definition
    pub const fn new(pointee: fn() -> &'static Shape, nullable: bool) -> Self {
        Self { pointee, nullable }
    }

    /// Returns the shape of the pointee
    pub fn pointee(&self) -> &'static Shape {
        (self.pointee)()
    }
}

/// Definition of a growable sequence
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct ListDef {
    /// shape of the items
    pub item: fn() -> &'static Shape,
}

impl ListDef {
    /// Creates a list definition
    pub const fn new(item: fn() -> &'static Shape) -> Self {
        Self { item }
    }
}

/// Definition of a fixed-size sequence
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct ArrayDef {
    /// shape of the items
    pub item: fn() -> &'static Shape,

    /// number of items
    pub len: usize,
}

impl ArrayDef {
    /// Creates an array definition
    pub const fn new(item: fn() -> &'static Shape, len: usize) -> Self {
        Self { item, len }
    }
}

/// Definition of a map or a set
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct MapDef {
    /// shape of the keys
    pub key: fn() -> &'static Shape,

    /// shape of the values (`()` for sets)
    pub value: fn() -> &'static Shape,
}

impl MapDef {
    /// Creates a map definition
    pub const fn new(key: fn() -> &'static Shape, value: fn() -> &'static Shape) -> Self {
        Self { key, value }
    }
}
