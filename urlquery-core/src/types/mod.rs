//! Shapes, kinds and field descriptors

use bitflags::bitflags;

mod kind;
pub use kind::*;

mod def;
pub use def::*;

mod field;
pub use field::*;

/// Schema for reflection of a type
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct Shape {
    /// Identifier for a type: the type's name without generic parameters.
    pub type_identifier: &'static str,

    /// What kind of value this is, which decides how a string converts into it.
    pub kind: Kind,

    /// Structural definition: fields of a struct, pointee of a pointer, etc.
    pub def: Def,

    /// Flags, see [`ShapeFlags`]
    pub flags: ShapeFlags,
}

impl Shape {
    /// Returns a builder for a shape
    pub const fn builder() -> ShapeBuilder {
        ShapeBuilder::new()
    }

    /// Fields of a struct shape, in declaration order. Empty for anything else.
    pub fn fields(&self) -> &'static [Field] {
        match self.def {
            Def::Struct(sd) => sd.fields,
            _ => &[],
        }
    }

    /// Finds a field by its declared name
    pub fn field_by_name(&self, name: &str) -> Option<&'static Field> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Whether values of this shape decode themselves through
    /// [`DecodeValues`](crate::DecodeValues)
    pub fn is_decoder(&self) -> bool {
        self.flags.contains(ShapeFlags::DECODER)
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.type_identifier == other.type_identifier && self.kind == other.kind
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.type_identifier)
    }
}

bitflags! {
    /// Flags describing a shape as a whole
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShapeFlags: u32 {
        /// An empty set of flags
        const EMPTY = 0;

        /// Values of this shape implement [`DecodeValues`](crate::DecodeValues) and hand out
        /// [`Slot::Custom`](crate::Slot::Custom).
        const DECODER = 1 << 0;
    }
}

/// Builder for [`Shape`]
pub struct ShapeBuilder {
    type_identifier: Option<&'static str>,
    kind: Option<Kind>,
    def: Def,
    flags: ShapeFlags,
}

impl ShapeBuilder {
    /// Creates a new ShapeBuilder
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self {
            type_identifier: None,
            kind: None,
            def: Def::Scalar,
            flags: ShapeFlags::EMPTY,
        }
    }

    /// Sets the type identifier
    pub const fn type_identifier(mut self, type_identifier: &'static str) -> Self {
        self.type_identifier = Some(type_identifier);
        self
    }

    /// Sets the kind
    pub const fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the definition. Defaults to [`Def::Scalar`].
    pub const fn def(mut self, def: Def) -> Self {
        self.def = def;
        self
    }

    /// Sets the flags
    pub const fn flags(mut self, flags: ShapeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Builds the shape
    pub const fn build(self) -> Shape {
        Shape {
            type_identifier: match self.type_identifier {
                Some(type_identifier) => type_identifier,
                None => panic!("Shape::build called without a type identifier"),
            },
            kind: match self.kind {
                Some(kind) => kind,
                None => panic!("Shape::build called without a kind"),
            },
            def: self.def,
            flags: self.flags,
        }
    }
}
