use super::Shape;
use bitflags::bitflags;

/// Describes a field in a struct or tuple struct
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct Field {
    /// declared name of the field, without any `r#` prefix (for tuple structs, the 0-based
    /// index)
    pub name: &'static str,

    /// shape of the inner type
    pub shape: fn() -> &'static Shape,

    /// flags for the field (e.g. exported, embedded)
    pub flags: FieldFlags,

    /// raw annotation text, from `#[url("...")]`
    pub tag: Option<&'static str>,

    /// doc comments
    pub doc: &'static [&'static str],
}

impl Field {
    /// Returns the shape of the inner type
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }

    /// Returns a builder for Field
    pub const fn builder() -> FieldBuilder {
        FieldBuilder::new()
    }

    /// Whether the field was declared `pub`, and may thus be assigned by a decoder
    pub fn is_exported(&self) -> bool {
        self.flags.contains(FieldFlags::EXPORTED)
    }

    /// Whether the field was marked `#[url(flatten)]`
    pub fn is_embedded(&self) -> bool {
        self.flags.contains(FieldFlags::EMBEDDED)
    }
}

/// Builder for Field
pub struct FieldBuilder {
    name: Option<&'static str>,
    shape: Option<fn() -> &'static Shape>,
    flags: FieldFlags,
    tag: Option<&'static str>,
    doc: &'static [&'static str],
}

impl FieldBuilder {
    /// Creates a new FieldBuilder
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self {
            name: None,
            shape: None,
            flags: FieldFlags::EMPTY,
            tag: None,
            doc: &[],
        }
    }

    /// Sets the name for the Field
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the shape for the Field
    pub const fn shape(mut self, shape: fn() -> &'static Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Sets the flags for the Field
    pub const fn flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the raw annotation for the Field
    pub const fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Sets the doc comments for the Field
    pub const fn doc(mut self, doc: &'static [&'static str]) -> Self {
        self.doc = doc;
        self
    }

    /// Builds the Field
    pub const fn build(self) -> Field {
        Field {
            name: match self.name {
                Some(name) => name,
                None => panic!("Field::build called without a name"),
            },
            shape: match self.shape {
                Some(shape) => shape,
                None => panic!("Field::build called without a shape"),
            },
            flags: self.flags,
            tag: self.tag,
            doc: self.doc,
        }
    }
}

bitflags! {
    /// Flags that can be applied to fields to modify how decoders treat them
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u64 {
        /// An empty set of flags
        const EMPTY = 0;

        /// The field is declared `pub`. Decoders leave other fields alone.
        const EXPORTED = 1 << 0;

        /// The field is an embedded record (`#[url(flatten)]`), whose fields are meant to
        /// appear on the parent.
        const EMBEDDED = 1 << 1;
    }
}

impl Default for FieldFlags {
    #[inline(always)]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl core::fmt::Display for FieldFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let flags = [
            (FieldFlags::EXPORTED, "exported"),
            (FieldFlags::EMBEDDED, "embedded"),
        ];

        let mut is_first = true;
        for (flag, name) in flags {
            if self.contains(flag) {
                if !is_first {
                    write!(f, ", ")?;
                }
                is_first = false;
                write!(f, "{}", name)?;
            }
        }

        Ok(())
    }
}
