#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub use unsynn::*;

/// Parses tokens until `C` is found, treating `<...>` as a single tree so that commas inside
/// generic arguments don't end the match.
pub type VerbatimUntil<C> = Many<Cons<Except<C>, AngleTokenTree>>;

keyword! {
    /// The "pub" keyword.
    pub KPub = "pub";
    /// The "struct" keyword.
    pub KStruct = "struct";
    /// The "enum" keyword.
    pub KEnum = "enum";
    /// The "where" keyword.
    pub KWhere = "where";
    /// The "doc" keyword.
    pub KDoc = "doc";
    /// The "url" keyword, which opens our field attributes.
    pub KUrl = "url";
    /// The "flatten" keyword.
    pub KFlatten = "flatten";
}

unsynn! {
    /// Parses either a `TokenTree` or `<...>` grouping (which is not a [`Group`] as far as
    /// proc-macros are concerned).
    #[derive(Clone)]
    pub struct AngleTokenTree(
        #[allow(clippy::type_complexity)] // look,
        pub Either<Cons<Lt, Vec<Cons<Except<Gt>, AngleTokenTree>>, Gt>, TokenTree>,
    );

    /// Visibility of an item or a field
    pub enum Vis {
        /// `pub(crate)`, `pub(super)`, `pub(in some::path)`
        PubRestricted(Cons<KPub, ParenthesisGroup>),
        /// `pub`
        Pub(KPub),
    }

    /// An attribute, like `#[url("name,seen")]` or `/// doc comment`
    pub struct Attribute {
        /// The `#`
        pub _pound: Pound,
        /// What's between the brackets
        pub body: BracketGroupContaining<AttributeInner>,
    }

    /// The inside of an attribute
    pub enum AttributeInner {
        /// `url(...)`
        Url(UrlAttr),
        /// `doc = "..."`
        Doc(DocInner),
        /// Any other attribute, which we ignore
        Any(Vec<TokenTree>),
    }

    /// `url(...)`
    pub struct UrlAttr {
        /// The `url` keyword
        pub _url: KUrl,
        /// Comma-separated items inside the parentheses
        pub inner: ParenthesisGroupContaining<CommaDelimitedVec<UrlInner>>,
    }

    /// One item of a `#[url(...)]` attribute
    pub enum UrlInner {
        /// `flatten`: the field is an embedded record
        Flatten(KFlatten),
        /// `"name,opt1,opt2"`: the raw annotation
        Tag(LiteralString),
        /// Anything else, which is rejected by the emitter
        Other(Many<Cons<Except<Comma>, TokenTree>>),
    }

    /// `doc = "..."`, or `doc = r"..."` as `quote!` writes doc comments
    pub struct DocInner {
        /// The `doc` keyword
        pub _kw_doc: KDoc,
        /// The `=`
        pub _eq: Assign,
        /// The doc line, as a plain or raw string literal
        pub value: Literal,
    }

    /// Generic parameters, kept verbatim
    pub struct GenericParams {
        /// Opening angle bracket
        pub _lt: Lt,
        /// Everything up to the matching closing bracket
        pub params: Vec<Cons<Except<Gt>, AngleTokenTree>>,
        /// Closing angle bracket
        pub _gt: Gt,
    }

    /// `where ...` clauses, kept verbatim
    pub struct WhereClauses {
        /// The `where` keyword
        pub _kw_where: KWhere,
        /// The clauses themselves
        pub clauses: VerbatimUntil<Either<BraceGroup, Semicolon>>,
    }

    /// A field of a struct with named fields
    pub struct StructField {
        /// Attributes, including doc comments
        pub attributes: Vec<Attribute>,
        /// Visibility of the field
        pub vis: Option<Vis>,
        /// Name of the field
        pub name: Ident,
        /// The `:`
        pub _colon: Colon,
        /// Type of the field
        pub typ: VerbatimUntil<Comma>,
    }

    /// A field of a tuple struct
    pub struct TupleField {
        /// Attributes, including doc comments
        pub attributes: Vec<Attribute>,
        /// Visibility of the field
        pub vis: Option<Vis>,
        /// Type of the field
        pub typ: VerbatimUntil<Comma>,
    }

    /// The body of a struct
    pub enum StructKind {
        /// `struct Foo { a: T, b: U }`
        Struct {
            clauses: Option<WhereClauses>,
            fields: BraceGroupContaining<CommaDelimitedVec<StructField>>,
        },
        /// `struct Foo(T, U);`
        TupleStruct {
            fields: ParenthesisGroupContaining<CommaDelimitedVec<TupleField>>,
            clauses: Option<WhereClauses>,
            semi: Semicolon,
        },
        /// `struct Foo;`
        UnitStruct {
            clauses: Option<WhereClauses>,
            semi: Semicolon,
        },
    }

    /// A struct declaration
    pub struct Struct {
        /// Attributes on the struct
        pub attributes: Vec<Attribute>,
        /// Visibility of the struct
        pub _vis: Option<Vis>,
        /// The `struct` keyword
        pub _kw_struct: KStruct,
        /// Name of the struct
        pub name: Ident,
        /// Generic parameters, if any
        pub generics: Option<GenericParams>,
        /// Body of the struct
        pub kind: StructKind,
    }

    /// An enum declaration. Only the name is looked at.
    pub struct Enum {
        /// Attributes on the enum
        pub attributes: Vec<Attribute>,
        /// Visibility of the enum
        pub _vis: Option<Vis>,
        /// The `enum` keyword
        pub _kw_enum: KEnum,
        /// Name of the enum
        pub name: Ident,
        /// Everything else
        pub rest: Vec<TokenTree>,
    }

    /// Any declaration `#[derive(Queryable)]` may be applied to
    pub enum AdtDecl {
        /// A struct
        Struct(Struct),
        /// An enum
        Enum(Enum),
    }
}

impl Vis {
    /// Whether this is plain `pub`, i.e. visible from outside the crate
    pub fn is_public(&self) -> bool {
        matches!(self, Vis::Pub(_))
    }
}

impl Attribute {
    /// Returns the `url(...)` items of this attribute, if it is one
    pub fn url_items(&self) -> Option<impl Iterator<Item = &UrlInner>> {
        match &self.body.content {
            AttributeInner::Url(url) => Some(url.inner.content.0.iter().map(|d| &d.value)),
            _ => None,
        }
    }

    /// Returns the doc line of this attribute, if it is one
    pub fn doc_line(&self) -> Option<String> {
        match &self.body.content {
            AttributeInner::Doc(doc) => Some(unquote(&doc.value.to_string())),
            _ => None,
        }
    }
}

/// Turns the source text of a string literal (`"a\"b"`, `r#"a"b"#`) into its value.
pub fn unquote(literal: &str) -> String {
    let literal = literal.trim();

    if let Some(raw) = literal.strip_prefix('r') {
        let hashes = raw.len() - raw.trim_start_matches('#').len();
        let inner = &raw[hashes..raw.len() - hashes];
        return inner
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(inner)
            .to_string();
    }

    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse_struct(input: TokenStream) -> Struct {
        let mut it = input.to_token_iter();
        match it.parse::<Cons<AdtDecl, EndOfStream>>() {
            Ok(decl) => match decl.first {
                AdtDecl::Struct(s) => s,
                AdtDecl::Enum(_) => panic!("expected a struct"),
            },
            Err(err) => panic!("could not parse: {err}"),
        }
    }

    #[test]
    fn named_fields_with_attributes() {
        let parsed = parse_struct(quote! {
            /// Query arguments for a listing
            pub struct Listing {
                #[url("style,seen")]
                pub style_set: bool,
                /// How many items
                pub limit: Option<u32>,
                offset: u64,
            }
        });

        assert_eq!(parsed.name.to_string(), "Listing");
        assert!(parsed.generics.is_none());

        let StructKind::Struct { fields, .. } = &parsed.kind else {
            panic!("expected named fields");
        };
        let fields = &fields.content.0;
        assert_eq!(fields.len(), 3);

        let style = &fields[0].value;
        assert_eq!(style.name.to_string(), "style_set");
        assert!(style.vis.as_ref().is_some_and(Vis::is_public));
        let items: Vec<_> = style.attributes[0].url_items().expect("url attr").collect();
        assert_eq!(items.len(), 1);
        match items[0] {
            UrlInner::Tag(lit) => assert_eq!(unquote(&lit.tokens_to_string()), "style,seen"),
            _ => panic!("expected a tag"),
        }

        let limit = &fields[1].value;
        assert_eq!(limit.attributes[0].doc_line().as_deref(), Some(" How many items"));
        assert_eq!(limit.typ.tokens_to_string().replace(' ', ""), "Option<u32>");

        assert!(fields[2].value.vis.is_none());
    }

    #[test]
    fn generic_arguments_do_not_split_fields() {
        let parsed = parse_struct(quote! {
            struct Lookup {
                pub table: std::collections::HashMap<String, Vec<u8>>,
                pub other: bool,
            }
        });
        let StructKind::Struct { fields, .. } = &parsed.kind else {
            panic!("expected named fields");
        };
        assert_eq!(fields.content.0.len(), 2);
    }

    #[test]
    fn restricted_visibility_is_not_public() {
        let parsed = parse_struct(quote! {
            struct Inner {
                pub(crate) hidden: i32,
            }
        });
        let StructKind::Struct { fields, .. } = &parsed.kind else {
            panic!("expected named fields");
        };
        let vis = fields.content.0[0].value.vis.as_ref().expect("has a visibility");
        assert!(!vis.is_public());
    }

    #[test]
    fn tuple_and_unit_structs() {
        let parsed = parse_struct(quote! {
            pub struct Pair(pub u8, #[url(flatten)] pub Inner);
        });
        let StructKind::TupleStruct { fields, .. } = &parsed.kind else {
            panic!("expected a tuple struct");
        };
        let fields = &fields.content.0;
        assert_eq!(fields.len(), 2);
        let items: Vec<_> = fields[1].value.attributes[0]
            .url_items()
            .expect("url attr")
            .collect();
        assert!(matches!(items[0], UrlInner::Flatten(_)));

        let parsed = parse_struct(quote! { struct Nothing; });
        assert!(matches!(parsed.kind, StructKind::UnitStruct { .. }));
    }

    #[test]
    fn generics_are_captured() {
        let parsed = parse_struct(quote! {
            struct Wrapper<T: Clone> {
                pub inner: T,
            }
        });
        assert!(parsed.generics.is_some());
    }

    #[test]
    fn enums_parse_as_enums() {
        let tokens = quote! { enum Color { Red, Green } };
        let mut it = tokens.to_token_iter();
        let decl = it.parse::<AdtDecl>().expect("should parse");
        assert!(matches!(decl, AdtDecl::Enum(e) if e.name == "Color"));
    }

    #[test]
    fn raw_and_plain_doc_strings_are_both_docs() {
        let tokens: TokenStream = r###"
            struct Documented {
                #[doc = r" raw line"]
                #[doc = r#" raw "quoted" line"#]
                #[doc = " plain line"]
                pub x: u8,
            }
        "###
        .parse()
        .expect("valid tokens");
        let parsed = parse_struct(tokens);

        let StructKind::Struct { fields, .. } = &parsed.kind else {
            panic!("expected named fields");
        };
        let lines: Vec<_> = fields.content.0[0]
            .value
            .attributes
            .iter()
            .filter_map(Attribute::doc_line)
            .collect();
        assert_eq!(lines, [" raw line", r#" raw "quoted" line"#, " plain line"]);
    }

    #[test]
    fn unquote_handles_escapes_and_raw_strings() {
        assert_eq!(unquote(r#""plain""#), "plain");
        assert_eq!(unquote(r#""a\"b""#), "a\"b");
        assert_eq!(unquote(r##"r#"x"y"#"##), "x\"y");
        assert_eq!(unquote(r#""-""#), "-");
    }
}
