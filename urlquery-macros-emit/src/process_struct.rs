use proc_macro2::Literal;
use quote::quote;
use urlquery_macros_parse::*;

use crate::{PFieldAttrs, PName, parse_field_attributes};

/// A field, with everything the generated code needs to know about it
struct PField {
    name: PName,
    /// how to reach the field from `self`: an identifier or a tuple index
    member: TokenStream,
    typ: TokenStream,
    exported: bool,
    attrs: PFieldAttrs,
}

impl PField {
    fn named(field: &StructField) -> Self {
        let ident = &field.name;
        Self {
            name: PName::new(ident.to_string()),
            member: quote! { #ident },
            typ: field.typ.to_token_stream(),
            exported: field.vis.as_ref().is_some_and(Vis::is_public),
            attrs: parse_field_attributes(&field.attributes),
        }
    }

    fn positional(index: usize, field: &TupleField) -> Self {
        let member = Literal::usize_unsuffixed(index);
        Self {
            name: PName::new(index.to_string()),
            member: quote! { #member },
            typ: field.typ.to_token_stream(),
            exported: field.vis.as_ref().is_some_and(Vis::is_public),
            attrs: parse_field_attributes(&field.attributes),
        }
    }

    fn flags(&self) -> TokenStream {
        match (self.exported, self.attrs.embedded) {
            (true, true) => quote! {
                ::urlquery::FieldFlags::EXPORTED.union(::urlquery::FieldFlags::EMBEDDED)
            },
            (true, false) => quote! { ::urlquery::FieldFlags::EXPORTED },
            (false, true) => quote! { ::urlquery::FieldFlags::EMBEDDED },
            (false, false) => quote! { ::urlquery::FieldFlags::EMPTY },
        }
    }

    /// The `Field` descriptor expression
    fn descriptor(&self) -> TokenStream {
        let name = &self.name.declared;
        let typ = &self.typ;
        let flags = self.flags();
        let tag = self.attrs.tag.as_ref().map(|tag| quote! { .tag(#tag) });
        let doc = &self.attrs.doc;

        quote! {
            ::urlquery::Field::builder()
                .name(#name)
                .shape(|| <#typ as ::urlquery::Queryable>::SHAPE)
                .flags(#flags)
                #tag
                .doc(&[#(#doc),*])
                .build()
        }
    }

    /// The match arm handing out this field's slot. Fields that aren't `pub` are sealed.
    fn slot_arm(&self, index: usize) -> TokenStream {
        let index = Literal::usize_unsuffixed(index);
        let typ = &self.typ;
        if self.exported {
            let member = &self.member;
            quote! {
                #index => ::core::option::Option::Some(::urlquery::Queryable::slot(&mut self.#member))
            }
        } else {
            quote! {
                #index => ::core::option::Option::Some(
                    ::urlquery::Slot::Sealed(<#typ as ::urlquery::Queryable>::SHAPE)
                )
            }
        }
    }
}

/// Processes a struct to implement `Queryable` and `Record`
///
/// Example input:
/// ```rust,ignore
/// struct Listing {
///     #[url("style,seen")]
///     pub style_set: bool,
///     pub limit: u32,
/// }
/// ```
pub(crate) fn process_struct(parsed: Struct) -> TokenStream {
    let struct_name = &parsed.name;

    if parsed.generics.is_some() {
        let message = format!(
            "#[derive(Queryable)] does not support generic parameters (on `{struct_name}`)"
        );
        return quote! { ::core::compile_error!(#message); };
    }

    let fields: Vec<PField> = match &parsed.kind {
        StructKind::Struct { fields, .. } => fields
            .content
            .0
            .iter()
            .map(|field| PField::named(&field.value))
            .collect(),
        StructKind::TupleStruct { fields, .. } => fields
            .content
            .0
            .iter()
            .enumerate()
            .map(|(index, field)| PField::positional(index, &field.value))
            .collect(),
        StructKind::UnitStruct { .. } => Vec::new(),
    };

    let type_identifier = struct_name.to_string();
    let field_list = if fields.is_empty() {
        quote! { &[] }
    } else {
        let descriptors = fields.iter().map(PField::descriptor);
        quote! { &const { [#(#descriptors),*] } }
    };
    let slot_arms = fields
        .iter()
        .enumerate()
        .map(|(index, field)| field.slot_arm(index));

    quote! {
        #[automatically_derived]
        impl ::urlquery::Queryable for #struct_name {
            const SHAPE: &'static ::urlquery::Shape = &const {
                ::urlquery::Shape::builder()
                    .type_identifier(#type_identifier)
                    .kind(::urlquery::Kind::Struct)
                    .def(::urlquery::Def::Struct(::urlquery::StructDef::new(#field_list)))
                    .build()
            };

            #[inline]
            fn slot(&mut self) -> ::urlquery::Slot<'_> {
                ::urlquery::Slot::Record(self)
            }
        }

        #[automatically_derived]
        impl ::urlquery::Record for #struct_name {
            fn shape(&self) -> &'static ::urlquery::Shape {
                <Self as ::urlquery::Queryable>::SHAPE
            }

            #[allow(clippy::match_single_binding)]
            fn field_slot(&mut self, index: usize) -> ::core::option::Option<::urlquery::Slot<'_>> {
                match index {
                    #(#slot_arms,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
