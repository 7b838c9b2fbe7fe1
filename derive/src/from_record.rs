use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Error, Field, Fields, GenericArgument, Ident, LitInt, LitStr,
    PathArguments, Result, Type, ext::IdentExt,
};

pub(crate) fn expand_from_record(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromRecord` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`FromRecord` may only be derived on structs with named fields.",
        ))?
    };

    let mut decoded = Vec::new();
    let mut skipped = Vec::new();

    for field in &fields.named {
        match FieldMetadata::parse(field)? {
            Some(metadata) => decoded.push(metadata),
            None => skipped.push(field.ident.clone().unwrap()),
        }
    }

    let descriptors = decoded.iter().map(|field| {
        let FieldMetadata {
            name,
            value_type,
            attribute:
                FieldAttribute {
                    size,
                    delimited,
                    narrow,
                },
        } = field;

        let label = LitStr::new(&name.unraw().to_string(), name.span());
        let delimited = delimited.then(|| quote! { .delimited() });
        let narrow = narrow.then(|| quote! { .narrow() });

        quote! {
            ::replay_header::sans::descriptor::FieldDescriptor::new(
                #label,
                <#value_type as ::replay_header::sans::value::FromValue>::KIND,
                #size,
            )
            #delimited
            #narrow
        }
    });

    // Initializers run in declaration order, matching the schema.
    let assignments = decoded.iter().map(|field| {
        let FieldMetadata {
            name, value_type, ..
        } = field;

        quote! {
            #name: values
                .next()
                .flatten()
                .and_then(<#value_type as ::replay_header::sans::value::FromValue>::from_value)
        }
    });

    let defaults = skipped.iter().map(|name| {
        quote! { #name: ::core::default::Default::default() }
    });

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::replay_header::avec::FromRecord
            for #name #type_generics #where_clause
        {
            const SCHEMA: &'static [::replay_header::sans::descriptor::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            fn from_record(record: ::replay_header::sans::record::Record) -> Self {
                #[allow(unused_mut, unused_variables)]
                let mut values = record.into_values();

                Self {
                    #(#assignments,)*
                    #(#defaults,)*
                }
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    value_type: Type,
    attribute: FieldAttribute,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let attribute = FieldAttribute::parse(attr)?;

        let Type::Path(path) = &field.ty else {
            Err(Error::new_spanned(
                &field.ty,
                "Field must have type `Option<T>`.",
            ))?
        };

        let Some(segment) = path.path.segments.last() else {
            Err(Error::new_spanned(
                &path.path.segments,
                "Field must have type `Option<T>`.",
            ))?
        };

        if segment.ident != "Option" {
            Err(Error::new_spanned(
                &segment.ident,
                "Field must have type `Option<T>`.",
            ))?
        }

        let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
            Err(Error::new_spanned(
                &segment.arguments,
                "Field of type `Option<T>` must have a generic parameter.",
            ))?
        };

        let Some(GenericArgument::Type(value_type)) = arguments.args.first() else {
            Err(Error::new_spanned(
                &arguments.args,
                "Generic argument of a field of type `Option<T>` must be a type.",
            ))?
        };

        Ok(Some(Self {
            name,
            value_type: value_type.clone(),
            attribute,
        }))
    }
}

#[derive(Debug)]
struct FieldAttribute {
    size: LitInt,
    delimited: bool,
    narrow: bool,
}

impl FieldAttribute {
    fn parse(attr: &Attribute) -> Result<Self> {
        let mut size = None;
        let mut delimited = false;
        let mut narrow = false;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("size") {
                let lit: LitInt = meta.value()?.parse()?;

                if lit.base10_parse::<usize>()? == 0 {
                    Err(Error::new_spanned(&lit, "Field size must be at least 1."))?;
                }

                size = Some(lit);
            } else if meta.path.is_ident("delimited") {
                delimited = true;
            } else if meta.path.is_ident("narrow") {
                narrow = true;
            } else {
                Err(meta.error("Expected `size`, `delimited` or `narrow`."))?;
            }

            Ok(())
        })?;

        let Some(size) = size else {
            Err(Error::new_spanned(attr, "Field must have a `size`."))?
        };

        if narrow && !delimited {
            Err(Error::new_spanned(
                attr,
                "Only `delimited` fields can be `narrow`.",
            ))?;
        }

        Ok(Self {
            size,
            delimited,
            narrow,
        })
    }
}
