//! Code generation for `#[derive(XmiEncode)]`.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
    Data, DataEnum, DataStruct, DeriveInput, Field, Fields, GenericArgument, Ident, LitStr,
    Member, PathArguments, Type, parse_quote,
};

use crate::attrs::{ContainerAttrs, FieldAttrs, RenameRule, VariantAttrs};

pub fn derive_xmi_encode(input: DeriveInput) -> syn::Result<TokenStream> {
    let container = ContainerAttrs::from_attrs(&input.attrs)?;

    let body = match &input.data {
        Data::Struct(data) => encode_struct(data, container.rename_all)?,
        Data::Enum(data) => encode_enum(data, container.rename_all)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "XmiEncode cannot be derived for unions",
            ));
        }
    };

    let type_name = container.name.map(|name| {
        quote! {
            fn xmi_type_name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(#name)
            }
        }
    });

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::helios_xmi::XmiEncode));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let ident = &input.ident;

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::helios_xmi::XmiEncode for #ident #ty_generics #where_clause {
            fn encode(
                &self,
                encoder: &mut ::helios_xmi::Encoder<'_>,
            ) -> ::helios_xmi::Result<()> {
                #body
            }

            #type_name
        }
    })
}

/// `Option<_>` fields are encoded with `encode_if_present`.
fn is_option(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    type_path.qself.is_none()
        && type_path.path.segments.last().is_some_and(|segment| {
            segment.ident == "Option"
                && matches!(
                    &segment.arguments,
                    PathArguments::AngleBracketed(args)
                        if matches!(args.args.first(), Some(GenericArgument::Type(_)))
                )
        })
}

fn field_key(field: &Field, attrs: &FieldAttrs, rule: Option<RenameRule>) -> String {
    if let Some(rename) = &attrs.rename {
        return rename.clone();
    }
    let name = field
        .ident
        .as_ref()
        .map(|ident| ident.unraw().to_string())
        .unwrap_or_default();
    match rule {
        Some(rule) => rule.apply(&name),
        None => name,
    }
}

fn variant_key(ident: &Ident, attrs: &VariantAttrs, rule: Option<RenameRule>) -> String {
    if let Some(rename) = &attrs.rename {
        return rename.clone();
    }
    let name = ident.unraw().to_string();
    match rule {
        Some(rule) => rule.apply(&name),
        None => name,
    }
}

/// Statements writing named fields into the keyed container bound to `record`.
///
/// `access` turns a field into an expression of type `&FieldType`.
fn named_field_statements(
    fields: &[(&Field, FieldAttrs)],
    rule: Option<RenameRule>,
    record: &Ident,
    access: impl Fn(&Field) -> TokenStream,
) -> Vec<TokenStream> {
    fields
        .iter()
        .filter(|(_, attrs)| !attrs.skip)
        .map(|(field, attrs)| {
            let value = access(field);
            if attrs.base {
                quote! {
                    {
                        let mut base = #record.super_encoder();
                        ::helios_xmi::XmiEncode::encode(#value, &mut *base)?;
                    }
                }
            } else {
                let key = LitStr::new(&field_key(field, attrs, rule), proc_macro2::Span::call_site());
                if is_option(&field.ty) {
                    quote! {
                        #record.encode_if_present(#key, ::core::option::Option::as_ref(#value))?;
                    }
                } else {
                    quote! {
                        #record.encode(#key, #value)?;
                    }
                }
            }
        })
        .collect()
}

/// Rejects two kept named fields landing on the same record key.
///
/// A `base` field is stored under `super`.
fn reject_duplicate_keys(
    fields: &[(&Field, FieldAttrs)],
    rule: Option<RenameRule>,
) -> syn::Result<()> {
    let mut seen = HashSet::new();
    for (field, attrs) in fields.iter().filter(|(_, attrs)| !attrs.skip) {
        let key = if attrs.base {
            "super".to_string()
        } else {
            field_key(field, attrs, rule)
        };
        if !seen.insert(key.clone()) {
            return Err(syn::Error::new_spanned(
                field,
                format!("duplicate xmi key `{key}`"),
            ));
        }
    }
    Ok(())
}

fn parse_field_attrs(fields: &Fields) -> syn::Result<Vec<(&Field, FieldAttrs)>> {
    fields
        .iter()
        .map(|field| Ok((field, FieldAttrs::from_attrs(&field.attrs)?)))
        .collect()
}

fn reject_named_only_attrs(fields: &[(&Field, FieldAttrs)]) -> syn::Result<()> {
    for (field, attrs) in fields {
        if attrs.base || attrs.rename.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "`rename` and `base` apply to named fields only",
            ));
        }
    }
    Ok(())
}

fn encode_struct(data: &DataStruct, rule: Option<RenameRule>) -> syn::Result<TokenStream> {
    let fields = parse_field_attrs(&data.fields)?;

    match &data.fields {
        Fields::Named(_) => {
            reject_duplicate_keys(&fields, rule)?;
            let record = format_ident!("record");
            let statements = named_field_statements(&fields, rule, &record, |field| {
                let ident = &field.ident;
                quote!(&self.#ident)
            });
            if statements.is_empty() {
                return Ok(quote! {
                    encoder.keyed_container();
                    ::helios_xmi::Result::Ok(())
                });
            }
            Ok(quote! {
                let #record = encoder.keyed_container();
                #(#statements)*
                ::helios_xmi::Result::Ok(())
            })
        }
        Fields::Unnamed(_) => {
            reject_named_only_attrs(&fields)?;
            if let [(_, attrs)] = fields.as_slice()
                && !attrs.skip
            {
                return Ok(quote! {
                    ::helios_xmi::XmiEncode::encode(&self.0, encoder)
                });
            }

            let members: Vec<Member> = fields
                .iter()
                .enumerate()
                .filter(|(_, (_, attrs))| !attrs.skip)
                .map(|(index, _)| Member::from(index))
                .collect();
            if members.is_empty() {
                return Ok(quote! {
                    encoder.unkeyed_container();
                    ::helios_xmi::Result::Ok(())
                });
            }
            Ok(quote! {
                let sequence = encoder.unkeyed_container();
                #(sequence.encode(&self.#members)?;)*
                ::helios_xmi::Result::Ok(())
            })
        }
        Fields::Unit => Ok(quote! {
            encoder.single_value_container().encode_nil();
            ::helios_xmi::Result::Ok(())
        }),
    }
}

fn encode_enum(data: &DataEnum, rule: Option<RenameRule>) -> syn::Result<TokenStream> {
    if data.variants.is_empty() {
        return Ok(quote!(match *self {}));
    }

    let arms = data
        .variants
        .iter()
        .map(|variant| {
            let attrs = VariantAttrs::from_attrs(&variant.attrs)?;
            let ident = &variant.ident;
            let key = variant_key(ident, &attrs, rule);
            let fields = parse_field_attrs(&variant.fields)?;

            let arm = match &variant.fields {
                Fields::Unit => quote! {
                    Self::#ident => {
                        encoder.single_value_container().encode_str(#key);
                    }
                },
                Fields::Unnamed(_) if fields.is_empty() => quote! {
                    Self::#ident() => {
                        encoder.single_value_container().encode_str(#key);
                    }
                },
                Fields::Unnamed(_) => {
                    reject_named_only_attrs(&fields)?;
                    let bindings: Vec<Ident> = (0..fields.len())
                        .map(|index| format_ident!("__field{}", index))
                        .collect();
                    let patterns = bindings.iter().zip(&fields).map(|(binding, (_, attrs))| {
                        if attrs.skip {
                            quote!(_)
                        } else {
                            quote!(#binding)
                        }
                    });
                    let kept: Vec<&Ident> = bindings
                        .iter()
                        .zip(&fields)
                        .filter(|(_, (_, attrs))| !attrs.skip)
                        .map(|(binding, _)| binding)
                        .collect();

                    let body = if let ([binding], [_]) = (kept.as_slice(), fields.as_slice()) {
                        quote! {
                            encoder.keyed_container().encode(#key, #binding)?;
                        }
                    } else if kept.is_empty() {
                        quote! {
                            drop(encoder.keyed_container().nested_unkeyed_container(#key));
                        }
                    } else {
                        quote! {
                            let mut sequence = encoder.keyed_container().nested_unkeyed_container(#key);
                            #(sequence.encode(#kept)?;)*
                        }
                    };
                    quote! {
                        Self::#ident(#(#patterns),*) => {
                            #body
                        }
                    }
                }
                Fields::Named(_) => {
                    reject_duplicate_keys(&fields, None)?;
                    let record = format_ident!("record");
                    // Fields are bound under private names so they cannot shadow `encoder`.
                    let binding = |field: &Field| {
                        field
                            .ident
                            .as_ref()
                            .map(|ident| format_ident!("__field_{}", ident.unraw()))
                    };
                    let statements = named_field_statements(&fields, None, &record, |field| {
                        let binding = binding(field);
                        quote!(#binding)
                    });
                    let bound = fields
                        .iter()
                        .filter(|(_, attrs)| !attrs.skip)
                        .map(|(field, _)| {
                            let ident = &field.ident;
                            let binding = binding(field);
                            quote!(#ident: #binding)
                        });
                    let body = if statements.is_empty() {
                        quote! {
                            drop(encoder.keyed_container().nested_keyed_container(#key));
                        }
                    } else {
                        quote! {
                            let mut #record = encoder.keyed_container().nested_keyed_container(#key);
                            #(#statements)*
                        }
                    };
                    quote! {
                        Self::#ident { #(#bound,)* .. } => {
                            #body
                        }
                    }
                }
            };
            Ok(arm)
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        match self {
            #(#arms)*
        }
        ::helios_xmi::Result::Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: DeriveInput) -> String {
        derive_xmi_encode(input).unwrap().to_string()
    }

    #[test]
    fn test_option_detection() {
        assert!(is_option(&parse_quote!(Option<String>)));
        assert!(is_option(&parse_quote!(std::option::Option<u8>)));
        assert!(!is_option(&parse_quote!(Vec<Option<u8>>)));
        assert!(!is_option(&parse_quote!(String)));
    }

    #[test]
    fn test_named_struct_expansion() {
        let output = expand(parse_quote! {
            #[xmi(rename_all = "camelCase")]
            struct Patient {
                birth_date: String,
                nickname: Option<String>,
                #[xmi(skip)]
                cache: u8,
            }
        });
        assert!(output.contains("keyed_container"));
        assert!(output.contains("\"birthDate\""));
        assert!(output.contains("encode_if_present"));
        assert!(!output.contains("cache"));
    }

    #[test]
    fn test_generic_params_are_bounded() {
        let output = expand(parse_quote! {
            struct Wrapper<T>(T);
        });
        assert!(output.contains(":: helios_xmi :: XmiEncode for Wrapper < T >"));
        assert!(output.contains("T : :: helios_xmi :: XmiEncode"));
    }

    #[test]
    fn test_name_override() {
        let output = expand(parse_quote! {
            #[xmi(name = "Person")]
            struct Human;
        });
        assert!(output.contains("xmi_type_name"));
        assert!(output.contains("\"Person\""));
    }

    #[test]
    fn test_enum_variants() {
        let output = expand(parse_quote! {
            enum Shape {
                Empty,
                #[xmi(rename = "circle")]
                Circle(f64),
                Rect { w: f64, h: f64 },
            }
        });
        assert!(output.contains("encode_str (\"Empty\")"));
        assert!(output.contains("\"circle\""));
        assert!(output.contains("nested_keyed_container (\"Rect\")"));
    }

    #[test]
    fn test_union_is_rejected() {
        let err = derive_xmi_encode(parse_quote! {
            union Bits {
                a: u32,
                b: f32,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("unions"));
    }

    #[test]
    fn test_base_on_tuple_field_is_rejected() {
        let err = derive_xmi_encode(parse_quote! {
            struct Pair(#[xmi(base)] u8, u8);
        })
        .unwrap_err();
        assert!(err.to_string().contains("named fields only"));
    }

    #[test]
    fn test_second_base_field_is_rejected() {
        let err = derive_xmi_encode(parse_quote! {
            struct Both {
                #[xmi(base)]
                first: Parent,
                #[xmi(base)]
                second: Parent,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("duplicate xmi key `super`"));
    }

    #[test]
    fn test_colliding_field_keys_are_rejected() {
        let renamed = derive_xmi_encode(parse_quote! {
            struct Clash {
                #[xmi(base)]
                parent: Parent,
                #[xmi(rename = "super")]
                other: u8,
            }
        })
        .unwrap_err();
        assert!(renamed.to_string().contains("duplicate xmi key `super`"));

        let cased = derive_xmi_encode(parse_quote! {
            #[xmi(rename_all = "camelCase")]
            struct Clash {
                birth_date: u8,
                birthDate: u8,
            }
        })
        .unwrap_err();
        assert!(cased.to_string().contains("duplicate xmi key `birthDate`"));

        let variant = derive_xmi_encode(parse_quote! {
            enum Change {
                Moved {
                    #[xmi(rename = "to")]
                    from: u8,
                    to: u8,
                },
            }
        })
        .unwrap_err();
        assert!(variant.to_string().contains("duplicate xmi key `to`"));
    }

    #[test]
    fn test_skipped_field_does_not_collide() {
        let output = expand(parse_quote! {
            struct Cached {
                value: u8,
                #[xmi(skip, rename = "value")]
                stale: u8,
            }
        });
        assert!(output.contains("\"value\""));
    }
}
