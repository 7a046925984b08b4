//! Parsing of `#[xmi(...)]` attributes.

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use syn::{Attribute, LitStr};

const ATTR: &str = "xmi";

/// Case conversion applied to field names (structs) or variant names (enums).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    CamelCase,
    SnakeCase,
    PascalCase,
    KebabCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "camelCase" => Ok(RenameRule::CamelCase),
            "snake_case" => Ok(RenameRule::SnakeCase),
            "PascalCase" => Ok(RenameRule::PascalCase),
            "kebab-case" => Ok(RenameRule::KebabCase),
            "SCREAMING_SNAKE_CASE" => Ok(RenameRule::ScreamingSnakeCase),
            other => Err(syn::Error::new(
                lit.span(),
                format!(
                    "unknown rename_all rule `{other}`; expected one of camelCase, snake_case, \
                     PascalCase, kebab-case, SCREAMING_SNAKE_CASE"
                ),
            )),
        }
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            RenameRule::CamelCase => name.to_lower_camel_case(),
            RenameRule::SnakeCase => name.to_snake_case(),
            RenameRule::PascalCase => name.to_upper_camel_case(),
            RenameRule::KebabCase => name.to_kebab_case(),
            RenameRule::ScreamingSnakeCase => name.to_shouty_snake_case(),
        }
    }
}

/// Attributes on the struct or enum itself.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    /// Overrides the generated `xmi_type_name`.
    pub name: Option<String>,
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let s: LitStr = meta.value()?.parse()?;
                    parsed.name = Some(s.value());
                    Ok(())
                } else if meta.path.is_ident("rename_all") {
                    let s: LitStr = meta.value()?.parse()?;
                    parsed.rename_all = Some(RenameRule::parse(&s)?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported xmi container attribute"))
                }
            })?;
        }
        Ok(parsed)
    }
}

/// Attributes on a struct field or enum variant field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    pub rename: Option<String>,
    pub skip: bool,
    /// Encode this field through the record's super encoder.
    pub base: bool,
}

impl FieldAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let s: LitStr = meta.value()?.parse()?;
                    parsed.rename = Some(s.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    parsed.skip = true;
                    Ok(())
                } else if meta.path.is_ident("base") {
                    parsed.base = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported xmi field attribute"))
                }
            })?;

            if parsed.skip && parsed.base {
                return Err(syn::Error::new_spanned(
                    attr,
                    "a field cannot be both `skip` and `base`",
                ));
            }
            if parsed.base && parsed.rename.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "a `base` field is always stored under `super` and cannot be renamed",
                ));
            }
        }
        Ok(parsed)
    }
}

/// Attributes on an enum variant.
#[derive(Debug, Default)]
pub struct VariantAttrs {
    pub rename: Option<String>,
}

impl VariantAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let s: LitStr = meta.value()?.parse()?;
                    parsed.rename = Some(s.value());
                    Ok(())
                } else {
                    Err(meta.error("unsupported xmi variant attribute"))
                }
            })?;
        }
        Ok(parsed)
    }
}
