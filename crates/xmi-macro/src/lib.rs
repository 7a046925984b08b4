//! Derive macro for `helios_xmi::XmiEncode`.

mod attrs;
mod expand;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `helios_xmi::XmiEncode`.
///
/// - Structs with named fields become records. `Option` fields are left out
///   when `None`.
/// - A tuple struct with one field is encoded as that field.
/// - Other tuple structs become sequences.
/// - Unit structs encode as `nil`.
/// - Unit enum variants encode as their name; other variants become a record
///   holding the payload under the variant name.
///
/// # Attributes
///
/// ```ignore
/// #[derive(XmiEncode)]
/// #[xmi(name = "Person", rename_all = "camelCase")]
/// struct Employee {
///     #[xmi(base)]
///     person: Person,         // stored under `super`
///     #[xmi(rename = "id")]
///     employee_id: u32,
///     first_name: String,     // stored under `firstName`
///     #[xmi(skip)]
///     cache: Vec<u8>,
/// }
///
/// #[derive(XmiEncode)]
/// enum Status {
///     #[xmi(rename = "active")]
///     Active,
///     Suspended { reason: String },
/// }
/// ```
#[proc_macro_derive(XmiEncode, attributes(xmi))]
pub fn derive_xmi_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::derive_xmi_encode(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
