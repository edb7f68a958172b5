//! Compile-time dependency injection macros for Cinegraph.
//!
//! - `#[derive(Context)]` makes each field of the root context extractable
//! - `#[derive(FromContext)]` builds a struct by resolving each field from
//!   the root context
//!
//! Generated code refers to `crate::FromRef` and `Context`, so both must be
//! in scope where the derives are used.

use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Returns the named fields of a struct, or a compile error naming the derive.
fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> Result<&'a Punctuated<Field, Comma>, syn::Error> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("{derive} can only be derived for structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{derive} can only be derived for structs"),
        )),
    }
}

/// Derive macro for the root DI context.
///
/// Generates `impl FromRef<Ctx> for FieldType` for every field, cloning the
/// field out of the context. All field types must implement `Clone` and be
/// distinct.
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub graph: Graph,
///     pub config: Arc<Config>,
/// }
///
/// // Generated:
/// // impl FromRef<Context> for Graph { ... }
/// // impl FromRef<Context> for Arc<Config> { ... }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let fields = match named_fields(&input, "Context") {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let impls = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;

        Some(quote! {
            impl #impl_generics crate::FromRef<#name #ty_generics> for #field_type #where_clause {
                fn from_ref(ctx: &#name #ty_generics) -> Self {
                    ctx.#field_name.clone()
                }
            }
        })
    });

    quote! { #(#impls)* }.into()
}

/// Derive macro for types built from the root `Context`.
///
/// Generates `impl FromRef<Context> for Type`, resolving each field with
/// `FromRef::from_ref`. Every field type must implement `FromRef<Context>`,
/// either as a context field or as another `FromContext` type.
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct MovieService {
///     movie_repo: MovieRepository, // itself FromContext
/// }
///
/// // Generated:
/// // impl FromRef<Context> for MovieService {
/// //     fn from_ref(ctx: &Context) -> Self {
/// //         Self { movie_repo: <MovieRepository as FromRef<Context>>::from_ref(ctx) }
/// //     }
/// // }
/// ```
#[proc_macro_derive(FromContext)]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let fields = match named_fields(&input, "FromContext") {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let field_inits = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;

        Some(quote! {
            #field_name: <#field_type as crate::FromRef<Context>>::from_ref(ctx)
        })
    });

    quote! {
        impl #impl_generics crate::FromRef<Context> for #name #ty_generics #where_clause {
            fn from_ref(ctx: &Context) -> Self {
                Self {
                    #(#field_inits),*
                }
            }
        }
    }
    .into()
}
