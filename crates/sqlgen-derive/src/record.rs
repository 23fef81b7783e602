use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, Generics, Ident, LitStr, Path, ext::IdentExt, parse_quote};

///
/// RecordArgs
/// Parsed `#[derive(Record)]` input.
///

#[derive(FromDeriveInput)]
#[darling(attributes(sqlgen), supports(struct_named))]
struct RecordArgs {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, RecordField>,

    #[darling(default, rename = "crate")]
    crate_path: Option<Path>,
}

///
/// RecordField
///

#[derive(FromField)]
struct RecordField {
    ident: Option<Ident>,
}

impl RecordField {
    // Declared name without any `r#` prefix.
    fn name(&self) -> Option<LitStr> {
        self.ident
            .as_ref()
            .map(|ident| LitStr::new(&ident.unraw().to_string(), ident.span()))
    }
}

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    // Phase 1: parse inputs.
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };
    let args = match RecordArgs::from_derive_input(&input) {
        Ok(args) => args,
        Err(err) => return err.write_errors(),
    };

    // Phase 2: collect field names in declaration order.
    let field_names: Vec<LitStr> = match &args.data {
        Data::Struct(fields) => fields.iter().filter_map(RecordField::name).collect(),
        Data::Enum(_) => {
            return Error::new_spanned(
                &args.ident,
                "Record can only be derived for structs with named fields",
            )
            .to_compile_error();
        }
    };

    // Phase 3: emit impls.
    let crate_path = args
        .crate_path
        .unwrap_or_else(|| parse_quote!(::sqlgen));
    let ident = &args.ident;
    let record_name = LitStr::new(&ident.unraw().to_string(), ident.span());
    let (impl_generics, ty_generics, where_clause) = args.generics.split_for_impl();

    quote! {
        impl #impl_generics #crate_path::traits::Reflect for #ident #ty_generics #where_clause {
            fn kind() -> #crate_path::model::kind::Kind {
                #crate_path::model::kind::Kind::Record(
                    <Self as #crate_path::traits::Record>::MODEL,
                )
            }
        }

        impl #impl_generics #crate_path::traits::Record for #ident #ty_generics #where_clause {
            const MODEL: &'static #crate_path::model::record::RecordModel =
                &#crate_path::model::record::RecordModel {
                    name: #record_name,
                    fields: &[
                        #( #crate_path::model::field::FieldModel { name: #field_names } ),*
                    ],
                };
        }
    }
}
