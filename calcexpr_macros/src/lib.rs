use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat, PatType, ReturnType, Type};

fn is_f64(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path.qself.is_none() && type_path.path.is_ident("f64"),
        _ => false,
    }
}

fn formatted_arg_error_msg(arg_pos: usize, fn_name: &str) -> String {
    format!(
        "Expected argument {} of builtin `{}` to be a named f64 parameter",
        arg_pos, fn_name
    )
}

/// Turns a plain numeric function into a registry entry constructor.
///
/// ```ignore
/// #[builtin]
/// fn max(a: f64, b: f64) -> f64 {
///     a.max(b)
/// }
/// ```
///
/// expands to a `fn max() -> crate::functions::Builtin` whose entry is named
/// `"max"`, has arity 2 and reads its operands positionally from `&[f64]`.
/// `Builtin::call` checks the argument count before running it, so the
/// generated body indexes the slice directly.
#[proc_macro_attribute]
pub fn builtin(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    match expand_builtin(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand_builtin(input: &ItemFn) -> syn::Result<TokenStream2> {
    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_attrs = &input.attrs;
    let fn_body = &input.block;
    let name_str = fn_name.to_string();

    match &input.sig.output {
        ReturnType::Type(_, ty) if is_f64(ty) => {}
        output => {
            return Err(syn::Error::new_spanned(
                output,
                format!("builtin `{}` must return f64", name_str),
            ))
        }
    }

    let mut arg_extractions = Vec::new();

    for (i, arg) in input.sig.inputs.iter().enumerate() {
        let FnArg::Typed(PatType { pat, ty, .. }) = arg else {
            return Err(syn::Error::new_spanned(
                arg,
                formatted_arg_error_msg(i, &name_str),
            ));
        };

        let arg_name = match &**pat {
            Pat::Ident(ident) if is_f64(ty) => &ident.ident,
            _ => {
                return Err(syn::Error::new_spanned(
                    arg,
                    formatted_arg_error_msg(i, &name_str),
                ))
            }
        };

        arg_extractions.push(quote! {
            let #arg_name: f64 = args[#i];
        });
    }

    let arity = arg_extractions.len();

    Ok(quote! {
        #(#fn_attrs)*
        #fn_vis fn #fn_name() -> crate::functions::Builtin {
            fn call(args: &[f64]) -> f64 {
                #(#arg_extractions)*

                #fn_body
            }

            crate::functions::Builtin::new(#name_str, #arity, call)
        }
    })
}
