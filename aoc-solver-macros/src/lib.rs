//! Derives that turn a unit struct into a registered day solver

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{parse_macro_input, Attribute, DeriveInput, Expr, ExprArray, ExprLit, Lit, LitInt};

/// Derive the `Solver` trait from `PartSolver<N>` impls
///
/// # Attributes
///
/// - `#[aoc_solver(max_parts = N)]`: required, number of parts (1-25)
///
/// The generated `solve_part` dispatches part `n` to
/// `<Self as PartSolver<n>>::solve` and returns `PartNotImplemented` for any
/// other part number.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = find_attr(&input.attrs, "aoc_solver", input)?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(lit.span(), "max_parts must be between 1 and 25"));
            }
            max_parts = Some(value);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
        }
    })?;

    let max_parts = max_parts
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required `max_parts` attribute"))?;

    let arms = (1..=max_parts).map(|n| {
        let n = Literal::u8_unsuffixed(n);
        quote! {
            #n => <Self as ::aoc_solver::PartSolver<#n>>::solve(shared),
        }
    });
    let max_parts = Literal::u8_unsuffixed(max_parts);

    Ok(quote! {
        impl ::aoc_solver::Solver for #name {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::std::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Submit a solver to the plugin collection so `register_all_plugins` finds it
///
/// `#[aoc(year = Y, day = D, tags = ["..", ..])]`: `year` and `day` (1-25)
/// are required, `tags` defaults to none. The type must be a unit struct
/// implementing `Solver`.
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2023, day = 14, tags = ["grid"])]
/// struct Dish;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = find_attr(&input.attrs, "aoc", input)?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(lit.span(), "day must be between 1 and 25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("tags") {
            let list: ExprArray = meta.value()?.parse()?;
            for elem in list.elems {
                match elem {
                    Expr::Lit(ExprLit { lit: Lit::Str(tag), .. }) => tags.push(tag.value()),
                    other => return Err(syn::Error::new_spanned(other, "tags must be string literals")),
                }
            }
        } else {
            return Err(meta.error("unsupported aoc attribute, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `year` attribute"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `day` attribute"))?;

    Ok(quote! {
        const _: fn() = || {
            fn registerable<T: ::aoc_solver::Solver + Sync + 'static>() {}
            registerable::<#name>();
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

fn find_attr<'a>(attrs: &'a [Attribute], name: &str, input: &DeriveInput) -> syn::Result<&'a Attribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident(name))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                format!("this derive requires a #[{}(...)] attribute", name),
            )
        })
}
