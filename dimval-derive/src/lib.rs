//! Derive macro implementation used by `dimval-core`.
//!
//! `dimval-derive` is an implementation detail of this workspace. The `Family` derive expands in
//! terms of `crate::Family`, `crate::NamedFamily` and `crate::Unit`, so it is intended to be used
//! by `dimval-core` itself.
//!
//! Most users should depend on `dimval` instead and use the predefined families.
//!
//! # Generated impls
//!
//! For a family marker type `MyFamily`, the derive implements:
//!
//! - `crate::Family for MyFamily`
//! - `crate::NamedFamily for MyFamily`, with a lazily created standard unit
//! - `crate::AbsoluteFamily for MyFamily` when the `absolute` flag is present
//!
//! # Attributes
//!
//! The derive reads a required `#[family(...)]` attribute:
//!
//! - `name = "Length"`: family name (defaults to the type name)
//! - `dimensions = "kg.m/s2"`: SI dimension string, checked at compile time
//! - `unit = "newton"`: name of the standard unit
//! - `symbol = "N"`: abbreviation of the standard unit
//! - `absolute`: the family also has Absolute values

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitStr, Token,
};

/// Order of the base dimensions in `crate::Dimensions`.
const BASE_SYMBOLS: [&str; 9] = ["rad", "sr", "kg", "m", "s", "A", "K", "mol", "cd"];

/// Derive `crate::Family` and `crate::NamedFamily` (plus `crate::AbsoluteFamily` on request).
///
/// The derive must be paired with a `#[family(...)]` attribute providing `dimensions`, `unit`
/// and `symbol`.
///
/// This macro is intended for use by `dimval-core`.
#[proc_macro_derive(Family, attributes(family))]
pub fn derive_family(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_family_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_family_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let attr = parse_family_attribute(&input.attrs)?;

    let name = attr
        .name
        .as_ref()
        .map(LitStr::value)
        .unwrap_or_else(|| ident.to_string());
    let exponents: Vec<i8> = parse_dimensions(&attr.dimensions.value())
        .map_err(|reason| syn::Error::new(attr.dimensions.span(), reason))?
        .to_vec();
    let unit = &attr.unit;
    let symbol = &attr.symbol;

    let absolute = if attr.absolute {
        quote! { impl crate::AbsoluteFamily for #ident {} }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl crate::Family for #ident {
            const NAME: &'static str = #name;
        }

        impl crate::NamedFamily for #ident {
            const DIMENSIONS: crate::Dimensions = crate::Dimensions::new([#(#exponents),*]);

            fn standard_unit() -> crate::Unit<Self> {
                static STANDARD: crate::__private::Lazy<crate::Unit<#ident>> =
                    crate::__private::Lazy::new(|| {
                        crate::Unit::<#ident>::standard_for_family(#unit, #symbol)
                    });
                ::core::clone::Clone::clone(&*STANDARD)
            }
        }

        #absolute
    })
}

/// Parsed contents of the `#[family(...)]` attribute.
struct FamilyAttribute {
    name: Option<LitStr>,
    dimensions: LitStr,
    unit: LitStr,
    symbol: LitStr,
    absolute: bool,
}

impl Parse for FamilyAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut dimensions: Option<LitStr> = None;
        let mut unit: Option<LitStr> = None;
        let mut symbol: Option<LitStr> = None;
        let mut absolute = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "absolute" => {
                    absolute = true;
                }
                key @ ("name" | "dimensions" | "unit" | "symbol") => {
                    input.parse::<Token![=]>()?;
                    let value: LitStr = input.parse()?;
                    match key {
                        "name" => name = Some(value),
                        "dimensions" => dimensions = Some(value),
                        "unit" => unit = Some(value),
                        _ => symbol = Some(value),
                    }
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimensions = dimensions.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimensions`")
        })?;
        let unit = unit
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `unit`"))?;
        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        Ok(FamilyAttribute {
            name,
            dimensions,
            unit,
            symbol,
            absolute,
        })
    }
}

fn parse_family_attribute(attrs: &[Attribute]) -> syn::Result<FamilyAttribute> {
    for attr in attrs {
        if attr.path().is_ident("family") {
            return attr.parse_args::<FamilyAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[family(...)] attribute",
    ))
}

/// Parses `kg.m/s2`-style strings into exponents, in `BASE_SYMBOLS` order.
fn parse_dimensions(text: &str) -> Result<[i8; 9], String> {
    let mut parts = text.trim().split('/');
    let mut exponents = parse_part(parts.next().unwrap_or_default())?;
    if let Some(denominator) = parts.next() {
        if denominator.trim().is_empty() {
            return Err(format!("invalid dimensions `{}`: empty denominator", text));
        }
        for (slot, exp) in exponents.iter_mut().zip(parse_part(denominator)?) {
            *slot -= exp;
        }
    }
    if parts.next().is_some() {
        return Err(format!("invalid dimensions `{}`: more than one `/`", text));
    }
    Ok(exponents)
}

fn parse_part(part: &str) -> Result<[i8; 9], String> {
    let mut exponents = [0i8; 9];
    let mut rest = part.trim();
    if rest.is_empty() || rest == "1" {
        return Ok(exponents);
    }

    while !rest.is_empty() {
        rest = rest.strip_prefix('.').unwrap_or(rest);
        // Longest symbol first: `mol` before `m`, `sr` before `s`.
        let (index, symbol) = BASE_SYMBOLS
            .iter()
            .enumerate()
            .filter(|(_, symbol)| rest.starts_with(**symbol))
            .max_by_key(|(_, symbol)| symbol.len())
            .ok_or_else(|| format!("unknown base dimension at `{}`", rest))?;
        rest = rest[symbol.len()..].strip_prefix('^').unwrap_or(&rest[symbol.len()..]);

        let end = rest
            .char_indices()
            .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && *c == '-')))
            .map_or(rest.len(), |(i, _)| i);
        let exponent = match &rest[..end] {
            "" => 1,
            "-" => return Err("dangling minus sign".to_string()),
            digits => digits
                .parse::<i8>()
                .map_err(|_| format!("exponent `{}` out of range", digits))?,
        };
        exponents[index] += exponent;
        rest = &rest[end..];
    }
    Ok(exponents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_family_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[family(name = "Force", dimensions = "kg.m/s2", unit = "newton", symbol = "N")]
            pub enum Force {}
        };

        let attr = parse_family_attribute(&input.attrs).unwrap();
        assert_eq!(attr.name.unwrap().value(), "Force");
        assert_eq!(attr.symbol.value(), "N");
        assert!(!attr.absolute);
    }

    #[test]
    fn test_parse_family_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum Force {}
        };

        let err = parse_family_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[family(...)] attribute"));
    }

    #[test]
    fn test_parse_family_attribute_missing_fields() {
        let cases = [
            (quote! { unit = "meter", symbol = "m" }, "dimensions"),
            (quote! { dimensions = "m", symbol = "m" }, "unit"),
            (quote! { dimensions = "m", unit = "meter" }, "symbol"),
        ];
        for (tokens, field) in cases {
            let err = syn::parse2::<FamilyAttribute>(tokens).err().unwrap();
            assert!(err
                .to_string()
                .contains(&format!("missing required attribute `{}`", field)));
        }
    }

    #[test]
    fn test_parse_family_attribute_unknown_field() {
        let tokens = quote! { dimensions = "m", unit = "meter", symbol = "m", plural = "meters" };
        let err = syn::parse2::<FamilyAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `plural`"));
    }

    #[test]
    fn test_absolute_flag_without_trailing_comma() {
        let tokens = quote! { dimensions = "m", unit = "meter", symbol = "m", absolute };
        let attr: FamilyAttribute = syn::parse2(tokens).unwrap();
        assert!(attr.absolute);
        assert!(attr.name.is_none());
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("kg.m/s2").unwrap(), [0, 0, 1, 1, -2, 0, 0, 0, 0]);
        assert_eq!(parse_dimensions("1/s").unwrap(), [0, 0, 0, 0, -1, 0, 0, 0, 0]);
        assert_eq!(parse_dimensions("s-1").unwrap(), [0, 0, 0, 0, -1, 0, 0, 0, 0]);
        assert_eq!(parse_dimensions("mol/sr").unwrap(), [0, -1, 0, 0, 0, 0, 0, 1, 0]);
        assert_eq!(parse_dimensions("kg/m3").unwrap(), [0, 0, 1, -3, 0, 0, 0, 0, 0]);
        assert_eq!(parse_dimensions("1").unwrap(), [0; 9]);
        assert!(parse_dimensions("m/s/s").is_err());
        assert!(parse_dimensions("furlong").is_err());
        assert!(parse_dimensions("m-").is_err());
    }

    #[test]
    fn test_derive_family_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[family(dimensions = "m", unit = "meter", symbol = "m", absolute)]
            pub enum Length {}
        };

        let code = derive_family_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Family for Length"));
        assert!(code.contains("const NAME : & 'static str = \"Length\""));
        assert!(code.contains("impl crate :: NamedFamily for Length"));
        assert!(code.contains("impl crate :: AbsoluteFamily for Length"));
        assert!(code.contains("standard_for_family (\"meter\" , \"m\")"));
    }

    #[test]
    fn test_derive_family_impl_relative_only() {
        let input: DeriveInput = parse_quote! {
            #[family(name = "Mass", dimensions = "kg", unit = "kilogram", symbol = "kg")]
            pub enum Mass {}
        };

        let code = derive_family_impl(input).unwrap().to_string();
        assert!(!code.contains("AbsoluteFamily"));
    }

    #[test]
    fn test_derive_family_impl_bad_dimensions() {
        let input: DeriveInput = parse_quote! {
            #[family(dimensions = "kg.x", unit = "thing", symbol = "t")]
            pub enum Broken {}
        };

        let err = derive_family_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
        assert!(code.contains("unknown base dimension"));
    }
}
