//! `#[derive(Unit)]` for the unit markers of `sidim-core`.
//!
//! The expansion names `crate::Unit`, so the derive only works inside `sidim-core` (or a crate re-exporting the same
//! root API). Users get the finished catalog through `sidim`.
//!
//! ```text
//! #[derive(Unit)]
//! #[unit(symbol = "°C", dimension = TemperatureDim, scale = 1.0, offset = 273.15)]
//! pub struct DegreeCelsius;
//! ```
//!
//! expands to an `impl crate::Unit` carrying `Dim`, `SCALE` and `SYMBOL` (plus `OFFSET` when one is given), and a
//! `Display` impl that prints the symbol.
//!
//! Keys may appear in any order; each one at most once. `symbol`, `dimension` and `scale` are required.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Type};

/// Implements `crate::Unit` and `Display` for a unit marker described by `#[unit(...)]`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&input.generics, "unit markers cannot be generic"));
    }

    let name = &input.ident;
    let UnitSpec {
        symbol,
        dimension,
        scale,
        offset,
    } = UnitSpec::from_attrs(name, &input.attrs)?;

    let offset = offset.map(|offset| quote! { const OFFSET: f64 = #offset; });

    Ok(quote! {
        impl crate::Unit for #name {
            type Dim = #dimension;
            const SCALE: f64 = #scale;
            #offset
            const SYMBOL: &'static str = #symbol;
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<#name as crate::Unit>::SYMBOL)
            }
        }
    })
}

/// Contents of a `#[unit(...)]` attribute.
struct UnitSpec {
    symbol: LitStr,
    dimension: Type,
    scale: Expr,
    offset: Option<Expr>,
}

impl UnitSpec {
    fn from_attrs(name: &Ident, attrs: &[Attribute]) -> syn::Result<Self> {
        let attr = attrs
            .iter()
            .find(|attr| attr.path().is_ident("unit"))
            .ok_or_else(|| syn::Error::new_spanned(name, "missing #[unit(...)] attribute"))?;

        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Type> = None;
        let mut scale: Option<Expr> = None;
        let mut offset: Option<Expr> = None;

        attr.parse_nested_meta(|meta| {
            let key = meta.path.get_ident().map(|ident| ident.to_string()).unwrap_or_default();
            match key.as_str() {
                "symbol" => {
                    let value = meta.value()?.parse()?;
                    fill(&mut symbol, &meta, value)
                }
                "dimension" => {
                    let value = meta.value()?.parse()?;
                    fill(&mut dimension, &meta, value)
                }
                "scale" => {
                    let value = meta.value()?.parse()?;
                    fill(&mut scale, &meta, value)
                }
                "offset" => {
                    let value = meta.value()?.parse()?;
                    fill(&mut offset, &meta, value)
                }
                other => Err(meta.error(format!("unknown attribute `{other}`"))),
            }
        })?;

        let missing = |key: &str| syn::Error::new_spanned(attr, format!("missing required attribute `{key}`"));
        let symbol = symbol.ok_or_else(|| missing("symbol"))?;
        let dimension = dimension.ok_or_else(|| missing("dimension"))?;
        let scale = scale.ok_or_else(|| missing("scale"))?;

        if symbol.value().is_empty() {
            return Err(syn::Error::new_spanned(&symbol, "unit symbol must not be empty"));
        }

        Ok(UnitSpec {
            symbol,
            dimension,
            scale,
            offset,
        })
    }
}

fn fill<T>(slot: &mut Option<T>, meta: &ParseNestedMeta<'_>, value: T) -> syn::Result<()> {
    if slot.is_some() {
        let key = meta.path.get_ident().map(|ident| ident.to_string()).unwrap_or_default();
        return Err(meta.error(format!("duplicate attribute `{key}`")));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn spec(input: &DeriveInput) -> syn::Result<UnitSpec> {
        UnitSpec::from_attrs(&input.ident, &input.attrs)
    }

    fn error_of(input: &DeriveInput) -> String {
        match expand(input) {
            Ok(tokens) => panic!("expected an error, got `{tokens}`"),
            Err(err) => err.to_string(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Attribute parsing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn linear_unit_has_no_offset() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "nmi", dimension = LengthDim, scale = 1852.0)]
            pub struct NauticalMile;
        };
        let spec = spec(&input).unwrap();
        assert_eq!(spec.symbol.value(), "nmi");
        assert!(spec.offset.is_none());
    }

    #[test]
    fn keys_in_any_order_with_trailing_comma() {
        let input: DeriveInput = parse_quote! {
            #[unit(offset = 273.15, scale = 1.0, dimension = TemperatureDim, symbol = "°C",)]
            pub struct DegreeCelsius;
        };
        let spec = spec(&input).unwrap();
        assert_eq!(spec.symbol.value(), "°C");
        assert!(spec.offset.is_some());
    }

    #[test]
    fn generic_dimension_type_is_accepted() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "Ω", dimension = Dim<P1, P2, N3, N2, Z0, Z0, Z0>, scale = 1.0)]
            pub struct Ohm;
        };
        assert!(spec(&input).is_ok());
    }

    #[test]
    fn other_attributes_are_ignored() {
        let input: DeriveInput = parse_quote! {
            /// Tesla.
            #[derive(Clone, Copy)]
            #[unit(symbol = "T", dimension = MagneticFieldDim, scale = 1.0)]
            pub struct Tesla;
        };
        assert_eq!(spec(&input).unwrap().symbol.value(), "T");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rejected input
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn missing_attribute() {
        let input: DeriveInput = parse_quote! { pub struct Furlong; };
        assert!(error_of(&input).contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn missing_required_keys() {
        let cases: [(DeriveInput, &str); 3] = [
            (parse_quote! { #[unit(dimension = LengthDim, scale = 1.0)] struct U; }, "`symbol`"),
            (parse_quote! { #[unit(symbol = "u", scale = 1.0)] struct U; }, "`dimension`"),
            (parse_quote! { #[unit(symbol = "u", dimension = LengthDim)] struct U; }, "`scale`"),
        ];
        for (input, key) in &cases {
            let msg = error_of(input);
            assert!(msg.contains("missing required attribute") && msg.contains(key), "{msg}");
        }
    }

    #[test]
    fn empty_list_reports_first_missing_key() {
        let input: DeriveInput = parse_quote! { #[unit()] struct U; };
        assert!(error_of(&input).contains("missing required attribute `symbol`"));
    }

    #[test]
    fn unknown_key() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = LengthDim, ratio = 1.0)]
            pub struct Meter;
        };
        assert!(error_of(&input).contains("unknown attribute `ratio`"));
    }

    #[test]
    fn duplicate_key() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", symbol = "km", dimension = LengthDim, scale = 1.0)]
            pub struct Meter;
        };
        assert!(error_of(&input).contains("duplicate attribute `symbol`"));
    }

    #[test]
    fn empty_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "", dimension = LengthDim, scale = 1.0)]
            pub struct Nothing;
        };
        assert!(error_of(&input).contains("must not be empty"));
    }

    #[test]
    fn generic_marker() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "x", dimension = LengthDim, scale = 1.0)]
            pub struct Scaled<T>(T);
        };
        assert!(error_of(&input).contains("cannot be generic"));
    }

    #[test]
    fn errors_become_compile_error() {
        let input: DeriveInput = parse_quote! { pub struct Meter; };
        let err = expand(&input).err().unwrap();
        assert!(err.into_compile_error().to_string().contains("compile_error"));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Expansion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn expands_linear_unit() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "km", dimension = LengthDim, scale = 1000.0)]
            pub struct Kilometer;
        };
        let code = expand(&input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for Kilometer"));
        assert!(code.contains("type Dim = LengthDim"));
        assert!(code.contains("const SCALE : f64 = 1000.0"));
        assert!(code.contains("const SYMBOL : & 'static str = \"km\""));
        assert!(!code.contains("OFFSET"));
        assert!(code.contains("impl :: core :: fmt :: Display for Kilometer"));
    }

    #[test]
    fn expands_affine_unit_expressions_verbatim() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "°F", dimension = TemperatureDim, scale = 5.0 / 9.0, offset = 273.15 - 32.0 * 5.0 / 9.0)]
            pub struct DegreeFahrenheit;
        };
        let code = expand(&input).unwrap().to_string();
        assert!(code.contains("const SCALE : f64 = 5.0 / 9.0"));
        assert!(code.contains("const OFFSET : f64 = 273.15 - 32.0 * 5.0 / 9.0"));
    }

    #[test]
    fn expands_path_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "J", dimension = crate::kinds::EnergyDim, scale = 1.0)]
            pub struct Joule;
        };
        let code = expand(&input).unwrap().to_string();
        assert!(code.contains("type Dim = crate :: kinds :: EnergyDim"));
    }
}
