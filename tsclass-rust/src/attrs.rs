//! `#[serde(...)]` and `#[ts(...)]` attribute parsing.

use syn::{Attribute, LitStr, Token, meta::ParseNestedMeta};
use tsclass_core::RenameRule;

/// Container-level attributes of a struct.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    if let Some(rule) = serialize_name(&meta)? {
                        let rename = RenameRule::from_serde(&rule.value()).ok_or_else(|| {
                            syn::Error::new(rule.span(), format!("unknown rename rule `{}`", rule.value()))
                        })?;
                        parsed.rename_all = Some(rename);
                    }
                    Ok(())
                } else {
                    skip(&meta)
                }
            })?;
        }
        Ok(parsed)
    }
}

/// Field-level attributes.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    pub rename: Option<String>,
    pub skip: bool,
    pub flatten: bool,
    pub ts_type: Option<String>,
    pub transform: Option<String>,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs {
            if attr.path().is_ident("serde") {
                attr.parse_nested_meta(|meta| parsed.serde_meta(meta))?;
            } else if attr.path().is_ident("ts") {
                attr.parse_nested_meta(|meta| parsed.ts_meta(meta))?;
            }
        }
        Ok(parsed)
    }

    fn serde_meta(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("rename") {
            if let Some(name) = serialize_name(&meta)? {
                self.rename = Some(name.value());
            }
        } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
            self.skip = true;
        } else if meta.path.is_ident("flatten") {
            self.flatten = true;
        } else {
            skip(&meta)?;
        }
        Ok(())
    }

    fn ts_meta(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("type") {
            self.ts_type = Some(meta.value()?.parse::<LitStr>()?.value());
            Ok(())
        } else if meta.path.is_ident("transform") {
            self.transform = Some(meta.value()?.parse::<LitStr>()?.value());
            Ok(())
        } else {
            Err(meta.error("expected `type` or `transform`"))
        }
    }
}

/// Read `key = "x"` or `key(serialize = "x", ...)`.
///
/// Returns `None` for the list form without a `serialize` entry.
fn serialize_name(meta: &ParseNestedMeta<'_>) -> syn::Result<Option<LitStr>> {
    if meta.input.peek(Token![=]) {
        return Ok(Some(meta.value()?.parse()?));
    }
    let mut name = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("serialize") {
            name = Some(inner.value()?.parse()?);
            Ok(())
        } else {
            skip(&inner)
        }
    })?;
    Ok(name)
}

/// Consume an entry this adapter does not interpret.
fn skip(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip(&inner))?;
    }
    Ok(())
}
