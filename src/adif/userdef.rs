// User-defined field declarations
//
// In ADI headers a declaration is `<USERDEFn:LEN:T>NAME` optionally
// followed by `,{A,B,C}` (allowed values) or `,{MIN:MAX}` (numeric range).

use crate::error::{Error, Result};
use crate::spec::{DataType, FieldDef};

/// Parse the value of a USERDEFn header field
pub fn parse_declaration(value: &str, data_type: DataType) -> Result<FieldDef> {
    let value = value.trim();
    let (name, extra) = match value.split_once(',') {
        Some((n, rest)) => (n.trim(), Some(rest.trim())),
        None => (value, None),
    };
    if !super::is_valid_field_name(name) {
        return Err(Error::schema("adif", format!("invalid user-defined field name {:?}", name)));
    }
    let mut values = Vec::new();
    let (mut minimum, mut maximum) = (None, None);
    if let Some(extra) = extra {
        let inner = extra
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or_else(|| {
                Error::schema("adif", format!("user-defined field {} has malformed {:?}", name, extra))
            })?;
        match parse_range(inner) {
            Some((lo, hi)) => {
                minimum = Some(lo);
                maximum = Some(hi);
            }
            None => {
                values = inner
                    .split(',')
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .collect();
            }
        }
    }
    Ok(FieldDef::user_defined(name, data_type, values, minimum, maximum))
}

/// `MIN:MAX` with both ends numeric
pub fn parse_range(s: &str) -> Option<(f64, f64)> {
    let (lo, hi) = s.split_once(':')?;
    Some((lo.trim().parse().ok()?, hi.trim().parse().ok()?))
}

/// Inverse of `parse_declaration`
pub fn format_declaration(def: &FieldDef) -> String {
    if !def.values.is_empty() {
        format!("{},{{{}}}", def.name, def.values.join(","))
    } else if let (Some(lo), Some(hi)) = (def.minimum, def.maximum) {
        format!("{},{{{}:{}}}", def.name, lo, hi)
    } else {
        def.name.clone()
    }
}
