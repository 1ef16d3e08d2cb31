// ADIF Enumerations
// Reference: https://adif.org/314/ADIF_314.htm#Enumerations
//
// Each enumeration is a list of values with named properties. The first
// property of a table is the value's canonical string. Lookups ignore case.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Static source for one enumeration
#[derive(Debug, Clone, Copy)]
pub struct EnumTable {
    pub name: &'static str,
    /// Property names; the first one holds the canonical value
    pub properties: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
    /// Property matched against a scoping field's value
    pub scope_property: Option<&'static str>,
    /// Canonical strings may repeat (recycled names, per-entity codes)
    pub duplicates: bool,
}

/// One value of an enumeration
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    enumeration: &'static str,
    code: String,
    properties: Vec<(&'static str, String)>,
}

impl EnumValue {
    pub(crate) fn new(enumeration: &'static str, properties: Vec<(&'static str, String)>) -> Self {
        let code = properties.first().map(|(_, v)| v.clone()).unwrap_or_default();
        EnumValue { enumeration, code, properties }
    }

    /// Canonical string form
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn enumeration_name(&self) -> &'static str {
        self.enumeration
    }

    /// Property value by name (case-insensitive). `Enumeration Name` is
    /// always available.
    pub fn property(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case("Enumeration Name") {
            return Some(self.enumeration);
        }
        self.properties
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Deprecated values that may be read but should not be written
    pub fn is_import_only(&self) -> bool {
        matches!(self.property("Import-only"), Some(v) if v.eq_ignore_ascii_case("true"))
    }
}

/// A named, ordered set of values
#[derive(Debug, Clone)]
pub struct Enumeration {
    pub name: &'static str,
    pub properties: Vec<&'static str>,
    pub scope_property: Option<&'static str>,
    pub duplicates: bool,
    values: Vec<EnumValue>,
    index: HashMap<String, Vec<usize>>,
}

impl Enumeration {
    pub(crate) fn from_table(table: &EnumTable) -> Result<Self> {
        let mut values = Vec::with_capacity(table.rows.len());
        for row in table.rows {
            if row.is_empty() || row.len() > table.properties.len() {
                return Err(Error::Config(format!(
                    "enumeration {} has a row with {} columns, expected 1 to {}",
                    table.name,
                    row.len(),
                    table.properties.len()
                )));
            }
            let props = table
                .properties
                .iter()
                .zip(row.iter())
                .map(|(k, v)| (*k, v.to_string()))
                .collect();
            values.push(EnumValue::new(table.name, props));
        }
        Enumeration::from_values(table.name, table.properties.to_vec(), values, table.scope_property, table.duplicates)
    }

    pub(crate) fn from_values(
        name: &'static str,
        properties: Vec<&'static str>,
        values: Vec<EnumValue>,
        scope_property: Option<&'static str>,
        duplicates: bool,
    ) -> Result<Self> {
        let mut index: HashMap<String, Vec<usize>> = HashMap::with_capacity(values.len());
        for (i, v) in values.iter().enumerate() {
            let slot = index.entry(v.code.to_uppercase()).or_default();
            if !slot.is_empty() && !duplicates {
                return Err(Error::Config(format!(
                    "enumeration {} repeats value {:?}",
                    name, v.code
                )));
            }
            slot.push(i);
        }
        if let Some(scope) = scope_property {
            if !properties.iter().any(|p| p.eq_ignore_ascii_case(scope)) {
                return Err(Error::Config(format!(
                    "enumeration {} scope property {:?} is not a property",
                    name, scope
                )));
            }
        }
        Ok(Enumeration { name, properties, scope_property, duplicates, values, index })
    }

    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    /// All values whose canonical string matches, ignoring case
    pub fn lookup(&self, code: &str) -> Vec<&EnumValue> {
        self.index
            .get(&code.trim().to_uppercase())
            .map(|idx| idx.iter().map(|&i| &self.values[i]).collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(&code.trim().to_uppercase())
    }

    /// Values whose scope property equals `scope_value`. Numeric scope
    /// values compare numerically so "6" matches "006".
    pub fn scope_values(&self, scope_value: &str) -> Vec<&EnumValue> {
        let Some(prop) = self.scope_property else {
            return Vec::new();
        };
        let want = scope_value.trim();
        let want_num = want.parse::<u32>().ok();
        self.values
            .iter()
            .filter(|v| match v.property(prop) {
                Some(have) => match (want_num, have.trim().parse::<u32>().ok()) {
                    (Some(a), Some(b)) => a == b,
                    _ => have.trim().eq_ignore_ascii_case(want),
                },
                None => false,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: EnumTable = EnumTable {
        name: "Color",
        properties: &["Color", "Family", "Import-only"],
        rows: &[&["RED", "warm"], &["blue", "cool"], &["TEAL", "cool", "true"]],
        scope_property: Some("Family"),
        duplicates: false,
    };

    #[test]
    fn test_lookup_case_insensitive() {
        let e = Enumeration::from_table(&COLORS).unwrap();
        assert_eq!(e.lookup("Red").len(), 1);
        assert_eq!(e.lookup("BLUE")[0].code(), "blue");
        assert!(e.lookup("green").is_empty());
        assert!(e.contains(" teal "));
    }

    #[test]
    fn test_properties() {
        let e = Enumeration::from_table(&COLORS).unwrap();
        let red = e.lookup("red")[0];
        assert_eq!(red.property("Enumeration Name"), Some("Color"));
        assert_eq!(red.property("family"), Some("warm"));
        assert_eq!(red.property("Import-only"), None);
        assert!(!red.is_import_only());
        assert!(e.lookup("teal")[0].is_import_only());
    }

    #[test]
    fn test_scope_values() {
        let e = Enumeration::from_table(&COLORS).unwrap();
        let cool: Vec<_> = e.scope_values("COOL").iter().map(|v| v.code().to_string()).collect();
        assert_eq!(cool, vec!["blue", "TEAL"]);
        assert!(e.scope_values("neutral").is_empty());
    }

    #[test]
    fn test_duplicates_rejected_unless_allowed() {
        let dup = EnumTable {
            rows: &[&["RED", "warm"], &["red", "warm"]],
            ..COLORS
        };
        assert!(matches!(Enumeration::from_table(&dup), Err(Error::Config(_))));
        let allowed = EnumTable { duplicates: true, ..dup };
        assert_eq!(Enumeration::from_table(&allowed).unwrap().lookup("RED").len(), 2);
    }

    #[test]
    fn test_row_too_wide() {
        let wide = EnumTable {
            rows: &[&["RED", "warm", "false", "extra"]],
            ..COLORS
        };
        assert!(Enumeration::from_table(&wide).is_err());
    }
}
