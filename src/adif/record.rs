// Records and fields of a log
//
// Field names are stored upper-case and are unique within a record.
// Setting a field that already exists replaces its value in place, so the
// original insertion order is kept.

use crate::spec::DataType;

/// One name/value pair. `data_type` is the type declared on the wire (an ADI
/// indicator or an ADX TYPE attribute), if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub data_type: Option<DataType>,
}

impl Field {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Field {
            name: name.trim().to_uppercase(),
            value: value.into(),
            data_type: None,
        }
    }

    pub fn typed(name: &str, value: impl Into<String>, data_type: DataType) -> Self {
        Field { data_type: Some(data_type), ..Field::new(name, value) }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Field names are identifiers of ASCII letters, digits and underscores
pub fn is_valid_field_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Split an application-defined field name `APP_PROGRAM_NAME` into
/// program id and field name
pub fn app_field_parts(name: &str) -> Option<(&str, &str)> {
    let rest = name
        .get(..4)
        .filter(|p| p.eq_ignore_ascii_case("APP_"))
        .map(|_| &name[4..])?;
    let (program, field) = rest.split_once('_')?;
    if program.is_empty() || field.is_empty() {
        return None;
    }
    Some((program, field))
}

/// An ordered set of uniquely named fields plus free-text comments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<Field>,
    pub comments: Vec<String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from name/value pairs; later duplicates replace
    /// earlier ones
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut r = Record::new();
        for (name, value) in pairs {
            r.set(Field::new(name, value));
        }
        r
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        let name = name.trim();
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Value of a field, `""` when absent
    pub fn value(&self, name: &str) -> &str {
        self.get(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set a field, replacing any field of the same name. Returns the
    /// replaced field.
    pub fn set(&mut self, field: Field) -> Option<Field> {
        match self.fields.iter_mut().find(|f| f.name.eq_ignore_ascii_case(&field.name)) {
            Some(existing) => Some(std::mem::replace(existing, field)),
            None => {
                self.fields.push(field);
                None
            }
        }
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Option<Field> {
        self.set(Field::new(name, value))
    }

    pub fn remove(&mut self, name: &str) -> Option<Field> {
        let name = name.trim();
        let idx = self.fields.iter().position(|f| f.name.eq_ignore_ascii_case(name))?;
        Some(self.fields.remove(idx))
    }

    /// Drop every field with an empty value; returns how many were removed
    pub fn remove_blank(&mut self) -> usize {
        let before = self.fields.len();
        self.fields.retain(|f| !f.is_empty());
        before - self.fields.len()
    }

    pub fn retain(&mut self, keep: impl FnMut(&Field) -> bool) {
        self.fields.retain(keep);
    }

    /// Rename a field, keeping its position. Fails quietly when the old
    /// name is absent; an existing field with the new name is replaced.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        let Some((idx, mut field)) = self.remove_in_place(old) else {
            return false;
        };
        let new = new.trim().to_uppercase();
        self.remove(&new);
        field.name = new;
        self.fields.insert(idx.min(self.fields.len()), field);
        true
    }

    fn remove_in_place(&mut self, name: &str) -> Option<(usize, Field)> {
        let name = name.trim();
        let idx = self.fields.iter().position(|f| f.name.eq_ignore_ascii_case(name))?;
        Some((idx, self.fields.remove(idx)))
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        let c = comment.into();
        if !c.trim().is_empty() {
            self.comments.push(c.trim().to_string());
        }
    }

    /// Fields in output order: names in `order` first, then the rest in
    /// insertion order
    pub fn ordered_fields(&self, order: &FieldOrder) -> Vec<&Field> {
        let mut out: Vec<&Field> = Vec::with_capacity(self.fields.len());
        for name in order.names() {
            if let Some(f) = self.fields.iter().find(|f| &f.name == name) {
                out.push(f);
            }
        }
        for f in &self.fields {
            if !order.contains(&f.name) {
                out.push(f);
            }
        }
        out
    }
}

/// Preferred leading field order for output
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldOrder(Vec<String>);

impl FieldOrder {
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut v: Vec<String> = Vec::new();
        for n in names {
            let n = n.as_ref().trim().to_uppercase();
            if !n.is_empty() && !v.contains(&n) {
                v.push(n);
            }
        }
        FieldOrder(v)
    }

    /// Parse a comma-separated list such as `CALL,QSO_DATE,TIME_ON`
    pub fn parse(list: &str) -> Self {
        FieldOrder::new(list.split(','))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sort `names` by preference, keeping the given order for the rest
    pub fn apply(&self, names: Vec<String>) -> Vec<String> {
        let mut out: Vec<String> = self.0.iter().filter(|n| names.contains(n)).cloned().collect();
        out.extend(names.into_iter().filter(|n| !self.contains(n)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut r = Record::from_pairs([("call", "W1AW"), ("band", "20m"), ("mode", "CW")]);
        let old = r.set_value("BAND", "40m");
        assert_eq!(old.unwrap().value, "20m");
        let names: Vec<_> = r.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["CALL", "BAND", "MODE"]);
        assert_eq!(r.value("band"), "40m");
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_remove_blank_idempotent() {
        let mut r = Record::from_pairs([("CALL", "K1ABC"), ("NAME", ""), ("QTH", "")]);
        assert_eq!(r.remove_blank(), 2);
        assert_eq!(r.remove_blank(), 0);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_missing_value_is_empty() {
        let r = Record::new();
        assert_eq!(r.value("CALL"), "");
        assert!(!r.has("CALL"));
    }

    #[test]
    fn test_rename_keeps_position() {
        let mut r = Record::from_pairs([("A", "1"), ("B", "2"), ("C", "3")]);
        assert!(r.rename("b", "x"));
        let names: Vec<_> = r.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "X", "C"]);
        assert!(!r.rename("missing", "y"));
    }

    #[test]
    fn test_ordered_fields() {
        let r = Record::from_pairs([("MODE", "CW"), ("CALL", "W1AW"), ("BAND", "20m")]);
        let order = FieldOrder::parse("call, band ,NOPE");
        let names: Vec<_> = r.ordered_fields(&order).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["CALL", "BAND", "MODE"]);
        assert_eq!(
            order.apply(vec!["MODE".into(), "BAND".into(), "CALL".into()]),
            vec!["CALL", "BAND", "MODE"]
        );
    }

    #[test]
    fn test_field_names() {
        assert!(is_valid_field_name("QSO_DATE"));
        assert!(is_valid_field_name("APP_N1MM_EXCHANGE1"));
        assert!(!is_valid_field_name(""));
        assert!(!is_valid_field_name("MY CALL"));
        assert_eq!(app_field_parts("APP_N1MM_RADIO_NR"), Some(("N1MM", "RADIO_NR")));
        assert_eq!(app_field_parts("app_lotw_owncall"), Some(("lotw", "owncall")));
        assert_eq!(app_field_parts("APPLE"), None);
        assert_eq!(app_field_parts("APP_X"), None);
    }

    #[test]
    fn test_comments_trimmed() {
        let mut r = Record::new();
        r.add_comment("  worked on a whim \n");
        r.add_comment("   ");
        assert_eq!(r.comments, vec!["worked on a whim"]);
    }
}
