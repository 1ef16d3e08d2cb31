// Award references and list-valued fields
//
// IOTA, SOTA, WWFF and POTA references follow the grammars published by
// their programs. Lists are validated element by element.

use std::sync::OnceLock;

use regex::Regex;

use super::{error, Validation, ValidationContext};
use crate::spec::{credits::split_credit, registry, FieldDef};

struct Reference {
    kind: &'static str,
    example: &'static str,
    pattern: &'static str,
}

const IOTA: Reference = Reference {
    kind: "IOTA",
    example: "NA-001",
    pattern: r"(?i)^(NA|SA|EU|AF|OC|AS|AN)-[0-9]{3}$",
};

const SOTA: Reference = Reference {
    kind: "SOTA",
    example: "W2/WE-003",
    pattern: r"(?i)^[A-Z0-9]{1,4}/[A-Z0-9]{2}-[0-9]{3}$",
};

const WWFF: Reference = Reference {
    kind: "WWFF",
    example: "KFF-4655",
    pattern: r"(?i)^[A-Z0-9]{1,4}FF-[0-9]{4}$",
};

const POTA: Reference = Reference {
    kind: "POTA",
    example: "K-0059@US-ME",
    pattern: r"(?i)^[A-Z0-9]{1,4}-[0-9]{4,5}(@[A-Z]{2}-[A-Z0-9]{1,3})?$",
};

fn reference_regex(r: &Reference) -> &'static Regex {
    static IOTA_RE: OnceLock<Regex> = OnceLock::new();
    static SOTA_RE: OnceLock<Regex> = OnceLock::new();
    static WWFF_RE: OnceLock<Regex> = OnceLock::new();
    static POTA_RE: OnceLock<Regex> = OnceLock::new();
    let cell = match r.kind {
        "IOTA" => &IOTA_RE,
        "SOTA" => &SOTA_RE,
        "WWFF" => &WWFF_RE,
        _ => &POTA_RE,
    };
    cell.get_or_init(|| Regex::new(r.pattern).expect("reference pattern"))
}

fn check_reference(r: &Reference, value: &str, def: &FieldDef) -> Validation {
    if reference_regex(r).is_match(value) {
        Validation::Valid
    } else {
        error(format!(
            "{} is not a {} reference like {}: {:?}",
            def.name, r.kind, r.example, value
        ))
    }
}

pub fn validate_iota(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    check_reference(&IOTA, value, def)
}

pub fn validate_sota(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    check_reference(&SOTA, value, def)
}

pub fn validate_wwff(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    check_reference(&WWFF, value, def)
}

pub fn validate_pota(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    check_reference(&POTA, value, def)
}

/// Apply `check` to each element; the first failure wins
fn each(value: &str, sep: char, check: impl Fn(&str) -> Validation) -> Validation {
    value
        .split(sep)
        .map(|v| check(v.trim()))
        .find(|v| !v.is_valid())
        .unwrap_or(Validation::Valid)
}

pub fn validate_pota_list(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    each(value, ',', |v| check_reference(&POTA, v, def))
}

fn printable_item(item: &str, def: &FieldDef) -> Validation {
    if item.is_empty() {
        error(format!("{} has an empty list element", def.name))
    } else if !item.chars().all(|c| (' '..='~').contains(&c)) {
        error(format!("{} list element {:?} is not printable ASCII", def.name, item))
    } else {
        Validation::Valid
    }
}

pub fn validate_award_list(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    each(value, ',', |v| printable_item(v, def))
}

pub fn validate_sponsored_award_list(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    let sponsors = registry().enumeration("Award_Sponsor");
    each(value, ',', |v| {
        printable_item(v, def).and_then(|| {
            let known = sponsors.map_or(false, |e| {
                e.values().iter().any(|s| {
                    v.len() > s.code().len() && v[..s.code().len()].eq_ignore_ascii_case(s.code())
                })
            });
            if known {
                Validation::Valid
            } else {
                error(format!("{} award {:?} does not start with a known sponsor prefix", def.name, v))
            }
        })
    })
}

pub fn validate_credit_list(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    let reg = registry();
    each(value, ',', |item| {
        let (credit, media) = split_credit(item);
        if reg.lookup_enum_value("Credit", credit).is_empty() {
            return error(format!("{} has unknown credit {:?}", def.name, credit));
        }
        match media
            .iter()
            .find(|m| reg.lookup_enum_value("QSL_Medium", m).is_empty())
        {
            Some(m) => error(format!("{} has unknown QSL medium {:?} for {}", def.name, m, credit)),
            None => Validation::Valid,
        }
    })
}

pub fn validate_subdivision_list(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    each(value, ':', |v| printable_item(v, def))
}
