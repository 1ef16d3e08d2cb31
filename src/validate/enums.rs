// Enumeration membership, scoped enumerations, and checks that compare a
// field against the DXCC entity of the same record

use super::{error, scalar, warning, Validation, ValidationContext};
use crate::spec::{dxcc, registry, EnumValue, FieldDef};

/// Upstream list is partial; values for other entities are accepted
const PARTIAL_ENUMERATIONS: &[&str] = &["Secondary_Administrative_Subdivision"];

pub fn validate_enumeration(value: &str, def: &FieldDef, ctx: &ValidationContext) -> Validation {
    if def.user_defined && !def.values.is_empty() {
        return if def.values.iter().any(|v| v.eq_ignore_ascii_case(value)) {
            Validation::Valid
        } else {
            error(format!("{} must be one of {}, got {:?}", def.name, def.values.join(", "), value))
        };
    }
    let Some(enum_name) = def.enumeration.as_deref() else {
        // declared as an enumeration without a value list (DARC_DOK)
        return scalar::validate_string(value, def, ctx);
    };
    let reg = registry();
    let Some(enumeration) = reg.enumeration(enum_name) else {
        return error(format!("{} refers to unknown enumeration {}", def.name, enum_name));
    };
    let matches = enumeration.lookup(value);
    if matches.is_empty() && PARTIAL_ENUMERATIONS.contains(&enum_name) {
        return check_partial(value, def, ctx, enum_name);
    }
    if matches.is_empty() {
        let msg = format!("{} value {:?} is not in the {} enumeration", def.name, value, enum_name);
        return if ctx.unknown_enum_value_warning { warning(msg) } else { error(msg) };
    }
    let scoped = check_scope(value, def, ctx, enum_name, &matches);
    if !scoped.is_valid() {
        return scoped;
    }
    if matches.iter().all(|v| v.is_import_only()) {
        return warning(format!("{} value {:?} is deprecated", def.name, value));
    }
    Validation::Valid
}

/// The scoping field's value as the enumeration's scope property expects
/// it: DXCC entity names become entity codes
fn scope_key(enum_scope_property: &str, scope_value: &str) -> String {
    if enum_scope_property.eq_ignore_ascii_case("DXCC Entity Code") && scope_value.parse::<u16>().is_err() {
        if let Some(e) = dxcc::entities_for(scope_value).first() {
            return e.code.to_string();
        }
    }
    scope_value.to_string()
}

/// Values missing from a partial enumeration are accepted unless the
/// record's scope has a known value list
fn check_partial(value: &str, def: &FieldDef, ctx: &ValidationContext, enum_name: &str) -> Validation {
    let scope_value = def.scope.as_deref().map(|f| ctx.field_value(f)).unwrap_or("");
    if scope_value.is_empty() {
        return warning(format!(
            "{} value {:?} is not in the {} enumeration",
            def.name, value, enum_name
        ));
    }
    let reg = registry();
    let property = reg
        .enumeration(enum_name)
        .and_then(|e| e.scope_property)
        .unwrap_or_default();
    if reg.scope_values(enum_name, &scope_key(property, scope_value)).is_empty() {
        Validation::Valid
    } else {
        error(format!(
            "{} value {:?} is not valid for {} {}",
            def.name,
            value,
            def.scope.as_deref().unwrap_or_default(),
            scope_value
        ))
    }
}

fn check_scope(
    value: &str,
    def: &FieldDef,
    ctx: &ValidationContext,
    enum_name: &str,
    matches: &[&EnumValue],
) -> Validation {
    let Some(scope_field) = def.scope.as_deref() else {
        return Validation::Valid;
    };
    let scope_value = ctx.field_value(scope_field);
    if scope_value.is_empty() {
        return Validation::Valid;
    }
    let reg = registry();
    let Some(property) = reg.enumeration(enum_name).and_then(|e| e.scope_property) else {
        return Validation::Valid;
    };
    let key = scope_key(property, scope_value);
    let in_scope = reg.scope_values(enum_name, &key);
    if in_scope.is_empty() {
        if PARTIAL_ENUMERATIONS.contains(&enum_name) {
            return Validation::Valid;
        }
        return warning(format!(
            "{} value {:?} cannot be checked: no {} values known for {} {}",
            def.name, value, enum_name, scope_field, scope_value
        ));
    }
    if matches.iter().any(|m| in_scope.iter().any(|s| s == m)) {
        Validation::Valid
    } else {
        error(format!(
            "{} value {:?} is not valid for {} {}",
            def.name, value, scope_field, scope_value
        ))
    }
}

/// Entity for zone and continent checks: the DXCC field, then the country
fn entity_fields(field: &str) -> Option<(&'static str, &'static str)> {
    match field {
        "CQZ" | "ITUZ" | "CONT" => Some(("DXCC", "COUNTRY")),
        "MY_CQ_ZONE" | "MY_ITU_ZONE" => Some(("MY_DXCC", "MY_COUNTRY")),
        _ => None,
    }
}

fn check_zone(value: &str, def: &FieldDef, entity: &str, zones: Vec<u8>, kind: &str) -> Validation {
    if zones.is_empty() {
        return Validation::Valid;
    }
    match value.parse::<u8>() {
        Ok(z) if zones.contains(&z) => Validation::Valid,
        _ => {
            let list: Vec<String> = zones.iter().map(u8::to_string).collect();
            error(format!(
                "{} {} is not a {} zone of {} ({})",
                def.name,
                value,
                kind,
                entity,
                list.join(", ")
            ))
        }
    }
}

/// Checks that depend on the record's DXCC entity
pub fn validate_cross_field(value: &str, def: &FieldDef, ctx: &ValidationContext) -> Validation {
    if def.user_defined {
        return Validation::Valid;
    }
    let Some((dxcc_field, country_field)) = entity_fields(&def.name) else {
        return Validation::Valid;
    };
    let reg = registry();
    let dxcc = ctx.field_value(dxcc_field);
    let country = ctx.field_value(country_field);
    match def.name.as_str() {
        "CONT" => {
            for entity in [dxcc, country].into_iter().filter(|e| !e.is_empty()) {
                if let Some(cont) = reg.continent_for(entity) {
                    if !cont.code().eq_ignore_ascii_case(value) {
                        return warning(format!(
                            "CONT {} disagrees with {} in {}",
                            value,
                            cont.code(),
                            entity
                        ));
                    }
                }
            }
            Validation::Valid
        }
        name => {
            let entity = if dxcc.is_empty() { country } else { dxcc };
            if entity.is_empty() {
                return Validation::Valid;
            }
            if name.contains("CQ") {
                check_zone(value, def, entity, reg.cq_zone_for(entity), "CQ")
            } else {
                check_zone(value, def, entity, reg.itu_zone_for(entity), "ITU")
            }
        }
    }
}
