// ADIF specification registry
// Reference: ADIF 3.1.4 (https://adif.org/314/ADIF_314.htm)
//
// Data types, fields and enumerations plus the cross-reference tables the
// validators need (zones and continents by DXCC entity, ISO 3166 codes,
// Cabrillo bands and modes). Built once from static tables and immutable
// afterwards.

pub mod bands;
pub mod cabrillo;
pub mod contests;
pub mod credits;
pub mod datatype;
pub mod dxcc;
pub mod enumeration;
pub mod enums;
pub mod fields;
pub mod iso3166;
pub mod modes;
pub mod sections;
pub mod subdivisions;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use datatype::DataType;
pub use enumeration::{EnumValue, Enumeration};
pub use fields::FieldDef;

use crate::error::{Error, Result};
use enumeration::EnumTable;

/// ADIF version written into synthesized headers
pub const ADIF_VERSION: &str = "3.1.4";

/// Enumerations whose canonical strings may repeat
pub const DUPLICATES_ALLOWED: &[&str] =
    &["Country", "Region", "Primary_Administrative_Subdivision"];

const TABLES: &[EnumTable] = &[
    enums::ANT_PATH,
    sections::ARRL_SECTION,
    credits::AWARD_SPONSOR,
    bands::BAND,
    contests::CONTEST_ID,
    enums::CONTINENT,
    credits::CREDIT,
    enums::EQSL_AG,
    modes::MODE,
    enums::MORSE_KEY_TYPE,
    subdivisions::PRIMARY_SUBDIVISION,
    enums::PROPAGATION_MODE,
    credits::QSL_MEDIUM,
    enums::QSL_RCVD,
    enums::QSL_SENT,
    enums::QSL_VIA,
    enums::QSO_COMPLETE,
    enums::QSO_DOWNLOAD_STATUS,
    enums::QSO_UPLOAD_STATUS,
    sections::REGION,
    subdivisions::SECONDARY_SUBDIVISION,
    modes::SUBMODE,
];

/// Read-only view of the ADIF specification tables
#[derive(Debug)]
pub struct Registry {
    fields: Vec<FieldDef>,
    field_index: HashMap<String, usize>,
    enumerations: HashMap<String, Enumeration>,
}

impl Registry {
    /// Build the registry from the static tables, checking cross references
    pub fn build() -> Result<Self> {
        let mut enumerations = HashMap::new();
        let mut add = |e: Enumeration| -> Result<()> {
            if e.duplicates && !DUPLICATES_ALLOWED.contains(&e.name) {
                return Err(Error::Config(format!(
                    "enumeration {} allows duplicates but is not whitelisted",
                    e.name
                )));
            }
            if enumerations.insert(e.name.to_uppercase(), e).is_some() {
                return Err(Error::Config("enumeration defined twice".into()));
            }
            Ok(())
        };
        for table in TABLES {
            add(Enumeration::from_table(table)?)?;
        }
        add(dxcc::entity_code_enumeration()?)?;
        add(dxcc::country_enumeration()?)?;

        let mut fields = Vec::with_capacity(fields::FIELDS.len());
        let mut field_index = HashMap::with_capacity(fields::FIELDS.len());
        for spec in fields::FIELDS {
            let def = FieldDef::from_spec(spec)?;
            if let Some(name) = &def.enumeration {
                if !enumerations.contains_key(&name.to_uppercase()) {
                    return Err(Error::Config(format!(
                        "field {} refers to unknown enumeration {}",
                        def.name, name
                    )));
                }
            }
            if field_index.insert(def.name.clone(), fields.len()).is_some() {
                return Err(Error::Config(format!("field {} defined twice", def.name)));
            }
            fields.push(def);
        }
        for def in &fields {
            if let Some(scope) = &def.scope {
                if !field_index.contains_key(scope) {
                    return Err(Error::Config(format!(
                        "field {} is scoped by unknown field {}",
                        def.name, scope
                    )));
                }
            }
        }
        log::debug!(
            "specification registry: {} fields, {} enumerations",
            fields.len(),
            enumerations.len()
        );
        Ok(Registry { fields, field_index, enumerations })
    }

    /// Field descriptor by name, ignoring case
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.field_index
            .get(&name.trim().to_uppercase())
            .map(|&i| &self.fields[i])
    }

    /// All registry fields in specification order
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn enumeration(&self, name: &str) -> Option<&Enumeration> {
        self.enumerations.get(&name.trim().to_uppercase())
    }

    pub fn enumerations(&self) -> impl Iterator<Item = &Enumeration> {
        self.enumerations.values()
    }

    /// Values of `enumeration` matching `value`, ignoring case. Empty when
    /// either is unknown.
    pub fn lookup_enum_value(&self, enumeration: &str, value: &str) -> Vec<&EnumValue> {
        self.enumeration(enumeration)
            .map(|e| e.lookup(value))
            .unwrap_or_default()
    }

    /// Values of `enumeration` whose scope property equals `scope_value`
    pub fn scope_values(&self, enumeration: &str, scope_value: &str) -> Vec<&EnumValue> {
        self.enumeration(enumeration)
            .map(|e| e.scope_values(scope_value))
            .unwrap_or_default()
    }

    /// CQ zones for a DXCC entity name or code
    pub fn cq_zone_for(&self, entity: &str) -> Vec<u8> {
        dxcc::cq_zones_for(entity)
    }

    /// ITU zones for a DXCC entity name or code
    pub fn itu_zone_for(&self, entity: &str) -> Vec<u8> {
        dxcc::itu_zones_for(entity)
    }

    /// Continent for a DXCC entity name or code, `None` if unknown
    pub fn continent_for(&self, entity: &str) -> Option<&EnumValue> {
        let abbrev = dxcc::continent_for(entity)?;
        self.lookup_enum_value("Continent", abbrev).into_iter().next()
    }

    pub fn iso_country(&self, code: &str) -> Option<&'static iso3166::IsoCountry> {
        iso3166::iso_country(code)
    }

    pub fn dxcc_for_iso(&self, code: &str) -> Vec<u16> {
        iso3166::dxcc_for_iso(code)
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Build the registry at startup, reporting malformed tables as
/// configuration errors
pub fn init() -> Result<&'static Registry> {
    if let Some(r) = REGISTRY.get() {
        return Ok(r);
    }
    let built = Registry::build()?;
    Ok(REGISTRY.get_or_init(|| built))
}

/// The process-wide registry
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        Registry::build().expect("built-in specification tables are well formed")
    })
}
