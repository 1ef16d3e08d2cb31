// ADIF Field Definitions
// Reference: https://adif.org/314/ADIF_314.htm#Field_Summary
//
// Header fields first, then QSO fields in specification order.
// Bounds are kept as text so malformed table entries surface as
// configuration errors when the registry is built.

use super::datatype::DataType;
use crate::error::{Error, Result};

/// A row of the static field table
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub data_type: DataType,
    pub enumeration: Option<&'static str>,
    pub minimum: Option<&'static str>,
    pub maximum: Option<&'static str>,
    pub scope: Option<&'static str>,
    pub header: bool,
    pub import_only: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, data_type: DataType) -> Self {
        FieldSpec {
            name,
            data_type,
            enumeration: None,
            minimum: None,
            maximum: None,
            scope: None,
            header: false,
            import_only: false,
        }
    }

    const fn header(name: &'static str, data_type: DataType) -> Self {
        FieldSpec { header: true, ..FieldSpec::new(name, data_type) }
    }

    const fn enumerated(name: &'static str, enumeration: &'static str) -> Self {
        FieldSpec { enumeration: Some(enumeration), ..FieldSpec::new(name, DataType::Enumeration) }
    }

    const fn with_enum(self, enumeration: &'static str) -> Self {
        FieldSpec { enumeration: Some(enumeration), ..self }
    }

    const fn range(self, minimum: &'static str, maximum: &'static str) -> Self {
        FieldSpec { minimum: Some(minimum), maximum: Some(maximum), ..self }
    }

    const fn min(self, minimum: &'static str) -> Self {
        FieldSpec { minimum: Some(minimum), ..self }
    }

    const fn scoped_by(self, scope: &'static str) -> Self {
        FieldSpec { scope: Some(scope), ..self }
    }

    const fn import_only(self) -> Self {
        FieldSpec { import_only: true, ..self }
    }
}

/// A field descriptor, either from the registry or declared as a
/// user-defined field in a log header
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Upper-case field name
    pub name: String,
    pub data_type: DataType,
    /// Enumeration name; `None` for an `Enumeration` field means any string
    pub enumeration: Option<String>,
    /// Explicit value set (user-defined enumeration fields)
    pub values: Vec<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    /// Field whose value restricts this field's enumeration values
    pub scope: Option<String>,
    pub header: bool,
    pub import_only: bool,
    pub user_defined: bool,
}

impl FieldDef {
    /// A plain field of the given type with no restrictions
    pub fn new(name: &str, data_type: DataType) -> Self {
        FieldDef {
            name: name.to_uppercase(),
            data_type,
            enumeration: None,
            values: Vec::new(),
            minimum: None,
            maximum: None,
            scope: None,
            header: false,
            import_only: false,
            user_defined: false,
        }
    }

    /// A user-defined field as declared by a USERDEFn header field
    pub fn user_defined(
        name: &str,
        data_type: DataType,
        values: Vec<String>,
        minimum: Option<f64>,
        maximum: Option<f64>,
    ) -> Self {
        FieldDef {
            values,
            minimum,
            maximum,
            user_defined: true,
            ..FieldDef::new(name, data_type)
        }
    }

    pub(crate) fn from_spec(spec: &FieldSpec) -> Result<Self> {
        let bound = |s: Option<&str>| -> Result<Option<f64>> {
            s.map(|v| {
                v.parse::<f64>().map_err(|_| {
                    Error::Config(format!("field {} has malformed bound {:?}", spec.name, v))
                })
            })
            .transpose()
        };
        let minimum = bound(spec.minimum)?;
        let maximum = bound(spec.maximum)?;
        if let (Some(lo), Some(hi)) = (minimum, maximum) {
            if lo > hi {
                return Err(Error::Config(format!(
                    "field {} has minimum {} above maximum {}",
                    spec.name, lo, hi
                )));
            }
        }
        Ok(FieldDef {
            name: spec.name.to_string(),
            data_type: spec.data_type,
            enumeration: spec.enumeration.map(str::to_string),
            values: Vec::new(),
            minimum,
            maximum,
            scope: spec.scope.map(str::to_string),
            header: spec.header,
            import_only: spec.import_only,
            user_defined: false,
        })
    }

    /// Effective numeric bounds: field bounds override the type's
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        let (tmin, tmax) = self.data_type.range();
        (self.minimum.or(tmin), self.maximum.or(tmax))
    }

    pub fn is_latitude(&self) -> bool {
        !self.user_defined && self.name.ends_with("LAT")
    }

    pub fn is_longitude(&self) -> bool {
        !self.user_defined && self.name.ends_with("LON")
    }
}

pub(crate) use table::FIELDS;

mod table {
    use super::FieldSpec;
    use crate::spec::datatype::DataType::*;

    pub(crate) const FIELDS: &[FieldSpec] = &[
        // Header
        FieldSpec::header("ADIF_VER", String),
        FieldSpec::header("CREATED_TIMESTAMP", String),
        FieldSpec::header("PROGRAMID", String),
        FieldSpec::header("PROGRAMVERSION", String),
        FieldSpec::header("USERDEF", String),
        // QSO
        FieldSpec::new("ADDRESS", MultilineString),
        FieldSpec::new("ADDRESS_INTL", IntlMultilineString),
        FieldSpec::new("AGE", Number).range("0", "120"),
        FieldSpec::new("ALTITUDE", Number),
        FieldSpec::new("ANT_AZ", Number).range("0", "360"),
        FieldSpec::new("ANT_EL", Number).range("-90", "90"),
        FieldSpec::enumerated("ANT_PATH", "Ant_Path"),
        FieldSpec::enumerated("ARRL_SECT", "ARRL_Section"),
        FieldSpec::new("AWARD_GRANTED", SponsoredAwardList),
        FieldSpec::new("AWARD_SUBMITTED", SponsoredAwardList),
        FieldSpec::new("A_INDEX", Number).range("0", "400"),
        FieldSpec::enumerated("BAND", "Band"),
        FieldSpec::enumerated("BAND_RX", "Band"),
        FieldSpec::new("CALL", String),
        FieldSpec::new("CHECK", String),
        FieldSpec::new("CLASS", String),
        FieldSpec::new("CLUBLOG_QSO_UPLOAD_DATE", Date),
        FieldSpec::enumerated("CLUBLOG_QSO_UPLOAD_STATUS", "QSO_Upload_Status"),
        FieldSpec::enumerated("CNTY", "Secondary_Administrative_Subdivision").scoped_by("DXCC"),
        FieldSpec::new("CNTY_ALT", SecondarySubdivisionList),
        FieldSpec::new("COMMENT", String),
        FieldSpec::new("COMMENT_INTL", IntlString),
        FieldSpec::enumerated("CONT", "Continent"),
        FieldSpec::new("CONTACTED_OP", String),
        FieldSpec::new("CONTEST_ID", String).with_enum("Contest_ID"),
        FieldSpec::new("COUNTRY", String).with_enum("Country"),
        FieldSpec::new("COUNTRY_INTL", IntlString),
        FieldSpec::new("CQZ", PositiveInteger).range("1", "40"),
        FieldSpec::new("CREDIT_GRANTED", CreditList),
        FieldSpec::new("CREDIT_SUBMITTED", CreditList),
        FieldSpec::new("DARC_DOK", Enumeration),
        FieldSpec::new("DCL_QSLRDATE", Date),
        FieldSpec::new("DCL_QSLSDATE", Date),
        FieldSpec::enumerated("DCL_QSL_RCVD", "QSL_Rcvd"),
        FieldSpec::enumerated("DCL_QSL_SENT", "QSL_Sent"),
        FieldSpec::new("DISTANCE", Number).min("0"),
        FieldSpec::enumerated("DXCC", "DXCC_Entity_Code"),
        FieldSpec::new("EMAIL", String),
        FieldSpec::new("EQ_CALL", String),
        FieldSpec::enumerated("EQSL_AG", "EQSL_AG"),
        FieldSpec::new("EQSL_QSLRDATE", Date),
        FieldSpec::new("EQSL_QSLSDATE", Date),
        FieldSpec::enumerated("EQSL_QSL_RCVD", "QSL_Rcvd"),
        FieldSpec::enumerated("EQSL_QSL_SENT", "QSL_Sent"),
        FieldSpec::new("FISTS", PositiveInteger),
        FieldSpec::new("FISTS_CC", PositiveInteger),
        FieldSpec::new("FORCE_INIT", Boolean),
        FieldSpec::new("FREQ", Number),
        FieldSpec::new("FREQ_RX", Number),
        FieldSpec::new("GRIDSQUARE", GridSquare),
        FieldSpec::new("GRIDSQUARE_EXT", GridSquareExt),
        FieldSpec::new("GUEST_OP", String).import_only(),
        FieldSpec::new("HAMLOGEU_QSO_UPLOAD_DATE", Date),
        FieldSpec::enumerated("HAMLOGEU_QSO_UPLOAD_STATUS", "QSO_Upload_Status"),
        FieldSpec::new("HAMQTH_QSO_UPLOAD_DATE", Date),
        FieldSpec::enumerated("HAMQTH_QSO_UPLOAD_STATUS", "QSO_Upload_Status"),
        FieldSpec::new("HRDLOG_QSO_UPLOAD_DATE", Date),
        FieldSpec::enumerated("HRDLOG_QSO_UPLOAD_STATUS", "QSO_Upload_Status"),
        FieldSpec::new("IOTA", IOTARefNo),
        FieldSpec::new("IOTA_ISLAND_ID", PositiveInteger).range("1", "99999999"),
        FieldSpec::new("ITUZ", PositiveInteger).range("1", "90"),
        FieldSpec::new("K_INDEX", Integer).range("0", "9"),
        FieldSpec::new("LAT", Location),
        FieldSpec::new("LON", Location),
        FieldSpec::new("LOTW_QSLRDATE", Date),
        FieldSpec::new("LOTW_QSLSDATE", Date),
        FieldSpec::enumerated("LOTW_QSL_RCVD", "QSL_Rcvd"),
        FieldSpec::enumerated("LOTW_QSL_SENT", "QSL_Sent"),
        FieldSpec::new("MAX_BURSTS", Number).min("0"),
        FieldSpec::enumerated("MODE", "Mode"),
        FieldSpec::new("MORSE_KEY_INFO", String),
        FieldSpec::enumerated("MORSE_KEY_TYPE", "Morse_Key_Type"),
        FieldSpec::new("MS_SHOWER", String),
        FieldSpec::new("MY_ALTITUDE", Number),
        FieldSpec::new("MY_ANTENNA", String),
        FieldSpec::new("MY_ANTENNA_INTL", IntlString),
        FieldSpec::enumerated("MY_ARRL_SECT", "ARRL_Section"),
        FieldSpec::new("MY_CITY", String),
        FieldSpec::new("MY_CITY_INTL", IntlString),
        FieldSpec::enumerated("MY_CNTY", "Secondary_Administrative_Subdivision").scoped_by("MY_DXCC"),
        FieldSpec::new("MY_CNTY_ALT", SecondarySubdivisionList),
        FieldSpec::new("MY_COUNTRY", String).with_enum("Country"),
        FieldSpec::new("MY_COUNTRY_INTL", IntlString),
        FieldSpec::new("MY_CQ_ZONE", PositiveInteger).range("1", "40"),
        FieldSpec::new("MY_DARC_DOK", Enumeration),
        FieldSpec::enumerated("MY_DXCC", "DXCC_Entity_Code"),
        FieldSpec::new("MY_FISTS", PositiveInteger),
        FieldSpec::new("MY_GRIDSQUARE", GridSquare),
        FieldSpec::new("MY_GRIDSQUARE_EXT", GridSquareExt),
        FieldSpec::new("MY_IOTA", IOTARefNo),
        FieldSpec::new("MY_IOTA_ISLAND_ID", PositiveInteger).range("1", "99999999"),
        FieldSpec::new("MY_ITU_ZONE", PositiveInteger).range("1", "90"),
        FieldSpec::new("MY_LAT", Location),
        FieldSpec::new("MY_LON", Location),
        FieldSpec::new("MY_MORSE_KEY_INFO", String),
        FieldSpec::enumerated("MY_MORSE_KEY_TYPE", "Morse_Key_Type"),
        FieldSpec::new("MY_NAME", String),
        FieldSpec::new("MY_NAME_INTL", IntlString),
        FieldSpec::new("MY_POSTAL_CODE", String),
        FieldSpec::new("MY_POSTAL_CODE_INTL", IntlString),
        FieldSpec::new("MY_POTA_REF", POTARefList),
        FieldSpec::new("MY_RIG", String),
        FieldSpec::new("MY_RIG_INTL", IntlString),
        FieldSpec::new("MY_SIG", String),
        FieldSpec::new("MY_SIG_INTL", IntlString),
        FieldSpec::new("MY_SIG_INFO", String),
        FieldSpec::new("MY_SIG_INFO_INTL", IntlString),
        FieldSpec::new("MY_SOTA_REF", SOTARef),
        FieldSpec::enumerated("MY_STATE", "Primary_Administrative_Subdivision").scoped_by("MY_DXCC"),
        FieldSpec::new("MY_STREET", String),
        FieldSpec::new("MY_STREET_INTL", IntlString),
        FieldSpec::new("MY_USACA_COUNTIES", SecondarySubdivisionList),
        FieldSpec::new("MY_VUCC_GRIDS", GridSquareList),
        FieldSpec::new("MY_WWFF_REF", WWFFRef),
        FieldSpec::new("NAME", String),
        FieldSpec::new("NAME_INTL", IntlString),
        FieldSpec::new("NOTES", MultilineString),
        FieldSpec::new("NOTES_INTL", IntlMultilineString),
        FieldSpec::new("NR_BURSTS", Integer).min("0"),
        FieldSpec::new("NR_PINGS", Integer).min("0"),
        FieldSpec::new("OPERATOR", String),
        FieldSpec::new("OWNER_CALLSIGN", String),
        FieldSpec::new("PFX", String),
        FieldSpec::new("POTA_REF", POTARefList),
        FieldSpec::new("PRECEDENCE", String),
        FieldSpec::enumerated("PROP_MODE", "Propagation_Mode"),
        FieldSpec::new("PUBLIC_KEY", String),
        FieldSpec::new("QRZCOM_QSO_DOWNLOAD_DATE", Date),
        FieldSpec::enumerated("QRZCOM_QSO_DOWNLOAD_STATUS", "QSO_Download_Status"),
        FieldSpec::new("QRZCOM_QSO_UPLOAD_DATE", Date),
        FieldSpec::enumerated("QRZCOM_QSO_UPLOAD_STATUS", "QSO_Upload_Status"),
        FieldSpec::new("QSLMSG", MultilineString),
        FieldSpec::new("QSLMSG_INTL", IntlMultilineString),
        FieldSpec::new("QSLMSG_RCVD", MultilineString),
        FieldSpec::new("QSLRDATE", Date),
        FieldSpec::new("QSLSDATE", Date),
        FieldSpec::enumerated("QSL_RCVD", "QSL_Rcvd"),
        FieldSpec::enumerated("QSL_RCVD_VIA", "QSL_Via"),
        FieldSpec::enumerated("QSL_SENT", "QSL_Sent"),
        FieldSpec::enumerated("QSL_SENT_VIA", "QSL_Via"),
        FieldSpec::new("QSL_VIA", String),
        FieldSpec::enumerated("QSO_COMPLETE", "QSO_Complete"),
        FieldSpec::new("QSO_DATE", Date),
        FieldSpec::new("QSO_DATE_OFF", Date),
        FieldSpec::new("QSO_RANDOM", Boolean),
        FieldSpec::new("QTH", String),
        FieldSpec::new("QTH_INTL", IntlString),
        FieldSpec::enumerated("REGION", "Region").scoped_by("DXCC"),
        FieldSpec::new("RIG", MultilineString),
        FieldSpec::new("RIG_INTL", IntlMultilineString),
        FieldSpec::new("RST_RCVD", String),
        FieldSpec::new("RST_SENT", String),
        FieldSpec::new("RX_PWR", Number).min("0"),
        FieldSpec::new("SAT_MODE", String),
        FieldSpec::new("SAT_NAME", String),
        FieldSpec::new("SFI", Integer).range("0", "300"),
        FieldSpec::new("SIG", String),
        FieldSpec::new("SIG_INTL", IntlString),
        FieldSpec::new("SIG_INFO", String),
        FieldSpec::new("SIG_INFO_INTL", IntlString),
        FieldSpec::new("SILENT_KEY", Boolean),
        FieldSpec::new("SKCC", String),
        FieldSpec::new("SOTA_REF", SOTARef),
        FieldSpec::new("SRX", Integer).min("0"),
        FieldSpec::new("SRX_STRING", String),
        FieldSpec::enumerated("STATE", "Primary_Administrative_Subdivision").scoped_by("DXCC"),
        FieldSpec::new("STATION_CALLSIGN", String),
        FieldSpec::new("STX", Integer).min("0"),
        FieldSpec::new("STX_STRING", String),
        FieldSpec::new("SUBMODE", String).with_enum("Submode").scoped_by("MODE"),
        FieldSpec::new("SWL", Boolean),
        FieldSpec::new("TEN_TEN", PositiveInteger),
        FieldSpec::new("TIME_OFF", Time),
        FieldSpec::new("TIME_ON", Time),
        FieldSpec::new("TX_PWR", Number).min("0"),
        FieldSpec::new("UKSMG", PositiveInteger),
        FieldSpec::new("USACA_COUNTIES", SecondarySubdivisionList),
        FieldSpec::new("VE_PROV", String).import_only(),
        FieldSpec::new("VUCC_GRIDS", GridSquareList),
        FieldSpec::new("WEB", String),
        FieldSpec::new("WWFF_REF", WWFFRef),
        FieldSpec::new("AWARD", AwardList).import_only(),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for f in FIELDS {
            assert!(seen.insert(f.name), "duplicate field {}", f.name);
            assert!(!f.name.is_empty());
            assert!(f
                .name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        }
    }

    #[test]
    fn test_from_spec_parses_bounds() {
        let spec = FIELDS.iter().find(|f| f.name == "ANT_EL").unwrap();
        let def = FieldDef::from_spec(spec).unwrap();
        assert_eq!(def.bounds(), (Some(-90.0), Some(90.0)));

        let cqz = FieldDef::from_spec(FIELDS.iter().find(|f| f.name == "CQZ").unwrap()).unwrap();
        assert_eq!(cqz.bounds(), (Some(1.0), Some(40.0)));

        let fists = FieldDef::from_spec(FIELDS.iter().find(|f| f.name == "FISTS").unwrap()).unwrap();
        assert_eq!(fists.bounds(), (Some(1.0), None));
    }

    #[test]
    fn test_malformed_bounds_are_config_errors() {
        let bad = FieldSpec::new("BROKEN", DataType::Number).range("1O", "20");
        assert!(matches!(FieldDef::from_spec(&bad), Err(Error::Config(_))));
        let inverted = FieldSpec::new("BROKEN", DataType::Number).range("20", "10");
        assert!(matches!(FieldDef::from_spec(&inverted), Err(Error::Config(_))));
    }

    #[test]
    fn test_latitude_longitude_names() {
        assert!(FieldDef::new("my_lat", DataType::Location).is_latitude());
        assert!(FieldDef::new("LON", DataType::Location).is_longitude());
        let custom = FieldDef::user_defined("HOME_LAT", DataType::Location, vec![], None, None);
        assert!(!custom.is_latitude());
    }
}
