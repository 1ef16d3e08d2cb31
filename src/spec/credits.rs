// Award credits and sponsors
// Reference: ADIF 3.1.4 Credit, QSL_Medium and Award_Sponsor enumerations
//
// CreditList values are CREDIT or CREDIT:MEDIUM&MEDIUM; the medium part is
// checked against QSL_Medium. SponsoredAwardList values start with one of
// the Award_Sponsor prefixes.

use super::enumeration::EnumTable;

pub(crate) const CREDIT: EnumTable = EnumTable {
    name: "Credit",
    properties: &["Credit For", "Sponsor", "Award", "Facet"],
    rows: &[
        &["CQDX", "CQ Magazine", "CQ DX", "DXCC"],
        &["CQDXFIELD", "CQ Magazine", "CQ DX Field", "Grid square"],
        &["CQWAZ_MIXED", "CQ Magazine", "CQ Worked All Zones (WAZ)", "Mixed"],
        &["CQWAZ_CW", "CQ Magazine", "CQ Worked All Zones (WAZ)", "CW"],
        &["CQWAZ_PHONE", "CQ Magazine", "CQ Worked All Zones (WAZ)", "Phone"],
        &["CQWAZ_RTTY", "CQ Magazine", "CQ Worked All Zones (WAZ)", "RTTY"],
        &["CQWAZ_160m", "CQ Magazine", "CQ Worked All Zones (WAZ)", "160m"],
        &["CQWPX", "CQ Magazine", "CQ WPX", "Mixed"],
        &["CQWPX_BAND", "CQ Magazine", "CQ WPX", "Band"],
        &["CQWPX_MODE", "CQ Magazine", "CQ WPX", "Mode"],
        &["DXCC", "ARRL", "DX Century Club (DXCC)", "Mixed"],
        &["DXCC_BAND", "ARRL", "DX Century Club (DXCC)", "Band"],
        &["DXCC_MODE", "ARRL", "DX Century Club (DXCC)", "Mode"],
        &["DXCC_SATELLITE", "ARRL", "DX Century Club (DXCC)", "Satellite"],
        &["EAUSTRALIA", "eQSL", "eAustralia", "Mixed"],
        &["ECANADA", "eQSL", "eCanada", "Mixed"],
        &["ECOUNTY_STATE", "eQSL", "eCounty", "State"],
        &["EDX", "eQSL", "eDX", "Mixed"],
        &["EDX100", "eQSL", "eDX100", "Mixed"],
        &["EDX100_BAND", "eQSL", "eDX100", "Band"],
        &["EDX100_MODE", "eQSL", "eDX100", "Mode"],
        &["EECHOLINK50", "eQSL", "eEchoLink50", "Echolink"],
        &["EGRID_BAND", "eQSL", "eGrid", "Band"],
        &["EGRID_SATELLITE", "eQSL", "eGrid", "Satellite"],
        &["EPFX300", "eQSL", "ePfx300", "Mixed"],
        &["EPFX300_MODE", "eQSL", "ePfx300", "Mode"],
        &["EWAS", "eQSL", "eWAS", "Mixed"],
        &["EWAS_BAND", "eQSL", "eWAS", "Band"],
        &["EWAS_MODE", "eQSL", "eWAS", "Mode"],
        &["EWAS_SATELLITE", "eQSL", "eWAS", "Satellite"],
        &["EZ40", "eQSL", "eZ40", "Mixed"],
        &["EZ40_MODE", "eQSL", "eZ40", "Mode"],
        &["FFMA", "ARRL", "Fred Fish Memorial Award (FFMA)", "Mixed"],
        &["IOTA", "RSGB", "Islands on the Air (IOTA)", "Mixed"],
        &["IOTA_BASIC", "RSGB", "Islands on the Air (IOTA)", "Mixed"],
        &["IOTA_CONT", "RSGB", "Islands on the Air (IOTA)", "Continent"],
        &["IOTA_GROUP", "RSGB", "Islands on the Air (IOTA)", "Group"],
        &["RDA", "TAG", "Russian Districts Award (RDA)", "Mixed"],
        &["USACA", "CQ Magazine", "United States of America Counties (USA-CA)", "Mixed"],
        &["VUCC_BAND", "ARRL", "VHF/UHF Century Club Program (VUCC)", "Band"],
        &["VUCC_SATELLITE", "ARRL", "VHF/UHF Century Club Program (VUCC)", "Satellite"],
        &["WAB", "WAB AG", "Worked All Britain (WAB)", "Mixed"],
        &["WAC", "IARU", "Worked All Continents (WAC)", "Mixed"],
        &["WAC_BAND", "IARU", "Worked All Continents (WAC)", "Band"],
        &["WAE", "DARC", "Worked All Europe (WAE)", "Mixed"],
        &["WAE_BAND", "DARC", "Worked All Europe (WAE)", "Band"],
        &["WAE_MODE", "DARC", "Worked All Europe (WAE)", "Mode"],
        &["WAIP", "ARI", "Worked All Italian Provinces (WAIP)", "Mixed"],
        &["WAIP_BAND", "ARI", "Worked All Italian Provinces (WAIP)", "Band"],
        &["WAIP_MODE", "ARI", "Worked All Italian Provinces (WAIP)", "Mode"],
        &["WAS", "ARRL", "Worked All States (WAS)", "Mixed"],
        &["WAS_BAND", "ARRL", "Worked All States (WAS)", "Band"],
        &["WAS_EME", "ARRL", "Worked All States (WAS)", "EME"],
        &["WAS_MODE", "ARRL", "Worked All States (WAS)", "Mode"],
        &["WAS_NOVICE", "ARRL", "Worked All States (WAS)", "Novice"],
        &["WAS_QRP", "ARRL", "Worked All States (WAS)", "QRP"],
        &["WAS_SATELLITE", "ARRL", "Worked All States (WAS)", "Satellite"],
        &["WITUZ", "RSGB", "Worked ITU Zones (WITUZ)", "Mixed"],
        &["WITUZ_BAND", "RSGB", "Worked ITU Zones (WITUZ)", "Band"],
    ],
    scope_property: None,
    duplicates: false,
};

pub(crate) const QSL_MEDIUM: EnumTable = EnumTable {
    name: "QSL_Medium",
    properties: &["Medium", "Description"],
    rows: &[
        &["CARD", "QSO confirmation via paper QSL card"],
        &["EQSL", "QSO confirmation via eQSL.cc"],
        &["LOTW", "QSO confirmation via ARRL Logbook of the World"],
    ],
    scope_property: None,
    duplicates: false,
};

pub(crate) const AWARD_SPONSOR: EnumTable = EnumTable {
    name: "Award_Sponsor",
    properties: &["Sponsoring Organization", "Sponsor"],
    rows: &[
        &["ADIF_", "ADIF Development Group"],
        &["ARI_", "ARI - l'Associazione Radioamatori Italiani"],
        &["ARRL_", "ARRL - American Radio Relay League"],
        &["CQ_", "CQ Magazine"],
        &["DARC_", "DARC - Deutscher Amateur-Radio-Club e.V."],
        &["EQSL_", "eQSL"],
        &["IARU_", "IARU - International Amateur Radio Union"],
        &["JARL_", "JARL - Japan Amateur Radio League"],
        &["RSGB_", "RSGB - Radio Society of Great Britain"],
        &["TAG_", "TAG - Tambov award group"],
        &["WABAG_", "WAB - Worked all Britain"],
    ],
    scope_property: None,
    duplicates: false,
};

/// Split a CreditList element into credit and optional media
pub fn split_credit(item: &str) -> (&str, Vec<&str>) {
    match item.split_once(':') {
        Some((credit, media)) => (credit, media.split('&').collect()),
        None => (item, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_credit() {
        assert_eq!(split_credit("IOTA"), ("IOTA", vec![]));
        assert_eq!(split_credit("WAS:LOTW&CARD"), ("WAS", vec!["LOTW", "CARD"]));
    }
}
