// ARRL/RAC Sections and CQ WAE/WAE Regions
// Reference: ADIF 3.1.4 ARRL_Section and Region enumerations

use super::enumeration::EnumTable;

pub(crate) const ARRL_SECTION: EnumTable = EnumTable {
    name: "ARRL_Section",
    properties: &["Abbreviation", "Section Name", "DXCC Entity Code", "From Date", "Deleted Date"],
    rows: &[
        &["AB", "Alberta", "1"],
        &["AK", "Alaska", "6"],
        &["AL", "Alabama", "291"],
        &["AR", "Arkansas", "291"],
        &["AZ", "Arizona", "291"],
        &["BC", "British Columbia", "1"],
        &["CO", "Colorado", "291"],
        &["CT", "Connecticut", "291"],
        &["DE", "Delaware", "291"],
        &["EB", "East Bay", "291"],
        &["EMA", "Eastern Massachusetts", "291"],
        &["ENY", "Eastern New York", "291"],
        &["EPA", "Eastern Pennsylvania", "291"],
        &["EWA", "Eastern Washington", "291"],
        &["GA", "Georgia", "291"],
        &["GH", "Golden Horseshoe", "1", "2023-11-01"],
        &["GTA", "Greater Toronto Area", "1", "2012-09-01"],
        &["IA", "Iowa", "291"],
        &["ID", "Idaho", "291"],
        &["IL", "Illinois", "291"],
        &["IN", "Indiana", "291"],
        &["KS", "Kansas", "291"],
        &["KY", "Kentucky", "291"],
        &["LA", "Louisiana", "291"],
        &["LAX", "Los Angeles", "291"],
        &["MAR", "Maritime", "1"],
        &["MB", "Manitoba", "1"],
        &["MDC", "Maryland-DC", "291"],
        &["ME", "Maine", "291"],
        &["MI", "Michigan", "291"],
        &["MN", "Minnesota", "291"],
        &["MO", "Missouri", "291"],
        &["MS", "Mississippi", "291"],
        &["MT", "Montana", "291"],
        &["NB", "New Brunswick", "1", "", "2003-11-08"],
        &["NC", "North Carolina", "291"],
        &["ND", "North Dakota", "291"],
        &["NE", "Nebraska", "291"],
        &["NFL", "Northern Florida", "291"],
        &["NH", "New Hampshire", "291"],
        &["NL", "Newfoundland/Labrador", "1"],
        &["NLI", "New York City-Long Island", "291"],
        &["NM", "New Mexico", "291"],
        &["NNJ", "Northern New Jersey", "291"],
        &["NNY", "Northern New York", "291"],
        &["NS", "Nova Scotia", "1", "", "2003-11-08"],
        &["NT", "Northern Territories", "1"],
        &["NTX", "North Texas", "291"],
        &["NV", "Nevada", "291"],
        &["OH", "Ohio", "291"],
        &["OK", "Oklahoma", "291"],
        &["ON", "Ontario", "1", "", "2012-09-01"],
        &["ONE", "Ontario East", "1", "2012-09-01"],
        &["ONN", "Ontario North", "1", "2012-09-01"],
        &["ONS", "Ontario South", "1", "2012-09-01"],
        &["OR", "Oregon", "291"],
        &["ORG", "Orange", "291"],
        &["PAC", "Pacific", "110"],
        &["PE", "Prince Edward Island", "1", "", "2003-11-08"],
        &["PR", "Puerto Rico", "202"],
        &["QC", "Quebec", "1"],
        &["RI", "Rhode Island", "291"],
        &["SB", "Santa Barbara", "291"],
        &["SC", "South Carolina", "291"],
        &["SCV", "Santa Clara Valley", "291"],
        &["SD", "South Dakota", "291"],
        &["SDG", "San Diego", "291"],
        &["SF", "San Francisco", "291"],
        &["SFL", "Southern Florida", "291"],
        &["SJV", "San Joaquin Valley", "291"],
        &["SK", "Saskatchewan", "1"],
        &["SNJ", "Southern New Jersey", "291"],
        &["STX", "South Texas", "291"],
        &["SV", "Sacramento Valley", "291"],
        &["TN", "Tennessee", "291"],
        &["UT", "Utah", "291"],
        &["VA", "Virginia", "291"],
        &["VI", "US Virgin Islands", "285"],
        &["VT", "Vermont", "291"],
        &["WCF", "West Central Florida", "291"],
        &["WI", "Wisconsin", "291"],
        &["WMA", "Western Massachusetts", "291"],
        &["WNY", "Western New York", "291"],
        &["WPA", "Western Pennsylvania", "291"],
        &["WTX", "West Texas", "291"],
        &["WV", "West Virginia", "291"],
        &["WWA", "Western Washington", "291"],
        &["WY", "Wyoming", "291"],
    ],
    scope_property: None,
    duplicates: false,
};

pub(crate) const REGION: EnumTable = EnumTable {
    name: "Region",
    properties: &["Region Entity Code", "DXCC Entity Code", "Region", "Prefix", "Applicability"],
    rows: &[
        &["NONE", "", "Not within a WAE or CQ region that is within a DXCC entity"],
        &["IV", "206", "ITU Vienna", "4U1V", "CQ, WAE"],
        &["AI", "248", "African Italy", "IG9", "WAE"],
        &["SY", "248", "Sicily", "IT9", "WAE"],
        &["BI", "259", "Bear Island", "JW/b", "WAE"],
        &["SI", "279", "Shetland Islands", "GM/s", "WAE"],
        &["KO", "296", "Kosovo", "YU8", "CQ, WAE"],
        &["KO", "522", "Kosovo", "Z6", "CQ, WAE"],
        &["ET", "390", "European Turkey", "TA1", "WAE"],
    ],
    scope_property: Some("DXCC Entity Code"),
    duplicates: true,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::enumeration::Enumeration;

    #[test]
    fn test_sections_load() {
        let e = Enumeration::from_table(&ARRL_SECTION).unwrap();
        assert_eq!(e.lookup("wwa")[0].property("Section Name"), Some("Western Washington"));
        assert_eq!(e.lookup("NB")[0].property("Deleted Date"), Some("2003-11-08"));
    }

    #[test]
    fn test_region_scoped_by_entity() {
        let e = Enumeration::from_table(&REGION).unwrap();
        assert_eq!(e.lookup("KO").len(), 2);
        let italy: Vec<_> = e.scope_values("248").iter().map(|v| v.code()).collect();
        assert_eq!(italy, vec!["AI", "SY"]);
    }
}
