// Administrative Subdivisions
// Reference: ADIF 3.1.4 Primary_Administrative_Subdivision and
// Secondary_Administrative_Subdivision enumerations
//
// Codes are only unique within one DXCC entity (WA is both Washington and
// Western Australia), so the primary table allows duplicates and is scoped
// by the "DXCC Entity Code" property.

use super::enumeration::EnumTable;

pub(crate) const PRIMARY_SUBDIVISION: EnumTable = EnumTable {
    name: "Primary_Administrative_Subdivision",
    properties: &["Code", "Primary Administrative Subdivision", "DXCC Entity Code", "Import-only"],
    rows: &[
        // Canada
        &["NS", "Nova Scotia", "1"],
        &["QC", "Québec", "1"],
        &["ON", "Ontario", "1"],
        &["MB", "Manitoba", "1"],
        &["SK", "Saskatchewan", "1"],
        &["AB", "Alberta", "1"],
        &["BC", "British Columbia", "1"],
        &["NT", "Northwest Territories", "1"],
        &["NB", "New Brunswick", "1"],
        &["NL", "Newfoundland and Labrador", "1"],
        &["YT", "Yukon", "1"],
        &["PE", "Prince Edward Island", "1"],
        &["NU", "Nunavut", "1"],
        // Alaska and Hawaii are their own entities
        &["AK", "Alaska", "6"],
        &["HI", "Hawaii", "110"],
        // Australia
        &["ACT", "Australian Capital Territory", "150"],
        &["NSW", "New South Wales", "150"],
        &["VIC", "Victoria", "150"],
        &["QLD", "Queensland", "150"],
        &["SA", "South Australia", "150"],
        &["WA", "Western Australia", "150"],
        &["TAS", "Tasmania", "150"],
        &["NT", "Northern Territory", "150"],
        // Federal Republic of Germany
        &["BB", "Brandenburg", "230"],
        &["BE", "Berlin", "230"],
        &["BW", "Baden-Württemberg", "230"],
        &["BY", "Freistaat Bayern", "230"],
        &["HB", "Freie Hansestadt Bremen", "230"],
        &["HE", "Hessen", "230"],
        &["HH", "Freie und Hansestadt Hamburg", "230"],
        &["MV", "Mecklenburg-Vorpommern", "230"],
        &["NI", "Niedersachsen", "230"],
        &["NW", "Nordrhein-Westfalen", "230"],
        &["RP", "Rheinland-Pfalz", "230"],
        &["SL", "Saarland", "230"],
        &["SH", "Schleswig-Holstein", "230"],
        &["SN", "Freistaat Sachsen", "230"],
        &["ST", "Sachsen-Anhalt", "230"],
        &["TH", "Freistaat Thüringen", "230"],
        // United States of America
        &["AL", "Alabama", "291"],
        &["AR", "Arkansas", "291"],
        &["AZ", "Arizona", "291"],
        &["CA", "California", "291"],
        &["CO", "Colorado", "291"],
        &["CT", "Connecticut", "291"],
        &["DC", "District of Columbia", "291"],
        &["DE", "Delaware", "291"],
        &["FL", "Florida", "291"],
        &["GA", "Georgia", "291"],
        &["IA", "Iowa", "291"],
        &["ID", "Idaho", "291"],
        &["IL", "Illinois", "291"],
        &["IN", "Indiana", "291"],
        &["KS", "Kansas", "291"],
        &["KY", "Kentucky", "291"],
        &["LA", "Louisiana", "291"],
        &["MA", "Massachusetts", "291"],
        &["MD", "Maryland", "291"],
        &["ME", "Maine", "291"],
        &["MI", "Michigan", "291"],
        &["MN", "Minnesota", "291"],
        &["MO", "Missouri", "291"],
        &["MS", "Mississippi", "291"],
        &["MT", "Montana", "291"],
        &["NC", "North Carolina", "291"],
        &["ND", "North Dakota", "291"],
        &["NE", "Nebraska", "291"],
        &["NH", "New Hampshire", "291"],
        &["NJ", "New Jersey", "291"],
        &["NM", "New Mexico", "291"],
        &["NV", "Nevada", "291"],
        &["NY", "New York", "291"],
        &["OH", "Ohio", "291"],
        &["OK", "Oklahoma", "291"],
        &["OR", "Oregon", "291"],
        &["PA", "Pennsylvania", "291"],
        &["RI", "Rhode Island", "291"],
        &["SC", "South Carolina", "291"],
        &["SD", "South Dakota", "291"],
        &["TN", "Tennessee", "291"],
        &["TX", "Texas", "291"],
        &["UT", "Utah", "291"],
        &["VA", "Virginia", "291"],
        &["VT", "Vermont", "291"],
        &["WA", "Washington", "291"],
        &["WI", "Wisconsin", "291"],
        &["WV", "West Virginia", "291"],
        &["WY", "Wyoming", "291"],
    ],
    scope_property: Some("DXCC Entity Code"),
    duplicates: true,
};

pub(crate) const SECONDARY_SUBDIVISION: EnumTable = EnumTable {
    name: "Secondary_Administrative_Subdivision",
    properties: &["Code", "DXCC Entity Code", "Import-only"],
    rows: &[
        &["AK,Aleutians East", "6"],
        &["AK,Aleutians West", "6"],
        &["AK,Anchorage", "6"],
        &["AK,Bethel", "6"],
        &["AK,Bristol Bay", "6"],
        &["AK,Denali", "6"],
        &["AK,Dillingham", "6"],
        &["AK,Fairbanks North Star", "6"],
        &["AK,Haines", "6"],
        &["AK,Hoonah-Angoon", "6"],
        &["AK,Juneau", "6"],
        &["AK,Kenai Peninsula", "6"],
        &["AK,Ketchikan Gateway", "6"],
        &["AK,Kodiak Island", "6"],
        &["AK,Kusilvak", "6"],
        &["AK,Lake and Peninsula", "6"],
        &["AK,Matanuska-Susitna", "6"],
        &["AK,Nome", "6"],
        &["AK,North Slope", "6"],
        &["AK,Northwest Arctic", "6"],
        &["AK,Petersburg", "6"],
        &["AK,Prince of Wales-Hyder", "6"],
        &["AK,Sitka", "6"],
        &["AK,Skagway", "6"],
        &["AK,Southeast Fairbanks", "6"],
        &["AK,Valdez-Cordova", "6", "true"],
        &["AK,Wade Hampton", "6", "true"],
        &["AK,Wrangell", "6"],
        &["AK,Yakutat", "6"],
        &["AK,Yukon-Koyukuk", "6"],
    ],
    scope_property: Some("DXCC Entity Code"),
    duplicates: false,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::enumeration::Enumeration;

    #[test]
    fn test_codes_shared_across_entities() {
        let e = Enumeration::from_table(&PRIMARY_SUBDIVISION).unwrap();
        let wa = e.lookup("wa");
        assert_eq!(wa.len(), 2);
        let us: Vec<_> = e.scope_values("291").iter().map(|v| v.code()).collect();
        assert_eq!(us.len(), 51);
        assert!(us.contains(&"WA"));
        assert!(!us.contains(&"NSW"));
    }

    #[test]
    fn test_secondary_alaska_only() {
        let e = Enumeration::from_table(&SECONDARY_SUBDIVISION).unwrap();
        assert_eq!(e.scope_values("6").len(), SECONDARY_SUBDIVISION.rows.len());
        assert!(e.scope_values("291").is_empty());
        assert!(e.lookup("AK,Wade Hampton")[0].is_import_only());
    }
}
