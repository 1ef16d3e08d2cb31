// ISO 3166 country codes mapped to DXCC entities
// Reference: ISO 3166-1 and ISO 3166-2, ADIF 3.1.4 POTA reference suffixes
//
// A country may span several DXCC entities (island groups, devolved
// nations). When a subdivision code is known it selects one entity;
// otherwise the first entity listed is the mainland.

use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoCountry {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    /// Kosovo has a user-assigned alpha code and no numeric code
    pub numeric: Option<u16>,
    pub name: &'static str,
    pub dxcc: &'static [u16],
    /// Full ISO 3166-2 subdivision code to DXCC entity
    pub subdivisions: &'static [(&'static str, u16)],
}

pub const ISO_COUNTRIES: &[IsoCountry] = &[
    IsoCountry { alpha2: "AD", alpha3: "AND", numeric: Some(20), name: "Andorra", dxcc: &[203], subdivisions: &[] },
    IsoCountry { alpha2: "AE", alpha3: "ARE", numeric: Some(784), name: "United Arab Emirates", dxcc: &[391], subdivisions: &[] },
    IsoCountry { alpha2: "AF", alpha3: "AFG", numeric: Some(4), name: "Afghanistan", dxcc: &[3], subdivisions: &[] },
    IsoCountry { alpha2: "AL", alpha3: "ALB", numeric: Some(8), name: "Albania", dxcc: &[7], subdivisions: &[] },
    IsoCountry { alpha2: "AM", alpha3: "ARM", numeric: Some(51), name: "Armenia", dxcc: &[14], subdivisions: &[] },
    IsoCountry { alpha2: "AQ", alpha3: "ATA", numeric: Some(10), name: "Antarctica", dxcc: &[13], subdivisions: &[] },
    IsoCountry { alpha2: "AR", alpha3: "ARG", numeric: Some(32), name: "Argentina", dxcc: &[100], subdivisions: &[] },
    IsoCountry { alpha2: "AT", alpha3: "AUT", numeric: Some(40), name: "Austria", dxcc: &[206], subdivisions: &[] },
    IsoCountry { alpha2: "AU", alpha3: "AUS", numeric: Some(36), name: "Australia", dxcc: &[150, 147, 171, 303], subdivisions: &[] },
    IsoCountry { alpha2: "AZ", alpha3: "AZE", numeric: Some(31), name: "Azerbaijan", dxcc: &[18], subdivisions: &[] },
    IsoCountry { alpha2: "BA", alpha3: "BIH", numeric: Some(70), name: "Bosnia and Herzegovina", dxcc: &[501], subdivisions: &[] },
    IsoCountry { alpha2: "BE", alpha3: "BEL", numeric: Some(56), name: "Belgium", dxcc: &[209], subdivisions: &[] },
    IsoCountry { alpha2: "BG", alpha3: "BGR", numeric: Some(100), name: "Bulgaria", dxcc: &[212], subdivisions: &[] },
    IsoCountry { alpha2: "BR", alpha3: "BRA", numeric: Some(76), name: "Brazil", dxcc: &[108, 56, 253, 273], subdivisions: &[] },
    IsoCountry { alpha2: "BY", alpha3: "BLR", numeric: Some(112), name: "Belarus", dxcc: &[27], subdivisions: &[] },
    IsoCountry { alpha2: "CA", alpha3: "CAN", numeric: Some(124), name: "Canada", dxcc: &[1, 211], subdivisions: &[] },
    IsoCountry { alpha2: "CH", alpha3: "CHE", numeric: Some(756), name: "Switzerland", dxcc: &[287], subdivisions: &[] },
    IsoCountry { alpha2: "CL", alpha3: "CHL", numeric: Some(152), name: "Chile", dxcc: &[112, 47, 125, 217], subdivisions: &[] },
    IsoCountry { alpha2: "CN", alpha3: "CHN", numeric: Some(156), name: "China", dxcc: &[318], subdivisions: &[] },
    IsoCountry { alpha2: "CO", alpha3: "COL", numeric: Some(170), name: "Colombia", dxcc: &[116, 161, 216], subdivisions: &[] },
    IsoCountry { alpha2: "CY", alpha3: "CYP", numeric: Some(196), name: "Cyprus", dxcc: &[215], subdivisions: &[] },
    IsoCountry { alpha2: "CZ", alpha3: "CZE", numeric: Some(203), name: "Czechia", dxcc: &[503], subdivisions: &[] },
    IsoCountry { alpha2: "DE", alpha3: "DEU", numeric: Some(276), name: "Germany", dxcc: &[230], subdivisions: &[] },
    IsoCountry { alpha2: "DK", alpha3: "DNK", numeric: Some(208), name: "Denmark", dxcc: &[221], subdivisions: &[] },
    IsoCountry { alpha2: "EC", alpha3: "ECU", numeric: Some(218), name: "Ecuador", dxcc: &[120, 71], subdivisions: &[("EC-W", 71)] },
    IsoCountry { alpha2: "EE", alpha3: "EST", numeric: Some(233), name: "Estonia", dxcc: &[52], subdivisions: &[] },
    IsoCountry { alpha2: "EG", alpha3: "EGY", numeric: Some(818), name: "Egypt", dxcc: &[478], subdivisions: &[] },
    IsoCountry { alpha2: "ES", alpha3: "ESP", numeric: Some(724), name: "Spain", dxcc: &[281, 21, 29, 32], subdivisions: &[("ES-PM", 21), ("ES-IB", 21), ("ES-CN", 29), ("ES-CE", 32), ("ES-ML", 32)] },
    IsoCountry { alpha2: "FI", alpha3: "FIN", numeric: Some(246), name: "Finland", dxcc: &[224, 5, 167], subdivisions: &[("FI-01", 5)] },
    IsoCountry { alpha2: "FJ", alpha3: "FJI", numeric: Some(242), name: "Fiji", dxcc: &[176, 460, 489], subdivisions: &[] },
    IsoCountry { alpha2: "FO", alpha3: "FRO", numeric: Some(234), name: "Faroe Islands", dxcc: &[222], subdivisions: &[] },
    IsoCountry { alpha2: "FR", alpha3: "FRA", numeric: Some(250), name: "France", dxcc: &[227, 214], subdivisions: &[("FR-20R", 214)] },
    IsoCountry { alpha2: "GB", alpha3: "GBR", numeric: Some(826), name: "United Kingdom", dxcc: &[223, 279, 294, 265], subdivisions: &[("GB-ENG", 223), ("GB-SCT", 279), ("GB-WLS", 294), ("GB-NIR", 265)] },
    IsoCountry { alpha2: "GG", alpha3: "GGY", numeric: Some(831), name: "Guernsey", dxcc: &[106], subdivisions: &[] },
    IsoCountry { alpha2: "GL", alpha3: "GRL", numeric: Some(304), name: "Greenland", dxcc: &[237], subdivisions: &[] },
    IsoCountry { alpha2: "GR", alpha3: "GRC", numeric: Some(300), name: "Greece", dxcc: &[236, 40, 45, 180], subdivisions: &[("GR-M", 40), ("GR-81", 45), ("GR-69", 180)] },
    IsoCountry { alpha2: "HR", alpha3: "HRV", numeric: Some(191), name: "Croatia", dxcc: &[497], subdivisions: &[] },
    IsoCountry { alpha2: "HU", alpha3: "HUN", numeric: Some(348), name: "Hungary", dxcc: &[239], subdivisions: &[] },
    IsoCountry { alpha2: "IE", alpha3: "IRL", numeric: Some(372), name: "Ireland", dxcc: &[245], subdivisions: &[] },
    IsoCountry { alpha2: "IL", alpha3: "ISR", numeric: Some(376), name: "Israel", dxcc: &[336], subdivisions: &[] },
    IsoCountry { alpha2: "IM", alpha3: "IMN", numeric: Some(833), name: "Isle of Man", dxcc: &[114], subdivisions: &[] },
    IsoCountry { alpha2: "IN", alpha3: "IND", numeric: Some(356), name: "India", dxcc: &[324, 11, 142], subdivisions: &[("IN-AN", 11), ("IN-LD", 142)] },
    IsoCountry { alpha2: "IS", alpha3: "ISL", numeric: Some(352), name: "Iceland", dxcc: &[242], subdivisions: &[] },
    IsoCountry { alpha2: "IT", alpha3: "ITA", numeric: Some(380), name: "Italy", dxcc: &[248, 225], subdivisions: &[("IT-88", 225)] },
    IsoCountry { alpha2: "JE", alpha3: "JEY", numeric: Some(832), name: "Jersey", dxcc: &[122], subdivisions: &[] },
    IsoCountry { alpha2: "JP", alpha3: "JPN", numeric: Some(392), name: "Japan", dxcc: &[339, 192, 177], subdivisions: &[] },
    IsoCountry { alpha2: "KR", alpha3: "KOR", numeric: Some(410), name: "Korea, Republic of", dxcc: &[137], subdivisions: &[] },
    IsoCountry { alpha2: "KZ", alpha3: "KAZ", numeric: Some(398), name: "Kazakhstan", dxcc: &[130], subdivisions: &[] },
    IsoCountry { alpha2: "LI", alpha3: "LIE", numeric: Some(438), name: "Liechtenstein", dxcc: &[251], subdivisions: &[] },
    IsoCountry { alpha2: "LT", alpha3: "LTU", numeric: Some(440), name: "Lithuania", dxcc: &[146], subdivisions: &[] },
    IsoCountry { alpha2: "LU", alpha3: "LUX", numeric: Some(442), name: "Luxembourg", dxcc: &[254], subdivisions: &[] },
    IsoCountry { alpha2: "LV", alpha3: "LVA", numeric: Some(428), name: "Latvia", dxcc: &[145], subdivisions: &[] },
    IsoCountry { alpha2: "MC", alpha3: "MCO", numeric: Some(492), name: "Monaco", dxcc: &[260], subdivisions: &[] },
    IsoCountry { alpha2: "MD", alpha3: "MDA", numeric: Some(498), name: "Moldova", dxcc: &[179], subdivisions: &[] },
    IsoCountry { alpha2: "ME", alpha3: "MNE", numeric: Some(499), name: "Montenegro", dxcc: &[514], subdivisions: &[] },
    IsoCountry { alpha2: "MK", alpha3: "MKD", numeric: Some(807), name: "North Macedonia", dxcc: &[502], subdivisions: &[] },
    IsoCountry { alpha2: "MT", alpha3: "MLT", numeric: Some(470), name: "Malta", dxcc: &[257], subdivisions: &[] },
    IsoCountry { alpha2: "MX", alpha3: "MEX", numeric: Some(484), name: "Mexico", dxcc: &[50, 204], subdivisions: &[] },
    IsoCountry { alpha2: "MY", alpha3: "MYS", numeric: Some(458), name: "Malaysia", dxcc: &[299, 46], subdivisions: &[("MY-12", 46), ("MY-13", 46), ("MY-15", 46)] },
    IsoCountry { alpha2: "NL", alpha3: "NLD", numeric: Some(528), name: "Netherlands", dxcc: &[263], subdivisions: &[] },
    IsoCountry { alpha2: "NO", alpha3: "NOR", numeric: Some(578), name: "Norway", dxcc: &[266], subdivisions: &[] },
    IsoCountry { alpha2: "NZ", alpha3: "NZL", numeric: Some(554), name: "New Zealand", dxcc: &[170, 34, 133, 16], subdivisions: &[] },
    IsoCountry { alpha2: "PL", alpha3: "POL", numeric: Some(616), name: "Poland", dxcc: &[269], subdivisions: &[] },
    IsoCountry { alpha2: "PS", alpha3: "PSE", numeric: Some(275), name: "Palestine, State of", dxcc: &[510], subdivisions: &[] },
    IsoCountry { alpha2: "PT", alpha3: "PRT", numeric: Some(620), name: "Portugal", dxcc: &[272, 149, 256], subdivisions: &[("PT-20", 149), ("PT-30", 256)] },
    IsoCountry { alpha2: "RO", alpha3: "ROU", numeric: Some(642), name: "Romania", dxcc: &[275], subdivisions: &[] },
    IsoCountry { alpha2: "RS", alpha3: "SRB", numeric: Some(688), name: "Serbia", dxcc: &[296], subdivisions: &[] },
    IsoCountry { alpha2: "RU", alpha3: "RUS", numeric: Some(643), name: "Russian Federation", dxcc: &[54, 15, 126, 61], subdivisions: &[("RU-KGD", 126)] },
    IsoCountry { alpha2: "SE", alpha3: "SWE", numeric: Some(752), name: "Sweden", dxcc: &[284], subdivisions: &[] },
    IsoCountry { alpha2: "SI", alpha3: "SVN", numeric: Some(705), name: "Slovenia", dxcc: &[499], subdivisions: &[] },
    IsoCountry { alpha2: "SJ", alpha3: "SJM", numeric: Some(744), name: "Svalbard and Jan Mayen", dxcc: &[259, 118], subdivisions: &[] },
    IsoCountry { alpha2: "SK", alpha3: "SVK", numeric: Some(703), name: "Slovakia", dxcc: &[504], subdivisions: &[] },
    IsoCountry { alpha2: "SM", alpha3: "SMR", numeric: Some(674), name: "San Marino", dxcc: &[278], subdivisions: &[] },
    IsoCountry { alpha2: "TR", alpha3: "TUR", numeric: Some(792), name: "Turkey", dxcc: &[390], subdivisions: &[] },
    IsoCountry { alpha2: "TT", alpha3: "TTO", numeric: Some(780), name: "Trinidad and Tobago", dxcc: &[90], subdivisions: &[] },
    IsoCountry { alpha2: "UA", alpha3: "UKR", numeric: Some(804), name: "Ukraine", dxcc: &[288], subdivisions: &[] },
    IsoCountry { alpha2: "US", alpha3: "USA", numeric: Some(840), name: "United States of America", dxcc: &[291, 6, 110], subdivisions: &[("US-AK", 6), ("US-HI", 110)] },
    IsoCountry { alpha2: "VA", alpha3: "VAT", numeric: Some(336), name: "Holy See", dxcc: &[295], subdivisions: &[] },
    IsoCountry { alpha2: "XK", alpha3: "XKX", numeric: None, name: "Kosovo", dxcc: &[522], subdivisions: &[] },
    IsoCountry { alpha2: "ZA", alpha3: "ZAF", numeric: Some(710), name: "South Africa", dxcc: &[462, 201], subdivisions: &[] },
];

static BY_ALPHA: OnceLock<HashMap<&'static str, &'static IsoCountry>> = OnceLock::new();
static BY_NUMERIC: OnceLock<HashMap<u16, &'static IsoCountry>> = OnceLock::new();

fn alpha_map() -> &'static HashMap<&'static str, &'static IsoCountry> {
    BY_ALPHA.get_or_init(|| {
        let mut map = HashMap::with_capacity(ISO_COUNTRIES.len() * 2);
        for c in ISO_COUNTRIES {
            map.insert(c.alpha2, c);
            map.insert(c.alpha3, c);
        }
        map
    })
}

fn numeric_map() -> &'static HashMap<u16, &'static IsoCountry> {
    BY_NUMERIC.get_or_init(|| {
        ISO_COUNTRIES
            .iter()
            .filter_map(|c| c.numeric.map(|n| (n, c)))
            .collect()
    })
}

/// Look up a country by alpha-2, alpha-3 or numeric code
pub fn iso_country(code: &str) -> Option<&'static IsoCountry> {
    let code = code.trim();
    if let Ok(n) = code.parse::<u16>() {
        return numeric_map().get(&n).copied();
    }
    alpha_map().get(code.to_ascii_uppercase().as_str()).copied()
}

/// DXCC entities for a country code or a subdivision code such as
/// `GB-SCT`. A known subdivision narrows the result to one entity.
pub fn dxcc_for_iso(code: &str) -> Vec<u16> {
    let code = code.trim().to_ascii_uppercase();
    let (country, sub) = match code.split_once('-') {
        Some((c, _)) => (c, Some(code.as_str())),
        None => (code.as_str(), None),
    };
    let Some(c) = iso_country(country) else {
        return Vec::new();
    };
    if let Some(sub) = sub {
        if let Some((_, dxcc)) = c.subdivisions.iter().find(|(s, _)| *s == sub) {
            return vec![*dxcc];
        }
    }
    c.dxcc.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::dxcc::entity_by_code;

    #[test]
    fn test_lookup_by_any_code() {
        assert_eq!(iso_country("tt").unwrap().name, "Trinidad and Tobago");
        assert_eq!(iso_country("TTO").unwrap().alpha2, "TT");
        assert_eq!(iso_country("780").unwrap().alpha2, "TT");
        assert!(iso_country("ZZ").is_none());
        assert!(iso_country("0").is_none());
    }

    #[test]
    fn test_subdivision_selects_entity() {
        assert_eq!(dxcc_for_iso("GB-SCT"), vec![279]);
        assert_eq!(dxcc_for_iso("GB"), vec![223, 279, 294, 265]);
        assert_eq!(dxcc_for_iso("US-AK"), vec![6]);
        // unknown subdivision falls back to the whole country
        assert_eq!(dxcc_for_iso("US-CA"), vec![291, 6, 110]);
        assert!(dxcc_for_iso("QQ-1").is_empty());
    }

    #[test]
    fn test_all_entities_known() {
        for c in ISO_COUNTRIES {
            assert!(!c.dxcc.is_empty(), "{}", c.alpha2);
            for code in c.dxcc {
                assert!(entity_by_code(*code).is_some(), "{} -> {}", c.alpha2, code);
            }
            for (sub, code) in c.subdivisions {
                assert!(sub.starts_with(c.alpha2), "{}", sub);
                assert!(c.dxcc.contains(code), "{}", sub);
            }
        }
    }
}
