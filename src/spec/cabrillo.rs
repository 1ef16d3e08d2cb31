// Cabrillo 3.0 band and mode mappings
// Reference: https://wwrof.org/cabrillo/cabrillo-qso-data/
//
// HF contacts carry a frequency in kHz; VHF and up may carry a band label
// instead. Bands without a Cabrillo category (60m, WARC) only appear as
// frequencies.

use super::modes::{mode_group, ModeGroup};

pub struct CabrilloBand {
    pub band: &'static str,
    /// Frequency column value when no exact frequency is known
    pub label: &'static str,
    pub category: Option<&'static str>,
    /// True when `label` is a band label rather than a kHz frequency
    pub is_label: bool,
}

const fn hf(band: &'static str, khz: &'static str, category: Option<&'static str>) -> CabrilloBand {
    CabrilloBand { band, label: khz, category, is_label: false }
}

const fn vhf(band: &'static str, label: &'static str, category: &'static str) -> CabrilloBand {
    CabrilloBand { band, label, category: Some(category), is_label: true }
}

pub const CABRILLO_BANDS: &[CabrilloBand] = &[
    hf("160m", "1800", Some("160M")),
    hf("80m", "3500", Some("80M")),
    hf("60m", "5060", None),
    hf("40m", "7000", Some("40M")),
    hf("30m", "10100", None),
    hf("20m", "14000", Some("20M")),
    hf("17m", "18068", None),
    hf("15m", "21000", Some("15M")),
    hf("12m", "24890", None),
    hf("10m", "28000", Some("10M")),
    vhf("6m", "50", "6M"),
    vhf("4m", "70", "4M"),
    vhf("2m", "144", "2M"),
    vhf("1.25m", "222", "222"),
    vhf("70cm", "432", "432"),
    vhf("33cm", "902", "902"),
    vhf("23cm", "1.2G", "1.2G"),
    vhf("13cm", "2.3G", "2.3G"),
    vhf("9cm", "3.4G", "3.4G"),
    vhf("6cm", "5.7G", "5.7G"),
    vhf("3cm", "10G", "10G"),
    vhf("1.25cm", "24G", "24G"),
    vhf("6mm", "47G", "47G"),
    vhf("4mm", "75G", "75G"),
    vhf("2.5mm", "122G", "122G"),
    vhf("2mm", "134G", "134G"),
    vhf("1mm", "241G", "241G"),
    vhf("submm", "LIGHT", "LIGHT"),
];

/// ADIF band for a Cabrillo band label such as `144` or `1.2G`
pub fn band_for_label(label: &str) -> Option<&'static str> {
    CABRILLO_BANDS
        .iter()
        .find(|b| b.is_label && b.label.eq_ignore_ascii_case(label))
        .map(|b| b.band)
}

pub fn cabrillo_band(band: &str) -> Option<&'static CabrilloBand> {
    CABRILLO_BANDS.iter().find(|b| b.band.eq_ignore_ascii_case(band))
}

/// Frequency column for a band with no FREQ value
pub fn label_for_band(band: &str) -> Option<&'static str> {
    cabrillo_band(band).map(|b| b.label)
}

pub const CABRILLO_MODES: &[(&str, &str)] = &[
    ("CW", "CW"),
    ("PH", "SSB"),
    ("FM", "FM"),
    ("RY", "RTTY"),
    ("DG", "DIGITAL"),
];

/// ADIF mode for a Cabrillo mode code
pub fn mode_for_code(code: &str) -> Option<&'static str> {
    CABRILLO_MODES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, m)| *m)
}

/// Cabrillo mode code for an ADIF mode
pub fn code_for_mode(mode: &str) -> &'static str {
    match mode.to_ascii_uppercase().as_str() {
        "CW" => "CW",
        "SSB" | "AM" => "PH",
        "FM" => "FM",
        "RTTY" => "RY",
        other => match mode_group(other) {
            ModeGroup::Phone => "PH",
            ModeGroup::CW => "CW",
            ModeGroup::Data | ModeGroup::Image => "DG",
        },
    }
}

/// CATEGORY-MODE value for a Cabrillo mode code
pub fn category_for_code(code: &str) -> &'static str {
    match code {
        "CW" => "CW",
        "PH" => "SSB",
        "FM" => "FM",
        "RY" => "RTTY",
        _ => "DIGI",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::bands::band_edges;

    #[test]
    fn test_band_labels() {
        assert_eq!(band_for_label("144"), Some("2m"));
        assert_eq!(band_for_label("1.2g"), Some("23cm"));
        assert_eq!(band_for_label("light"), Some("submm"));
        // kHz values are not labels
        assert_eq!(band_for_label("3500"), None);
        assert_eq!(label_for_band("80m"), Some("3500"));
        assert_eq!(label_for_band("70CM"), Some("432"));
    }

    #[test]
    fn test_every_band_known() {
        for b in CABRILLO_BANDS {
            assert!(band_edges(b.band).is_some(), "{}", b.band);
        }
    }

    #[test]
    fn test_modes() {
        assert_eq!(mode_for_code("PH"), Some("SSB"));
        assert_eq!(mode_for_code("ry"), Some("RTTY"));
        assert_eq!(mode_for_code("XX"), None);
        assert_eq!(code_for_mode("ssb"), "PH");
        assert_eq!(code_for_mode("AM"), "PH");
        assert_eq!(code_for_mode("FT8"), "DG");
        assert_eq!(category_for_code("DG"), "DIGI");
    }
}
