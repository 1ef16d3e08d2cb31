// Amateur Radio Band Definitions
// Reference: ADIF 3.1.4 Band Enumeration
//
// Frequency-to-band conversion uses the lower and upper edges of the
// enumeration, inclusive, in MHz.

use super::enumeration::EnumTable;

pub(crate) const BAND: EnumTable = EnumTable {
    name: "Band",
    properties: &["Band", "Lower Freq (MHz)", "Upper Freq (MHz)"],
    rows: &[
        &["2190m", ".1357", ".1378"],
        &["630m", ".472", ".479"],
        &["560m", ".501", ".504"],
        &["160m", "1.8", "2.0"],
        &["80m", "3.5", "4.0"],
        &["60m", "5.06", "5.45"],
        &["40m", "7.0", "7.3"],
        &["30m", "10.1", "10.15"],
        &["20m", "14.0", "14.35"],
        &["17m", "18.068", "18.168"],
        &["15m", "21.0", "21.45"],
        &["12m", "24.890", "24.99"],
        &["10m", "28.0", "29.7"],
        &["8m", "40", "45"],
        &["6m", "50", "54"],
        &["5m", "54.000001", "69.9"],
        &["4m", "70", "71"],
        &["2m", "144", "148"],
        &["1.25m", "222", "225"],
        &["70cm", "420", "450"],
        &["33cm", "902", "928"],
        &["23cm", "1240", "1300"],
        &["13cm", "2300", "2450"],
        &["9cm", "3300", "3500"],
        &["6cm", "5650", "5925"],
        &["3cm", "10000", "10500"],
        &["1.25cm", "24000", "24250"],
        &["6mm", "47000", "47200"],
        &["4mm", "75500", "81000"],
        &["2.5mm", "119980", "123000"],
        &["2mm", "134000", "149000"],
        &["1mm", "241000", "250000"],
        &["submm", "300000", "7500000"],
    ],
    scope_property: None,
    duplicates: false,
};

fn edge(row: &[&str], i: usize) -> f64 {
    row.get(i).and_then(|s| s.parse::<f64>().ok()).unwrap_or(f64::NAN)
}

/// Returns the ADIF band name for a given frequency in MHz
pub fn freq_to_band(freq_mhz: f64) -> Option<&'static str> {
    BAND.rows
        .iter()
        .find(|row| (edge(row, 1)..=edge(row, 2)).contains(&freq_mhz))
        .map(|row| row[0])
}

/// Lower and upper band edges in MHz (case-insensitive band name)
pub fn band_edges(band: &str) -> Option<(f64, f64)> {
    BAND.rows
        .iter()
        .find(|row| row[0].eq_ignore_ascii_case(band.trim()))
        .map(|row| (edge(row, 1), edge(row, 2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freq_to_band() {
        assert_eq!(freq_to_band(7.074), Some("40m"));
        assert_eq!(freq_to_band(14.074), Some("20m"));
        assert_eq!(freq_to_band(3.573), Some("80m"));
        assert_eq!(freq_to_band(3.799), Some("80m"));
        assert_eq!(freq_to_band(50.313), Some("6m"));
        assert_eq!(freq_to_band(144.174), Some("2m"));
        assert_eq!(freq_to_band(0.475), Some("630m"));
        assert_eq!(freq_to_band(999.0), None);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(band_edges("20M"), Some((14.0, 14.35)));
        assert_eq!(band_edges("2190m"), Some((0.1357, 0.1378)));
        assert_eq!(band_edges("11m"), None);
    }
}
