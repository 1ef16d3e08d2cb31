// ADIF Mode and Submode Enumerations
// Reference: https://adif.org/314/ADIF_314.htm#Mode_Enumeration
//
// Deprecated modes are kept as import-only values so old logs still
// validate (with a warning).

use super::enumeration::EnumTable;

/// Mode group for contest and award categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeGroup {
    Phone, // Voice modes: SSB, FM, AM
    CW,    // Morse code
    Data,  // Digital modes: FT8, RTTY, PSK, etc.
    Image, // SSTV, FAX, ATV
}

impl ModeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeGroup::Phone => "PHONE",
            ModeGroup::CW => "CW",
            ModeGroup::Data => "DATA",
            ModeGroup::Image => "IMAGE",
        }
    }
}

/// Get the mode group for a given mode
pub fn mode_group(mode: &str) -> ModeGroup {
    match mode.trim().to_uppercase().as_str() {
        "CW" => ModeGroup::CW,
        "SSB" | "LSB" | "USB" | "FM" | "AM" | "DIGITALVOICE" | "C4FM" | "DMR" | "DSTAR"
        | "FREEDV" | "M17" => ModeGroup::Phone,
        "SSTV" | "FAX" | "ATV" => ModeGroup::Image,
        _ => ModeGroup::Data,
    }
}

pub(crate) const MODE: EnumTable = EnumTable {
    name: "Mode",
    properties: &["Mode", "Description", "Import-only"],
    rows: &[
        &["AM", "Amplitude modulation"],
        &["ARDOP", "Amateur Radio Digital Open Protocol"],
        &["ATV", "Amateur television"],
        &["CHIP", "Chirp spread spectrum"],
        &["CLO", "Cross-linked oscillator"],
        &["CONTESTI", "Contestia"],
        &["CW", "Morse code"],
        &["DIGITALVOICE", "Digital voice"],
        &["DOMINO", "DominoEX"],
        &["DYNAMIC", "Dynamic bandwidth modes"],
        &["FAX", "Facsimile"],
        &["FM", "Frequency modulation"],
        &["FSK441", "FSK441 meteor scatter"],
        &["FT8", "FT8"],
        &["HELL", "Hellschreiber"],
        &["ISCAT", "ISCAT"],
        &["JT4", "JT4"],
        &["JT6M", "JT6M"],
        &["JT9", "JT9"],
        &["JT44", "JT44"],
        &["JT65", "JT65"],
        &["MFSK", "Multiple frequency-shift keying"],
        &["MSK144", "MSK144 meteor scatter"],
        &["MT63", "MT63"],
        &["OLIVIA", "Olivia"],
        &["OPERA", "Opera"],
        &["PAC", "PACTOR"],
        &["PAX", "PAX"],
        &["PKT", "Packet radio"],
        &["PSK", "Phase-shift keying"],
        &["PSK2K", "PSK2K meteor scatter"],
        &["Q15", "Q15"],
        &["QRA64", "QRA64"],
        &["ROS", "ROS"],
        &["RTTY", "Radioteletype"],
        &["RTTYM", "Radioteletype (Murray)"],
        &["SSB", "Single sideband"],
        &["SSTV", "Slow-scan television"],
        &["T10", "T10"],
        &["THOR", "THOR"],
        &["THRB", "Throb"],
        &["TOR", "Teleprinting over radio"],
        &["V4", "V4"],
        &["VOI", "Voice over IP"],
        &["WINMOR", "WINMOR"],
        &["WSPR", "Weak Signal Propagation Reporter"],
        &["AMTORFEC", "", "true"],
        &["ASCI", "", "true"],
        &["C4FM", "", "true"],
        &["CHIP64", "", "true"],
        &["CHIP128", "", "true"],
        &["DOMINOF", "", "true"],
        &["DSTAR", "", "true"],
        &["FMHELL", "", "true"],
        &["FSK31", "", "true"],
        &["GTOR", "", "true"],
        &["HELL80", "", "true"],
        &["HFSK", "", "true"],
        &["JT4A", "", "true"],
        &["JT65A", "", "true"],
        &["JT65B", "", "true"],
        &["JT65C", "", "true"],
        &["MFSK8", "", "true"],
        &["MFSK16", "", "true"],
        &["PAC2", "", "true"],
        &["PAC3", "", "true"],
        &["PAX2", "", "true"],
        &["PCW", "", "true"],
        &["PSK10", "", "true"],
        &["PSK31", "", "true"],
        &["PSK63", "", "true"],
        &["PSK63F", "", "true"],
        &["PSK125", "", "true"],
        &["PSKAM10", "", "true"],
        &["PSKAM31", "", "true"],
        &["PSKAM50", "", "true"],
        &["PSKFEC31", "", "true"],
        &["PSKHELL", "", "true"],
        &["QPSK31", "", "true"],
        &["QPSK63", "", "true"],
        &["QPSK125", "", "true"],
        &["THRBX", "", "true"],
    ],
    scope_property: None,
    duplicates: false,
};

pub(crate) const SUBMODE: EnumTable = EnumTable {
    name: "Submode",
    properties: &["Submode", "Mode", "Description", "Import-only"],
    rows: &[
        &["CHIP64", "CHIP"],
        &["CHIP128", "CHIP"],
        &["PCW", "CW", "Coherent CW"],
        &["C4FM", "DIGITALVOICE"],
        &["DMR", "DIGITALVOICE"],
        &["DSTAR", "DIGITALVOICE"],
        &["FREEDV", "DIGITALVOICE"],
        &["M17", "DIGITALVOICE"],
        &["DOM-M", "DOMINO"],
        &["DOM4", "DOMINO"],
        &["DOM5", "DOMINO"],
        &["DOM8", "DOMINO"],
        &["DOM11", "DOMINO"],
        &["DOM16", "DOMINO"],
        &["DOM22", "DOMINO"],
        &["DOM44", "DOMINO"],
        &["DOM88", "DOMINO"],
        &["DOMINOEX", "DOMINO"],
        &["DOMINOF", "DOMINO"],
        &["VARA HF", "DYNAMIC"],
        &["VARA SATELLITE", "DYNAMIC"],
        &["VARA FM 1200", "DYNAMIC"],
        &["VARA FM 9600", "DYNAMIC"],
        &["FMHELL", "HELL"],
        &["FSKHELL", "HELL"],
        &["HELL80", "HELL"],
        &["HELLX5", "HELL"],
        &["HELLX9", "HELL"],
        &["HFSK", "HELL"],
        &["PSKHELL", "HELL"],
        &["SLOWHELL", "HELL"],
        &["ISCAT-A", "ISCAT"],
        &["ISCAT-B", "ISCAT"],
        &["JT4A", "JT4"],
        &["JT4B", "JT4"],
        &["JT4C", "JT4"],
        &["JT4D", "JT4"],
        &["JT4E", "JT4"],
        &["JT4F", "JT4"],
        &["JT4G", "JT4"],
        &["JT9-1", "JT9"],
        &["JT9-2", "JT9"],
        &["JT9-5", "JT9"],
        &["JT9-10", "JT9"],
        &["JT9-30", "JT9"],
        &["JT9A", "JT9"],
        &["JT9B", "JT9"],
        &["JT9C", "JT9"],
        &["JT9D", "JT9"],
        &["JT9E", "JT9"],
        &["JT9E FAST", "JT9"],
        &["JT9F", "JT9"],
        &["JT9F FAST", "JT9"],
        &["JT9G", "JT9"],
        &["JT9G FAST", "JT9"],
        &["JT9H", "JT9"],
        &["JT9H FAST", "JT9"],
        &["JT65A", "JT65"],
        &["JT65B", "JT65"],
        &["JT65B2", "JT65"],
        &["JT65C", "JT65"],
        &["JT65C2", "JT65"],
        &["FSQCALL", "MFSK"],
        &["FST4", "MFSK"],
        &["FST4W", "MFSK"],
        &["FT4", "MFSK"],
        &["JS8", "MFSK"],
        &["JTMS", "MFSK"],
        &["MFSK4", "MFSK"],
        &["MFSK8", "MFSK"],
        &["MFSK11", "MFSK"],
        &["MFSK16", "MFSK"],
        &["MFSK22", "MFSK"],
        &["MFSK31", "MFSK"],
        &["MFSK32", "MFSK"],
        &["MFSK64", "MFSK"],
        &["MFSK64L", "MFSK"],
        &["MFSK128", "MFSK"],
        &["MFSK128L", "MFSK"],
        &["Q65", "MFSK"],
        &["OLIVIA 4/125", "OLIVIA"],
        &["OLIVIA 4/250", "OLIVIA"],
        &["OLIVIA 8/250", "OLIVIA"],
        &["OLIVIA 8/500", "OLIVIA"],
        &["OLIVIA 16/500", "OLIVIA"],
        &["OLIVIA 16/1000", "OLIVIA"],
        &["OLIVIA 32/1000", "OLIVIA"],
        &["OPERA-BEACON", "OPERA"],
        &["OPERA-QSO", "OPERA"],
        &["PAC2", "PAC"],
        &["PAC3", "PAC"],
        &["PAC4", "PAC"],
        &["PAX2", "PAX"],
        &["8PSK125", "PSK"],
        &["8PSK125F", "PSK"],
        &["8PSK125FL", "PSK"],
        &["8PSK250", "PSK"],
        &["8PSK250F", "PSK"],
        &["8PSK250FL", "PSK"],
        &["8PSK500", "PSK"],
        &["8PSK500F", "PSK"],
        &["8PSK1000", "PSK"],
        &["8PSK1000F", "PSK"],
        &["8PSK1200F", "PSK"],
        &["FSK31", "PSK"],
        &["PSK10", "PSK"],
        &["PSK31", "PSK"],
        &["PSK63", "PSK"],
        &["PSK63F", "PSK"],
        &["PSK63RC4", "PSK"],
        &["PSK63RC5", "PSK"],
        &["PSK63RC10", "PSK"],
        &["PSK63RC20", "PSK"],
        &["PSK63RC32", "PSK"],
        &["PSK125", "PSK"],
        &["PSK125C12", "PSK"],
        &["PSK125R", "PSK"],
        &["PSK125RC10", "PSK"],
        &["PSK125RC12", "PSK"],
        &["PSK125RC16", "PSK"],
        &["PSK125RC4", "PSK"],
        &["PSK125RC5", "PSK"],
        &["PSK250", "PSK"],
        &["PSK250C6", "PSK"],
        &["PSK250R", "PSK"],
        &["PSK250RC2", "PSK"],
        &["PSK250RC3", "PSK"],
        &["PSK250RC5", "PSK"],
        &["PSK250RC6", "PSK"],
        &["PSK250RC7", "PSK"],
        &["PSK500", "PSK"],
        &["PSK500C2", "PSK"],
        &["PSK500C4", "PSK"],
        &["PSK500R", "PSK"],
        &["PSK500RC2", "PSK"],
        &["PSK500RC3", "PSK"],
        &["PSK500RC4", "PSK"],
        &["PSK800C2", "PSK"],
        &["PSK800RC2", "PSK"],
        &["PSK1000", "PSK"],
        &["PSK1000C2", "PSK"],
        &["PSK1000R", "PSK"],
        &["PSK1000RC2", "PSK"],
        &["PSKAM10", "PSK"],
        &["PSKAM31", "PSK"],
        &["PSKAM50", "PSK"],
        &["PSKFEC31", "PSK"],
        &["QPSK31", "PSK"],
        &["QPSK63", "PSK"],
        &["QPSK125", "PSK"],
        &["QPSK250", "PSK"],
        &["QPSK500", "PSK"],
        &["SIM31", "PSK"],
        &["QRA64A", "QRA64"],
        &["QRA64B", "QRA64"],
        &["QRA64C", "QRA64"],
        &["QRA64D", "QRA64"],
        &["QRA64E", "QRA64"],
        &["ROS-EME", "ROS"],
        &["ROS-HF", "ROS"],
        &["ROS-MF", "ROS"],
        &["ASCI", "RTTY"],
        &["LSB", "SSB", "Lower sideband"],
        &["USB", "SSB", "Upper sideband"],
        &["THOR-M", "THOR"],
        &["THOR4", "THOR"],
        &["THOR5", "THOR"],
        &["THOR8", "THOR"],
        &["THOR11", "THOR"],
        &["THOR16", "THOR"],
        &["THOR22", "THOR"],
        &["THOR25X4", "THOR"],
        &["THOR50X1", "THOR"],
        &["THOR50X2", "THOR"],
        &["THOR100", "THOR"],
        &["THRBX", "THRB"],
        &["THRBX1", "THRB"],
        &["THRBX2", "THRB"],
        &["THRBX4", "THRB"],
        &["THROB1", "THRB"],
        &["THROB2", "THRB"],
        &["THROB4", "THRB"],
        &["AMTORFEC", "TOR"],
        &["GTOR", "TOR"],
        &["NAVTEX", "TOR"],
        &["SITORB", "TOR"],
    ],
    scope_property: Some("Mode"),
    duplicates: false,
};

/// Parent mode for a submode (case-insensitive)
pub fn mode_for_submode(submode: &str) -> Option<&'static str> {
    SUBMODE
        .rows
        .iter()
        .find(|row| row[0].eq_ignore_ascii_case(submode.trim()))
        .map(|row| row[1])
}
