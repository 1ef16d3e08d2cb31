// Small ADIF enumerations
// Reference: https://adif.org/314/ADIF_314.htm#Enumerations

use super::enumeration::EnumTable;

const fn simple(
    name: &'static str,
    properties: &'static [&'static str],
    rows: &'static [&'static [&'static str]],
) -> EnumTable {
    EnumTable { name, properties, rows, scope_property: None, duplicates: false }
}

pub(crate) const ANT_PATH: EnumTable = simple(
    "Ant_Path",
    &["Abbreviation", "Meaning"],
    &[&["G", "grayline"], &["O", "other"], &["S", "short path"], &["L", "long path"]],
);

pub(crate) const CONTINENT: EnumTable = simple(
    "Continent",
    &["Abbreviation", "Continent"],
    &[
        &["NA", "North America"],
        &["SA", "South America"],
        &["EU", "Europe"],
        &["AF", "Africa"],
        &["OC", "Oceana"],
        &["AS", "Asia"],
        &["AN", "Antarctica"],
    ],
);

pub(crate) const EQSL_AG: EnumTable = simple(
    "EQSL_AG",
    &["Status", "Meaning"],
    &[&["Y", "the QSO is known to be Authenticity Guaranteed"], &["N", "not Authenticity Guaranteed"], &["U", "unknown"]],
);

pub(crate) const MORSE_KEY_TYPE: EnumTable = simple(
    "Morse_Key_Type",
    &["Abbreviation", "Meaning"],
    &[
        &["SK", "Straight Key"],
        &["SS", "Sideswiper"],
        &["BUG", "Mechanical semi-automatic keyer or Bug"],
        &["FAB", "Mechanical fully-automatic keyer or Bug"],
        &["SP", "Single Paddle"],
        &["DP", "Dual Paddle"],
        &["CPU", "Computer Driven"],
    ],
);

pub(crate) const PROPAGATION_MODE: EnumTable = simple(
    "Propagation_Mode",
    &["Enumeration", "Description"],
    &[
        &["AS", "Aircraft Scatter"],
        &["AUE", "Aurora-E"],
        &["AUR", "Aurora"],
        &["BS", "Back scatter"],
        &["ECH", "EchoLink"],
        &["EME", "Earth-Moon-Earth"],
        &["ES", "Sporadic E"],
        &["F2", "F2 Reflection"],
        &["FAI", "Field Aligned Irregularities"],
        &["GWAVE", "Ground Wave"],
        &["INTERNET", "Internet-assisted"],
        &["ION", "Ionoscatter"],
        &["IRL", "IRLP"],
        &["LOS", "Line of Sight"],
        &["MS", "Meteor scatter"],
        &["RPT", "Terrestrial or atmospheric repeater or transponder"],
        &["RS", "Rain scatter"],
        &["SAT", "Satellite"],
        &["TEP", "Trans-equatorial"],
        &["TR", "Tropospheric ducting"],
    ],
);

pub(crate) const QSL_RCVD: EnumTable = simple(
    "QSL_Rcvd",
    &["Status", "Meaning", "Import-only"],
    &[
        &["Y", "yes (confirmed)"],
        &["N", "no"],
        &["R", "requested"],
        &["I", "ignore or invalid"],
        &["V", "verified", "true"],
    ],
);

pub(crate) const QSL_SENT: EnumTable = simple(
    "QSL_Sent",
    &["Status", "Meaning"],
    &[&["Y", "yes"], &["N", "no"], &["R", "requested"], &["Q", "queued"], &["I", "ignore or invalid"]],
);

pub(crate) const QSL_VIA: EnumTable = simple(
    "QSL_Via",
    &["Via", "Description", "Import-only"],
    &[&["B", "bureau"], &["D", "direct"], &["E", "electronic"], &["M", "manager", "true"]],
);

pub(crate) const QSO_COMPLETE: EnumTable = simple(
    "QSO_Complete",
    &["Abbreviation", "Meaning"],
    &[&["Y", "yes"], &["N", "no"], &["NIL", "not heard"], &["?", "uncertain"]],
);

pub(crate) const QSO_DOWNLOAD_STATUS: EnumTable = simple(
    "QSO_Download_Status",
    &["Status", "Description"],
    &[&["Y", "the QSO has been downloaded from the online service"], &["N", "the QSO has not been downloaded"], &["I", "ignore or invalid"]],
);

pub(crate) const QSO_UPLOAD_STATUS: EnumTable = simple(
    "QSO_Upload_Status",
    &["Status", "Description"],
    &[
        &["Y", "the QSO has been uploaded to, and accepted by, the online service"],
        &["N", "do not upload the QSO to the online service"],
        &["M", "the QSO has been modified since being uploaded"],
    ],
);
