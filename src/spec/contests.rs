// Contest identifiers
// Reference: ADIF 3.1.4 Contest_ID enumeration
//
// CONTEST_ID is a String field; values outside this list are accepted
// with a warning.

use super::enumeration::EnumTable;

pub(crate) const CONTEST_ID: EnumTable = EnumTable {
    name: "Contest_ID",
    properties: &["Contest-ID", "Description"],
    rows: &[
        &["7QP", "7th-Area QSO Party"],
        &["AP-SPRINT", "Asia - Pacific Sprint"],
        &["ARI-DX", "ARI DX Contest"],
        &["ARRL-10", "ARRL 10 Meter Contest"],
        &["ARRL-160", "ARRL 160 Meter Contest"],
        &["ARRL-DIGI", "ARRL International Digital Contest"],
        &["ARRL-DX-CW", "ARRL International DX Contest (CW)"],
        &["ARRL-DX-SSB", "ARRL International DX Contest (Phone)"],
        &["ARRL-EME", "ARRL EME contest"],
        &["ARRL-FD", "ARRL Field Day"],
        &["ARRL-RR-CW", "ARRL Rookie Roundup (CW)"],
        &["ARRL-RR-SSB", "ARRL Rookie Roundup (SSB)"],
        &["ARRL-RTTY", "ARRL RTTY Round-Up"],
        &["ARRL-SCR", "ARRL School Club Roundup"],
        &["ARRL-SS-CW", "ARRL November Sweepstakes (CW)"],
        &["ARRL-SS-SSB", "ARRL November Sweepstakes (Phone)"],
        &["ARRL-UHF-AUG", "ARRL August UHF Contest"],
        &["ARRL-VHF-JAN", "ARRL January VHF Sweepstakes"],
        &["ARRL-VHF-JUN", "ARRL June VHF QSO Party"],
        &["ARRL-VHF-SEP", "ARRL September VHF QSO Party"],
        &["CQ-160-CW", "CQ WW 160 Meter DX Contest (CW)"],
        &["CQ-160-SSB", "CQ WW 160 Meter DX Contest (SSB)"],
        &["CQ-M", "CQ-M International DX Contest"],
        &["CQ-VHF", "CQ World-Wide VHF Contest"],
        &["CQ-WPX-CW", "CQ WW WPX Contest (CW)"],
        &["CQ-WPX-RTTY", "CQ/RJ WW RTTY WPX Contest"],
        &["CQ-WPX-SSB", "CQ WW WPX Contest (SSB)"],
        &["CQ-WW-CW", "CQ WW DX Contest (CW)"],
        &["CQ-WW-RTTY", "CQ/RJ WW RTTY DX Contest"],
        &["CQ-WW-SSB", "CQ WW DX Contest (SSB)"],
        &["CWOPS-CWT", "CWops Mini-CWT Test"],
        &["DARC-WAEDC-CW", "WAE DX Contest (CW)"],
        &["DARC-WAEDC-RTTY", "WAE DX Contest (RTTY)"],
        &["DARC-WAEDC-SSB", "WAE DX Contest (SSB)"],
        &["EU-HF", "EU HF Championship"],
        &["IARU-HF", "IARU HF World Championship"],
        &["JIDX-CW", "Japan International DX Contest (CW)"],
        &["JIDX-SSB", "Japan International DX Contest (SSB)"],
        &["K1USN-SST", "K1USN Slow Speed Test"],
        &["NAQP-CW", "North America QSO Party (CW)"],
        &["NAQP-RTTY", "North America QSO Party (RTTY)"],
        &["NAQP-SSB", "North America QSO Party (Phone)"],
        &["NA-SPRINT-CW", "North America Sprint (CW)"],
        &["NA-SPRINT-RTTY", "North America Sprint (RTTY)"],
        &["NA-SPRINT-SSB", "North America Sprint (Phone)"],
        &["NRAU-BALTIC-CW", "NRAU-Baltic Contest (CW)"],
        &["NRAU-BALTIC-SSB", "NRAU-Baltic Contest (SSB)"],
        &["OCEANIA-DX-CW", "Oceania DX Contest (CW)"],
        &["OCEANIA-DX-SSB", "Oceania DX Contest (Phone)"],
        &["RDXC", "Russian DX Contest"],
        &["RSGB-IOTA", "IOTA Contest"],
        &["SAC-CW", "Scandinavian Activity Contest (CW)"],
        &["SAC-SSB", "Scandinavian Activity Contest (SSB)"],
        &["STEW-PERRY", "Stew Perry Topband Distance Challenge"],
        &["TARA-RTTY", "TARA RTTY Mêlée"],
        &["WW-DIGI", "World Wide Digi DX Contest"],
    ],
    scope_property: None,
    duplicates: false,
};
