// DXCC Entity List
// Source: ARRL DXCC List and ADIF 3.1.4 DXCC_Entity_Code enumeration
//
// Both current and deleted entities are listed. A deleted entity remains a
// valid value for logs of contacts made while it existed. Zone lists hold
// every CQ and ITU zone that falls inside the entity.
//
// Code 0 is the "no entity" sentinel (maritime mobile, space, etc.) and has
// no zones or continent.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::enumeration::{EnumValue, Enumeration};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DxccEntity {
    pub code: u16,
    pub name: &'static str,
    pub continent: &'static str,
    pub cq_zones: &'static [u8],
    pub itu_zones: &'static [u8],
    pub deleted: bool,
}

impl DxccEntity {
    const fn active(
        code: u16,
        name: &'static str,
        continent: &'static str,
        cq_zones: &'static [u8],
        itu_zones: &'static [u8],
    ) -> Self {
        DxccEntity { code, name, continent, cq_zones, itu_zones, deleted: false }
    }

    const fn deleted(
        code: u16,
        name: &'static str,
        continent: &'static str,
        cq_zones: &'static [u8],
        itu_zones: &'static [u8],
    ) -> Self {
        DxccEntity { code, name, continent, cq_zones, itu_zones, deleted: true }
    }

    pub fn is_sentinel(&self) -> bool {
        self.code == 0
    }
}

pub const DXCC_ENTITIES: &[DxccEntity] = &[
    DxccEntity::active(0, "NONE", "", &[], &[]),
    DxccEntity::active(1, "CANADA", "NA", &[1, 2, 3, 4, 5], &[2, 3, 4, 9, 75]),
    DxccEntity::deleted(2, "ABU AIL IS.", "AS", &[21], &[39]),
    DxccEntity::active(3, "AFGHANISTAN", "AS", &[21], &[40]),
    DxccEntity::active(4, "AGALEGA & ST. BRANDON IS.", "AF", &[39], &[53]),
    DxccEntity::active(5, "ALAND IS.", "EU", &[15], &[18]),
    DxccEntity::active(6, "ALASKA", "NA", &[1], &[1, 2]),
    DxccEntity::active(7, "ALBANIA", "EU", &[15], &[28]),
    DxccEntity::deleted(8, "ALDABRA", "AF", &[39], &[53]),
    DxccEntity::active(9, "AMERICAN SAMOA", "OC", &[32], &[62]),
    DxccEntity::active(10, "AMSTERDAM & ST. PAUL IS.", "AF", &[39], &[68]),
    DxccEntity::active(11, "ANDAMAN & NICOBAR IS.", "AS", &[26], &[49]),
    DxccEntity::active(12, "ANGUILLA", "NA", &[8], &[11]),
    DxccEntity::active(13, "ANTARCTICA", "AN", &[12, 13, 29, 30, 32, 38, 39], &[67, 69, 70, 71, 72, 73, 74]),
    DxccEntity::active(14, "ARMENIA", "AS", &[21], &[29]),
    DxccEntity::active(15, "ASIATIC RUSSIA", "AS", &[16, 17, 18, 19, 23], &[20, 21, 22, 23, 24, 25, 26, 30, 31, 32, 33, 34, 35, 75]),
    DxccEntity::active(16, "NEW ZEALAND SUBANTARCTIC ISLANDS", "OC", &[32], &[60]),
    DxccEntity::active(17, "AVES I.", "NA", &[8], &[11]),
    DxccEntity::active(18, "AZERBAIJAN", "AS", &[21], &[29]),
    DxccEntity::deleted(19, "BAJO NUEVO", "NA", &[8], &[11]),
    DxccEntity::active(20, "BAKER & HOWLAND IS.", "OC", &[31], &[61]),
    DxccEntity::active(21, "BALEARIC IS.", "EU", &[14], &[37]),
    DxccEntity::active(22, "PALAU", "OC", &[27], &[64]),
    DxccEntity::deleted(23, "BLENHEIM REEF", "AF", &[39], &[41]),
    DxccEntity::active(24, "BOUVET", "AF", &[38], &[67]),
    DxccEntity::deleted(25, "BRITISH NORTH BORNEO", "OC", &[28], &[54]),
    DxccEntity::deleted(26, "BRITISH SOMALILAND", "AF", &[37], &[48]),
    DxccEntity::active(27, "BELARUS", "EU", &[16], &[29]),
    DxccEntity::deleted(28, "CANAL ZONE", "NA", &[7], &[11]),
    DxccEntity::active(29, "CANARY IS.", "AF", &[33], &[36]),
    DxccEntity::deleted(30, "CELEBE & MOLUCCA IS.", "OC", &[28], &[54]),
    DxccEntity::active(31, "C. KIRIBATI (BRITISH PHOENIX IS.)", "OC", &[31], &[62]),
    DxccEntity::active(32, "CEUTA & MELILLA", "AF", &[33], &[37]),
    DxccEntity::active(33, "CHAGOS IS.", "AF", &[39], &[41]),
    DxccEntity::active(34, "CHATHAM IS.", "OC", &[32], &[60]),
    DxccEntity::active(35, "CHRISTMAS I.", "OC", &[29], &[54]),
    DxccEntity::active(36, "CLIPPERTON I.", "NA", &[7], &[10]),
    DxccEntity::active(37, "COCOS I.", "NA", &[7], &[11]),
    DxccEntity::active(38, "COCOS (KEELING) IS.", "OC", &[29], &[54]),
    DxccEntity::active(40, "CRETE", "EU", &[20], &[28]),
    DxccEntity::active(41, "CROZET I.", "AF", &[39], &[68]),
    DxccEntity::deleted(42, "DAMAO, DIU", "AS", &[21], &[41]),
    DxccEntity::active(43, "DESECHEO I.", "NA", &[8], &[11]),
    DxccEntity::deleted(44, "DESROCHES", "AF", &[39], &[53]),
    DxccEntity::active(45, "DODECANESE", "EU", &[20], &[28]),
    DxccEntity::active(46, "EAST MALAYSIA", "OC", &[28], &[54]),
    DxccEntity::active(47, "EASTER I.", "SA", &[12], &[63]),
    DxccEntity::active(48, "E. KIRIBATI (LINE IS.)", "OC", &[31], &[61, 63]),
    DxccEntity::active(49, "EQUATORIAL GUINEA", "AF", &[36], &[47]),
    DxccEntity::active(50, "MEXICO", "NA", &[6], &[10]),
    DxccEntity::active(51, "ERITREA", "AF", &[37], &[48]),
    DxccEntity::active(52, "ESTONIA", "EU", &[15], &[29]),
    DxccEntity::active(53, "ETHIOPIA", "AF", &[37], &[48]),
    DxccEntity::active(54, "EUROPEAN RUSSIA", "EU", &[16], &[19, 20, 29, 30]),
    DxccEntity::deleted(55, "FARQUHAR", "AF", &[39], &[53]),
    DxccEntity::active(56, "FERNANDO DE NORONHA", "SA", &[11], &[13]),
    DxccEntity::deleted(57, "FRENCH EQUATORIAL AFRICA", "AF", &[36], &[47]),
    DxccEntity::deleted(58, "FRENCH INDO-CHINA", "AS", &[26], &[49]),
    DxccEntity::deleted(59, "FRENCH WEST AFRICA", "AF", &[35], &[46]),
    DxccEntity::active(60, "BAHAMAS", "NA", &[8], &[11]),
    DxccEntity::active(61, "FRANZ JOSEF LAND", "EU", &[40], &[75]),
    DxccEntity::active(62, "BARBADOS", "NA", &[8], &[11]),
    DxccEntity::active(63, "FRENCH GUIANA", "SA", &[9], &[12]),
    DxccEntity::active(64, "BERMUDA", "NA", &[5], &[11]),
    DxccEntity::active(65, "BRITISH VIRGIN IS.", "NA", &[8], &[11]),
    DxccEntity::active(66, "BELIZE", "NA", &[7], &[11]),
    DxccEntity::deleted(67, "FRENCH INDIA", "AS", &[22], &[41]),
    DxccEntity::deleted(68, "KUWAIT/SAUDI ARABIA NEUTRAL ZONE", "AS", &[21], &[39]),
    DxccEntity::active(69, "CAYMAN IS.", "NA", &[8], &[11]),
    DxccEntity::active(70, "CUBA", "NA", &[8], &[11]),
    DxccEntity::active(71, "GALAPAGOS IS.", "SA", &[10], &[12]),
    DxccEntity::active(72, "DOMINICAN REPUBLIC", "NA", &[8], &[11]),
    DxccEntity::active(74, "EL SALVADOR", "NA", &[7], &[11]),
    DxccEntity::active(75, "GEORGIA", "AS", &[21], &[29]),
    DxccEntity::active(76, "GUATEMALA", "NA", &[7], &[11]),
    DxccEntity::active(77, "GRENADA", "NA", &[8], &[11]),
    DxccEntity::active(78, "HAITI", "NA", &[8], &[11]),
    DxccEntity::active(79, "GUADELOUPE", "NA", &[8], &[11]),
    DxccEntity::active(80, "HONDURAS", "NA", &[7], &[11]),
    DxccEntity::deleted(81, "GERMANY", "EU", &[14], &[28]),
    DxccEntity::active(82, "JAMAICA", "NA", &[8], &[11]),
    DxccEntity::active(84, "MARTINIQUE", "NA", &[8], &[11]),
    DxccEntity::deleted(85, "BONAIRE, CURACAO", "SA", &[9], &[11]),
    DxccEntity::active(86, "NICARAGUA", "NA", &[7], &[11]),
    DxccEntity::active(88, "PANAMA", "NA", &[7], &[11]),
    DxccEntity::active(89, "TURKS & CAICOS IS.", "NA", &[8], &[11]),
    DxccEntity::active(90, "TRINIDAD & TOBAGO", "SA", &[9], &[11]),
    DxccEntity::active(91, "ARUBA", "SA", &[9], &[11]),
    DxccEntity::deleted(93, "GEYSER REEF", "AF", &[39], &[53]),
    DxccEntity::active(94, "ANTIGUA & BARBUDA", "NA", &[8], &[11]),
    DxccEntity::active(95, "DOMINICA", "NA", &[8], &[11]),
    DxccEntity::active(96, "MONTSERRAT", "NA", &[8], &[11]),
    DxccEntity::active(97, "ST. LUCIA", "NA", &[8], &[11]),
    DxccEntity::active(98, "ST. VINCENT", "NA", &[8], &[11]),
    DxccEntity::active(99, "GLORIOSO IS.", "AF", &[39], &[53]),
    DxccEntity::active(100, "ARGENTINA", "SA", &[13], &[14, 16]),
    DxccEntity::deleted(101, "GOA", "AS", &[22], &[41]),
    DxccEntity::deleted(102, "GOLD COAST, TOGOLAND", "AF", &[35], &[46]),
    DxccEntity::active(103, "GUAM", "OC", &[27], &[64]),
    DxccEntity::active(104, "BOLIVIA", "SA", &[10], &[12, 14]),
    DxccEntity::active(105, "GUANTANAMO BAY", "NA", &[8], &[11]),
    DxccEntity::active(106, "GUERNSEY", "EU", &[14], &[27]),
    DxccEntity::active(107, "GUINEA", "AF", &[35], &[46]),
    DxccEntity::active(108, "BRAZIL", "SA", &[11], &[12, 13, 15]),
    DxccEntity::active(109, "GUINEA-BISSAU", "AF", &[35], &[46]),
    DxccEntity::active(110, "HAWAII", "OC", &[31], &[61]),
    DxccEntity::active(111, "HEARD I.", "AF", &[39], &[68]),
    DxccEntity::active(112, "CHILE", "SA", &[12], &[14, 16]),
    DxccEntity::deleted(113, "IFNI", "AF", &[33], &[37]),
    DxccEntity::active(114, "ISLE OF MAN", "EU", &[14], &[27]),
    DxccEntity::deleted(115, "ITALIAN SOMALILAND", "AF", &[37], &[48]),
    DxccEntity::active(116, "COLOMBIA", "SA", &[9], &[12]),
    DxccEntity::active(117, "ITU HQ", "EU", &[14], &[28]),
    DxccEntity::active(118, "JAN MAYEN", "EU", &[40], &[18]),
    DxccEntity::deleted(119, "JAVA", "OC", &[28], &[54]),
    DxccEntity::active(120, "ECUADOR", "SA", &[10], &[12]),
    DxccEntity::active(122, "JERSEY", "EU", &[14], &[27]),
    DxccEntity::active(123, "JOHNSTON I.", "OC", &[31], &[61]),
    DxccEntity::active(124, "JUAN DE NOVA, EUROPA", "AF", &[39], &[53]),
    DxccEntity::active(125, "JUAN FERNANDEZ IS.", "SA", &[12], &[14]),
    DxccEntity::active(126, "KALININGRAD", "EU", &[15], &[29]),
    DxccEntity::deleted(127, "KAMARAN IS.", "AS", &[21], &[39]),
    DxccEntity::deleted(128, "KARELO-FINNISH REPUBLIC", "EU", &[16], &[19]),
    DxccEntity::active(129, "GUYANA", "SA", &[9], &[12]),
    DxccEntity::active(130, "KAZAKHSTAN", "AS", &[17], &[29, 30, 31]),
    DxccEntity::active(131, "KERGUELEN IS.", "AF", &[39], &[68]),
    DxccEntity::active(132, "PARAGUAY", "SA", &[11], &[14]),
    DxccEntity::active(133, "KERMADEC IS.", "OC", &[32], &[60]),
    DxccEntity::deleted(134, "KINGMAN REEF", "OC", &[31], &[61]),
    DxccEntity::active(135, "KYRGYZSTAN", "AS", &[17], &[30, 31]),
    DxccEntity::active(136, "PERU", "SA", &[10], &[12]),
    DxccEntity::active(137, "REPUBLIC OF KOREA", "AS", &[25], &[44]),
    DxccEntity::active(138, "KURE I.", "OC", &[31], &[61]),
    DxccEntity::deleted(139, "KURIA MURIA I.", "AS", &[21], &[39]),
    DxccEntity::active(140, "SURINAME", "SA", &[9], &[12]),
    DxccEntity::active(141, "FALKLAND IS.", "SA", &[13], &[16]),
    DxccEntity::active(142, "LAKSHADWEEP IS.", "AS", &[22], &[41]),
    DxccEntity::active(143, "LAOS", "AS", &[26], &[49]),
    DxccEntity::active(144, "URUGUAY", "SA", &[13], &[14]),
    DxccEntity::active(145, "LATVIA", "EU", &[15], &[29]),
    DxccEntity::active(146, "LITHUANIA", "EU", &[15], &[29]),
    DxccEntity::active(147, "LORD HOWE I.", "OC", &[30], &[60]),
    DxccEntity::active(148, "VENEZUELA", "SA", &[9], &[12]),
    DxccEntity::active(149, "AZORES", "EU", &[14], &[36]),
    DxccEntity::active(150, "AUSTRALIA", "OC", &[29, 30], &[55, 58, 59]),
    DxccEntity::deleted(151, "MALYJ VYSOTSKIJ I.", "EU", &[16], &[29]),
    DxccEntity::active(152, "MACAO", "AS", &[24], &[44]),
    DxccEntity::active(153, "MACQUARIE I.", "OC", &[30], &[60]),
    DxccEntity::deleted(154, "YEMEN ARAB REPUBLIC", "AS", &[21], &[39]),
    DxccEntity::deleted(155, "MALAYA", "AS", &[28], &[54]),
    DxccEntity::active(157, "NAURU", "OC", &[31], &[65]),
    DxccEntity::active(158, "VANUATU", "OC", &[32], &[56]),
    DxccEntity::active(159, "MALDIVES", "AS", &[22], &[41]),
    DxccEntity::active(160, "TONGA", "OC", &[32], &[62]),
    DxccEntity::active(161, "MALPELO I.", "SA", &[9], &[12]),
    DxccEntity::active(162, "NEW CALEDONIA", "OC", &[32], &[56]),
    DxccEntity::active(163, "PAPUA NEW GUINEA", "OC", &[28], &[51]),
    DxccEntity::deleted(164, "MANCHURIA", "AS", &[24], &[33]),
    DxccEntity::active(165, "MAURITIUS", "AF", &[39], &[53]),
    DxccEntity::active(166, "MARIANA IS.", "OC", &[27], &[64]),
    DxccEntity::active(167, "MARKET REEF", "EU", &[15], &[18]),
    DxccEntity::active(168, "MARSHALL IS.", "OC", &[31], &[65]),
    DxccEntity::active(169, "MAYOTTE", "AF", &[39], &[53]),
    DxccEntity::active(170, "NEW ZEALAND", "OC", &[32], &[60]),
    DxccEntity::active(171, "MELLISH REEF", "OC", &[30], &[56]),
    DxccEntity::active(172, "PITCAIRN I.", "OC", &[32], &[63]),
    DxccEntity::active(173, "MICRONESIA", "OC", &[27], &[65]),
    DxccEntity::active(174, "MIDWAY I.", "OC", &[31], &[61]),
    DxccEntity::active(175, "FRENCH POLYNESIA", "OC", &[32], &[63]),
    DxccEntity::active(176, "FIJI", "OC", &[32], &[56]),
    DxccEntity::active(177, "MINAMI TORISHIMA", "OC", &[27], &[90]),
    DxccEntity::deleted(178, "MINERVA REEF", "OC", &[32], &[62]),
    DxccEntity::active(179, "MOLDOVA", "EU", &[16], &[29]),
    DxccEntity::active(180, "MOUNT ATHOS", "EU", &[20], &[28]),
    DxccEntity::active(181, "MOZAMBIQUE", "AF", &[37], &[53]),
    DxccEntity::active(182, "NAVASSA I.", "NA", &[8], &[11]),
    DxccEntity::deleted(183, "NETHERLANDS BORNEO", "OC", &[28], &[54]),
    DxccEntity::deleted(184, "NETHERLANDS NEW GUINEA", "OC", &[28], &[51]),
    DxccEntity::active(185, "SOLOMON IS.", "OC", &[28], &[51]),
    DxccEntity::deleted(186, "NEWFOUNDLAND, LABRADOR", "NA", &[2, 5], &[9]),
    DxccEntity::active(187, "NIGER", "AF", &[35], &[46]),
    DxccEntity::active(188, "NIUE", "OC", &[32], &[62]),
    DxccEntity::active(189, "NORFOLK I.", "OC", &[32], &[60]),
    DxccEntity::active(190, "SAMOA", "OC", &[32], &[62]),
    DxccEntity::active(191, "NORTH COOK IS.", "OC", &[32], &[62]),
    DxccEntity::active(192, "OGASAWARA", "AS", &[27], &[45]),
    DxccEntity::deleted(193, "OKINAWA (RYUKYU IS.)", "AS", &[25], &[45]),
    DxccEntity::deleted(194, "OKINO TORI-SHIMA", "AS", &[27], &[45]),
    DxccEntity::active(195, "ANNOBON I.", "AF", &[36], &[52]),
    DxccEntity::deleted(196, "PALESTINE", "AS", &[20], &[39]),
    DxccEntity::active(197, "PALMYRA & JARVIS IS.", "OC", &[31], &[61, 62]),
    DxccEntity::deleted(198, "PAPUA TERRITORY", "OC", &[28], &[51]),
    DxccEntity::active(199, "PETER 1 I.", "AN", &[12], &[72]),
    DxccEntity::deleted(200, "PORTUGUESE TIMOR", "OC", &[28], &[54]),
    DxccEntity::active(201, "PRINCE EDWARD & MARION IS.", "AF", &[38], &[57]),
    DxccEntity::active(202, "PUERTO RICO", "NA", &[8], &[11]),
    DxccEntity::active(203, "ANDORRA", "EU", &[14], &[27]),
    DxccEntity::active(204, "REVILLAGIGEDO", "NA", &[6], &[10]),
    DxccEntity::active(205, "ASCENSION I.", "AF", &[36], &[66]),
    DxccEntity::active(206, "AUSTRIA", "EU", &[15], &[28]),
    DxccEntity::active(207, "RODRIGUEZ I.", "AF", &[39], &[53]),
    DxccEntity::deleted(208, "RUANDA-URUNDI", "AF", &[36], &[52]),
    DxccEntity::active(209, "BELGIUM", "EU", &[14], &[27]),
    DxccEntity::deleted(210, "SAAR", "EU", &[14], &[28]),
    DxccEntity::active(211, "SABLE I.", "NA", &[5], &[9]),
    DxccEntity::active(212, "BULGARIA", "EU", &[20], &[28]),
    DxccEntity::active(213, "SAINT MARTIN", "NA", &[8], &[11]),
    DxccEntity::active(214, "CORSICA", "EU", &[15], &[28]),
    DxccEntity::active(215, "CYPRUS", "AS", &[20], &[39]),
    DxccEntity::active(216, "SAN ANDRES & PROVIDENCIA", "NA", &[7], &[11]),
    DxccEntity::active(217, "SAN FELIX & SAN AMBROSIO", "SA", &[12], &[14]),
    DxccEntity::deleted(218, "CZECHOSLOVAKIA", "EU", &[15], &[28]),
    DxccEntity::active(219, "SAO TOME & PRINCIPE", "AF", &[36], &[47]),
    DxccEntity::deleted(220, "SARAWAK", "OC", &[28], &[54]),
    DxccEntity::active(221, "DENMARK", "EU", &[14], &[18]),
    DxccEntity::active(222, "FAROE IS.", "EU", &[14], &[18]),
    DxccEntity::active(223, "ENGLAND", "EU", &[14], &[27]),
    DxccEntity::active(224, "FINLAND", "EU", &[15], &[18]),
    DxccEntity::active(225, "SARDINIA", "EU", &[15], &[28]),
    DxccEntity::deleted(226, "SAUDI ARABIA/IRAQ NEUTRAL ZONE", "AS", &[21], &[39]),
    DxccEntity::active(227, "FRANCE", "EU", &[14], &[27]),
    DxccEntity::deleted(228, "SERRANA BANK & RONCADOR CAY", "NA", &[7], &[11]),
    DxccEntity::deleted(229, "GERMAN DEMOCRATIC REPUBLIC", "EU", &[14], &[28]),
    DxccEntity::active(230, "FEDERAL REPUBLIC OF GERMANY", "EU", &[14], &[28]),
    DxccEntity::deleted(231, "SIKKIM", "AS", &[22], &[41]),
    DxccEntity::active(232, "SOMALIA", "AF", &[37], &[48]),
    DxccEntity::active(233, "GIBRALTAR", "EU", &[14], &[37]),
    DxccEntity::active(234, "SOUTH COOK IS.", "OC", &[32], &[62]),
    DxccEntity::active(235, "SOUTH GEORGIA I.", "SA", &[13], &[73]),
    DxccEntity::active(236, "GREECE", "EU", &[20], &[28]),
    DxccEntity::active(237, "GREENLAND", "NA", &[40], &[5, 75]),
    DxccEntity::active(238, "SOUTH ORKNEY IS.", "SA", &[13], &[73]),
    DxccEntity::active(239, "HUNGARY", "EU", &[15], &[28]),
    DxccEntity::active(240, "SOUTH SANDWICH IS.", "SA", &[13], &[73]),
    DxccEntity::active(241, "SOUTH SHETLAND IS.", "SA", &[13], &[73]),
    DxccEntity::active(242, "ICELAND", "EU", &[40], &[17]),
    DxccEntity::deleted(243, "PEOPLE'S DEMOCRATIC REP. OF YEMEN", "AS", &[21], &[39]),
    DxccEntity::deleted(244, "SOUTHERN SUDAN", "AF", &[34], &[48]),
    DxccEntity::active(245, "IRELAND", "EU", &[14], &[27]),
    DxccEntity::active(246, "SOVEREIGN MILITARY ORDER OF MALTA", "EU", &[15], &[28]),
    DxccEntity::active(247, "SPRATLY IS.", "AS", &[26], &[50]),
    DxccEntity::active(248, "ITALY", "EU", &[15, 33], &[28]),
    DxccEntity::active(249, "ST. KITTS & NEVIS", "NA", &[8], &[11]),
    DxccEntity::active(250, "ST. HELENA", "AF", &[36], &[66]),
    DxccEntity::active(251, "LIECHTENSTEIN", "EU", &[14], &[28]),
    DxccEntity::active(252, "ST. PAUL I.", "NA", &[5], &[9]),
    DxccEntity::active(253, "ST. PETER & ST. PAUL ROCKS", "SA", &[11], &[13]),
    DxccEntity::active(254, "LUXEMBOURG", "EU", &[14], &[27]),
    DxccEntity::deleted(255, "ST. MAARTEN, SABA, ST. EUSTATIUS", "NA", &[8], &[11]),
    DxccEntity::active(256, "MADEIRA IS.", "AF", &[33], &[36]),
    DxccEntity::active(257, "MALTA", "EU", &[15], &[28]),
    DxccEntity::deleted(258, "SUMATRA", "OC", &[28], &[54]),
    DxccEntity::active(259, "SVALBARD", "EU", &[40], &[18]),
    DxccEntity::active(260, "MONACO", "EU", &[14], &[27]),
    DxccEntity::deleted(261, "SWAN IS.", "NA", &[7], &[11]),
    DxccEntity::active(262, "TAJIKISTAN", "AS", &[17], &[30]),
    DxccEntity::active(263, "NETHERLANDS", "EU", &[14], &[27]),
    DxccEntity::deleted(264, "TANGIER", "AF", &[33], &[37]),
    DxccEntity::active(265, "NORTHERN IRELAND", "EU", &[14], &[27]),
    DxccEntity::active(266, "NORWAY", "EU", &[14], &[18]),
    DxccEntity::deleted(267, "TERRITORY OF NEW GUINEA", "OC", &[28], &[51]),
    DxccEntity::deleted(268, "TIBET", "AS", &[23], &[41]),
    DxccEntity::active(269, "POLAND", "EU", &[15], &[28]),
    DxccEntity::active(270, "TOKELAU IS.", "OC", &[31], &[62]),
    DxccEntity::deleted(271, "TRIESTE", "EU", &[15], &[28]),
    DxccEntity::active(272, "PORTUGAL", "EU", &[14], &[37]),
    DxccEntity::active(273, "TRINDADE & MARTIM VAZ IS.", "SA", &[11], &[15]),
    DxccEntity::active(274, "TRISTAN DA CUNHA & GOUGH I.", "AF", &[38], &[66]),
    DxccEntity::active(275, "ROMANIA", "EU", &[20], &[28]),
    DxccEntity::active(276, "TROMELIN I.", "AF", &[39], &[53]),
    DxccEntity::active(277, "ST. PIERRE & MIQUELON", "NA", &[5], &[9]),
    DxccEntity::active(278, "SAN MARINO", "EU", &[15], &[28]),
    DxccEntity::active(279, "SCOTLAND", "EU", &[14], &[27]),
    DxccEntity::active(280, "TURKMENISTAN", "AS", &[17], &[30]),
    DxccEntity::active(281, "SPAIN", "EU", &[14], &[37]),
    DxccEntity::active(282, "TUVALU", "OC", &[31], &[65]),
    DxccEntity::active(283, "UK SOVEREIGN BASE AREAS ON CYPRUS", "AS", &[20], &[39]),
    DxccEntity::active(284, "SWEDEN", "EU", &[14], &[18]),
    DxccEntity::active(285, "VIRGIN IS.", "NA", &[8], &[11]),
    DxccEntity::active(286, "UGANDA", "AF", &[37], &[48]),
    DxccEntity::active(287, "SWITZERLAND", "EU", &[14], &[28]),
    DxccEntity::active(288, "UKRAINE", "EU", &[16], &[29]),
    DxccEntity::active(289, "UNITED NATIONS HQ", "NA", &[5], &[8]),
    DxccEntity::active(291, "UNITED STATES OF AMERICA", "NA", &[3, 4, 5], &[6, 7, 8]),
    DxccEntity::active(292, "UZBEKISTAN", "AS", &[17], &[30]),
    DxccEntity::active(293, "VIET NAM", "AS", &[26], &[49]),
    DxccEntity::active(294, "WALES", "EU", &[14], &[27]),
    DxccEntity::active(295, "VATICAN", "EU", &[15], &[28]),
    DxccEntity::active(296, "SERBIA", "EU", &[15], &[28]),
    DxccEntity::active(297, "WAKE I.", "OC", &[31], &[65]),
    DxccEntity::active(298, "WALLIS & FUTUNA IS.", "OC", &[32], &[62]),
    DxccEntity::active(299, "WEST MALAYSIA", "AS", &[28], &[54]),
    DxccEntity::active(301, "W. KIRIBATI (GILBERT IS. )", "OC", &[31], &[65]),
    DxccEntity::active(302, "WESTERN SAHARA", "AF", &[33], &[46]),
    DxccEntity::active(303, "WILLIS I.", "OC", &[30], &[55]),
    DxccEntity::active(304, "BAHRAIN", "AS", &[21], &[39]),
    DxccEntity::active(305, "BANGLADESH", "AS", &[22], &[41]),
    DxccEntity::active(306, "BHUTAN", "AS", &[22], &[41]),
    DxccEntity::deleted(307, "ZANZIBAR", "AF", &[37], &[53]),
    DxccEntity::active(308, "COSTA RICA", "NA", &[7], &[11]),
    DxccEntity::active(309, "MYANMAR", "AS", &[26], &[49]),
    DxccEntity::active(312, "CAMBODIA", "AS", &[26], &[49]),
    DxccEntity::active(315, "SRI LANKA", "AS", &[22], &[41]),
    DxccEntity::active(318, "CHINA", "AS", &[23, 24], &[33, 42, 43, 44]),
    DxccEntity::active(321, "HONG KONG", "AS", &[24], &[44]),
    DxccEntity::active(324, "INDIA", "AS", &[22], &[41]),
    DxccEntity::active(327, "INDONESIA", "OC", &[28], &[51, 54]),
    DxccEntity::active(330, "IRAN", "AS", &[21], &[40]),
    DxccEntity::active(333, "IRAQ", "AS", &[21], &[39]),
    DxccEntity::active(336, "ISRAEL", "AS", &[20], &[39]),
    DxccEntity::active(339, "JAPAN", "AS", &[25], &[45]),
    DxccEntity::active(342, "JORDAN", "AS", &[20], &[39]),
    DxccEntity::active(344, "DEMOCRATIC PEOPLE'S REP. OF KOREA", "AS", &[25], &[44]),
    DxccEntity::active(345, "BRUNEI DARUSSALAM", "OC", &[28], &[54]),
    DxccEntity::active(348, "KUWAIT", "AS", &[21], &[39]),
    DxccEntity::active(354, "LEBANON", "AS", &[20], &[39]),
    DxccEntity::active(363, "MONGOLIA", "AS", &[23], &[32, 33]),
    DxccEntity::active(369, "NEPAL", "AS", &[22], &[42]),
    DxccEntity::active(370, "OMAN", "AS", &[21], &[39]),
    DxccEntity::active(372, "PAKISTAN", "AS", &[21], &[41]),
    DxccEntity::active(375, "PHILIPPINES", "OC", &[27], &[50]),
    DxccEntity::active(376, "QATAR", "AS", &[21], &[39]),
    DxccEntity::active(378, "SAUDI ARABIA", "AS", &[21], &[39]),
    DxccEntity::active(379, "SEYCHELLES", "AF", &[39], &[53]),
    DxccEntity::active(381, "SINGAPORE", "AS", &[28], &[54]),
    DxccEntity::active(382, "DJIBOUTI", "AF", &[37], &[48]),
    DxccEntity::active(384, "SYRIA", "AS", &[20], &[39]),
    DxccEntity::active(386, "TAIWAN", "AS", &[24], &[44]),
    DxccEntity::active(387, "THAILAND", "AS", &[26], &[49]),
    DxccEntity::active(390, "TURKEY", "AS", &[20], &[39]),
    DxccEntity::active(391, "UNITED ARAB EMIRATES", "AS", &[21], &[39]),
    DxccEntity::active(400, "ALGERIA", "AF", &[33], &[37]),
    DxccEntity::active(401, "ANGOLA", "AF", &[36], &[52]),
    DxccEntity::active(402, "BOTSWANA", "AF", &[38], &[57]),
    DxccEntity::active(404, "BURUNDI", "AF", &[36], &[52]),
    DxccEntity::active(406, "CAMEROON", "AF", &[36], &[47]),
    DxccEntity::active(408, "CENTRAL AFRICA", "AF", &[36], &[47]),
    DxccEntity::active(409, "CAPE VERDE", "AF", &[35], &[46]),
    DxccEntity::active(410, "CHAD", "AF", &[36], &[47]),
    DxccEntity::active(411, "COMOROS", "AF", &[39], &[53]),
    DxccEntity::active(412, "REPUBLIC OF THE CONGO", "AF", &[36], &[52]),
    DxccEntity::active(414, "DEMOCRATIC REPUBLIC OF THE CONGO", "AF", &[36], &[52]),
    DxccEntity::active(416, "BENIN", "AF", &[35], &[46]),
    DxccEntity::active(420, "GABON", "AF", &[36], &[52]),
    DxccEntity::active(422, "THE GAMBIA", "AF", &[35], &[46]),
    DxccEntity::active(424, "GHANA", "AF", &[35], &[46]),
    DxccEntity::active(428, "COTE D'IVOIRE", "AF", &[35], &[46]),
    DxccEntity::active(430, "KENYA", "AF", &[37], &[48]),
    DxccEntity::active(432, "LESOTHO", "AF", &[38], &[57]),
    DxccEntity::active(434, "LIBERIA", "AF", &[35], &[46]),
    DxccEntity::active(436, "LIBYA", "AF", &[34], &[38]),
    DxccEntity::active(438, "MADAGASCAR", "AF", &[39], &[53]),
    DxccEntity::active(440, "MALAWI", "AF", &[37], &[53]),
    DxccEntity::active(442, "MALI", "AF", &[35], &[46]),
    DxccEntity::active(444, "MAURITANIA", "AF", &[35], &[46]),
    DxccEntity::active(446, "MOROCCO", "AF", &[33], &[37]),
    DxccEntity::active(450, "NIGERIA", "AF", &[35], &[46]),
    DxccEntity::active(452, "ZIMBABWE", "AF", &[38], &[53]),
    DxccEntity::active(453, "REUNION I.", "AF", &[39], &[53]),
    DxccEntity::active(454, "RWANDA", "AF", &[36], &[52]),
    DxccEntity::active(456, "SENEGAL", "AF", &[35], &[46]),
    DxccEntity::active(458, "SIERRA LEONE", "AF", &[35], &[46]),
    DxccEntity::active(460, "ROTUMA I.", "OC", &[32], &[56]),
    DxccEntity::active(462, "REPUBLIC OF SOUTH AFRICA", "AF", &[38], &[57]),
    DxccEntity::active(464, "NAMIBIA", "AF", &[38], &[57]),
    DxccEntity::active(466, "SUDAN", "AF", &[34], &[47, 48]),
    DxccEntity::active(468, "KINGDOM OF ESWATINI", "AF", &[38], &[57]),
    DxccEntity::active(470, "TANZANIA", "AF", &[37], &[53]),
    DxccEntity::active(474, "TUNISIA", "AF", &[33], &[37]),
    DxccEntity::active(478, "EGYPT", "AF", &[34], &[38]),
    DxccEntity::active(480, "BURKINA FASO", "AF", &[35], &[46]),
    DxccEntity::active(482, "ZAMBIA", "AF", &[36], &[53]),
    DxccEntity::active(483, "TOGO", "AF", &[35], &[46]),
    DxccEntity::deleted(488, "WALVIS BAY", "AF", &[38], &[57]),
    DxccEntity::active(489, "CONWAY REEF", "OC", &[32], &[56]),
    DxccEntity::active(490, "BANABA I. (OCEAN I.)", "OC", &[31], &[65]),
    DxccEntity::active(492, "YEMEN", "AS", &[21], &[39]),
    DxccEntity::deleted(493, "PENGUIN IS.", "AF", &[38], &[57]),
    DxccEntity::active(497, "CROATIA", "EU", &[15], &[28]),
    DxccEntity::active(499, "SLOVENIA", "EU", &[15], &[28]),
    DxccEntity::active(501, "BOSNIA-HERZEGOVINA", "EU", &[15], &[28]),
    DxccEntity::active(502, "NORTH MACEDONIA", "EU", &[15], &[28]),
    DxccEntity::active(503, "CZECH REPUBLIC", "EU", &[15], &[28]),
    DxccEntity::active(504, "SLOVAK REPUBLIC", "EU", &[15], &[28]),
    DxccEntity::active(505, "PRATAS I.", "AS", &[24], &[44]),
    DxccEntity::active(506, "SCARBOROUGH REEF", "AS", &[27], &[50]),
    DxccEntity::active(507, "TEMOTU PROVINCE", "OC", &[32], &[51]),
    DxccEntity::active(508, "AUSTRAL I.", "OC", &[32], &[63]),
    DxccEntity::active(509, "MARQUESAS IS.", "OC", &[31], &[63]),
    DxccEntity::active(510, "PALESTINE", "AS", &[20], &[39]),
    DxccEntity::active(511, "TIMOR-LESTE", "OC", &[28], &[54]),
    DxccEntity::active(512, "CHESTERFIELD IS.", "OC", &[30], &[56]),
    DxccEntity::active(513, "DUCIE I.", "OC", &[32], &[63]),
    DxccEntity::active(514, "MONTENEGRO", "EU", &[15], &[28]),
    DxccEntity::active(515, "SWAINS I.", "OC", &[32], &[62]),
    DxccEntity::active(516, "SAINT BARTHELEMY", "NA", &[8], &[11]),
    DxccEntity::active(517, "CURACAO", "SA", &[9], &[11]),
    DxccEntity::active(518, "SINT MAARTEN", "NA", &[8], &[11]),
    DxccEntity::active(519, "SABA & ST. EUSTATIUS", "NA", &[8], &[11]),
    DxccEntity::active(520, "BONAIRE", "SA", &[9], &[11]),
    DxccEntity::active(521, "SOUTH SUDAN (REPUBLIC OF)", "AF", &[34], &[48]),
    DxccEntity::active(522, "REPUBLIC OF KOSOVO", "EU", &[15], &[28]),
];

static DXCC_MAP: OnceLock<HashMap<u16, &'static DxccEntity>> = OnceLock::new();

fn dxcc_map() -> &'static HashMap<u16, &'static DxccEntity> {
    DXCC_MAP.get_or_init(|| DXCC_ENTITIES.iter().map(|e| (e.code, e)).collect())
}

/// Look up an entity by numeric code
pub fn entity_by_code(code: u16) -> Option<&'static DxccEntity> {
    dxcc_map().get(&code).copied()
}

/// Look up an entity by code ("291", "006") or by name, ignoring case.
/// Names recycled by a later entity resolve to every match, newest first.
pub fn entities_for(key: &str) -> Vec<&'static DxccEntity> {
    let key = key.trim();
    if key.is_empty() {
        return Vec::new();
    }
    if let Ok(code) = key.parse::<u16>() {
        return entity_by_code(code).into_iter().collect();
    }
    let mut found: Vec<_> = DXCC_ENTITIES
        .iter()
        .filter(|e| e.name.eq_ignore_ascii_case(key))
        .collect();
    found.sort_by_key(|e| (e.deleted, std::cmp::Reverse(e.code)));
    found
}

fn zones_for(key: &str, zones: fn(&DxccEntity) -> &'static [u8]) -> Vec<u8> {
    let mut out: Vec<u8> = entities_for(key).into_iter().flat_map(|e| zones(e).iter().copied()).collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// CQ zones for an entity name or code; empty if unknown
pub fn cq_zones_for(key: &str) -> Vec<u8> {
    zones_for(key, |e| e.cq_zones)
}

/// ITU zones for an entity name or code; empty if unknown
pub fn itu_zones_for(key: &str) -> Vec<u8> {
    zones_for(key, |e| e.itu_zones)
}

/// Continent abbreviation for an entity name or code
pub fn continent_for(key: &str) -> Option<&'static str> {
    entities_for(key)
        .into_iter()
        .map(|e| e.continent)
        .find(|c| !c.is_empty())
}

/// `DXCC_Entity_Code` enumeration: canonical value is the numeric code
pub(crate) fn entity_code_enumeration() -> Result<Enumeration> {
    let values = DXCC_ENTITIES
        .iter()
        .map(|e| {
            EnumValue::new(
                "DXCC_Entity_Code",
                vec![
                    ("Entity Code", e.code.to_string()),
                    ("Entity Name", e.name.to_string()),
                    ("Deleted", e.deleted.to_string()),
                ],
            )
        })
        .collect();
    Enumeration::from_values(
        "DXCC_Entity_Code",
        vec!["Entity Code", "Entity Name", "Deleted"],
        values,
        None,
        false,
    )
}

/// `Country` enumeration: canonical value is the entity name
pub(crate) fn country_enumeration() -> Result<Enumeration> {
    let values = DXCC_ENTITIES
        .iter()
        .map(|e| {
            EnumValue::new(
                "Country",
                vec![
                    ("Country", e.name.to_string()),
                    ("Entity Code", e.code.to_string()),
                    ("Deleted", e.deleted.to_string()),
                ],
            )
        })
        .collect();
    Enumeration::from_values(
        "Country",
        vec!["Country", "Entity Code", "Deleted"],
        values,
        Some("Entity Code"),
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_unique() {
        let mut codes: Vec<u16> = DXCC_ENTITIES.iter().map(|e| e.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(before, codes.len());
    }

    #[test]
    fn test_every_entity_has_zones() {
        for e in DXCC_ENTITIES.iter().filter(|e| !e.is_sentinel()) {
            assert!(!e.cq_zones.is_empty(), "{} has no CQ zone", e.name);
            assert!(!e.itu_zones.is_empty(), "{} has no ITU zone", e.name);
            assert!(e.cq_zones.iter().all(|z| (1..=40).contains(z)), "{}", e.name);
            assert!(e.itu_zones.iter().all(|z| (1..=90).contains(z)), "{}", e.name);
            assert!(
                ["NA", "SA", "EU", "AF", "AS", "OC", "AN"].contains(&e.continent),
                "{} continent {}",
                e.name,
                e.continent
            );
        }
    }

    #[test]
    fn test_zone_lookup_by_name_and_code() {
        assert_eq!(cq_zones_for("90"), vec![9]);
        assert_eq!(cq_zones_for("Trinidad & Tobago"), vec![9]);
        assert_eq!(itu_zones_for("trinidad & tobago"), vec![11]);
        assert_eq!(cq_zones_for("291"), vec![3, 4, 5]);
        assert!(cq_zones_for("Atlantis").is_empty());
        assert!(cq_zones_for("").is_empty());
    }

    #[test]
    fn test_deleted_entity_zones() {
        let e = entity_by_code(81).unwrap();
        assert!(e.deleted);
        assert_eq!(cq_zones_for("81"), vec![14]);
    }

    #[test]
    fn test_continent_for() {
        assert_eq!(continent_for("110"), Some("OC"));
        assert_eq!(continent_for("ENGLAND"), Some("EU"));
        assert_eq!(continent_for("0"), None);
        assert_eq!(continent_for("nowhere"), None);
    }

    #[test]
    fn test_recycled_name() {
        let found = entities_for("PALESTINE");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].code, 510);
        let countries = country_enumeration().unwrap();
        assert_eq!(countries.lookup("Palestine").len(), 2);
    }

    #[test]
    fn test_entity_code_enumeration() {
        let e = entity_code_enumeration().unwrap();
        let v = e.lookup("223")[0];
        assert_eq!(v.property("Entity Name"), Some("ENGLAND"));
        assert_eq!(v.property("Deleted"), Some("false"));
        assert_eq!(v.property("Enumeration Name"), Some("DXCC_Entity_Code"));
    }
}
