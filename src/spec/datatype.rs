// ADIF Data Types
// Reference: https://adif.org/314/ADIF_314.htm#Data_Types
//
// Indicators are the single letters that may follow the length in an ADI tag
// (<NAME:LEN:T>). Several types share an indicator; the canonical type for
// each indicator is the one returned by `from_indicator`.

/// An ADIF data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataType {
    AwardList,
    Boolean,
    CreditList,
    Character,
    Date,
    Digit,
    Enumeration,
    GridSquare,
    GridSquareExt,
    GridSquareList,
    Integer,
    IntlCharacter,
    IntlMultilineString,
    IntlString,
    IOTARefNo,
    Location,
    MultilineString,
    Number,
    PositiveInteger,
    POTARef,
    POTARefList,
    SecondarySubdivisionList,
    SOTARef,
    SponsoredAwardList,
    String,
    Time,
    WWFFRef,
}

impl DataType {
    pub const ALL: &'static [DataType] = &[
        DataType::AwardList,
        DataType::Boolean,
        DataType::CreditList,
        DataType::Character,
        DataType::Date,
        DataType::Digit,
        DataType::Enumeration,
        DataType::GridSquare,
        DataType::GridSquareExt,
        DataType::GridSquareList,
        DataType::Integer,
        DataType::IntlCharacter,
        DataType::IntlMultilineString,
        DataType::IntlString,
        DataType::IOTARefNo,
        DataType::Location,
        DataType::MultilineString,
        DataType::Number,
        DataType::PositiveInteger,
        DataType::POTARef,
        DataType::POTARefList,
        DataType::SecondarySubdivisionList,
        DataType::SOTARef,
        DataType::SponsoredAwardList,
        DataType::String,
        DataType::Time,
        DataType::WWFFRef,
    ];

    /// Canonical name as written in the ADIF specification
    pub fn name(&self) -> &'static str {
        match self {
            DataType::AwardList => "AwardList",
            DataType::Boolean => "Boolean",
            DataType::CreditList => "CreditList",
            DataType::Character => "Character",
            DataType::Date => "Date",
            DataType::Digit => "Digit",
            DataType::Enumeration => "Enumeration",
            DataType::GridSquare => "GridSquare",
            DataType::GridSquareExt => "GridSquareExt",
            DataType::GridSquareList => "GridSquareList",
            DataType::Integer => "Integer",
            DataType::IntlCharacter => "IntlCharacter",
            DataType::IntlMultilineString => "IntlMultilineString",
            DataType::IntlString => "IntlString",
            DataType::IOTARefNo => "IOTARefNo",
            DataType::Location => "Location",
            DataType::MultilineString => "MultilineString",
            DataType::Number => "Number",
            DataType::PositiveInteger => "PositiveInteger",
            DataType::POTARef => "POTARef",
            DataType::POTARefList => "POTARefList",
            DataType::SecondarySubdivisionList => "SecondarySubdivisionList",
            DataType::SOTARef => "SOTARef",
            DataType::SponsoredAwardList => "SponsoredAwardList",
            DataType::String => "String",
            DataType::Time => "Time",
            DataType::WWFFRef => "WWFFRef",
        }
    }

    /// ADI type indicator letter
    pub fn indicator(&self) -> char {
        match self {
            DataType::Boolean => 'B',
            DataType::Number | DataType::Integer | DataType::PositiveInteger | DataType::Digit => 'N',
            DataType::Date => 'D',
            DataType::Time => 'T',
            DataType::Character => 'C',
            DataType::IntlString | DataType::IntlCharacter => 'I',
            DataType::MultilineString => 'M',
            DataType::IntlMultilineString => 'G',
            DataType::Enumeration => 'E',
            DataType::Location => 'L',
            _ => 'S',
        }
    }

    /// Type-level numeric bounds; fields may narrow these
    pub fn range(&self) -> (Option<f64>, Option<f64>) {
        match self {
            DataType::Digit => (Some(0.0), Some(9.0)),
            DataType::PositiveInteger => (Some(1.0), None),
            _ => (None, None),
        }
    }

    /// Look up a data type by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<DataType> {
        DataType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Canonical data type for an ADI indicator letter (case-insensitive)
    pub fn from_indicator(c: char) -> Option<DataType> {
        match c.to_ascii_uppercase() {
            'B' => Some(DataType::Boolean),
            'N' => Some(DataType::Number),
            'D' => Some(DataType::Date),
            'T' => Some(DataType::Time),
            'S' => Some(DataType::String),
            'C' => Some(DataType::Character),
            'I' => Some(DataType::IntlString),
            'M' => Some(DataType::MultilineString),
            'G' => Some(DataType::IntlMultilineString),
            'E' => Some(DataType::Enumeration),
            'L' => Some(DataType::Location),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Number | DataType::Integer | DataType::PositiveInteger | DataType::Digit
        )
    }

    /// International types accept any Unicode text
    pub fn is_intl(&self) -> bool {
        matches!(
            self,
            DataType::IntlCharacter | DataType::IntlString | DataType::IntlMultilineString
        )
    }

    /// Types whose values are delimited lists, with their delimiter
    pub fn list_separator(&self) -> Option<char> {
        match self {
            DataType::AwardList
            | DataType::CreditList
            | DataType::GridSquareList
            | DataType::POTARefList
            | DataType::SponsoredAwardList => Some(','),
            DataType::SecondarySubdivisionList => Some(':'),
            _ => None,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for t in DataType::ALL {
            assert_eq!(DataType::from_name(t.name()), Some(*t));
        }
        assert_eq!(DataType::from_name("intlmultilinestring"), Some(DataType::IntlMultilineString));
        assert_eq!(DataType::from_name("Float"), None);
    }

    #[test]
    fn test_indicators() {
        assert_eq!(DataType::from_indicator('n'), Some(DataType::Number));
        assert_eq!(DataType::Integer.indicator(), 'N');
        assert_eq!(DataType::IntlMultilineString.indicator(), 'G');
        assert_eq!(DataType::from_indicator('X'), None);
        // every canonical indicator maps back to a type with that indicator
        for c in "BNDTSCIMGEL".chars() {
            assert_eq!(DataType::from_indicator(c).map(|t| t.indicator()), Some(c));
        }
    }

    #[test]
    fn test_ranges() {
        assert_eq!(DataType::PositiveInteger.range(), (Some(1.0), None));
        assert_eq!(DataType::Digit.range(), (Some(0.0), Some(9.0)));
        assert_eq!(DataType::Number.range(), (None, None));
    }
}
