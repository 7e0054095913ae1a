//! Composite bill identifiers such as `H.R.1174 - 114`.

use std::str::FromStr;

use crate::Error;

/// A bill identifier decomposed into the four columns the API filters on.
///
/// The textual form is `<chamber>[.<resolution type>].<number> - <congress>`,
/// e.g. `H.R.1174 - 114`, `S.1 - 115` or `H.J.RES.5 - 113`. Dots are optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillId {
    /// `H` or `S`.
    pub chamber: String,
    /// Bill type letters after the chamber (`R`, `JRES`, ...). Empty for plain Senate bills.
    pub resolution_type: String,
    pub number: u32,
    pub congress_number: u32,
}

impl FromStr for BillId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidInput(format!("invalid bill id '{}'", s));

        let (bill, congress) = s.split_once('-').ok_or_else(invalid)?;
        let congress_number = congress.trim().parse::<u32>().map_err(|_| invalid())?;

        let compact: String = bill
            .chars()
            .filter(|c| *c != '.' && !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        let digits_at = compact
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (letters, digits) = compact.split_at(digits_at);
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        let number = digits.parse::<u32>().map_err(|_| invalid())?;
        let (chamber, resolution_type) = letters.split_at(1);

        Ok(BillId {
            chamber: chamber.to_string(),
            resolution_type: resolution_type.to_string(),
            number,
            congress_number,
        })
    }
}

impl std::fmt::Display for BillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.resolution_type.is_empty() {
            write!(f, "{}.{} - {}", self.chamber, self.number, self.congress_number)
        } else {
            write!(
                f,
                "{}.{}.{} - {}",
                self.chamber, self.resolution_type, self.number, self.congress_number
            )
        }
    }
}
