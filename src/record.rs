use std::cmp::Ordering;
use std::fmt;

/// A single civil registry entry describing one marriage.
///
/// All six fields are opaque text: dates and registry numbers are stored
/// exactly as they appear in the dataset file, with no validation. A record
/// is constructed once by the loader (or the generator) and never mutated.
///
/// Ordering and equality only look at the identifying triple
/// (`registry_number`, `marriage_date`, `groom_name`); the bride fields and
/// the groom's birth date are payload.
#[derive(Debug, Clone)]
pub struct Record {
    /// Groom's full name. This is the lookup key used by every index.
    pub groom_name: String,
    /// Groom's birth date (payload only).
    pub groom_birth_date: String,
    /// Bride's full name (payload only).
    pub bride_name: String,
    /// Bride's birth date (payload only).
    pub bride_birth_date: String,
    /// Date the marriage was registered; second component of the sort key.
    pub marriage_date: String,
    /// Registry book number; primary component of the sort key.
    pub registry_number: String,
}

impl PartialEq for Record {
    fn eq(&self, other: &Record) -> bool {
        self.registry_number == other.registry_number
            && self.marriage_date == other.marriage_date
            && self.groom_name == other.groom_name
    }
}

impl Eq for Record {}

impl Ord for Record {
    fn cmp(&self, other: &Record) -> Ordering {
        self.registry_number
            .cmp(&other.registry_number)
            .then_with(|| self.marriage_date.cmp(&other.marriage_date))
            .then_with(|| self.groom_name.cmp(&other.groom_name))
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Record) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.registry_number, self.marriage_date, self.groom_name
        )
    }
}
