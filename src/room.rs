//! Room codes such as `aaaaa-bbb-z-y-x-123[abxyz]`: an encrypted name, a sector id and a checksum.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

/// The number identifying a room's sector.
pub type SectorId = u64;

/// How many letters a checksum holds.
const CHECKSUM_LENGTH: usize = 5;

/// Reasons a room code cannot be read.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RoomError {
    /// The code does not end with a checksum in square brackets.
    #[error("room `{0}` has no bracketed checksum")]
    MissingChecksum(String),
    /// The code has no sector id before its checksum.
    #[error("room `{0}` has no sector id")]
    MissingSectorId(String),
    /// The sector id is not a number.
    #[error("room `{0}` has a sector id which is not a number")]
    BadSectorId(String),
}

/// An encrypted room name along with its sector id and claimed checksum.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RoomCode {
    name: String,
    sector_id: SectorId,
    checksum: String,
}

impl RoomCode {
    /// A room code from its parts. `name` keeps its dashes.
    pub fn new(name: impl Into<String>, sector_id: SectorId, checksum: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sector_id,
            checksum: checksum.into(),
        }
    }

    /// The encrypted name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sector id.
    pub fn sector_id(&self) -> SectorId {
        self.sector_id
    }

    /// The checksum as written in the code.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// The five most common letters of the name, most common first, with ties broken alphabetically.
    pub fn expected_checksum(&self) -> String {
        self.name.chars()
            .filter(|c| *c != '-')
            .counts()
            .into_iter()
            .sorted_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then(a.cmp(b)))
            .take(CHECKSUM_LENGTH)
            .map(|(letter, _)| letter)
            .collect()
    }

    /// A room is real if its checksum is the [expected](Self::expected_checksum) one, and a decoy otherwise.
    pub fn is_real(&self) -> bool {
        self.expected_checksum() == self.checksum
    }
}

impl FromStr for RoomCode {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (body, checksum) = s.split_once('[')
            .and_then(|(body, rest)| Some((body, rest.strip_suffix(']')?)))
            .ok_or_else(|| RoomError::MissingChecksum(s.to_owned()))?;
        let (name, sector_id) = body.rsplit_once('-')
            .ok_or_else(|| RoomError::MissingSectorId(s.to_owned()))?;
        let sector_id = sector_id.parse().map_err(|_| RoomError::BadSectorId(s.to_owned()))?;

        Ok(Self::new(name, sector_id, checksum))
    }
}

impl Display for RoomCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}[{}]", self.name, self.sector_id, self.checksum)
    }
}

/// Sum the sector ids of the real rooms, one room code per non-blank line.
pub fn sum_real_sector_ids(input: &str) -> Result<SectorId, RoomError> {
    input.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(RoomCode::from_str)
        .filter_ok(RoomCode::is_real)
        .map_ok(|room| room.sector_id())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{sum_real_sector_ids, RoomCode, RoomError};

    #[test]
    fn parse() {
        assert_eq!("a-b-c-123[sum]".parse(), Ok(RoomCode::new("a-b-c", 123, "sum")));
        assert_eq!(
            "ads-beq-cdfsaf-fdsf-gfdgf-12213321321[sadsadsdsadsadsa]".parse(),
            Ok(RoomCode::new("ads-beq-cdfsaf-fdsf-gfdgf", 12213321321, "sadsadsdsadsadsa"))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!("a-b-c-123".parse::<RoomCode>(), Err(RoomError::MissingChecksum("a-b-c-123".to_owned())));
        assert_eq!("a-b-c-123[abc".parse::<RoomCode>(), Err(RoomError::MissingChecksum("a-b-c-123[abc".to_owned())));
        assert_eq!("123[abc]".parse::<RoomCode>(), Err(RoomError::MissingSectorId("123[abc]".to_owned())));
        assert_eq!("a-b-c-x[abc]".parse::<RoomCode>(), Err(RoomError::BadSectorId("a-b-c-x[abc]".to_owned())));
    }

    #[test]
    fn displays_as_parsed() {
        let text = "not-a-real-room-404[oarel]";
        assert_eq!(text.parse::<RoomCode>().unwrap().to_string(), text);
    }

    #[test]
    fn real_rooms() {
        for code in ["aaaaa-bbb-z-y-x-123[abxyz]", "a-b-c-d-e-f-g-h-987[abcde]", "not-a-real-room-404[oarel]"] {
            assert!(code.parse::<RoomCode>().unwrap().is_real(), "{code}");
        }
        assert!(!"totally-real-room-200[decoy]".parse::<RoomCode>().unwrap().is_real());
    }

    #[test]
    fn ties_break_alphabetically() {
        assert_eq!(RoomCode::new("a-b-c-d-e-f-g-h", 987, "").expected_checksum(), "abcde");
        assert_eq!(RoomCode::new("zz-yy-x", 1, "").expected_checksum(), "yzx");
    }

    #[test]
    fn sector_sum() {
        let input = "aaaaa-bbb-z-y-x-123[abxyz]
a-b-c-d-e-f-g-h-987[abcde]
not-a-real-room-404[oarel]
totally-real-room-200[decoy]
";
        assert_eq!(sum_real_sector_ids(input), Ok(1514));
        assert_eq!(sum_real_sector_ids("oops"), Err(RoomError::MissingChecksum("oops".to_owned())));
    }
}
