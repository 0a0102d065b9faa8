//! What to do when a generated record already exists

use std::fmt;
use std::str::FromStr;

/// Policy for records whose output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenerationAction {
    /// Leave existing records untouched
    #[default]
    CreateIfAbsent = 0,
    /// Keep existing records but take license fields from the row
    UpdateLicenseInfo = 1,
    /// Overwrite existing values with every non-empty row value
    UpdateNonEmpty = 2,
    /// Replace existing records with the row
    OverwriteAll = 3,
}

impl GenerationAction {
    pub const ALL: [GenerationAction; 4] = [
        GenerationAction::CreateIfAbsent,
        GenerationAction::UpdateLicenseInfo,
        GenerationAction::UpdateNonEmpty,
        GenerationAction::OverwriteAll,
    ];
}

impl TryFrom<u8> for GenerationAction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|action| *action as u8 == value)
            .ok_or_else(|| format!("Invalid generation action: {}. Expected 0, 1, 2 or 3", value))
    }
}

impl FromStr for GenerationAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<u8>() {
            return Self::try_from(number);
        }
        match s.to_lowercase().replace('_', "-").as_str() {
            "create-if-absent" => Ok(GenerationAction::CreateIfAbsent),
            "update-license-info" => Ok(GenerationAction::UpdateLicenseInfo),
            "update-non-empty" => Ok(GenerationAction::UpdateNonEmpty),
            "overwrite-all" => Ok(GenerationAction::OverwriteAll),
            _ => Err(format!("Invalid generation action: {}", s)),
        }
    }
}

impl fmt::Display for GenerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationAction::CreateIfAbsent => "create-if-absent",
            GenerationAction::UpdateLicenseInfo => "update-license-info",
            GenerationAction::UpdateNonEmpty => "update-non-empty",
            GenerationAction::OverwriteAll => "overwrite-all",
        };
        write!(f, "{}", name)
    }
}
