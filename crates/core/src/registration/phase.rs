//! Registration phases

use serde::{Deserialize, Serialize};

use super::draft::RegistrationField;

/// One of the four ordered steps of organizer registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegistrationPhase {
    Credentials,
    Identity,
    Address,
    Organization,
}

impl RegistrationPhase {
    pub const FIRST: Self = Self::Credentials;
    pub const LAST: Self = Self::Organization;

    /// 1-based position shown to the user ("step 2 of 4").
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Credentials => 1,
            Self::Identity => 2,
            Self::Address => 3,
            Self::Organization => 4,
        }
    }

    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Credentials),
            2 => Some(Self::Identity),
            3 => Some(Self::Address),
            4 => Some(Self::Organization),
            _ => None,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        Self::from_index(self.index() - 1)
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Organization)
    }

    /// Text fields collected in this phase.
    #[must_use]
    pub const fn fields(self) -> &'static [RegistrationField] {
        use RegistrationField as F;
        match self {
            Self::Credentials => &[F::Email, F::Password, F::ConfirmPassword],
            Self::Identity => &[F::FirstName, F::LastName, F::Citizenship],
            Self::Address => &[F::Country, F::City, F::ZipCode, F::StreetName],
            Self::Organization => {
                &[F::OrganizationName, F::TaxNumber, F::Address, F::Phone, F::Website]
            }
        }
    }
}

impl Default for RegistrationPhase {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for RegistrationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Credentials => "credentials",
            Self::Identity => "identity",
            Self::Address => "address",
            Self::Organization => "organization",
        };
        write!(f, "{name} ({}/4)", self.index())
    }
}
