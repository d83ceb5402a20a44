use thiserror::Error;

use crate::models::club::CreateClubRequest;
use crate::models::matches::CreateMatchRequest;

const MAX_TEXT_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A club cannot play against itself")]
    SameClub,
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
    #[error("{field} too long (maximum {MAX_TEXT_LEN} characters)")]
    TooLong { field: &'static str },
    #[error("{field} contains invalid characters")]
    InvalidCharacters { field: &'static str },
}

/// Write-path checks for clubs and matches
pub struct MatchValidator;

impl MatchValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_create_match(&self, request: &CreateMatchRequest) -> Result<(), ValidationError> {
        if request.home_team_id == request.away_team_id {
            return Err(ValidationError::SameClub);
        }
        if let Some(venue) = &request.venue {
            self.validate_optional_text(venue, "Venue")?;
        }
        if let Some(league) = &request.league {
            self.validate_optional_text(league, "League")?;
        }
        Ok(())
    }

    pub fn validate_create_club(&self, request: &CreateClubRequest) -> Result<(), ValidationError> {
        self.validate_club_name(&request.name)?;
        if let Some(logo_url) = &request.logo_url {
            self.validate_optional_text(logo_url, "Logo URL")?;
        }
        Ok(())
    }

    pub fn validate_club_name(&self, name: &str) -> Result<(), ValidationError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(ValidationError::Empty { field: "Club name" });
        }

        if trimmed_name.chars().count() > MAX_TEXT_LEN {
            return Err(ValidationError::TooLong { field: "Club name" });
        }

        if trimmed_name.contains('\0') || !trimmed_name.chars().any(|c| c.is_alphanumeric()) {
            return Err(ValidationError::InvalidCharacters { field: "Club name" });
        }

        Ok(())
    }

    fn validate_optional_text(&self, value: &str, field: &'static str) -> Result<(), ValidationError> {
        if value.chars().count() > MAX_TEXT_LEN {
            return Err(ValidationError::TooLong { field });
        }
        if value.contains('\0') {
            return Err(ValidationError::InvalidCharacters { field });
        }
        Ok(())
    }

    /// Trim validated input; blank input becomes `None`.
    pub fn sanitize_optional(&self, input: Option<&str>) -> Option<String> {
        input
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

impl Default for MatchValidator {
    fn default() -> Self {
        Self::new()
    }
}
