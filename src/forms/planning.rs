use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{DateKey, DossierId};
use crate::forms::FormError;

/// Payload sent by the board when a card is dropped on a day cell.
#[derive(Debug, Deserialize, Validate)]
pub struct DropForm {
    #[validate(range(min = 1))]
    pub dossier_id: i32,
    /// Target day, `YYYY-MM-DD`.
    #[validate(length(equal = 10))]
    pub date: String,
}

/// Validated form of [`DropForm`].
#[derive(Debug, PartialEq, Eq)]
pub struct DropPayload {
    pub dossier_id: DossierId,
    pub day: DateKey,
}

impl TryFrom<DropForm> for DropPayload {
    type Error = FormError;

    fn try_from(form: DropForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            dossier_id: DossierId::new(form.dossier_id).map_err(|_| FormError::InvalidDossierId)?,
            day: DateKey::parse(&form.date).map_err(|_| FormError::InvalidDate)?,
        })
    }
}
