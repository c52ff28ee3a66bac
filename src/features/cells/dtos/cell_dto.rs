use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::cells::models::{Cell, NewCell};

/// Request DTO for creating a cell
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCellDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Location must be 1-255 characters"))]
    pub location: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,

    /// Email of the user that will own the cell
    #[validate(email(message = "Invalid email format"))]
    pub user_email: String,

    /// Defaults to false when absent or null
    #[serde(default)]
    pub archive: Option<bool>,
}

impl From<CreateCellDto> for NewCell {
    fn from(dto: CreateCellDto) -> Self {
        Self {
            name: dto.name,
            location: dto.location,
            latitude: dto.latitude,
            longitude: dto.longitude,
            archive: dto.archive.unwrap_or(false),
            user_email: dto.user_email,
        }
    }
}

/// Partial update for a cell. Each field is applied only when present;
/// absent (or null) fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCellDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "lat", alias = "latitude", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(rename = "long", alias = "longitude", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<bool>,
}

impl UpdateCellDto {
    /// Apply the present fields to `cell`, returning the names of the fields written
    pub fn apply(self, cell: &mut Cell) -> Vec<&'static str> {
        let mut changed = Vec::new();

        if let Some(name) = self.name {
            cell.name = name;
            changed.push("name");
        }
        if let Some(location) = self.location {
            cell.location = location;
            changed.push("location");
        }
        if let Some(latitude) = self.latitude {
            cell.latitude = latitude;
            changed.push("latitude");
        }
        if let Some(longitude) = self.longitude {
            cell.longitude = longitude;
            changed.push("longitude");
        }
        if let Some(archive) = self.archive {
            cell.archive = archive;
            changed.push("archive");
        }

        changed
    }
}

/// Response DTO for cell
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CellResponseDto {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub archive: bool,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cell> for CellResponseDto {
    fn from(c: Cell) -> Self {
        Self {
            id: c.id,
            name: c.name,
            location: c.location,
            latitude: c.latitude,
            longitude: c.longitude,
            archive: c.archive,
            user_id: c.user_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Query params for listing cells
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCellsQuery {
    /// Any non-empty value restricts the list to the caller's cells
    pub user: Option<String>,
}

impl ListCellsQuery {
    pub fn only_own(&self) -> bool {
        self.user.as_deref().is_some_and(|flag| !flag.is_empty())
    }
}
