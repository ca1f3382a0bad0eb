//! Record types for the `canteens` and `menu_items` collections
//!
//! Documents in production are loosely typed: fields are frequently absent and
//! `averagePreparationTime` is sometimes stored as a string. Every field except
//! `_id` is therefore optional, and the preparation time is kept as raw BSON
//! with a numeric accessor, so malformed documents are normalized on read
//! instead of failing deserialization.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Approval status stored as an upper-case string (`"PENDING"`, `"APPROVED"`,
/// `"REJECTED"`, `"SUSPENDED"`). Unknown strings are preserved rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CanteenStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
    Other(String),
}

impl From<String> for CanteenStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PENDING" => CanteenStatus::Pending,
            "APPROVED" => CanteenStatus::Approved,
            "REJECTED" => CanteenStatus::Rejected,
            "SUSPENDED" => CanteenStatus::Suspended,
            _ => CanteenStatus::Other(s),
        }
    }
}

impl From<CanteenStatus> for String {
    fn from(status: CanteenStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for CanteenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanteenStatus::Pending => write!(f, "PENDING"),
            CanteenStatus::Approved => write!(f, "APPROVED"),
            CanteenStatus::Rejected => write!(f, "REJECTED"),
            CanteenStatus::Suspended => write!(f, "SUSPENDED"),
            CanteenStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Default `averagePreparationTime` written by the normalizer, in minutes.
pub const DEFAULT_PREP_TIME_MINUTES: i32 = 15;

/// A canteen document. `_id` is kept as raw BSON because historical records
/// mix `ObjectId` and plain string identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canteen {
    #[serde(rename = "_id")]
    pub id: Bson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canteen_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CanteenStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_ratings: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_preparation_time: Option<Bson>,
}

impl Canteen {
    /// Visibility in the app requires an approved, active, verified canteen.
    pub fn is_visible(&self) -> bool {
        self.status == Some(CanteenStatus::Approved)
            && self.active.unwrap_or(false)
            && self.verified.unwrap_or(false)
    }

    /// Preparation time in minutes, if the field holds a numeric value.
    pub fn prep_time_minutes(&self) -> Option<i64> {
        match self.average_preparation_time.as_ref()? {
            Bson::Int32(n) => Some(i64::from(*n)),
            Bson::Int64(n) => Some(*n),
            Bson::Double(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// The malformed string form of the preparation time, if present.
    pub fn prep_time_raw_string(&self) -> Option<&str> {
        match self.average_preparation_time.as_ref()? {
            Bson::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.canteen_name.as_deref().unwrap_or("<unnamed>")
    }

    /// Synthesize a placeholder canteen for an identifier referenced by menu
    /// items but missing from the `canteens` collection. The identifier is
    /// stored in its original form.
    pub fn placeholder(id: Bson) -> Self {
        let prefix: String = id_label(&id).chars().take(4).collect();
        Canteen {
            id,
            canteen_name: Some(format!("Canteen {}", prefix)),
            status: Some(CanteenStatus::Approved),
            active: Some(true),
            verified: Some(true),
            rating: Some(4.0),
            total_ratings: Some(1),
            description: Some("A newly registered campus canteen.".to_string()),
            average_preparation_time: None,
        }
    }
}

/// Human-readable string form of a canteen identifier.
pub fn id_label(id: &Bson) -> String {
    match id {
        Bson::String(s) => s.clone(),
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

/// The alternate stored form of an identifier: hex string to `ObjectId` and
/// back. `None` when no alternate form exists, including hex parse failures.
pub fn alternate_form(id: &Bson) -> Option<Bson> {
    match id {
        Bson::String(s) => ObjectId::parse_str(s).ok().map(Bson::ObjectId),
        Bson::ObjectId(oid) => Some(Bson::String(oid.to_hex())),
        _ => None,
    }
}

/// An empty or absent foreign-key value is ignored, never treated as dangling.
pub fn is_empty_ref(id: &Bson) -> bool {
    matches!(id, Bson::Null) || matches!(id, Bson::String(s) if s.is_empty())
}
