use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Pending,
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "pending",
            IssueStatus::Open => "open",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Closed => "closed",
        }
    }

    /// Entering a terminal state is what stamps `closed_at`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, IssueStatus::Resolved | IssueStatus::Closed)
    }
}

impl std::str::FromStr for IssueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(IssueStatus::Pending),
            "open" => Ok(IssueStatus::Open),
            "in_progress" => Ok(IssueStatus::InProgress),
            "resolved" => Ok(IssueStatus::Resolved),
            "closed" => Ok(IssueStatus::Closed),
            other => Err(format!("Unknown issue status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
    Critical,
}

impl IssuePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::Low => "low",
            IssuePriority::Medium => "medium",
            IssuePriority::High => "high",
            IssuePriority::Critical => "critical",
        }
    }
}

impl std::str::FromStr for IssuePriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(IssuePriority::Low),
            "medium" => Ok(IssuePriority::Medium),
            "high" => Ok(IssuePriority::High),
            "critical" => Ok(IssuePriority::Critical),
            other => Err(format!("Unknown issue priority: {}", other)),
        }
    }
}

/// Validated WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoPointError {
    #[error("Latitude must be within -90..=90")]
    LatitudeOutOfRange,

    #[error("Longitude must be within -180..=180")]
    LongitudeOutOfRange,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::LongitudeOutOfRange);
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub id: Uuid,
    /// Owner; set from the acting user at creation, immutable after.
    pub user_id: Uuid,
    pub issue_type_id: Uuid,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub location: Option<GeoPoint>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// A single vote row. `value` is +1 or -1; "no vote" is the absence of
/// the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteValue(i16);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Vote value must be -1, 0 or 1")]
pub struct InvalidVoteValue;

impl VoteValue {
    pub const UP: VoteValue = VoteValue(1);
    pub const DOWN: VoteValue = VoteValue(-1);

    /// 0 is valid on the wire (it means "clear my vote") but is never a
    /// stored VoteValue; `cast` turns it into a delete.
    pub fn from_raw(value: i16) -> Result<Option<Self>, InvalidVoteValue> {
        match value {
            1 => Ok(Some(VoteValue(1))),
            -1 => Ok(Some(VoteValue(-1))),
            0 => Ok(None),
            _ => Err(InvalidVoteValue),
        }
    }

    pub fn get(&self) -> i16 {
        self.0
    }
}

/// Aggregated tally for one issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    pub up_count: u64,
    pub down_count: u64,
}

impl VoteTally {
    pub fn score(&self) -> i64 {
        self.up_count as i64 - self.down_count as i64
    }
}
