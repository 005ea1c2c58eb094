use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

/// Request identifier (UUID v4) stamped on every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Metadata attached to every report.
///
/// Field order is fixed to keep JSON output stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub request_id: RequestId,
    pub generated_at: String,
    pub days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ReportMeta {
    pub fn new(days: i64, seed: Option<u64>) -> Self {
        let generated_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("<unformattable>"));

        Self {
            request_id: RequestId::new_v4(),
            generated_at,
            days,
            seed,
            warnings: Vec::new(),
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// Standard wrapper for everything `insights` prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report<T> {
    pub meta: ReportMeta,
    pub data: T,
}

impl<T> Report<T> {
    pub fn new(meta: ReportMeta, data: T) -> Self {
        Self { meta, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_is_uuid_v4() {
        let request_id = RequestId::new_v4();
        assert_eq!(request_id.0.get_version_num(), 4);
    }

    #[test]
    fn meta_omits_empty_optionals() {
        let meta = ReportMeta::new(30, None);
        let json = serde_json::to_value(&meta).expect("serializes");
        assert!(json.get("seed").is_none());
        assert!(json.get("warnings").is_none());
        assert_eq!(json["days"], 30);

        let mut meta = ReportMeta::new(7, Some(42));
        meta.push_warning("w1");
        let json = serde_json::to_value(&meta).expect("serializes");
        assert_eq!(json["seed"], 42);
        assert_eq!(json["warnings"][0], "w1");
    }

    #[test]
    fn generated_at_is_rfc3339() {
        let meta = ReportMeta::new(1, None);
        assert!(OffsetDateTime::parse(&meta.generated_at, &Rfc3339).is_ok());
    }
}
