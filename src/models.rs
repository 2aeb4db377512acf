use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// Region used when the caller does not pick one.
pub const DEFAULT_REGION: &str = "IND";

/// Raw lookup input, from either the query string or the submitted form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupParams {
    pub uid: Option<String>,
    pub region: Option<String>,
}

impl LookupParams {
    /// Applies the presence check and the region default.
    pub fn into_query(self) -> Result<PlayerQuery, AppError> {
        PlayerQuery::new(self.uid.unwrap_or_default(), self.region)
    }
}

/// A validated player lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerQuery {
    pub uid: String,
    pub region: String,
}

impl PlayerQuery {
    /// Builds a query, rejecting a blank uid. A blank or missing region
    /// falls back to [`DEFAULT_REGION`]. Values are forwarded as given.
    pub fn new(uid: impl Into<String>, region: Option<String>) -> Result<Self, AppError> {
        let uid = uid.into();
        if uid.trim().is_empty() {
            return Err(AppError::BadRequest("UID is required".to_string()));
        }

        let region = region
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Self { uid, region })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_defaults_to_ind() {
        let query = PlayerQuery::new("123456789", None).unwrap();
        assert_eq!(query.region, "IND");

        let query = PlayerQuery::new("123456789", Some("  ".to_string())).unwrap();
        assert_eq!(query.region, "IND");
    }

    #[test]
    fn test_explicit_region_is_kept() {
        let query = PlayerQuery::new("123456789", Some("BR".to_string())).unwrap();
        assert_eq!(query.region, "BR");
    }

    #[test]
    fn test_uid_is_kept_verbatim() {
        let query = PlayerQuery::new(" 123 ", Some("BR".to_string())).unwrap();
        assert_eq!(query.uid, " 123 ");
        assert_eq!(query.region, "BR");
    }

    #[test]
    fn test_blank_uid_is_rejected() {
        let params = LookupParams {
            uid: Some("   ".to_string()),
            region: None,
        };
        assert!(matches!(params.into_query(), Err(AppError::BadRequest(_))));
        assert!(LookupParams::default().into_query().is_err());
    }
}
