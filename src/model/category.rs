use serde::{Deserialize, Serialize};

/// Closed role/job taxonomy used for category pre-filtering.
///
/// The upstream parser emits these labels verbatim; labels outside the
/// taxonomy are rejected at the boundary rather than silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    Qa,
    Devops,
    Comtor,
    Data,
    Ai,
    Design,
    Pm,
    Other,
}

impl RoleCategory {
    /// Stable label used in index payloads and serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCategory::Frontend => "frontend",
            RoleCategory::Backend => "backend",
            RoleCategory::Fullstack => "fullstack",
            RoleCategory::Mobile => "mobile",
            RoleCategory::Qa => "qa",
            RoleCategory::Devops => "devops",
            RoleCategory::Comtor => "comtor",
            RoleCategory::Data => "data",
            RoleCategory::Ai => "ai",
            RoleCategory::Design => "design",
            RoleCategory::Pm => "pm",
            RoleCategory::Other => "other",
        }
    }

    /// Parses a stored label. Returns `None` for labels outside the taxonomy,
    /// so callers can distinguish "no category" from a bad payload.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "frontend" => Some(RoleCategory::Frontend),
            "backend" => Some(RoleCategory::Backend),
            "fullstack" => Some(RoleCategory::Fullstack),
            "mobile" => Some(RoleCategory::Mobile),
            "qa" => Some(RoleCategory::Qa),
            "devops" => Some(RoleCategory::Devops),
            "comtor" => Some(RoleCategory::Comtor),
            "data" => Some(RoleCategory::Data),
            "ai" => Some(RoleCategory::Ai),
            "design" => Some(RoleCategory::Design),
            "pm" => Some(RoleCategory::Pm),
            "other" => Some(RoleCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for category in [
            RoleCategory::Frontend,
            RoleCategory::Backend,
            RoleCategory::Fullstack,
            RoleCategory::Mobile,
            RoleCategory::Qa,
            RoleCategory::Devops,
            RoleCategory::Comtor,
            RoleCategory::Data,
            RoleCategory::Ai,
            RoleCategory::Design,
            RoleCategory::Pm,
            RoleCategory::Other,
        ] {
            assert_eq!(RoleCategory::from_label(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(RoleCategory::from_label("gardener"), None);
        assert_eq!(RoleCategory::from_label(""), None);
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(
            RoleCategory::from_label("  Backend "),
            Some(RoleCategory::Backend)
        );
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&RoleCategory::Devops).unwrap();
        assert_eq!(json, "\"devops\"");
        let parsed: RoleCategory = serde_json::from_str("\"ai\"").unwrap();
        assert_eq!(parsed, RoleCategory::Ai);
    }
}
