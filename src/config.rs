use dotenvy::dotenv;

use crate::errors::ClientError;
use crate::fields::RuleSchema;

pub const BASE_URL_VAR: &str = "PORTAL_BASE_URL";
pub const RULE_SET_VAR: &str = "PORTAL_RULESET";

/// Connection settings for the portal backend, plus the field rule set the
/// server was deployed with.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub base_url: String,
    pub schema: RuleSchema,
}

impl PortalConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            schema: RuleSchema::default(),
        }
    }

    #[tracing::instrument(name = "portal_config_from_env")]
    pub fn from_env() -> Result<Self, ClientError> {
        dotenv().ok();

        let base_url = std::env::var(BASE_URL_VAR).map_err(|_| ClientError::MissingBaseUrl)?;

        let schema = match std::env::var(RULE_SET_VAR) {
            Ok(raw) => parse_rule_set(&raw)?,
            Err(_) => RuleSchema::default(),
        };

        tracing::debug!(base_url = %base_url, schema = ?schema, "Portal configuration loaded");

        Ok(Self { base_url, schema })
    }
}

fn parse_rule_set(raw: &str) -> Result<RuleSchema, ClientError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "v1" => Ok(RuleSchema::V1),
        "v2" => Ok(RuleSchema::V2),
        _ => Err(ClientError::UnknownRuleSet(raw.to_string())),
    }
}
