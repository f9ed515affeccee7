//! Stable identifiers for claims.
//!
//! A claim id is a dotted namespace: `<category>.<claim>`. Ids are map keys across the
//! system and must never change once published in a report.

// Authentication & Authorization
pub const CLAIM_AUTH_OAUTH_PKCE: &str = "auth.oauth_pkce";
pub const CLAIM_AUTH_NO_STORED_CREDENTIALS: &str = "auth.no_stored_credentials";
pub const CLAIM_AUTH_USER_LEVEL: &str = "auth.user_level";

// Encryption
pub const CLAIM_ENC_TLS_IN_TRANSIT: &str = "enc.tls_in_transit";
pub const CLAIM_ENC_AES256_AT_REST: &str = "enc.aes256_at_rest";
pub const CLAIM_ENC_MEMORY_PROCESSING: &str = "enc.memory_processing";

// Data Handling
pub const CLAIM_DATA_EPHEMERAL: &str = "data.ephemeral";
pub const CLAIM_DATA_NO_TRAINING: &str = "data.no_training";
pub const CLAIM_DATA_MINIMIZATION: &str = "data.minimization";
pub const CLAIM_DATA_NO_FINANCIAL_IDENTIFIERS: &str = "data.no_financial_identifiers";

// Infrastructure
pub const CLAIM_INFRA_DDOS_WAF: &str = "infra.ddos_waf";
pub const CLAIM_INFRA_UPTIME_SLA: &str = "infra.uptime_sla";
pub const CLAIM_INFRA_SERVERLESS: &str = "infra.serverless";
pub const CLAIM_INFRA_TENANT_ISOLATION: &str = "infra.tenant_isolation";

// Compliance
pub const CLAIM_COMPLIANCE_SOC2: &str = "compliance.soc2";
pub const CLAIM_COMPLIANCE_GDPR: &str = "compliance.gdpr";
pub const CLAIM_COMPLIANCE_CCPA: &str = "compliance.ccpa";
pub const CLAIM_COMPLIANCE_AFP: &str = "compliance.afp";

// Logging & Monitoring
pub const CLAIM_LOG_CONTENT: &str = "log.content";
pub const CLAIM_LOG_RETENTION_90: &str = "log.retention_90";
pub const CLAIM_LOG_AUDIT_TRAIL: &str = "log.audit_trail";

// API Security
pub const CLAIM_API_RATE_LIMIT: &str = "api.rate_limit";
pub const CLAIM_API_INPUT_VALIDATION: &str = "api.input_validation";
pub const CLAIM_API_SECURITY_HEADERS: &str = "api.security_headers";
