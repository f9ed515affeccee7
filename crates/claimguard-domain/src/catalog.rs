//! The builtin claim catalogue.
//!
//! One fixed claim set for one product: every security/privacy claim published for the
//! hosted service, with the verification steps and pass criteria from the security
//! document. The procedure text is documentation for a human auditor, not executable.

use crate::registry::ClaimRegistry;
use claimguard_types::{Claim, ClaimCategory, ids};

/// Build the full claim registry. Claims are registered in report order: category by
/// category, then document order within the category.
pub fn builtin_registry() -> ClaimRegistry {
    let mut registry = ClaimRegistry::new();
    for claim in builtin_claims() {
        registry
            .register(claim)
            .expect("builtin claim ids are unique");
    }
    registry
}

fn builtin_claims() -> Vec<Claim> {
    vec![
        // Authentication & Authorization
        Claim {
            id: ids::CLAIM_AUTH_OAUTH_PKCE,
            category: ClaimCategory::Authentication,
            description: "OAuth 2.0 with PKCE implementation",
            test_procedure: "\
1. Verify the service initiates OAuth with a code_challenge
2. Check PKCE parameters in the upstream OAuth flow
3. Validate the code_verifier is never exposed in logs
4. Test token expiration and revocation",
            expected_result: "OAuth tokens use PKCE, expire within the configured time, and can be revoked upstream",
        },
        Claim {
            id: ids::CLAIM_AUTH_NO_STORED_CREDENTIALS,
            category: ClaimCategory::Authentication,
            description: "Credentials never stored in code or logs",
            test_procedure: "\
1. Search the codebase for credential patterns
2. Verify the .env file is in .gitignore
3. Check storage-namespace isolation for secrets
4. Audit log output for credential leaks",
            expected_result: "No credentials appear in code, logs, or version control",
        },
        Claim {
            id: ids::CLAIM_AUTH_USER_LEVEL,
            category: ClaimCategory::Authentication,
            description: "User-level security with individual credentials",
            test_procedure: "\
1. Verify each user connects with their own credentials
2. Check multi-user scenarios in a test environment
3. Validate isolation between user OAuth tokens
4. Test permission boundaries per user",
            expected_result: "Each user maintains a separate OAuth token with their own upstream permissions",
        },
        // Encryption
        Claim {
            id: ids::CLAIM_ENC_TLS_IN_TRANSIT,
            category: ClaimCategory::Encryption,
            description: "TLS 1.2+ encryption for data in transit",
            test_procedure: "\
1. Verify all API endpoints use HTTPS
2. Test with `openssl s_client` to check the TLS version
3. Validate no HTTP endpoints exist
4. Check HSTS headers are present
5. Run an external TLS rating scan",
            expected_result: "TLS 1.2 or higher on all endpoints, no downgrade, HSTS headers present",
        },
        Claim {
            id: ids::CLAIM_ENC_AES256_AT_REST,
            category: ClaimCategory::Encryption,
            description: "AES-256 encryption for credentials at rest",
            test_procedure: "\
1. Inspect the encryption implementation in the service code
2. Verify an audited cryptography library is used
3. Check key rotation procedures
4. Test storage encryption with a sample credential
5. Verify encrypted values differ on each write (IV randomization)",
            expected_result: "Credentials encrypted with AES-256; never readable in storage inspection",
        },
        Claim {
            id: ids::CLAIM_ENC_MEMORY_PROCESSING,
            category: ClaimCategory::Encryption,
            description: "Data protected in memory during AI processing",
            test_procedure: "\
1. Review the code path preparing AI vendor API calls
2. Verify sensitive data is cleared from memory after processing
3. Check error handling never produces memory dumps
4. Test with instrumented code to verify memory state",
            expected_result: "Sensitive data not persisted in application memory between requests",
        },
        // Data Handling
        Claim {
            id: ids::CLAIM_DATA_EPHEMERAL,
            category: ClaimCategory::DataHandling,
            description: "Data is ephemeral and discarded after the response",
            test_procedure: "\
1. Query service logs for data retention
2. Check database schemas for customer data tables
3. Verify persistent storage holds only tokens and interaction logs
4. Make an API call and verify nothing persists minutes later",
            expected_result: "No customer data found in persistent storage, only interaction logs",
        },
        Claim {
            id: ids::CLAIM_DATA_NO_TRAINING,
            category: ClaimCategory::DataHandling,
            description: "No training on customer data",
            test_procedure: "\
1. Review the AI vendor's documented data-usage policies
2. Check API requests are marked no-training
3. Verify cache-control headers when prompt caching is used
4. Review the data processing agreement with the vendor",
            expected_result: "No-training commitment confirmed via vendor documentation and DPA",
        },
        Claim {
            id: ids::CLAIM_DATA_MINIMIZATION,
            category: ClaimCategory::DataHandling,
            description: "Only necessary data sent to the AI vendor, aggregated when possible",
            test_procedure: "\
1. Review outbound AI API calls in development logs
2. Verify record IDs are used instead of names in prompts
3. Check reports use aggregated data rather than raw rows
4. Sample ten outbound calls and verify minimization",
            expected_result: "Aggregated data in reports, record IDs in prompts, no unnecessary PII",
        },
        Claim {
            id: ids::CLAIM_DATA_NO_FINANCIAL_IDENTIFIERS,
            category: ClaimCategory::DataHandling,
            description: "SSNs, credit cards, and bank accounts never sent to the API",
            test_procedure: "\
1. Audit upstream object access; verify financial objects are excluded
2. Check the service code for field-level filtering
3. Test against a sandbox containing mock sensitive data
4. Verify filtering rules apply before any outbound API call
5. Review error messages for sensitive-data leakage",
            expected_result: "Financial and sensitive fields filtered before API transmission",
        },
        // Infrastructure
        Claim {
            id: ids::CLAIM_INFRA_DDOS_WAF,
            category: ClaimCategory::Infrastructure,
            description: "DDoS protection and WAF at the edge",
            test_procedure: "\
1. Verify the edge zone setup and nameservers
2. Check the provider dashboard for DDoS protection status
3. Verify WAF rules are active
4. Test the rate-limiting configuration",
            expected_result: "Edge DDoS protection and WAF enabled, verified in the provider dashboard",
        },
        Claim {
            id: ids::CLAIM_INFRA_UPTIME_SLA,
            category: ClaimCategory::Infrastructure,
            description: "99.9%+ uptime on the serverless platform",
            test_procedure: "\
1. Query the provider API for uptime statistics
2. Check the status page for historical uptime
3. Review incident logs for the past 90 days
4. Verify SLA commitments in the provider plan",
            expected_result: "Serverless platform verified, 99.9% SLA confirmed",
        },
        Claim {
            id: ids::CLAIM_INFRA_SERVERLESS,
            category: ClaimCategory::Infrastructure,
            description: "Serverless architecture with no persistent servers",
            test_procedure: "\
1. Verify the deployment model uses no VMs
2. Confirm there are no static servers to compromise
3. Check infrastructure-as-code confirms serverless
4. Verify automatic scaling and updates",
            expected_result: "Serverless architecture confirmed, no persistent servers",
        },
        Claim {
            id: ids::CLAIM_INFRA_TENANT_ISOLATION,
            category: ClaimCategory::Infrastructure,
            description: "Multi-tenant isolation in separate storage namespaces",
            test_procedure: "\
1. Verify storage-namespace isolation per organization
2. Check organization credentials live in separate namespaces
3. Test cross-organization access attempts; they must fail
4. Review code for organization context in all queries
5. Test with multiple organizations simultaneously",
            expected_result: "Each organization in an isolated namespace, cross-organization access denied",
        },
        // Compliance
        Claim {
            id: ids::CLAIM_COMPLIANCE_SOC2,
            category: ClaimCategory::Compliance,
            description: "SOC 2 Type II via the infrastructure provider",
            test_procedure: "\
1. Request the SOC 2 report from the provider account
2. Verify the report date is within the last 12 months
3. Check the audit scope includes the hosting platform
4. Review report findings and control effectiveness",
            expected_result: "SOC 2 Type II report obtained from the provider and reviewed",
        },
        Claim {
            id: ids::CLAIM_COMPLIANCE_GDPR,
            category: ClaimCategory::Compliance,
            description: "GDPR compliant with a DPA available",
            test_procedure: "\
1. Obtain and review the Data Processing Agreement
2. Verify the DPA covers every processor in the chain
3. Check GDPR provisions: consent, retention, deletion
4. Test data deletion flows per GDPR requirements
5. Verify appropriate transfer mechanisms outside the EU",
            expected_result: "GDPR DPA on file, deletion flows tested, transfers authorized",
        },
        Claim {
            id: ids::CLAIM_COMPLIANCE_CCPA,
            category: ClaimCategory::Compliance,
            description: "CCPA compliant for California privacy rights",
            test_procedure: "\
1. Verify opt-out mechanisms for California users
2. Check deletion requests are handled within 45 days
3. Verify no data sales or sharing
4. Test privacy-notice display for California users",
            expected_result: "CCPA compliance verified, deletion procedures within the SLA",
        },
        Claim {
            id: ids::CLAIM_COMPLIANCE_AFP,
            category: ClaimCategory::Compliance,
            description: "Compliant with the AFP Code of Ethics and Donor Bill of Rights",
            test_procedure: "\
1. Review the implementation against AFP standards
2. Verify donor privacy is respected in recommendations
3. Confirm transparency about data usage
4. Check donor rights implementation (access, deletion)",
            expected_result: "AFP compliance verified through design review",
        },
        // Logging & Monitoring
        Claim {
            id: ids::CLAIM_LOG_CONTENT,
            category: ClaimCategory::Logging,
            description: "Appropriate logging: timestamp, user, query type, response time",
            test_procedure: "\
1. Inspect a log sample from the past 24 hours
2. Verify no full customer records in logs
3. Verify no sensitive field values in logs
4. Check timestamp, request context, and response data are present
5. Verify PII is never logged",
            expected_result: "Metadata-only logging confirmed, no sensitive data in logs",
        },
        Claim {
            id: ids::CLAIM_LOG_RETENTION_90,
            category: ClaimCategory::Logging,
            description: "Logs retained for 90 days, then deleted",
            test_procedure: "\
1. Query log storage timestamps
2. Verify logs older than 90 days are deleted
3. Check deletion automation via a scheduled trigger
4. Verify encryption of logs at rest
5. Test the 90-day retention boundary",
            expected_result: "Automatic deletion after 90 days confirmed, encryption verified",
        },
        Claim {
            id: ids::CLAIM_LOG_AUDIT_TRAIL,
            category: ClaimCategory::Logging,
            description: "Audit trail accessible for compliance review",
            test_procedure: "\
1. Test audit-log retrieval from the logging backend
2. Verify filtering by organization, user, and date range
3. Check export capabilities for audits
4. Test log accessibility in compliance scenarios",
            expected_result: "Audit logs queryable and exportable for compliance",
        },
        // API Security
        Claim {
            id: ids::CLAIM_API_RATE_LIMIT,
            category: ClaimCategory::ApiSecurity,
            description: "Rate limiting to prevent abuse",
            test_procedure: "\
1. Test the API rate-limit configuration
2. Verify limits per user and per organization
3. Test that exceeding limits returns appropriate errors
4. Check rate-limit headers in responses
5. Verify graceful handling when limits are hit",
            expected_result: "Rate limiting configured and tested",
        },
        Claim {
            id: ids::CLAIM_API_INPUT_VALIDATION,
            category: ClaimCategory::ApiSecurity,
            description: "Input validation on all API endpoints",
            test_procedure: "\
1. Test with malicious inputs (SQL injection, XSS, etc.)
2. Verify error handling does not reveal system details
3. Check type validation on all parameters
4. Test boundary conditions
5. Verify no command-injection vectors",
            expected_result: "Input validation tested against common attack vectors",
        },
        Claim {
            id: ids::CLAIM_API_SECURITY_HEADERS,
            category: ClaimCategory::ApiSecurity,
            description: "Proper CORS and security headers",
            test_procedure: "\
1. Curl the endpoint and check CORS headers
2. Verify X-Content-Type-Options: nosniff
3. Verify X-Frame-Options: DENY
4. Check Content-Security-Policy headers
5. Verify no overly permissive CORS",
            expected_result: "Security headers present and restrictive",
        },
    ]
}
