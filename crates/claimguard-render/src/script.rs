/// Render the ad-hoc verification script template.
///
/// Documentation output only: a starting point for an operator's shell session, never
/// executed by this tool.
pub fn render_test_script(base_url: &str) -> String {
    let host = base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');

    let mut out = String::new();
    out.push_str("#!/bin/bash\n");
    out.push_str("# Ad-hoc security verification commands.\n");
    out.push_str("# Template for manual runs; review before pointing at production.\n\n");
    out.push_str("set -e\n\n");
    out.push_str(&format!("API_BASE='{base_url}'\n"));
    out.push_str(&format!("API_HOST='{host}'\n\n"));

    out.push_str("# TLS version\n");
    out.push_str("echo \"Testing TLS version...\"\n");
    out.push_str("echo | openssl s_client -connect \"$API_HOST:443\" 2>/dev/null | grep \"TLSv\"\n\n");

    out.push_str("# HTTPS only\n");
    out.push_str("echo \"Testing plain HTTP (should be rejected)...\"\n");
    out.push_str("curl -sI \"http://$API_HOST\" > /dev/null 2>&1 && echo \"HTTP accepted\" || echo \"HTTP rejected\"\n\n");

    out.push_str("# HSTS headers\n");
    out.push_str("echo \"Testing HSTS headers...\"\n");
    out.push_str("curl -sI \"$API_BASE\" | grep -i \"strict-transport-security\" || echo \"HSTS missing\"\n\n");

    out.push_str("# Rate limiting\n");
    out.push_str("echo \"Testing rate limiting...\"\n");
    out.push_str("for i in $(seq 1 101); do curl -s \"$API_BASE/api/test\" > /dev/null; done\n");
    out.push_str("curl -sI \"$API_BASE/api/test\" | grep -iE \"429|x-ratelimit\" || echo \"rate-limit headers not observed\"\n\n");

    out.push_str("# CORS headers\n");
    out.push_str("echo \"Testing CORS headers...\"\n");
    out.push_str("curl -sI -H \"Origin: http://example.com\" \"$API_BASE\" | grep -i \"access-control\" || echo \"CORS policy review needed\"\n\n");

    out.push_str("echo \"Manual follow-ups:\"\n");
    out.push_str("echo \"- OAuth PKCE flow validation\"\n");
    out.push_str("echo \"- Multi-tenant data isolation\"\n");
    out.push_str("echo \"- In-memory data handling verification\"\n");
    out.push_str("echo \"- Log retention verification\"\n");

    out
}
