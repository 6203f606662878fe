pub fn specification_json() -> &'static str {
    return r#"{
  "title": "LedgerLens",
  "shortDescription": "Real-time reconciliation dashboard for mid-market trading desks.",
  "problem": "Trade breaks surface hours after markets close, forcing manual spreadsheet triage.",
  "solution": "Stream fills and ledger entries into a matching engine that surfaces breaks as they happen.",
  "targetUsers": ["Treasury Operations Lead", "Fund Accountant"],
  "features": ["Streaming trade matching", "Break ageing heatmap"],
  "techStack": ["React", "TypeScript", "Vite", "TanStack Query", "Recharts"],
  "toolsAndAI": ["Sentry for monitoring", "Gemini API for break summarization"],
  "implementationSteps": ["Model the ledger schema", "Build the ingest worker", "Ship the dashboard"],
  "userExperienceTips": ["Keep break counts visible at all times"],
  "security": ["End-to-end encryption", "SOC 2 audit logging"],
  "risks": ["GDPR compliance for EU counterparties"],
  "limitations": ["Single-currency MVP"],
  "complexity": "Advanced",
  "realWorldImpact": "Cuts reconciliation close from hours to minutes."
}"#;
}

pub fn second_specification_json() -> &'static str {
    return r#"{
  "title": "AuditTrail Copilot",
  "shortDescription": "Evidence collection workspace for SOC 2 audits.",
  "problem": "Compliance teams chase screenshots across a dozen SaaS tools every quarter.",
  "solution": "Centralize evidence pulls behind one review queue with automated freshness checks.",
  "targetUsers": ["Compliance Manager"],
  "features": ["Evidence freshness tracking"],
  "techStack": ["React", "Remix", "Prisma"],
  "toolsAndAI": ["Vanta API for control mapping"],
  "implementationSteps": ["Wire up SaaS connectors", "Build the review queue"],
  "userExperienceTips": ["Default to the oldest unreviewed item"],
  "security": ["Scoped OAuth tokens"],
  "risks": ["Connector API churn"],
  "limitations": ["No custom control frameworks"],
  "complexity": "Intermediate",
  "realWorldImpact": "Audit prep drops from six weeks to one."
}"#;
}

pub fn specifications_json() -> String {
    return format!("[{},{}]", specification_json(), second_specification_json());
}

/// Wraps generated text in the candidates envelope the Gemini API returns.
pub fn generation_envelope(text: &str) -> String {
    return serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{
                    "text": text,
                }],
            },
        }],
    })
    .to_string();
}
