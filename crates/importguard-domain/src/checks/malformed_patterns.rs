use crate::fingerprint::fingerprint;
use crate::policy::EffectiveConfig;
use importguard_types::{Finding, Location, ids};
use serde_json::json;

pub fn run(cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_CONFIG_PATTERNS) else {
        return;
    };
    let config_path = cfg.config_path.as_ref();

    for m in cfg.rules.malformed_patterns() {
        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_CONFIG_PATTERNS.to_string(),
            code: ids::CODE_MALFORMED_PATTERN.to_string(),
            message: format!(
                "rules[{}].{}: {}; it never matches",
                m.rule_index,
                m.list.as_str(),
                m.error
            ),
            location: config_path.map(|path| Location {
                path: path.clone(),
                line: None,
                col: None,
            }),
            help: Some(
                "Use at most one `**` per pattern and close every `[` character class."
                    .to_string(),
            ),
            url: None,
            fingerprint: Some(fingerprint(&[
                ids::CHECK_CONFIG_PATTERNS,
                ids::CODE_MALFORMED_PATTERN,
                config_path.map(|p| p.as_str()).unwrap_or(""),
                &m.pattern,
            ])),
            data: json!({
                "rule_index": m.rule_index,
                "list": m.list.as_str(),
                "pattern": m.pattern,
            }),
        });
    }
}
