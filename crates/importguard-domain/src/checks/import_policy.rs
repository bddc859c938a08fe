use crate::fingerprint::fingerprint;
use crate::model::SourceModel;
use crate::policy::EffectiveConfig;
use crate::resolve;
use importguard_types::{Finding, Location, ids};
use serde_json::json;

pub fn run(model: &SourceModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_IMPORTS_POLICY) else {
        return;
    };
    let rules = cfg.rules.rules();

    for file in &model.files {
        // One resolution per file: every import in it shares the governing rule.
        let Some(rule_index) = resolve::resolve_index(rules, &file.logical_path) else {
            continue;
        };
        let rule = &rules[rule_index];

        for import in &file.imports {
            if !rule.decide(&import.path).is_forbidden() {
                continue;
            }

            let denied_by = rule.deny.first_match(&import.path).map(|p| p.as_str());
            let location = import.location.clone().unwrap_or_else(|| Location {
                path: file.path.clone(),
                line: None,
                col: None,
            });

            out.push(Finding {
                severity: policy.severity,
                check_id: ids::CHECK_IMPORTS_POLICY.to_string(),
                code: ids::CODE_IMPORT_NOT_ALLOWED.to_string(),
                message: format!(
                    "import \"{}\" is not allowed in this file based on configuration",
                    import.path
                ),
                location: Some(location),
                help: Some(
                    "Remove the import, or add an `allow` pattern to the rule governing this file."
                        .to_string(),
                ),
                url: None,
                fingerprint: Some(fingerprint(&[
                    ids::CHECK_IMPORTS_POLICY,
                    ids::CODE_IMPORT_NOT_ALLOWED,
                    file.path.as_str(),
                    &import.path,
                ])),
                data: json!({
                    "import": import.path,
                    "file": file.logical_path,
                    "rule_index": rule_index,
                    "denied_by": denied_by,
                }),
            });
        }
    }
}
