use crate::{RenderableLocation, RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Importguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Findings: {} (emitted) / {} (total)\n- Scanned: {} files, {} imports\n\n",
        verdict,
        report.data.findings_emitted,
        report.data.findings_total,
        report.data.files_scanned,
        report.data.imports_scanned
    ));

    if !report.data.config_present {
        out.push_str("> Note: no importguard config found; every import is permitted.\n\n");
    }
    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {}",
            sev,
            f.check_id.as_deref().unwrap_or(""),
            f.code,
            f.message
        ));
        if let Some(loc) = &f.location {
            out.push_str(&format!(" ({})", location_label(loc)));
        }
        out.push('\n');

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {}\n", url));
        }
    }

    out
}

fn location_label(loc: &RenderableLocation) -> String {
    match (loc.line, loc.col) {
        (Some(line), Some(col)) => format!("`{}`:{}:{}", loc.path, line, col),
        (Some(line), None) => format!("`{}`:{}", loc.path, line),
        _ => format!("`{}`", loc.path),
    }
}
