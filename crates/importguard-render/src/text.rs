use crate::RenderableReport;

/// Render findings as compiler-style diagnostics, one per line:
/// `path:line:col: message`.
pub fn render_diagnostics(report: &RenderableReport) -> Vec<String> {
    report
        .findings
        .iter()
        .map(|f| match &f.location {
            Some(loc) => match (loc.line, loc.col) {
                (Some(line), Some(col)) => format!("{}:{}:{}: {}", loc.path, line, col, f.message),
                (Some(line), None) => format!("{}:{}: {}", loc.path, line, f.message),
                _ => format!("{}: {}", loc.path, f.message),
            },
            None => f.message.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{finding, report};
    use crate::{RenderableSeverity, RenderableVerdictStatus};

    #[test]
    fn renders_compiler_style_lines() {
        let r = report(
            RenderableVerdictStatus::Fail,
            vec![
                finding(
                    RenderableSeverity::Error,
                    "import \"fmt\" is not allowed in this file based on configuration",
                    Some(("example/forbidden.go", Some(4), Some(2))),
                ),
                finding(RenderableSeverity::Warning, "w", Some(("a.go", Some(9), None))),
                finding(
                    RenderableSeverity::Warning,
                    "rules[0].path: bad",
                    Some(("importguard.yaml", None, None)),
                ),
                finding(RenderableSeverity::Info, "bare", None),
            ],
        );
        insta::assert_snapshot!(render_diagnostics(&r).join("\n"), @r#"
        example/forbidden.go:4:2: import "fmt" is not allowed in this file based on configuration
        a.go:9: w
        importguard.yaml: rules[0].path: bad
        bare
        "#);
    }

    #[test]
    fn empty_report_renders_nothing() {
        let r = report(RenderableVerdictStatus::Pass, Vec::new());
        assert!(render_diagnostics(&r).is_empty());
    }
}
