//! Render use cases: markdown, GitHub annotations and diagnostics from in-memory reports.

use importguard_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    importguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    importguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

pub fn render_diagnostics(report: &RenderableReport) -> Vec<String> {
    importguard_render::render_diagnostics(report)
}
