use crate::model::SourceModel;
use crate::policy::EffectiveConfig;
use importguard_types::Finding;

mod import_policy;
mod malformed_patterns;

#[cfg(test)]
mod tests;

pub fn run_all(model: &SourceModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    import_policy::run(model, cfg, out);
    malformed_patterns::run(cfg, out);
}
