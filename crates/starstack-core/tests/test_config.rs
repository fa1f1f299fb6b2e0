use std::path::PathBuf;

use starstack_core::align::BorderPolicy;
use starstack_core::pipeline::config::{CentroidConfig, PipelineConfig};
use starstack_core::pipeline::{PipelineStage, SkipReason};
use starstack_core::stack::CombineMethod;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_half_size() {
    assert_eq!(CentroidConfig::default().half_size, 30);
}

#[test]
fn test_pipeline_config_defaults() {
    let config = PipelineConfig::new("lights", "composite.tif");
    assert_eq!(config.input, PathBuf::from("lights"));
    assert_eq!(config.output, PathBuf::from("composite.tif"));
    assert!(config.session.is_none());
    assert_eq!(config.warp.border, BorderPolicy::Constant(0.0));
    assert_eq!(config.stacking.method, CombineMethod::Mean);
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_minimal_toml_uses_defaults() {
    let config: PipelineConfig =
        toml::from_str("input = \"lights\"\noutput = \"out.tif\"\n").unwrap();
    assert_eq!(config.centroid.half_size, 30);
    assert_eq!(config.warp.border, BorderPolicy::Constant(0.0));
    assert_eq!(config.stacking.method, CombineMethod::Mean);
}

#[test]
fn test_toml_roundtrip() {
    let mut config = PipelineConfig::new("lights", "out.tif");
    config.session = Some(PathBuf::from("picks.toml"));
    config.centroid.half_size = 12;
    config.warp.border = BorderPolicy::Replicate;
    config.stacking.method = CombineMethod::Max;

    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: PipelineConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.session, Some(PathBuf::from("picks.toml")));
    assert_eq!(parsed.centroid.half_size, 12);
    assert_eq!(parsed.warp.border, BorderPolicy::Replicate);
    assert_eq!(parsed.stacking.method, CombineMethod::Max);
}

#[test]
fn test_constant_border_in_toml() {
    let text = "input = \"in\"\noutput = \"out.tif\"\n\n[warp]\nborder = { Constant = 120.0 }\n";
    let config: PipelineConfig = toml::from_str(text).unwrap();
    assert_eq!(config.warp.border, BorderPolicy::Constant(120.0));
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_border_policy_display() {
    assert_eq!(format!("{}", BorderPolicy::Constant(0.0)), "Constant (0)");
    assert_eq!(format!("{}", BorderPolicy::Replicate), "Replicate");
}

#[test]
fn test_stage_display() {
    assert_eq!(format!("{}", PipelineStage::Selecting), "Selecting stars");
    assert_eq!(format!("{}", PipelineStage::Compositing), "Compositing");
}

#[test]
fn test_skip_reason_display() {
    assert_eq!(format!("{}", SkipReason::NoStars), "no star pair picked");
}
