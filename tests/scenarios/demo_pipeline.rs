//! The demo pipeline shipped in demos/

use super::*;

fn demo() -> PipelineConfig {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/pipeline.yml");
    PipelineConfig::from_file(path).expect("demo pipeline should load")
}

#[test]
fn test_demo_on_master() {
    let config = demo();
    let pipeline = PipelineSeed::new(master(), &config, &config.settings());

    let included: Vec<String> = pipeline
        .report()
        .into_iter()
        .filter(|r| r.included)
        .map(|r| r.name)
        .collect();
    assert_eq!(included, vec!["compile", "rspec", "pages", "release", "downstream"]);
    assert_eq!(pipeline.errors(), vec!["pages: needs 'docs'"]);
}

#[test]
fn test_demo_on_release_tag() {
    let config = demo();
    let context = PipelineContext::new("release-1.2", PipelineSource::Push, PROJECT).with_tag(true);
    let pipeline = PipelineSeed::new(context, &config, &config.settings());

    let report = pipeline.report();
    let release = report.iter().find(|r| r.name == "release").unwrap();
    let docs = report.iter().find(|r| r.name == "docs").unwrap();
    assert!(!release.included);
    assert!(docs.included);
    assert!(pipeline.errors().is_empty());
}

#[test]
fn test_demo_on_schedule() {
    let config = demo();
    let context = PipelineContext::new("master", PipelineSource::Schedule, PROJECT);
    let pipeline = PipelineSeed::new(context, &config, &config.settings());

    let nightly = pipeline.stages()[1].jobs().iter().find(|j| j.name() == "nightly").unwrap();
    assert!(nightly.is_included());
    assert!(pipeline.stages()[2].jobs()[1].is_bridge());
}
