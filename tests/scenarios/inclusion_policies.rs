//! only/except ref policies against a master branch pipeline

use super::*;

fn included(definition: JobDefinition) -> bool {
    seed_job(master(), definition).is_included()
}

fn rspec() -> JobDefinition {
    JobDefinition::new("rspec")
}

#[test]
fn test_no_branch_policy() {
    assert!(included(rspec()));
}

#[test]
fn test_branch_policy_does_not_match() {
    assert!(!included(rspec().with_only(&["deploy"])));
    assert!(included(rspec().with_except(&["deploy"])));
    assert!(!included(rspec().with_only(&["deploy"]).with_except(&["deploy"])));
}

#[test]
fn test_branch_regexp_policy_does_not_match() {
    assert!(!included(rspec().with_only(&["/^deploy$/"])));
    assert!(included(rspec().with_except(&["/^deploy$/"])));
    assert!(!included(rspec().with_only(&["/^deploy$/"]).with_except(&["/^deploy$/"])));
}

#[test]
fn test_branch_policy_matches() {
    let refs = ["deploy", "master"];
    assert!(included(rspec().with_only(&refs)));
    assert!(!included(rspec().with_except(&refs)));
    assert!(!included(rspec().with_only(&refs).with_except(&refs)));
}

#[test]
fn test_branch_regexp_policy_matches() {
    assert!(included(rspec().with_only(&["/^mast/"])));
    assert!(!included(rspec().with_except(&["/ster$/"])));
}

#[test]
fn test_keyword_policy_matches() {
    assert!(included(rspec().with_only(&["branches"])));
    assert!(!included(rspec().with_except(&["branches"])));
    assert!(!included(rspec().with_only(&["branches"]).with_except(&["branches"])));
}

#[test]
fn test_keyword_policy_does_not_match() {
    assert!(!included(rspec().with_only(&["tags"])));
    assert!(included(rspec().with_except(&["tags"])));
    assert!(!included(rspec().with_only(&["tags"]).with_except(&["tags"])));
}

#[test]
fn test_tag_pipeline() {
    let tag = PipelineContext::new("v1.0.0", PipelineSource::Push, PROJECT).with_tag(true);
    assert!(seed_job(tag.clone(), rspec().with_only(&["tags"])).is_included());
    assert!(!seed_job(tag.clone(), rspec().with_only(&["branches"])).is_included());
    assert!(seed_job(tag, rspec().with_only(&["/^v\\d+\\./"])).is_included());
}

#[test]
fn test_repository_path_matches() {
    let path_ref = format!("branches@{}", PROJECT);
    let refs = [path_ref.as_str()];
    assert!(included(rspec().with_only(&refs)));
    assert!(!included(rspec().with_except(&refs)));
    assert!(!included(rspec().with_only(&refs).with_except(&refs)));
}

#[test]
fn test_repository_path_does_not_match() {
    let refs = ["branches@fork"];
    assert!(!included(rspec().with_only(&refs)));
    assert!(included(rspec().with_except(&refs)));
    assert!(!included(rspec().with_only(&refs).with_except(&refs)));
}

#[test]
fn test_job_ref_overrides_pipeline_ref() {
    assert!(included(rspec().with_ref("deploy").with_only(&["deploy"])));
    assert!(!included(rspec().with_ref("deploy").with_only(&["master"])));
}

#[test]
fn test_branch_named_like_a_keyword() {
    let ctx = PipelineContext::new("branches", PipelineSource::Push, PROJECT).with_tag(true);
    // "branches" is the keyword, not the literal branch name
    assert!(!seed_job(ctx, rspec().with_only(&["branches"])).is_included());
}

#[test]
fn test_inclusion_is_idempotent() {
    let seed = seed_job(master(), rspec().with_only(&["master"]).with_except(&["tags"]));
    assert_eq!(seed.is_included(), seed.is_included());
    assert!(seed.is_included());
}

#[test]
fn test_policies_from_yaml() {
    let pipeline = seed_yaml(
        master(),
        r#"
stages:
  - name: test
    jobs:
      - name: rspec
        only:
          refs: [deploy, master]
      - name: karma
        except:
          refs: [deploy, master]
"#,
    );

    let report = pipeline.report();
    assert!(report[0].included);
    assert!(!report[1].included);
}
