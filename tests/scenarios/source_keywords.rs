//! Source keywords against a `deploy` branch pipeline

use super::*;

const SOURCES: [(&str, PipelineSource); 6] = [
    ("pushes", PipelineSource::Push),
    ("web", PipelineSource::Web),
    ("triggers", PipelineSource::Trigger),
    ("schedules", PipelineSource::Schedule),
    ("api", PipelineSource::Api),
    ("external", PipelineSource::External),
];

fn deploy(source: PipelineSource) -> PipelineContext {
    PipelineContext::new("deploy", source, PROJECT)
}

fn included(source: PipelineSource, definition: JobDefinition) -> bool {
    seed_job(deploy(source), definition).is_included()
}

#[test]
fn test_keyword_matches_its_source() {
    for (keyword, source) in SOURCES {
        let only = JobDefinition::new("rspec").with_only(&[keyword]);
        let except = JobDefinition::new("rspec").with_except(&[keyword]);
        let both = JobDefinition::new("rspec").with_only(&[keyword]).with_except(&[keyword]);

        assert!(included(source, only), "only {} on {}", keyword, source);
        assert!(!included(source, except), "except {} on {}", keyword, source);
        assert!(!included(source, both), "both {} on {}", keyword, source);
    }
}

#[test]
fn test_keyword_does_not_match_other_sources() {
    for (keyword, keyword_source) in SOURCES {
        for (_, source) in SOURCES.iter().filter(|(_, s)| *s != keyword_source) {
            let only = JobDefinition::new("rspec").with_only(&[keyword]);
            let except = JobDefinition::new("rspec").with_except(&[keyword]);
            let both = JobDefinition::new("rspec").with_only(&[keyword]).with_except(&[keyword]);

            assert!(!included(*source, only), "only {} on {}", keyword, source);
            assert!(included(*source, except), "except {} on {}", keyword, source);
            assert!(!included(*source, both), "both {} on {}", keyword, source);
        }
    }
}

#[test]
fn test_singular_aliases() {
    let only = JobDefinition::new("rspec").with_only(&["trigger"]);
    assert!(included(PipelineSource::Trigger, only));

    let only = JobDefinition::new("rspec").with_only(&["schedule"]);
    assert!(included(PipelineSource::Schedule, only));
}

#[test]
fn test_source_keyword_with_repository_path() {
    let refs = [format!("pushes@{}", PROJECT)];
    let refs: Vec<&str> = refs.iter().map(String::as_str).collect();
    assert!(included(PipelineSource::Push, JobDefinition::new("rspec").with_only(&refs)));
    assert!(!included(PipelineSource::Web, JobDefinition::new("rspec").with_only(&refs)));
    assert!(!included(
        PipelineSource::Push,
        JobDefinition::new("rspec").with_only(&["pushes@other/project"])
    ));
}

#[test]
fn test_ref_patterns_apply_to_any_source() {
    for source in [PipelineSource::MergeRequestEvent, PipelineSource::Pipeline, PipelineSource::Chat] {
        let literal = JobDefinition::new("rspec").with_only(&["deploy"]);
        let regex = JobDefinition::new("rspec").with_only(&["/^deploy$/"]);
        let excluded = JobDefinition::new("rspec").with_except(&["deploy"]);

        assert!(included(source, literal), "literal on {}", source);
        assert!(included(source, regex), "regex on {}", source);
        assert!(!included(source, excluded), "except literal on {}", source);
    }
}

#[test]
fn test_unlisted_source_names_are_literal_refs() {
    for name in ["pipelines", "chats", "merge_requests", "external_pull_requests"] {
        let ctx = PipelineContext::new(name, PipelineSource::Push, PROJECT);
        assert!(seed_job(ctx, JobDefinition::new("rspec").with_only(&[name])).is_included(), "{}", name);
    }

    let ctx = deploy(PipelineSource::MergeRequestEvent);
    assert!(!seed_job(ctx, JobDefinition::new("rspec").with_only(&["merge_requests"])).is_included());
}
