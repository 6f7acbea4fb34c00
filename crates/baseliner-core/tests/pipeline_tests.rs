//! Integration tests for the full token pipeline, using the in-memory
//! filesystem and the fake compiler so no disk or external process is
//! touched.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use chrono::{TimeZone, Utc};

use baseliner_adapters::{FakeCompiler, MemoryFilesystem};
use baseliner_core::generate::overrides::semantic_lines;
use baseliner_core::prelude::*;

const DOCS_TOKENS: &str = r#"{
    "baselineUnit": "0.5rem",
    "font": "Inter",
    "elements": {
        "h1": { "fontSize": "2rem", "lineHeight": "2.5rem", "spaceAfter": "1rem", "nudgeTop": "0.25rem", "fontWeight": 700 },
        "h2": { "fontSize": "1.5rem", "lineHeight": "2rem", "spaceAfter": "1rem", "nudgeTop": "0.3rem", "fontWeight": 600 },
        "p":  { "fontSize": 1, "lineHeight": 1.5, "spaceAfter": 1 }
    }
}"#;

const EDITORIAL_TOKENS: &str = r#"{
    "baselineUnit": 0.5,
    "elements": {
        "p": { "fontSize": 1.125, "lineHeight": 1.75, "spaceAfter": 1 }
    }
}"#;

const PLUGIN_HOST: &str = "<html>\n<script>\nconst TOKENS_DATA = {};\nrender(TOKENS_DATA);\n</script>\n</html>\n";

fn layout() -> PathLayout {
    PathLayout {
        config_dir: "config".into(),
        styles_root: "src".into(),
        css_root: "dist/css".into(),
        demos_root: "dist/demos".into(),
        plugin_host: "figma-plugin/ui.html".into(),
    }
}

struct Harness {
    filesystem: MemoryFilesystem,
    compiler: FakeCompiler,
    pipeline: PipelineService,
}

fn harness(options: PipelineOptions) -> Harness {
    let filesystem = MemoryFilesystem::new();
    filesystem.seed_file("config/typography-config-docs.json", DOCS_TOKENS);
    filesystem.seed_file("config/typography-config-editorial.json", EDITORIAL_TOKENS);
    filesystem.seed_file("src/docs/main.scss", "@use 'settings';\nbody { margin: 0; }\n");
    filesystem.seed_file("src/editorial/main.scss", "body { margin: 0; }\n");
    filesystem.seed_file("figma-plugin/ui.html", PLUGIN_HOST);

    let compiler = FakeCompiler::new(filesystem.clone());
    let pipeline = PipelineService::new(
        Box::new(filesystem.clone()),
        Box::new(compiler.clone()),
        layout(),
        options,
    );
    Harness {
        filesystem,
        compiler,
        pipeline,
    }
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

// ── cold build ────────────────────────────────────────────────────────────────

#[test]
fn cold_build_produces_the_full_artifact_chain() {
    let h = harness(PipelineOptions::default());
    let sources = h.pipeline.discover_scales().unwrap();
    assert_eq!(sources.len(), 2);

    let summary = h.pipeline.build_all(&sources, now());
    assert!(summary.is_success(), "failures: {:?}", summary.failures);

    for path in [
        "src/docs/_vanilla-text-settings.generated.scss",
        "src/docs/_vanilla-settings-automated-overrides.scss",
        "src/docs/_generated-styles.scss",
        "dist/css/docs.css",
        "dist/demos/typography-docs.html",
        "dist/css/editorial.css",
    ] {
        assert!(h.filesystem.exists(Path::new(path)), "missing {path}");
    }
    assert_eq!(h.compiler.invocations(), ["docs", "editorial"]);
}

#[test]
fn generated_css_rule_matches_the_token_math() {
    let h = harness(PipelineOptions::default());
    let sources = h.pipeline.discover_scales().unwrap();
    h.pipeline.build_all(&sources, now());

    let styles = h.filesystem.read("src/docs/_generated-styles.scss").unwrap();
    assert!(styles.contains(
        "h1 {\n  font-size: 2rem;\n  line-height: 2.5rem;\n  font-weight: 700;\n  padding-top: 0.25rem;\n  margin-bottom: 0.75rem;\n  margin-top: 0;\n}"
    ));
}

#[test]
fn plugin_blob_is_spliced_with_raw_values() {
    let h = harness(PipelineOptions::default());
    let sources = h.pipeline.discover_scales().unwrap();
    h.pipeline.build_all(&sources, now());

    let host = h.filesystem.read("figma-plugin/ui.html").unwrap();
    // surrounding host bytes untouched
    assert!(host.starts_with("<html>\n<script>\n"));
    assert!(host.ends_with("\nrender(TOKENS_DATA);\n</script>\n</html>\n"));
    // raw forms survive
    assert!(host.contains("\"fontSize\": \"2rem\""));
    assert!(host.contains("\"fontStyle\": \"normal\""));
    assert!(host.contains("\"nudgeTop\": \"0.25rem\""));
}

#[test]
fn rebuild_with_unchanged_input_is_byte_identical_modulo_timestamps() {
    let h = harness(PipelineOptions::default());
    let sources = h.pipeline.discover_scales().unwrap();
    h.pipeline.build_all(&sources, now());
    let first_settings = h.filesystem.read("src/docs/_vanilla-text-settings.generated.scss").unwrap();
    let first_overrides = h.filesystem.read("src/docs/_vanilla-settings-automated-overrides.scss").unwrap();

    let later = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
    h.pipeline.build_all(&sources, later);

    let second_settings = h.filesystem.read("src/docs/_vanilla-text-settings.generated.scss").unwrap();
    let second_overrides = h.filesystem.read("src/docs/_vanilla-settings-automated-overrides.scss").unwrap();

    assert_eq!(first_settings, second_settings);
    assert_eq!(
        semantic_lines(&first_overrides),
        semantic_lines(&second_overrides)
    );
}

// ── failure containment ───────────────────────────────────────────────────────

#[test]
fn one_failing_scale_does_not_stop_the_others() {
    let h = harness(PipelineOptions::default());
    h.compiler.fail_for("docs");

    let sources = h.pipeline.discover_scales().unwrap();
    let summary = h.pipeline.build_all(&sources, now());

    assert_eq!(summary.completed, ["editorial"]);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].0, "docs");
    assert!(h.filesystem.exists(Path::new("dist/css/editorial.css")));
}

#[test]
fn missing_main_scss_fails_that_scale_only() {
    let h = harness(PipelineOptions::default());
    h.filesystem.remove_file("src/docs/main.scss");

    let sources = h.pipeline.discover_scales().unwrap();
    let summary = h.pipeline.build_all(&sources, now());

    assert_eq!(summary.completed, ["editorial"]);
    assert_eq!(summary.failures[0].0, "docs");
}

#[test]
fn unspliceable_host_fails_only_the_bridge_step() {
    let h = harness(PipelineOptions::default());
    h.filesystem.seed_file("figma-plugin/ui.html", "<html>hand-edited</html>");

    let sources = h.pipeline.discover_scales().unwrap();
    let summary = h.pipeline.build_all(&sources, now());

    // both scale chains completed, only the blob step failed
    assert_eq!(summary.completed, ["docs", "editorial"]);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].0, "plugin-blob");
    // and the host file was left unmodified
    assert_eq!(
        h.filesystem.read("figma-plugin/ui.html").as_deref(),
        Some("<html>hand-edited</html>")
    );
}

// ── demo non-clobbering ───────────────────────────────────────────────────────

#[test]
fn existing_demo_is_not_overwritten() {
    let h = harness(PipelineOptions::default());
    h.filesystem.seed_file("dist/demos/typography-docs.html", "<html>mine</html>");

    let sources = h.pipeline.discover_scales().unwrap();
    h.pipeline.build_all(&sources, now());

    assert_eq!(
        h.filesystem.read("dist/demos/typography-docs.html").as_deref(),
        Some("<html>mine</html>")
    );
}

#[test]
fn force_demos_overwrites() {
    let h = harness(PipelineOptions { force_demos: true });
    h.filesystem.seed_file("dist/demos/typography-docs.html", "<html>mine</html>");

    let sources = h.pipeline.discover_scales().unwrap();
    h.pipeline.build_all(&sources, now());

    let demo = h.filesystem.read("dist/demos/typography-docs.html").unwrap();
    assert!(demo.contains("Toggle Baseline Grid"));
}

#[test]
fn user_template_always_wins() {
    let h = harness(PipelineOptions::default());
    h.filesystem.seed_file("src/docs/demo.html", "<html>template</html>");
    h.filesystem.seed_file("dist/demos/typography-docs.html", "<html>stale</html>");

    let sources = h.pipeline.discover_scales().unwrap();
    h.pipeline.build_all(&sources, now());

    assert_eq!(
        h.filesystem.read("dist/demos/typography-docs.html").as_deref(),
        Some("<html>template</html>")
    );
}

// ── watch mode ────────────────────────────────────────────────────────────────

fn watch_harness() -> (Harness, WatchService) {
    let h = harness(PipelineOptions::default());
    let pipeline = PipelineService::new(
        Box::new(h.filesystem.clone()),
        Box::new(h.compiler.clone()),
        layout(),
        PipelineOptions::default(),
    );
    let service = WatchService::new(pipeline, Duration::from_millis(10));
    (h, service)
}

fn send_change(tx: &mpsc::Sender<ChangeEvent>, path: &str) {
    tx.send(ChangeEvent {
        path: PathBuf::from(path),
        kind: ChangeKind::Modified,
    })
    .unwrap();
}

#[test]
fn token_change_rebuilds_only_that_scale() {
    let (h, mut service) = watch_harness();
    let (tx, rx) = mpsc::channel();
    send_change(&tx, "config/typography-config-docs.json");
    drop(tx);

    let stats = service.run(rx).unwrap();
    assert_eq!(stats.passes, 1);
    assert_eq!(stats.failures, 0);
    // only docs was compiled
    assert_eq!(h.compiler.invocations(), ["docs"]);
    // but the multi-scale blob includes editorial too
    let host = h.filesystem.read("figma-plugin/ui.html").unwrap();
    assert!(host.contains("\"editorial\""));
}

#[test]
fn scss_change_rebuilds_all_scales() {
    let (h, mut service) = watch_harness();
    let (tx, rx) = mpsc::channel();
    send_change(&tx, "src/docs/main.scss");
    drop(tx);

    let stats = service.run(rx).unwrap();
    assert_eq!(stats.passes, 1);
    assert_eq!(h.compiler.invocations(), ["docs", "editorial"]);
}

#[test]
fn identical_rewrite_triggers_no_rebuild() {
    let (h, mut service) = watch_harness();
    let (tx, rx) = mpsc::channel();
    // First observation populates the hash table; the second,
    // byte-identical "save" must be absorbed as a no-op.
    send_change(&tx, "config/typography-config-docs.json");
    send_change(&tx, "config/typography-config-docs.json");
    drop(tx);

    let stats = service.run(rx).unwrap();
    assert_eq!(stats.passes, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(h.compiler.invocations(), ["docs"]);
}

#[test]
fn burst_of_events_coalesces_into_one_pass() {
    let (h, mut service) = watch_harness();
    let (tx, rx) = mpsc::channel();
    send_change(&tx, "config/typography-config-docs.json");
    send_change(&tx, "config/typography-config-editorial.json");
    drop(tx);

    let stats = service.run(rx).unwrap();
    assert_eq!(stats.passes, 1);
    assert_eq!(h.compiler.invocations(), ["docs", "editorial"]);
}

#[test]
fn watcher_survives_a_failing_pass() {
    let (h, mut service) = watch_harness();
    h.compiler.fail_for("docs");
    let (tx, rx) = mpsc::channel();

    // Drive the loop from a background thread so the two events land in
    // separate batches (the first pass fails, the second must still run).
    let handle = std::thread::spawn(move || service.run(rx).unwrap());
    send_change(&tx, "config/typography-config-docs.json");
    std::thread::sleep(Duration::from_millis(200));
    send_change(&tx, "config/typography-config-editorial.json");
    drop(tx);

    let stats = handle.join().unwrap();
    assert_eq!(stats.passes, 2);
    assert_eq!(stats.failures, 1);
    // the second pass still ran
    assert!(h.compiler.invocations().contains(&"editorial".to_string()));
}
