//! Library-level rendering properties

use pretty_assertions::assert_eq;
use repotree::test_utils::synthetic_entries;
use repotree::{EMPTY_DIRECTORY, Entry, RenderOptions, render_enhanced, render_plain};

fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::dir("src"),
        Entry::file("src/index.ts", 100),
        Entry::file("src/utils.ts", 200),
        Entry::file("README.md", 50),
    ]
}

/// Names of every rendered entry, without line art or annotations.
fn rendered_names(output: &str) -> Vec<String> {
    let mut names: Vec<String> = output
        .lines()
        .map(|line| line.trim_start_matches(['│', '├', '└', '─', ' ']))
        .map(|label| label.split(" (").next().unwrap_or(label))
        .map(|name| name.trim_end_matches('/').to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_plain_reference_output() {
    assert_eq!(
        render_plain(&sample_entries(), ""),
        "README.md\nsrc/\n├── index.ts\n└── utils.ts"
    );
}

#[test]
fn test_enhanced_reference_output() {
    let options = RenderOptions::default().with_size(true);
    assert_eq!(
        render_enhanced(&sample_entries(), "", &options),
        "src/ (2 files, 300B)\n├── index.ts (100B)\n└── utils.ts (200B)\nREADME.md (50B)\n\n📊 Summary: 1 directory, 3 files, 350B total"
    );
}

#[test]
fn test_renderers_agree_on_names() {
    let entries = synthetic_entries(4, 9);
    let options = RenderOptions::default().with_stats(false);

    let plain = render_plain(&entries, "");
    let enhanced = render_enhanced(&entries, "", &options);
    assert_ne!(plain, enhanced, "group ordering differs");
    assert_eq!(rendered_names(&plain), rendered_names(&enhanced));
}

#[test]
fn test_rendering_is_idempotent() {
    let entries = synthetic_entries(3, 7);
    let options = RenderOptions::default()
        .with_size(true)
        .with_max_depth(Some(2))
        .with_extensions([".rs"]);

    assert_eq!(render_plain(&entries, "pkg001"), render_plain(&entries, "pkg001"));
    assert_eq!(
        render_enhanced(&entries, "", &options),
        render_enhanced(&entries, "", &options)
    );
}

#[test]
fn test_input_order_does_not_matter() {
    let entries = synthetic_entries(3, 5);
    let reversed: Vec<Entry> = entries.iter().rev().cloned().collect();
    let options = RenderOptions::default().with_size(true);

    assert_eq!(render_plain(&entries, ""), render_plain(&reversed, ""));
    assert_eq!(
        render_enhanced(&entries, "", &options),
        render_enhanced(&reversed, "", &options)
    );
}

#[test]
fn test_input_order_does_not_matter_under_filter() {
    let entries = vec![Entry::file("x.ts", 4), Entry::dir("x.ts"), Entry::file("y.ts", 2)];
    let swapped = vec![Entry::dir("x.ts"), Entry::file("x.ts", 4), Entry::file("y.ts", 2)];
    let options = RenderOptions::default()
        .with_extensions([".ts"])
        .with_stats(false);

    let output = render_enhanced(&entries, "", &options);
    assert_eq!(output, "y.ts");
    assert_eq!(render_enhanced(&swapped, "", &options), output);
}

#[test]
fn test_empty_results() {
    let option_sets = [
        RenderOptions::default(),
        RenderOptions::default().with_size(true),
        RenderOptions::default().with_stats(false),
        RenderOptions::default().with_max_depth(Some(1)),
        RenderOptions::default().with_extensions([".ts"]),
    ];

    assert_eq!(render_plain(&[], ""), EMPTY_DIRECTORY);
    assert_eq!(render_plain(&sample_entries(), "lib"), EMPTY_DIRECTORY);
    for options in &option_sets {
        assert_eq!(render_enhanced(&[], "", options), EMPTY_DIRECTORY);
        assert_eq!(render_enhanced(&sample_entries(), "lib", options), EMPTY_DIRECTORY);
    }
}

#[test]
fn test_depth_limit_one() {
    let entries = vec![Entry::file("a/b/c.ts", 5)];
    let options = RenderOptions::default().with_max_depth(Some(1));
    let output = render_enhanced(&entries, "", &options);

    assert!(output.starts_with("a/\n"));
    assert!(!output.contains("b/"));
    assert!(!output.contains("c.ts"));
    assert!(output.ends_with("(depth limited to 1)"));
}

#[test]
fn test_depth_limit_annotations_match_summary() {
    let entries = vec![
        Entry::file("a/one.rs", 10),
        Entry::file("a/b/two.rs", 20),
        Entry::file("a/b/c/three.rs", 40),
    ];
    let options = RenderOptions::default()
        .with_size(true)
        .with_max_depth(Some(2));
    let output = render_enhanced(&entries, "", &options);

    assert_eq!(
        output,
        "a/ (1 file, 10B)\n├── b/\n└── one.rs (10B)\n\n📊 Summary: 2 directories, 1 file, 10B total, (depth limited to 2)"
    );
}

#[test]
fn test_extension_filter_excludes_markdown() {
    let entries = vec![
        Entry::file("src/app.ts", 100),
        Entry::file("src/app.js", 100),
        Entry::file("README.md", 5000),
    ];
    let options = RenderOptions::default().with_extensions([".ts", ".js"]);
    let output = render_enhanced(&entries, "", &options);

    assert!(!output.contains("README.md"));
    assert!(output.contains("2 files, 200B total"));
    assert!(output.ends_with("(filtered: .ts, .js)"));
}

#[test]
fn test_scoped_render_with_messy_filter_path() {
    let entries = vec![
        Entry::file("src/tree/mod.rs", 1),
        Entry::file("src/tree/node.rs", 2),
        Entry::file("src/lib.rs", 3),
    ];
    assert_eq!(render_plain(&entries, "\\src//tree/"), "mod.rs\nnode.rs");
}
