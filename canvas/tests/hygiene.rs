//! Hygiene: source-level budgets for the canvas crate.
//!
//! Scans production `.rs` files under `canvas/src/` for patterns that crash
//! the wasm module, silently drop errors, or bypass the `log` facade. Every
//! budget is zero and must stay that way.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics abort the wasm module" },
    Budget { pattern: ".expect(", max: 0, why: "panics abort the wasm module" },
    Budget { pattern: "panic!(", max: 0, why: "panics abort the wasm module" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics abort the wasm module" },
    Budget { pattern: "todo!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "let _ =", max: 0, why: "errors must be inspected" },
    Budget { pattern: ".ok()", max: 0, why: "errors must be inspected" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code instead" },
    Budget { pattern: "println!(", max: 0, why: "use the log facade" },
    Budget { pattern: "eprintln!(", max: 0, why: "use the log facade" },
    Budget { pattern: "dbg!(", max: 0, why: "debug leftovers" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding sibling `*_test.rs` modules.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn scan_finds_production_sources() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "hygiene scan must run from the canvas crate root");
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits = hits_for(&files, budget.pattern);
        let total: usize = hits.iter().map(|(_, count)| count).sum();
        if total > budget.max {
            let detail = hits.iter().map(|(path, count)| format!("    {path}: {count}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("`{}` found {total}, max {} ({})\n{detail}", budget.pattern, budget.max, budget.why));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
