use std::{fs, path::Path};

use mathexpr::{Config, Engine};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Runs one script. Each line is evaluated in order against one engine:
///
/// - `source => shown` checks the displayed result;
/// - `source => error: text` checks that evaluation fails with a message
///   containing `text`;
/// - any other line must evaluate successfully.
///
/// Blank lines and lines starting with `#` are skipped. Scripts whose name
/// starts with `big` run with big-number literals.
fn run_script(path: &Path) -> usize {
    let script = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    let big = path.file_name()
                  .and_then(|name| name.to_str())
                  .is_some_and(|name| name.starts_with("big"));
    let mut engine = Engine::with_config(if big { Config::bignumber() } else { Config::default() });
    let mut checks = 0;

    for (number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let location = format!("{}:{}", path.display(), number + 1);

        let Some((source, expected)) = line.split_once(" => ") else {
            if let Err(e) = engine.eval(line) {
                panic!("{location}: {line:?} failed: {e}");
            }
            continue;
        };

        checks += 1;
        let result = engine.eval(source);
        if let Some(message) = expected.strip_prefix("error: ") {
            match result {
                Err(e) => assert!(e.to_string().contains(message),
                                  "{location}: expected an error containing {message:?}, got {e}"),
                Ok(value) => panic!("{location}: expected an error, got {value:?}"),
            }
        } else {
            let shown = match result {
                Ok(Some(value)) => value.to_string(),
                Ok(None) => String::new(),
                Err(e) => panic!("{location}: {source:?} failed: {e}"),
            };
            assert_eq!(shown, expected, "{location}");
        }
    }

    checks
}

#[test]
fn script_corpus() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");
    let mut checks = 0;

    for entry in
        WalkDir::new(&root).sort_by_file_name()
                           .into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        checks += run_script(entry.path());
    }

    assert!(checks > 0, "No checks found in {root:?}");
}
