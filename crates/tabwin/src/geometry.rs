//! The pure geometry commands: `resolve`, `clone` and `options`.

use std::{collections::BTreeMap, fs, path::Path};

use tabwin_geom::{WindowKey, clone_bounds, resolve as resolve_bounds};
use tabwin_options::Options;
use tracing::debug;

use crate::{
    cli::{CloneArgs, OptionsArgs, ResolveArgs},
    error::Result,
};

/// Load an option set from a JSON file, or the defaults.
pub fn load_options(path: Option<&Path>) -> Result<Options> {
    let Some(path) = path else {
        return Ok(Options::default());
    };
    debug!(path = %path.display(), "loading options");
    let text = fs::read_to_string(path)?;
    Ok(Options::from_json(&text)?)
}

/// Resolved bounds keyed by window name.
pub fn resolve(args: &ResolveArgs) -> Result<String> {
    let opts = load_options(args.options.as_deref())?;
    let windows = match args.window {
        Some(w) => vec![w],
        None => WindowKey::ALL.to_vec(),
    };
    let out: BTreeMap<&str, _> = windows
        .into_iter()
        .map(|w| (w.as_str(), resolve_bounds(&opts, w, &args.display)))
        .collect();
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Bounds of the clone window.
pub fn clone(args: &CloneArgs) -> Result<String> {
    let b = clone_bounds(&args.source, &args.display, args.mode);
    debug!(source = %args.source, display = %args.display, mode = %args.mode, result = %b, "clone");
    Ok(serde_json::to_string_pretty(&b)?)
}

/// The effective option set after validation and clamping.
pub fn options(args: &OptionsArgs) -> Result<String> {
    Ok(load_options(args.path.as_deref())?.to_json()?)
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use serde_json::{Value, json};
    use tabwin_geom::{Bounds, CloneMode};

    use super::*;
    use crate::error::Error;

    const DISPLAY: Bounds = Bounds::new(0.0, 0.0, 1600.0, 900.0);

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn resolve_both_windows_with_defaults() {
        let out = resolve(&ResolveArgs {
            display: DISPLAY,
            window: None,
            options: None,
        })
        .unwrap();
        assert_eq!(
            parse(&out),
            json!({
                "new": {"left": 800.0, "top": 0.0, "width": 800.0, "height": 900.0},
                "original": {"left": 0.0, "top": 0.0, "width": 800.0, "height": 900.0},
            })
        );
    }

    #[test]
    fn resolve_reads_options_file() {
        let path = env::temp_dir().join(format!("tabwin-opts-{}.json", process::id()));
        fs::write(&path, r#"{"new-width": 0.25, "new-left": 0.75}"#).unwrap();
        let out = resolve(&ResolveArgs {
            display: DISPLAY,
            window: Some(WindowKey::New),
            options: Some(path.clone()),
        })
        .unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(parse(&out)["new"]["left"], json!(1200.0));
        assert_eq!(parse(&out)["new"]["width"], json!(400.0));
        assert!(parse(&out).get("original").is_none());
    }

    #[test]
    fn clone_places_beside_source() {
        let out = clone(&CloneArgs {
            source: Bounds::new(1200.0, 0.0, 400.0, 800.0),
            display: DISPLAY,
            mode: CloneMode::Horizontal,
        })
        .unwrap();
        assert_eq!(
            parse(&out),
            json!({"left": 800.0, "top": 0.0, "width": 400.0, "height": 800.0})
        );
    }

    #[test]
    fn missing_options_file_is_io_error() {
        let err = load_options(Some(Path::new("/nonexistent/tabwin.json"))).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
