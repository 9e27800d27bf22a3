//! Typed snapshot of every option, with validation on write.

use serde_json::{Map, Value};
use tabwin_geom::{
    BoundsProp, CloneMode, NormalizedRect, NormalizedWindowSpec, RatioSource, WindowKey,
};
use tracing::debug;

use crate::{Error, OptionKey, OptionValue, Result};

/// Complete option set.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Normalized bounds for the original and new windows.
    pub spec: NormalizedWindowSpec,
    pub clone_mode: CloneMode,
    /// Window that receives focus after the tab moves.
    pub focus: WindowKey,
    pub resize_original: bool,
    pub copy_fullscreen: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            spec: NormalizedWindowSpec {
                original: NormalizedRect::new(0.0, 0.0, 0.5, 1.0),
                new: NormalizedRect::new(0.5, 0.0, 0.5, 1.0),
            },
            clone_mode: CloneMode::No,
            focus: WindowKey::New,
            resize_original: true,
            copy_fullscreen: true,
        }
    }
}

impl RatioSource for Options {
    fn ratio(&self, window: WindowKey, prop: BoundsProp) -> f64 {
        self.spec.ratio(window, prop)
    }
}

impl Options {
    /// Read a single option.
    pub fn get(&self, key: OptionKey) -> OptionValue {
        match key {
            OptionKey::Ratio(w, p) => OptionValue::Number(self.spec.rect(w).get(p)),
            OptionKey::CloneMode => OptionValue::Text(self.clone_mode.as_str().to_string()),
            OptionKey::Focus => OptionValue::Text(self.focus.as_str().to_string()),
            OptionKey::ResizeOriginal => OptionValue::Bool(self.resize_original),
            OptionKey::CopyFullscreen => OptionValue::Bool(self.copy_fullscreen),
        }
    }

    /// Validate and write a single option, clamping ratios into `[0, 1]`.
    ///
    /// Returns whether the stored value changed.
    pub fn set(&mut self, key: OptionKey, value: OptionValue) -> Result<bool> {
        let changed = match key {
            OptionKey::Ratio(w, p) => {
                let raw = value.as_f64().ok_or(Error::TypeMismatch {
                    key,
                    expected: "number",
                })?;
                let v = clamp_ratio(key, raw)?;
                let rect = self.spec.rect_mut(w);
                let changed = rect.get(p) != v;
                rect.set(p, v);
                changed
            }
            OptionKey::CloneMode => {
                let s = value.as_str().ok_or(Error::TypeMismatch {
                    key,
                    expected: "string",
                })?;
                let mode: CloneMode = s.parse()?;
                replace(&mut self.clone_mode, mode)
            }
            OptionKey::Focus => {
                let s = value.as_str().ok_or(Error::TypeMismatch {
                    key,
                    expected: "string",
                })?;
                let focus = s
                    .parse::<WindowKey>()
                    .map_err(|_| Error::InvalidFocus(s.to_string()))?;
                replace(&mut self.focus, focus)
            }
            OptionKey::ResizeOriginal | OptionKey::CopyFullscreen => {
                let b = value.as_bool().ok_or(Error::TypeMismatch {
                    key,
                    expected: "boolean",
                })?;
                let slot = if key == OptionKey::ResizeOriginal {
                    &mut self.resize_original
                } else {
                    &mut self.copy_fullscreen
                };
                replace(slot, b)
            }
        };
        Ok(changed)
    }

    /// Build an option set from a JSON object keyed by option name.
    ///
    /// Missing keys keep their defaults; every present key goes through
    /// [`Options::set`], so ratios are clamped exactly as live updates are.
    pub fn from_json(s: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(s)?;
        let mut opts = Self::default();
        for (name, raw) in map {
            let key: OptionKey = name.parse()?;
            let value: OptionValue = serde_json::from_value(raw)?;
            opts.set(key, value)?;
        }
        Ok(opts)
    }

    /// Serialize every option into a pretty-printed JSON object.
    pub fn to_json(&self) -> Result<String> {
        let mut map = Map::new();
        for key in OptionKey::ALL {
            map.insert(key.name().to_string(), serde_json::to_value(self.get(key))?);
        }
        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }
}

/// Clamp a ratio into `[0, 1]`, rejecting NaN and infinities.
fn clamp_ratio(key: OptionKey, raw: f64) -> Result<f64> {
    if !raw.is_finite() {
        return Err(Error::NotFinite(key));
    }
    let v = raw.clamp(0.0, 1.0);
    if v != raw {
        debug!("options: clamped {}={} to {}", key, raw, v);
    }
    Ok(v)
}

/// Store `new` in `slot`, reporting whether it differed.
fn replace<T: PartialEq>(slot: &mut T, new: T) -> bool {
    if *slot == new {
        false
    } else {
        *slot = new;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_split_the_display_in_half() {
        let o = Options::default();
        assert_eq!(o.get("original-width".parse().unwrap()), 0.5.into());
        assert_eq!(o.get("new-left".parse().unwrap()), 0.5.into());
        assert_eq!(o.get(OptionKey::CloneMode), "clone-mode-no".into());
        assert_eq!(o.get(OptionKey::Focus), "new".into());
        assert_eq!(o.get(OptionKey::ResizeOriginal), true.into());
    }

    #[test]
    fn ratios_are_clamped() {
        let mut o = Options::default();
        let key = OptionKey::Ratio(WindowKey::New, BoundsProp::Width);
        assert!(o.set(key, 1.7.into()).unwrap());
        assert_eq!(o.spec.new.width, 1.0);
        let key = OptionKey::Ratio(WindowKey::Original, BoundsProp::Top);
        assert!(!o.set(key, (-0.2).into()).unwrap());
        assert_eq!(o.spec.original.top, 0.0);
    }

    #[test]
    fn rejects_bad_values() {
        let mut o = Options::default();
        let key = OptionKey::Ratio(WindowKey::New, BoundsProp::Left);
        assert!(matches!(
            o.set(key, f64::NAN.into()),
            Err(Error::NotFinite(k)) if k == key
        ));
        assert!(matches!(
            o.set(key, "half".into()),
            Err(Error::TypeMismatch { expected: "number", .. })
        ));
        assert!(matches!(
            o.set(OptionKey::CloneMode, "clone-mode-diagonal".into()),
            Err(Error::InvalidCloneMode(_))
        ));
        assert!(matches!(
            o.set(OptionKey::Focus, "popup".into()),
            Err(Error::InvalidFocus(_))
        ));
        assert!(matches!(
            o.set(OptionKey::CopyFullscreen, 1.0.into()),
            Err(Error::TypeMismatch { expected: "boolean", .. })
        ));
        assert_eq!(o, Options::default());
    }

    #[test]
    fn json_import_fills_defaults_and_clamps() {
        let o = Options::from_json(
            r#"{"clone-mode": "clone-mode-horizontal", "new-width": 2, "focus": "original"}"#,
        )
        .unwrap();
        assert_eq!(o.clone_mode, CloneMode::Horizontal);
        assert_eq!(o.spec.new.width, 1.0);
        assert_eq!(o.focus, WindowKey::Original);
        assert_eq!(o.spec.original, Options::default().spec.original);
    }

    #[test]
    fn json_import_rejects_unknown_keys() {
        assert!(matches!(
            Options::from_json(r#"{"popup-width": 0.3}"#),
            Err(Error::UnknownKey(_))
        ));
        assert!(matches!(Options::from_json("[1,2]"), Err(Error::Json(_))));
    }

    #[test]
    fn json_export_reimports_identically() {
        let mut o = Options::default();
        o.set(OptionKey::CloneMode, "clone-mode-vertical".into())
            .unwrap();
        o.set(OptionKey::ResizeOriginal, false.into()).unwrap();
        let text = o.to_json().unwrap();
        assert!(text.contains("\"clone-mode\": \"clone-mode-vertical\""));
        assert_eq!(Options::from_json(&text).unwrap(), o);
    }
}
