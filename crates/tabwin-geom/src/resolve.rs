//! Conversion of normalized window ratios into pixel bounds on a display.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, round_half_up};

/// Which of the two managed windows a ratio set describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKey {
    /// The window the tab is taken from.
    Original,
    /// The window created for the tab.
    New,
}

impl WindowKey {
    /// Both keys, original first.
    pub const ALL: [Self; 2] = [Self::Original, Self::New];

    /// Stable string form (`original` / `new`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::New => "new",
        }
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "new" => Ok(Self::New),
            other => Err(format!("unknown window '{other}' (expected original|new)")),
        }
    }
}

/// One of the four rectangle properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsProp {
    Width,
    Height,
    Left,
    Top,
}

impl BoundsProp {
    /// All properties in option-key order.
    pub const ALL: [Self; 4] = [Self::Width, Self::Height, Self::Left, Self::Top];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Left => "left",
            Self::Top => "top",
        }
    }
}

/// Anything that can answer "what fraction of the display is `prop` for `window`".
///
/// The options store implements this on its snapshots; the resolver only ever
/// reads through it.
pub trait RatioSource {
    fn ratio(&self, window: WindowKey, prop: BoundsProp) -> f64;
}

/// Four ratios describing one window as fractions of its display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

impl NormalizedRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left,
            top,
        }
    }

    pub fn get(&self, prop: BoundsProp) -> f64 {
        match prop {
            BoundsProp::Width => self.width,
            BoundsProp::Height => self.height,
            BoundsProp::Left => self.left,
            BoundsProp::Top => self.top,
        }
    }

    pub fn set(&mut self, prop: BoundsProp, value: f64) {
        match prop {
            BoundsProp::Width => self.width = value,
            BoundsProp::Height => self.height = value,
            BoundsProp::Left => self.left = value,
            BoundsProp::Top => self.top = value,
        }
    }
}

/// The full set of eight ratios, keyed by window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedWindowSpec {
    pub original: NormalizedRect,
    pub new: NormalizedRect,
}

impl NormalizedWindowSpec {
    pub fn rect(&self, window: WindowKey) -> &NormalizedRect {
        match window {
            WindowKey::Original => &self.original,
            WindowKey::New => &self.new,
        }
    }

    pub fn rect_mut(&mut self, window: WindowKey) -> &mut NormalizedRect {
        match window {
            WindowKey::Original => &mut self.original,
            WindowKey::New => &mut self.new,
        }
    }
}

impl RatioSource for NormalizedWindowSpec {
    fn ratio(&self, window: WindowKey, prop: BoundsProp) -> f64 {
        self.rect(window).get(prop)
    }
}

/// Resolve the ratios for `window` against `display` into pixel bounds.
///
/// Every component is rounded on its own, so two windows resolved separately
/// may disagree by a pixel where they meet. Ratios outside `[0, 1]` are not
/// clamped here and simply extrapolate past the display edges.
pub fn resolve<S>(source: &S, window: WindowKey, display: &Bounds) -> Bounds
where
    S: RatioSource + ?Sized,
{
    let r = |prop| source.ratio(window, prop);
    Bounds {
        left: round_half_up(r(BoundsProp::Left) * display.width + display.left),
        top: round_half_up(r(BoundsProp::Top) * display.height + display.top),
        width: round_half_up(r(BoundsProp::Width) * display.width),
        height: round_half_up(r(BoundsProp::Height) * display.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halves() -> NormalizedWindowSpec {
        NormalizedWindowSpec {
            original: NormalizedRect::new(0.0, 0.0, 0.5, 1.0),
            new: NormalizedRect::new(0.5, 0.0, 0.5, 1.0),
        }
    }

    #[test]
    fn resolves_side_by_side_halves() {
        let spec = halves();
        let display = Bounds::new(0.0, 0.0, 1600.0, 900.0);
        assert_eq!(
            resolve(&spec, WindowKey::Original, &display),
            Bounds::new(0.0, 0.0, 800.0, 900.0)
        );
        assert_eq!(
            resolve(&spec, WindowKey::New, &display),
            Bounds::new(800.0, 0.0, 800.0, 900.0)
        );
    }

    #[test]
    fn offsets_by_display_origin() {
        let spec = halves();
        let display = Bounds::new(1920.0, 25.0, 1280.0, 775.0);
        assert_eq!(
            resolve(&spec, WindowKey::New, &display),
            Bounds::new(2560.0, 25.0, 640.0, 775.0)
        );
    }

    #[test]
    fn rounds_each_component_independently() {
        let spec = NormalizedWindowSpec {
            original: NormalizedRect::new(1.0 / 3.0, 0.0, 1.0 / 3.0, 0.5),
            new: NormalizedRect::default(),
        };
        let display = Bounds::new(0.0, 0.0, 1000.0, 901.0);
        let b = resolve(&spec, WindowKey::Original, &display);
        assert_eq!(b.left, 333.0);
        assert_eq!(b.width, 333.0);
        // 450.5 rounds up
        assert_eq!(b.height, 451.0);
    }

    #[test]
    fn out_of_range_ratios_extrapolate() {
        let spec = NormalizedWindowSpec {
            original: NormalizedRect::new(-0.5, 1.5, 2.0, -0.25),
            new: NormalizedRect::default(),
        };
        let display = Bounds::new(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(
            resolve(&spec, WindowKey::Original, &display),
            Bounds::new(-500.0, 1200.0, 2000.0, -200.0)
        );
    }

    #[test]
    fn window_key_round_trips_through_strings() {
        for key in WindowKey::ALL {
            assert_eq!(key.as_str().parse::<WindowKey>(), Ok(key));
        }
        assert!("popup".parse::<WindowKey>().is_err());
    }

    #[test]
    fn rect_set_and_get_agree() {
        let mut r = NormalizedRect::default();
        for (i, prop) in BoundsProp::ALL.into_iter().enumerate() {
            r.set(prop, i as f64 / 10.0);
        }
        assert_eq!(r, NormalizedRect::new(0.2, 0.3, 0.0, 0.1));
        assert_eq!(r.get(BoundsProp::Top), 0.3);
    }
}
