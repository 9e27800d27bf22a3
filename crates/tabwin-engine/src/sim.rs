//! In-memory browser used by tests and `tabwin simulate`.

use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    BrowserApi, CreateWindow, DisplayInfo, Error, Result, TabId, TabInfo, UpdateWindow, WindowId,
    WindowInfo, WindowState,
};

/// Initial browser state for a [`SimBrowser`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimSetup {
    #[serde(default)]
    pub displays: Vec<DisplayInfo>,
    /// Windows in enumeration order. Tab ids listed here create the tabs.
    #[serde(default)]
    pub windows: Vec<WindowInfo>,
    /// The tab actions operate on; defaults to the active tab of the focused
    /// window.
    #[serde(default)]
    pub current_tab: Option<TabId>,
}

/// Mutable browser state behind the lock.
#[derive(Debug, Default)]
struct SimState {
    /// Current displays.
    displays: Vec<DisplayInfo>,
    /// Current windows in enumeration order.
    windows: Vec<WindowInfo>,
    /// Active tab per window.
    active: Vec<(WindowId, TabId)>,
    /// Explicit current tab, if any.
    current: Option<TabId>,
    /// Id handed to the next created window; ids are never reused.
    next_window: u32,
    /// Every call made, by operation name.
    calls: Vec<String>,
    /// Operations forced to fail.
    failing: HashSet<&'static str>,
}

impl SimState {
    /// Index of the window holding `tab`.
    fn window_of(&self, tab: TabId) -> Option<usize> {
        self.windows.iter().position(|w| w.tabs.contains(&tab))
    }

    fn window_idx(&self, id: WindowId) -> Result<usize> {
        self.windows
            .iter()
            .position(|w| w.id == id)
            .ok_or(Error::WindowNotFound(id))
    }

    fn tab_info(&self, tab: TabId) -> Result<TabInfo> {
        let wi = self.window_of(tab).ok_or(Error::TabNotFound(tab))?;
        let w = &self.windows[wi];
        let index = w.tabs.iter().position(|t| *t == tab).unwrap_or_default();
        Ok(TabInfo {
            id: tab,
            window: w.id,
            index,
            active: self.active.contains(&(w.id, tab)),
        })
    }

    /// Pull `tab` out of its window, closing the window if it empties.
    fn detach(&mut self, tab: TabId) -> Result<()> {
        let wi = self.window_of(tab).ok_or(Error::TabNotFound(tab))?;
        let wid = self.windows[wi].id;
        self.windows[wi].tabs.retain(|t| *t != tab);
        self.active.retain(|(_, t)| *t != tab);
        if self.windows[wi].tabs.is_empty() {
            trace!("sim: closing empty {}", wid);
            self.windows.remove(wi);
            self.active.retain(|(w, _)| *w != wid);
        } else if !self.active.iter().any(|(w, _)| *w == wid) {
            let first = self.windows[wi].tabs[0];
            self.active.push((wid, first));
        }
        Ok(())
    }

    fn activate(&mut self, window: WindowId, tab: TabId) {
        self.active.retain(|(w, _)| *w != window);
        self.active.push((window, tab));
    }

    fn focus(&mut self, id: WindowId) {
        for w in &mut self.windows {
            w.focused = w.id == id;
        }
    }

    fn check(&mut self, op: &'static str) -> Result<()> {
        self.calls.push(op.to_string());
        if self.failing.contains(op) {
            return Err(Error::browser(op, "injected failure"));
        }
        Ok(())
    }
}

/// A scripted browser that applies window/tab operations to in-memory state.
///
/// Closing semantics follow real browsers: a window whose last tab is moved
/// away disappears from the window list.
#[derive(Clone, Default)]
pub struct SimBrowser {
    /// Shared state; clones observe the same browser.
    state: Arc<Mutex<SimState>>,
}

impl SimBrowser {
    pub fn new(setup: SimSetup) -> Self {
        let active = setup
            .windows
            .iter()
            .filter_map(|w| w.tabs.first().map(|t| (w.id, *t)))
            .collect();
        let next_window = setup.windows.iter().map(|w| w.id.0).max().unwrap_or(0) + 1;
        Self {
            state: Arc::new(Mutex::new(SimState {
                displays: setup.displays,
                windows: setup.windows,
                active,
                current: setup.current_tab,
                next_window,
                ..SimState::default()
            })),
        }
    }

    /// Current windows in enumeration order.
    pub fn windows_now(&self) -> Vec<WindowInfo> {
        self.state.lock().windows.clone()
    }

    pub fn window_now(&self, id: WindowId) -> Option<WindowInfo> {
        self.state.lock().windows.iter().find(|w| w.id == id).cloned()
    }

    /// All calls made so far, by operation name.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn calls_contains(&self, op: &str) -> bool {
        self.state.lock().calls.iter().any(|c| c == op)
    }

    /// Make every future call to `op` fail.
    pub fn fail_on(&self, op: &'static str) {
        self.state.lock().failing.insert(op);
    }
}

#[async_trait]
impl BrowserApi for SimBrowser {
    async fn current_tab(&self) -> Result<TabInfo> {
        let mut s = self.state.lock();
        s.check("current_tab")?;
        let tab = match s.current {
            Some(t) => t,
            None => {
                let focused = s
                    .windows
                    .iter()
                    .find(|w| w.focused)
                    .or_else(|| s.windows.first())
                    .ok_or(Error::NoActiveTab)?
                    .id;
                s.active
                    .iter()
                    .find(|(w, _)| *w == focused)
                    .map(|(_, t)| *t)
                    .ok_or(Error::NoActiveTab)?
            }
        };
        s.tab_info(tab)
    }

    async fn window(&self, id: WindowId) -> Result<WindowInfo> {
        let mut s = self.state.lock();
        s.check("window")?;
        let i = s.window_idx(id)?;
        Ok(s.windows[i].clone())
    }

    async fn windows(&self) -> Result<Vec<WindowInfo>> {
        let mut s = self.state.lock();
        s.check("windows")?;
        Ok(s.windows.clone())
    }

    async fn displays(&self) -> Result<Vec<DisplayInfo>> {
        let mut s = self.state.lock();
        s.check("displays")?;
        Ok(s.displays.clone())
    }

    async fn create_window(&self, req: CreateWindow) -> Result<WindowInfo> {
        let mut s = self.state.lock();
        s.check("create_window")?;
        s.detach(req.tab)?;
        let id = WindowId(s.next_window);
        s.next_window += 1;
        let info = WindowInfo {
            id,
            kind: req.kind,
            state: WindowState::Normal,
            focused: false,
            bounds: req.bounds.map(Into::into).unwrap_or_default(),
            tabs: vec![req.tab],
        };
        s.windows.push(info);
        s.activate(id, req.tab);
        if req.focused {
            s.focus(id);
        }
        let i = s.window_idx(id)?;
        Ok(s.windows[i].clone())
    }

    async fn update_window(&self, id: WindowId, req: UpdateWindow) -> Result<WindowInfo> {
        let mut s = self.state.lock();
        s.check("update_window")?;
        let i = s.window_idx(id)?;
        if req.focused == Some(true) {
            s.focus(id);
        }
        let w = &mut s.windows[i];
        if let Some(b) = req.bounds {
            w.bounds = b.into();
        }
        if let Some(st) = req.state {
            w.state = st;
        }
        Ok(w.clone())
    }

    async fn move_tab(&self, tab: TabId, window: WindowId) -> Result<()> {
        let mut s = self.state.lock();
        s.check("move_tab")?;
        // Validate the target before detaching so a bad id leaves state intact.
        s.window_idx(window)?;
        s.detach(tab)?;
        let i = s.window_idx(window)?;
        s.windows[i].tabs.push(tab);
        Ok(())
    }

    async fn activate_tab(&self, tab: TabId) -> Result<()> {
        let mut s = self.state.lock();
        s.check("activate_tab")?;
        let wi = s.window_of(tab).ok_or(Error::TabNotFound(tab))?;
        let wid = s.windows[wi].id;
        s.activate(wid, tab);
        Ok(())
    }
}
