//! System Color Scheme
//!
//! Reads the OS dark-mode preference and reports changes over a channel.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use tracing::{debug, info, warn};

use crate::constants::SYSTEM_POLL_INTERVAL_MS;

/// Source of the OS "prefers dark" signal
pub trait ColorSchemeSource {
    /// Current OS preference; `false` when unsupported
    fn prefers_dark(&self) -> bool;

    /// Whether the host exposes a color-scheme preference at all
    fn supports_color_scheme(&self) -> bool;

    /// Start reporting changes. Each message is the new "prefers dark" value.
    /// Returns `None` when the host cannot report changes.
    fn watch(&mut self) -> Option<Receiver<bool>>;

    /// Stop reporting changes. Safe to call when not watching.
    fn unwatch(&mut self);
}

/// OS preference as reported by `dark-light`; `None` when unknown
fn detect() -> Option<bool> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(true),
        Ok(dark_light::Mode::Light) => Some(false),
        Ok(dark_light::Mode::Unspecified) => None,
        Err(e) => {
            debug!(error = %e, "Color scheme detection failed");
            None
        }
    }
}

struct Watcher {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Native color-scheme source. Changes are found by polling on a background thread.
pub struct SystemColorScheme {
    poll_interval: Duration,
    follow_changes: bool,
    watcher: Option<Watcher>,
}

impl Default for SystemColorScheme {
    fn default() -> Self {
        Self::new(Duration::from_millis(SYSTEM_POLL_INTERVAL_MS))
    }
}

impl SystemColorScheme {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            follow_changes: true,
            watcher: None,
        }
    }

    /// Read the preference once at startup but never report changes
    pub fn without_watch(mut self) -> Self {
        self.follow_changes = false;
        self
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }
}

impl ColorSchemeSource for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        detect().unwrap_or(false)
    }

    fn supports_color_scheme(&self) -> bool {
        detect().is_some()
    }

    fn watch(&mut self) -> Option<Receiver<bool>> {
        self.unwatch();
        if !self.follow_changes {
            debug!("System color scheme watching disabled");
            return None;
        }

        let (tx, rx) = crossbeam_channel::unbounded();
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);
        let interval = self.poll_interval;
        let mut last = self.prefers_dark();

        let spawned = std::thread::Builder::new()
            .name("color-scheme-watch".to_string())
            .spawn(move || {
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        // stop requested or the owner went away
                        _ => break,
                    }
                    let current = detect().unwrap_or(false);
                    if current != last {
                        last = current;
                        if tx.send(current).is_err() {
                            break;
                        }
                    }
                }
                debug!("Color scheme watcher stopped");
            });

        match spawned {
            Ok(handle) => {
                info!(interval_ms = interval.as_millis() as u64, "Watching system color scheme");
                self.watcher = Some(Watcher { stop_tx, handle });
                Some(rx)
            }
            Err(e) => {
                warn!(error = %e, "Failed to start color scheme watcher");
                None
            }
        }
    }

    fn unwatch(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            let _ = watcher.stop_tx.send(());
            if watcher.handle.join().is_err() {
                warn!("Color scheme watcher panicked");
            }
        }
    }
}

impl Drop for SystemColorScheme {
    fn drop(&mut self) {
        self.unwatch();
    }
}

#[derive(Debug)]
struct StaticState {
    prefers_dark: bool,
    supported: bool,
    sender: Option<Sender<bool>>,
    watch_calls: usize,
    unwatch_calls: usize,
}

/// Fixed color-scheme source for headless runs and tests.
///
/// Clones share state, so a kept clone can flip the preference after the
/// original has been handed to a manager.
#[derive(Debug, Clone)]
pub struct StaticColorScheme {
    state: Rc<RefCell<StaticState>>,
}

impl StaticColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(StaticState {
                prefers_dark,
                supported: true,
                sender: None,
                watch_calls: 0,
                unwatch_calls: 0,
            })),
        }
    }

    /// Host without any color-scheme signal: always light, never reports changes
    pub fn unsupported() -> Self {
        let source = Self::new(false);
        source.state.borrow_mut().supported = false;
        source
    }

    /// Change the preference, reporting it to the active watch if it differs
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let mut state = self.state.borrow_mut();
        if state.prefers_dark == prefers_dark {
            return;
        }
        state.prefers_dark = prefers_dark;
        if let Some(sender) = &state.sender {
            let _ = sender.send(prefers_dark);
        }
    }

    pub fn is_watching(&self) -> bool {
        self.state.borrow().sender.is_some()
    }

    pub fn watch_calls(&self) -> usize {
        self.state.borrow().watch_calls
    }

    pub fn unwatch_calls(&self) -> usize {
        self.state.borrow().unwatch_calls
    }
}

impl ColorSchemeSource for StaticColorScheme {
    fn prefers_dark(&self) -> bool {
        let state = self.state.borrow();
        state.supported && state.prefers_dark
    }

    fn supports_color_scheme(&self) -> bool {
        self.state.borrow().supported
    }

    fn watch(&mut self) -> Option<Receiver<bool>> {
        let mut state = self.state.borrow_mut();
        state.watch_calls += 1;
        if !state.supported {
            return None;
        }
        let (tx, rx) = crossbeam_channel::unbounded();
        state.sender = Some(tx);
        Some(rx)
    }

    fn unwatch(&mut self) {
        let mut state = self.state.borrow_mut();
        state.unwatch_calls += 1;
        state.sender = None;
    }
}
