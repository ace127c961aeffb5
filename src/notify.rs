// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Toast notifications.
//!
//! A fixed overlay in the top-right corner stacks short status messages.
//! Each toast stays for [`TOAST_DWELL`], fades out, and is removed
//! [`TOAST_FADE`] later. Showing a toast never fails and never panics.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

/// Time a toast stays fully visible.
pub const TOAST_DWELL: Duration = Duration::from_millis(3_500);

/// Time between the start of the fade and removal.
pub const TOAST_FADE: Duration = Duration::from_millis(220);

/// Inline style of the overlay container.
pub const CONTAINER_CSS: &str = "position:fixed;top:16px;right:16px;z-index:9999;\
display:flex;flex-direction:column;gap:8px";

const TOAST_BASE_CSS: &str = "padding:10px 12px;border-radius:6px;\
box-shadow:0 6px 20px rgba(0,0,0,0.15);color:#0b1220;font-size:13px";

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }

    /// Unknown names get info styling.
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "warning" => ToastKind::Warning,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    pub fn style(self) -> ToastStyle {
        match self {
            ToastKind::Info => ToastStyle {
                background: "#f1f5f9",
                border_color: "#334155",
            },
            ToastKind::Success => ToastStyle {
                background: "#dcfce7",
                border_color: "#16a34a",
            },
            ToastKind::Warning => ToastStyle {
                background: "#fef3c7",
                border_color: "#f59e0b",
            },
            ToastKind::Error => ToastStyle {
                background: "#fee2e2",
                border_color: "#dc2626",
            },
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    pub background: &'static str,
    pub border_color: &'static str,
}

/// One message in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// Set once the dwell time is over.
    pub fading: bool,
}

impl Toast {
    pub fn style(&self) -> ToastStyle {
        self.kind.style()
    }

    /// Inline CSS for the toast element.
    pub fn css(&self) -> String {
        let style = self.style();
        let mut css = format!(
            "{};border-left:4px solid {};background:{}",
            TOAST_BASE_CSS, style.border_color, style.background
        );
        if self.fading {
            css.push_str(";transition:opacity 200ms ease;opacity:0");
        }
        css
    }
}

/// Receives each toast as it is shown, e.g. to draw it.
pub trait ToastSink: Send + Sync {
    fn show(&self, toast: &Toast);
}

#[derive(Default)]
struct Overlay {
    toasts: Mutex<Vec<Toast>>,
    next_id: AtomicU64,
}

impl Overlay {
    fn mark_fading(&self, id: u64) {
        if let Ok(mut toasts) = self.toasts.lock() {
            if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                toast.fading = true;
            }
        }
    }

    fn remove(&self, id: u64) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.retain(|t| t.id != id);
        }
    }
}

/// Shows toasts. Clones share the same overlay.
#[derive(Clone, Default)]
pub struct Notifier {
    overlay: Arc<OnceLock<Overlay>>,
    sink: Option<Arc<dyn ToastSink>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: Arc<dyn ToastSink>) -> Self {
        Self {
            overlay: Arc::default(),
            sink: Some(sink),
        }
    }

    /// Show `message`. Never fails; any internal failure is dropped.
    pub fn notify(&self, message: &str, kind: ToastKind) {
        if catch_unwind(AssertUnwindSafe(|| self.show(message, kind))).is_err() {
            tracing::debug!("Toast display failed");
        }
    }

    pub fn info(&self, message: &str) {
        self.notify(message, ToastKind::Info);
    }

    pub fn success(&self, message: &str) {
        self.notify(message, ToastKind::Success);
    }

    pub fn warning(&self, message: &str) {
        self.notify(message, ToastKind::Warning);
    }

    pub fn error(&self, message: &str) {
        self.notify(message, ToastKind::Error);
    }

    /// Toasts currently in the overlay, oldest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.overlay
            .get()
            .and_then(|overlay| overlay.toasts.lock().ok().map(|t| t.clone()))
            .unwrap_or_default()
    }

    /// Whether the overlay has been created yet.
    pub fn has_container(&self) -> bool {
        self.overlay.get().is_some()
    }

    /// Inline style of the overlay container, once it exists.
    pub fn container_css(&self) -> Option<&'static str> {
        self.overlay.get().map(|_| CONTAINER_CSS)
    }

    fn show(&self, message: &str, kind: ToastKind) {
        let overlay = self.overlay.get_or_init(Overlay::default);
        let toast = Toast {
            id: overlay.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.to_string(),
            kind,
            fading: false,
        };

        match overlay.toasts.lock() {
            Ok(mut toasts) => toasts.push(toast.clone()),
            Err(_) => return,
        }
        tracing::debug!(kind = %kind, text = message, "Toast shown");
        self.schedule_dismiss(toast.id);

        if let Some(sink) = &self.sink {
            sink.show(&toast);
        }
    }

    fn schedule_dismiss(&self, id: u64) {
        let overlay = Arc::clone(&self.overlay);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(TOAST_DWELL).await;
                    if let Some(o) = overlay.get() {
                        o.mark_fading(id);
                    }
                    tokio::time::sleep(TOAST_FADE).await;
                    if let Some(o) = overlay.get() {
                        o.remove(id);
                    }
                });
            }
            Err(_) => {
                let spawned = std::thread::Builder::new()
                    .name("toast-dismiss".to_string())
                    .spawn(move || {
                        std::thread::sleep(TOAST_DWELL);
                        if let Some(o) = overlay.get() {
                            o.mark_fading(id);
                        }
                        std::thread::sleep(TOAST_FADE);
                        if let Some(o) = overlay.get() {
                            o.remove(id);
                        }
                    });
                if let Err(e) = spawned {
                    tracing::debug!(error = %e, "Could not schedule toast removal");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_is_info() {
        assert_eq!(ToastKind::parse_lossy("ERROR"), ToastKind::Error);
        assert_eq!(ToastKind::parse_lossy("fatal"), ToastKind::Info);
        assert_eq!(ToastKind::default(), ToastKind::Info);
    }

    #[test]
    fn css_carries_kind_colors() {
        let toast = Toast {
            id: 0,
            message: "saved".to_string(),
            kind: ToastKind::Success,
            fading: false,
        };
        let css = toast.css();
        assert!(css.contains("background:#dcfce7"));
        assert!(css.contains("border-left:4px solid #16a34a"));
        assert!(!css.contains("opacity:0"));

        let faded = Toast {
            fading: true,
            ..toast
        };
        assert!(faded.css().ends_with("opacity:0"));
    }

    #[test]
    fn works_without_async_runtime() {
        let notifier = Notifier::new();
        assert!(!notifier.has_container());
        assert_eq!(notifier.container_css(), None);
        notifier.warning("offline");
        assert!(notifier.has_container());
        let css = notifier.container_css().unwrap();
        assert!(css.starts_with("position:fixed;top:16px;right:16px"));
        assert!(css.contains("flex-direction:column"));
        assert_eq!(notifier.visible().len(), 1);
    }
}
