//! Host integration for the capture surface.
//!
//! The pad itself never manages visibility or talks to the user; this layer
//! carries the dialog protocol: an open/close signal, user-facing notices,
//! the exported snapshot callback, and the close request issued after a
//! successful save. The host decides how notices are rendered and whether a
//! close request is honored.

use std::sync::Arc;

use crate::error::Error;
use crate::input::{ContainerBounds, InputDisposition, PointerEvent};
use crate::pad::SignaturePad;
use crate::surface::Snapshot;

type NoticeHandler = Arc<dyn Fn(&Notice) + Send + Sync>;
type ExportHandler = Arc<dyn Fn(&Snapshot) + Send + Sync>;
type CloseHandler = Arc<dyn Fn() + Send + Sync>;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A user-facing message emitted by session actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Result of a save action.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    /// The drawing was exported; a close request was issued.
    Saved(Snapshot),
    /// Validation or encoding failed; the surface is open and unchanged.
    Rejected,
}

/// A pad wired to its host dialog.
pub struct PadSession {
    pad: SignaturePad,
    open: bool,
    on_notice: Option<NoticeHandler>,
    on_export: Option<ExportHandler>,
    on_close_request: Option<CloseHandler>,
}

impl PadSession {
    pub fn new(pad: SignaturePad) -> Self {
        Self {
            pad,
            open: false,
            on_notice: None,
            on_export: None,
            on_close_request: None,
        }
    }

    /// Open signal from the host: runs the pad's activation protocol.
    pub fn open(&mut self, bounds: ContainerBounds) {
        self.pad.activate(bounds);
        self.open = true;
    }

    /// Close signal from the host: the session becomes inert. The next
    /// `open` re-runs the activation protocol, so nothing needs clearing
    /// here.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Container resize notification; ignored while closed.
    pub fn resized(&mut self, bounds: ContainerBounds) {
        if self.open {
            self.pad.handle_resize(bounds);
        }
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) -> InputDisposition {
        if !self.open {
            return InputDisposition::Pass;
        }
        self.pad.pointer_down(event)
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> InputDisposition {
        if !self.open {
            return InputDisposition::Pass;
        }
        self.pad.pointer_move(event)
    }

    pub fn pointer_up(&mut self) -> InputDisposition {
        if !self.open {
            return InputDisposition::Pass;
        }
        self.pad.pointer_up()
    }

    pub fn pointer_leave(&mut self) -> InputDisposition {
        if !self.open {
            return InputDisposition::Pass;
        }
        self.pad.pointer_leave()
    }

    /// User clear action: wipe the drawing and tell the user.
    pub fn clear(&mut self) {
        self.pad.clear();
        self.notify(NoticeLevel::Info, "Signature cleared");
    }

    /// User save action.
    ///
    /// On success the snapshot goes to the export callback, a success notice
    /// is emitted and the host is asked to close. On failure an error notice
    /// is emitted and the surface stays open and unchanged.
    pub fn save(&mut self) -> SaveOutcome {
        match self.pad.export() {
            Ok(snapshot) => {
                self.notify(NoticeLevel::Success, "Signature saved");
                if let Some(cb) = &self.on_export {
                    cb(&snapshot);
                }
                if let Some(cb) = &self.on_close_request {
                    cb();
                }
                SaveOutcome::Saved(snapshot)
            }
            Err(Error::EmptySignature) => {
                self.notify(NoticeLevel::Error, "Draw a signature before saving");
                SaveOutcome::Rejected
            }
            Err(e) => {
                self.notify(NoticeLevel::Error, &format!("Could not save signature: {e}"));
                SaveOutcome::Rejected
            }
        }
    }

    fn notify(&self, level: NoticeLevel, text: &str) {
        if let Some(cb) = &self.on_notice {
            cb(&Notice {
                level,
                text: text.to_string(),
            });
        }
    }

    /// Register a callback for user-facing notices.
    pub fn on_notice<F>(&mut self, cb: F)
    where
        F: Fn(&Notice) + Send + Sync + 'static,
    {
        self.on_notice = Some(Arc::new(cb));
    }

    /// Remove a previously registered notice callback if any
    pub fn clear_on_notice(&mut self) {
        self.on_notice = None;
    }

    /// Register a callback receiving the exported snapshot on save.
    pub fn on_export<F>(&mut self, cb: F)
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.on_export = Some(Arc::new(cb));
    }

    /// Remove a previously registered export callback if any
    pub fn clear_on_export(&mut self) {
        self.on_export = None;
    }

    /// Register a callback invoked when the session asks the host to close.
    pub fn on_close_request<F>(&mut self, cb: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close_request = Some(Arc::new(cb));
    }

    /// Remove a previously registered close-request callback if any
    pub fn clear_on_close_request(&mut self) {
        self.on_close_request = None;
    }

    /// The wrapped pad, for state inspection.
    pub fn pad(&self) -> &SignaturePad {
        &self.pad
    }
}
