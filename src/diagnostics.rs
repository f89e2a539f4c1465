//! Reporting for content that a container refused.
//!
//! Rejected content is dropped rather than failing the build, so that one
//! misplaced element does not stop the rest of a document from being
//! assembled. The [Diagnostics] sink a [Document](crate::Document) was created
//! with is told about every rejection.

use crate::content::ContentKind;
use log::warn;
use std::cell::RefCell;
use std::fmt;

/// Why a container refused a piece of content
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Containers cannot hold containers of their own level or above
    NestedContainer,
    /// The container does not know how to lay this kind of content out
    Unsupported,
}

/// A refused [`add`](crate::Chapter::add)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// The refusing container, e.g. `"subchapter 2.1"`
    pub container: String,
    pub kind: ContentKind,
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            RejectReason::NestedContainer => {
                write!(f, "cannot add a {} to {}", self.kind, self.container)
            }
            RejectReason::Unsupported => {
                write!(f, "{} does not support {}", self.container, self.kind)
            }
        }
    }
}

/// Receives diagnostics for a single document build
pub trait Diagnostics: fmt::Debug {
    fn content_rejected(&self, rejection: &Rejection);
}

/// Forwards diagnostics to the [log] facade
#[derive(Debug, Default, Copy, Clone)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn content_rejected(&self, rejection: &Rejection) {
        warn!("{rejection}");
    }
}

/// Keeps every rejection so it can be inspected once the document is built
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    rejections: RefCell<Vec<Rejection>>,
}

impl RecordingDiagnostics {
    pub fn new() -> RecordingDiagnostics {
        RecordingDiagnostics::default()
    }

    pub fn rejections(&self) -> Vec<Rejection> {
        self.rejections.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.rejections.borrow().is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn content_rejected(&self, rejection: &Rejection) {
        self.rejections.borrow_mut().push(rejection.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_rejections() {
        let nested = Rejection {
            container: "subchapter 1.2".to_string(),
            kind: ContentKind::Chapter,
            reason: RejectReason::NestedContainer,
        };
        assert_eq!(nested.to_string(), "cannot add a chapter to subchapter 1.2");

        let unsupported = Rejection {
            reason: RejectReason::Unsupported,
            kind: ContentKind::Custom,
            ..nested
        };
        assert_eq!(
            unsupported.to_string(),
            "subchapter 1.2 does not support custom content"
        );
    }

    #[test]
    fn records_in_order() {
        let sink = RecordingDiagnostics::new();
        assert!(sink.is_empty());
        for kind in [ContentKind::Chapter, ContentKind::Custom] {
            sink.content_rejected(&Rejection {
                container: "chapter 1".to_string(),
                kind,
                reason: RejectReason::Unsupported,
            });
        }
        let kinds: Vec<_> = sink.rejections().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ContentKind::Chapter, ContentKind::Custom]);
    }
}
