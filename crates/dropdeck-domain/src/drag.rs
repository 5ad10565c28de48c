//! Drag-and-drop state transfer.
//!
//! `DragTransfer` carries a project's identity from a drag source to a
//! drop target without coupling the two. The payload is captured once at
//! drag start; while the drag is in flight only its type marker is
//! observable, and the value becomes readable only at the drop itself.
//! Targets arm themselves by inspecting the marker during hover; an
//! unarmed target can never receive a drop.

use crate::project::{ProjectId, ProjectStatus};

/// Media-type marker on a transfer payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    PlainText,
    UriList,
}

impl TransferKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferKind::PlainText => "text/plain",
            TransferKind::UriList => "text/uri-list",
        }
    }
}

/// Effect the source allows. Only `Move` drops are honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Move,
    Copy,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TransferPayload {
    kind: TransferKind,
    effect: DropEffect,
    value: String,
}

/// Each list is a drop target; the target it represents is the status a
/// dropped project is moved to, so targets are identified by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
    /// A target matched the payload marker and is armed for the drop.
    Over(ProjectStatus),
}

#[derive(Debug, Default)]
pub struct DragTransfer {
    state: DragState,
    payload: Option<TransferPayload>,
}

impl DragTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging a project: exactly one payload, the id as plain
    /// text, with a move effect.
    pub fn start(&mut self, id: ProjectId) {
        self.start_payload(TransferKind::PlainText, DropEffect::Move, id.to_string());
    }

    /// Begin a drag with an arbitrary payload, e.g. something dragged in
    /// from outside the board.
    pub fn start_payload(&mut self, kind: TransferKind, effect: DropEffect, value: String) {
        tracing::debug!(kind = kind.as_str(), "drag started");
        self.payload = Some(TransferPayload {
            kind,
            effect,
            value,
        });
        self.state = DragState::Dragging;
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// The payload's type marker, observable while a drag is in flight.
    /// The value itself stays sealed until the drop.
    pub fn payload_kind(&self) -> Option<TransferKind> {
        if self.is_dragging() {
            self.payload.as_ref().map(|p| p.kind)
        } else {
            None
        }
    }

    /// Hover over a candidate target. The target arms itself iff the
    /// marker matches what it accepts and the source allows a move;
    /// copy- and link-style payloads are rejected. Returns whether the
    /// drop is now enabled.
    pub fn drag_over(&mut self, target: ProjectStatus, accepted: TransferKind) -> bool {
        if !self.is_dragging() {
            return false;
        }
        let armed = self
            .payload
            .as_ref()
            .is_some_and(|p| p.kind == accepted && p.effect == DropEffect::Move);
        if armed {
            self.state = DragState::Over(target);
        }
        armed
    }

    /// Leave a candidate target without dropping. The drag stays in
    /// flight; nothing is mutated.
    pub fn drag_leave(&mut self) {
        if matches!(self.state, DragState::Over(_)) {
            self.state = DragState::Dragging;
        }
    }

    /// The target currently armed for a drop, for droppable styling.
    pub fn armed_target(&self) -> Option<ProjectStatus> {
        match self.state {
            DragState::Over(target) => Some(target),
            _ => None,
        }
    }

    /// Drop on a target. Succeeds only for the target that is armed; the
    /// payload value is unsealed here and yields the move the caller
    /// feeds to the store. The transfer returns to idle.
    pub fn drop_on(&mut self, target: ProjectStatus) -> Option<(ProjectId, ProjectStatus)> {
        if self.state != DragState::Over(target) {
            return None;
        }
        self.state = DragState::Idle;
        let payload = self.payload.take()?;
        let id = ProjectId::parse_str(&payload.value).ok()?;
        tracing::debug!(%id, "dropped on {}", target.label());
        Some((id, target))
    }

    /// Source-side cleanup at drag end, whatever the outcome. The store
    /// is only ever mutated by a successful drop, so there is nothing to
    /// roll back.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
        self.payload = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_starts_idle() {
        let transfer = DragTransfer::new();
        assert_eq!(transfer.state(), DragState::Idle);
        assert!(!transfer.is_dragging());
        assert!(transfer.payload_kind().is_none());
    }

    #[test]
    fn test_full_drag_cycle_yields_move_once() {
        let mut transfer = DragTransfer::new();
        let id = Uuid::new_v4();

        transfer.start(id);
        assert!(transfer.is_dragging());
        assert_eq!(transfer.payload_kind(), Some(TransferKind::PlainText));

        assert!(transfer.drag_over(ProjectStatus::Finished, TransferKind::PlainText));
        assert_eq!(transfer.armed_target(), Some(ProjectStatus::Finished));

        let dropped = transfer.drop_on(ProjectStatus::Finished);
        assert_eq!(dropped, Some((id, ProjectStatus::Finished)));
        assert_eq!(transfer.state(), DragState::Idle);

        // The payload is spent; a second drop yields nothing.
        assert!(transfer.drop_on(ProjectStatus::Finished).is_none());
    }

    #[test]
    fn test_drop_without_hover_is_rejected() {
        let mut transfer = DragTransfer::new();
        transfer.start(Uuid::new_v4());
        assert!(transfer.drop_on(ProjectStatus::Finished).is_none());
        // Drag is still in flight after the failed drop attempt.
        assert!(transfer.is_dragging());
    }

    #[test]
    fn test_drop_on_unarmed_target_is_rejected() {
        let mut transfer = DragTransfer::new();
        transfer.start(Uuid::new_v4());
        transfer.drag_over(ProjectStatus::Finished, TransferKind::PlainText);
        assert!(transfer.drop_on(ProjectStatus::Active).is_none());
    }

    #[test]
    fn test_wrong_marker_never_arms_target() {
        let mut transfer = DragTransfer::new();
        transfer.start_payload(
            TransferKind::UriList,
            DropEffect::Move,
            "https://example.com".to_string(),
        );

        assert!(!transfer.drag_over(ProjectStatus::Finished, TransferKind::PlainText));
        assert!(transfer.armed_target().is_none());
        assert!(transfer.drop_on(ProjectStatus::Finished).is_none());
    }

    #[test]
    fn test_copy_effect_is_rejected() {
        let mut transfer = DragTransfer::new();
        let id = Uuid::new_v4();
        transfer.start_payload(TransferKind::PlainText, DropEffect::Copy, id.to_string());

        assert!(!transfer.drag_over(ProjectStatus::Finished, TransferKind::PlainText));
        assert!(transfer.drop_on(ProjectStatus::Finished).is_none());
    }

    #[test]
    fn test_leave_disarms_target() {
        let mut transfer = DragTransfer::new();
        transfer.start(Uuid::new_v4());
        transfer.drag_over(ProjectStatus::Finished, TransferKind::PlainText);
        transfer.drag_leave();

        assert_eq!(transfer.state(), DragState::Dragging);
        assert!(transfer.drop_on(ProjectStatus::Finished).is_none());
    }

    #[test]
    fn test_leave_while_merely_dragging_is_noop() {
        let mut transfer = DragTransfer::new();
        transfer.start(Uuid::new_v4());
        transfer.drag_leave();
        assert_eq!(transfer.state(), DragState::Dragging);
    }

    #[test]
    fn test_cancel_clears_payload() {
        let mut transfer = DragTransfer::new();
        transfer.start(Uuid::new_v4());
        transfer.drag_over(ProjectStatus::Finished, TransferKind::PlainText);
        transfer.cancel();

        assert_eq!(transfer.state(), DragState::Idle);
        assert!(transfer.payload_kind().is_none());
        assert!(transfer.drop_on(ProjectStatus::Finished).is_none());
    }

    #[test]
    fn test_rearming_after_leave() {
        let mut transfer = DragTransfer::new();
        let id = Uuid::new_v4();
        transfer.start(id);
        transfer.drag_over(ProjectStatus::Finished, TransferKind::PlainText);
        transfer.drag_leave();
        transfer.drag_over(ProjectStatus::Active, TransferKind::PlainText);

        assert_eq!(
            transfer.drop_on(ProjectStatus::Active),
            Some((id, ProjectStatus::Active))
        );
    }

    #[test]
    fn test_marker_strings() {
        assert_eq!(TransferKind::PlainText.as_str(), "text/plain");
        assert_eq!(TransferKind::UriList.as_str(), "text/uri-list");
    }
}
