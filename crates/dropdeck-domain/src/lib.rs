pub mod drag;
pub mod form;
pub mod project;
pub mod projection;
pub mod store;

pub use drag::{DragState, DragTransfer, DropEffect, TransferKind};
pub use form::{validate_draft, DraftOutcome, ProjectDraft};
pub use project::{Project, ProjectId, ProjectStatus};
pub use projection::ListProjection;
pub use store::{ProjectStore, StoreObserver};
