//! Internal domain modules for the DailyLog core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod document;
pub mod entry;
pub mod error;
pub mod expansion;
pub mod fingerprint;
pub mod settings;
pub mod shortcut;
pub mod storage;
pub mod store;
pub mod transfer;

#[doc(inline)]
pub use document::{FsLogStore, LogDocument, LogStore};
#[doc(inline)]
pub use entry::{append_entry, format_entry, validate_date_format};
#[doc(inline)]
pub use error::{DailylogError, Result};
#[doc(inline)]
pub use expansion::{expand, Expansion};
#[doc(inline)]
pub use fingerprint::{fingerprint, SaveGate};
#[doc(inline)]
pub use settings::{load_settings, save_settings, AppSettings};
#[doc(inline)]
pub use shortcut::{Shortcut, ShortcutKind};
#[doc(inline)]
pub use storage::Storage;
#[doc(inline)]
pub use store::{BulkAddReport, ShortcutStore};
#[doc(inline)]
pub use transfer::{export_shortcuts, import_shortcuts, ImportReport};
