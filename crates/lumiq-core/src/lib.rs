//! # Lumiq Core Library
//!
//! `lumiq-core` provides the behavior behind the Lumiq theme picker: ten
//! predefined themes, an orthogonal dark-mode variant, durable preferences
//! and a small controller that ties them together.
//!
//! ## Modules
//!
//! - [`catalog`] - The fixed, ordered list of themes
//! - [`storage`] - Key-value storage backends (memory, JSON file)
//! - [`preferences`] - Loading and saving the theme + dark-mode preference
//! - [`applicator`] - Presentation markers and theme change observers
//! - [`picker`] - Open/closed state machine, selection and keyboard handling
//! - [`announce`] - Assistive-technology live region
//! - [`config`] - Configuration management
//!
//! ## Example
//!
//! ```rust
//! use lumiq_core::applicator::{Applicator, MarkerBoard};
//! use lumiq_core::catalog::ThemeId;
//! use lumiq_core::config::PickerConfig;
//! use lumiq_core::picker::PickerController;
//! use lumiq_core::storage::MemoryStore;
//!
//! let board = MarkerBoard::new();
//! let mut picker = PickerController::new(
//!     PickerConfig::default(),
//!     MemoryStore::new(),
//!     Applicator::new(board.clone()),
//! );
//!
//! picker.mount();
//! picker.open();
//! picker.select(ThemeId::Ocean);
//!
//! assert_eq!(board.theme(), Some(ThemeId::Ocean));
//! assert!(!picker.is_open());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::len_without_is_empty)]

pub mod announce;
pub mod applicator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod picker;
pub mod preferences;
pub mod storage;

pub use applicator::{Applicator, MarkerBoard, ThemeChange};
pub use catalog::{ThemeId, ThemeRecord};
pub use error::{Error, Result};
pub use picker::{PickerController, PickerKey, PickerState};
pub use preferences::{PreferenceState, PreferenceStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
