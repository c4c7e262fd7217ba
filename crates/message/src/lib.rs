#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/message/src/lib.rs
//!
//! # Overview
//!
//! `message` defines the vocabulary shared across the codelog workspace: the
//! ordered [`Severity`] scale, typed [`Value`] arguments, parsed
//! [`FormatTemplate`]s, and the immutable [`MessageTemplate`] that a logger
//! registers under a unique code.
//!
//! # Design
//!
//! Templates are parsed once, when they are created, into literal runs and
//! placeholders. Rendering resolves placeholders against [`FormatArgs`] and
//! either produces the whole message or a [`FormatError`]; partial output is
//! never returned.
//!
//! # Examples
//!
//! ```
//! use message::{FormatArgs, MessageTemplate, Severity};
//!
//! let template = MessageTemplate::new(
//!     "TEST-006",
//!     "Named arguments.",
//!     Severity::Critical,
//!     0,
//!     "value {value1} is larger than {value2}",
//! )?;
//! let args = FormatArgs::new().with_named("value1", 42).with_named("value2", 24);
//! let body = template.render(&args)?;
//!
//! assert_eq!(
//!     template.line(&body, None),
//!     "CRITICAL: value 42 is larger than 24 (TEST-006)"
//! );
//! # Ok::<(), message::FormatError>(())
//! ```

mod error;
mod format;
mod severity;
mod template;
mod value;

pub use error::FormatError;
pub use format::FormatTemplate;
pub use severity::{ParseSeverityError, Severity};
pub use template::MessageTemplate;
pub use value::{FormatArgs, Value};
