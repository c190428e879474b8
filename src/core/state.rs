//! # Application State
//!
//! The single state container for a translation session. Presentation state
//! (cursor, button hit area) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── translator: Arc<dyn Translator>  // remote service client
//! ├── endpoint: String                 // shown in the title bar
//! ├── input: String                    // text being edited
//! ├── translation: String              // "" until a success arrives
//! ├── keywords: Vec<String>            // raw list, blanks included
//! ├── is_loading: bool                 // request in flight
//! ├── error_message: String            // "" = no error
//! ├── status_message: String           // title bar text (health probe)
//! ├── request_seq: u64                 // last issued request id
//! └── in_flight: Option<u64>           // id of the pending request
//! ```
//!
//! State changes only happen through the controller (`controller.rs`),
//! either directly or via `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::translation::Translator;

pub struct App {
    pub translator: Arc<dyn Translator>,
    pub endpoint: String,
    pub input: String,
    pub translation: String,
    pub keywords: Vec<String>,
    pub is_loading: bool,
    pub error_message: String,
    pub status_message: String,
    pub(crate) request_seq: u64,
    pub(crate) in_flight: Option<u64>,
}

impl App {
    pub fn new(translator: Arc<dyn Translator>, endpoint: String) -> Self {
        Self {
            translator,
            endpoint,
            input: String::new(),
            translation: String::new(),
            keywords: Vec::new(),
            is_loading: false,
            error_message: String::new(),
            status_message: String::new(),
            request_seq: 0,
            in_flight: None,
        }
    }

    /// Id of the request currently awaited, if any.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }
}
