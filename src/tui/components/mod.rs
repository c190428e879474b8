//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Product name, endpoint and service status
//! - `SubmitButton`: Submit control with loading spinner
//! - `ErrorBanner`: Current error message
//! - `ResultPanel`: Translation plus keyword chips
//! - `Footer`: Usage hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: Text area with cursor, scrolling and character counter
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props (fields), never by reaching
//! into `App` themselves:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! ResultPanel::new(&app.translation, &app.keywords).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! result_panel.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status line)
//! ├── input_box/        (Text area with counter)
//! ├── submit_button.rs  (Submit control)
//! ├── error_banner.rs   (Error block)
//! ├── result_panel.rs   (Translation + keyword chips)
//! └── footer.rs         (Hints)
//! ```

mod error_banner;
mod footer;
pub mod input_box;
mod result_panel;
mod submit_button;
mod title_bar;

pub use error_banner::ErrorBanner;
pub use footer::Footer;
pub use input_box::{InputBox, InputEvent};
pub use result_panel::ResultPanel;
pub use submit_button::SubmitButton;
pub use title_bar::TitleBar;
