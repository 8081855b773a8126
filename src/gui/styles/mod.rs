pub mod theme;

pub use theme::{get_embedded_css, priority_text_class, status_badge_class, CssClasses};
