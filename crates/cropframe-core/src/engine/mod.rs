pub mod bounds;
pub mod fit;
pub mod pan;
pub mod zoom;

pub use bounds::{center, clamp_position};
pub use fit::{check_min_size, fit, normalize_to_bounds, Fit};
pub use pan::{apply_pan, DragSession, PanOutcome};
pub use zoom::apply_zoom;
