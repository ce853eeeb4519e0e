pub mod compositor;
pub mod export;

pub use compositor::Compositor;
pub use export::{encode, to_data_url, ExportFormat};
