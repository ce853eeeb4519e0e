use std::fmt;

use crate::error::LoadErrorKind;
use crate::model::GeometryModel;

type ModelHook = Box<dyn FnMut(&GeometryModel)>;
type ErrorHook = Box<dyn FnMut(LoadErrorKind)>;

/// Optional notification callbacks, invoked synchronously by the editor.
///
/// ```
/// use cropframe_core::editor::Hooks;
///
/// let hooks = Hooks::new()
///     .on_load(|model| println!("fitted at zoom {:.2}", model.zoom))
///     .on_error(|kind| eprintln!("load failed: {kind}"));
/// # drop(hooks);
/// ```
#[derive(Default)]
pub struct Hooks {
    on_load: Option<ModelHook>,
    on_change: Option<ModelHook>,
    on_zoom_change: Option<ModelHook>,
    on_position_change: Option<ModelHook>,
    on_image_size_change: Option<ModelHook>,
    on_remove: Option<ModelHook>,
    on_error: Option<ErrorHook>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// After the first fit and render of a newly loaded image.
    pub fn on_load(mut self, f: impl FnMut(&GeometryModel) + 'static) -> Self {
        self.on_load = Some(Box::new(f));
        self
    }

    /// After every render.
    pub fn on_change(mut self, f: impl FnMut(&GeometryModel) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// After a zoom-driven render.
    pub fn on_zoom_change(mut self, f: impl FnMut(&GeometryModel) + 'static) -> Self {
        self.on_zoom_change = Some(Box::new(f));
        self
    }

    /// When the pointer is released at the end of a drag.
    pub fn on_position_change(mut self, f: impl FnMut(&GeometryModel) + 'static) -> Self {
        self.on_position_change = Some(Box::new(f));
        self
    }

    /// After a zoom recomputes the displayed size.
    pub fn on_image_size_change(mut self, f: impl FnMut(&GeometryModel) + 'static) -> Self {
        self.on_image_size_change = Some(Box::new(f));
        self
    }

    /// After the image is removed.
    pub fn on_remove(mut self, f: impl FnMut(&GeometryModel) + 'static) -> Self {
        self.on_remove = Some(Box::new(f));
        self
    }

    /// On every transition into an error state.
    pub fn on_error(mut self, f: impl FnMut(LoadErrorKind) + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub(crate) fn loaded(&mut self, model: &GeometryModel) {
        fire(&mut self.on_load, model);
    }

    pub(crate) fn changed(&mut self, model: &GeometryModel) {
        fire(&mut self.on_change, model);
    }

    pub(crate) fn zoom_changed(&mut self, model: &GeometryModel) {
        fire(&mut self.on_zoom_change, model);
    }

    pub(crate) fn position_changed(&mut self, model: &GeometryModel) {
        fire(&mut self.on_position_change, model);
    }

    pub(crate) fn image_size_changed(&mut self, model: &GeometryModel) {
        fire(&mut self.on_image_size_change, model);
    }

    pub(crate) fn removed(&mut self, model: &GeometryModel) {
        fire(&mut self.on_remove, model);
    }

    pub(crate) fn errored(&mut self, kind: LoadErrorKind) {
        if let Some(f) = self.on_error.as_mut() {
            f(kind);
        }
    }
}

fn fire(hook: &mut Option<ModelHook>, model: &GeometryModel) {
    if let Some(f) = hook.as_mut() {
        f(model);
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_load", &self.on_load.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_zoom_change", &self.on_zoom_change.is_some())
            .field("on_position_change", &self.on_position_change.is_some())
            .field("on_image_size_change", &self.on_image_size_change.is_some())
            .field("on_remove", &self.on_remove.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
