//! Application-level operations

use crate::component::Bound;
use crate::error::Result;

/// Application-level operations, release 22 schema.
pub trait ApplicationV22: Bound {
    /// Starts the application. `units` selects the database units for a
    /// new model (see
    /// [`ModelV22::initialize_new_model`](super::ModelV22::initialize_new_model));
    /// `file_name` is an optional model file to open on startup, blank to
    /// start without one.
    ///
    /// Returns zero if the application starts; nonzero otherwise.
    fn start(&self, units: i32, visible: bool, file_name: &str) -> Result<i32> {
        self.component().invoke_int(
            "ApplicationStart",
            &[units.into(), visible.into(), file_name.into()],
        )
    }

    /// [`start`](Self::start) with the host's documented defaults: kip-in
    /// units, visible, no file.
    fn start_default(&self) -> Result<i32> {
        self.start(3, true, "")
    }

    /// Closes the application, saving the current model first when
    /// `save` is true.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn exit(&self, save: bool) -> Result<i32> {
        self.component().invoke_int("ApplicationExit", &[save.into()])
    }

    /// Returns true if the application window is visible. A pure accessor:
    /// no status code.
    fn is_visible(&self) -> Result<bool> {
        self.component().invoke_bool("Visible", &[])
    }

    /// Hides the application window.
    ///
    /// Returns zero on success; nonzero if the window is already hidden.
    fn hide(&self) -> Result<i32> {
        self.component().invoke_int("Hide", &[])
    }

    /// Shows the application window.
    ///
    /// Returns zero on success; nonzero if the window is already visible.
    fn unhide(&self) -> Result<i32> {
        self.component().invoke_int("Unhide", &[])
    }
}
