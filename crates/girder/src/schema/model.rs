//! Model-level operations

use crate::component::Bound;
use crate::error::Result;
use crate::slot::{DoubleSlot, TextSlot};

/// Model-level operations, release 22 schema.
pub trait ModelV22: Bound {
    /// Clears the model and initializes a new one in the given database
    /// units:
    ///
    /// * 1 = lb, in
    /// * 2 = lb, ft
    /// * 3 = kip, in
    /// * 4 = kip, ft
    /// * 5 = kN, mm
    /// * 6 = kN, m
    /// * 9 = N, mm
    /// * 10 = N, m
    ///
    /// Returns zero on success; nonzero otherwise.
    fn initialize_new_model(&self, units: i32) -> Result<i32> {
        self.component()
            .invoke_int("InitializeNewModel", &[units.into()])
    }

    /// [`initialize_new_model`](Self::initialize_new_model) in the host's
    /// default kip-in units.
    fn initialize_new_model_default(&self) -> Result<i32> {
        self.initialize_new_model(3)
    }

    /// Returns the file name of the current model, blank when the model
    /// has never been saved. A pure accessor: no status code.
    fn get_model_filename(&self) -> Result<String> {
        self.component().invoke_text("GetModelFilename", &[])
    }

    /// Returns true if the model is locked against edits. A pure accessor:
    /// no status code.
    fn is_locked(&self) -> Result<bool> {
        self.component().invoke_bool("GetModelIsLocked", &[])
    }

    /// Locks or unlocks the model.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn set_locked(&self, lock: bool) -> Result<i32> {
        self.component()
            .invoke_int("SetModelIsLocked", &[lock.into()])
    }

    /// Returns the database units code (see
    /// [`initialize_new_model`](Self::initialize_new_model)). A pure
    /// accessor: no status code.
    fn get_database_units(&self) -> Result<i32> {
        self.component().invoke_int("GetDatabaseUnits", &[])
    }

    /// Retrieves the host release label and numeric version.
    ///
    /// Returns zero if the version is retrieved; nonzero otherwise.
    fn get_version(&self, version: &TextSlot, version_number: &DoubleSlot) -> Result<i32> {
        self.component()
            .invoke_int("GetVersion", &[version.into(), version_number.into()])
    }
}

/// Model-level operations added by the release 23 schema.
pub trait ModelV23: ModelV22 {
    /// Sets the coordinate merge tolerance. The tolerance must be
    /// positive.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn set_merge_tolerance(&self, tolerance: f64) -> Result<i32> {
        self.component().invoke_int("SetMergeTol", &[tolerance.into()])
    }

    /// Retrieves the coordinate merge tolerance.
    ///
    /// Returns zero if the tolerance is retrieved; nonzero otherwise.
    fn get_merge_tolerance(&self, tolerance: &DoubleSlot) -> Result<i32> {
        self.component().invoke_int("GetMergeTol", &[tolerance.into()])
    }
}
