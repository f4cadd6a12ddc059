//! Load pattern definitions

use crate::component::Bound;
use crate::error::Result;
use crate::slot::{DoubleSlot, IntSlot, TextArraySlot, TextSlot};

/// Load pattern operations, release 22 schema.
pub trait LoadPatternsV22: Bound {
    /// Adds a new load pattern.
    ///
    /// `load_type` is the host's load pattern type code:
    ///
    /// * 1 = Dead
    /// * 2 = Superimposed dead
    /// * 3 = Live
    /// * 4 = Reducible live
    /// * 5 = Quake
    /// * 6 = Wind
    /// * 7 = Snow
    /// * 8 = Other
    /// * 11 = Roof live
    /// * 12 = Notional
    ///
    /// If `add_analysis_case` is true, a linear static analysis case with
    /// the same name is created alongside the pattern.
    ///
    /// Returns zero if the pattern is added; nonzero otherwise. The host
    /// rejects a name already used by an existing load pattern.
    fn add(
        &self,
        name: &str,
        load_type: i32,
        self_wt_multiplier: f64,
        add_analysis_case: bool,
    ) -> Result<i32> {
        self.component().invoke_int(
            "Add",
            &[
                name.into(),
                load_type.into(),
                self_wt_multiplier.into(),
                add_analysis_case.into(),
            ],
        )
    }

    /// [`add`](Self::add) with the host's documented defaults: no self
    /// weight (multiplier 0) and a companion analysis case.
    fn add_default(&self, name: &str, load_type: i32) -> Result<i32> {
        self.add(name, load_type, 0.0, true)
    }

    /// Applies a new name to an existing load pattern.
    ///
    /// Returns zero if the rename succeeds; nonzero otherwise.
    fn change_name(&self, name: &str, new_name: &str) -> Result<i32> {
        self.component()
            .invoke_int("ChangeName", &[name.into(), new_name.into()])
    }

    /// Returns the number of defined load patterns.
    fn count(&self) -> Result<i32> {
        self.component().invoke_int("Count", &[])
    }

    /// Deletes the specified load pattern.
    ///
    /// Returns zero on success; nonzero if the pattern does not exist or
    /// is the only defined load pattern.
    fn delete(&self, name: &str) -> Result<i32> {
        self.component().invoke_int("Delete", &[name.into()])
    }

    /// Retrieves the load pattern type code (see [`add`](Self::add)).
    ///
    /// Returns zero if the type is retrieved; nonzero otherwise.
    fn get_load_type(&self, name: &str, load_type: &IntSlot) -> Result<i32> {
        self.component()
            .invoke_int("GetLoadType", &[name.into(), load_type.into()])
    }

    /// Assigns a load pattern type code (see [`add`](Self::add)).
    ///
    /// Returns zero on success; nonzero otherwise.
    fn set_load_type(&self, name: &str, load_type: i32) -> Result<i32> {
        self.component()
            .invoke_int("SetLoadType", &[name.into(), load_type.into()])
    }

    /// Retrieves the self weight multiplier for a load pattern.
    ///
    /// Returns zero if the multiplier is retrieved; nonzero otherwise.
    fn get_self_wt_multiplier(&self, name: &str, multiplier: &DoubleSlot) -> Result<i32> {
        self.component()
            .invoke_int("GetSelfWtMultiplier", &[name.into(), multiplier.into()])
    }

    /// Assigns the self weight multiplier for a load pattern.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn set_self_wt_multiplier(&self, name: &str, multiplier: f64) -> Result<i32> {
        self.component()
            .invoke_int("SetSelfWtMultiplier", &[name.into(), multiplier.into()])
    }

    /// Retrieves the names of all defined load patterns.
    ///
    /// The host writes the pattern count into `count` and the names, in
    /// definition order, into `names`.
    ///
    /// Returns zero if the names are retrieved; nonzero otherwise. An
    /// empty model yields a zero count and an empty list, not an error.
    fn get_name_list(&self, count: &IntSlot, names: &TextArraySlot) -> Result<i32> {
        self.component()
            .invoke_int("GetNameList", &[count.into(), names.into()])
    }
}

/// Load pattern operations added by the release 23 schema.
///
/// Everything from [`LoadPatternsV22`] is inherited unchanged.
pub trait LoadPatternsV23: LoadPatternsV22 {
    /// Adds a new load pattern, with release 23's trailing
    /// notional-pattern flag.
    ///
    /// This is the extended form of [`add`](LoadPatternsV22::add),
    /// published by the host under its own operation name; the release 22
    /// form remains available and unchanged.
    fn add_1(
        &self,
        name: &str,
        load_type: i32,
        self_wt_multiplier: f64,
        add_analysis_case: bool,
        notional: bool,
    ) -> Result<i32> {
        self.component().invoke_int(
            "Add_1",
            &[
                name.into(),
                load_type.into(),
                self_wt_multiplier.into(),
                add_analysis_case.into(),
                notional.into(),
            ],
        )
    }

    /// Retrieves the code name used for auto seismic parameters in
    /// Quake-type load patterns. `code_name` receives either the code
    /// label or blank when no auto seismic load is specified.
    ///
    /// Returns zero if the code is retrieved; nonzero otherwise, including
    /// when the pattern is not a Quake-type pattern.
    fn get_auto_seismic_code(&self, name: &str, code_name: &TextSlot) -> Result<i32> {
        self.component()
            .invoke_int("GetAutoSeismicCode", &[name.into(), code_name.into()])
    }
}
