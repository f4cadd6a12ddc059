//! Analysis control

use crate::component::Bound;
use crate::error::Result;
use crate::slot::{BoolArraySlot, BoolSlot, IntSlot, TextArraySlot, TextSlot};

/// Analysis control operations, release 22 schema.
pub trait AnalyzeV22: Bound {
    /// Builds the analysis model from the current object model. Calling
    /// this is optional: [`run_analysis`](Self::run_analysis) builds it
    /// on demand if needed.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn create_analysis_model(&self) -> Result<i32> {
        self.component().invoke_int("CreateAnalysisModel", &[])
    }

    /// Runs the analysis for all flagged cases.
    ///
    /// This is an ordinary blocking call with no progress reporting: the
    /// invoking thread waits for the full duration of the analysis.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn run_analysis(&self) -> Result<i32> {
        self.component().invoke_int("RunAnalysis", &[])
    }

    /// Deletes results for the named case, or for all cases when `all` is
    /// true (in which case `name` is ignored).
    ///
    /// Returns zero on success; nonzero otherwise.
    fn delete_results(&self, name: &str, all: bool) -> Result<i32> {
        self.component()
            .invoke_int("DeleteResults", &[name.into(), all.into()])
    }

    /// [`delete_results`](Self::delete_results) for every case.
    fn delete_results_all(&self) -> Result<i32> {
        self.delete_results("", true)
    }

    /// Sets the run flag for the named analysis case, or for every case
    /// when `apply_to_all` is true.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn set_run_case_flag(&self, name: &str, run: bool, apply_to_all: bool) -> Result<i32> {
        self.component().invoke_int(
            "SetRunCaseFlag",
            &[name.into(), run.into(), apply_to_all.into()],
        )
    }

    /// Retrieves the run flags for all analysis cases: parallel arrays of
    /// case names and flags.
    ///
    /// Returns zero if the flags are retrieved; nonzero otherwise.
    fn get_run_case_flag(
        &self,
        count: &IntSlot,
        case_names: &TextArraySlot,
        run_flags: &BoolArraySlot,
    ) -> Result<i32> {
        self.component().invoke_int(
            "GetRunCaseFlag",
            &[count.into(), case_names.into(), run_flags.into()],
        )
    }

    /// Sets the active degrees of freedom for the analysis: six flags in
    /// the order UX, UY, UZ, RX, RY, RZ.
    ///
    /// Returns zero on success; nonzero otherwise, including when `dof`
    /// does not carry exactly six flags.
    fn set_active_dof(&self, dof: &BoolArraySlot) -> Result<i32> {
        self.component().invoke_int("SetActiveDOF", &[dof.into()])
    }

    /// Retrieves the active degrees of freedom (see
    /// [`set_active_dof`](Self::set_active_dof)).
    ///
    /// Returns zero if the flags are retrieved; nonzero otherwise.
    fn get_active_dof(&self, dof: &BoolArraySlot) -> Result<i32> {
        self.component().invoke_int("GetActiveDOF", &[dof.into()])
    }

    /// Sets the equation solver.
    ///
    /// The host reference documents `solver_type` as 0 = standard or
    /// 1 = advanced; the paired
    /// [`get_solver_option`](Self::get_solver_option) page documents the
    /// same field as 0, 1, or 2 = multi-threaded. Both readings are kept
    /// here verbatim; this layer forwards whatever it is given.
    ///
    /// `stiff_case` names the case whose stiffness is used as the basis,
    /// blank for none.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn set_solver_option(
        &self,
        solver_type: i32,
        force_32_bit: bool,
        stiff_case: &str,
    ) -> Result<i32> {
        self.component().invoke_int(
            "SetSolverOption",
            &[solver_type.into(), force_32_bit.into(), stiff_case.into()],
        )
    }

    /// [`set_solver_option`](Self::set_solver_option) with no stiffness
    /// basis case (the host's documented default).
    fn set_solver_option_default(&self, solver_type: i32, force_32_bit: bool) -> Result<i32> {
        self.set_solver_option(solver_type, force_32_bit, "")
    }

    /// Retrieves the equation solver settings. See
    /// [`set_solver_option`](Self::set_solver_option) for the two
    /// documented readings of `solver_type`.
    ///
    /// Returns zero if the settings are retrieved; nonzero otherwise.
    fn get_solver_option(
        &self,
        solver_type: &IntSlot,
        force_32_bit: &BoolSlot,
        stiff_case: &TextSlot,
    ) -> Result<i32> {
        self.component().invoke_int(
            "GetSolverOption",
            &[solver_type.into(), force_32_bit.into(), stiff_case.into()],
        )
    }
}
