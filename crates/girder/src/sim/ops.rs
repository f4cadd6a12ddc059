//! Operation handlers for the simulated host
//!
//! One handler per published role. Each handler speaks the host's status
//! conventions: `Variant::Int(0)` for an accepted operation, nonzero for a
//! domain-level rejection, and an `Unreachable` error only for calls no
//! live host could dispatch (unknown names, malformed argument lists).

use super::{read, write, PatternRecord, SimulatedInstance};
use crate::error::{BindingError, Result};
use crate::transport::{WireArg, WireValue};
use crate::variant::Variant;

const OK: i32 = 0;
const REJECTED: i32 = 1;

fn status(accepted: bool) -> Result<Variant> {
    Ok(Variant::Int(if accepted { OK } else { REJECTED }))
}

fn unknown(path: &str, operation: &str) -> BindingError {
    BindingError::Unreachable {
        path: path.to_owned(),
        reason: format!("unknown operation `{operation}`"),
    }
}

fn malformed(path: &str, operation: &str) -> BindingError {
    BindingError::Unreachable {
        path: path.to_owned(),
        reason: format!("`{operation}` called with a malformed argument list"),
    }
}

// ── argument readers ───────────────────────────────────────────────────

fn scalar(args: &[WireArg], index: usize) -> Option<&Variant> {
    match args.get(index)?.value {
        WireValue::Scalar(ref v) => Some(v),
        WireValue::Array(_) => None,
    }
}

fn text(args: &[WireArg], index: usize) -> Option<String> {
    scalar(args, index)?.as_text().map(str::to_owned)
}

fn int(args: &[WireArg], index: usize) -> Option<i32> {
    scalar(args, index)?.as_int()
}

fn double(args: &[WireArg], index: usize) -> Option<f64> {
    scalar(args, index)?.as_double()
}

fn boolean(args: &[WireArg], index: usize) -> Option<bool> {
    scalar(args, index)?.as_bool()
}

fn bool_array(args: &[WireArg], index: usize) -> Option<Vec<bool>> {
    match args.get(index)?.value {
        WireValue::Array(ref items) => items.iter().map(Variant::as_bool).collect(),
        WireValue::Scalar(_) => None,
    }
}

// ── argument writers (honoring the by-ref flag) ────────────────────────

fn put_scalar(args: &mut [WireArg], index: usize, value: Variant) {
    if let Some(arg) = args.get_mut(index) {
        if arg.by_ref {
            arg.value = WireValue::Scalar(value);
        }
    }
}

fn put_array(args: &mut [WireArg], index: usize, items: Vec<Variant>) {
    if let Some(arg) = args.get_mut(index) {
        if arg.by_ref {
            arg.value = WireValue::Array(items);
        }
    }
}

fn put_name_list(args: &mut [WireArg], first: usize, names: Vec<String>) {
    put_scalar(args, first, Variant::Int(names.len() as i32));
    put_array(args, first + 1, names.into_iter().map(Variant::Text).collect());
}

impl SimulatedInstance {
    pub(super) fn call_application(
        &self,
        path: &str,
        operation: &str,
        args: &mut [WireArg],
    ) -> Result<Variant> {
        match operation {
            "ApplicationStart" => {
                let units = int(args, 0).ok_or_else(|| malformed(path, operation))?;
                let visible = boolean(args, 1).ok_or_else(|| malformed(path, operation))?;
                let file_name = text(args, 2).ok_or_else(|| malformed(path, operation))?;
                {
                    let mut app = write(&self.app);
                    app.running = true;
                    app.visible = visible;
                }
                let mut model = write(&self.model);
                model.units = units;
                model.filename = file_name;
                status(true)
            }
            "ApplicationExit" => {
                let _save = boolean(args, 0).ok_or_else(|| malformed(path, operation))?;
                write(&self.app).running = false;
                status(true)
            }
            "Visible" => Ok(Variant::Bool(read(&self.app).visible)),
            "Hide" => {
                let mut app = write(&self.app);
                if app.visible {
                    app.visible = false;
                    status(true)
                } else {
                    status(false)
                }
            }
            "Unhide" => {
                let mut app = write(&self.app);
                if app.visible {
                    status(false)
                } else {
                    app.visible = true;
                    status(true)
                }
            }
            _ => Err(unknown(path, operation)),
        }
    }

    pub(super) fn call_model(
        &self,
        path: &str,
        operation: &str,
        args: &mut [WireArg],
    ) -> Result<Variant> {
        match operation {
            "InitializeNewModel" => {
                let units = int(args, 0).ok_or_else(|| malformed(path, operation))?;
                write(&self.patterns).clear();
                write(&self.cases).clear();
                write(&self.materials).clear();
                write(&self.groups).clear();
                *write(&self.analyze) = Default::default();
                let mut model = write(&self.model);
                model.units = units;
                model.filename.clear();
                model.locked = false;
                status(true)
            }
            "GetModelFilename" => Ok(Variant::Text(read(&self.model).filename.clone())),
            "GetModelIsLocked" => Ok(Variant::Bool(read(&self.model).locked)),
            "SetModelIsLocked" => {
                let lock = boolean(args, 0).ok_or_else(|| malformed(path, operation))?;
                write(&self.model).locked = lock;
                status(true)
            }
            "GetDatabaseUnits" => Ok(Variant::Int(read(&self.model).units)),
            "GetVersion" => {
                let model = read(&self.model);
                put_scalar(args, 0, Variant::Text(model.version_label.clone()));
                put_scalar(args, 1, Variant::Double(model.version_number));
                status(true)
            }
            "SetMergeTol" => {
                let tol = double(args, 0).ok_or_else(|| malformed(path, operation))?;
                if tol > 0.0 {
                    write(&self.model).merge_tol = tol;
                    status(true)
                } else {
                    status(false)
                }
            }
            "GetMergeTol" => {
                put_scalar(args, 0, Variant::Double(read(&self.model).merge_tol));
                status(true)
            }
            _ => Err(unknown(path, operation)),
        }
    }

    pub(super) fn call_load_patterns(
        &self,
        path: &str,
        operation: &str,
        args: &mut [WireArg],
    ) -> Result<Variant> {
        match operation {
            "Add" | "Add_1" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let load_type = int(args, 1).ok_or_else(|| malformed(path, operation))?;
                let self_wt = double(args, 2).ok_or_else(|| malformed(path, operation))?;
                let add_case = boolean(args, 3).ok_or_else(|| malformed(path, operation))?;
                let notional = if operation == "Add_1" {
                    boolean(args, 4).ok_or_else(|| malformed(path, operation))?
                } else {
                    false
                };
                let mut patterns = write(&self.patterns);
                if patterns.contains_key(&name) {
                    return status(false);
                }
                patterns.insert(
                    name.clone(),
                    PatternRecord {
                        load_type,
                        self_wt_multiplier: self_wt,
                        notional,
                        auto_seismic_code: String::new(),
                    },
                );
                if add_case {
                    write(&self.cases).insert(name, true);
                }
                status(true)
            }
            "ChangeName" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let new_name = text(args, 1).ok_or_else(|| malformed(path, operation))?;
                let mut patterns = write(&self.patterns);
                if !patterns.contains_key(&name) || patterns.contains_key(&new_name) {
                    return status(false);
                }
                // IndexMap has no rename; re-inserting moves the entry to
                // the end, which name-list order tolerates
                if let Some(record) = patterns.shift_remove(&name) {
                    patterns.insert(new_name, record);
                }
                status(true)
            }
            "Count" => Ok(Variant::Int(read(&self.patterns).len() as i32)),
            "Delete" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let mut patterns = write(&self.patterns);
                // the host refuses to delete the last remaining pattern
                if !patterns.contains_key(&name) || patterns.len() == 1 {
                    return status(false);
                }
                patterns.shift_remove(&name);
                status(true)
            }
            "GetLoadType" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                match read(&self.patterns).get(&name) {
                    Some(record) => {
                        put_scalar(args, 1, Variant::Int(record.load_type));
                        status(true)
                    }
                    None => status(false),
                }
            }
            "SetLoadType" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let load_type = int(args, 1).ok_or_else(|| malformed(path, operation))?;
                match write(&self.patterns).get_mut(&name) {
                    Some(record) => {
                        record.load_type = load_type;
                        status(true)
                    }
                    None => status(false),
                }
            }
            "GetSelfWtMultiplier" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                match read(&self.patterns).get(&name) {
                    Some(record) => {
                        put_scalar(args, 1, Variant::Double(record.self_wt_multiplier));
                        status(true)
                    }
                    None => status(false),
                }
            }
            "SetSelfWtMultiplier" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let multiplier = double(args, 1).ok_or_else(|| malformed(path, operation))?;
                match write(&self.patterns).get_mut(&name) {
                    Some(record) => {
                        record.self_wt_multiplier = multiplier;
                        status(true)
                    }
                    None => status(false),
                }
            }
            "GetNameList" => {
                let names: Vec<String> = read(&self.patterns).keys().cloned().collect();
                put_name_list(args, 0, names);
                status(true)
            }
            "GetAutoSeismicCode" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                match read(&self.patterns).get(&name) {
                    // quake-type patterns only
                    Some(record) if record.load_type == 5 => {
                        put_scalar(args, 1, Variant::Text(record.auto_seismic_code.clone()));
                        status(true)
                    }
                    _ => status(false),
                }
            }
            _ => Err(unknown(path, operation)),
        }
    }

    pub(super) fn call_materials(
        &self,
        path: &str,
        operation: &str,
        args: &mut [WireArg],
    ) -> Result<Variant> {
        match operation {
            "SetMaterial" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let material_type = int(args, 1).ok_or_else(|| malformed(path, operation))?;
                let color = int(args, 2).ok_or_else(|| malformed(path, operation))?;
                let notes = text(args, 3).ok_or_else(|| malformed(path, operation))?;
                let guid = text(args, 4).ok_or_else(|| malformed(path, operation))?;
                let mut materials = write(&self.materials);
                let record = materials.entry(name).or_default();
                record.material_type = material_type;
                record.color = color;
                record.notes = notes;
                record.guid = guid;
                status(true)
            }
            "GetMaterial" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                match read(&self.materials).get(&name) {
                    Some(record) => {
                        put_scalar(args, 1, Variant::Int(record.material_type));
                        put_scalar(args, 2, Variant::Int(record.color));
                        put_scalar(args, 3, Variant::Text(record.notes.clone()));
                        put_scalar(args, 4, Variant::Text(record.guid.clone()));
                        status(true)
                    }
                    None => status(false),
                }
            }
            "SetMPIsotropic" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let e = double(args, 1).ok_or_else(|| malformed(path, operation))?;
                let u = double(args, 2).ok_or_else(|| malformed(path, operation))?;
                let a = double(args, 3).ok_or_else(|| malformed(path, operation))?;
                let _temp = double(args, 4).ok_or_else(|| malformed(path, operation))?;
                match write(&self.materials).get_mut(&name) {
                    Some(record) => {
                        record.isotropic = Some((e, u, a));
                        status(true)
                    }
                    None => status(false),
                }
            }
            "GetMPIsotropic" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                match read(&self.materials).get(&name) {
                    Some(record) => match record.isotropic {
                        Some((e, u, a)) => {
                            put_scalar(args, 1, Variant::Double(e));
                            put_scalar(args, 2, Variant::Double(u));
                            put_scalar(args, 3, Variant::Double(a));
                            put_scalar(args, 4, Variant::Double(e / (2.0 * (1.0 + u))));
                            status(true)
                        }
                        None => status(false),
                    },
                    None => status(false),
                }
            }
            "SetWeightAndMass" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let option = int(args, 1).ok_or_else(|| malformed(path, operation))?;
                let value = double(args, 2).ok_or_else(|| malformed(path, operation))?;
                // unit weight of water-ish gravity constant keeps the
                // derived quantity deterministic without real unit handling
                const GRAVITY: f64 = 386.1;
                match write(&self.materials).get_mut(&name) {
                    Some(record) => match option {
                        1 => {
                            record.weight = value;
                            record.mass = value / GRAVITY;
                            status(true)
                        }
                        2 => {
                            record.mass = value;
                            record.weight = value * GRAVITY;
                            status(true)
                        }
                        _ => status(false),
                    },
                    None => status(false),
                }
            }
            "GetWeightAndMass" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                match read(&self.materials).get(&name) {
                    Some(record) => {
                        put_scalar(args, 1, Variant::Double(record.weight));
                        put_scalar(args, 2, Variant::Double(record.mass));
                        status(true)
                    }
                    None => status(false),
                }
            }
            "Count" => Ok(Variant::Int(read(&self.materials).len() as i32)),
            "ChangeName" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let new_name = text(args, 1).ok_or_else(|| malformed(path, operation))?;
                let mut materials = write(&self.materials);
                if !materials.contains_key(&name) || materials.contains_key(&new_name) {
                    return status(false);
                }
                if let Some(record) = materials.shift_remove(&name) {
                    materials.insert(new_name, record);
                }
                status(true)
            }
            "Delete" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                status(write(&self.materials).shift_remove(&name).is_some())
            }
            "GetNameList" => {
                let names: Vec<String> = read(&self.materials).keys().cloned().collect();
                put_name_list(args, 0, names);
                status(true)
            }
            _ => Err(unknown(path, operation)),
        }
    }

    pub(super) fn call_groups(
        &self,
        path: &str,
        operation: &str,
        args: &mut [WireArg],
    ) -> Result<Variant> {
        match operation {
            "SetGroup" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let color = int(args, 1).ok_or_else(|| malformed(path, operation))?;
                write(&self.groups).entry(name).or_default().color = color;
                status(true)
            }
            "GetGroup" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                match read(&self.groups).get(&name) {
                    Some(record) => {
                        put_scalar(args, 1, Variant::Int(record.color));
                        status(true)
                    }
                    None => status(false),
                }
            }
            "Count" => Ok(Variant::Int(read(&self.groups).len() as i32)),
            "Delete" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                status(write(&self.groups).shift_remove(&name).is_some())
            }
            "GetNameList" => {
                let names: Vec<String> = read(&self.groups).keys().cloned().collect();
                put_name_list(args, 0, names);
                status(true)
            }
            "GetAssignments" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                match read(&self.groups).get(&name) {
                    Some(record) => {
                        let types: Vec<Variant> = record
                            .assignments
                            .iter()
                            .map(|(object_type, _)| Variant::Int(*object_type))
                            .collect();
                        let names: Vec<Variant> = record
                            .assignments
                            .iter()
                            .map(|(_, object_name)| Variant::text(object_name.clone()))
                            .collect();
                        put_scalar(args, 1, Variant::Int(types.len() as i32));
                        put_array(args, 2, types);
                        put_array(args, 3, names);
                        status(true)
                    }
                    None => status(false),
                }
            }
            _ => Err(unknown(path, operation)),
        }
    }

    pub(super) fn call_analyze(
        &self,
        path: &str,
        operation: &str,
        args: &mut [WireArg],
    ) -> Result<Variant> {
        match operation {
            "CreateAnalysisModel" => {
                write(&self.analyze).model_built = true;
                status(true)
            }
            "RunAnalysis" => {
                let mut analyze = write(&self.analyze);
                analyze.model_built = true;
                analyze.results_available = true;
                status(true)
            }
            "DeleteResults" => {
                let _name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let _all = boolean(args, 1).ok_or_else(|| malformed(path, operation))?;
                write(&self.analyze).results_available = false;
                status(true)
            }
            "SetRunCaseFlag" => {
                let name = text(args, 0).ok_or_else(|| malformed(path, operation))?;
                let run = boolean(args, 1).ok_or_else(|| malformed(path, operation))?;
                let apply_to_all = boolean(args, 2).ok_or_else(|| malformed(path, operation))?;
                let mut cases = write(&self.cases);
                if apply_to_all {
                    for flag in cases.values_mut() {
                        *flag = run;
                    }
                    status(true)
                } else {
                    match cases.get_mut(&name) {
                        Some(flag) => {
                            *flag = run;
                            status(true)
                        }
                        None => status(false),
                    }
                }
            }
            "GetRunCaseFlag" => {
                let cases = read(&self.cases);
                let names: Vec<Variant> =
                    cases.keys().map(|name| Variant::text(name.clone())).collect();
                let flags: Vec<Variant> = cases.values().map(|run| Variant::Bool(*run)).collect();
                put_scalar(args, 0, Variant::Int(names.len() as i32));
                put_array(args, 1, names);
                put_array(args, 2, flags);
                status(true)
            }
            "SetActiveDOF" => {
                let dof = bool_array(args, 0).ok_or_else(|| malformed(path, operation))?;
                if dof.len() == 6 {
                    write(&self.analyze).active_dof = dof;
                    status(true)
                } else {
                    status(false)
                }
            }
            "GetActiveDOF" => {
                let dof: Vec<Variant> = read(&self.analyze)
                    .active_dof
                    .iter()
                    .map(|flag| Variant::Bool(*flag))
                    .collect();
                put_array(args, 0, dof);
                status(true)
            }
            "SetSolverOption" => {
                let solver_type = int(args, 0).ok_or_else(|| malformed(path, operation))?;
                let force_32_bit = boolean(args, 1).ok_or_else(|| malformed(path, operation))?;
                let stiff_case = text(args, 2).ok_or_else(|| malformed(path, operation))?;
                if !(0..=2).contains(&solver_type) {
                    return status(false);
                }
                let mut analyze = write(&self.analyze);
                analyze.solver_type = solver_type;
                analyze.force_32_bit = force_32_bit;
                analyze.stiff_case = stiff_case;
                status(true)
            }
            "GetSolverOption" => {
                let analyze = read(&self.analyze);
                put_scalar(args, 0, Variant::Int(analyze.solver_type));
                put_scalar(args, 1, Variant::Bool(analyze.force_32_bit));
                put_scalar(args, 2, Variant::Text(analyze.stiff_case.clone()));
                status(true)
            }
            _ => Err(unknown(path, operation)),
        }
    }
}
