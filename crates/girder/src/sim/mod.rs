//! An in-memory stand-in for a running host instance
//!
//! [`SimulatedInstance`] implements [`Automation`] against plain data
//! structures, faithful to the host's observable conventions: status
//! integers (`0` success, nonzero rejection), duplicate-name rejection,
//! name lists reported in definition order, and results written back into
//! by-ref arguments. The test suites drive the real binding stack against
//! it; consumers can do the same with their own tooling.
//!
//! Fidelity stops at observability: there is no geometry and no analysis
//! here, only the bookkeeping a caller can see through the schema.

mod ops;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dashmap::DashMap;
use indexmap::IndexMap;

use crate::error::{BindingError, Result};
use crate::transport::{Automation, TargetId, WireArg};
use crate::variant::Variant;

/// The sub-objects the simulated host publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleKind {
    Application,
    Model,
    LoadPatterns,
    Materials,
    Groups,
    Analyze,
}

impl RoleKind {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "Application" => Some(RoleKind::Application),
            "Model" => Some(RoleKind::Model),
            "LoadPatterns" => Some(RoleKind::LoadPatterns),
            "Materials" => Some(RoleKind::Materials),
            "Groups" => Some(RoleKind::Groups),
            "Analyze" => Some(RoleKind::Analyze),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AppState {
    pub running: bool,
    pub visible: bool,
}

#[derive(Debug)]
pub(crate) struct ModelState {
    pub filename: String,
    pub locked: bool,
    pub units: i32,
    pub version_label: String,
    pub version_number: f64,
    pub merge_tol: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct PatternRecord {
    pub load_type: i32,
    pub self_wt_multiplier: f64,
    pub notional: bool,
    pub auto_seismic_code: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MaterialRecord {
    pub material_type: i32,
    pub color: i32,
    pub notes: String,
    pub guid: String,
    pub isotropic: Option<(f64, f64, f64)>,
    pub weight: f64,
    pub mass: f64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct GroupRecord {
    pub color: i32,
    pub assignments: Vec<(i32, String)>,
}

#[derive(Debug)]
pub(crate) struct AnalyzeState {
    pub solver_type: i32,
    pub force_32_bit: bool,
    pub stiff_case: String,
    pub active_dof: Vec<bool>,
    pub model_built: bool,
    pub results_available: bool,
}

impl Default for AnalyzeState {
    fn default() -> Self {
        Self {
            solver_type: 0,
            force_32_bit: false,
            stiff_case: String::new(),
            active_dof: vec![true; 6],
            model_built: false,
            results_available: false,
        }
    }
}

/// An in-memory host instance.
pub struct SimulatedInstance {
    program: String,
    next_id: AtomicU64,
    targets: DashMap<String, TargetId>,
    roles: DashMap<u64, (RoleKind, String)>,
    pub(crate) app: RwLock<AppState>,
    pub(crate) model: RwLock<ModelState>,
    pub(crate) patterns: RwLock<IndexMap<String, PatternRecord>>,
    pub(crate) cases: RwLock<IndexMap<String, bool>>,
    pub(crate) materials: RwLock<IndexMap<String, MaterialRecord>>,
    pub(crate) groups: RwLock<IndexMap<String, GroupRecord>>,
    pub(crate) analyze: RwLock<AnalyzeState>,
}

impl SimulatedInstance {
    /// Create a fresh instance published under `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            next_id: AtomicU64::new(1),
            targets: DashMap::new(),
            roles: DashMap::new(),
            app: RwLock::new(AppState {
                running: false,
                visible: true,
            }),
            model: RwLock::new(ModelState {
                filename: String::new(),
                locked: false,
                units: 3,
                version_label: "22.2.0".to_owned(),
                version_number: 22.2,
                merge_tol: 0.001,
            }),
            patterns: RwLock::new(IndexMap::new()),
            cases: RwLock::new(IndexMap::new()),
            materials: RwLock::new(IndexMap::new()),
            groups: RwLock::new(IndexMap::new()),
            analyze: RwLock::new(AnalyzeState::default()),
        }
    }

    /// Override the version the instance reports through `GetVersion`.
    pub fn with_version(mut self, label: impl Into<String>, number: f64) -> Self {
        let model = self.model.get_mut().unwrap_or_else(PoisonError::into_inner);
        model.version_label = label.into();
        model.version_number = number;
        self
    }

    /// Test scaffolding: record an object assignment on a group, the way
    /// object-level operations (out of scope here) would.
    ///
    /// Returns false if the group does not exist.
    pub fn seed_group_assignment(
        &self,
        group: &str,
        object_type: i32,
        object_name: impl Into<String>,
    ) -> bool {
        let mut groups = write(&self.groups);
        match groups.get_mut(group) {
            Some(record) => {
                record.assignments.push((object_type, object_name.into()));
                true
            }
            None => false,
        }
    }
}

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl Automation for SimulatedInstance {
    fn resolve(&self, path: &str) -> Result<TargetId> {
        if let Some(existing) = self.targets.get(path) {
            return Ok(*existing);
        }
        let role = path
            .strip_prefix(self.program.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(RoleKind::from_suffix)
            .ok_or_else(|| BindingError::Unreachable {
                path: path.to_owned(),
                reason: "no such automation object".to_owned(),
            })?;
        let id = TargetId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.targets.insert(path.to_owned(), id);
        self.roles.insert(id.raw(), (role, path.to_owned()));
        Ok(id)
    }

    fn call(&self, target: TargetId, operation: &str, args: &mut [WireArg]) -> Result<Variant> {
        let (role, path) = self
            .roles
            .get(&target.raw())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| BindingError::Unreachable {
                path: format!("target#{}", target.raw()),
                reason: "stale target handle".to_owned(),
            })?;
        match role {
            RoleKind::Application => self.call_application(&path, operation, args),
            RoleKind::Model => self.call_model(&path, operation, args),
            RoleKind::LoadPatterns => self.call_load_patterns(&path, operation, args),
            RoleKind::Materials => self.call_materials(&path, operation, args),
            RoleKind::Groups => self.call_groups(&path, operation, args),
            RoleKind::Analyze => self.call_analyze(&path, operation, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_roles() {
        let sim = SimulatedInstance::new("Stratus");
        let a = sim.resolve("Stratus.LoadPatterns").unwrap();
        let b = sim.resolve("Stratus.LoadPatterns").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, sim.resolve("Stratus.Materials").unwrap());
    }

    #[test]
    fn test_resolve_unknown_path_is_unreachable() {
        let sim = SimulatedInstance::new("Stratus");
        let err = sim.resolve("Stratus.Nonsense").unwrap_err();
        assert!(matches!(err, BindingError::Unreachable { .. }));
        let err = sim.resolve("OtherProgram.Model").unwrap_err();
        assert!(matches!(err, BindingError::Unreachable { .. }));
    }

    #[test]
    fn test_stale_target_is_unreachable() {
        let sim = SimulatedInstance::new("Stratus");
        let err = sim
            .call(TargetId::new(999), "Count", &mut [])
            .unwrap_err();
        assert!(matches!(err, BindingError::Unreachable { .. }));
    }
}
