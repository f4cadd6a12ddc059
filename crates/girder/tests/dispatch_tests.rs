//! Dispatch adapter behavior: narrowing, write-back, boundary failures

use std::sync::Arc;

use girder::*;

/// A transport that resolves everything and answers every call with a
/// fixed result, optionally overwriting every by-ref argument first.
struct RiggedHost {
    result: Variant,
    scalar_write: Option<Variant>,
}

impl RiggedHost {
    fn returning(result: Variant) -> Arc<Self> {
        Arc::new(Self {
            result,
            scalar_write: None,
        })
    }

    fn writing_back(result: Variant, write: Variant) -> Arc<Self> {
        Arc::new(Self {
            result,
            scalar_write: Some(write),
        })
    }
}

impl Automation for RiggedHost {
    fn resolve(&self, _path: &str) -> Result<TargetId> {
        Ok(TargetId::new(7))
    }

    fn call(&self, _target: TargetId, _operation: &str, args: &mut [WireArg]) -> Result<Variant> {
        if let Some(junk) = &self.scalar_write {
            for arg in args.iter_mut() {
                if arg.by_ref {
                    arg.value = WireValue::Scalar(junk.clone());
                }
            }
        }
        Ok(self.result.clone())
    }
}

/// A transport whose instance is not running.
struct Offline;

impl Automation for Offline {
    fn resolve(&self, path: &str) -> Result<TargetId> {
        Err(BindingError::Unreachable {
            path: path.to_owned(),
            reason: "instance is not running".to_owned(),
        })
    }

    fn call(&self, _target: TargetId, operation: &str, _args: &mut [WireArg]) -> Result<Variant> {
        Err(BindingError::Unreachable {
            path: operation.to_owned(),
            reason: "instance is not running".to_owned(),
        })
    }
}

fn bind(host: Arc<dyn Automation>) -> ComponentBinding {
    ComponentBinding::bind(host, "Stratus", "Model").unwrap()
}

#[test]
fn test_invoke_returns_the_raw_result() {
    let binding = bind(RiggedHost::returning(Variant::text("tower.mdl")));
    assert_eq!(binding.path(), "Stratus.Model");
    let raw = binding.invoke("GetModelFilename", &[]).unwrap();
    assert_eq!(raw, Variant::text("tower.mdl"));
}

#[test]
fn test_sibling_binding_shares_the_transport() {
    let binding = bind(RiggedHost::returning(Variant::Int(0)));
    let sibling =
        ComponentBinding::bind(binding.automation(), "Stratus", "LoadPatterns").unwrap();
    assert_eq!(sibling.path(), "Stratus.LoadPatterns");
    assert_eq!(sibling.invoke_int("Count", &[]).unwrap(), 0);
}

#[test]
fn test_narrowing_failure_names_the_operation() {
    let binding = bind(RiggedHost::returning(Variant::text("not a status")));
    let err = binding.invoke_int("SetModelIsLocked", &[true.into()]).unwrap_err();
    match err {
        BindingError::Coercion {
            operation,
            expected,
            ..
        } => {
            assert_eq!(operation, "SetModelIsLocked");
            assert_eq!(expected, "integer");
        }
        other => panic!("expected a coercion failure, got {other:?}"),
    }
}

#[test]
fn test_each_narrowing_wrapper_rejects_the_wrong_shape() {
    let binding = bind(RiggedHost::returning(Variant::Int(0)));
    assert!(binding.invoke_bool("Op", &[]).is_err());
    assert!(binding.invoke_text("Op", &[]).is_err());
    // int narrows, and int widens to double
    assert_eq!(binding.invoke_int("Op", &[]).unwrap(), 0);
    assert_eq!(binding.invoke_double("Op", &[]).unwrap(), 0.0);
}

#[test]
fn test_write_back_shape_mismatch_is_a_coercion_failure() {
    let binding = bind(RiggedHost::writing_back(
        Variant::Int(0),
        Variant::text("junk"),
    ));
    let slot = IntSlot::empty();
    let err = binding
        .invoke_int("GetLoadType", &[Arg::from("DEAD"), Arg::from(&slot)])
        .unwrap_err();
    assert!(matches!(err, BindingError::Coercion { .. }));
}

#[test]
fn test_discarded_write_back_is_never_checked() {
    let binding = bind(RiggedHost::writing_back(
        Variant::Int(0),
        Variant::text("junk"),
    ));
    // same junk write-back, but nobody is observing the output
    let slot = IntSlot::discard();
    let status = binding
        .invoke_int("GetLoadType", &[Arg::from("DEAD"), Arg::from(&slot)])
        .unwrap();
    assert_eq!(status, 0);
}

#[test]
fn test_binding_against_a_dead_instance_fails_at_construction() {
    let err = ComponentBinding::bind(Arc::new(Offline), "Stratus", "Model").unwrap_err();
    match err {
        BindingError::Unreachable { path, .. } => assert_eq!(path, "Stratus.Model"),
        other => panic!("expected unreachable, got {other:?}"),
    }
}

#[test]
fn test_boundary_failure_mid_call_propagates() {
    // resolve succeeds, every call fails: an instance that died after
    // the binding was constructed
    struct DiesAfterResolve;
    impl Automation for DiesAfterResolve {
        fn resolve(&self, _path: &str) -> Result<TargetId> {
            Ok(TargetId::new(1))
        }
        fn call(
            &self,
            _target: TargetId,
            _operation: &str,
            _args: &mut [WireArg],
        ) -> Result<Variant> {
            Err(BindingError::Unreachable {
                path: "Stratus.Model".to_owned(),
                reason: "remote call failed".to_owned(),
            })
        }
    }

    let binding = bind(Arc::new(DiesAfterResolve));
    assert!(matches!(
        binding.invoke_int("Count", &[]),
        Err(BindingError::Unreachable { .. })
    ));
}
