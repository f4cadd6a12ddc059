//! Slot behavior driven through the full binding stack

use std::sync::Arc;

use girder::schema::{AnalyzeV22, LoadPatternsV22, ModelV22};
use girder::sim::SimulatedInstance;
use girder::*;

fn attach() -> (Arc<SimulatedInstance>, v22::Application) {
    let sim = Arc::new(SimulatedInstance::new("Stratus"));
    let app = v22::Application::attach(sim.clone(), "Stratus").unwrap();
    (sim, app)
}

#[test]
fn test_scalar_slots_receive_callee_writes() {
    let (_sim, app) = attach();
    let version = TextSlot::empty();
    let number = DoubleSlot::empty();

    assert_eq!(app.model.get_version(&version, &number).unwrap(), 0);
    assert_eq!(version.get(), "22.2.0");
    assert_eq!(number.get(), 22.2);
}

#[test]
fn test_discard_sentinel_does_not_change_outcome() {
    let (_sim, app) = attach();

    // the same call, observed and unobserved
    let observed =
        app.model.get_version(&TextSlot::empty(), &DoubleSlot::empty());
    let unobserved =
        app.model.get_version(&TextSlot::discard(), &DoubleSlot::discard());

    assert_eq!(observed.unwrap(), 0);
    assert_eq!(unobserved.unwrap(), 0);
}

#[test]
fn test_discard_sentinel_keeps_seed() {
    let (_sim, app) = attach();
    let version = TextSlot::discard();
    app.model.get_version(&version, &DoubleSlot::discard()).unwrap();
    assert_eq!(version.get(), "");
}

#[test]
fn test_array_slot_reads_within_reported_count() {
    let (_sim, app) = attach();
    let patterns = &app.model.load_patterns;
    patterns.add_default("DEAD", 1).unwrap();
    patterns.add_default("LIVE", 3).unwrap();
    patterns.add_default("WIND", 6).unwrap();

    let count = IntSlot::empty();
    let names = TextArraySlot::empty();
    assert_eq!(patterns.get_name_list(&count, &names).unwrap(), 0);

    assert_eq!(count.get(), 3);
    assert_eq!(names.count(), 3);
    assert_eq!(names.get(0), Some("DEAD".to_owned()));
    assert_eq!(names.get(2), Some("WIND".to_owned()));
    // at or past the reported count there is nothing to read
    assert_eq!(names.get(3), None);
}

#[test]
fn test_seeded_array_slot_round_trips() {
    let (_sim, app) = attach();
    let analyze = &app.model.analyze;

    // suppress the rotational degrees of freedom
    let dof = BoolArraySlot::seeded(&[true, true, true, false, false, false]);
    assert_eq!(analyze.set_active_dof(&dof).unwrap(), 0);

    let echoed = BoolArraySlot::empty();
    assert_eq!(analyze.get_active_dof(&echoed).unwrap(), 0);
    assert_eq!(
        echoed.to_vec(),
        vec![true, true, true, false, false, false]
    );
}

#[test]
fn test_wrong_length_array_is_a_status_not_an_error() {
    let (_sim, app) = attach();
    let dof = BoolArraySlot::seeded(&[true, false]);
    // the host rejects it; the boundary itself is fine
    assert_ne!(app.model.analyze.set_active_dof(&dof).unwrap(), 0);
}
