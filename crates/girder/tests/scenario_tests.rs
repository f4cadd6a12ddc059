//! End-to-end scenarios against the simulated host

use std::sync::Arc;

use pretty_assertions::assert_eq;

use girder::schema::{
    AnalyzeV22, ApplicationV22, GroupsV22, LoadPatternsV22, MaterialsV22, ModelV22,
};
use girder::sim::SimulatedInstance;
use girder::*;

fn attach() -> (Arc<SimulatedInstance>, v23::Application) {
    let sim = Arc::new(SimulatedInstance::new("Stratus"));
    let app = v23::Application::attach(sim.clone(), "Stratus").unwrap();
    (sim, app)
}

#[test]
fn test_duplicate_add_is_rejected_and_count_unchanged() {
    let (_sim, app) = attach();
    let patterns = &app.model.load_patterns;

    assert_eq!(patterns.add_default("DEAD", 1).unwrap(), 0);
    assert_eq!(patterns.count().unwrap(), 1);

    // same name again: rejected as a status, never thrown
    assert_ne!(patterns.add_default("DEAD", 1).unwrap(), 0);
    assert_eq!(patterns.count().unwrap(), 1);
}

#[test]
fn test_name_list_of_empty_namespace_is_zero_not_an_error() {
    let (_sim, app) = attach();
    let count = IntSlot::empty();
    let names = TextArraySlot::empty();

    assert_eq!(app.model.groups.get_name_list(&count, &names).unwrap(), 0);
    assert_eq!(count.get(), 0);
    assert_eq!(names.count(), 0);
}

#[test]
fn test_material_set_then_get_returns_every_field_unchanged() {
    let (_sim, app) = attach();
    let materials = &app.model.materials;

    assert_eq!(
        materials
            .set_material("C30/37", 2, 0x00FF00, "cast in place", "f2a9")
            .unwrap(),
        0
    );

    let material_type = IntSlot::empty();
    let color = IntSlot::empty();
    let notes = TextSlot::empty();
    let guid = TextSlot::empty();
    assert_eq!(
        materials
            .get_material("C30/37", &material_type, &color, &notes, &guid)
            .unwrap(),
        0
    );
    assert_eq!(material_type.get(), 2);
    assert_eq!(color.get(), 0x00FF00);
    assert_eq!(notes.get(), "cast in place");
    assert_eq!(guid.get(), "f2a9");
}

#[test]
fn test_isotropic_set_is_idempotent() {
    let (_sim, app) = attach();
    let materials = &app.model.materials;
    materials.set_material_default("S355", 1).unwrap();

    let read_back = || {
        let e = DoubleSlot::empty();
        let u = DoubleSlot::empty();
        let a = DoubleSlot::empty();
        let g = DoubleSlot::empty();
        assert_eq!(materials.get_isotropic("S355", &e, &u, &a, &g).unwrap(), 0);
        (e.get(), u.get(), a.get(), g.get())
    };

    assert_eq!(
        materials
            .set_isotropic_default("S355", 210e6, 0.3, 1.2e-5)
            .unwrap(),
        0
    );
    let once = read_back();

    assert_eq!(
        materials
            .set_isotropic_default("S355", 210e6, 0.3, 1.2e-5)
            .unwrap(),
        0
    );
    let twice = read_back();

    assert_eq!(once, twice);
    // the host derives the shear modulus from E and nu
    assert_eq!(once.3, 210e6 / (2.0 * 1.3));
}

#[test]
fn test_isotropic_on_missing_material_is_a_status() {
    let (_sim, app) = attach();
    assert_ne!(
        app.model
            .materials
            .set_isotropic_default("UNDEFINED", 1.0, 0.3, 0.0)
            .unwrap(),
        0
    );
}

#[test]
fn test_group_set_then_get_round_trips() {
    let (_sim, app) = attach();
    let groups = &app.model.groups;

    assert_eq!(groups.set_group("Bracing", 0x0000FF).unwrap(), 0);
    let color = IntSlot::empty();
    assert_eq!(groups.get_group("Bracing", &color).unwrap(), 0);
    assert_eq!(color.get(), 0x0000FF);

    // redefining is an overwrite, not a rejection
    assert_eq!(groups.set_group("Bracing", -1).unwrap(), 0);
    assert_eq!(groups.count().unwrap(), 1);
}

#[test]
fn test_group_assignments_report_parallel_arrays() {
    let (sim, app) = attach();
    let groups = &app.model.groups;
    groups.set_group_default("Columns").unwrap();
    assert!(sim.seed_group_assignment("Columns", 2, "C1"));
    assert!(sim.seed_group_assignment("Columns", 2, "C2"));
    assert!(sim.seed_group_assignment("Columns", 1, "N7"));

    let count = IntSlot::empty();
    let object_types = IntArraySlot::empty();
    let object_names = TextArraySlot::empty();
    assert_eq!(
        groups
            .get_assignments("Columns", &count, &object_types, &object_names)
            .unwrap(),
        0
    );
    assert_eq!(count.get(), 3);
    assert_eq!(object_types.to_vec(), vec![2, 2, 1]);
    assert_eq!(
        object_names.to_vec(),
        vec!["C1".to_owned(), "C2".to_owned(), "N7".to_owned()]
    );
}

#[test]
fn test_run_case_flags_follow_pattern_definition() {
    let (_sim, app) = attach();
    let patterns = &app.model.load_patterns;
    let analyze = &app.model.analyze;

    // companion analysis cases come from pattern definition
    patterns.add_default("DEAD", 1).unwrap();
    patterns.add_default("LIVE", 3).unwrap();
    // no companion case for this one
    patterns.add("WIND", 6, 0.0, false).unwrap();

    assert_eq!(analyze.set_run_case_flag("LIVE", false, false).unwrap(), 0);
    // unknown case: rejected as a status
    assert_ne!(analyze.set_run_case_flag("WIND", true, false).unwrap(), 0);

    let count = IntSlot::empty();
    let names = TextArraySlot::empty();
    let flags = BoolArraySlot::empty();
    assert_eq!(analyze.get_run_case_flag(&count, &names, &flags).unwrap(), 0);
    assert_eq!(count.get(), 2);
    assert_eq!(names.to_vec(), vec!["DEAD".to_owned(), "LIVE".to_owned()]);
    assert_eq!(flags.to_vec(), vec![true, false]);
}

#[test]
fn test_solver_option_round_trip_and_rejection() {
    let (_sim, app) = attach();
    let analyze = &app.model.analyze;

    assert_eq!(analyze.set_solver_option(1, false, "DEAD").unwrap(), 0);

    let solver_type = IntSlot::empty();
    let force_32_bit = BoolSlot::empty();
    let stiff_case = TextSlot::empty();
    assert_eq!(
        analyze
            .get_solver_option(&solver_type, &force_32_bit, &stiff_case)
            .unwrap(),
        0
    );
    assert_eq!(solver_type.get(), 1);
    assert!(!force_32_bit.get());
    assert_eq!(stiff_case.get(), "DEAD");

    // outside both documented ranges: rejected as a status
    assert_ne!(analyze.set_solver_option_default(9, false).unwrap(), 0);
}

#[test]
fn test_analysis_flow_is_plain_blocking_statuses() {
    let (_sim, app) = attach();
    let analyze = &app.model.analyze;

    assert_eq!(analyze.create_analysis_model().unwrap(), 0);
    assert_eq!(analyze.run_analysis().unwrap(), 0);
    assert_eq!(analyze.delete_results_all().unwrap(), 0);
}

#[test]
fn test_delete_keeps_the_last_pattern() {
    let (_sim, app) = attach();
    let patterns = &app.model.load_patterns;
    patterns.add_default("DEAD", 1).unwrap();
    patterns.add_default("LIVE", 3).unwrap();

    assert_eq!(patterns.delete("LIVE").unwrap(), 0);
    // the host refuses to delete the only remaining pattern
    assert_ne!(patterns.delete("DEAD").unwrap(), 0);
    assert_eq!(patterns.count().unwrap(), 1);
}

#[test]
fn test_rename_moves_the_entity() {
    let (_sim, app) = attach();
    let patterns = &app.model.load_patterns;
    patterns.add_default("DL", 1).unwrap();
    patterns.add_default("LL", 3).unwrap();

    assert_eq!(patterns.change_name("DL", "DEAD").unwrap(), 0);
    // old name gone, new name present
    assert_ne!(patterns.set_load_type("DL", 1).unwrap(), 0);
    assert_eq!(patterns.set_load_type("DEAD", 1).unwrap(), 0);
    // renaming onto an existing name is rejected
    assert_ne!(patterns.change_name("DEAD", "LL").unwrap(), 0);
}

#[test]
fn test_model_accessors_return_values_directly() {
    let (_sim, app) = attach();
    let model = &app.model;

    assert_eq!(model.initialize_new_model(6).unwrap(), 0);
    assert_eq!(model.get_database_units().unwrap(), 6);
    assert_eq!(model.get_model_filename().unwrap(), "");

    assert!(!model.is_locked().unwrap());
    assert_eq!(model.set_locked(true).unwrap(), 0);
    assert!(model.is_locked().unwrap());
}

#[test]
fn test_initialize_clears_definitions() {
    let (_sim, app) = attach();
    app.model.load_patterns.add_default("DEAD", 1).unwrap();
    app.model.materials.set_material_default("S355", 1).unwrap();

    assert_eq!(app.model.initialize_new_model_default().unwrap(), 0);
    assert_eq!(app.model.load_patterns.count().unwrap(), 0);
    assert_eq!(app.model.materials.count().unwrap(), 0);
}

#[test]
fn test_application_window_statuses() {
    let (_sim, app) = attach();
    assert_eq!(app.start_default().unwrap(), 0);
    assert!(app.is_visible().unwrap());

    assert_eq!(app.hide().unwrap(), 0);
    // already hidden: rejected as a status
    assert_ne!(app.hide().unwrap(), 0);
    assert!(!app.is_visible().unwrap());

    assert_eq!(app.unhide().unwrap(), 0);
    assert_eq!(app.exit(false).unwrap(), 0);
}

#[test]
fn test_attach_from_profile() {
    let profile = InstanceProfile::from_json(
        r#"{"program":"Stratus","revision":"V23"}"#,
    )
    .unwrap();
    assert_eq!(profile.revision, Revision::V23);

    let sim = Arc::new(SimulatedInstance::new("Stratus"));
    let app = v23::Application::from_profile(sim, &profile).unwrap();
    assert_eq!(app.model.load_patterns.count().unwrap(), 0);
}

#[test]
fn test_attaching_to_an_unknown_program_is_unreachable() {
    let sim = Arc::new(SimulatedInstance::new("Stratus"));
    let err = v22::Application::attach(sim, "OtherProgram").unwrap_err();
    assert!(matches!(err, BindingError::Unreachable { .. }));
}
