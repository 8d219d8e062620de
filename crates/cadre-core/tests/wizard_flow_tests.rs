mod common;

use std::fs;

use cadre_core::{
    ExportDocument, FileSink, JsonEncoder, SessionBuilder, StepField, TaskField, WizardError,
    WizardStep,
    params::{AddStep, CreatePersona, EditStep, SetObjective, UpdateTask},
};
use common::session_with_catalog;
use tempfile::TempDir;

#[test]
#[allow(clippy::too_many_lines)]
fn test_complete_wizard_workflow() {
    let mut session = SessionBuilder::new()
        .build()
        .expect("Failed to create session");

    // Step 1: objective and personas
    session.set_objective(&SetObjective {
        name: Some("12 CFR 614.4165 review".to_string()),
        description: Some("Identify what changed since 2023".to_string()),
    });
    let found = session.search_personas("regulat");
    assert!(found.iter().any(|p| p.name == "Law Librarian"));

    session.select_persona(1).expect("Failed to select");
    session.select_persona(2).expect("Failed to select");
    let reviewer = session
        .create_persona(&CreatePersona {
            name: "Reviewer".to_string(),
            description: "Checks the analysis".to_string(),
        })
        .expect("Failed to create persona");
    assert_eq!(reviewer.id, 4);
    assert_eq!(session.selection(), &[1, 2, 4]);

    // Step 2: tasks
    session.advance_to_step2().expect("Failed to advance");
    for (id, task, results) in [
        (1, "Retrieve both versions", "Both texts on file"),
        (2, "Diff the versions", "Change summary"),
        (4, "Review the summary", "Sign-off"),
    ] {
        assert!(session.update_task_field(&UpdateTask {
            persona_id: id,
            field: TaskField::Task,
            value: task.to_string(),
        }));
        assert!(session.update_task_field(&UpdateTask {
            persona_id: id,
            field: TaskField::ExpectedResults,
            value: results.to_string(),
        }));
    }

    // Step 3: workplan
    let workplan = session
        .generate_workplan()
        .expect("Failed to generate")
        .clone();
    assert_eq!(session.current_step(), WizardStep::Review);
    assert_eq!(workplan.persona_plans.len(), 3);
    assert_eq!(workplan.persona_plans[0].steps[4].action, "Validate results: Both texts on file");
    assert_eq!(workplan.persona_plans[1].steps[4].action, "Prepare findings: Change summary");
    assert_eq!(workplan.persona_plans[2].steps.len(), 3);
    assert_eq!(workplan.persona_plans[2].steps[2].action, "Achieve: Sign-off");

    session
        .edit_generated_step(&EditStep {
            plan_index: 2,
            step_index: 0,
            field: StepField::Duration,
            value: "30 minutes".to_string(),
        })
        .expect("Failed to edit");
    let added = session
        .add_generated_step(&AddStep { plan_index: 2 })
        .expect("Failed to add")
        .clone();
    assert_eq!(added.step_number, 4);

    // Export to a file sink and read it back
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out = temp_dir.path().join("export.json");
    let document = session
        .export(&JsonEncoder, &mut FileSink::new(&out))
        .expect("Failed to export");

    let text = fs::read_to_string(&out).expect("Failed to read export");
    let decoded = ExportDocument::from_json(&text).expect("Failed to decode export");
    assert_eq!(decoded, document);
    assert_eq!(decoded.objective_name, "12 CFR 614.4165 review");
    assert_eq!(decoded.personas[2].name, "Reviewer");
    let reviewer_steps = decoded.personas[2].workplan.as_ref().expect("joined plan");
    assert_eq!(reviewer_steps.len(), 4);
    assert_eq!(reviewer_steps[0].duration_label, "30 minutes");
}

#[test]
fn test_export_json_uses_camel_case_keys() {
    let mut session = SessionBuilder::new().build().expect("build");
    session.set_objective(&SetObjective {
        name: Some("Objective".to_string()),
        description: None,
    });
    session.select_persona(3).expect("select");

    let text = serde_json::to_value(session.assemble_export()).expect("serialize");
    assert_eq!(text["objectiveName"], "Objective");
    assert_eq!(text["objectiveDescription"], "");
    assert_eq!(text["personas"][0]["expectedResults"], "");
    assert!(text["personas"][0].get("workplan").is_none());
}

#[test]
fn test_catalog_file_supplies_personas_and_templates() {
    let json = r#"{
        "personas": [
            { "id": 5, "name": "Auditor", "description": "Checks the books" },
            { "id": 9, "name": "Law Librarian", "description": "Custom librarian" }
        ],
        "templates": [{
            "persona": "Auditor",
            "label": "audit",
            "steps": [
                { "slot": { "fixed": "Pull ledgers" }, "duration": "2 hours" },
                { "slot": "task", "duration": "4 hours" },
                { "slot": { "results": "Report: " }, "duration": "1 hour" }
            ]
        }]
    }"#;
    let (_temp_dir, _path, mut session) = session_with_catalog(json);

    assert_eq!(session.catalog().len(), 2);
    session.set_objective(&SetObjective {
        name: Some("Year-end".to_string()),
        description: None,
    });
    session.select_persona(5).expect("select");
    session.select_persona(9).expect("select");
    session.advance_to_step2().expect("advance");
    session.update_task_field(&UpdateTask {
        persona_id: 5,
        field: TaskField::ExpectedResults,
        value: "clean".to_string(),
    });

    let workplan = session.generate_workplan().expect("generate");
    let auditor = &workplan.persona_plans[0].steps;
    assert_eq!(auditor.len(), 3);
    assert_eq!(auditor[0].action, "Pull ledgers");
    assert_eq!(auditor[2].action, "Report: clean");
    // Built-in template still keyed on the name
    assert_eq!(workplan.persona_plans[1].steps.len(), 5);

    let created = session
        .create_persona(&CreatePersona {
            name: "Intern".to_string(),
            description: "Helps out".to_string(),
        })
        .expect("create");
    assert_eq!(created.id, 10);
}

#[test]
fn test_invalid_catalog_file_is_rejected() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, r#"{ "personas": [{ "id": 1, "name": "", "description": "" }] }"#)
        .expect("write");

    let err = SessionBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .unwrap_err();
    assert!(matches!(err, WizardError::InvalidInput { .. }));

    fs::write(&path, "{ personas").expect("write");
    let err = SessionBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .unwrap_err();
    assert!(matches!(err, WizardError::Serialization { .. }));
}
