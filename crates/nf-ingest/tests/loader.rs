//! Integration tests for the record-set loaders.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use nf_ingest::error::IngestError;
use nf_ingest::{load_dependencies, load_inputs, load_schema};
use nf_model::DependencyKind;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn loads_tables_and_dependencies() {
    let dir = TempDir::new().unwrap();
    let tables = write_file(
        &dir,
        "tables.csv",
        "Table Name,Attributes,Primary Key,Multi-Valued Attributes\n\
         Employee,\"EmpID, Name, Skill\",EmpID,Skill\n\
         Enrollment,\"StudentID, CourseID, StudentName\",\"StudentID, CourseID\",\n",
    );
    let deps = write_file(
        &dir,
        "dependencies.csv",
        "Table Name,LHS (Determinants),RHS (Dependents),FD Type\n\
         Enrollment,StudentID,StudentName,\n\
         Employee,EmpID,Skill,Multivalued dependencies\n",
    );

    let (schema, index) = load_inputs(&tables, &deps).expect("load inputs");

    assert_eq!(schema.len(), 2);
    let employee = schema.get("Employee").expect("Employee loaded");
    assert_eq!(employee.attributes, vec!["EmpID", "Name", "Skill"]);
    assert_eq!(employee.primary_key, vec!["EmpID"]);
    assert_eq!(employee.multivalued, vec!["Skill"]);

    let declared: Vec<_> = index.iter().collect();
    assert_eq!(declared.len(), 2);
    assert_eq!(declared[0].table, "Enrollment");
    assert_eq!(declared[0].kind, DependencyKind::Functional);
    assert_eq!(declared[1].kind, DependencyKind::Multivalued);
}

#[test]
fn headers_tolerate_bom_and_casing() {
    let dir = TempDir::new().unwrap();
    let tables = write_file(
        &dir,
        "tables.csv",
        "\u{feff}table name,ATTRIBUTES,primary key\nOrder,\"OrderID, Total\",OrderID\n",
    );

    let schema = load_schema(&tables).expect("load schema");
    assert_eq!(schema.get("Order").unwrap().primary_key, vec!["OrderID"]);
}

#[test]
fn empty_attribute_list_is_malformed() {
    let dir = TempDir::new().unwrap();
    let tables = write_file(
        &dir,
        "tables.csv",
        "Table Name,Attributes,Primary Key\nOrder,\" , \",OrderID\n",
    );

    let error = load_schema(&tables).unwrap_err();
    match error {
        IngestError::MalformedRow { row, field } => {
            assert_eq!(row, 1);
            assert_eq!(field, "Attributes");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn missing_required_column_is_reported() {
    let dir = TempDir::new().unwrap();
    let deps = write_file(
        &dir,
        "dependencies.csv",
        "Table Name,RHS (Dependents)\nOrder,Total\n",
    );

    let error = load_dependencies(&deps).unwrap_err();
    match error {
        IngestError::MissingColumn { column, .. } => assert_eq!(column, "LHS (Determinants)"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn primary_key_outside_attributes_is_rejected() {
    let dir = TempDir::new().unwrap();
    let tables = write_file(
        &dir,
        "tables.csv",
        "Table Name,Attributes,Primary Key\nOrder,\"OrderID, Total\",\"OrderID, CustID\"\n",
    );

    let error = load_schema(&tables).unwrap_err();
    assert!(matches!(error, IngestError::InvalidTable { row: 1, .. }));
}

#[test]
fn missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");
    let error = load_schema(&missing).unwrap_err();
    assert!(matches!(error, IngestError::Io { .. }));
}
