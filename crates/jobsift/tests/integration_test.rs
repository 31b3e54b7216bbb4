//! Integration tests for jobsift.

use std::io::Write;
use tempfile::NamedTempFile;

use jobsift::{Catalog, Cell, FilterRequest, SemanticCategory, SiftError};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn jobs_csv() -> &'static str {
    "Job_Title,Company_Name,City,Skills,Salary\n\
     Senior Software Engineer,Acme Corp,Bengaluru,\"Go, Python\",2400000\n\
     Data Analyst,Globex,Pune,\"SQL, Excel\",900000\n\
     Backend Engineer,Initech,Pune,\"Java, C++\",NA\n\
     ML Engineer,Acme Corp,Hyderabad,\"Python, PyTorch\",3100000\n\
     Product Designer,Umbrella,,Figma,1200000\n"
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_csv_with_metadata() {
    let file = create_test_file(jobs_csv());
    let catalog = Catalog::load(file.path()).expect("Load failed");

    let source = catalog.source().expect("source metadata");
    assert_eq!(source.format, "csv");
    assert_eq!(source.row_count, 5);
    assert_eq!(source.column_count, 5);
    assert!(source.hash.starts_with("sha256:"));
}

#[test]
fn test_load_tsv_auto_detect() {
    let content = "title\tarea\tskills\n\
                   Engineer\tRemote\tRust\n\
                   Analyst\tPune\tSQL\n";
    let file = create_test_file(content);
    let catalog = Catalog::load(file.path()).expect("Load failed");

    assert_eq!(catalog.source().unwrap().format, "tsv");
    let bindings = catalog.bindings();
    assert_eq!(bindings.location.unwrap().name, "area");
    assert_eq!(bindings.role.unwrap().name, "title");
}

#[test]
fn test_load_missing_file() {
    let err = Catalog::load("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, SiftError::Io { .. }));
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_filter_role_case_insensitive() {
    let file = create_test_file(jobs_csv());
    let catalog = Catalog::load(file.path()).unwrap();

    let result = catalog.filter(&FilterRequest::new().with(SemanticCategory::Role, "ENGINEER"));
    assert_eq!(result.count, 3);
    assert_eq!(result.total_count, 5);
    assert_eq!(
        result.results[0]["Job_Title"],
        Cell::Text("Senior Software Engineer".to_string())
    );
}

#[test]
fn test_filter_compound() {
    let file = create_test_file(jobs_csv());
    let catalog = Catalog::load(file.path()).unwrap();

    let request = FilterRequest::new()
        .with(SemanticCategory::Company, "acme")
        .with(SemanticCategory::Skills, "pytorch, rust");
    let result = catalog.filter(&request);

    assert_eq!(result.count, 1);
    assert_eq!(result.results[0]["City"], Cell::Text("Hyderabad".to_string()));
}

#[test]
fn test_filter_missing_location_never_matches() {
    let file = create_test_file(jobs_csv());
    let catalog = Catalog::load(file.path()).unwrap();

    let result = catalog.filter(&FilterRequest::new().with(SemanticCategory::Location, "e"));
    assert!(result
        .results
        .iter()
        .all(|r| !r["City"].is_missing()));
    assert_eq!(result.count, 4);
}

#[test]
fn test_filter_result_json_shape() {
    let file = create_test_file(jobs_csv());
    let catalog = Catalog::load(file.path()).unwrap();

    let result = catalog.filter(&FilterRequest::new().with(SemanticCategory::Company, "initech"));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["count"], 1);
    assert_eq!(json["total_count"], 5);
    assert_eq!(json["results"][0]["Salary"], serde_json::Value::Null);
    assert_eq!(json["results"][0]["Skills"], "Java, C++");
}

#[test]
fn test_filter_with_repeated_header() {
    let file = create_test_file("title,company,title\nEngineer,Acme,Senior\n");
    let catalog = Catalog::load(file.path()).unwrap();

    let result = catalog.filter(&FilterRequest::new().with(SemanticCategory::Role, "engineer"));
    assert_eq!(result.count, 1);
    assert_eq!(result.results[0].len(), 3);

    let json = serde_json::to_value(catalog.info()).unwrap();
    assert_eq!(json["columns"], serde_json::json!(["title", "company", "title.1"]));
    assert_eq!(json["sample"][0]["title"], "Engineer");
    assert_eq!(json["sample"][0]["title.1"], "Senior");
}

// =============================================================================
// Data info
// =============================================================================

#[test]
fn test_info_filter_options() {
    let file = create_test_file(jobs_csv());
    let catalog = Catalog::load(file.path()).unwrap();
    let info = catalog.info();

    assert_eq!(info.rows, 5);
    assert_eq!(
        info.columns,
        vec!["Job_Title", "Company_Name", "City", "Skills", "Salary"]
    );
    assert_eq!(info.sample.len(), 3);

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(
        json["filter_options"]["locations"],
        serde_json::json!(["Bengaluru", "Hyderabad", "Pune"])
    );
    assert_eq!(
        json["filter_options"]["companies"],
        serde_json::json!(["Acme Corp", "Globex", "Initech", "Umbrella"])
    );
    assert!(json["filter_options"].get("skills").is_none());
}

#[test]
fn test_info_without_known_columns() {
    let file = create_test_file("id,salary\n1,100\n2,200\n");
    let catalog = Catalog::load(file.path()).unwrap();
    let json = serde_json::to_value(catalog.info()).unwrap();

    assert_eq!(json["filter_options"], serde_json::json!({}));
    assert_eq!(json["sample"][1]["salary"], 200);
}
