use std::path::Path;

const GENDERS: [&str; 2] = ["male", "female"];

const MEASUREMENTS: [&str; 5] = [
    "height",
    "chestCircumference",
    "waistCircumference",
    "hipCircumference",
    "insideLegLength",
];

fn main() {
    let catalog_path = Path::new("catalogs/clothing_sizes.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let tables = catalog.get("tables").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'tables' field\n\
             The catalog must have a top-level 'tables' array.\n"
        );
    });

    let tables = tables.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'tables' must be an array\n\
             Got: {tables}\n"
        );
    });

    let total_sizes = validate_tables(tables);

    if let Some(tolerances) = catalog.get("tolerances") {
        validate_tolerances(tolerances);
    }

    println!(
        "cargo:warning=Validated catalog: {} tables, {total_sizes} total sizes",
        tables.len()
    );
}

fn validate_tables(tables: &[serde_json::Value]) -> usize {
    let mut total_sizes = 0;

    for (i, table) in tables.iter().enumerate() {
        let name = table
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_table_fields(table, name, i);
        validate_rules(table, name);
        total_sizes += validate_sizes(table, name);
    }

    total_sizes
}

fn validate_table_fields(table: &serde_json::Value, name: &str, index: usize) {
    assert!(
        table.get("name").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Table at index {index} missing 'name' field\n"
    );

    let gender = table.get("gender").and_then(|v| v.as_str());
    assert!(
        gender.is_some_and(|g| GENDERS.contains(&g)),
        "\n\nCATALOG BUILD ERROR: Table '{name}' (index {index}) needs 'gender' of {GENDERS:?}\n"
    );
    assert!(
        table.get("measurementImportance").is_some_and(serde_json::Value::is_array),
        "\n\nCATALOG BUILD ERROR: Table '{name}' (index {index}) missing 'measurementImportance' array\n"
    );
    assert!(
        table.get("sizes").is_some_and(serde_json::Value::is_array),
        "\n\nCATALOG BUILD ERROR: Table '{name}' (index {index}) missing 'sizes' array\n"
    );
}

fn validate_rules(table: &serde_json::Value, name: &str) {
    if let Some(rules) = table.get("measurementImportance").and_then(|r| r.as_array()) {
        for (j, rule) in rules.iter().enumerate() {
            let measurement = rule.get("measurement").and_then(|v| v.as_str());
            assert!(
                measurement.is_some_and(|m| MEASUREMENTS.contains(&m)),
                "\n\nCATALOG BUILD ERROR: Table '{name}' rule {j} has unknown measurement\n\
                 Expected one of {MEASUREMENTS:?}\n"
            );
        }
    }
}

fn validate_sizes(table: &serde_json::Value, name: &str) -> usize {
    if let Some(sizes) = table.get("sizes").and_then(|s| s.as_array()) {
        for (j, size) in sizes.iter().enumerate() {
            validate_size(size, name, j);
        }
        sizes.len()
    } else {
        0
    }
}

fn validate_size(size: &serde_json::Value, table_name: &str, index: usize) {
    let id = size
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Table '{table_name}' size {index} missing 'id' field\n")
        });

    let Some(ranges) = size.get("ranges").and_then(|r| r.as_object()) else {
        return;
    };

    for (measurement, range) in ranges {
        assert!(
            MEASUREMENTS.contains(&measurement.as_str()),
            "\n\nCATALOG BUILD ERROR: Table '{table_name}' size '{id}' has unknown measurement '{measurement}'\n"
        );

        let min = range.get("min").and_then(serde_json::Value::as_f64);
        let max = range.get("max").and_then(serde_json::Value::as_f64);
        let (Some(min), Some(max)) = (min, max) else {
            panic!(
                "\n\nCATALOG BUILD ERROR: Table '{table_name}' size '{id}' range '{measurement}' needs numeric 'min' and 'max'\n"
            );
        };

        assert!(
            min >= 0.0 && min <= max,
            "\n\nCATALOG BUILD ERROR: Table '{table_name}' size '{id}' range '{measurement}' is [{min}, {max}]\n\
             Ranges must satisfy 0 <= min <= max.\n"
        );
    }
}

fn validate_tolerances(tolerances: &serde_json::Value) {
    let tolerances = tolerances.as_object().unwrap_or_else(|| {
        panic!("\n\nCATALOG BUILD ERROR: 'tolerances' must be an object keyed by table name\n");
    });

    for (name, tolerance) in tolerances {
        let down = tolerance.get("down").and_then(serde_json::Value::as_f64).unwrap_or(0.0);
        let up = tolerance.get("up").and_then(serde_json::Value::as_f64).unwrap_or(0.0);
        assert!(
            (0.0..=1.0).contains(&down) && up >= 0.0,
            "\n\nCATALOG BUILD ERROR: Tolerance for '{name}' is (down: {down}, up: {up})\n\
             Expected 0 <= down <= 1 and up >= 0.\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/clothing_sizes.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
