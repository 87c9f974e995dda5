use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

/// Groceries Aug-02, dining Aug-11, dining Aug-24, payment Aug-28, rent Sep-01,
/// added out of order
fn seed(dir: &TempDir) {
    let rows = [
        ["2025-09-01", "rent", "1450", "September rent"],
        ["2025-08-24", "dining", "41.00", "Birthday dinner"],
        ["2025-08-02", "groceries", "54.20", "Market"],
        ["2025-08-28", "payment", "120", "Card payment"],
        ["2025-08-11", "DINING", "23.75", "Ramen"],
    ];
    for [date, category, amount, description] in rows {
        expenses(dir)
            .args(["add", date, category, amount, "-d", description])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Added expense:"));
    }
}

#[test]
fn test_list_is_sorted_with_total() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "1\t| 2025-08-02\tGroceries\t$54.20\tMarket\n\
             2\t| 2025-08-11\tDining\t$23.75\tRamen\n\
             3\t| 2025-08-24\tDining\t$41.00\tBirthday dinner\n\
             4\t| 2025-08-28\tPayment\t$120.00\tCard payment\n\
             5\t| 2025-09-01\tRent\t$1,450.00\tSeptember rent\n",
        ))
        .stdout(predicate::str::contains("Total: $1,688.95"))
        .stdout(predicate::str::contains("Count: 5 expenses"));
}

#[test]
fn test_empty_list() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("No expenses found.\n");
}

#[test]
fn test_duplicate_add_is_reported_not_stored() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["add", "2025-01-05", "groceries", "10", "-d", "eggs"])
        .assert()
        .success();

    expenses(&dir)
        .args(["add", "2025-01-05", "groceries", "10.00", "-d", "eggs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already recorded"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Count: 1 expense\n"));
}

#[test]
fn test_chained_filters() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args([
            "list",
            "--category",
            "dining",
            "--from",
            "2025-08-01",
            "--to",
            "2025-08-31",
            "--limit",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "1\t| 2025-08-11\tDining\t$23.75\tRamen\n",
        ))
        .stdout(predicate::str::contains("Count: 1 expense\n"));
}

#[test]
fn test_single_day_range() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args(["list", "--from", "2025-08-24", "--to", "2025-08-24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Birthday dinner"))
        .stdout(predicate::str::contains("Count: 1 expense\n"));
}

#[test]
fn test_reversed_range_fails() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args(["list", "--from", "2025-09-01", "--to", "2025-08-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_negative_limit_rejected() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args(["list", "--limit", "-1"])
        .assert()
        .failure();
}

#[test]
fn test_negative_amount_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2025-01-05", "other", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_unknown_category_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "2025-01-05", "snacks", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: snacks"));
}

#[test]
fn test_edit_date_reorders() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    // move the groceries run after rent
    expenses(&dir)
        .args(["edit", "1", "--date", "2025-09-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated expense: 2025-09-02\tGroceries"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "1\t| 2025-08-11\tDining\t$23.75\tRamen\n",
        ))
        .stdout(predicate::str::contains(
            "5\t| 2025-09-02\tGroceries\t$54.20\tMarket\n",
        ));
}

#[test]
fn test_edit_without_fields_fails() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args(["edit", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to edit"));
}

#[test]
fn test_edit_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args(["edit", "9", "--amount", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 9"));
}

#[test]
fn test_delete_requires_force() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));

    expenses(&dir)
        .args(["delete", "2", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: 2025-08-11\tDining"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ramen").not())
        .stdout(predicate::str::contains("Count: 4 expenses"));
}

#[test]
fn test_saved_file_is_pretty_json() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["add", "2025-01-05", "groceries", "12.5"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(dir.path().join("data").join("expenses.json")).unwrap();
    assert_eq!(
        saved,
        r#"[
  {
    "date": "2025-01-05",
    "category": "GROCERIES",
    "amount": 12.50,
    "description": ""
  }
]"#
    );
}

#[test]
fn test_hand_written_file_with_duplicates_loads() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(
        data_dir.join("expenses.json"),
        r#"[
            {"date": "2025-02-01", "category": "UTILITIES", "amount": 80.10, "description": null},
            {"date": "2025-01-15", "category": "HEALTH", "amount": 25, "description": "Pharmacy"},
            {"date": "2025-02-01", "category": "UTILITIES", "amount": 80.10}
        ]"#,
    )
    .unwrap();

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "1\t| 2025-01-15\tHealth\t$25.00\tPharmacy\n\
             2\t| 2025-02-01\tUtilities\t$80.10\t\n",
        ))
        .stdout(predicate::str::contains("Count: 2 expenses"));
}

#[test]
fn test_malformed_file_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(
        data_dir.join("expenses.json"),
        r#"[{"date": "2025-02-30", "category": "RENT", "amount": 1}]"#,
    )
    .unwrap();

    expenses(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args(["export", "--category", "dining"])
        .assert()
        .success()
        .stdout(
            "Date,Category,Amount,Description\n\
             2025-08-11,DINING,23.75,Ramen\n\
             2025-08-24,DINING,41.00,Birthday dinner\n",
        );
}

#[test]
fn test_export_json_round_trips_into_fresh_store() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    let export_path = dir.path().join("export.json");

    expenses(&dir)
        .args(["export", "--format", "json", "--output"])
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 expenses"));

    let fresh = TempDir::new().unwrap();
    let fresh_data = fresh.path().join("data");
    std::fs::create_dir_all(&fresh_data).unwrap();
    std::fs::copy(&export_path, fresh_data.join("expenses.json")).unwrap();

    let original = expenses(&dir).arg("list").output().unwrap();
    let reloaded = expenses(&fresh).arg("list").output().unwrap();
    assert!(reloaded.status.success());
    assert_eq!(original.stdout, reloaded.stdout);
}

#[test]
fn test_categories_menu() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Groceries"))
        .stdout(predicate::str::contains(" 11. Payment"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.json (not created yet)"));
}

#[test]
fn test_first_run_writes_editable_settings() {
    let dir = TempDir::new().unwrap();

    expenses(&dir).arg("list").assert().success();
    let settings_path = dir.path().join("config.json");
    assert!(settings_path.exists());

    let edited = std::fs::read_to_string(&settings_path)
        .unwrap()
        .replace("\"$\"", "\"€\"");
    std::fs::write(&settings_path, edited).unwrap();

    expenses(&dir)
        .args(["add", "2025-01-05", "dining", "9.5"])
        .assert()
        .success();
    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dining\t€9.50"));
}

#[test]
fn test_mutation_keeps_precise_amounts_on_disk() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(
        data_dir.join("expenses.json"),
        r#"[
        {"date": "2025-01-01", "category": "OTHER", "amount": 0.123456789012345678901234567891234}
        ]"#,
    )
    .unwrap();

    expenses(&dir)
        .args(["add", "2025-01-02", "rent", "900"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(data_dir.join("expenses.json")).unwrap();
    assert!(saved.contains("\"amount\": 0.123456789012345678901234567891234,"));
}
