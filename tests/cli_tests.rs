//! CLI interface tests
//!
//! Runs the `recipe-store` binary against a sample catalog. Every command
//! runs inside a temp dir so no stray `.recipe-store.toml` is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::fixtures;

/// Helper to get the recipe-store binary command
fn get_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_recipe-store"))
}

fn parse_ids(stdout: &[u8]) -> Vec<u64> {
    let value: serde_json::Value =
        serde_json::from_slice(stdout).expect("JSON output should be valid JSON");
    ids_in(&value)
}

fn ids_in(value: &serde_json::Value) -> Vec<u64> {
    value
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|recipe| recipe["id"].as_u64().expect("Recipe id should be a number"))
        .collect()
}

fn parse_recommended_ids(stdout: &[u8]) -> Vec<u64> {
    let value: serde_json::Value =
        serde_json::from_slice(stdout).expect("JSON output should be valid JSON");
    ids_in(&value["recommendations"])
}

#[test]
fn test_cli_help_flag_displays_usage_information() {
    get_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("recipe collection"));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    get_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("recipe-store"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    let output = get_bin()
        .args(["list", "--search", "COOKIE", "--json"])
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    assert_eq!(parse_ids(&output.stdout), vec![fixtures::COOKIES]);
}

#[test]
fn test_list_search_matches_ingredients_and_tags() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    let output = get_bin()
        .args(["list", "-s", "french", "--json"])
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    assert_eq!(
        parse_ids(&output.stdout),
        vec![fixtures::BOURGUIGNON, fixtures::LEMON_TART]
    );
}

#[test]
fn test_list_quick_filter_excludes_longer_recipes() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    let output = get_bin()
        .args(["list", "--time", "quick", "--json"])
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let ids = parse_ids(&output.stdout);
    assert!(!ids.contains(&fixtures::CARBONARA));
    assert_eq!(ids, vec![fixtures::COOKIES]);
}

#[test]
fn test_list_combines_difficulty_and_category() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    let output = get_bin()
        .args(["list", "-d", "hard", "-c", "dessert", "--json"])
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    assert_eq!(parse_ids(&output.stdout), vec![fixtures::LEMON_TART]);
}

#[test]
fn test_list_human_output_shows_titles() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    get_bin()
        .args(["--no-emoji", "list"])
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Spaghetti Carbonara"))
        .stdout(predicate::str::contains("Green Salad"));
}

#[test]
fn test_list_rejects_unknown_time_bucket() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    get_bin()
        .args(["list", "--time", "instant"])
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .assert()
        .code(64)
        .stderr(predicate::str::contains("instant"));
}

#[test]
fn test_missing_catalog_exits_with_no_input_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");

    get_bin()
        .args(["list", "missing.json"])
        .current_dir(temp_dir.path())
        .assert()
        .code(66);
}

#[test]
fn test_malformed_catalog_exits_with_data_error_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let catalog = temp_dir.path().join("broken.json");
    fs::write(&catalog, "{ not json").expect("Failed to write test file");

    get_bin()
        .arg("list")
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .assert()
        .code(65);
}

#[test]
fn test_recommend_without_favorites_returns_first_four() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    let output = get_bin()
        .args(["recommend", "--json"])
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    assert_eq!(
        parse_recommended_ids(&output.stdout),
        vec![
            fixtures::COOKIES,
            fixtures::CARBONARA,
            fixtures::BROWNIES,
            fixtures::BOURGUIGNON,
        ]
    );
}

#[test]
fn test_recommend_excludes_favorites_and_ranks_similar_first() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    let output = get_bin()
        .args(["recommend", "--seed", "7", "--json", "--favorite"])
        .arg(fixtures::COOKIES.to_string())
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let ids = parse_recommended_ids(&output.stdout);
    assert!(!ids.contains(&fixtures::COOKIES));
    assert_eq!(ids.len(), 5);
    // Brownies lead by more than the maximum jitter
    assert_eq!(ids[0], fixtures::BROWNIES);
}

#[test]
fn test_recommend_explains_matches_and_preferences() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    let output = get_bin()
        .args(["recommend", "--seed", "7", "--json", "-f"])
        .arg(fixtures::COOKIES.to_string())
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output should be valid JSON");
    let brownies = &value["recommendations"][0];
    assert_eq!(brownies["id"], fixtures::BROWNIES);
    assert_eq!(brownies["matchReasons"][0], "You like dessert recipes");
    assert_eq!(
        brownies["matchReasons"][1],
        "Easy difficulty matches your preference"
    );
    assert_eq!(value["insights"][0], "You love dessert recipes");
    assert_eq!(value["insights"][2], "You enjoy baking, sweet recipes");
}

#[test]
fn test_recommend_human_output_lists_reasons() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    get_bin()
        .args(["--no-emoji", "recommend", "--seed", "7", "-f"])
        .arg(fixtures::COOKIES.to_string())
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fudgy Brownies"))
        .stdout(predicate::str::contains("You like dessert recipes"))
        .stdout(predicate::str::contains("Easy difficulty suits you"));
}

#[test]
fn test_recommend_with_seed_is_reproducible() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    let run = || {
        get_bin()
            .args(["recommend", "--seed", "42", "--json", "-f"])
            .arg(fixtures::CARBONARA.to_string())
            .arg(&catalog)
            .current_dir(temp_dir.path())
            .output()
            .expect("Command execution failed")
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_recommend_unknown_favorite_fails() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    get_bin()
        .args(["recommend", "--favorite", "999"])
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("999"));
}

#[test]
fn test_recommend_respects_config_max_results() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");
    fs::write(
        temp_dir.path().join(".recipe-store.toml"),
        "[recommendations]\nmax-results = 2\n",
    )
    .expect("Failed to write test file");

    let output = get_bin()
        .args(["recommend", "--json", "-f"])
        .arg(fixtures::COOKIES.to_string())
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    assert_eq!(parse_recommended_ids(&output.stdout).len(), 2);
}

#[test]
fn test_invalid_config_exits_with_config_code() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");
    fs::write(
        temp_dir.path().join(".recipe-store.toml"),
        "[recommendations]\njitter-max = -1.0\n",
    )
    .expect("Failed to write test file");

    get_bin()
        .arg("recommend")
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .assert()
        .code(78);
}

#[test]
fn test_malformed_config_exits_with_config_code() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");
    fs::write(
        temp_dir.path().join(".recipe-store.toml"),
        "[recommendations]\nmax-results = \"six\"\n",
    )
    .expect("Failed to write test file");

    get_bin()
        .arg("recommend")
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .assert()
        .code(78)
        .stderr(predicate::str::contains(".recipe-store.toml"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_favorites_json_reports_learned_preferences() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    let output = get_bin()
        .args(["favorites", "--json", "-f"])
        .arg(fixtures::BROWNIES.to_string())
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output should be valid JSON");
    assert_eq!(value["favorites"][0]["id"], fixtures::BROWNIES);
    assert_eq!(value["preferences"]["categories"]["dessert"], 1);
    assert_eq!(value["preferences"]["tags"]["chocolate"], 1);
}

#[test]
fn test_stats_reports_top_favorite_category() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    let output = get_bin()
        .args(["stats", "--json", "-f"])
        .arg(fixtures::COOKIES.to_string())
        .arg("-f")
        .arg(fixtures::CARBONARA.to_string())
        .arg("-f")
        .arg(fixtures::LEMON_TART.to_string())
        .arg(&catalog)
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output should be valid JSON");
    assert_eq!(value["totalRecipes"], 6);
    assert_eq!(value["topCategory"]["key"], "dessert");
    assert_eq!(value["favorites"], 3);
    assert_eq!(value["topCategory"]["count"], 2);
    assert_eq!(value["topTags"][0]["key"], "baking");
    assert_eq!(value["topTags"][0]["count"], 2);
}

#[test]
fn test_show_prints_recipe_details() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    get_bin()
        .arg("show")
        .arg(&catalog)
        .arg(fixtures::CARBONARA.to_string())
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Spaghetti Carbonara"))
        .stdout(predicate::str::contains("guanciale"));
}

#[test]
fn test_show_with_malformed_id_exits_with_data_error_code() {
    let (temp_dir, catalog) = fixtures::create_sample_catalog().expect("Failed to create catalog");

    get_bin()
        .arg("show")
        .arg(&catalog)
        .arg("abc")
        .current_dir(temp_dir.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn test_init_creates_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");

    get_bin()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .recipe-store.toml"));

    let content = fs::read_to_string(temp_dir.path().join(".recipe-store.toml"))
        .expect("Failed to read file contents");
    assert!(content.contains("max-results"));
    assert!(content.contains("time-bucket"));
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let config_path = temp_dir.path().join(".recipe-store.toml");
    fs::write(&config_path, "# hand tuned\n").expect("Failed to write test file");

    get_bin()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let content = fs::read_to_string(&config_path).expect("Failed to read file contents");
    assert_eq!(content, "# hand tuned\n");
}

#[test]
fn test_completions_generates_bash_script() {
    get_bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recipe-store"));
}
