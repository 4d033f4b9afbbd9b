use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn missing_config_lists_only_official() {
    let env = TestEnv::new();

    env.cmd()
        .args(["registry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* official"))
        .stdout(predicate::str::contains(
            "https://github.com/buildpacks/registry-index",
        ));
}

#[test]
fn empty_config_file_is_valid() {
    let env = TestEnv::new();
    env.write_config("");

    env.cmd()
        .args(["registry", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("official"));
}

#[test]
fn malformed_config_fails_to_load() {
    let env = TestEnv::new();
    env.write_config("registries = [[[");

    env.cmd()
        .args(["registry", "remove", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));

    assert_eq!(env.read_config(), "registries = [[[");
}

#[test]
fn dangling_default_is_rejected() {
    let env = TestEnv::new();
    env.write_config("default-registry-name = \"ghost\"\n");

    env.cmd()
        .args(["registry", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("default registry 'ghost' is not configured"));
}

#[test]
fn config_path_from_env() {
    let env = TestEnv::with_sample_config();

    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("packreg"));
    cmd.env("PACKREG_CONFIG", env.config_path())
        .args(["registry", "remove", "elbandito-registry"])
        .assert()
        .success();

    assert_eq!(env.registries().1, ["buildpack-registry"]);
}

#[test]
fn pack_home_locates_config() {
    let env = TestEnv::with_sample_config();

    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("packreg"));
    cmd.env_remove("PACKREG_CONFIG")
        .env("PACK_HOME", env.home.path())
        .args(["registry", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buildpack-registry"));
}

#[test]
fn save_leaves_no_temp_file() {
    let env = TestEnv::with_sample_config();

    env.cmd()
        .args(["registry", "remove", "buildpack-registry"])
        .assert()
        .success();

    assert!(!env.home.path().join("config.toml.tmp").exists());
}
