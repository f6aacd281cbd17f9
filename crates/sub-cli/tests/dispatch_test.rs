#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use sub_testing::{TestWorld, fixtures};

#[test]
fn test_invoke_binds_arguments_into_environment() {
    let world = TestWorld::new().with_script("greet", fixtures::GREET);

    let result = world.run(&["greet", "Ada", "--loud"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "args: name \"Ada\" loud \"true\"\nargv: Ada --loud\n"
    );
}

#[test]
fn test_absent_flag_is_exported_as_false() {
    let world = TestWorld::new().with_script("greet", fixtures::GREET);

    let result = world.run(&["greet", "Ada"]).unwrap();

    assert!(result.stdout().starts_with("args: name \"Ada\" loud \"false\"\n"));
}

#[test]
fn test_flags_after_command_go_to_the_script() {
    let world = TestWorld::new().with_script("greet", fixtures::GREET);

    let result = world.run(&["greet", "--help"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("argv: --help"));
}

#[test]
fn test_rest_only_script_gets_raw_arguments() {
    let world = TestWorld::new().with_script("echo", fixtures::ECHO);

    let result = world.run(&["echo", "--verbose", "two words", "$HOME"]).unwrap();

    assert_eq!(result.stdout(), "--verbose two words $HOME\n");
}

#[test]
fn test_exit_code_is_relayed() {
    let world = TestWorld::new().with_script("exit", fixtures::EXIT);

    let result = world.run(&["exit", "7"]).unwrap();

    assert_eq!(result.code(), Some(7));
}

#[test]
fn test_root_and_cache_are_exported() {
    let world = TestWorld::new().with_script("env", fixtures::ENV);

    let result = world.run(&["env"]).unwrap();

    assert!(
        result
            .stdout()
            .contains(&format!("root: {}\n", world.root().display()))
    );

    #[cfg(target_os = "linux")]
    assert!(
        result
            .stdout()
            .contains(&format!("cache: {}\n", world.cache_home().join("tool").display()))
    );
}

#[test]
fn test_missing_required_argument_never_launches() {
    let world = TestWorld::new().with_script("greet", fixtures::GREET);

    world
        .command()
        .unwrap()
        .arg("greet")
        .assert()
        .code(1)
        .stdout("")
        .stderr("tool: missing required argument: name\n");
}

#[test]
fn test_unknown_command() {
    let world = TestWorld::new().with_script("greet", fixtures::GREET);

    world
        .command()
        .unwrap()
        .args(["nope", "arg"])
        .assert()
        .code(1)
        .stderr("tool: no such sub command 'nope'\n");
}

#[test]
fn test_hidden_entries_are_not_commands() {
    let world = TestWorld::new().with_script(".secret", fixtures::ECHO);

    world
        .command()
        .unwrap()
        .arg(".secret")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no such sub command '.secret'"));
}

#[test]
fn test_missing_libexec() {
    let world = TestWorld::new();
    std::fs::remove_dir(world.libexec()).unwrap();

    world
        .command()
        .unwrap()
        .assert()
        .code(1)
        .stderr("tool: libexec directory not found in root\n");
}

#[test]
fn test_non_executable_target_reports_launch_error() {
    let world = TestWorld::new().with_file("notes", fixtures::ECHO);

    world
        .command()
        .unwrap()
        .arg("notes")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("tool: "))
        .stderr(predicate::str::contains("os error"));
}

#[test]
fn test_directory_invoke_prints_help() {
    let world = TestWorld::new()
        .with_file("db/README", fixtures::README)
        .with_script("db/migrate", &fixtures::plain("Runs migrations"));

    world
        .command()
        .unwrap()
        .arg("db")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Usage: tool db [<subcommands>] [<args>]\n\nDatabase tasks\n",
        ))
        .stdout(predicate::str::contains("    migrate    Runs migrations"));
}

#[allow(deprecated)]
fn sub() -> Command {
    Command::cargo_bin("sub").unwrap()
}

#[test]
fn test_relative_root_from_executable() {
    let world = TestWorld::new().with_script("greet", fixtures::GREET);
    let shim = world.root().join("bin").join("tool");
    std::fs::create_dir_all(shim.parent().unwrap()).unwrap();
    std::fs::write(&shim, "#!/bin/sh\n").unwrap();

    sub()
        .args(["--name", "tool", "--executable"])
        .arg(&shim)
        .args(["--relative", "..", "--", "greet", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("args: name \"Ada\""));
}

#[test]
fn test_relative_absolute_root_is_a_configuration_error() {
    sub()
        .args(["--name", "tool", "--absolute", "relative/root", "--", "x"])
        .assert()
        .code(1)
        .stderr("Error: invalid configuration: --absolute path must be absolute\n");
}

#[test]
fn test_bad_dispatcher_flags_exit_one() {
    sub().args(["--absolute", "/tmp"]).assert().code(1);

    sub()
        .args(["--name", "tool", "--absolute", "/tmp", "--executable", "/bin/sh"])
        .assert()
        .code(1);
}

#[test]
fn test_version_exits_zero() {
    sub()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sub "));
}
