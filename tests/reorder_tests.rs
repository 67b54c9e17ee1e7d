use predicates::prelude::*;
use test_env::{owned, TestEnv};

#[test]
fn test_move_swaps_tasks() {
    let env = TestEnv::with_tasks(&[("a", false), ("b", false), ("c", false)]);

    env.cmd().args(&["move", "1", "3"]).assert().success()
        .stdout(predicate::str::contains("Updated Task List"));

    assert_eq!(env.tasks(), owned(&[("c", false), ("b", false), ("a", false)]));
}

#[test]
fn test_move_same_index() {
    let env = TestEnv::with_tasks(&[("a", false), ("b", false)]);
    let before = env.raw_config();

    env.cmd().args(&["move", "2", "2"]).assert().success()
        .stdout(predicate::str::contains("No Updates Made"));

    assert_eq!(env.raw_config(), before);
}

#[test]
fn test_move_invalid_index() {
    let env = TestEnv::with_tasks(&[("a", false), ("b", false)]);

    env.cmd().args(&["move", "1", "9"]).assert().success()
        .stdout(predicate::str::contains("Please check the entered index values"));

    assert_eq!(env.tasks(), owned(&[("a", false), ("b", false)]));
}

#[test]
fn test_move_empty_list() {
    let env = TestEnv::with_tasks(&[]);

    env.cmd().args(&["move", "1", "2"]).assert().success()
        .stdout(predicate::str::contains("no tasks to move"));
}

#[test]
fn test_edit() {
    let env = TestEnv::with_tasks(&[("a", false), ("b", true)]);

    env.cmd().args(&["edit", "2", "buy", "bread"]).assert().success()
        .stdout(predicate::str::contains("Updated Task Name"));
    assert_eq!(env.tasks(), owned(&[("a", false), ("buy bread", true)]));

    env.cmd().args(&["edit", "2", "buy bread"]).assert().success()
        .stdout(predicate::str::contains("No Updates Made"));
}

#[test]
fn test_edit_errors() {
    let env = TestEnv::with_tasks(&[]);
    env.cmd().args(&["edit", "1", "x"]).assert().success()
        .stdout(predicate::str::contains("no tasks to edit"));

    let env = TestEnv::with_tasks(&[("a", false)]);
    env.cmd().args(&["edit", "3", "x"]).assert().success()
        .stdout(predicate::str::contains("correct number to edit"));
    env.cmd().args(&["edit", "1", ""]).assert().success()
        .stdout(predicate::str::contains("Please enter a valid name"));
    assert_eq!(env.tasks(), owned(&[("a", false)]));
}

#[test]
fn test_clean_twice() {
    let env = TestEnv::with_tasks(&[("A", true), ("B", false)]);

    env.cmd().args(&["clean"]).assert().success()
        .stdout(predicate::str::contains("Updated Task List"));
    assert_eq!(env.tasks(), owned(&[("B", false)]));

    let before = env.raw_config();
    env.cmd().args(&["clean"]).assert().success()
        .stdout(predicate::str::contains("No Updates Made"));
    assert_eq!(env.raw_config(), before);
}
