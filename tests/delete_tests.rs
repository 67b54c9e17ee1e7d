use predicates::prelude::*;
use test_env::{owned, TestEnv};

#[test]
fn test_delete_middle_task() {
    let env = TestEnv::with_tasks(&[("a", false), ("b", true), ("c", false)]);

    env.cmd().args(&["delete", "2"]).assert().success()
        .stdout(predicate::str::contains("Deleted 'b'"))
        .stdout(predicate::str::contains("Number"));

    assert_eq!(env.tasks(), owned(&[("a", false), ("c", false)]));
}

#[test]
fn test_delete_forces_table_when_all_done() {
    let env = TestEnv::with_tasks(&[("a", true), ("b", true)]);

    env.cmd().args(&["delete", "1"]).assert().success()
        .stdout(predicate::str::contains("Deleted 'a'"))
        .stdout(predicate::str::contains("Number"))
        .stdout(predicate::str::contains("Looking good, no pending tasks"));

    assert_eq!(env.tasks(), owned(&[("b", true)]));
}

#[test]
fn test_delete_from_empty_list() {
    let env = TestEnv::with_tasks(&[]);

    env.cmd().args(&["delete", "1"]).assert().success()
        .stdout(predicate::str::contains("there are no tasks to delete"));
}

#[test]
fn test_delete_out_of_range() {
    let env = TestEnv::with_tasks(&[("a", false)]);
    let before = env.raw_config();

    env.cmd().args(&["delete", "4"]).assert().success()
        .stdout(predicate::str::contains("correct number to delete"));

    assert_eq!(env.raw_config(), before);
}
