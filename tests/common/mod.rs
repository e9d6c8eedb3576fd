use assert_cmd::Command;
use std::path::Path;

pub fn todo_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("simpletodo").unwrap();
    cmd.env("SIMPLETODO_HOME", home);
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}
