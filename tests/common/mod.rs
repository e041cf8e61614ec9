use assert_cmd::Command;
use std::path::Path;

pub fn rlog_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rlog").unwrap();
    cmd.env("RLOG_ROOT", root);
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}
