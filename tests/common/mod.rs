use assert_cmd::Command;

pub fn mama_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mama").unwrap();
    cmd.env_remove("MAMA_HOME");
    cmd.env_remove("MAMA_LOG");
    cmd.env_remove("RUST_LOG");
    cmd
}
