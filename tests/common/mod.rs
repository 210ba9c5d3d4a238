use std::path::Path;
use std::process::Command;

pub fn base_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quotebook"));
    cmd.env_remove("QUOTES_CATALOG")
        .env_remove("QUOTES_SEED")
        .env_remove("QUOTES_DEFAULT_LIMIT")
        .env_remove("QUOTES_LOG_FILE")
        .env("DOTENV_PATH", "/nonexistent/.env")
        .env("RUST_LOG", "warn");
    cmd
}

pub fn catalog_cmd(catalog: &Path) -> Command {
    let mut cmd = base_cmd();
    cmd.arg("--catalog").arg(catalog);
    cmd
}

pub fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
