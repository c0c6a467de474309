use sqlite_link::LinkConfig;

fn main() {
    for var in LinkConfig::env_vars() {
        println!("cargo::rerun-if-env-changed={var}");
    }

    let directives = match sqlite_link::resolve_from_env(|name: &str| std::env::var_os(name)) {
        Ok(directives) => directives,
        Err(err) => panic!(
            "
failed to configure sqlite linking: {err}
"
        ),
    };

    for line in directives.cargo_instructions() {
        println!("{line}");
    }
}
