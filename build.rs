fn main() -> anyhow::Result<()> {
    // Host builds (library and tests) have no ESP-IDF environment to emit.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
    Ok(())
}
