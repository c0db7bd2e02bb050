fn main() -> anyhow::Result<()> {
    create_virtual_console_app::run()
}
