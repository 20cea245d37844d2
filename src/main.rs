fn main() -> anyhow::Result<()> {
    reading_companion_lib::run()
}
