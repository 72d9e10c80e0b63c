fn main() -> anyhow::Result<()> {
    missionloc::cli::run_cli()
}
