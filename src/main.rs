fn main() -> anyhow::Result<()> {
    sat_planner::runner::run()
}
