fn main() -> anyhow::Result<()> {
    chat_history_stats::cli::run()
}
