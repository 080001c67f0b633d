use clap::Parser;
use team_balancer::cli::{Args, is_config_operation};
use team_balancer::commands::{
    handle_balance_command, handle_config_update_command, handle_list_config_command,
    validate_args,
};
use team_balancer::config::Config;
use team_balancer::error::AppError;
use team_balancer::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let (log_file_path, guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if let Err(e) = handle_balance_command(&args, &config).await {
        tracing::error!("Balancing failed: {e}");
        if e.is_input_error() {
            eprintln!("{e}");
            drop(guard);
            std::process::exit(2);
        }
        return Err(e);
    }

    Ok(())
}
