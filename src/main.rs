//! `amnesia` 바이너리 진입점.

use amnesia::interface::cli::Cli;

#[tokio::main]
async fn main() {
    // stdout은 쉘 출력 전용이므로 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let options = Cli::parse_options();

    let reason = match amnesia::run(options).await {
        Ok(reason) => reason,
        Err(err) => {
            println!("{err:#}");
            std::process::exit(1);
        }
    };

    println!("{}", reason.final_message());
    // 남아 있는 stdin 읽기를 기다리지 않고 바로 종료한다.
    std::process::exit(reason.exit_code());
}
