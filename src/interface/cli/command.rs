//! CLI 인자 파싱 모듈.

use clap::Parser;

/// 플래그 없이 실행하면 시그널로 중단 가능한 기본 동작을 한다.
/// `--no-signals`는 시그널 경주 없이 읽기만 하는 모드를 고르는 추가 옵션이다.
#[derive(Debug, Parser)]
#[command(name = "amnesia")]
#[command(version, about = "A minimal line-oriented command shell")]
pub struct Cli {
    /// Read input without racing it against SIGINT/SIGTERM
    #[arg(long)]
    no_signals: bool,
}

/// 루프 실행 방식 선택값.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub cancel_on_signal: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            cancel_on_signal: true,
        }
    }
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            cancel_on_signal: !cli.no_signals,
        }
    }
}

impl Cli {
    pub fn parse_options() -> RunOptions {
        Cli::parse().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_enabled_by_default() {
        let cli = Cli::try_parse_from(["amnesia"]).unwrap();
        assert_eq!(RunOptions::from(cli), RunOptions::default());
    }

    #[test]
    fn no_signals_flag_selects_basic_mode() {
        let cli = Cli::try_parse_from(["amnesia", "--no-signals"]).unwrap();
        assert!(!RunOptions::from(cli).cancel_on_signal);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["amnesia", "extra"]).is_err());
    }
}
