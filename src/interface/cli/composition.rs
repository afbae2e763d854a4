//! 애플리케이션 조립(composition root) 모듈.

use anyhow::{Context, Result};
use tokio::io::{BufReader, Stdin, Stdout};

use crate::application::ports::CancelSource;
use crate::application::usecases::read_loop::ReadLoop;
use crate::infrastructure::adapters::{NeverCancel, OsSignalSource};
use crate::interface::cli::command::RunOptions;

/// 표준 입출력에 연결된 루프.
pub type StdioLoop = ReadLoop<BufReader<Stdin>, Stdout, Box<dyn CancelSource>>;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    options: RunOptions,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(RunOptions::default())
    }
}

impl AppComposition {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// 선택된 모드에 맞는 취소 수단을 만든다. 시그널 구독은 여기서 한 번만 등록된다.
    pub fn cancel_source(&self) -> Result<Box<dyn CancelSource>> {
        if !self.options.cancel_on_signal {
            return Ok(Box::new(NeverCancel));
        }
        let source = OsSignalSource::register().context("failed to register signal handlers")?;
        Ok(Box::new(source))
    }

    /// stdin/stdout에 연결된 루프를 생성한다.
    pub fn stdio_loop(&self) -> Result<StdioLoop> {
        Ok(ReadLoop::new(
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            self.cancel_source()?,
        ))
    }
}
