//! 프로세스 시그널(SIGINT/SIGTERM) 구독 어댑터.

use std::io;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::CancelSource;
use crate::domain::termination::CancelSignal;

/// 생성 시점에 인터럽트/종료 시그널 구독을 한 번 등록한다.
#[cfg(unix)]
pub struct OsSignalSource {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl OsSignalSource {
    /// tokio 런타임 안에서 호출해야 한다.
    pub fn register() -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        let source = Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        };
        debug!("registered SIGINT/SIGTERM handlers");
        Ok(source)
    }
}

#[cfg(unix)]
#[async_trait]
impl CancelSource for OsSignalSource {
    async fn cancelled(&mut self) -> CancelSignal {
        tokio::select! {
            _ = self.interrupt.recv() => CancelSignal::Interrupt,
            _ = self.terminate.recv() => CancelSignal::Terminate,
        }
    }
}

/// unix 이외 환경에서는 Ctrl-C만 인터럽트로 취급한다.
#[cfg(not(unix))]
pub struct OsSignalSource;

#[cfg(not(unix))]
impl OsSignalSource {
    pub fn register() -> io::Result<Self> {
        debug!("using ctrl-c as the only cancellation signal");
        Ok(Self)
    }
}

#[cfg(not(unix))]
#[async_trait]
impl CancelSource for OsSignalSource {
    async fn cancelled(&mut self) -> CancelSignal {
        if tokio::signal::ctrl_c().await.is_err() {
            return std::future::pending().await;
        }
        CancelSignal::Interrupt
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn stays_pending_without_signals() {
        let mut source = OsSignalSource::register().unwrap();
        let waited = tokio::time::timeout(Duration::from_millis(20), source.cancelled()).await;
        assert!(waited.is_err());
    }
}
