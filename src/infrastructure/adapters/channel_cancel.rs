//! 명시적 취소 토큰(채널 기반) 어댑터.
//! 실제 OS 시그널 없이 루프를 멈춰야 하는 테스트/임베딩 용도.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::ports::CancelSource;
use crate::domain::termination::CancelSignal;

/// 취소 요청을 보내는 쪽. 복제해서 여러 곳에 나눠 줄 수 있다.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: mpsc::UnboundedSender<CancelSignal>,
}

impl CancelHandle {
    /// 수신 측이 이미 사라졌으면 `false`.
    pub fn cancel(&self, signal: CancelSignal) -> bool {
        self.tx.send(signal).is_ok()
    }
}

/// 루프에 주입하는 수신 쪽.
pub struct ChannelCancelSource {
    rx: mpsc::UnboundedReceiver<CancelSignal>,
}

impl ChannelCancelSource {
    pub fn new() -> (Self, CancelHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, CancelHandle { tx })
    }
}

#[async_trait]
impl CancelSource for ChannelCancelSource {
    async fn cancelled(&mut self) -> CancelSignal {
        match self.rx.recv().await {
            Some(signal) => signal,
            // 핸들이 모두 drop되면 더 이상 취소될 일이 없다.
            None => std::future::pending().await,
        }
    }
}
