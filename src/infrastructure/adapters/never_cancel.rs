//! 취소를 지원하지 않는 기본 모드용 어댑터.

use async_trait::async_trait;

use crate::application::ports::CancelSource;
use crate::domain::termination::CancelSignal;

/// 절대 완료되지 않는 취소 수단. 읽기만으로 루프를 진행한다.
pub struct NeverCancel;

#[async_trait]
impl CancelSource for NeverCancel {
    async fn cancelled(&mut self) -> CancelSignal {
        std::future::pending().await
    }
}
