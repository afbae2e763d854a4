//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use async_trait::async_trait;

use crate::domain::termination::CancelSignal;

/// 외부 취소 요청(시그널 등)을 구독하는 포트.
///
/// 루프는 이 포트만 보고 전역 시그널 상태에는 직접 접근하지 않는다.
#[async_trait]
pub trait CancelSource: Send {
    /// 취소 요청이 도착하면 그 종류를 반환한다. 요청이 없으면 영원히 대기한다.
    async fn cancelled(&mut self) -> CancelSignal;
}

#[async_trait]
impl<C: CancelSource + ?Sized> CancelSource for Box<C> {
    async fn cancelled(&mut self) -> CancelSignal {
        (**self).cancelled().await
    }
}
