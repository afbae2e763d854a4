//! amnesia library root.
//! 프롬프트 출력, 한 줄 읽기, `.exit` 판별을 반복하는 최소 쉘 루프를 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use anyhow::Result;

use domain::termination::TerminationReason;
use interface::cli::{AppComposition, RunOptions};

/// 표준 입출력으로 루프를 돌리고 종료 사유를 돌려준다.
///
/// 루프 바깥의 준비 단계(시그널 등록 등)가 실패하면 `Err`를 반환한다.
pub async fn run(options: RunOptions) -> Result<TerminationReason> {
    let mut read_loop = AppComposition::new(options).stdio_loop()?;
    let reason = match read_loop.run().await {
        Ok(never) => match never {},
        Err(reason) => reason,
    };
    Ok(reason)
}
