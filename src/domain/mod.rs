//! Domain layer
//! 명령 판별 규칙과 루프 종료 사유를 외부 의존성 없이 표현한다.

pub mod command;
pub mod termination;
