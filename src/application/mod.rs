//! Application layer
//! 읽기-판별 루프를 정의하고 포트(추상 인터페이스)를 통해 취소 수단을 사용한다.

pub mod ports;
pub mod usecases;
