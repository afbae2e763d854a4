//! Interface layer
//! CLI 입력과 실행 조립을 담당한다.

pub mod cli;
