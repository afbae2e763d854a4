//! Infrastructure layer
//! OS 시그널 등 외부 취소 요청 수단과 직접 통신하는 구현체 집합.

pub mod adapters;
