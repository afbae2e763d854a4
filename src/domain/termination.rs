//! 루프 종료 사유(정상 종료 센티널, I/O 실패, 시그널 중단).

use std::fmt;
use std::io;

use thiserror::Error;

use crate::domain::command::FAREWELL;

/// 입력 대기 중 관측한 외부 취소 요청 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for CancelSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelSignal::Interrupt => f.write_str("interrupt"),
            CancelSignal::Terminate => f.write_str("terminated"),
        }
    }
}

/// 루프가 끝난 이유. 호출자는 이를 보고 종료 코드와 마지막 메시지를 정한다.
#[derive(Debug, Error)]
pub enum TerminationReason {
    /// `.exit` 입력에 의한 정상 종료(실패가 아님).
    #[error("exit")]
    RequestedExit,
    #[error("{0}")]
    ReadFailure(#[source] io::Error),
    #[error("{0}")]
    WriteFailure(#[source] io::Error),
    #[error("received a signal {0}, exiting")]
    Interrupted(CancelSignal),
}

impl TerminationReason {
    /// 입력 스트림이 끝난 경우의 읽기 실패.
    pub fn end_of_input() -> Self {
        TerminationReason::ReadFailure(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"))
    }

    pub fn is_requested_exit(&self) -> bool {
        matches!(self, TerminationReason::RequestedExit)
    }

    /// 루프가 끝난 뒤 호출자가 stdout에 남기는 마지막 한 줄.
    pub fn final_message(&self) -> String {
        if self.is_requested_exit() {
            FAREWELL.to_string()
        } else {
            self.to_string()
        }
    }

    /// 프로세스 종료 코드: 센티널만 0, 나머지는 모두 1.
    pub fn exit_code(&self) -> i32 {
        if self.is_requested_exit() { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_requested_exit_maps_to_zero() {
        assert_eq!(TerminationReason::RequestedExit.exit_code(), 0);
        assert_eq!(TerminationReason::end_of_input().exit_code(), 1);
        assert_eq!(
            TerminationReason::Interrupted(CancelSignal::Terminate).exit_code(),
            1
        );
        let broken = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe");
        assert_eq!(TerminationReason::WriteFailure(broken).exit_code(), 1);
    }

    #[test]
    fn final_message_is_farewell_only_on_exit() {
        assert_eq!(TerminationReason::RequestedExit.final_message(), "Bye.");
        assert_eq!(TerminationReason::end_of_input().final_message(), "EOF");
        assert_eq!(
            TerminationReason::Interrupted(CancelSignal::Interrupt).final_message(),
            "received a signal interrupt, exiting"
        );
        let broken = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe");
        assert_eq!(
            TerminationReason::WriteFailure(broken).final_message(),
            "broken pipe"
        );
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(TerminationReason::end_of_input().to_string(), "EOF");
        assert_eq!(
            TerminationReason::Interrupted(CancelSignal::Interrupt).to_string(),
            "received a signal interrupt, exiting"
        );
        assert_eq!(
            TerminationReason::Interrupted(CancelSignal::Terminate).to_string(),
            "received a signal terminated, exiting"
        );
    }
}
