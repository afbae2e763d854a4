//! 입력 한 줄을 명령으로 판별하는 규칙.

/// 매 반복마다 출력하는 프롬프트(개행 없음).
pub const PROMPT: &str = "amnesia> ";

/// 루프를 정상 종료시키는 예약 명령.
pub const CMD_EXIT: &str = ".exit";

pub const MSG_UNKNOWN_COMMAND: &str = "unknown command";

/// 정상 종료 시 호출자가 출력하는 인사말.
pub const FAREWELL: &str = "Bye.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Unknown,
}

impl Command {
    /// 입력 줄을 그대로(trim/대소문자 변환 없이) 비교해 명령을 고른다.
    pub fn parse(line: &str) -> Self {
        if line == CMD_EXIT {
            Command::Exit
        } else {
            Command::Unknown
        }
    }
}

/// 줄 끝의 `\n` 또는 `\r\n` 하나만 제거한다.
pub fn strip_line_break(raw: &str) -> &str {
    let Some(line) = raw.strip_suffix('\n') else {
        return raw;
    };
    line.strip_suffix('\r').unwrap_or(line)
}
