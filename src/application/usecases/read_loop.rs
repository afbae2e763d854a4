//! 프롬프트 출력 → 한 줄 읽기 → 명령 판별을 반복하는 루프.

use std::convert::Infallible;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::application::ports::CancelSource;
use crate::domain::command::{Command, MSG_UNKNOWN_COMMAND, PROMPT, strip_line_break};
use crate::domain::termination::TerminationReason;

/// 입력/출력 스트림과 취소 수단을 독점 소유하는 읽기-판별 루프.
pub struct ReadLoop<R, W, C> {
    reader: R,
    writer: W,
    cancel: C,
}

impl<R, W, C> ReadLoop<R, W, C>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    C: CancelSource,
{
    pub fn new(reader: R, writer: W, cancel: C) -> Self {
        Self {
            reader,
            writer,
            cancel,
        }
    }

    /// 종료 사유가 생길 때까지 반복한다. 정상 종료도 `RequestedExit`로 돌려준다.
    pub async fn run(&mut self) -> Result<Infallible, TerminationReason> {
        loop {
            self.render_prompt().await?;
            let line = self.read_line().await?;
            self.handle_command(&line).await?;
        }
    }

    /// 지금까지 출력한 내용을 확인할 수 있도록 writer를 빌려준다.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    async fn render_prompt(&mut self) -> Result<(), TerminationReason> {
        self.write_flush(PROMPT.as_bytes()).await
    }

    /// 읽기와 취소 요청을 경주시킨다. 진 쪽 future는 버려질 뿐 완료를 기다리지 않는다.
    async fn read_line(&mut self) -> Result<String, TerminationReason> {
        let mut raw = Vec::new();

        let read = tokio::select! {
            read = self.reader.read_until(b'\n', &mut raw) => read,
            signal = self.cancel.cancelled() => {
                warn!(%signal, "input read interrupted");
                return Err(TerminationReason::Interrupted(signal));
            }
        };

        match read {
            Ok(0) => {
                info!("input stream closed");
                Err(TerminationReason::end_of_input())
            }
            Ok(_) => {
                let text = String::from_utf8_lossy(&raw);
                Ok(strip_line_break(&text).to_string())
            }
            Err(err) => {
                warn!(error = %err, "failed to read input");
                Err(TerminationReason::ReadFailure(err))
            }
        }
    }

    async fn handle_command(&mut self, line: &str) -> Result<(), TerminationReason> {
        match Command::parse(line) {
            Command::Exit => {
                info!("exit requested");
                Err(TerminationReason::RequestedExit)
            }
            Command::Unknown => {
                debug!(line, "unknown command");
                let message = format!("{MSG_UNKNOWN_COMMAND}\n");
                self.write_flush(message.as_bytes()).await
            }
        }
    }

    async fn write_flush(&mut self, bytes: &[u8]) -> Result<(), TerminationReason> {
        self.writer
            .write_all(bytes)
            .await
            .map_err(TerminationReason::WriteFailure)?;
        self.writer
            .flush()
            .await
            .map_err(TerminationReason::WriteFailure)
    }
}
