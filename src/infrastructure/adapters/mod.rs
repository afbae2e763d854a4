//! `CancelSource` 포트를 실제 취소 수단으로 연결하는 어댑터 계층.

mod channel_cancel;
mod never_cancel;
mod os_signal;

pub use channel_cancel::{CancelHandle, ChannelCancelSource};
pub use never_cancel::NeverCancel;
pub use os_signal::OsSignalSource;
