//! 애플리케이션 유스케이스 묶음.

pub mod read_loop;
