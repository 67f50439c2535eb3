//! Shared utilities for integration tests.
//!
//! Provides a serialised `logtest` logger fixture and fixture payloads so
//! each test binary does not redefine them.

// Items in this shared module may not be used by all test binaries that import it.
#![allow(
    dead_code,
    reason = "shared test utilities are not used by all test binaries"
)]

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use logtest::Logger;
use rstest::fixture;

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Final part of a four-part UCS2 message with 16-bit reference `0x7539`.
pub const HEBREW_LAST_PART: &str = "0608047539040405d105d105e805db05d4002005d905d505e405d9002005e405d9\
05e005e005e105d905dd002005d105e2002205de";

pub const HEBREW_LAST_TEXT: &str = "בברכה יופי פיננסים בע\"מ";

/// Build a GSM part with an 8-bit reference carrying ASCII-range `text`.
pub fn gsm_hex(reference: u8, total: u8, current: u8, text: &str) -> String {
    let payload: String = text.bytes().map(|b| format!("{b:02X}")).collect();
    format!("050003{reference:02X}{total:02X}{current:02X}{payload}")
}

/// Handle to the global logger with exclusive access.
///
/// This guard ensures tests do not interfere with each other's log capture by
/// serialising access to a [`logtest::Logger`].
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Acquire the global [`Logger`] instance.
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        let guard = logger.lock().unwrap_or_else(PoisonError::into_inner);

        Self { guard }
    }

    /// Discard any previously captured log records.
    pub fn clear(&mut self) { while self.guard.pop().is_some() {} }
}

impl std::ops::Deref for LoggerHandle {
    type Target = Logger;

    fn deref(&self) -> &Self::Target { &self.guard }
}

impl std::ops::DerefMut for LoggerHandle {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.guard }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }
