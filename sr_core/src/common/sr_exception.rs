use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Error codes for the support/resistance pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Input errors (100-199)
    #[strum(serialize = "_INPUT_ERR_BEGIN")]
    InputErrBegin = 100,
    #[strum(serialize = "INVALID_NUMBER")]
    InvalidNumber = 101,
    #[strum(serialize = "NO_DATA")]
    NoData = 102,
    #[strum(serialize = "_INPUT_ERR_END")]
    InputErrEnd = 199,

    // Config errors (200-299)
    #[strum(serialize = "_CONFIG_ERR_BEGIN")]
    ConfigErrBegin = 200,
    #[strum(serialize = "PARA_ERROR")]
    ParaError = 201,
    #[strum(serialize = "CONFIG_ERROR")]
    ConfigError = 202,
    #[strum(serialize = "_CONFIG_ERR_END")]
    ConfigErrEnd = 299,
}

impl ErrCode {
    pub fn is_input_err(&self) -> bool {
        let code = *self as i32;
        code > Self::InputErrBegin as i32 && code < Self::InputErrEnd as i32
    }

    pub fn is_config_err(&self) -> bool {
        let code = *self as i32;
        code > Self::ConfigErrBegin as i32 && code < Self::ConfigErrEnd as i32
    }
}

#[derive(Debug, Error)]
#[error("{errcode}: {msg}")]
pub struct SrException {
    pub errcode: ErrCode,
    pub msg: String,
}

impl SrException {
    pub fn new(message: impl Into<String>, code: ErrCode) -> Self {
        Self {
            errcode: code,
            msg: message.into(),
        }
    }

    pub fn is_input_err(&self) -> bool {
        self.errcode.is_input_err()
    }

    pub fn is_config_err(&self) -> bool {
        self.errcode.is_config_err()
    }
}
