use crate::config::Config;
use crate::conversion;
use crate::piping::{FittingKind, PipeFlowInput};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 물리적으로 잘못된 입력
    InvalidInput(&'static str),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 계산 호출 전에 입력 불변식을 검증한다.
///
/// 코어 계산은 입력을 검증하지 않으므로 호출자가 여기서 걸러야 한다.
pub fn validate_input(input: &PipeFlowInput) -> Result<(), AppError> {
    if input.diameter_in <= 0.0 {
        return Err(AppError::InvalidInput("내경은 0보다 커야 합니다."));
    }
    if input.flow_gpm < 0.0 {
        return Err(AppError::InvalidInput("유량은 음수일 수 없습니다."));
    }
    if input.viscosity_cp <= 0.0 {
        return Err(AppError::InvalidInput("점도는 0보다 커야 합니다."));
    }
    if input.specific_gravity <= 0.0 {
        return Err(AppError::InvalidInput("비중은 0보다 커야 합니다."));
    }
    if input.straight_length_ft < 0.0 {
        return Err(AppError::InvalidInput("직관 길이는 음수일 수 없습니다."));
    }
    for kind in FittingKind::ALL {
        if input.fittings.count(kind) < 0.0 {
            return Err(AppError::InvalidInput("피팅 개수는 음수일 수 없습니다."));
        }
    }
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::HeadLoss => ui_cli::handle_head_loss(config)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
