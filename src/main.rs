//! Bean Converter 데모 애플리케이션
//!
//! 설정을 로드하고 변환 컨텍스트를 기동한 뒤 샘플 사용자를
//! 계층 간에 변환합니다.

use std::process;
use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use bean_converter::config::ConverterProperties;
use bean_converter::core::bootstrap;
use bean_converter::core::errors::ConverterError;
use bean_converter::core::registry::ConverterContext;
use bean_converter::domain::users::{UserBO, UserDO, UserVO};
use bean_converter::services::{BeanConverter, user_converter};
use bean_converter::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_mapping, print_step_complete, print_step_start,
};

fn main() {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Bean Converter 시작중...");

    if let Err(e) = run() {
        error!("❌ 변환 컨텍스트 기동 실패: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ConverterError> {
    let properties = ConverterProperties::from_env();
    let context = Arc::new(ConverterContext::new());

    print_boxed_title("🔄 INITIALIZING CONVERSION CONTEXT");
    print_step_start(1, "Scanning converters");

    let Some(summary) = bootstrap::start(&context, &properties, user_converter::beans())? else {
        info!("변환 컨텍스트가 비활성화되어 있습니다 (CONVERTER_ENABLED=false)");
        return Ok(());
    };

    let handlers = context.handlers();
    handlers.iter().for_each(print_mapping);
    print_step_complete(1, "Converters registered", handlers.len());
    print_final_summary(&summary);

    run_samples(&BeanConverter::new(context))
}

/// 샘플 사용자를 변환합니다
///
/// 등록되지 않은 쌍(`UserDO → UserVO`)은 `NoConverter`로 보고만 하고 계속 진행합니다.
fn run_samples(converter: &BeanConverter) -> Result<(), ConverterError> {
    let users = vec![
        Some(UserDO::new("1111", 34, true)),
        None,
        Some(UserDO::new("222", 55, false)),
    ];

    let business: Vec<UserBO> = converter.non_null_parallel_convert(users)?;
    info!("✅ UserDO → UserBO: {:?}", business);

    let views: Vec<UserVO> = converter.non_null_convert(business.into_iter().map(Some).collect())?;
    for view in &views {
        info!("👤 {} ({})", view.display_name, view.age);
    }

    match converter.convert::<UserDO, UserVO>(UserDO::new("3333", 20, true)) {
        Err(ConverterError::NoConverter(message)) => info!("ℹ️ {}", message),
        Err(e) => return Err(e),
        Ok(view) => info!("👤 {:?}", view),
    }

    Ok(())
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 info 레벨을 사용합니다.
///
/// ```bash
/// RUST_LOG=bean_converter=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
